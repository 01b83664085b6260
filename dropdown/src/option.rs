//! Selectable options and their identity.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

/// The value carried by an option: text or a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Text(s) => f.write_str(s),
            OptionValue::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{}", *n as i64),
            OptionValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        OptionValue::Number(n.into())
    }
}

impl From<f64> for OptionValue {
    fn from(n: f64) -> Self {
        OptionValue::Number(n)
    }
}

/// One entry of a select's option list.
///
/// Options are immutable and shared as `Arc<SelectOption>`. A selection
/// refers to options by identity: two options with the same label and value
/// are still different options. Compare with [`same_option`] or
/// [`OptionKey`], never with `==` on the contents.
#[derive(Debug)]
pub struct SelectOption {
    label: String,
    value: OptionValue,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Arc<Self> {
        Arc::new(Self {
            label: label.into(),
            value: value.into(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }
}

/// Identity of a shared option, usable as a map key or for change detection.
///
/// Only meaningful while the option is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionKey(usize);

impl OptionKey {
    pub fn of(option: &Arc<SelectOption>) -> Self {
        Self(Arc::as_ptr(option) as usize)
    }
}

/// Whether `a` and `b` are the same option (not merely equal contents).
pub fn same_option(a: &Arc<SelectOption>, b: &Arc<SelectOption>) -> bool {
    Arc::ptr_eq(a, b)
}

/// Build a shared option list from `(label, value)` pairs.
pub fn options<L, V>(pairs: impl IntoIterator<Item = (L, V)>) -> Vec<Arc<SelectOption>>
where
    L: Into<String>,
    V: Into<OptionValue>,
{
    pairs
        .into_iter()
        .map(|(label, value)| SelectOption::new(label, value))
        .collect()
}
