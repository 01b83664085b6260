//! Class-keyed stylesheets.
//!
//! A [`Stylesheet`] is an ordered list of rules. Each rule has a compound
//! class selector such as `.options.show`, which matches an element carrying
//! every listed class. Resolving an element layers all matching rules, less
//! specific selectors first and source order breaking ties, so later and
//! more specific rules win.

use crate::types::Style;

/// A compound class selector (`.a.b` matches elements with both `a` and `b`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    classes: Vec<String>,
}

impl Selector {
    /// Parse a selector like `.option.highlighted`.
    ///
    /// Leading dots are optional and empty segments are skipped, so
    /// `option.highlighted` parses to the same selector.
    pub fn parse(selector: &str) -> Self {
        let classes = selector
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Self { classes }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of classes in the selector.
    pub fn specificity(&self) -> usize {
        self.classes.len()
    }

    /// An empty selector matches nothing.
    pub fn matches(&self, classes: &[String]) -> bool {
        !self.classes.is_empty() && self.classes.iter().all(|c| classes.contains(c))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: Selector,
    pub style: Style,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn rule(mut self, selector: &str, style: Style) -> Self {
        self.push(selector, style);
        self
    }

    pub fn push(&mut self, selector: &str, style: Style) {
        self.rules.push(Rule {
            selector: Selector::parse(selector),
            style,
        });
    }

    /// Append every rule of `other` after this sheet's rules.
    pub fn extend(mut self, other: Stylesheet) -> Self {
        self.rules.extend(other.rules);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Compute the style for an element with the given classes.
    pub fn resolve(&self, classes: &[String]) -> Style {
        let mut matching: Vec<(usize, &Rule)> = self
            .rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.selector.matches(classes))
            .collect();

        // Stable sort keeps source order among equal specificity.
        matching.sort_by_key(|(_, rule)| rule.selector.specificity());

        matching
            .into_iter()
            .fold(Style::default(), |style, (_, rule)| style.merge(&rule.style))
    }
}
