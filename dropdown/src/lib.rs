//! A dropdown select widget for termdom.
//!
//! The widget supports single and multiple selection, keyboard navigation
//! while its container is focused, and pointer interaction through a
//! [`termdom::HandlerRegistry`]. Selection state belongs to the caller; see
//! [`Select`].

pub mod classes;
mod interaction;
mod option;
mod result;
mod selection;
mod widget;

pub use classes::default_stylesheet;
pub use interaction::{InteractionState, KeyOutcome};
pub use option::{options, same_option, OptionKey, OptionValue, SelectOption};
pub use result::WidgetResult;
pub use selection::Selection;
pub use widget::{ChangeHandler, Select};
