/// What handling an input event did to a widget.
///
/// Lets the host decide whether anything needs to be redrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetResult {
    /// The event meant nothing to the widget.
    #[default]
    Ignored,
    /// Interaction state changed (opened, closed, highlight moved).
    Handled,
    /// The change callback was called with a new selection.
    Changed,
}

impl WidgetResult {
    /// Check if the event was handled (not Ignored).
    pub fn is_handled(&self) -> bool {
        !matches!(self, WidgetResult::Ignored)
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, WidgetResult::Changed)
    }

    /// Combine two results, keeping the more significant one.
    pub fn or(self, other: WidgetResult) -> WidgetResult {
        match (self, other) {
            (WidgetResult::Changed, _) | (_, WidgetResult::Changed) => WidgetResult::Changed,
            (WidgetResult::Handled, _) | (_, WidgetResult::Handled) => WidgetResult::Handled,
            _ => WidgetResult::Ignored,
        }
    }
}
