//! Pointer hover tracking.

use crate::element::{path_to, Element};
use crate::hit::hit_test_any;
use crate::layout::LayoutResult;
use crate::stylesheet::Stylesheet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverEvent {
    /// Pointer entered the element (emitted outer to inner).
    Enter(String),
    /// Pointer left the element (emitted inner to outer).
    Leave(String),
}

/// Remembers the root→target path under the pointer and turns path changes
/// into enter/leave transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    current: Vec<String>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> &[String] {
        &self.current
    }

    /// Hit test the pointer position and update the hovered path.
    pub fn pointer_moved(
        &mut self,
        root: &Element,
        layout: &LayoutResult,
        sheet: &Stylesheet,
        x: u16,
        y: u16,
    ) -> Vec<HoverEvent> {
        let path = hit_test_any(layout, root, sheet, x, y)
            .map(|id| path_to(root, &id))
            .unwrap_or_default();
        self.update_path(&path)
    }

    /// Replace the hovered path, returning leaves for the part no longer
    /// hovered followed by enters for the newly hovered part.
    pub fn update_path(&mut self, new_path: &[String]) -> Vec<HoverEvent> {
        let shared = self
            .current
            .iter()
            .zip(new_path)
            .take_while(|(a, b)| a == b)
            .count();

        let mut out: Vec<HoverEvent> = self.current[shared..]
            .iter()
            .rev()
            .map(|id| HoverEvent::Leave(id.clone()))
            .collect();
        out.extend(
            new_path[shared..]
                .iter()
                .map(|id| HoverEvent::Enter(id.clone())),
        );

        self.current = new_path.to_vec();
        out
    }

    /// Forget the hovered path, returning leaves inner to outer.
    pub fn clear(&mut self) -> Vec<HoverEvent> {
        self.update_path(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_enter_fresh_path() {
        let mut hover = HoverState::new();
        assert_eq!(
            hover.update_path(&path(&["root", "list", "opt-0"])),
            vec![
                HoverEvent::Enter("root".into()),
                HoverEvent::Enter("list".into()),
                HoverEvent::Enter("opt-0".into()),
            ]
        );
    }

    #[test]
    fn test_move_between_siblings() {
        let mut hover = HoverState::new();
        hover.update_path(&path(&["root", "list", "opt-0"]));
        assert_eq!(
            hover.update_path(&path(&["root", "list", "opt-1"])),
            vec![
                HoverEvent::Leave("opt-0".into()),
                HoverEvent::Enter("opt-1".into()),
            ]
        );
        assert!(hover.update_path(&path(&["root", "list", "opt-1"])).is_empty());
    }

    #[test]
    fn test_clear_leaves_inner_first() {
        let mut hover = HoverState::new();
        hover.update_path(&path(&["root", "list"]));
        assert_eq!(
            hover.clear(),
            vec![HoverEvent::Leave("list".into()), HoverEvent::Leave("root".into())]
        );
        assert!(hover.current_path().is_empty());
    }
}
