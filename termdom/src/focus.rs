use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{collect_focusable, Element};
use crate::event::{Event, Key, Modifiers};
use crate::hit::{hit_test, hit_test_focusable};
use crate::layout::LayoutResult;
use crate::stylesheet::Stylesheet;

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation), wrapping around.
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        let position = self.position_in(&focusable);
        let next = match position {
            Some(i) => focusable.get((i + 1) % focusable.len()),
            None => focusable.first(),
        }?;
        self.move_focus(next)
    }

    /// Focus the previous focusable element (Shift+Tab navigation), wrapping around.
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        let position = self.position_in(&focusable);
        let prev = match position {
            Some(0) | None => focusable.last(),
            Some(i) => focusable.get(i - 1),
        }?;
        self.move_focus(prev)
    }

    fn position_in(&self, focusable: &[String]) -> Option<usize> {
        let current = self.focused.as_ref()?;
        focusable.iter().position(|id| id == current)
    }

    fn move_focus(&mut self, id: &str) -> Option<String> {
        if self.focus(id) {
            Some(id.to_string())
        } else {
            None
        }
    }

    /// Move focus to `new`, returning the Blur/Focus events it causes.
    fn transition(&mut self, new: Option<String>) -> Vec<Event> {
        if self.focused == new {
            return Vec::new();
        }
        let mut events = Vec::new();
        if let Some(old) = self.focused.take() {
            events.push(Event::Blur { target: old });
        }
        if let Some(new) = new {
            self.focused = Some(new.clone());
            events.push(Event::Focus { target: new });
        }
        events
    }

    /// Process raw crossterm events and produce high-level events.
    ///
    /// Tab/BackTab move focus, other key presses target the focused element.
    /// A left click focuses the focusable element under the pointer (or
    /// clears focus when there is none) before the click itself is reported.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
        sheet: &Stylesheet,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    match key {
                        Key::Tab => {
                            let next = self.peek(root, Self::focus_next);
                            events.extend(self.transition(next));
                        }
                        Key::BackTab => {
                            let prev = self.peek(root, Self::focus_prev);
                            events.extend(self.transition(prev));
                        }
                        _ => events.push(Event::Key {
                            target: self.focused.clone(),
                            key,
                            modifiers,
                        }),
                    }
                }
                CrosstermEvent::Mouse(mouse) => {
                    let (x, y) = (mouse.column, mouse.row);
                    match mouse.kind {
                        MouseEventKind::Down(button) => {
                            if button == crossterm::event::MouseButton::Left {
                                let focus_target = hit_test_focusable(layout, root, sheet, x, y);
                                events.extend(self.transition(focus_target));
                            }
                            events.push(Event::Click {
                                target: hit_test(layout, root, sheet, x, y),
                                x,
                                y,
                                button: button.into(),
                            });
                        }
                        MouseEventKind::Moved => events.push(Event::MouseMove { x, y }),
                        _ => {}
                    }
                }
                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }
                _ => {}
            }
        }

        events
    }

    /// Run a focus move on a scratch copy and report where focus would land.
    fn peek(&self, root: &Element, step: fn(&mut Self, &Element) -> Option<String>) -> Option<String> {
        let mut scratch = FocusState {
            focused: self.focused.clone(),
        };
        step(&mut scratch, root);
        scratch.focused
    }
}
