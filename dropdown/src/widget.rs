//! Select widget - a dropdown selection component.
//!
//! [`Select`] is controlled: the caller owns the [`Selection`] and passes it
//! in as `value`; the widget reports every new value through its change
//! callback and never mutates its inputs. Only the open state and the
//! keyboard highlight live inside the widget.
//!
//! # Example
//!
//! ```ignore
//! let value = Rc::new(RefCell::new(Selection::single()));
//! let sink = Rc::clone(&value);
//! let mut select = Select::new("country", options, value.borrow().clone(), move |next| {
//!     *sink.borrow_mut() = next;
//! })
//! .with_placeholder("Choose country...");
//!
//! // Each frame:
//! handlers.clear();
//! let element = select.element(&handlers);
//! select.mount(&listeners);
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use termdom::{
    Element, EventKind, HandlerRegistry, Key, ListenerRegistry, Modifiers, Position, Propagation, Size,
    Subscription,
};

use crate::classes;
use crate::interaction::{InteractionState, KeyOutcome};
use crate::option::{OptionKey, SelectOption};
use crate::result::WidgetResult;
use crate::selection::Selection;

/// Receives the new selection whenever the user changes it.
pub type ChangeHandler = Rc<dyn Fn(Selection)>;

/// The props and shared interaction state that every handler works from.
///
/// Handlers and key listeners hold clones, so each one sees the props of the
/// render that created it and the live interaction state.
#[derive(Clone)]
struct Controller {
    id: String,
    options: Vec<Arc<SelectOption>>,
    value: Selection,
    on_change: ChangeHandler,
    state: Rc<RefCell<InteractionState>>,
}

impl Controller {
    fn interaction(&self) -> InteractionState {
        *self.state.borrow()
    }

    fn emit(&self, next: Selection) -> WidgetResult {
        log::debug!("select {} changed to {:?}", self.id, next.labels());
        (self.on_change)(next);
        WidgetResult::Changed
    }

    fn clear_options(&self) -> WidgetResult {
        self.emit(self.value.cleared())
    }

    fn select_option(&self, option: &Arc<SelectOption>) -> WidgetResult {
        match self.value.with_option(option) {
            Some(next) => self.emit(next),
            None => {
                log::trace!("select {} already has {}", self.id, option.label());
                WidgetResult::Ignored
            }
        }
    }

    fn is_option_selected(&self, option: &Arc<SelectOption>) -> bool {
        self.value.contains(option)
    }

    fn handle_key(&self, key: Key, _modifiers: Modifiers) -> WidgetResult {
        let outcome = self.state.borrow_mut().handle_key(key, self.options.len());
        match outcome {
            KeyOutcome::Ignored => WidgetResult::Ignored,
            KeyOutcome::Handled => WidgetResult::Handled,
            KeyOutcome::Commit(index) => match self.options.get(index) {
                Some(option) => WidgetResult::Handled.or(self.select_option(option)),
                None => WidgetResult::Handled,
            },
        }
    }

    fn changed(changed: bool) -> WidgetResult {
        if changed {
            WidgetResult::Handled
        } else {
            WidgetResult::Ignored
        }
    }

    fn handle_blur(&self) -> WidgetResult {
        let closed = self.state.borrow_mut().close();
        Self::changed(closed)
    }

    fn click_container(&self) -> WidgetResult {
        self.state.borrow_mut().toggle();
        WidgetResult::Handled
    }

    fn click_option(&self, index: usize) -> WidgetResult {
        let Some(option) = self.options.get(index) else {
            return WidgetResult::Ignored;
        };
        let result = self.select_option(option);
        self.state.borrow_mut().close();
        WidgetResult::Handled.or(result)
    }

    fn click_badge(&self, index: usize) -> WidgetResult {
        match self.value.options().get(index) {
            Some(option) => self.select_option(option),
            None => WidgetResult::Ignored,
        }
    }

    fn hover_option(&self, index: usize) -> WidgetResult {
        let moved = self.state.borrow_mut().highlight(index);
        Self::changed(moved)
    }
}

/// What the keyboard listener was built from. A change means the listener
/// has to be replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Deps {
    is_open: bool,
    highlighted_index: usize,
    options: Vec<OptionKey>,
    multiple: bool,
    value: Vec<OptionKey>,
}

/// A dropdown select in single or multiple mode.
///
/// The mode follows the variant of the `value` passed in.
pub struct Select {
    controller: Controller,
    placeholder: String,
    width: Size,
    subscription: Option<Subscription>,
    deps: Option<Deps>,
}

impl Select {
    pub fn new(
        id: impl Into<String>,
        options: Vec<Arc<SelectOption>>,
        value: Selection,
        on_change: impl Fn(Selection) + 'static,
    ) -> Self {
        Self {
            controller: Controller {
                id: id.into(),
                options,
                value,
                on_change: Rc::new(on_change),
                state: Rc::new(RefCell::new(InteractionState::new())),
            },
            placeholder: String::new(),
            width: Size::Fill,
            subscription: None,
            deps: None,
        }
    }

    /// Set the text shown when nothing is selected.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the container width.
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn id(&self) -> &str {
        &self.controller.id
    }

    pub fn options(&self) -> &[Arc<SelectOption>] {
        &self.controller.options
    }

    pub fn value(&self) -> &Selection {
        &self.controller.value
    }

    pub fn is_multiple(&self) -> bool {
        self.controller.value.is_multiple()
    }

    pub fn is_open(&self) -> bool {
        self.controller.interaction().is_open()
    }

    pub fn highlighted_index(&self) -> usize {
        self.controller.interaction().highlighted_index()
    }

    /// Replace the `value` prop, typically with what the change callback
    /// last stored.
    pub fn set_value(&mut self, value: Selection) {
        self.controller.value = value;
    }

    /// Replace the `options` prop.
    pub fn set_options(&mut self, options: Vec<Arc<SelectOption>>) {
        self.controller.options = options;
    }

    /// Element id of the option row at `index`.
    pub fn option_id(&self, index: usize) -> String {
        format!("{}-option-{}", self.controller.id, index)
    }

    /// Element id of the badge for the `index`th selected option.
    pub fn badge_id(&self, index: usize) -> String {
        format!("{}-badge-{}", self.controller.id, index)
    }

    pub fn clear_id(&self) -> String {
        format!("{}-clear", self.controller.id)
    }

    pub fn options_id(&self) -> String {
        format!("{}-options", self.controller.id)
    }

    // =========================================================================
    // Selection logic
    // =========================================================================

    /// Report the empty selection.
    pub fn clear_options(&self) -> WidgetResult {
        self.controller.clear_options()
    }

    /// Toggle `option` in multiple mode, or make it the value in single mode.
    ///
    /// Picking the current single value does not call the change callback.
    pub fn select_option(&self, option: &Arc<SelectOption>) -> WidgetResult {
        self.controller.select_option(option)
    }

    pub fn is_option_selected(&self, option: &Arc<SelectOption>) -> bool {
        self.controller.is_option_selected(option)
    }

    // =========================================================================
    // Event handlers
    // =========================================================================

    /// Handle a key press while the container is focused.
    pub fn handle_key(&self, key: Key, modifiers: Modifiers) -> WidgetResult {
        self.controller.handle_key(key, modifiers)
    }

    pub fn handle_blur(&self) -> WidgetResult {
        self.controller.handle_blur()
    }

    pub fn click_container(&self) -> WidgetResult {
        self.controller.click_container()
    }

    pub fn click_option(&self, index: usize) -> WidgetResult {
        self.controller.click_option(index)
    }

    pub fn click_badge(&self, index: usize) -> WidgetResult {
        self.controller.click_badge(index)
    }

    pub fn click_clear(&self) -> WidgetResult {
        self.controller.clear_options()
    }

    pub fn hover_option(&self, index: usize) -> WidgetResult {
        self.controller.hover_option(index)
    }

    // =========================================================================
    // Keyboard subscription
    // =========================================================================

    fn deps(&self) -> Deps {
        let state = self.controller.interaction();
        Deps {
            is_open: state.is_open(),
            highlighted_index: state.highlighted_index(),
            options: self.controller.options.iter().map(OptionKey::of).collect(),
            multiple: self.controller.value.is_multiple(),
            value: self.controller.value.keys(),
        }
    }

    /// Attach the keyboard listener to the container element.
    ///
    /// Call after every render. The listener is replaced (the old one
    /// detached first) when the state or props it captured have changed.
    /// Returns whether a new listener was attached.
    pub fn mount(&mut self, listeners: &ListenerRegistry) -> bool {
        let deps = self.deps();
        if self.is_subscribed() && self.deps.as_ref() == Some(&deps) {
            return false;
        }

        self.subscription = None;
        let controller = self.controller.clone();
        let subscription = listeners.subscribe(&self.controller.id, move |key, modifiers| {
            let result = controller.handle_key(key, modifiers);
            log::trace!("select {} key {:?} -> {:?}", controller.id, key, result);
        });
        self.subscription = Some(subscription);
        self.deps = Some(deps);
        true
    }

    /// Detach the keyboard listener. Safe to call when not mounted.
    pub fn unmount(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        self.deps = None;
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Build the element tree and register its pointer handlers.
    pub fn element(&self, handlers: &HandlerRegistry) -> Element {
        let id = &self.controller.id;
        let state = self.controller.interaction();
        let ctl = Rc::new(self.controller.clone());

        log::trace!(
            "Select::element id={} open={} highlighted={} options_count={}",
            id,
            state.is_open(),
            state.highlighted_index(),
            self.controller.options.len()
        );

        let c = Rc::clone(&ctl);
        handlers.on(id, EventKind::Click, move |_| {
            c.click_container();
            Propagation::Continue
        });
        let c = Rc::clone(&ctl);
        handlers.on(id, EventKind::Blur, move |_| {
            c.handle_blur();
            Propagation::Continue
        });

        let clear_id = self.clear_id();
        let c = Rc::clone(&ctl);
        handlers.on(&clear_id, EventKind::Click, move |_| {
            c.clear_options();
            Propagation::Stop
        });

        Element::row()
            .id(id.as_str())
            .class(classes::CONTAINER)
            .focusable(true)
            .clickable(true)
            .width(self.width)
            .height(Size::Fixed(1))
            .gap(1)
            .child(self.value_element(handlers, &ctl))
            .child(Element::text("×").id(clear_id).class(classes::CLEAR_BTN).clickable(true))
            .child(Element::text("│").class(classes::DIVIDER))
            .child(Element::text("▼").class(classes::CARET))
            .child(self.options_element(handlers, &ctl, state))
    }

    fn value_element(&self, handlers: &HandlerRegistry, ctl: &Rc<Controller>) -> Element {
        let span = Element::row()
            .id(format!("{}-value", self.controller.id))
            .class(classes::VALUE)
            .width(Size::Fill)
            .gap(1);

        match &self.controller.value {
            Selection::Single(Some(option)) => span.child(Element::text(option.label())),
            Selection::Multiple(items) if !items.is_empty() => {
                let badges = items.iter().enumerate().map(|(i, option)| {
                    let badge_id = self.badge_id(i);
                    let c = Rc::clone(ctl);
                    handlers.on(&badge_id, EventKind::Click, move |_| {
                        c.click_badge(i);
                        Propagation::Stop
                    });

                    Element::row()
                        .id(badge_id)
                        .class(classes::OPTION_BADGE)
                        .clickable(true)
                        .gap(1)
                        .child(Element::text(option.label()))
                        .child(Element::text("×").class(classes::REMOVE_BTN))
                });
                span.children(badges)
            }
            _ => span.child(Element::text(self.placeholder.as_str()).class(classes::PLACEHOLDER)),
        }
    }

    fn options_element(&self, handlers: &HandlerRegistry, ctl: &Rc<Controller>, state: InteractionState) -> Element {
        let rows = self.controller.options.iter().enumerate().map(|(i, option)| {
            let option_id = self.option_id(i);

            let c = Rc::clone(ctl);
            handlers.on(&option_id, EventKind::Click, move |_| {
                c.click_option(i);
                Propagation::Stop
            });
            let c = Rc::clone(ctl);
            handlers.on(&option_id, EventKind::MouseEnter, move |_| {
                c.hover_option(i);
                Propagation::Continue
            });

            Element::text(option.label())
                .id(option_id)
                .class(classes::OPTION)
                .class_if(classes::SELECTED, self.controller.is_option_selected(option))
                .class_if(classes::HIGHLIGHTED, i == state.highlighted_index())
                .clickable(true)
                .width(Size::Fill)
        });

        Element::col()
            .id(self.options_id())
            .class(classes::OPTIONS)
            .class_if(classes::SHOW, state.is_open())
            .position(Position::Absolute)
            .top(1)
            .width(Size::Fill)
            .children(rows)
    }
}

impl std::fmt::Debug for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select")
            .field("id", &self.controller.id)
            .field("options", &self.controller.options.len())
            .field("value", &self.controller.value.labels())
            .field("state", &self.controller.interaction())
            .field("subscribed", &self.is_subscribed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::option::options;

    fn counting(value: Selection) -> (Select, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let select = Select::new("s", options([("A", 1), ("B", 2)]), value, move |_| c.set(c.get() + 1));
        (select, calls)
    }

    #[test]
    fn test_click_option_closes() {
        let (select, calls) = counting(Selection::single());
        select.click_container();
        assert!(select.is_open());

        assert_eq!(select.click_option(1), WidgetResult::Changed);
        assert!(!select.is_open());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_click_current_single_value_only_closes() {
        let opts = options([("A", 1)]);
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let select = Select::new(
            "s",
            opts.clone(),
            Selection::Single(Some(Arc::clone(&opts[0]))),
            move |_| c.set(c.get() + 1),
        );
        select.click_container();

        assert_eq!(select.click_option(0), WidgetResult::Handled);
        assert!(!select.is_open());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_out_of_range_clicks_are_ignored() {
        let (select, calls) = counting(Selection::multiple());
        assert_eq!(select.click_option(9), WidgetResult::Ignored);
        assert_eq!(select.click_badge(0), WidgetResult::Ignored);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_blur_closes() {
        let (select, _) = counting(Selection::single());
        assert_eq!(select.handle_blur(), WidgetResult::Ignored);
        select.click_container();
        assert_eq!(select.handle_blur(), WidgetResult::Handled);
        assert!(!select.is_open());
    }

    #[test]
    fn test_enter_on_empty_options_only_toggles() {
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let select = Select::new("s", Vec::new(), Selection::single(), move |_| c.set(c.get() + 1));

        select.handle_key(Key::Enter, Modifiers::NONE);
        assert!(select.is_open());
        assert_eq!(select.handle_key(Key::Enter, Modifiers::NONE), WidgetResult::Handled);
        assert!(!select.is_open());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_ids_are_scoped_to_select() {
        let (select, _) = counting(Selection::single());
        assert_eq!(select.option_id(1), "s-option-1");
        assert_eq!(select.badge_id(0), "s-badge-0");
        assert_eq!(select.clear_id(), "s-clear");
    }
}
