use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtButton, MouseEvent,
    MouseEventKind,
};
use termdom::{
    collect_focusable, hit_test, hit_test_any, hit_test_focusable, Element, Event, EventKind,
    FocusState, HandlerRegistry, Key, LayoutResult, MouseButton, Position, Propagation, Rect,
    Stylesheet,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn key(code: KeyCode) -> CtEvent {
    CtEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn left_click(column: u16, row: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);
    let sheet = Stylesheet::new();

    assert_eq!(hit_test(&layout, &root, &sheet, 15, 11), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, &sheet, 5, 5), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, &sheet, 150, 150), None);
}

#[test]
fn test_hit_test_bubbles_to_clickable_ancestor() {
    let root = Element::box_().id("root").child(
        Element::row()
            .id("badge")
            .clickable(true)
            .child(Element::text("A").id("label"))
            .child(Element::text("×").id("remove")),
    );

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 20, 5)),
        ("badge", Rect::new(0, 0, 3, 1)),
        ("label", Rect::new(0, 0, 1, 1)),
        ("remove", Rect::new(2, 0, 1, 1)),
    ]);
    let sheet = Stylesheet::new();

    assert_eq!(hit_test(&layout, &root, &sheet, 2, 0), Some("badge".to_string()));
    assert_eq!(hit_test_any(&layout, &root, &sheet, 2, 0), Some("remove".to_string()));
    assert_eq!(hit_test(&layout, &root, &sheet, 10, 3), None);
}

#[test]
fn test_hit_test_absolute_overflowing_parent() {
    // A dropdown list hangs below its one-row container and covers a sibling.
    let root = Element::col()
        .id("root")
        .child(
            Element::row()
                .id("select")
                .clickable(true)
                .focusable(true)
                .child(
                    Element::col()
                        .id("list")
                        .position(Position::Absolute)
                        .top(1)
                        .child(Element::text("Apple").id("opt").clickable(true)),
                ),
        )
        .child(Element::text("Below").id("below").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 20, 5)),
        ("select", Rect::new(0, 0, 20, 1)),
        ("list", Rect::new(0, 1, 10, 1)),
        ("opt", Rect::new(0, 1, 10, 1)),
        ("below", Rect::new(0, 1, 10, 1)),
    ]);
    let sheet = Stylesheet::new();

    assert_eq!(hit_test(&layout, &root, &sheet, 2, 1), Some("opt".to_string()));
    assert_eq!(
        hit_test_focusable(&layout, &root, &sheet, 2, 1),
        Some("select".to_string())
    );
}

#[test]
fn test_hit_test_skips_hidden() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("x").id("ghost").class("gone").clickable(true));
    // Hidden elements never make it into a real layout.
    let layout = create_layout(&[("root", Rect::new(0, 0, 10, 10))]);
    let sheet = Stylesheet::new().rule(".gone", termdom::Style::new().hidden());

    assert_eq!(hit_test(&layout, &root, &sheet, 0, 0), None);
    assert_eq!(hit_test_any(&layout, &root, &sheet, 0, 0), Some("root".to_string()));
}

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_focus_state_focus_blur() {
    let mut focus = FocusState::new();

    assert_eq!(focus.focused(), None);
    assert!(focus.focus("input1"));
    assert_eq!(focus.focused(), Some("input1"));
    assert!(!focus.focus("input1"));
    assert!(focus.focus("input2"));
    assert!(focus.blur());
    assert_eq!(focus.focused(), None);
    assert!(!focus.blur());
}

#[test]
fn test_focus_next_and_prev_wrap() {
    let root = Element::col()
        .child(Element::text("1").id("a").focusable(true))
        .child(Element::text("2").id("b").focusable(true));

    let mut focus = FocusState::new();
    assert_eq!(focus.focus_next(&root), Some("a".to_string()));
    assert_eq!(focus.focus_next(&root), Some("b".to_string()));
    assert_eq!(focus.focus_next(&root), Some("a".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("b".to_string()));
}

#[test]
fn test_focus_no_focusable_elements() {
    let root = Element::col().child(Element::text("Not focusable").id("text1"));

    let mut focus = FocusState::new();
    assert_eq!(focus.focus_next(&root), None);
    assert_eq!(focus.focus_prev(&root), None);
}

#[test]
fn test_collect_focusable_order() {
    let root = Element::col()
        .id("root")
        .focusable(true)
        .child(
            Element::col()
                .id("group1")
                .child(Element::text("A").id("a").focusable(true))
                .child(Element::text("B").id("b").focusable(true)),
        )
        .child(Element::text("C").id("c").focusable(true));

    assert_eq!(collect_focusable(&root), vec!["root", "a", "b", "c"]);
}

// ============================================================================
// Event Processing
// ============================================================================

#[test]
fn test_tab_produces_blur_then_focus() {
    let root = Element::col()
        .child(Element::text("1").id("a").focusable(true))
        .child(Element::text("2").id("b").focusable(true));
    let layout = LayoutResult::new();
    let sheet = Stylesheet::new();

    let mut focus = FocusState::new();
    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout, &sheet);
    assert_eq!(events, vec![Event::Focus { target: "a".into() }]);

    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout, &sheet);
    assert_eq!(
        events,
        vec![
            Event::Blur { target: "a".into() },
            Event::Focus { target: "b".into() },
        ]
    );
}

#[test]
fn test_keys_target_focused_element() {
    let root = Element::col().child(Element::text("1").id("a").focusable(true));
    let layout = LayoutResult::new();
    let sheet = Stylesheet::new();

    let mut focus = FocusState::new();
    focus.focus("a");
    let events = focus.process_events(&[key(KeyCode::Char(' '))], &root, &layout, &sheet);

    assert_eq!(
        events,
        vec![Event::Key {
            target: Some("a".into()),
            key: Key::Space,
            modifiers: termdom::Modifiers::NONE,
        }]
    );
}

#[test]
fn test_click_moves_focus_before_click() {
    let root = Element::col()
        .id("root")
        .child(Element::text("one").id("a").focusable(true).clickable(true))
        .child(Element::text("two").id("b").focusable(true).clickable(true));
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 10, 2)),
        ("a", Rect::new(0, 0, 10, 1)),
        ("b", Rect::new(0, 1, 10, 1)),
    ]);
    let sheet = Stylesheet::new();

    let mut focus = FocusState::new();
    focus.focus("a");
    let events = focus.process_events(&[left_click(1, 1)], &root, &layout, &sheet);

    assert_eq!(
        events,
        vec![
            Event::Blur { target: "a".into() },
            Event::Focus { target: "b".into() },
            Event::Click {
                target: Some("b".into()),
                x: 1,
                y: 1,
                button: MouseButton::Left,
            },
        ]
    );
}

#[test]
fn test_click_on_nothing_clears_focus() {
    let root = Element::col()
        .id("root")
        .child(Element::text("one").id("a").focusable(true));
    let layout = create_layout(&[("root", Rect::new(0, 0, 10, 5)), ("a", Rect::new(0, 0, 10, 1))]);
    let sheet = Stylesheet::new();

    let mut focus = FocusState::new();
    focus.focus("a");
    let events = focus.process_events(&[left_click(0, 4)], &root, &layout, &sheet);

    assert_eq!(events[0], Event::Blur { target: "a".into() });
    assert_eq!(focus.focused(), None);
}

// ============================================================================
// Handler Dispatch
// ============================================================================

fn recording_tree() -> Element {
    Element::row()
        .id("container")
        .child(Element::col().id("list").child(Element::text("A").id("option")))
}

#[test]
fn test_click_bubbles_to_root() {
    let registry = HandlerRegistry::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    for id in ["container", "list", "option"] {
        let log = Rc::clone(&log);
        registry.on(id, EventKind::Click, move |cx| {
            log.borrow_mut().push(cx.current.clone());
            Propagation::Continue
        });
    }

    let ran = registry.dispatch(&recording_tree(), EventKind::Click, "option");
    assert_eq!(ran, 3);
    assert_eq!(*log.borrow(), vec!["option", "list", "container"]);
}

#[test]
fn test_stop_propagation() {
    let registry = HandlerRegistry::new();
    let toggled = Rc::new(RefCell::new(false));

    registry.on("option", EventKind::Click, |_| Propagation::Stop);
    let t = Rc::clone(&toggled);
    registry.on("container", EventKind::Click, move |_| {
        *t.borrow_mut() = true;
        Propagation::Continue
    });

    registry.dispatch(&recording_tree(), EventKind::Click, "option");
    assert!(!*toggled.borrow());

    registry.dispatch(&recording_tree(), EventKind::Click, "list");
    assert!(*toggled.borrow());
}

#[test]
fn test_blur_does_not_bubble() {
    let registry = HandlerRegistry::new();
    registry.on("container", EventKind::Blur, |_| Propagation::Continue);

    assert_eq!(registry.dispatch(&recording_tree(), EventKind::Blur, "option"), 0);
    assert_eq!(registry.dispatch(&recording_tree(), EventKind::Blur, "container"), 1);
}

#[test]
fn test_clear_removes_handlers() {
    let registry = HandlerRegistry::new();
    registry.on("option", EventKind::MouseEnter, |_| Propagation::Continue);
    assert_eq!(registry.len(), 1);

    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.get("option", EventKind::MouseEnter).is_none());
}
