use termdom::{
    Border, Buffer, Color, Element, Position, Rect, Rgb, Size, Style, Stylesheet,
};

fn render(root: &Element, sheet: &Stylesheet, width: u16, height: u16) -> Buffer {
    let layout = termdom::layout::layout(root, Rect::new(0, 0, width, height), sheet);
    let mut buf = Buffer::new(width, height);
    termdom::render::render_to_buffer(root, &layout, sheet, &mut buf);
    buf
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_text_is_written() {
    let root = Element::row()
        .id("root")
        .gap(1)
        .child(Element::text("Apple"))
        .child(Element::text("×"));

    let buf = render(&root, &Stylesheet::new(), 10, 1);
    assert_eq!(buf.row_text(0), "Apple ×   ");
}

#[test]
fn test_text_truncates_to_rect() {
    let root = Element::row()
        .width(Size::Fixed(6))
        .child(Element::text("Blueberry").width(Size::Fill));

    let buf = render(&root, &Stylesheet::new(), 10, 1);
    assert_eq!(buf.row_text(0), "Blueb…    ");
}

// ============================================================================
// Class Styling
// ============================================================================

#[test]
fn test_class_colors_apply() {
    let root = Element::text("Hi").class("highlighted");
    let sheet = Stylesheet::new().rule(
        ".highlighted",
        Style::new()
            .background(Color::rgb(0, 0, 255))
            .foreground(Color::rgb(255, 255, 0)),
    );

    let buf = render(&root, &sheet, 4, 1);
    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.char, 'H');
    assert_eq!(cell.bg, Rgb::new(0, 0, 255));
    assert_eq!(cell.fg, Rgb::new(255, 255, 0));
    assert_eq!(buf.get(3, 0).unwrap().bg, Rgb::BLACK);
}

#[test]
fn test_foreground_and_text_style_inherit() {
    let root = Element::row()
        .class("selected")
        .child(Element::text("A"));
    let sheet = Stylesheet::new().rule(
        ".selected",
        Style::new().foreground(Color::rgb(0, 255, 0)).bold(),
    );

    let buf = render(&root, &sheet, 2, 1);
    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.fg, Rgb::new(0, 255, 0));
    assert!(cell.style.bold);
}

#[test]
fn test_reverse_swaps_colors() {
    let root = Element::text("X").class("highlighted");
    let sheet = Stylesheet::new().rule(
        ".highlighted",
        Style::new().foreground(Color::rgb(10, 10, 10)).reverse(),
    );

    let buf = render(&root, &sheet, 1, 1);
    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.bg, Rgb::new(10, 10, 10));
    assert_eq!(cell.fg, Rgb::BLACK);
    assert!(!cell.style.reverse);
}

#[test]
fn test_border_drawn() {
    let root = Element::text("ok").class("boxed");
    let sheet = Stylesheet::new().rule(".boxed", Style::new().border(Border::Rounded));

    let buf = render(&root, &sheet, 4, 3);
    assert_eq!(buf.row_text(0), "╭──╮");
    assert_eq!(buf.row_text(1), "│ok│");
    assert_eq!(buf.row_text(2), "╰──╯");
}

// ============================================================================
// Stacking
// ============================================================================

#[test]
fn test_absolute_paints_over_later_siblings() {
    let root = Element::col()
        .child(
            Element::row()
                .width(Size::Fixed(6))
                .child(Element::text("pick"))
                .child(
                    Element::col()
                        .class("list")
                        .position(Position::Absolute)
                        .top(1)
                        .width(Size::Fill)
                        .child(Element::text("Apple")),
                ),
        )
        .child(Element::text("zzzzzz"));
    let sheet = Stylesheet::new().rule(".list", Style::new().background(Color::rgb(40, 40, 40)));

    let buf = render(&root, &sheet, 6, 2);
    assert_eq!(buf.row_text(1), "Apple ");
    assert_eq!(buf.get(5, 1).unwrap().bg, Rgb::new(40, 40, 40));
}

#[test]
fn test_hidden_not_painted() {
    let root = Element::col().child(Element::text("secret").class("options"));
    let sheet = Stylesheet::new().rule(".options", Style::new().hidden());

    let buf = render(&root, &sheet, 6, 1);
    assert_eq!(buf.row_text(0), "      ");
}
