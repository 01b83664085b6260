use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::stylesheet::Stylesheet;
use crate::text::{char_width, truncate_to_width};
use crate::types::{Border, Rgb, Style};

/// An element together with its computed style, in paint order.
#[derive(Debug, Clone)]
pub struct Painted<'a> {
    pub element: &'a Element,
    pub style: Style,
}

/// Flatten the laid-out tree into paint order.
///
/// Flow content paints in tree order. Absolutely positioned subtrees are
/// deferred and paint after all flow content, so they sit on top.
/// Foreground color and text flags inherit from the parent; background and
/// border do not.
pub fn paint_order<'a>(root: &'a Element, layout: &LayoutResult, sheet: &Stylesheet) -> Vec<Painted<'a>> {
    let mut order = Vec::new();
    let mut layer = vec![(root, Style::default())];

    while !layer.is_empty() {
        let mut deferred = Vec::new();
        for (element, inherited) in layer {
            visit(element, &inherited, layout, sheet, &mut order, &mut deferred);
        }
        layer = deferred;
    }

    order
}

fn visit<'a>(
    element: &'a Element,
    inherited: &Style,
    layout: &LayoutResult,
    sheet: &Stylesheet,
    order: &mut Vec<Painted<'a>>,
    deferred: &mut Vec<(&'a Element, Style)>,
) {
    if !layout.contains_key(&element.id) {
        return;
    }

    let own = sheet.resolve(&element.classes);
    let style = Style {
        foreground: own.foreground.or(inherited.foreground),
        text_style: inherited.text_style.union(own.text_style),
        ..own
    };

    for child in element.child_elements() {
        if child.position == crate::types::Position::Absolute {
            deferred.push((child, style.clone()));
        }
    }
    order.push(Painted {
        element,
        style: style.clone(),
    });
    for child in element.child_elements() {
        if child.position != crate::types::Position::Absolute {
            visit(child, &style, layout, sheet, order, deferred);
        }
    }
}

pub fn render_to_buffer(root: &Element, layout: &LayoutResult, sheet: &Stylesheet, buf: &mut Buffer) {
    for painted in paint_order(root, layout, sheet) {
        if let Some(rect) = layout.get(&painted.element.id) {
            render_element(painted.element, &painted.style, *rect, buf);
        }
    }
}

fn render_element(element: &Element, style: &Style, rect: Rect, buf: &mut Buffer) {
    if let Some(bg) = &style.background {
        fill_rect(buf, rect, bg.to_rgb());
    }

    render_border(style, rect, buf);

    if let Content::Text(text) = &element.content {
        render_text(text, style, rect, buf);
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                *cell = Cell {
                    bg,
                    ..Cell::default()
                };
            }
        }
    }
}

fn render_text(text: &str, style: &Style, rect: Rect, buf: &mut Buffer) {
    let inner = if style.has_border() {
        rect.shrink(1, 1, 1, 1)
    } else {
        rect
    };
    if inner.is_empty() {
        return;
    }

    let fg = style.foreground.map(|c| c.to_rgb()).unwrap_or(Rgb::WHITE);
    let explicit_bg = style.background.map(|c| c.to_rgb());
    let mut text_style = style.text_style;
    let reverse = text_style.reverse;
    text_style.reverse = false;

    let text = truncate_to_width(text, inner.width as usize);
    let y = inner.y;
    let mut x = inner.x;

    for ch in text.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if x.saturating_add(width) > inner.right() {
            break;
        }

        // Keep whatever background is already painted underneath.
        let bg = explicit_bg
            .or_else(|| buf.get(x, y).map(|c| c.bg))
            .unwrap_or(Rgb::BLACK);
        let (fg, bg) = if reverse { (bg, fg) } else { (fg, bg) };

        buf.set(
            x,
            y,
            Cell {
                char: ch,
                fg,
                bg,
                style: text_style,
                wide_continuation: false,
            },
        );
        if width == 2 {
            buf.set(
                x + 1,
                y,
                Cell {
                    char: ' ',
                    fg,
                    bg,
                    style: text_style,
                    wide_continuation: true,
                },
            );
        }
        x += width;
    }
}

fn render_border(style: &Style, rect: Rect, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match style.border {
        None | Some(Border::None) => return,
        Some(Border::Single) => ('┌', '┐', '└', '┘', '─', '│'),
        Some(Border::Rounded) => ('╭', '╮', '╰', '╯', '─', '│'),
        Some(Border::Thick) => ('┏', '┓', '┗', '┛', '━', '┃'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = style.foreground.map(|c| c.to_rgb()).unwrap_or(Rgb::WHITE);

    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }

    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
    }
}
