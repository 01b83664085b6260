mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::{Content, Element};
use crate::stylesheet::Stylesheet;
use crate::text::display_width;
use crate::types::{Direction, Position, Size, Style};

/// Screen rectangle of every laid-out element, keyed by element ID.
///
/// Elements hidden by the stylesheet (and their subtrees) are absent.
pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(root: &Element, available: Rect, sheet: &Stylesheet) -> LayoutResult {
    let mut result = LayoutResult::new();

    let style = sheet.resolve(&root.classes);
    if style.is_hidden() {
        return result;
    }

    let (intrinsic_w, intrinsic_h) = measure(root, sheet);
    let rect = Rect::new(
        available.x,
        available.y,
        resolve_size(root.width, available.width, intrinsic_w),
        resolve_size(root.height, available.height, intrinsic_h),
    );
    place(root, rect, &style, sheet, &mut result);
    result
}

fn place(element: &Element, rect: Rect, style: &Style, sheet: &Stylesheet, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, style, sheet, result);
}

fn layout_children(
    element: &Element,
    rect: Rect,
    style: &Style,
    sheet: &Stylesheet,
    result: &mut LayoutResult,
) {
    let Content::Children(children) = &element.content else {
        return;
    };

    let visible: Vec<(&Element, Style)> = children
        .iter()
        .map(|c| (c, sheet.resolve(&c.classes)))
        .filter(|(_, s)| !s.is_hidden())
        .collect();

    let inner = if style.has_border() {
        rect.shrink(1, 1, 1, 1)
    } else {
        rect
    };

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    let flow: Vec<_> = visible
        .iter()
        .filter(|(c, _)| c.position == Position::Static)
        .map(|(c, s)| (*c, s, measure(c, sheet)))
        .collect();

    // Fixed and auto children take their size first, fill children share the rest.
    let gaps = element.gap.saturating_mul(flow.len().saturating_sub(1) as u16);
    let mut used = gaps;
    let mut fill_count = 0u16;
    for (child, _, (w, h)) in &flow {
        let size = if is_row { child.width } else { child.height };
        let intrinsic = if is_row { *w } else { *h };
        match size {
            Size::Fill => fill_count += 1,
            other => used = used.saturating_add(resolve_size(other, main_size, intrinsic)),
        }
    }
    let remaining = main_size.saturating_sub(used);
    let (fill_share, mut fill_extra) = if fill_count > 0 {
        (remaining / fill_count, remaining % fill_count)
    } else {
        (0, 0)
    };

    let main_end = if is_row { inner.right() } else { inner.bottom() };
    let mut cursor = if is_row { inner.x } else { inner.y };

    for (child, child_style, (w, h)) in flow {
        let (main_spec, cross_spec) = if is_row {
            (child.width, child.height)
        } else {
            (child.height, child.width)
        };
        let (main_intrinsic, cross_intrinsic) = if is_row { (w, h) } else { (h, w) };

        let mut main = match main_spec {
            Size::Fill => {
                let extra = if fill_extra > 0 {
                    fill_extra -= 1;
                    1
                } else {
                    0
                };
                fill_share + extra
            }
            other => resolve_size(other, main_size, main_intrinsic),
        };
        main = main.min(main_end.saturating_sub(cursor));
        let cross = resolve_size(cross_spec, cross_size, cross_intrinsic);

        let child_rect = if is_row {
            Rect::new(cursor, inner.y, main, cross)
        } else {
            Rect::new(inner.x, cursor, cross, main)
        };
        place(child, child_rect, child_style, sheet, result);

        cursor = cursor.saturating_add(main).saturating_add(element.gap);
    }

    // Absolute children are offset from this element's origin and may overflow it.
    for (child, child_style) in visible
        .iter()
        .filter(|(c, _)| c.position == Position::Absolute)
    {
        let (w, h) = measure(child, sheet);
        let x = rect.x.saturating_add(child.left);
        let y = rect.y.saturating_add(child.top);
        let avail_w = rect.width.saturating_sub(child.left);
        let avail_h = u16::MAX - y;
        let child_rect = Rect::new(
            x,
            y,
            resolve_size(child.width, avail_w, w),
            resolve_size(child.height, avail_h, h),
        );
        place(child, child_rect, child_style, sheet, result);
    }
}

/// Natural (content) size of an element, including its border.
pub fn measure(element: &Element, sheet: &Stylesheet) -> (u16, u16) {
    let style = sheet.resolve(&element.classes);
    if style.is_hidden() {
        return (0, 0);
    }
    let border = if style.has_border() { 2 } else { 0 };

    let (w, h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (display_width(text).min(u16::MAX as usize) as u16, 1),
        Content::Children(children) => {
            let sizes: Vec<(u16, u16)> = children
                .iter()
                .filter(|c| c.position == Position::Static)
                .filter(|c| !sheet.resolve(&c.classes).is_hidden())
                .map(|c| {
                    let (w, h) = measure(c, sheet);
                    (fixed_or(c.width, w), fixed_or(c.height, h))
                })
                .collect();
            let gaps = element.gap.saturating_mul(sizes.len().saturating_sub(1) as u16);
            match element.direction {
                Direction::Row => (
                    sizes.iter().fold(gaps, |acc, (w, _)| acc.saturating_add(*w)),
                    sizes.iter().map(|(_, h)| *h).max().unwrap_or(0),
                ),
                Direction::Column => (
                    sizes.iter().map(|(w, _)| *w).max().unwrap_or(0),
                    sizes.iter().fold(gaps, |acc, (_, h)| acc.saturating_add(*h)),
                ),
            }
        }
    };

    (w.saturating_add(border), h.saturating_add(border))
}

fn fixed_or(size: Size, intrinsic: u16) -> u16 {
    match size {
        Size::Fixed(n) => n,
        _ => intrinsic,
    }
}

fn resolve_size(size: Size, available: u16, intrinsic: u16) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => intrinsic.min(available),
    }
}
