use crate::element::{find_element, path_to, Element};
use crate::layout::LayoutResult;
use crate::render::paint_order;
use crate::stylesheet::Stylesheet;

/// Find the topmost painted element at the given coordinates.
///
/// Absolutely positioned content (open dropdowns) is found even where it
/// overflows its parent's rectangle.
pub fn hit_test_any(
    layout: &LayoutResult,
    root: &Element,
    sheet: &Stylesheet,
    x: u16,
    y: u16,
) -> Option<String> {
    paint_order(root, layout, sheet)
        .iter()
        .rev()
        .find(|p| layout.get(&p.element.id).is_some_and(|r| r.contains(x, y)))
        .map(|p| p.element.id.clone())
}

/// Find the innermost clickable element at the given coordinates: the
/// topmost element there, or its nearest clickable ancestor.
pub fn hit_test(layout: &LayoutResult, root: &Element, sheet: &Stylesheet, x: u16, y: u16) -> Option<String> {
    let target = hit_test_any(layout, root, sheet, x, y)?;
    nearest_ancestor(root, &target, |e| e.clickable)
}

/// Find the focusable element at the given coordinates: the topmost element
/// there, or its nearest focusable ancestor.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    sheet: &Stylesheet,
    x: u16,
    y: u16,
) -> Option<String> {
    let target = hit_test_any(layout, root, sheet, x, y)?;
    nearest_ancestor(root, &target, |e| e.focusable)
}

fn nearest_ancestor(root: &Element, id: &str, pred: impl Fn(&Element) -> bool) -> Option<String> {
    path_to(root, id)
        .into_iter()
        .rev()
        .find(|ancestor| find_element(root, ancestor).is_some_and(&pred))
}
