mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// IDs from the root down to (and including) the element with `id`.
///
/// Returns an empty path if the element is not in the tree.
pub fn path_to(root: &Element, id: &str) -> Vec<String> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        path
    } else {
        Vec::new()
    }
}

fn collect_path(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());
    if element.id == id {
        return true;
    }
    for child in element.child_elements() {
        if collect_path(child, id, path) {
            return true;
        }
    }
    path.pop();
    false
}

/// Collect focusable element IDs in tree order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_into(root, &mut result);
    result
}

fn collect_focusable_into(element: &Element, result: &mut Vec<String>) {
    if element.focusable {
        result.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_focusable_into(child, result);
    }
}
