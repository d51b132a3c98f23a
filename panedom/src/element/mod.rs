mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Path from `root` down to the element with `id`, both ends included.
/// Empty if the element is not in the tree.
pub fn ancestors<'a>(root: &'a Element, id: &str) -> Vec<&'a Element> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        path
    } else {
        Vec::new()
    }
}

fn collect_path<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }

    for child in element.content.children() {
        if collect_path(child, id, path) {
            return true;
        }
    }

    path.pop();
    false
}

/// Nearest element carrying `class`, starting at `id` itself and walking up.
pub fn closest<'a>(root: &'a Element, id: &str, class: &str) -> Option<&'a Element> {
    ancestors(root, id)
        .into_iter()
        .rev()
        .find(|el| el.has_class(class))
}

/// All elements carrying `class`, in document order.
pub fn query_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_class(root, class, &mut found);
    found
}

fn collect_class<'a>(element: &'a Element, class: &str, found: &mut Vec<&'a Element>) {
    if element.has_class(class) {
        found.push(element);
    }
    for child in element.content.children() {
        collect_class(child, class, found);
    }
}

/// Apply `f` to every element carrying `class`, in document order.
pub fn visit_class_mut(root: &mut Element, class: &str, f: &mut impl FnMut(&mut Element)) {
    if root.has_class(class) {
        f(root);
    }
    if let Content::Children(children) = &mut root.content {
        for child in children {
            visit_class_mut(child, class, f);
        }
    }
}
