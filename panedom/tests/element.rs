use panedom::{ancestors, closest, find_element, find_element_mut, query_class, Element, Size};

fn sample_tree() -> Element {
    Element::col()
        .id("root")
        .child(
            Element::col()
                .id("item-a")
                .class("item")
                .child(Element::row().id("trigger-a").class("trigger").child(Element::text("A")))
                .child(Element::col().id("panel-a").class("panel")),
        )
        .child(
            Element::col()
                .id("item-b")
                .class("item")
                .child(Element::row().id("trigger-b").class("trigger")),
        )
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_find_element() {
    let root = sample_tree();
    assert_eq!(find_element(&root, "panel-a").map(|e| e.id.as_str()), Some("panel-a"));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_element_mut_edits_in_place() {
    let mut root = sample_tree();
    if let Some(panel) = find_element_mut(&mut root, "panel-a") {
        panel.height = Size::Fixed(4);
    }
    assert_eq!(find_element(&root, "panel-a").map(|e| e.height), Some(Size::Fixed(4)));
}

#[test]
fn test_ancestors_path() {
    let root = sample_tree();
    let ids: Vec<_> = ancestors(&root, "trigger-b").iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids, vec!["root", "item-b", "trigger-b"]);
    assert!(ancestors(&root, "nope").is_empty());
}

#[test]
fn test_closest_includes_self() {
    let root = sample_tree();
    assert_eq!(closest(&root, "trigger-a", "item").map(|e| e.id.as_str()), Some("item-a"));
    assert_eq!(closest(&root, "item-a", "item").map(|e| e.id.as_str()), Some("item-a"));
    assert!(closest(&root, "trigger-a", "panel").is_none());
}

#[test]
fn test_query_class_document_order() {
    let root = sample_tree();
    let ids: Vec<_> = query_class(&root, "trigger").iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids, vec!["trigger-a", "trigger-b"]);
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_class_toggle() {
    let mut el = Element::box_().class("item");
    el.toggle_class("active", true);
    el.toggle_class("active", true);
    assert_eq!(el.classes, vec!["item", "active"]);

    el.toggle_class("active", false);
    assert!(!el.has_class("active"));
    assert!(el.has_class("item"));
}

#[test]
fn test_data_attributes() {
    let el = Element::box_().data("default-open", "true");
    assert_eq!(el.get_data("default-open").map(String::as_str), Some("true"));
    assert!(el.get_data("other").is_none());
}

#[test]
fn test_visit_class_mut() {
    let mut root = sample_tree();
    let mut seen = Vec::new();
    panedom::visit_class_mut(&mut root, "item", &mut |el| {
        el.add_class("visited");
        seen.push(el.id.clone());
    });
    assert_eq!(seen, vec!["item-a", "item-b"]);
    assert_eq!(query_class(&root, "visited").len(), 2);
}
