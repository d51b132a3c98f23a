use std::time::{Duration, Instant};

use panedom::render::render_lines_at;
use panedom::{
    render_lines, AnimationState, Easing, Edges, Element, Overflow, Size, Transitions,
};

fn texts(root: &Element, width: u16) -> Vec<String> {
    render_lines(root, width, &AnimationState::new()).text()
}

#[test]
fn test_column_of_text() {
    let root = Element::col()
        .child(Element::text("first"))
        .child(Element::text("second"));
    assert_eq!(texts(&root, 20), vec!["first", "second"]);
}

#[test]
fn test_fixed_height_clips_and_pads() {
    let clipped = Element::col()
        .height(Size::Fixed(1))
        .overflow_y(Overflow::Hidden)
        .child(Element::text("a"))
        .child(Element::text("b"));
    assert_eq!(texts(&clipped, 10), vec!["a"]);

    let padded = Element::col().height(Size::Fixed(3)).child(Element::text("a"));
    assert_eq!(texts(&padded, 10), vec!["a", "", ""]);

    let collapsed = Element::col()
        .height(Size::Fixed(0))
        .overflow_y(Overflow::Hidden)
        .child(Element::text("a"));
    assert!(texts(&collapsed, 10).is_empty());
}

#[test]
fn test_visible_overflow_spills_past_fixed_height() {
    let tall = |overflow| {
        Element::col()
            .height(Size::Fixed(1))
            .overflow_y(overflow)
            .children(["a", "b", "c"].map(Element::text))
    };
    assert_eq!(texts(&tall(Overflow::Visible), 10), vec!["a", "b", "c"]);
    assert_eq!(texts(&tall(Overflow::Hidden), 10), vec!["a"]);

    let short = Element::col()
        .height(Size::Fixed(2))
        .overflow_y(Overflow::Visible)
        .child(Element::text("a"));
    assert_eq!(texts(&short, 10), vec!["a", ""]);
}

#[test]
fn test_row_joins_children() {
    let root = Element::row()
        .gap(1)
        .child(Element::text("▶"))
        .child(Element::text("Title"));
    assert_eq!(texts(&root, 20), vec!["▶ Title"]);
}

#[test]
fn test_left_padding_indents() {
    let root = Element::col().padding(Edges::left(2)).child(Element::text("x"));
    assert_eq!(texts(&root, 10), vec!["  x"]);
}

#[test]
fn test_lines_truncated_to_width() {
    let root = Element::row()
        .gap(1)
        .child(Element::text("abc"))
        .child(Element::text("defgh"));
    assert_eq!(texts(&root, 5), vec!["abc …"]);
}

#[test]
fn test_image_placeholder_frame() {
    let root = Element::image("diagram.png", "Plan", 3);
    let lines = texts(&root, 10);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "┌────────┐");
    assert_eq!(lines[1], "│ [Plan] │");
    assert_eq!(lines[2], "└────────┘");
}

#[test]
fn test_hit_targets_innermost_clickable() {
    let root = Element::col()
        .id("root")
        .clickable(true)
        .child(Element::row().id("trigger").clickable(true).child(Element::text("Open")))
        .child(Element::text("body"));
    let frame = render_lines(&root, 20, &AnimationState::new());

    assert_eq!(frame.hit(0), Some("trigger"));
    assert_eq!(frame.hit(1), Some("root"));
    assert_eq!(frame.hit(5), None);
}

#[test]
fn test_render_uses_interpolated_height() {
    let transitions = Transitions::new().height(Duration::from_millis(100), Easing::Linear);
    let panel = |h| {
        Element::col()
            .id("panel")
            .height(Size::Fixed(h))
            .overflow_y(Overflow::Hidden)
            .transitions(transitions.clone())
            .children((0..4).map(|i| Element::text(format!("line {i}"))))
    };

    let mut anim = AnimationState::new();
    let t0 = Instant::now();
    anim.update_at(&panel(0), t0);
    anim.update_at(&panel(4), t0);

    let mid = render_lines_at(&panel(4), 20, &anim, t0 + Duration::from_millis(50));
    assert_eq!(mid.text(), vec!["line 0", "line 1"]);

    anim.update_at(&panel(4), t0 + Duration::from_millis(200));
    let done = render_lines_at(&panel(4), 20, &anim, t0 + Duration::from_millis(200));
    assert_eq!(done.lines.len(), 4);
}
