use panedom::{natural_height, Direction, Edges, Element, Size};

#[test]
fn test_text_wraps() {
    let el = Element::text("one two three four");
    assert_eq!(natural_height(&el, 9), 3);
    assert_eq!(natural_height(&el, 10), 2);
    assert_eq!(natural_height(&el, 80), 1);
}

#[test]
fn test_image_rows() {
    let el = Element::image("step.png", "Step", 5);
    assert_eq!(natural_height(&el, 40), 5);
}

#[test]
fn test_column_stacks_with_gap_and_padding() {
    let el = Element::col()
        .gap(1)
        .padding(Edges::vertical(1))
        .child(Element::text("a"))
        .child(Element::image("x", "x", 3));
    // 1 + 1 (gap) + 3, plus top/bottom padding
    assert_eq!(natural_height(&el, 40), 7);
}

#[test]
fn test_own_explicit_height_ignored() {
    let el = Element::col()
        .height(Size::Fixed(0))
        .child(Element::text("a"))
        .child(Element::text("b"));
    assert_eq!(natural_height(&el, 40), 2);
}

#[test]
fn test_descendant_explicit_height_respected() {
    let el = Element::col()
        .child(Element::text("header"))
        .child(Element::col().height(Size::Fixed(0)).child(Element::text("hidden")));
    assert_eq!(natural_height(&el, 40), 1);
}

#[test]
fn test_row_takes_tallest_child() {
    let el = Element::row()
        .direction(Direction::Row)
        .child(Element::text("a"))
        .child(Element::image("x", "x", 3));
    assert_eq!(natural_height(&el, 40), 3);
}

#[test]
fn test_padding_narrows_wrap_width() {
    let el = Element::col()
        .padding(Edges::left(6))
        .child(Element::text("aaaa bbbb"));
    assert_eq!(natural_height(&el, 10), 2);
    assert_eq!(natural_height(&el, 20), 1);
}

#[test]
fn test_huge_padding_saturates() {
    let el = Element::text("x").padding(Edges::all(u16::MAX));
    assert_eq!(natural_height(&el, 80), u16::MAX);
}
