//! Natural (unconstrained) content height.
//!
//! This is the terminal equivalent of a DOM `scrollHeight`: how many rows an
//! element would need if its own explicit height were lifted. Descendants keep
//! their explicit heights, so a collapsed panel nested inside an open one
//! still counts as zero rows.

use crate::element::{Content, Element};
use crate::text::wrap_words;
use crate::types::{Direction, Size};

/// Rows `element` needs at `width` columns, ignoring its own explicit height.
pub fn natural_height(element: &Element, width: u16) -> u16 {
    let inner = width.saturating_sub(element.padding.horizontal_total());
    content_height(element, inner).saturating_add(element.padding.vertical_total())
}

/// Rows `element` occupies inside its parent.
pub fn outer_height(element: &Element, width: u16) -> u16 {
    match element.height {
        Size::Fixed(h) => h,
        Size::Auto => natural_height(element, width),
    }
}

fn content_height(element: &Element, width: u16) -> u16 {
    match &element.content {
        Content::None => 0,
        Content::Text(text) => clamp(wrap_words(text, usize::from(width)).len()),
        Content::Image { rows, .. } => *rows,
        Content::Children(children) => match element.direction {
            Direction::Column => {
                let stacked = children
                    .iter()
                    .fold(0u16, |acc, child| acc.saturating_add(outer_height(child, width)));
                let gaps = clamp(children.len().saturating_sub(1)).saturating_mul(element.gap);
                stacked.saturating_add(gaps)
            }
            Direction::Row => children
                .iter()
                .map(|child| outer_height(child, width))
                .max()
                .unwrap_or(0),
        },
    }
}

fn clamp(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
