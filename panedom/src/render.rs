//! Flatten an element tree into terminal lines.
//!
//! Layout here is deliberately one-dimensional: columns stack, rows sit side by
//! side, and every element with an explicit height is padded to it. Content
//! taller than that height is clipped only under [`Overflow::Hidden`]; with
//! [`Overflow::Visible`] the extra rows spill into the flow below.
//! While a height transition is running the interpolated value from
//! [`AnimationState`] wins over the element's declared height.

use std::time::Instant;

use crate::animation::AnimationState;
use crate::element::{Content, Element};
use crate::text::{display_width, truncate_to_width, wrap_words};
use crate::types::{Direction, Overflow, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }

    fn width(&self) -> usize {
        display_width(&self.text)
    }
}

/// One terminal row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub spans: Vec<Span>,
    /// Innermost clickable element covering this row.
    pub target: Option<String>,
}

impl Line {
    pub fn blank() -> Self {
        Self::default()
    }

    fn from_span(span: Span) -> Self {
        Self {
            spans: vec![span],
            target: None,
        }
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// The row's text with styling stripped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    fn indent(&mut self, cols: u16) {
        if cols > 0 {
            self.spans.insert(0, Span::raw(" ".repeat(usize::from(cols))));
        }
    }

    fn pad_to(&mut self, width: usize) {
        let current = self.width();
        if current < width {
            self.spans.push(Span::raw(" ".repeat(width - current)));
        }
    }

    fn truncate(&mut self, max_width: usize) {
        let mut used = 0;
        let mut keep = 0;
        for span in &mut self.spans {
            let w = span.width();
            if used + w <= max_width {
                used += w;
                keep += 1;
                continue;
            }
            span.text = truncate_to_width(&span.text, max_width - used);
            keep += 1;
            break;
        }
        self.spans.truncate(keep);
    }
}

/// A rendered screen: lines top to bottom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub lines: Vec<Line>,
}

impl Frame {
    /// Clickable element at `row`, if any.
    pub fn hit(&self, row: u16) -> Option<&str> {
        self.lines
            .get(usize::from(row))
            .and_then(|line| line.target.as_deref())
    }

    /// Plain text of every line.
    pub fn text(&self) -> Vec<String> {
        self.lines.iter().map(Line::plain_text).collect()
    }
}

/// Render `root` at `width` columns, using interpolated heights from `animation`.
pub fn render_lines(root: &Element, width: u16, animation: &AnimationState) -> Frame {
    render_lines_at(root, width, animation, Instant::now())
}

pub fn render_lines_at(
    root: &Element,
    width: u16,
    animation: &AnimationState,
    now: Instant,
) -> Frame {
    let cx = RenderCx { animation, now };
    Frame {
        lines: cx.render_element(root, width, &Style::default()),
    }
}

struct RenderCx<'a> {
    animation: &'a AnimationState,
    now: Instant,
}

impl RenderCx<'_> {
    fn render_element(&self, element: &Element, width: u16, parent_style: &Style) -> Vec<Line> {
        let style = element.effective_style().inherit(parent_style);
        let inner_width = width.saturating_sub(element.padding.horizontal_total());

        let mut lines = match &element.content {
            Content::None => Vec::new(),
            Content::Text(text) => wrap_words(text, usize::from(inner_width))
                .into_iter()
                .map(|l| Line::from_span(Span::new(l, style.clone())))
                .collect(),
            Content::Image { alt, rows, .. } => image_placeholder(alt, *rows, inner_width, &style),
            Content::Children(children) => match element.direction {
                Direction::Column => self.render_column(element, children, inner_width, &style),
                Direction::Row => self.render_row(element, children, inner_width, &style),
            },
        };

        for line in &mut lines {
            line.indent(element.padding.left);
        }
        for _ in 0..element.padding.top {
            lines.insert(0, Line::blank());
        }
        for _ in 0..element.padding.bottom {
            lines.push(Line::blank());
        }

        let explicit = self
            .animation
            .height_at(&element.id, self.now)
            .or_else(|| element.height.fixed());
        if let Some(h) = explicit {
            let h = usize::from(h);
            if element.overflow_y == Overflow::Hidden || lines.len() < h {
                lines.resize_with(h, Line::blank);
            }
        }

        if element.clickable {
            for line in &mut lines {
                if line.target.is_none() {
                    line.target = Some(element.id.clone());
                }
            }
        }

        for line in &mut lines {
            line.truncate(usize::from(width));
        }

        lines
    }

    fn render_column(
        &self,
        element: &Element,
        children: &[Element],
        width: u16,
        style: &Style,
    ) -> Vec<Line> {
        let mut lines = Vec::new();
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                for _ in 0..element.gap {
                    lines.push(Line::blank());
                }
            }
            lines.extend(self.render_element(child, width, style));
        }
        lines
    }

    fn render_row(
        &self,
        element: &Element,
        children: &[Element],
        width: u16,
        style: &Style,
    ) -> Vec<Line> {
        let cells: Vec<Vec<Line>> = children
            .iter()
            .map(|child| self.render_element(child, width, style))
            .collect();
        let col_widths: Vec<usize> = cells
            .iter()
            .map(|c| c.iter().map(Line::width).max().unwrap_or(0))
            .collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(0);
        let gap = " ".repeat(usize::from(element.gap));

        (0..height)
            .map(|row| {
                let mut line = Line::blank();
                for (i, cell) in cells.iter().enumerate() {
                    if i > 0 && !gap.is_empty() {
                        line.spans.push(Span::raw(gap.clone()));
                    }
                    let mut part = cell.get(row).cloned().unwrap_or_default();
                    part.pad_to(col_widths[i]);
                    if line.target.is_none() {
                        line.target = part.target.take();
                    }
                    line.spans.append(&mut part.spans);
                }
                line
            })
            .collect()
    }
}

fn image_placeholder(alt: &str, rows: u16, width: u16, style: &Style) -> Vec<Line> {
    let style = style.clone().dim();
    let width = usize::from(width);
    let rows = usize::from(rows);
    let label = format!("[{alt}]");

    if rows < 3 || width < 4 {
        let mut lines = vec![Line::blank(); rows];
        if let Some(first) = lines.first_mut() {
            *first = Line::from_span(Span::new(truncate_to_width(&label, width), style));
        }
        return lines;
    }

    let interior = width - 2;
    let label = truncate_to_width(&label, interior);
    let left = (interior - display_width(&label)) / 2;
    let right = interior - display_width(&label) - left;
    let middle = rows / 2;

    (0..rows)
        .map(|i| {
            let text = if i == 0 {
                format!("┌{}┐", "─".repeat(interior))
            } else if i == rows - 1 {
                format!("└{}┘", "─".repeat(interior))
            } else if i == middle {
                format!("│{}{label}{}│", " ".repeat(left), " ".repeat(right))
            } else {
                format!("│{}│", " ".repeat(interior))
            };
            Line::from_span(Span::new(text, style.clone()))
        })
        .collect()
}
