use super::{Color, TextStyle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub foreground: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Fill unset fields from `parent`, the way text inherits from its container.
    pub fn inherit(&self, parent: &Style) -> Style {
        Style {
            foreground: self.foreground.clone().or_else(|| parent.foreground.clone()),
            text_style: TextStyle {
                bold: self.text_style.bold || parent.text_style.bold,
                italic: self.text_style.italic || parent.text_style.italic,
                underline: self.text_style.underline || parent.text_style.underline,
                dim: self.text_style.dim || parent.text_style.dim,
            },
        }
    }
}
