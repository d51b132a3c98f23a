/// What an element holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// An image reference. Terminals can't draw pixels, so the renderer draws
    /// a framed placeholder `rows` tall with the alt text inside.
    Image {
        src: String,
        alt: String,
        rows: u16,
    },
    Children(Vec<super::Element>),
}

impl Content {
    pub fn children(&self) -> &[super::Element] {
        match self {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
