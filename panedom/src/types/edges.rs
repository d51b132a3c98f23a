#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: u16) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub const fn left(value: u16) -> Self {
        Self::new(0, 0, 0, value)
    }

    pub const fn vertical(value: u16) -> Self {
        Self::new(value, 0, value, 0)
    }

    pub const fn horizontal_total(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    pub const fn vertical_total(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_saturate() {
        let huge = Edges::symmetric(u16::MAX, u16::MAX);
        assert_eq!(huge.horizontal_total(), u16::MAX);
        assert_eq!(huge.vertical_total(), u16::MAX);
        assert_eq!(Edges::new(1, 2, 3, 4).horizontal_total(), 6);
    }
}
