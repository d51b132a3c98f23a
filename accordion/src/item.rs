use std::fmt;

/// Position of an item in the accordion. Stable for the accordion's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) usize);

impl ItemId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item #{}", self.0)
    }
}

/// One accordion section: a trigger, the item element around it, and the
/// content panel whose height the accordion drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelItem<N> {
    pub(crate) id: ItemId,
    pub(crate) node: N,
    pub(crate) trigger: N,
    pub(crate) panel: N,
    pub(crate) is_open: bool,
    /// Last measured natural height; None until first opened.
    pub(crate) natural_height: Option<u16>,
    /// Height the panel should have. 0 when closed.
    pub(crate) height: u16,
}

impl<N> PanelItem<N> {
    pub(crate) fn new(id: ItemId, node: N, trigger: N, panel: N) -> Self {
        Self {
            id,
            node,
            trigger,
            panel,
            is_open: false,
            natural_height: None,
            height: 0,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn trigger(&self) -> &N {
        &self.trigger
    }

    pub fn panel(&self) -> &N {
        &self.panel
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn natural_height(&self) -> Option<u16> {
        self.natural_height
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub(crate) fn close(&mut self) {
        self.is_open = false;
        self.height = 0;
    }

    pub(crate) fn open(&mut self, natural_height: u16) {
        self.is_open = true;
        self.natural_height = Some(natural_height);
        self.height = natural_height;
    }
}
