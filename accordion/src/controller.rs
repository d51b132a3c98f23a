//! The accordion controller.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::document::Document;
use crate::item::{ItemId, PanelItem};
use crate::scan::{scan, ScanReport};

/// What a trigger activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Nothing was open; this item is now open.
    Opened(ItemId),
    /// This item was open and is now closed. Everything is closed.
    Closed(ItemId),
    /// Another item was open; it closed and this one opened.
    Switched { from: ItemId, to: ItemId },
    /// The activation did not map to an item.
    Ignored,
}

/// Keeps at most one panel open.
///
/// The accordion owns a pure model: an `is_open` flag and a target height per
/// item. Operations update the model; [`Accordion::project`] writes it to the
/// document in one pass, so a close-then-open cycle reaches the renderer as a
/// single change.
#[derive(Debug, Clone)]
pub struct Accordion<N> {
    items: Vec<PanelItem<N>>,
    triggers: HashMap<N, ItemId>,
}

impl<N: Clone + Eq + Hash + Debug> Accordion<N> {
    /// Scan `doc` and build a fully collapsed accordion. Broken items are skipped.
    pub fn new<D: Document<Node = N>>(doc: &D) -> Self {
        Self::from_report(scan(doc))
    }

    pub fn from_report(report: ScanReport<N>) -> Self {
        Self {
            items: report.items,
            triggers: report.triggers,
        }
    }

    /// Scan, open the default item, and write the initial state to `doc`.
    pub fn mount<D: Document<Node = N>>(doc: &mut D) -> Self {
        let mut accordion = Self::new(&*doc);
        accordion.initialize(&*doc);
        accordion.project(doc);
        accordion
    }

    pub fn items(&self) -> &[PanelItem<N>] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&PanelItem<N>> {
        self.items.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_open(&self, id: ItemId) -> bool {
        self.item(id).is_some_and(PanelItem::is_open)
    }

    /// The open item, if any.
    pub fn open_index(&self) -> Option<ItemId> {
        self.items.iter().find(|i| i.is_open).map(|i| i.id)
    }

    /// The item a trigger was bound to at scan time.
    pub fn item_for_trigger(&self, trigger: &N) -> Option<ItemId> {
        self.triggers.get(trigger).copied()
    }

    /// Close every item and collapse every panel.
    pub fn close_all(&mut self) {
        for item in &mut self.items {
            item.close();
        }
    }

    /// Open `id`, sizing its panel to the content's height as measured now.
    ///
    /// Does not close other items; callers going through
    /// [`Accordion::handle_trigger_activated`] get that for free. Content that
    /// changes after this call leaves the height stale until
    /// [`Accordion::remeasure`] or the next open.
    pub fn open_item<D: Document<Node = N>>(&mut self, id: ItemId, doc: &D) {
        let Some(item) = self.items.get_mut(id.0) else {
            log::warn!("[accordion] open_item: no {id}");
            return;
        };
        let height = doc.natural_height(&item.panel);
        item.open(height);
        log::debug!("[accordion] opened {id} at height {height}");
    }

    /// Toggle `id` in response to its trigger.
    ///
    /// An open item closes, leaving everything closed. A closed item opens and
    /// every other item closes.
    pub fn handle_trigger_activated<D: Document<Node = N>>(
        &mut self,
        id: ItemId,
        doc: &D,
    ) -> Toggle {
        // Read before close_all clears it
        let Some(was_active) = self.item(id).map(PanelItem::is_open) else {
            return Toggle::Ignored;
        };
        let previous = self.open_index();

        self.close_all();

        if was_active {
            log::debug!("[accordion] closed {id}");
            return Toggle::Closed(id);
        }

        self.open_item(id, doc);
        match previous {
            Some(from) => Toggle::Switched { from, to: id },
            None => Toggle::Opened(id),
        }
    }

    /// Route a trigger element to its item and toggle it. Unknown triggers are ignored.
    pub fn activate_trigger<D: Document<Node = N>>(&mut self, trigger: &N, doc: &D) -> Toggle {
        match self.item_for_trigger(trigger) {
            Some(id) => self.handle_trigger_activated(id, doc),
            None => Toggle::Ignored,
        }
    }

    /// Open the item the markup flags as default-open.
    ///
    /// Expects a freshly built accordion, so nothing is closed first. Only the
    /// first flagged item opens; any further flags are ignored.
    pub fn initialize<D: Document<Node = N>>(&mut self, doc: &D) -> Option<ItemId> {
        let mut flagged = self
            .items
            .iter()
            .filter(|item| doc.is_default_open(&item.node))
            .map(|item| item.id);

        let first = flagged.next()?;
        let ignored: Vec<ItemId> = flagged.collect();
        if !ignored.is_empty() {
            log::warn!(
                "[accordion] {} items flagged default-open; opening {first}, ignoring {ignored:?}",
                ignored.len() + 1
            );
        }

        self.open_item(first, doc);
        Some(first)
    }

    /// Re-measure the open item's content and update its height.
    pub fn remeasure<D: Document<Node = N>>(&mut self, doc: &D) -> Option<ItemId> {
        let id = self.open_index()?;
        self.open_item(id, doc);
        Some(id)
    }

    /// Write the model to the document: the active flag on every item and the
    /// explicit height on every panel.
    pub fn project<D: Document<Node = N>>(&self, doc: &mut D) {
        for item in &self.items {
            doc.set_active(&item.node, item.is_open);
            doc.set_panel_height(&item.panel, item.height);
        }
    }
}
