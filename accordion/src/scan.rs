//! Building the item collection from a document.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::document::Document;
use crate::error::ScanError;
use crate::item::{ItemId, PanelItem};

/// Result of scanning a document: the usable items plus what was skipped.
#[derive(Debug, Clone)]
pub struct ScanReport<N> {
    pub items: Vec<PanelItem<N>>,
    /// Trigger handle -> owning item, fixed at scan time.
    pub triggers: HashMap<N, ItemId>,
    pub skipped: Vec<ScanError>,
}

impl<N> ScanReport<N> {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Walk the document's triggers in order and pair each with its item and panel.
///
/// Broken markup is skipped one item at a time: a trigger outside any item, an
/// item with no panel, or a second trigger for the same item.
pub fn scan<D: Document>(doc: &D) -> ScanReport<D::Node> {
    let mut items: Vec<PanelItem<D::Node>> = Vec::new();
    let mut triggers = HashMap::new();
    let mut seen_items: HashMap<D::Node, ItemId> = HashMap::new();
    let mut skipped = Vec::new();

    for trigger in doc.triggers() {
        let Some(node) = doc.enclosing_item(&trigger) else {
            skipped.push(ScanError::OrphanTrigger {
                trigger: describe(&trigger),
            });
            continue;
        };

        if seen_items.contains_key(&node) {
            skipped.push(ScanError::DuplicateTrigger {
                trigger: describe(&trigger),
                item: describe(&node),
            });
            continue;
        }

        let Some(panel) = doc.content_panel(&node) else {
            skipped.push(ScanError::MissingPanel {
                item: describe(&node),
            });
            continue;
        };

        let id = ItemId(items.len());
        seen_items.insert(node.clone(), id);
        triggers.insert(trigger.clone(), id);
        items.push(PanelItem::new(id, node, trigger, panel));
    }

    for err in &skipped {
        log::warn!("[accordion] skipping: {err}");
    }
    log::debug!(
        "[accordion] scanned {} items ({} skipped)",
        items.len(),
        skipped.len()
    );

    ScanReport {
        items,
        triggers,
        skipped,
    }
}

fn describe<N: Debug>(node: &N) -> String {
    format!("{node:?}")
}
