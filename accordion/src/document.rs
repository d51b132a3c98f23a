//! The seam between the controller and whatever holds the markup.

use std::fmt::Debug;
use std::hash::Hash;

use panedom::{
    ancestors, closest, find_element, find_element_mut, measure, query_class, visit_class_mut,
    Content, Element, Size,
};

use crate::config::AccordionConfig;

/// Everything the accordion needs from a document.
///
/// Reads happen during scanning, initialization and opening; writes happen
/// only when the accordion projects its state.
pub trait Document {
    /// Handle to an element. Must stay valid for the document's lifetime.
    type Node: Clone + Eq + Hash + Debug;

    /// All trigger elements, in document order.
    fn triggers(&self) -> Vec<Self::Node>;

    /// The item element a trigger belongs to.
    fn enclosing_item(&self, trigger: &Self::Node) -> Option<Self::Node>;

    /// The content panel inside an item.
    fn content_panel(&self, item: &Self::Node) -> Option<Self::Node>;

    /// Whether the markup flags this item as open at startup.
    fn is_default_open(&self, item: &Self::Node) -> bool;

    /// Height the panel's content needs right now, ignoring its own height constraint.
    fn natural_height(&self, panel: &Self::Node) -> u16;

    fn set_active(&mut self, item: &Self::Node, active: bool);

    /// Set the panel's explicit height. 0 collapses it.
    fn set_panel_height(&mut self, panel: &Self::Node, height: u16);
}

/// A [`Document`] over a `panedom` element tree. Nodes are element ids.
pub struct DomDocument<'a> {
    root: &'a mut Element,
    config: &'a AccordionConfig,
    width: u16,
}

impl<'a> DomDocument<'a> {
    /// `width` is the column count `root` is laid out in; panels are measured
    /// against it minus their ancestors' horizontal padding.
    pub fn new(root: &'a mut Element, config: &'a AccordionConfig, width: u16) -> Self {
        Self {
            root,
            config,
            width,
        }
    }

    pub fn root(&self) -> &Element {
        self.root
    }

    /// Change the layout width, e.g. after a terminal resize. Heights already
    /// projected stay as they are until the accordion re-measures.
    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    fn available_width(&self, id: &str) -> u16 {
        let path = ancestors(self.root, id);
        let Some((_, parents)) = path.split_last() else {
            return self.width;
        };
        parents.iter().fold(self.width, |w, el| {
            w.saturating_sub(el.padding.horizontal_total())
        })
    }
}

impl Document for DomDocument<'_> {
    type Node = String;

    fn triggers(&self) -> Vec<String> {
        query_class(self.root, &self.config.trigger_class)
            .into_iter()
            .map(|el| el.id.clone())
            .collect()
    }

    fn enclosing_item(&self, trigger: &String) -> Option<String> {
        closest(self.root, trigger, &self.config.item_class).map(|el| el.id.clone())
    }

    fn content_panel(&self, item: &String) -> Option<String> {
        let item = find_element(self.root, item)?;
        query_class(item, &self.config.panel_class)
            .first()
            .map(|el| el.id.clone())
    }

    fn is_default_open(&self, item: &String) -> bool {
        find_element(self.root, item)
            .and_then(|el| el.get_data(&self.config.default_open_attr))
            .is_some_and(|v| v != "false")
    }

    fn natural_height(&self, panel: &String) -> u16 {
        let width = self.available_width(panel);
        find_element(self.root, panel).map_or(0, |el| measure::natural_height(el, width))
    }

    fn set_active(&mut self, item: &String, active: bool) {
        let Some(el) = find_element_mut(self.root, item) else {
            return;
        };
        el.toggle_class(&self.config.active_class, active);

        let glyph = self.config.indicator(active).to_string();
        visit_class_mut(el, &self.config.indicator_class, &mut |indicator| {
            indicator.content = Content::Text(glyph.clone());
        });
    }

    fn set_panel_height(&mut self, panel: &String, height: u16) {
        if let Some(el) = find_element_mut(self.root, panel) {
            el.height = Size::Fixed(height);
        }
    }
}
