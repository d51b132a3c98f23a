//! Accordion configuration.

use std::time::Duration;

use panedom::{Easing, Transitions};
use serde::Deserialize;

use crate::error::ConfigError;

/// Markup conventions and animation settings.
///
/// The class names are how [`crate::DomDocument`] recognizes items, triggers and
/// panels; [`crate::markup::build`] emits markup using the same names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccordionConfig {
    /// Class on each item element.
    pub item_class: String,
    /// Class on each item's trigger.
    pub trigger_class: String,
    /// Class on each item's content panel.
    pub panel_class: String,
    /// Class on the indicator glyph inside a trigger.
    pub indicator_class: String,
    /// Class the accordion sets on the open item.
    pub active_class: String,
    /// Data attribute marking the item open at startup.
    pub default_open_attr: String,

    /// Height transition duration in milliseconds.
    pub duration_ms: u64,
    pub easing: Easing,

    pub expanded_indicator: char,
    pub collapsed_indicator: char,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            item_class: "process-item".into(),
            trigger_class: "process-trigger".into(),
            panel_class: "process-panel".into(),
            indicator_class: "process-indicator".into(),
            active_class: "active".into(),
            default_open_attr: "default-open".into(),
            duration_ms: 300,
            easing: Easing::EaseInOut,
            expanded_indicator: '▼',
            collapsed_indicator: '▶',
        }
    }
}

impl AccordionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn item_class(mut self, class: impl Into<String>) -> Self {
        self.item_class = class.into();
        self
    }

    pub fn trigger_class(mut self, class: impl Into<String>) -> Self {
        self.trigger_class = class.into();
        self
    }

    pub fn panel_class(mut self, class: impl Into<String>) -> Self {
        self.panel_class = class.into();
        self
    }

    pub fn indicator_class(mut self, class: impl Into<String>) -> Self {
        self.indicator_class = class.into();
        self
    }

    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    /// Data attribute that marks an item as open at startup.
    pub fn default_open_attr(mut self, attr: impl Into<String>) -> Self {
        self.default_open_attr = attr.into();
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the indicator glyphs for expanded and collapsed items.
    pub fn indicators(mut self, expanded: char, collapsed: char) -> Self {
        self.expanded_indicator = expanded;
        self.collapsed_indicator = collapsed;
        self
    }

    /// Transitions to put on each content panel.
    pub fn panel_transitions(&self) -> Transitions {
        Transitions::new().height(Duration::from_millis(self.duration_ms), self.easing)
    }

    pub fn indicator(&self, open: bool) -> char {
        if open {
            self.expanded_indicator
        } else {
            self.collapsed_indicator
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AccordionConfig::from_json(r#"{"duration_ms": 120, "easing": "linear"}"#)
            .unwrap();
        assert_eq!(config.duration_ms, 120);
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.item_class, "process-item");
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            AccordionConfig::from_json("{"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_builder_matches_json() {
        let built = AccordionConfig::new()
            .item_class("step")
            .trigger_class("step-head")
            .panel_class("step-body")
            .indicator_class("step-caret")
            .active_class("open")
            .default_open_attr("expanded");
        let parsed = AccordionConfig::from_json(
            r#"{
                "item_class": "step",
                "trigger_class": "step-head",
                "panel_class": "step-body",
                "indicator_class": "step-caret",
                "active_class": "open",
                "default_open_attr": "expanded"
            }"#,
        )
        .unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn test_panel_transitions() {
        let config = AccordionConfig::new().duration(Duration::from_millis(50));
        let height = config.panel_transitions().height.unwrap();
        assert_eq!(height.duration, Duration::from_millis(50));
        assert_eq!(height.easing, Easing::EaseInOut);
    }
}
