//! Single-open "process accordion" for `panedom` documents.
//!
//! The [`Accordion`] controller keeps a pure model of which panel is open and
//! what height each panel should have. It reads the document only to discover
//! items and measure content, and writes it only in [`Accordion::project`].
//!
//! ```ignore
//! let config = AccordionConfig::default();
//! let mut root = markup::build(&steps, &config);
//! let mut doc = DomDocument::new(&mut root, &config, 80);
//! let mut accordion = Accordion::mount(&mut doc);
//!
//! // later, on a click that hit-tested to `trigger_id`
//! accordion.activate_trigger(&trigger_id, &doc);
//! accordion.project(&mut doc);
//! ```

pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod item;
pub mod markup;
pub mod scan;

pub use config::AccordionConfig;
pub use controller::{Accordion, Toggle};
pub use document::{Document, DomDocument};
pub use error::{ConfigError, ScanError};
pub use item::{ItemId, PanelItem};
pub use markup::{ProcessStep, StepImage};
pub use scan::{scan, ScanReport};
