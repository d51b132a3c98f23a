//! Static markup for a process accordion.

use panedom::{Color, Edges, Element, Overflow, Size, Style};
use serde::Deserialize;

use crate::config::AccordionConfig;
use crate::error::ConfigError;

/// One section of the process: a title, descriptive text and an image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessStep {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub image: Option<StepImage>,
    #[serde(default)]
    pub default_open: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StepImage {
    pub src: String,
    pub alt: String,
    #[serde(default = "default_image_rows")]
    pub rows: u16,
}

fn default_image_rows() -> u16 {
    5
}

impl ProcessStep {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            image: None,
            default_open: false,
        }
    }

    pub fn image(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image = Some(StepImage {
            src: src.into(),
            alt: alt.into(),
            rows: default_image_rows(),
        });
        self
    }

    pub fn default_open(mut self) -> Self {
        self.default_open = true;
        self
    }
}

/// Parse a JSON array of steps.
pub fn steps_from_json(json: &str) -> Result<Vec<ProcessStep>, ConfigError> {
    let steps: Vec<ProcessStep> = serde_json::from_str(json)?;
    if steps.is_empty() {
        return Err(ConfigError::NoSteps);
    }
    Ok(steps)
}

/// Build the accordion markup for `steps`.
///
/// Element ids are `process`, `step-N`, `step-N-trigger` and `step-N-panel`.
/// Every panel starts collapsed; the default-open flag is only recorded as a
/// data attribute for [`crate::Accordion::initialize`] to act on.
pub fn build(steps: &[ProcessStep], config: &AccordionConfig) -> Element {
    Element::col()
        .id("process")
        .children(steps.iter().enumerate().map(|(i, step)| item(i, step, config)))
}

fn item(index: usize, step: &ProcessStep, config: &AccordionConfig) -> Element {
    let id = format!("step-{index}");

    let trigger = Element::row()
        .id(format!("{id}-trigger"))
        .class(&config.trigger_class)
        .gap(1)
        .focusable(true)
        .clickable(true)
        .style_focused(Style::new().foreground(Color::oklch(0.8, 0.12, 250.0)))
        .children([
            Element::text(config.indicator(false).to_string())
                .id(format!("{id}-indicator"))
                .class(&config.indicator_class),
            Element::text(format!("{:02}", index + 1)).style(Style::new().dim()),
            Element::text(&step.title).style(Style::new().bold()),
        ]);

    let mut panel = Element::col()
        .id(format!("{id}-panel"))
        .class(&config.panel_class)
        .height(Size::Fixed(0))
        .overflow_y(Overflow::Hidden)
        .padding(Edges::new(1, 0, 1, 5))
        .gap(1)
        .transitions(config.panel_transitions())
        .child(Element::text(&step.body));

    if let Some(image) = &step.image {
        panel = panel.child(Element::image(&image.src, &image.alt, image.rows));
    }

    let mut el = Element::col()
        .id(id)
        .class(&config.item_class)
        .child(trigger)
        .child(panel);
    if step.default_open {
        el = el.data(&config.default_open_attr, "true");
    }
    el
}
