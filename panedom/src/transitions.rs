use std::time::Duration;

use serde::Deserialize;

/// Configuration for a single property transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Which properties of an element animate when they change.
///
/// Only the explicit height is animatable: that is all a collapsing panel needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transitions {
    pub height: Option<TransitionConfig>,
}

impl Transitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(mut self, duration: Duration, easing: Easing) -> Self {
        self.height = Some(TransitionConfig::new(duration, easing));
        self
    }

    /// Returns true if any transition is configured.
    pub fn has_any(&self) -> bool {
        self.height.is_some()
    }
}
