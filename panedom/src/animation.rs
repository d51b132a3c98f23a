use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::element::Element;
use crate::transitions::{Easing, TransitionConfig};

/// A single active height transition.
#[derive(Debug, Clone)]
struct ActiveTransition {
    from: u16,
    to: u16,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl ActiveTransition {
    fn value_at(&self, now: Instant) -> u16 {
        let elapsed = now.saturating_duration_since(self.start);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        lerp_u16(self.from, self.to, self.easing.apply(progress))
    }

    fn finished_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

/// Tracks explicit element heights across frames and interpolates changes.
///
/// Call [`AnimationState::update`] once per frame with the tree about to be
/// drawn. Any element whose `Size::Fixed` height differs from the previous
/// frame, and which has a height transition configured, starts animating from
/// the old value to the new one. A change arriving mid-flight retargets from
/// the currently displayed value, so interrupted animations never jump.
#[derive(Debug, Default)]
pub struct AnimationState {
    /// Previous frame's explicit height per element.
    snapshots: HashMap<String, u16>,
    /// Currently active transitions keyed by element id.
    active: HashMap<String, ActiveTransition>,
    /// Reduced motion flag - when true, transitions complete instantly.
    reduced_motion: bool,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion. When enabled, height changes apply instantly.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
        if enabled {
            self.active.clear();
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Returns true if any transition is currently active.
    pub fn has_active_transitions(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn update(&mut self, root: &Element) {
        self.update_at(root, Instant::now());
    }

    /// Update animation state against `root` as of `now`.
    /// Detects height changes, starts or retargets transitions, prunes finished ones.
    pub fn update_at(&mut self, root: &Element, now: Instant) {
        self.active.retain(|_, t| !t.finished_at(now));
        self.update_element(root, now);
    }

    fn update_element(&mut self, element: &Element, now: Instant) {
        if let Some(current) = element.height.fixed() {
            let prev = self.snapshots.insert(element.id.clone(), current);
            if let (Some(prev), Some(config)) = (prev, element.transitions.height) {
                if prev != current {
                    self.start_transition(&element.id, prev, current, config, now);
                }
            }
        } else {
            self.snapshots.remove(&element.id);
            self.active.remove(&element.id);
        }

        for child in element.content.children() {
            self.update_element(child, now);
        }
    }

    fn start_transition(
        &mut self,
        id: &str,
        prev: u16,
        target: u16,
        config: TransitionConfig,
        now: Instant,
    ) {
        if self.reduced_motion {
            return;
        }

        // Retarget from whatever is on screen right now
        let from = match self.active.get(id) {
            Some(existing) => existing.value_at(now),
            None => prev,
        };

        log::trace!("[animation] height {id}: {from} -> {target}");

        self.active.insert(
            id.to_string(),
            ActiveTransition {
                from,
                to: target,
                start: now,
                duration: config.duration,
                easing: config.easing,
            },
        );
    }

    /// Interpolated height for `element_id`, or None if it isn't animating.
    pub fn height(&self, element_id: &str) -> Option<u16> {
        self.height_at(element_id, Instant::now())
    }

    pub fn height_at(&self, element_id: &str, now: Instant) -> Option<u16> {
        self.active.get(element_id).map(|t| t.value_at(now))
    }

    /// Remove transitions and snapshots for elements no longer in tree.
    pub fn cleanup(&mut self, current_ids: &HashSet<String>) {
        self.snapshots.retain(|id, _| current_ids.contains(id));
        self.active.retain(|id, _| current_ids.contains(id));
    }
}

fn lerp_u16(from: u16, to: u16, t: f32) -> u16 {
    let from = f32::from(from);
    let to = f32::from(to);
    (from + (to - from) * t).round() as u16
}

/// Collect all element IDs from the tree.
pub fn collect_element_ids(element: &Element) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_ids_recursive(element, &mut ids);
    ids
}

fn collect_ids_recursive(element: &Element, ids: &mut HashSet<String>) {
    ids.insert(element.id.clone());
    for child in element.content.children() {
        collect_ids_recursive(child, ids);
    }
}
