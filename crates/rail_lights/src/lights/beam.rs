//! Active beam selection
//!
//! A vehicle can carry several cone lights, but downstream consumers
//! (dynamic track illumination, the cone shader) want exactly one "the
//! headlight". The selector picks the first enabled cone light in
//! authored order and reports the fade timing of each selection edge.

use crate::foundation::math::{Vec3, Vec4};
use crate::lights::animator::LightAnimator;
use crate::lights::definition::LightKind;

/// The vehicle's single effective headlight beam, vehicle-local.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveBeam {
    /// Apex position
    pub position: Vec3,
    /// Unit beam direction
    pub direction: Vec3,
    /// Distance the beam reaches
    pub falloff_distance: f32,
    /// Cosine of the beam half-angle
    pub min_dot_product: f32,
    /// Normalized RGBA color
    pub color: Vec4,
}

/// Tracks which cone light is the active beam and the fade durations to
/// report when the selection changes.
#[derive(Debug, Clone, Default)]
pub struct ActiveBeamSelector {
    active: Option<usize>,
    fade_in: f32,
    fade_out: f32,
}

impl ActiveBeamSelector {
    /// Reselect after enablement changed. The first enabled cone light in
    /// authored order wins.
    ///
    /// Fade timing is reported per selection edge, not accumulated:
    /// fade-in belongs to the incoming headlight, fade-out to the outgoing
    /// one, and a swap between two lit cones reports neither.
    pub fn reselect(&mut self, animators: &[LightAnimator]) {
        let new = animators
            .iter()
            .position(|animator| animator.definition().kind == LightKind::Cone && animator.enabled());

        self.fade_in = match (self.active, new) {
            (None, Some(index)) => animators[index].definition().fade_in,
            _ => 0.0,
        };
        self.fade_out = match (self.active, new) {
            (Some(index), None) => animators
                .get(index)
                .map_or(0.0, |animator| animator.definition().fade_out),
            _ => 0.0,
        };
        self.active = new;
    }

    /// Index (into the animator list) of the active cone light, if any
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Fade-in seconds reported for the most recent selection edge
    #[must_use]
    pub fn reported_fade_in(&self) -> f32 {
        self.fade_in
    }

    /// Fade-out seconds reported for the most recent selection edge
    #[must_use]
    pub fn reported_fade_out(&self) -> f32 {
        self.fade_out
    }

    /// The blended beam of the active cone light, `None` when no cone
    /// light is enabled.
    #[must_use]
    pub fn active_beam(&self, animators: &[LightAnimator]) -> Option<ActiveBeam> {
        let animator = self.active.and_then(|index| animators.get(index))?;
        let beam = animator.beam()?;
        Some(ActiveBeam {
            position: beam.position,
            direction: beam.direction,
            falloff_distance: beam.falloff_distance,
            min_dot_product: beam.min_dot_product(),
            color: beam.color,
        })
    }
}
