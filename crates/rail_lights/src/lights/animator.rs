//! Per-light animation orchestration
//!
//! One `LightAnimator` exists per runtime light for the lifetime of the
//! owning vehicle's visual representation. Each tick it re-evaluates
//! enablement when the context changed, advances the keyframe timeline and
//! any running fade, and exposes blended geometry for the renderer.

use crate::lights::conditions;
use crate::lights::context::ContextSnapshot;
use crate::lights::definition::{LightDefinition, LightKind};
use crate::lights::fade::FadeController;
use crate::lights::geometry::{ConeGeometry, GlowGeometry};
use crate::lights::sequence::SequenceScheduler;

/// Resolved geometry pair for the current timeline slot.
#[derive(Debug, Clone)]
enum ResolvedPair {
    Cone(ConeGeometry, ConeGeometry),
    Glow(GlowGeometry, GlowGeometry),
}

/// Drives one runtime light: enablement, fading, keyframe sequencing and
/// resolved geometry.
#[derive(Debug, Clone)]
pub struct LightAnimator {
    definition: LightDefinition,
    enabled: bool,
    sequence: SequenceScheduler,
    fade: FadeController,
    pair: Option<ResolvedPair>,
}

impl LightAnimator {
    /// Build an animator for one expanded light definition.
    #[must_use]
    pub fn new(definition: LightDefinition) -> Self {
        let sequence = SequenceScheduler::new(definition.keyframes.len(), definition.cycle);
        let fade = FadeController::new(definition.fade_in);
        let mut animator = Self {
            definition,
            enabled: false,
            sequence,
            fade,
            pair: None,
        };
        animator.resolve_pair();
        animator
    }

    fn resolve_pair(&mut self) {
        let (from, to) = self.sequence.current_pair();
        let (Some(keyframe_from), Some(keyframe_to)) = (
            self.definition.keyframes.get(from),
            self.definition.keyframes.get(to),
        ) else {
            return;
        };
        self.pair = Some(match self.definition.kind {
            LightKind::Cone => ResolvedPair::Cone(
                ConeGeometry::from_keyframe(keyframe_from),
                ConeGeometry::from_keyframe(keyframe_to),
            ),
            LightKind::Glow => ResolvedPair::Glow(
                GlowGeometry::from_keyframe(keyframe_from),
                GlowGeometry::from_keyframe(keyframe_to),
            ),
        });
    }

    /// Re-evaluate enablement under a changed context. An enablement flip
    /// starts the matching fade ramp.
    pub fn apply_context(&mut self, context: &ContextSnapshot) {
        let enabled = conditions::evaluate(&self.definition.conditions, context);
        if enabled != self.enabled {
            self.enabled = enabled;
            self.fade.set_enabled(enabled);
        }
    }

    /// Advance the animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.sequence.advance(dt, &self.definition.keyframes) {
            self.resolve_pair();
        }
        self.fade.advance(dt);
    }

    /// The definition this animator runs
    #[must_use]
    pub fn definition(&self) -> &LightDefinition {
        &self.definition
    }

    /// Whether the light's conditions are currently satisfied
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Current fade opacity in `[0, 1]`
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.fade.opacity()
    }

    /// Current transition blend fraction in `[0, 1]`
    #[must_use]
    pub fn blend(&self) -> f32 {
        self.sequence.blend()
    }

    /// Fade opacity and transition blend as one pair, the shape glow and
    /// cone shaders consume
    #[must_use]
    pub fn opacity_and_blend(&self) -> (f32, f32) {
        (self.fade.opacity(), self.sequence.blend())
    }

    /// True while the light is still ramping down after being disabled;
    /// renderers keep drawing it until the ramp finishes
    #[must_use]
    pub fn fading_out(&self) -> bool {
        self.fade.fading_out()
    }

    /// Blended cone beam, for cone-kind lights
    #[must_use]
    pub fn beam(&self) -> Option<ConeGeometry> {
        match &self.pair {
            Some(ResolvedPair::Cone(from, to)) => {
                Some(ConeGeometry::lerp(from, to, self.sequence.blend()))
            }
            _ => None,
        }
    }

    /// Blended glow sprite, for glow-kind lights
    #[must_use]
    pub fn glow(&self) -> Option<GlowGeometry> {
        match &self.pair {
            Some(ResolvedPair::Glow(from, to)) => {
                Some(GlowGeometry::lerp(from, to, self.sequence.blend()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::lights::context::HeadlightLevel;
    use crate::lights::definition::{HeadlightCondition, Keyframe, LightConditions};

    fn keyframe(duration: f32, angle: f32, transition: bool) -> Keyframe {
        Keyframe {
            duration,
            color: 0xFFFF_FFFF,
            position: Vec3::new(0.0, 3.0, 10.0),
            radius: 4.0,
            azimuth: Vec3::zeros(),
            elevation: Vec3::zeros(),
            transition,
            angle,
        }
    }

    fn bright_cone() -> LightDefinition {
        LightDefinition {
            index: 0,
            kind: LightKind::Cone,
            conditions: LightConditions {
                headlight: HeadlightCondition::Bright,
                ..Default::default()
            },
            cycle: false,
            fade_in: 2.0,
            fade_out: 1.0,
            keyframes: vec![keyframe(1.0, 60.0, false)],
        }
    }

    #[test]
    fn context_flip_starts_fade_in() {
        let mut animator = LightAnimator::new(bright_cone());
        animator.apply_context(&ContextSnapshot::default());
        assert!(!animator.enabled());

        animator.apply_context(&ContextSnapshot {
            headlight: HeadlightLevel::Bright,
            ..Default::default()
        });
        assert!(animator.enabled());

        animator.advance(1.0);
        assert!((animator.opacity() - 0.5).abs() < 1e-6);
        animator.advance(1.0);
        assert!((animator.opacity() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn reapplying_the_same_context_does_not_restart_the_fade() {
        let bright = ContextSnapshot {
            headlight: HeadlightLevel::Bright,
            ..Default::default()
        };
        let mut animator = LightAnimator::new(bright_cone());
        animator.apply_context(&bright);
        animator.advance(1.0);
        let halfway = animator.opacity();

        animator.apply_context(&bright);
        animator.advance(0.5);
        assert!(animator.opacity() > halfway);
    }

    #[test]
    fn cone_light_exposes_beam_not_glow() {
        let mut animator = LightAnimator::new(bright_cone());
        animator.advance(0.1);
        assert!(animator.beam().is_some());
        assert!(animator.glow().is_none());
    }

    #[test]
    fn blended_beam_tracks_the_transition_ramp() {
        let mut definition = bright_cone();
        definition.cycle = false;
        definition.keyframes = vec![keyframe(2.0, 40.0, true), keyframe(2.0, 80.0, true)];
        let mut animator = LightAnimator::new(definition);

        animator.advance(1.0); // halfway through slot 0, blending 40 -> 80
        let beam = animator.beam().unwrap();
        assert!((beam.half_angle - 30.0_f32.to_radians()).abs() < 1e-5);
    }
}
