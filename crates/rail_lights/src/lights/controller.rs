//! Per-vehicle light control
//!
//! Owns every runtime light of one vehicle: diffs the per-tick context
//! snapshot, re-evaluates enablement only when it changed, keeps the
//! active beam selection current, and advances every animator.

use crate::config::LightsConfig;
use crate::lights::animator::LightAnimator;
use crate::lights::beam::{ActiveBeam, ActiveBeamSelector};
use crate::lights::context::ContextSnapshot;
use crate::lights::definition::{LightDefinition, LightKind};
use crate::lights::sequence::transition_table;

/// Per-vehicle light controller.
#[derive(Debug, Clone)]
pub struct VehicleLights {
    animators: Vec<LightAnimator>,
    selector: ActiveBeamSelector,
    context: ContextSnapshot,
    has_cone: bool,
    config: LightsConfig,
}

impl VehicleLights {
    /// Build a controller from an expanded definition list and the
    /// vehicle's initial context.
    #[must_use]
    pub fn new(definitions: Vec<LightDefinition>, initial_context: ContextSnapshot) -> Self {
        Self::with_config(definitions, initial_context, LightsConfig::default())
    }

    /// Same as [`Self::new`], with debug tracing options.
    #[must_use]
    pub fn with_config(
        definitions: Vec<LightDefinition>,
        initial_context: ContextSnapshot,
        config: LightsConfig,
    ) -> Self {
        if config.trace_transitions {
            for definition in &definitions {
                for transition in transition_table(definition.keyframes.len(), definition.cycle) {
                    log::debug!(
                        "light {} slot {} plays keyframe {} -> {}",
                        definition.index,
                        transition.slot,
                        transition.from,
                        transition.to
                    );
                }
            }
        }

        let has_cone = definitions
            .iter()
            .any(|definition| definition.kind == LightKind::Cone);
        let mut animators: Vec<LightAnimator> =
            definitions.into_iter().map(LightAnimator::new).collect();
        for animator in &mut animators {
            animator.apply_context(&initial_context);
        }

        let mut lights = Self {
            animators,
            selector: ActiveBeamSelector::default(),
            context: initial_context,
            has_cone,
            config,
        };
        lights.trace_states();
        lights.selector.reselect(&lights.animators);
        lights
    }

    /// Advance all lights by `dt` seconds under `context`.
    ///
    /// Enablement is only re-evaluated when the snapshot differs from the
    /// previous tick's; beam reselection happens on the same edge, before
    /// any animator advances.
    pub fn update(&mut self, context: &ContextSnapshot, dt: f32) {
        if *context != self.context {
            self.context = *context;
            for animator in &mut self.animators {
                animator.apply_context(context);
            }
            self.trace_states();
            self.selector.reselect(&self.animators);
        }

        for animator in &mut self.animators {
            animator.advance(dt);
        }
    }

    fn trace_states(&self) {
        if !self.config.trace_states {
            return;
        }
        log::debug!("context: {:?}", self.context);
        for animator in &self.animators {
            let definition = animator.definition();
            log::debug!(
                "light {} {:?} enabled={} conditions={:?}",
                definition.index,
                definition.kind,
                animator.enabled(),
                definition.conditions
            );
        }
    }

    /// The per-light animators, in runtime-list order
    #[must_use]
    pub fn animators(&self) -> &[LightAnimator] {
        &self.animators
    }

    /// The context applied most recently
    #[must_use]
    pub fn context(&self) -> &ContextSnapshot {
        &self.context
    }

    /// Whether the vehicle carries any cone light at all
    #[must_use]
    pub fn has_cone(&self) -> bool {
        self.has_cone
    }

    /// Whether a cone light is currently selected as the active beam
    #[must_use]
    pub fn is_cone_active(&self) -> bool {
        self.selector.active_index().is_some()
    }

    /// The blended active beam, `None` when no cone light is enabled
    #[must_use]
    pub fn active_beam(&self) -> Option<ActiveBeam> {
        self.selector.active_beam(&self.animators)
    }

    /// Fade-in seconds reported for the most recent beam selection edge
    #[must_use]
    pub fn reported_fade_in(&self) -> f32 {
        self.selector.reported_fade_in()
    }

    /// Fade-out seconds reported for the most recent beam selection edge
    #[must_use]
    pub fn reported_fade_out(&self) -> f32 {
        self.selector.reported_fade_out()
    }
}
