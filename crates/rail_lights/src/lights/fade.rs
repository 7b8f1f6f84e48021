//! Enablement fade control
//!
//! Ramps a light's opacity whenever its enablement flips. Both the fade-in
//! and the fade-out ramp divide elapsed time by the light's *fade-in*
//! duration; stock vehicles were authored against that timing, so it is
//! kept as-is.

/// Which ramp, if any, is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FadeDirection {
    #[default]
    None,
    In,
    Out,
}

/// Tracks the opacity ramp triggered by enablement transitions.
#[derive(Debug, Clone)]
pub struct FadeController {
    fade_in_secs: f32,
    direction: FadeDirection,
    fade_time: f32,
    opacity: f32,
}

impl FadeController {
    /// Controller for a light with the given fade-in duration. Opacity
    /// starts at zero; the first enablement starts the first ramp.
    #[must_use]
    pub fn new(fade_in_secs: f32) -> Self {
        Self {
            fade_in_secs,
            direction: FadeDirection::None,
            fade_time: 0.0,
            opacity: 0.0,
        }
    }

    /// React to an enablement flip: start the matching ramp from zero
    /// elapsed time.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.direction = if enabled {
            FadeDirection::In
        } else {
            FadeDirection::Out
        };
        self.fade_time = 0.0;
    }

    /// Advance the active ramp by `dt` seconds. A zero fade-in duration
    /// snaps the opacity straight to its target.
    pub fn advance(&mut self, dt: f32) {
        match self.direction {
            FadeDirection::None => {}
            FadeDirection::In => {
                self.fade_time += dt;
                self.opacity = if self.fade_in_secs > 0.0 {
                    self.fade_time / self.fade_in_secs
                } else {
                    1.0
                };
                if self.opacity >= 1.0 {
                    self.opacity = 1.0;
                    self.direction = FadeDirection::None;
                }
            }
            FadeDirection::Out => {
                self.fade_time += dt;
                self.opacity = if self.fade_in_secs > 0.0 {
                    1.0 - self.fade_time / self.fade_in_secs
                } else {
                    0.0
                };
                if self.opacity <= 0.0 {
                    self.opacity = 0.0;
                    self.direction = FadeDirection::None;
                }
            }
        }
    }

    /// Current opacity in `[0, 1]`
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// True while a fade-in ramp is running
    #[must_use]
    pub fn fading_in(&self) -> bool {
        self.direction == FadeDirection::In
    }

    /// True while a fade-out ramp is running
    #[must_use]
    pub fn fading_out(&self) -> bool {
        self.direction == FadeDirection::Out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_in_ramps_monotonically_to_one() {
        let mut fade = FadeController::new(2.0);
        fade.set_enabled(true);

        let mut previous = 0.0;
        for _ in 0..7 {
            fade.advance(0.25);
            assert!(fade.opacity() > previous);
            previous = fade.opacity();
        }
        assert!(fade.fading_in());
        assert!((fade.opacity() - 0.875).abs() < 1e-6);

        fade.advance(0.25);
        assert!((fade.opacity() - 1.0).abs() < 1e-6);
        assert!(!fade.fading_in());

        // Clamped: further time does not overshoot.
        fade.advance(5.0);
        assert!((fade.opacity() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn fade_out_ramps_monotonically_to_zero() {
        let mut fade = FadeController::new(2.0);
        fade.set_enabled(true);
        fade.advance(2.0);
        assert!((fade.opacity() - 1.0).abs() < 1e-6);

        fade.set_enabled(false);
        let mut previous = 1.0;
        for _ in 0..7 {
            fade.advance(0.25);
            assert!(fade.opacity() < previous);
            previous = fade.opacity();
        }
        fade.advance(0.25);
        assert!(fade.opacity().abs() < 1e-6);
        assert!(!fade.fading_out());
    }

    #[test]
    fn fade_out_divides_by_the_fade_in_duration() {
        // Authored fade-out durations do not drive the ramp; the fade-in
        // duration does.
        let mut fade = FadeController::new(2.0);
        fade.set_enabled(true);
        fade.advance(2.0);
        fade.set_enabled(false);
        fade.advance(1.0);
        assert!((fade.opacity() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut fade = FadeController::new(0.0);
        fade.set_enabled(true);
        fade.advance(0.016);
        assert!((fade.opacity() - 1.0).abs() < 1e-6);
        assert!(!fade.fading_in());

        fade.set_enabled(false);
        fade.advance(0.016);
        assert!(fade.opacity().abs() < 1e-6);
        assert!(!fade.fading_out());
    }

    #[test]
    fn retrigger_restarts_the_ramp() {
        let mut fade = FadeController::new(2.0);
        fade.set_enabled(true);
        fade.advance(1.0);
        assert!((fade.opacity() - 0.5).abs() < 1e-6);

        // Disabled halfway through the fade-in: the fade-out ramp restarts
        // from zero elapsed time.
        fade.set_enabled(false);
        fade.advance(0.5);
        assert!((fade.opacity() - 0.75).abs() < 1e-6);
        assert!(fade.fading_out());
    }
}
