//! Keyframe sequence scheduling
//!
//! A light's timeline is a list of slots, each playing one
//! keyframe-to-keyframe transition. Non-cyclic lights step forward and
//! wrap; cyclic lights play forward to the last keyframe and then back
//! again, giving `2N - 2` slots. The scheduler advances a time
//! accumulator through the slots and exposes the current keyframe pair
//! and transition blend.

use crate::lights::definition::Keyframe;

/// One timeline slot: while it is current, keyframe `from`'s settings hold
/// and the light optionally blends toward keyframe `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Slot position in the timeline
    pub slot: usize,
    /// Keyframe the slot plays from
    pub from: usize,
    /// Keyframe the slot plays toward
    pub to: usize,
}

/// Enumerate the ordered `(slot, from, to)` timeline for a light.
#[must_use]
pub fn transition_table(keyframe_count: usize, cycle: bool) -> Vec<Transition> {
    let mut table = Vec::new();
    if cycle {
        for i in 0..keyframe_count.saturating_sub(1) {
            table.push(Transition {
                slot: i,
                from: i,
                to: i + 1,
            });
        }
        for i in (1..keyframe_count).rev() {
            table.push(Transition {
                slot: 2 * keyframe_count - 2 - i,
                from: i,
                to: i - 1,
            });
        }
    } else {
        for i in 0..keyframe_count {
            table.push(Transition {
                slot: i,
                from: i,
                to: (i + 1) % keyframe_count,
            });
        }
    }
    table
}

/// Advances a light's timeline and exposes the current slot, keyframe pair
/// and transition blend fraction.
///
/// Timing is addressed through `keyframes[slot % N]`: on the return pass
/// of a cyclic light the governing duration comes from that wrapped index,
/// not from the slot's `from` keyframe.
#[derive(Debug, Clone)]
pub struct SequenceScheduler {
    table: Vec<Transition>,
    slot: usize,
    slot_count: usize,
    time_in_slot: f32,
    blend: f32,
}

impl SequenceScheduler {
    /// Build a scheduler for a light with `keyframe_count` keyframes.
    ///
    /// A cyclic light needs at least two keyframes; that contract is
    /// enforced at load time, and the slot count clamps to one here so a
    /// violated contract degrades to a static light instead of a panic.
    #[must_use]
    pub fn new(keyframe_count: usize, cycle: bool) -> Self {
        let slot_count = if cycle {
            (2 * keyframe_count).saturating_sub(2).max(1)
        } else {
            keyframe_count.max(1)
        };
        Self {
            table: transition_table(keyframe_count, cycle),
            slot: 0,
            slot_count,
            time_in_slot: 0.0,
            blend: 0.0,
        }
    }

    /// Slot currently playing
    #[must_use]
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Total number of slots in the timeline
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Current transition blend fraction in `[0, 1]`
    #[must_use]
    pub fn blend(&self) -> f32 {
        self.blend
    }

    /// Keyframe pair the current slot plays between
    #[must_use]
    pub fn current_pair(&self) -> (usize, usize) {
        self.table
            .get(self.slot)
            .map_or((0, 0), |transition| (transition.from, transition.to))
    }

    /// Advance the timeline by `dt` seconds. Returns `true` when the slot
    /// changed and the resolved keyframe pair must be refreshed.
    pub fn advance(&mut self, dt: f32, keyframes: &[Keyframe]) -> bool {
        if self.slot_count <= 1 || keyframes.is_empty() {
            return false;
        }

        let mut changed = false;
        self.time_in_slot += dt;
        loop {
            let duration = keyframes[self.slot % keyframes.len()].duration;
            if duration <= 0.0 || self.time_in_slot < duration {
                break;
            }
            self.time_in_slot -= duration;
            self.slot = (self.slot + 1) % self.slot_count;
            self.blend = 0.0;
            changed = true;
        }

        let timing = &keyframes[self.slot % keyframes.len()];
        if timing.transition && timing.duration > 0.0 {
            self.blend = self.time_in_slot / timing.duration;
        }
        changed
    }
}
