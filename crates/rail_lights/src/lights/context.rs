//! Per-tick simulation context
//!
//! Everything the condition rules read about the outside world, captured
//! once per tick. Snapshots are small `Copy` values compared with `==`;
//! enablement is only re-evaluated when a snapshot differs from the
//! previous tick's.

/// Train headlight switch position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum HeadlightLevel {
    /// Headlights off
    #[default]
    Off,
    /// Dimmed headlights
    Dim,
    /// Full headlights
    Bright,
}

/// Weather bucket reported by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeatherKind {
    /// Clear skies
    #[default]
    Clear,
    /// Rain
    Rain,
    /// Snow
    Snow,
}

/// Immutable snapshot of the simulation state one vehicle's lights react
/// to, read once per tick from the train/vehicle/environment subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContextSnapshot {
    /// Lead locomotive's headlight switch position
    pub headlight: HeadlightLevel,
    /// This car runs reversed relative to the direction of travel
    pub is_reversed: bool,
    /// This car is the first in the consist
    pub is_first: bool,
    /// This car is the last in the consist
    pub is_last: bool,
    /// A penalty brake application is in effect
    pub penalty: bool,
    /// The car belongs to the player-controlled train
    pub is_player: bool,
    /// The car is part of an in-service train
    pub in_service: bool,
    /// The sun is up
    pub is_day: bool,
    /// Current weather bucket
    pub weather: WeatherKind,
    /// Coupled to another car at the front
    pub coupled_front: bool,
    /// Coupled to another car at the rear
    pub coupled_rear: bool,
}
