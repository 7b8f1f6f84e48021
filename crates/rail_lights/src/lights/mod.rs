//! Rail vehicle light behavior engine
//!
//! The pipeline: an external loader produces [`LightDefinition`] records;
//! [`expand_light_set`] turns the authored list into the runtime list
//! (adding mirrored rear-facing copies of cone lights); a
//! [`VehicleLights`] controller owns one [`LightAnimator`] per runtime
//! light and is driven once per simulation tick with a fresh
//! [`ContextSnapshot`] and the elapsed seconds. Each animator exposes
//! enablement, fade opacity, transition blend, and resolved glow/cone
//! geometry; the controller aggregates the single active headlight beam.

pub mod animator;
pub mod beam;
pub mod builder;
pub mod conditions;
pub mod context;
pub mod controller;
pub mod definition;
pub mod fade;
pub mod geometry;
pub mod sequence;


pub use animator::LightAnimator;
pub use beam::{ActiveBeam, ActiveBeamSelector};
pub use builder::{expand_light_set, LightsError};
pub use conditions::evaluate;
pub use context::{ContextSnapshot, HeadlightLevel, WeatherKind};
pub use controller::VehicleLights;
pub use definition::{
    ControlCondition, CouplingCondition, HeadlightCondition, Keyframe, LightConditions,
    LightDefinition, LightKind, PenaltyCondition, ServiceCondition, TimeOfDayCondition,
    UnitCondition, WeatherCondition,
};
pub use fade::FadeController;
pub use geometry::{unpack_color, ConeGeometry, GlowGeometry};
pub use sequence::{transition_table, SequenceScheduler, Transition};
