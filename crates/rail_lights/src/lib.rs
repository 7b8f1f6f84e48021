//! # Rail Lights
//!
//! A light animation and beam geometry engine for rail vehicles.
//!
//! Every simulation tick, the engine decides which of a vehicle's lights
//! are active, animates them through their configured keyframe sequences,
//! fades them in and out as conditions change, and produces the geometry a
//! renderer needs to draw glow sprites and cone-shaped headlight beams.
//!
//! ## Features
//!
//! - **Condition rules**: eight independent enablement predicates per light
//!   (headlight switch, position in train, penalty brake, AI/player
//!   control, service state, time of day, weather, coupling)
//! - **Keyframe sequencing**: cyclic (forward-then-back) and acyclic
//!   (forward-and-wrap) timelines with timed, optionally blended transitions
//! - **Fade control**: opacity ramps on every enablement change
//! - **Beam geometry**: cone position/direction/half-angle/falloff and glow
//!   position/normal/color, resolved per keyframe and blended in flight
//!
//! ## Quick Start
//!
//! ```rust
//! use rail_lights::prelude::*;
//!
//! let definitions = vec![LightDefinition {
//!     index: 0,
//!     kind: LightKind::Cone,
//!     conditions: LightConditions::default(),
//!     cycle: false,
//!     fade_in: 2.0,
//!     fade_out: 1.0,
//!     keyframes: vec![Keyframe {
//!         duration: 1.0,
//!         color: 0xFFFF_FFFF,
//!         position: Vec3::new(0.0, 3.0, 10.0),
//!         radius: 4.0,
//!         azimuth: Vec3::zeros(),
//!         elevation: Vec3::zeros(),
//!         transition: false,
//!         angle: 60.0,
//!     }],
//! }];
//!
//! let runtime_set = expand_light_set(definitions).expect("non-empty light set");
//! let mut lights = VehicleLights::new(runtime_set, ContextSnapshot::default());
//!
//! // Once per simulation tick:
//! let context = ContextSnapshot { headlight: HeadlightLevel::Bright, ..Default::default() };
//! lights.update(&context, 0.016);
//! if let Some(beam) = lights.active_beam() {
//!     println!("headlight reaches {} m", beam.falloff_distance);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod lights;

pub use lights::{expand_light_set, LightsError, VehicleLights};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, LightsConfig},
        foundation::{
            math::{Vec2, Vec3, Vec4},
            time::Timer,
        },
        lights::{
            expand_light_set, ActiveBeam, ContextSnapshot, HeadlightLevel, Keyframe,
            LightAnimator, LightConditions, LightDefinition, LightKind, LightsError,
            VehicleLights, WeatherKind,
        },
    };
}
