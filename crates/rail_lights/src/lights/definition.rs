//! Light definition data model
//!
//! Pure data produced by an external vehicle-definition loader: the
//! keyframe list, the enablement predicates, and the per-light animation
//! settings. The only behavior here is construction of mirrored
//! rear-facing copies; everything else lives in the systems that consume
//! these records.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// One authored timed snapshot of a light's color, position, orientation
/// and size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Seconds this keyframe governs the timeline (> 0)
    pub duration: f32,
    /// Packed `0xAARRGGBB` color
    pub color: u32,
    /// Vehicle-local position of the light source
    pub position: Vec3,
    /// Authored glow/beam radius in meters
    pub radius: f32,
    /// Aiming azimuth in degrees; only the Y component is used
    pub azimuth: Vec3,
    /// Aiming elevation in degrees; only the Y component is used
    pub elevation: Vec3,
    /// Interpolate into this keyframe instead of snapping to it
    pub transition: bool,
    /// Full cone opening angle in degrees (cone lights only)
    pub angle: f32,
}

impl Keyframe {
    /// Rear-facing copy: azimuth rotated half a turn on every axis,
    /// position mirrored through the vehicle's vertical axis.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut copy = self.clone();
        copy.azimuth.x = (copy.azimuth.x + 180.0) % 360.0;
        copy.azimuth.y = (copy.azimuth.y + 180.0) % 360.0;
        copy.azimuth.z = (copy.azimuth.z + 180.0) % 360.0;
        copy.position.x = -copy.position.x;
        copy.position.z = -copy.position.z;
        copy
    }
}

/// Kinds of vehicle lights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightKind {
    /// Billboarded glow sprite (markers, cab lights, ditch lights)
    Glow,
    /// Volumetric headlight beam
    Cone,
}

/// Headlight-switch predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeadlightCondition {
    /// No constraint
    #[default]
    Ignore,
    /// Switch off
    Off,
    /// Switch at dim
    Dim,
    /// Switch at bright
    Bright,
    /// Dim or bright
    DimBright,
    /// Off or dim
    OffDim,
    /// Off or bright
    OffBright,
}

impl HeadlightCondition {
    /// Convert a raw authored value; `None` when unrecognized so the
    /// loader can warn and fail closed.
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Ignore),
            1 => Some(Self::Off),
            2 => Some(Self::Dim),
            3 => Some(Self::Bright),
            4 => Some(Self::DimBright),
            5 => Some(Self::OffDim),
            6 => Some(Self::OffBright),
            _ => None,
        }
    }
}

/// Position-in-train predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitCondition {
    /// No constraint
    #[default]
    Ignore,
    /// Neither first nor last in the consist
    Middle,
    /// First unit, running forwards
    First,
    /// Last unit, running forwards
    Last,
    /// Last unit, running reversed
    LastRev,
    /// First unit, running reversed
    FirstRev,
}

impl UnitCondition {
    /// Convert a raw authored value; `None` when unrecognized.
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Ignore),
            1 => Some(Self::Middle),
            2 => Some(Self::First),
            3 => Some(Self::Last),
            4 => Some(Self::LastRev),
            5 => Some(Self::FirstRev),
            _ => None,
        }
    }

    /// The predicate a mirrored rear-facing copy carries: forward and
    /// reversed variants trade places.
    #[must_use]
    pub fn mirrored(self) -> Self {
        match self {
            Self::First => Self::FirstRev,
            Self::FirstRev => Self::First,
            Self::Last => Self::LastRev,
            Self::LastRev => Self::Last,
            other => other,
        }
    }
}

/// Penalty-brake predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PenaltyCondition {
    /// No constraint
    #[default]
    Ignore,
    /// No penalty application in effect
    No,
    /// Penalty application in effect
    Yes,
}

impl PenaltyCondition {
    /// Convert a raw authored value; `None` when unrecognized.
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Ignore),
            1 => Some(Self::No),
            2 => Some(Self::Yes),
            _ => None,
        }
    }
}

/// AI/player control predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlCondition {
    /// No constraint
    #[default]
    Ignore,
    /// Under AI control
    Ai,
    /// Under player control
    Player,
}

impl ControlCondition {
    /// Convert a raw authored value; `None` when unrecognized.
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Ignore),
            1 => Some(Self::Ai),
            2 => Some(Self::Player),
            _ => None,
        }
    }
}

/// In-service predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceCondition {
    /// No constraint
    #[default]
    Ignore,
    /// Stored / out of service
    No,
    /// In service
    Yes,
}

impl ServiceCondition {
    /// Convert a raw authored value; `None` when unrecognized.
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Ignore),
            1 => Some(Self::No),
            2 => Some(Self::Yes),
            _ => None,
        }
    }
}

/// Time-of-day predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeOfDayCondition {
    /// No constraint
    #[default]
    Ignore,
    /// Daytime only
    Day,
    /// Nighttime only
    Night,
}

impl TimeOfDayCondition {
    /// Convert a raw authored value; `None` when unrecognized.
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Ignore),
            1 => Some(Self::Day),
            2 => Some(Self::Night),
            _ => None,
        }
    }
}

/// Weather predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeatherCondition {
    /// No constraint
    #[default]
    Ignore,
    /// Clear weather only
    Clear,
    /// Rain only
    Rain,
    /// Snow only
    Snow,
}

impl WeatherCondition {
    /// Convert a raw authored value; `None` when unrecognized.
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Ignore),
            1 => Some(Self::Clear),
            2 => Some(Self::Rain),
            3 => Some(Self::Snow),
            _ => None,
        }
    }
}

/// Coupling predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CouplingCondition {
    /// No constraint
    #[default]
    Ignore,
    /// Coupled at the front only
    Front,
    /// Coupled at the rear only
    Rear,
    /// Coupled at both ends
    Both,
}

impl CouplingCondition {
    /// Convert a raw authored value; `None` when unrecognized.
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Ignore),
            1 => Some(Self::Front),
            2 => Some(Self::Rear),
            3 => Some(Self::Both),
            _ => None,
        }
    }
}

/// The eight independent enablement predicates of one light. Each defaults
/// to `Ignore`, so an empty conditions block means "always on".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LightConditions {
    /// Headlight-switch predicate
    pub headlight: HeadlightCondition,
    /// Position-in-train predicate
    pub unit: UnitCondition,
    /// Penalty-brake predicate
    pub penalty: PenaltyCondition,
    /// AI/player control predicate
    pub control: ControlCondition,
    /// In-service predicate
    pub service: ServiceCondition,
    /// Time-of-day predicate
    pub time_of_day: TimeOfDayCondition,
    /// Weather predicate
    pub weather: WeatherCondition,
    /// Coupling predicate
    pub coupling: CouplingCondition,
}

/// Immutable description of one authored light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightDefinition {
    /// Stable position of this light in the authored list
    pub index: usize,
    /// Glow sprite or cone beam
    pub kind: LightKind,
    /// Enablement predicates
    pub conditions: LightConditions,
    /// Play keyframes forward-then-back instead of forward-and-wrap
    pub cycle: bool,
    /// Fade-in duration in seconds
    pub fade_in: f32,
    /// Fade-out duration in seconds
    pub fade_out: f32,
    /// Ordered, non-empty keyframe list
    pub keyframes: Vec<Keyframe>,
}

impl LightDefinition {
    /// Rear-facing copy of this light: every keyframe mirrored, the unit
    /// predicate's forward/reversed variants swapped. The authored index
    /// is kept so beam selection still follows authored order.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut copy = self.clone();
        copy.keyframes = self.keyframes.iter().map(Keyframe::mirrored).collect();
        copy.conditions.unit = copy.conditions.unit.mirrored();
        copy
    }
}
