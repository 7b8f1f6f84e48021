//! Light-set expansion
//!
//! Expands an authored light list into the runtime list a vehicle
//! actually animates. Headlight cones are authored once, facing forward;
//! a mirrored rear-facing copy of every cone light is generated here so
//! the vehicle lights up correctly in both directions of travel.

use thiserror::Error;

use crate::lights::definition::{LightDefinition, LightKind};

/// Errors raised while building a vehicle's runtime light set.
#[derive(Debug, Error)]
pub enum LightsError {
    /// The authored list contained no lights
    #[error("light set contains no lights")]
    EmptyLightSet,
}

/// Expand authored definitions into the runtime list.
///
/// Mirrored copies keep their source light's authored index, so beam
/// selection still follows authored order.
///
/// # Errors
///
/// Returns [`LightsError::EmptyLightSet`] when `definitions` is empty.
pub fn expand_light_set(
    definitions: Vec<LightDefinition>,
) -> Result<Vec<LightDefinition>, LightsError> {
    if definitions.is_empty() {
        return Err(LightsError::EmptyLightSet);
    }

    let mut expanded = definitions;
    let mirrored: Vec<LightDefinition> = expanded
        .iter()
        .filter(|definition| definition.kind == LightKind::Cone)
        .map(LightDefinition::mirrored)
        .collect();
    expanded.extend(mirrored);
    Ok(expanded)
}
