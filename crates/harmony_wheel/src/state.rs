//! Flat record the host persists across save/restore cycles.
//!
//! The record is deliberately permissive on the way in (every field is
//! optional) so that a truncated or hand-edited record deserializes and is
//! then rejected by [`PersistedState::restore`] with a precise error instead
//! of failing inside the serializer.

use serde::{Deserialize, Serialize};

use crate::color::{normalize_hue, ColorState};
use crate::harmony::HarmonyType;

/// `{hue, saturation, value, harmony_type}` as stored by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PersistedState {
    pub hue: Option<f32>,
    pub saturation: Option<f32>,
    pub value: Option<f32>,
    /// Ordinal of the harmony type (see [`HarmonyType::ordinal`])
    pub harmony_type: Option<u32>,
}

impl PersistedState {
    /// Snapshot a color and harmony type.
    pub fn capture(color: &ColorState, harmony: HarmonyType) -> Self {
        Self {
            hue: Some(color.hue()),
            saturation: Some(color.saturation()),
            value: Some(color.value()),
            harmony_type: Some(harmony.ordinal()),
        }
    }

    /// Validate the record and rebuild the picker state.
    ///
    /// Hue is cyclic and is wrapped into `[0, 360)`; saturation and value
    /// must already lie in `[0, 1]`.
    pub fn restore(&self) -> Result<(ColorState, HarmonyType), StateRestoreError> {
        let hue = finite("hue", self.hue)?;
        let saturation = unit("saturation", self.saturation)?;
        let value = unit("value", self.value)?;

        let ordinal = self
            .harmony_type
            .ok_or(StateRestoreError::MissingField {
                field: "harmony_type",
            })?;
        let harmony = HarmonyType::from_ordinal(ordinal)
            .ok_or(StateRestoreError::UnknownHarmonyType { ordinal })?;

        Ok((
            ColorState::new(normalize_hue(hue), saturation, value),
            harmony,
        ))
    }
}

fn finite(field: &'static str, value: Option<f32>) -> Result<f32, StateRestoreError> {
    let value = value.ok_or(StateRestoreError::MissingField { field })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StateRestoreError::NonFinite { field, value })
    }
}

fn unit(field: &'static str, value: Option<f32>) -> Result<f32, StateRestoreError> {
    let value = finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(StateRestoreError::OutOfRange { field, value })
    }
}

/// Errors that can occur when restoring a persisted record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StateRestoreError {
    /// Required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// Field holds NaN or infinity
    #[error("Field {field} is not a finite number: {value}")]
    NonFinite { field: &'static str, value: f32 },

    /// Field lies outside its valid range
    #[error("Field {field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: f32 },

    /// Harmony ordinal does not name a harmony type
    #[error("Unknown harmony type ordinal: {ordinal}")]
    UnknownHarmonyType { ordinal: u32 },
}
