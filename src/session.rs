//! Persisting the picker record between runs.
//!
//! The picker core only produces and consumes [`PersistedState`]; this module
//! stores it as JSON on disk.

use std::path::Path;

use harmony_wheel::{ColorPicker, PersistedState, PickerLayout, StateRestoreError};

/// Errors that can occur while loading or saving a session file.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// I/O error when reading/writing the session file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record parsed but holds invalid values
    #[error("Invalid picker state: {0}")]
    Restore(#[from] StateRestoreError),
}

/// Read a persisted record without validating it.
pub fn load_state(path: &Path) -> Result<PersistedState, SessionError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Write a persisted record, creating parent directories.
pub fn save_state(path: &Path, state: &PersistedState) -> Result<(), SessionError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(state)?)?;
    log::info!("Saved picker state to {:?}", path);
    Ok(())
}

/// Build a picker from a session file, failing on any problem.
pub fn load_picker(path: &Path, layout: PickerLayout) -> Result<ColorPicker, SessionError> {
    let state = load_state(path)?;
    Ok(ColorPicker::from_persisted(&state, layout)?)
}

/// Restore `picker` from a session file if one exists.
///
/// A missing file leaves the picker untouched and returns `false`. An
/// unreadable or invalid file is logged and resets the picker to its
/// defaults. Returns whether a valid record was applied.
pub fn restore_picker(picker: &mut ColorPicker, path: &Path) -> bool {
    if !path.exists() {
        log::debug!("No picker state found at {:?}", path);
        return false;
    }

    match load_state(path) {
        Ok(state) => match picker.restore(&state) {
            Ok(()) => {
                log::info!("Restored picker state from {:?}", path);
                true
            }
            Err(e) => {
                log::warn!("Picker state in {:?} is invalid: {}", path, e);
                false
            }
        },
        Err(e) => {
            log::warn!("Failed to read picker state {:?}: {}", path, e);
            // Same recovery as an invalid record
            picker.reset();
            false
        }
    }
}
