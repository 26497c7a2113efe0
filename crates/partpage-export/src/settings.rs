//! Settings file serializer.
//!
//! A settings file is the [`GeneratorState`] as pretty-printed JSON, in
//! the same camelCase shape that is persisted to browser storage.  There
//! is no version field; importing a file replaces the whole state.

use partpage_core::{GeneratorState, StateStore, Storage, StoreError};

/// Errors reading or writing a settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The file is not JSON, or not JSON of the expected shape.
    #[error("خطأ في قراءة الملف: {0}")]
    Parse(serde_json::Error),

    /// The state could not be serialized.
    #[error("failed to serialize settings: {0}")]
    Serialize(serde_json::Error),
}

/// Errors from [`import_settings`].
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The file was rejected; the store was not touched.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The imported state replaced the old one but could not be saved.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Serialize `state` as a settings file (JSON, two-space indent).
///
/// # Errors
///
/// Returns [`SettingsError::Serialize`] if serialization fails.
pub fn to_settings_json(state: &GeneratorState) -> Result<String, SettingsError> {
    serde_json::to_string_pretty(state).map_err(SettingsError::Serialize)
}

/// Parse a settings file.
///
/// Only the shape is checked; field values are taken as they are.
///
/// # Errors
///
/// Returns [`SettingsError::Parse`] if `text` is not a settings document.
pub fn parse_settings(text: &str) -> Result<GeneratorState, SettingsError> {
    serde_json::from_str(text).map_err(SettingsError::Parse)
}

/// Parse a settings file and, if it is valid, make it the store's state.
///
/// # Errors
///
/// Returns [`ImportError::Settings`] without changing `store` if `text`
/// does not parse, or [`ImportError::Store`] if the new state could not
/// be persisted (it is still applied in memory).
pub fn import_settings<S: Storage>(
    store: &mut StateStore<S>,
    text: &str,
) -> Result<(), ImportError> {
    let state = parse_settings(text)?;
    store.replace(state)?;
    Ok(())
}
