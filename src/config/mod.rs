//! Snapshot ingestion
//!
//! Decodes the persisted record tree (JSON) into [`Profile`] snapshots. The
//! persisted form marks ungraded assignments with `-1` in the numerator or
//! denominator; that sentinel never reaches the engine.

use serde_json::Value;

use crate::error::{GradebookError, Result};
use crate::model::{Class, Profile};

/// Decode a profile from its JSON text
pub fn profile_from_json(json: &str) -> Result<Profile> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a profile from an already parsed JSON value
pub fn profile_from_value(value: Value) -> Result<Profile> {
    if !value.is_object() {
        return Err(GradebookError::InvalidRecord(
            "profile must be a JSON object".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// Encode a profile back into the persisted JSON form
pub fn profile_to_json(profile: &Profile) -> Result<String> {
    Ok(serde_json::to_string(profile)?)
}

/// Decode a single class from its JSON text
pub fn class_from_json(json: &str) -> Result<Class> {
    Ok(serde_json::from_str(json)?)
}
