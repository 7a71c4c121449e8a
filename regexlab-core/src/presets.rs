//! Preset catalog for the editor.
//!
//! A preset is a canned pattern/flags/test/replace tuple. The built-in
//! catalog ships embedded in the binary; user collections are plain JSON
//! arrays of the same shape, overlaid onto the defaults by id.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::RegexLabError;
use crate::pattern::{compile, PatternSpec};

/// A canned editor state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Stable identifier, unique within a collection (e.g. "email").
    pub id: String,
    /// Human-readable label.
    pub name: String,
    pub pattern: String,
    pub flags: String,
    /// Sample text the preset is demonstrated against.
    pub test: String,
    /// Replacement template, host backreference syntax.
    #[serde(default)]
    pub replace: Option<String>,
}

static DEFAULT_PRESETS: Lazy<Vec<Preset>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../config/default_presets.json"))
        .expect("embedded preset catalog is valid JSON")
});

/// The built-in presets: email, url, ipv4 and iso-date.
pub fn default_presets() -> &'static [Preset] {
    &DEFAULT_PRESETS
}

/// Overlays `user` presets onto `defaults`.
///
/// A user preset with a known id replaces the default in place; new ids are
/// appended in their own order.
pub fn merge_presets(defaults: Vec<Preset>, user: Vec<Preset>) -> Vec<Preset> {
    let mut merged = defaults;
    for user_preset in user {
        match merged.iter_mut().find(|p| p.id == user_preset.id) {
            Some(slot) => {
                debug!("user preset '{}' overrides a default", user_preset.id);
                *slot = user_preset;
            }
            None => merged.push(user_preset),
        }
    }
    merged
}

/// Validates collection integrity: non-empty unique ids and patterns that
/// compile under their normalized flags. All problems are reported in one
/// message.
pub fn validate_presets(presets: &[Preset]) -> Result<(), RegexLabError> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for preset in presets {
        if preset.id.is_empty() {
            errors.push("A preset has an empty `id` field.".to_string());
        } else if !seen.insert(preset.id.as_str()) {
            errors.push(format!("Duplicate preset id found: '{}'.", preset.id));
        }

        if let Err(e) = compile(&PatternSpec::new(&preset.pattern, &preset.flags)) {
            errors.push(format!("Preset '{}' has an invalid pattern: {e}", preset.id));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(RegexLabError::PresetValidation(errors.join("\n")))
    }
}
