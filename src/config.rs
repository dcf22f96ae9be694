use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest edit distance the corrector accepts.
pub const MAX_SUPPORTED_EDIT_DISTANCE: usize = 4;

pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;
pub const DEFAULT_COMPLETION_LIMIT: usize = 6;
pub const DEFAULT_CORRECTION_TOP_K: usize = 3;
pub const DEFAULT_MIN_WORD_LENGTH_FOR_CORRECTION: usize = 3;

fn get_default_max_edit_distance() -> usize {
    DEFAULT_MAX_EDIT_DISTANCE
}

fn get_default_completion_limit() -> usize {
    DEFAULT_COMPLETION_LIMIT
}

fn get_default_correction_top_k() -> usize {
    DEFAULT_CORRECTION_TOP_K
}

fn get_default_min_word_length_for_correction() -> usize {
    DEFAULT_MIN_WORD_LENGTH_FOR_CORRECTION
}

/// Tuning knobs for [`InputRouter`](crate::InputRouter) and the
/// [`Corrector`](crate::Corrector) it builds. Missing JSON keys take their
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssistConfig {
    #[serde(default = "get_default_max_edit_distance")]
    pub max_edit_distance: usize,
    #[serde(default = "get_default_completion_limit")]
    pub completion_limit: usize,
    #[serde(default = "get_default_correction_top_k")]
    pub correction_top_k: usize,
    #[serde(default = "get_default_min_word_length_for_correction")]
    pub min_word_length_for_correction: usize,
}

impl Default for AssistConfig {
    fn default() -> Self {
        AssistConfig {
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            completion_limit: DEFAULT_COMPLETION_LIMIT,
            correction_top_k: DEFAULT_CORRECTION_TOP_K,
            min_word_length_for_correction: DEFAULT_MIN_WORD_LENGTH_FOR_CORRECTION,
        }
    }
}

impl AssistConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: AssistConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_max_edit_distance(self.max_edit_distance)
    }
}

pub(crate) fn validate_max_edit_distance(max_edit_distance: usize) -> Result<(), ConfigError> {
    if max_edit_distance > MAX_SUPPORTED_EDIT_DISTANCE {
        return Err(ConfigError::EditDistanceTooLarge {
            requested: max_edit_distance,
            max: MAX_SUPPORTED_EDIT_DISTANCE,
        });
    }
    Ok(())
}
