use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::WordGridError;
use crate::{MAX_SIZE, NUMBER_OF_RESULTS};

/// Limits applied when building an index and ranking its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Maximum number of rows and maximum number of columns.
    pub max_size: usize,
    /// Maximum length of the ranked result list.
    pub number_of_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_size: MAX_SIZE,
            number_of_results: NUMBER_OF_RESULTS,
        }
    }
}

impl SearchConfig {
    /// Parse a JSON config object. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, WordGridError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordGridError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Reject limits under which every search comes back empty.
    pub fn validate(&self) -> Result<(), WordGridError> {
        if self.max_size == 0 {
            return Err(WordGridError::Config("max_size must be at least 1".into()));
        }
        if self.number_of_results == 0 {
            return Err(WordGridError::Config(
                "number_of_results must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
