//! Configuration for schema inference

use serde::{Deserialize, Serialize};

/// Default cap on sampled records
pub const DEFAULT_MAX_ROWS: usize = 5000;

/// Default number of examples kept per field
pub const DEFAULT_MAX_EXAMPLES: usize = 3;

/// Default length limit for a rendered example, in characters
pub const DEFAULT_EXAMPLE_MAX_CHARS: usize = 80;

/// Configuration for schema inference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfig {
    /// Maximum number of records to sample
    pub max_rows: usize,

    /// Maximum number of examples to collect per field
    pub max_examples: usize,

    /// Examples longer than this are truncated
    pub example_max_chars: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_examples: DEFAULT_MAX_EXAMPLES,
            example_max_chars: DEFAULT_EXAMPLE_MAX_CHARS,
        }
    }
}

impl InferenceConfig {
    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }
}

/// Builder for InferenceConfig
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Set the row cap
    pub fn max_rows(mut self, rows: usize) -> Self {
        self.config.max_rows = rows;
        self
    }

    /// Set the maximum number of examples per field
    pub fn max_examples(mut self, max: usize) -> Self {
        self.config.max_examples = max;
        self
    }

    /// Set the example truncation length
    pub fn example_max_chars(mut self, chars: usize) -> Self {
        self.config.example_max_chars = chars;
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}
