use serde::{Deserialize, Serialize};

use super::defaults;

/// Query expansion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Cap on tokens appended to the original query.
    pub max_expansions: usize,
    /// Whether domain-context phrases are generated at all.
    pub include_context: bool,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_expansions: defaults::DEFAULT_MAX_EXPANSIONS,
            include_context: true,
        }
    }
}
