//! Known policy tags a user can reference in a question.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoliciesConfig {
    /// Tags such as `@leave`. Recognized tags in a message are sent as
    /// `policyKeys` alongside the query.
    pub keys: Vec<String>,
}

impl Default for PoliciesConfig {
    fn default() -> Self {
        Self {
            keys: [
                "@dress_code",
                "@leave",
                "@annual_leave",
                "@employee_handbook",
                "@hybrid_work",
                "@teleworking_policy",
                "@teleworking_guidelines",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
        }
    }
}
