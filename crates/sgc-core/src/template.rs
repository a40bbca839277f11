//! Reusable job templates

use serde::{Deserialize, Serialize};

/// A (cron, pattern, content) triple that can be applied to a job form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    #[serde(rename = "ID", alias = "id")]
    pub id: u64,
    pub name: String,
    pub cron: String,
    pub pattern: String,
    pub content: String,
}

impl Template {
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
