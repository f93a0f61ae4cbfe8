//! Parameter structures for questlog operations.
//!
//! Shared between the CLI and the MCP server. Interface layers add their own
//! framework derives in wrapper types and convert into these with `From`,
//! so the core stays free of clap. JSON schema derives are only compiled
//! with the `schema` feature. Every struct uses camelCase field names on the
//! wire, the same as the planner payload and the step fields.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{intake::RawStep, models::QuestMetadata};

/// Parameters for operations addressing one quest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the quest to operate on
    pub id: String,
}

/// Parameters for creating a quest via the external planner.
///
/// Serialized camelCase; this is the request body sent to the planner.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateQuest {
    /// Title of the quest (required)
    pub title: String,
    /// Goal description; what success looks like
    pub description: String,
    /// Target completion date (`YYYY-MM-DD`)
    pub target_date: String,
    /// Ask the planner to break the goal down with AI assistance
    #[serde(default = "default_use_ai")]
    pub use_ai: bool,
}

fn default_use_ai() -> bool {
    true
}

impl CreateQuest {
    /// Provenance kept on the created quest.
    pub fn metadata(&self) -> QuestMetadata {
        QuestMetadata {
            original_description: Some(self.description.clone()),
            target_date: Some(self.target_date.clone()),
        }
    }
}

/// Parameters for creating a quest from a plan the caller already has.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ImportQuest {
    /// Title of the quest
    pub title: String,
    /// Ordered steps; `day` and `completed` may be omitted
    pub plan: Vec<RawStep>,
    /// Optional goal description
    #[serde(default)]
    pub original_description: Option<String>,
    /// Optional target date
    #[serde(default)]
    pub target_date: Option<String>,
}

impl ImportQuest {
    /// Provenance kept on the created quest.
    pub fn metadata(&self) -> QuestMetadata {
        QuestMetadata {
            original_description: self.original_description.clone(),
            target_date: self.target_date.clone(),
        }
    }
}

/// Parameters for flipping one step's completion flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ToggleStep {
    /// ID of the quest
    pub quest_id: String,
    /// Day ordinal of the step within the quest
    pub day: u32,
}
