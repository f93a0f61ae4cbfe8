//! Quest model definition and identifiers.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::QuestStep;

/// Session-stable identifier of a quest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct QuestId(String);

impl QuestId {
    /// Allocates a fresh identifier of the form `quest-<uuid>`.
    pub fn generate() -> Self {
        Self(format!("quest-{}", Uuid::new_v4().simple()))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for QuestId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Provenance captured from the creation form. Presentation only; the
/// progress engine never reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestMetadata {
    /// Goal description as the user typed it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_description: Option<String>,

    /// Target completion date as supplied (`YYYY-MM-DD`), not interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
}

/// A user goal decomposed into an ordered sequence of steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    /// Unique identifier for the quest
    pub id: QuestId,

    /// Title of the quest
    pub quest_title: String,

    /// Steps ordered by ascending `day`
    pub plan: Vec<QuestStep>,

    /// Timestamp when the quest was created (UTC)
    pub created_at: Timestamp,

    /// Optional provenance metadata
    #[serde(flatten)]
    pub metadata: QuestMetadata,
}

impl Quest {
    /// Finds a step by its `day` ordinal.
    pub fn step(&self, day: u32) -> Option<&QuestStep> {
        self.plan.iter().find(|step| step.day == day)
    }
}
