//! Quest step model definition.

use serde::{Deserialize, Serialize};

/// One ordinal unit of work within a quest.
///
/// `day` is a position in the quest's sequence, not a calendar date. Only
/// `completed` changes after the quest is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct QuestStep {
    /// Ordinal of the step, unique and ascending within a quest
    pub day: u32,

    /// Short title of the task
    pub task_title: String,

    /// Free-text description of the task
    pub task_description: String,

    /// Free-text effort estimate, opaque to the engine
    pub duration: String,

    /// Reward granted for the step
    pub xp: u32,

    /// Whether the step has been done
    pub completed: bool,
}

impl QuestStep {
    /// Returns a copy of this step with `completed` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}
