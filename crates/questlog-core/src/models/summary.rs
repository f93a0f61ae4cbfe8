//! Quest summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Difficulty, Quest, QuestId, QuestKind};
use crate::progress;

/// Summary line for a quest card, derived fresh from the quest on every
/// call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestSummary {
    /// Quest ID
    pub id: QuestId,
    /// Title of the quest
    pub title: String,
    /// Category label
    pub kind: QuestKind,
    /// Difficulty label
    pub difficulty: Difficulty,
    /// Rounded completion percentage
    pub progress: u8,
    /// Total number of steps
    pub total_steps: u32,
    /// Number of completed steps
    pub completed_steps: u32,
    /// XP yielded by the whole quest
    pub total_xp: u64,
    /// XP of completed steps
    pub earned_xp: u64,
    /// Whether every step is done
    pub completed: bool,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Target date as supplied at creation
    pub target_date: Option<String>,
}

impl From<&Quest> for QuestSummary {
    fn from(quest: &Quest) -> Self {
        let plan = &quest.plan;

        Self {
            id: quest.id.clone(),
            title: quest.quest_title.clone(),
            kind: progress::classify_kind(&quest.quest_title, &quest.metadata),
            difficulty: progress::classify_difficulty(plan),
            progress: progress::overall_progress(plan),
            total_steps: plan.len() as u32,
            completed_steps: progress::completed_count(plan) as u32,
            total_xp: progress::total_xp(plan),
            earned_xp: progress::earned_xp(plan),
            completed: progress::is_fully_completed(plan),
            created_at: quest.created_at,
            target_date: quest.metadata.target_date.clone(),
        }
    }
}
