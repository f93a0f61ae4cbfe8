//! Focus view produced by the progress engine.

use serde::{Deserialize, Serialize};

use super::QuestStep;

/// Derived snapshot of a quest's plan surfaced for action.
///
/// Always recomputed from the full step sequence by
/// [`crate::progress::derive_focus`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FocusView {
    /// First step that is not completed
    pub todays_step: Option<QuestStep>,

    /// Step right after today's step, if any
    pub tomorrows_step: Option<QuestStep>,

    /// Open steps positioned before today's step
    pub missed_steps: Vec<QuestStep>,

    /// Rounded completion percentage, 0 to 100
    pub overall_progress: u8,

    /// True once every step of a non-empty plan is done
    pub is_fully_completed: bool,

    /// Sum of XP over every step, completed or not
    pub total_xp: u64,
}
