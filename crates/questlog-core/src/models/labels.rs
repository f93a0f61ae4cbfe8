//! Presentation labels derived from a quest.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category badge shown next to a quest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    /// Repeats every day
    Daily,

    /// Repeats every week
    Weekly,

    /// Reading or learning goal
    Knowledge,

    /// Generic generated plan
    #[default]
    Plan,
}

impl FromStr for QuestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(QuestKind::Daily),
            "weekly" => Ok(QuestKind::Weekly),
            "knowledge" => Ok(QuestKind::Knowledge),
            "plan" | "ai plan" => Ok(QuestKind::Plan),
            _ => Err(format!("Invalid quest kind: {s}")),
        }
    }
}

impl QuestKind {
    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestKind::Daily => "Daily",
            QuestKind::Weekly => "Weekly",
            QuestKind::Knowledge => "Knowledge",
            QuestKind::Plan => "AI Plan",
        }
    }
}

/// Difficulty badge shown next to a quest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

impl Difficulty {
    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}
