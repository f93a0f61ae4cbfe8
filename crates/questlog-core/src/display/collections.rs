//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::QuestSummary;

/// Newtype wrapper for displaying a list of quest summaries.
///
/// Titles are left to the caller; an empty list renders a placeholder.
///
/// # Examples
///
/// ```rust
/// use questlog_core::display::QuestSummaries;
///
/// let summaries = QuestSummaries(vec![]);
/// assert!(summaries.to_string().contains("No active quests yet."));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuestSummaries(pub Vec<QuestSummary>);

impl QuestSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Index<usize> for QuestSummaries {
    type Output = QuestSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for QuestSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No active quests yet.")?;
            return writeln!(f, "Create one to start your adventure!");
        }

        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}
