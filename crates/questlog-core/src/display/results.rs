//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{
    models::{FocusView, Quest, QuestStep},
    progress,
};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use questlog_core::{
///     display::CreateResult,
///     models::{Quest, QuestId, QuestMetadata},
/// };
/// use jiff::Timestamp;
///
/// let quest = Quest {
///     id: QuestId::from("quest-1"),
///     quest_title: "Empty Quest".to_string(),
///     plan: vec![],
///     created_at: Timestamp::now(),
///     metadata: QuestMetadata::default(),
/// };
///
/// let output = CreateResult::new(quest).to_string();
/// assert!(output.contains("Created quest with ID: quest-1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Quest> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created quest with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", QuestDetails::new(&self.resource))
    }
}

/// A quest together with its freshly derived focus view.
pub struct QuestDetails<'a> {
    pub quest: &'a Quest,
    pub focus: FocusView,
}

impl<'a> QuestDetails<'a> {
    /// Derives the focus view for the quest.
    pub fn new(quest: &'a Quest) -> Self {
        Self {
            quest,
            focus: progress::derive_focus(&quest.plan),
        }
    }
}

impl fmt::Display for QuestDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.quest)?;
        writeln!(f)?;
        write!(f, "{}", self.focus)
    }
}

/// Outcome of a toggle request.
pub struct ToggleResult {
    pub quest_id: String,
    pub day: u32,
    /// The step after toggling; `None` when nothing matched
    pub step: Option<QuestStep>,
}

impl fmt::Display for ToggleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.step {
            Some(step) => writeln!(
                f,
                "Day {} of quest {} is now {}",
                step.day,
                self.quest_id,
                step.status_with_icon()
            ),
            None => writeln!(
                f,
                "No step for day {} in quest {}; nothing changed",
                self.day, self.quest_id
            ),
        }
    }
}
