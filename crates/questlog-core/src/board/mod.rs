//! Session-scoped quest board.
//!
//! [`QuestBoard`] is what interfaces talk to. It pairs one [`QuestStore`]
//! with a [`PlanSource`] and serializes writers through a single lock on the
//! store, so one board can be shared by every request of an MCP session.
//!
//! ```text
//! PlanSource ──▶ intake::prepare ──▶ QuestStore ──▶ progress::derive_focus
//!  (fetch)        (defaults, checks)   (create/toggle)   (every read)
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use questlog_core::{QuestBoardBuilder, params::{CreateQuest, ToggleStep}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let board = QuestBoardBuilder::new()
//!     .with_planner_url(Some("http://localhost:3001/api/quests/create-plan"))
//!     .build()?;
//!
//! let quest = board
//!     .create_quest(&CreateQuest {
//!         title: "Learn Rust".to_string(),
//!         description: "Write a CLI tool end to end".to_string(),
//!         target_date: "2026-12-01".to_string(),
//!         use_ai: true,
//!     })
//!     .await?;
//!
//! board
//!     .toggle_step(&ToggleStep { quest_id: quest.id.to_string(), day: 1 })
//!     .await;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    source::{HttpPlanSource, PlanSource},
    store::QuestStore,
};

pub mod builder;
pub mod quest_ops;

#[cfg(test)]
mod tests;

pub use builder::QuestBoardBuilder;

/// Shared handle over a session's quests and its planner.
pub struct QuestBoard<S = HttpPlanSource> {
    pub(crate) store: Arc<Mutex<QuestStore>>,
    pub(crate) source: Arc<S>,
}

impl<S: PlanSource> QuestBoard<S> {
    /// Creates a board with an empty store around the given plan source.
    pub fn with_source(source: S) -> Self {
        Self {
            store: Arc::new(Mutex::new(QuestStore::new())),
            source: Arc::new(source),
        }
    }

    /// The plan source used for [`QuestBoard::create_quest`].
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S> Clone for QuestBoard<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            source: Arc::clone(&self.source),
        }
    }
}
