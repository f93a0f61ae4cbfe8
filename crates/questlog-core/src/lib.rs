//! Core library for the Questlog quest tracker.
//!
//! A quest is a goal broken into an ordered sequence of steps, each carrying
//! an XP reward and a completion flag. This crate holds the logic behind the
//! dashboard: normalizing plans from the external planner ([`intake`]),
//! storing a session's quests ([`store`]), deriving progress and the
//! today/tomorrow focus view ([`progress`]), and coordinating all of it for
//! concurrent callers ([`board`]).
//!
//! # Quick Start
//!
//! ```rust
//! use questlog_core::{
//!     intake::{self, RawStep},
//!     models::QuestMetadata,
//!     progress::derive_focus,
//!     store::QuestStore,
//! };
//!
//! let raw = vec![
//!     RawStep { task_title: "Outline".into(), xp: 50, ..Default::default() },
//!     RawStep { task_title: "Draft".into(), xp: 40, ..Default::default() },
//! ];
//! let steps = intake::prepare(raw)?;
//!
//! let mut store = QuestStore::new();
//! let quest = store.create("Write a Novel", steps, QuestMetadata::default());
//! store.toggle_step(&quest.id, 1);
//!
//! let view = derive_focus(&store.get(&quest.id).unwrap().plan);
//! assert_eq!(view.overall_progress, 50);
//! assert_eq!(view.todays_step.map(|s| s.task_title), Some("Draft".to_string()));
//! # Ok::<(), questlog_core::QuestError>(())
//! ```

pub mod board;
pub mod config;
pub mod display;
pub mod error;
pub mod intake;
pub mod models;
pub mod params;
pub mod progress;
pub mod source;
pub mod store;

// Re-export commonly used types
pub use board::{QuestBoard, QuestBoardBuilder};
pub use config::BoardConfig;
pub use display::{CreateResult, QuestDetails, QuestSummaries, ToggleResult};
pub use error::{QuestError, Result};
pub use intake::{RawPlan, RawStep};
pub use models::{
    Difficulty, FocusView, Quest, QuestId, QuestKind, QuestMetadata, QuestStep, QuestSummary,
};
pub use params::{CreateQuest, Id, ImportQuest, ToggleStep};
pub use progress::derive_focus;
pub use source::{HttpPlanSource, PlanSource};
pub use store::QuestStore;
