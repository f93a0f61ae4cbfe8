//! Data models for quests and their steps.
//!
//! These are plain values. The [`crate::store::QuestStore`] owns the
//! collection of [`Quest`]s and is the only writer of
//! [`QuestStep::completed`]; everything else in this module is either
//! immutable after creation or derived.
//!
//! Display implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use questlog_core::models::{Quest, QuestId, QuestMetadata, QuestStep};
//! use jiff::Timestamp;
//!
//! let quest = Quest {
//!     id: QuestId::from("quest-1"),
//!     quest_title: "Learn Rust".to_string(),
//!     plan: vec![QuestStep {
//!         day: 1,
//!         task_title: "Install the toolchain".to_string(),
//!         task_description: "Run rustup".to_string(),
//!         duration: "15 minutes".to_string(),
//!         xp: 20,
//!         completed: false,
//!     }],
//!     created_at: Timestamp::now(),
//!     metadata: QuestMetadata::default(),
//! };
//! assert_eq!(quest.step(1).map(|s| s.xp), Some(20));
//! ```

pub mod focus;
pub mod labels;
pub mod quest;
pub mod step;
pub mod summary;


pub use focus::FocusView;
pub use labels::{Difficulty, QuestKind};
pub use quest::{Quest, QuestId, QuestMetadata};
pub use step::QuestStep;
pub use summary::QuestSummary;
