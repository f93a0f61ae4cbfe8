//! Display formatting and result wrapper types.
//!
//! Domain models implement [`std::fmt::Display`] as markdown in [`models`];
//! the wrappers here add collection and operation-result context. The CLI
//! renders the markdown with termimad and the MCP server returns it as tool
//! text, so both interfaces print the same thing.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (QuestSummaries)
//! - [`results`]: Operation result types (CreateResult, ToggleResult, QuestDetails)
//! - [`models`]: Display implementations for domain models
//!
//! ## Example
//!
//! ```rust
//! use questlog_core::{display::ToggleResult, progress::derive_focus};
//!
//! let view = derive_focus(&[]);
//! assert!(view.to_string().contains("No steps in this quest."));
//!
//! let result = ToggleResult { quest_id: "quest-1".to_string(), day: 4, step: None };
//! assert_eq!(result.to_string(), "No step for day 4 in quest quest-1; nothing changed\n");
//! ```

pub mod collections;
pub mod models;
pub mod results;

pub use collections::QuestSummaries;
pub use results::{CreateResult, QuestDetails, ToggleResult};
