//! Command handlers and clap argument wrappers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so `questlog-core` never depends on clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → QuestBoard
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Args;
use log::{debug, warn};
use questlog_core::{
    CreateResult, QuestBoard, QuestDetails, QuestSummary, RawPlan, RawStep, ToggleResult,
    params::{CreateQuest, Id, ImportQuest, ToggleStep},
};
use serde::Deserialize;

use crate::renderer::TerminalRenderer;

/// Create a quest from a goal
///
/// Sends the goal to the external planner and shows the generated quest with
/// its focus view.
#[derive(Args)]
pub struct CreateArgs {
    /// Title of the quest
    pub title: String,
    /// What the goal is and what success looks like
    #[arg(short, long)]
    pub description: String,
    /// Target completion date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_target_date)]
    pub target_date: String,
    /// Ask the planner for a plain breakdown without AI assistance
    #[arg(long)]
    pub no_ai: bool,
}

impl From<CreateArgs> for CreateQuest {
    fn from(val: CreateArgs) -> Self {
        CreateQuest {
            title: val.title,
            description: val.description,
            target_date: val.target_date,
            use_ai: !val.no_ai,
        }
    }
}

/// Show the focus view of a plan file
///
/// The file holds either `{"questTitle": ..., "plan": [...]}` or a bare array
/// of steps.
#[derive(Args)]
pub struct FocusArgs {
    /// Path to the plan JSON file
    pub plan_file: PathBuf,
    /// Days to toggle before showing the focus view, e.g. `1,2`
    #[arg(short, long, value_delimiter = ',')]
    pub complete: Vec<u32>,
}

/// Accepted layouts of a plan file.
#[derive(Deserialize)]
#[serde(untagged)]
enum PlanFile {
    Plan(RawPlan),
    Steps(Vec<RawStep>),
}

impl PlanFile {
    fn into_import(self, path: &Path) -> ImportQuest {
        let (quest_title, plan) = match self {
            PlanFile::Plan(raw) => (raw.quest_title, raw.plan),
            PlanFile::Steps(steps) => (String::new(), steps),
        };

        let title = if quest_title.trim().is_empty() {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Imported quest".to_string())
        } else {
            quest_title
        };

        ImportQuest {
            title,
            plan,
            original_description: None,
            target_date: None,
        }
    }
}

fn parse_target_date(value: &str) -> Result<String, String> {
    value
        .parse::<jiff::civil::Date>()
        .map(|date| date.to_string())
        .map_err(|e| format!("expected a date like 2026-12-31: {e}"))
}

/// Runs one CLI command against a fresh board.
pub struct Cli {
    board: QuestBoard,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(board: QuestBoard, renderer: TerminalRenderer) -> Self {
        Self { board, renderer }
    }

    pub async fn handle_create(&self, args: CreateArgs) -> Result<()> {
        let params = CreateQuest::from(args);
        debug!("create: {params:?}");

        let quest = self
            .board
            .create_quest(&params)
            .await
            .context("Failed to create quest")?;

        self.renderer.render(&CreateResult::new(quest).to_string());
        Ok(())
    }

    pub async fn handle_focus(&self, args: FocusArgs) -> Result<()> {
        let path = &args.plan_file;
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file {}", path.display()))?;
        let file: PlanFile = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid plan file {}", path.display()))?;

        let quest = self
            .board
            .import_quest(&file.into_import(path))
            .await
            .context("Failed to import quest")?;

        for &day in &args.complete {
            let step = self
                .board
                .toggle_step(&ToggleStep {
                    quest_id: quest.id.to_string(),
                    day,
                })
                .await;
            if step.is_none() {
                warn!("plan has no day {day}");
            }

            let result = ToggleResult {
                quest_id: quest.id.to_string(),
                day,
                step,
            };
            self.renderer.render(&result.to_string());
        }

        let quest = self
            .board
            .get_quest(&Id {
                id: quest.id.to_string(),
            })
            .await
            .context("Imported quest is missing from the board")?;

        self.renderer.render(&QuestSummary::from(&quest).to_string());
        self.renderer.render(&QuestDetails::new(&quest).to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_args_into_params() {
        let params = CreateQuest::from(CreateArgs {
            title: "Learn piano".to_string(),
            description: "Play a full piece".to_string(),
            target_date: "2027-01-15".to_string(),
            no_ai: true,
        });
        assert_eq!(params.title, "Learn piano");
        assert!(!params.use_ai);
    }

    #[test]
    fn test_parse_target_date() {
        assert_eq!(parse_target_date("2026-12-31").unwrap(), "2026-12-31");
        assert!(parse_target_date("2026-13-01").is_err());
        assert!(parse_target_date("next week").is_err());
    }

    #[test]
    fn test_plan_file_layouts() {
        let object: PlanFile =
            serde_json::from_str(r#"{"questTitle": "Run", "plan": [{"taskTitle": "Jog"}]}"#)
                .unwrap();
        let import = object.into_import(Path::new("ignored.json"));
        assert_eq!(import.title, "Run");
        assert_eq!(import.plan.len(), 1);

        let bare: PlanFile = serde_json::from_str(r#"[{"taskTitle": "Jog"}]"#).unwrap();
        let import = bare.into_import(Path::new("/tmp/marathon.json"));
        assert_eq!(import.title, "marathon");
    }
}
