use clap::{Parser, Subcommand};

use crate::cli::{CreateArgs, FocusArgs};

/// Questlog turns goals into day-by-day quests and tracks XP as steps get
/// done.
///
/// `create` asks the external planner for a plan and shows the resulting
/// quest. `focus` loads a plan from a JSON file and shows today's and
/// tomorrow's step. `serve` runs an MCP server on stdio that keeps quests for
/// the whole session.
#[derive(Parser)]
#[command(version, about, name = "questlog")]
pub struct Args {
    /// Planner endpoint receiving the create-plan request. Defaults to
    /// $QUESTLOG_PLANNER_URL, then $XDG_CONFIG_HOME/questlog/config.json,
    /// then http://localhost:3001/api/quests/create-plan
    #[arg(long, global = true)]
    pub planner_url: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Questlog CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Create a quest from a goal using the external planner
    #[command(alias = "c")]
    Create(CreateArgs),
    /// Show progress and the next steps of a plan file
    #[command(alias = "f")]
    Focus(FocusArgs),
    /// Start the MCP server
    Serve,
}
