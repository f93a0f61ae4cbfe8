//! MCP server for Questlog
//!
//! Exposes one session-scoped [`QuestBoard`] over the Model Context Protocol.
//! Quests live as long as the server process.

use std::future::Future;

use anyhow::Result;
use log::{debug, error, info};
use questlog_core::QuestBoard;
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tokio::signal::unix::{SignalKind, signal};

pub mod errors;
pub mod handlers;

pub use handlers::{CreateQuest, Id, ImportQuest, McpResult, ToggleStep};

/// MCP server for Questlog
#[derive(Clone)]
pub struct QuestlogMcpServer {
    board: QuestBoard,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl QuestlogMcpServer {
    pub fn new(board: QuestBoard) -> Self {
        Self {
            board,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.board.clone())
    }

    #[tool(
        name = "create_quest",
        description = "Create a quest from a goal. Provide a title, a description of what success looks like, and a target date (YYYY-MM-DD). The external planner breaks the goal into day-by-day steps with XP rewards. Set useAi=false to ask for a plain breakdown. Returns the new quest ID together with its focus view."
    )]
    async fn create_quest(&self, params: Parameters<CreateQuest>) -> McpResult {
        self.handlers().create_quest(params).await
    }

    #[tool(
        name = "import_quest",
        description = "Create a quest from a plan you already have. Provide a title, an ordered list of steps (taskTitle, taskDescription, duration, xp) and optionally originalDescription and targetDate. Missing day numbers default to the step's position and missing completed flags default to false. Days must be positive and strictly ascending."
    )]
    async fn import_quest(&self, params: Parameters<ImportQuest>) -> McpResult {
        self.handlers().import_quest(params).await
    }

    #[tool(
        name = "list_quests",
        description = "List every quest in this session, most recently created first, with type, difficulty, progress percentage and XP earned."
    )]
    async fn list_quests(&self) -> McpResult {
        self.handlers().list_quests().await
    }

    #[tool(
        name = "show_quest",
        description = "Show one quest with all of its steps and its focus view: today's step (the first incomplete one), tomorrow's step, overall progress and total XP."
    )]
    async fn show_quest(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_quest(params).await
    }

    #[tool(
        name = "toggle_step",
        description = "Flip the completed flag of one step, addressed by questId and day. Toggling the same step twice restores it. An unknown quest or day changes nothing."
    )]
    async fn toggle_step(&self, params: Parameters<ToggleStep>) -> McpResult {
        self.handlers().toggle_step(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for QuestlogMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "questlog".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Questlog turns goals into quests: ordered day-by-day steps, each with an XP reward.

## Workflow
1. Create a quest with `create_quest` (planner-generated steps) or `import_quest` (your own steps)
2. Check what to do next with `show_quest`; today's step is the first step not yet completed
3. Mark steps done with `toggle_step`; toggling again marks them open
4. Review all quests with `list_quests`

Quests are kept for the lifetime of this server session only."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: QuestlogMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting Questlog MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
