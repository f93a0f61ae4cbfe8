//! Questlog CLI Application
//!
//! Command-line interface and MCP server for the questlog quest tracker.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{QuestlogMcpServer, run_stdio_server};
use questlog_core::{BoardConfig, QuestBoard, QuestBoardBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        planner_url,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    info!("Questlog started");

    match command {
        Create(args) => {
            Cli::new(planner_board(planner_url)?, renderer)
                .handle_create(args)
                .await
        }
        Focus(args) => {
            // Plan files never reach the planner, so no configuration is read.
            let board = QuestBoardBuilder::new()
                .with_config(BoardConfig::default())
                .build()
                .context("Failed to initialize quest board")?;
            Cli::new(board, renderer).handle_focus(args).await
        }
        Serve => {
            info!("Starting Questlog MCP server");
            run_stdio_server(QuestlogMcpServer::new(planner_board(planner_url)?))
                .await
                .context("MCP server failed")
        }
    }
}

/// Board talking to the planner resolved from flags, env and config file.
fn planner_board(planner_url: Option<String>) -> Result<QuestBoard> {
    QuestBoardBuilder::new()
        .with_planner_url(planner_url)
        .build()
        .context("Failed to initialize quest board")
}
