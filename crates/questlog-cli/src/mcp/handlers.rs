//! MCP tool handlers implementation

use std::borrow::Cow;

use log::debug;
use questlog_core::{
    CreateResult, QuestBoard, QuestDetails, ToggleResult,
    params as core,
};
use rmcp::{
    ErrorData,
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::{quest_not_found, to_mcp_error};

/// Transparent MCP wrapper for core parameter types.
///
/// Deserialization and the JSON schema pass straight through to the wrapped
/// type, so tool arguments look exactly like the core structs.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateQuest = McpParams<core::CreateQuest>;
pub type ImportQuest = McpParams<core::ImportQuest>;
pub type ToggleStep = McpParams<core::ToggleStep>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    board: QuestBoard,
}

impl McpHandlers {
    pub fn new(board: QuestBoard) -> Self {
        Self { board }
    }

    pub async fn create_quest(&self, Parameters(params): Parameters<CreateQuest>) -> McpResult {
        debug!("create_quest: {params:?}");

        let quest = self
            .board
            .create_quest(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create quest", &e))?;

        text_result(CreateResult::new(quest).to_string())
    }

    pub async fn import_quest(&self, Parameters(params): Parameters<ImportQuest>) -> McpResult {
        debug!("import_quest: {params:?}");

        let quest = self
            .board
            .import_quest(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to import quest", &e))?;

        text_result(CreateResult::new(quest).to_string())
    }

    pub async fn list_quests(&self) -> McpResult {
        debug!("list_quests");

        let summaries = self.board.list_summaries().await;
        let title = if summaries.is_empty() {
            "No active quests"
        } else {
            "Active Quests"
        };

        text_result(format!("# {title}\n\n{summaries}"))
    }

    pub async fn show_quest(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_quest: {params:?}");

        let quest = self
            .board
            .get_quest(params.as_ref())
            .await
            .ok_or_else(|| quest_not_found(&params.as_ref().id))?;

        text_result(QuestDetails::new(&quest).to_string())
    }

    pub async fn toggle_step(&self, Parameters(params): Parameters<ToggleStep>) -> McpResult {
        debug!("toggle_step: {params:?}");

        let request = params.as_ref();
        let step = self.board.toggle_step(request).await;
        let result = ToggleResult {
            quest_id: request.quest_id.clone(),
            day: request.day,
            step,
        };

        text_result(result.to_string())
    }
}
