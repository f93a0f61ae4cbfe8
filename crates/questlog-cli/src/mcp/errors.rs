//! Error mapping for the MCP server

use questlog_core::QuestError;
use rmcp::ErrorData;

/// Maps a core error to an MCP error. Caller mistakes become
/// `invalid_params`, everything else `internal_error`.
pub fn to_mcp_error(message: &str, error: &QuestError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        QuestError::InvalidInput { .. } | QuestError::Serialization { .. } => {
            ErrorData::invalid_params(text, None)
        }
        _ => ErrorData::internal_error(text, None),
    }
}

/// Error for a quest ID that matches nothing in the session.
pub fn quest_not_found(id: &str) -> ErrorData {
    ErrorData::invalid_params(format!("Quest with ID {id} not found"), None)
}
