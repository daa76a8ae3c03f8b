use std::borrow::Cow;

use ot_core::control::ControlError;
use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content, ErrorCode};

pub(crate) fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

/// Maps a control-plane failure onto the tool result channels: argument
/// failures become invalid-params protocol errors raised before any
/// network access, upstream failures become error-flagged tool results.
pub(crate) fn control_failure(err: ControlError) -> Result<CallToolResult, ErrorData> {
    match err {
        ControlError::Argument(err) => Err(mcp_err(ErrorCode::INVALID_PARAMS, err.to_string())),
        ControlError::Client(err) => Ok(CallToolResult::error(vec![Content::text(format!(
            "Open Targets request failed: {err}"
        ))])),
    }
}

/// Maps a control-plane failure onto the resource read channel, which has
/// no error-flagged envelope of its own.
pub(crate) fn resource_failure(err: ControlError) -> ErrorData {
    match err {
        ControlError::Argument(err) => mcp_err(ErrorCode::INVALID_PARAMS, err.to_string()),
        ControlError::Client(err) => mcp_err(ErrorCode::INTERNAL_ERROR, err.to_string()),
    }
}
