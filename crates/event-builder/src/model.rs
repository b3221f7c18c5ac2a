use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use uibridge_core_types::{EventId, EventIdentity, MessageId};

/// Free-form annotations the caller attaches to a batch request.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AdditionalInfo {
    pub description: String,
    /// Emit the request-parameters table built from `keys`/`values`.
    pub print_table: bool,
    pub keys: Vec<String>,
    pub values: Vec<String>,
    pub request_params_table_title: String,
}

/// Descriptor of one batch of remote UI actions handed to the builder.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActionBatch {
    pub event_name: Option<String>,
    pub event_type: Option<String>,
    pub parent_event_id: Option<EventId>,
    pub additional_info: AdditionalInfo,
    /// Mirror per-action result texts into the event body.
    pub store_action_messages: bool,
}

/// Raw result code reported by the execution engine.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCode {
    #[default]
    Success,
    CompileError,
    ExecutionError,
    EngineError,
    ToolBusy,
    IncorrectRequest,
}

impl ResponseCode {
    pub fn is_success(self) -> bool {
        matches!(self, ResponseCode::Success)
    }
}

/// Aggregate execution status surfaced to the reporting backend.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStatus {
    #[default]
    Success,
    CompileError,
    ExecutionError,
    InternalError,
}

impl ScriptStatus {
    /// Name rendered into the "Action status" row of the event body.
    pub fn as_str(self) -> &'static str {
        match self {
            ScriptStatus::Success => "SUCCESS",
            ScriptStatus::CompileError => "COMPILE_ERROR",
            ScriptStatus::ExecutionError => "EXECUTION_ERROR",
            ScriptStatus::InternalError => "INTERNAL_ERROR",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, ScriptStatus::Success)
    }
}

impl fmt::Display for ScriptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ResponseCode> for ScriptStatus {
    fn from(code: ResponseCode) -> Self {
        match code {
            ResponseCode::Success => ScriptStatus::Success,
            ResponseCode::CompileError => ScriptStatus::CompileError,
            ResponseCode::ExecutionError => ScriptStatus::ExecutionError,
            ResponseCode::EngineError | ResponseCode::ToolBusy | ResponseCode::IncorrectRequest => {
                ScriptStatus::InternalError
            }
        }
    }
}

/// Outcome text of a single action inside the batch.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub action_id: String,
    pub result: String,
}

impl ActionResult {
    pub fn new(action_id: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            result: result.into(),
        }
    }
}

/// Finalized result of executing one action batch, produced by the external
/// execution engine.
#[derive(Clone, Debug, Default)]
pub struct ExecutionResult {
    pub script_status: ScriptStatus,
    pub response_code: ResponseCode,
    pub session_id: String,
    pub action_results: Vec<ActionResult>,
    pub error_message: Option<String>,
    /// Shared with the built event; never mutated after construction.
    pub attached_message_ids: Arc<[MessageId]>,
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        self.script_status.is_success() && self.response_code.is_success()
    }
}

/// Terminal status recorded on a built event.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Success,
    Failed,
}

/// Reportable unit of work handed back to the caller.
///
/// Constructed fresh per build; the attached-message list is shared with the
/// execution result rather than copied.
#[derive(Clone, Debug)]
pub struct Event {
    pub id: String,
    pub identity: EventIdentity,
    pub name: String,
    pub event_type: Option<String>,
    pub parent_id: Option<EventId>,
    pub status: EventStatus,
    pub start_timestamp: DateTime<Utc>,
    pub end_timestamp: DateTime<Utc>,
    pub attached_message_ids: Arc<[MessageId]>,
    /// Serialized content-block list (JSON array).
    pub body: Vec<u8>,
}

impl Event {
    /// Body as JSON text. The renderer only ever produces valid UTF-8.
    pub fn body_str(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_code_maps_to_script_status() {
        assert_eq!(ScriptStatus::from(ResponseCode::Success), ScriptStatus::Success);
        assert_eq!(
            ScriptStatus::from(ResponseCode::CompileError),
            ScriptStatus::CompileError
        );
        assert_eq!(
            ScriptStatus::from(ResponseCode::ExecutionError),
            ScriptStatus::ExecutionError
        );
        for code in [
            ResponseCode::EngineError,
            ResponseCode::ToolBusy,
            ResponseCode::IncorrectRequest,
        ] {
            assert_eq!(ScriptStatus::from(code), ScriptStatus::InternalError);
        }
    }

    #[test]
    fn test_execution_result_success_requires_both_signals() {
        let mut result = ExecutionResult::default();
        assert!(result.is_success());

        result.response_code = ResponseCode::ToolBusy;
        assert!(!result.is_success());

        result.response_code = ResponseCode::Success;
        result.script_status = ScriptStatus::ExecutionError;
        assert!(!result.is_success());
    }

    #[test]
    fn test_script_status_display_names() {
        assert_eq!(ScriptStatus::Success.to_string(), "SUCCESS");
        assert_eq!(ScriptStatus::ExecutionError.to_string(), "EXECUTION_ERROR");
        assert_eq!(ScriptStatus::InternalError.to_string(), "INTERNAL_ERROR");
    }
}
