use thiserror::Error;

use uibridge_core_types::BridgeError;

/// Placeholder used when a batch carries no event name.
pub const UNKNOWN_EVENT_NAME: &str = "Unknown event name";
/// Placeholder used when a batch carries no event type.
pub const UNKNOWN_EVENT_TYPE: &str = "Unknown event type";

#[derive(Debug, Error)]
pub enum BuildError {
    /// An attached message identifier names a different book than the one
    /// resolved for the event. The message format is relied on by callers
    /// surfacing the failure verbatim.
    #[error("Build event failure, book: '{book}', scope: '{scope}', name: '{name}', type: '{event_type}', problems: [Book name mismatch in '{message_id}' message id]")]
    IdentityMismatch {
        book: String,
        scope: String,
        name: String,
        event_type: String,
        message_id: String,
    },
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

pub type BuildResult<T> = Result<T, BuildError>;

impl From<BuildError> for BridgeError {
    fn from(value: BuildError) -> Self {
        BridgeError::new(value.to_string())
    }
}
