use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Shared error type stub for the uibridge crates.
#[derive(Debug, Error, Clone)]
pub enum BridgeError {
    #[error("{message}")]
    Message { message: String },
}

impl BridgeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

/// Book/scope pair locating an event inside the reporting backend.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EventIdentity {
    pub book: String,
    pub scope: String,
}

impl EventIdentity {
    pub fn new(book: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            scope: scope.into(),
        }
    }

    /// True when both namespace fields carry a value.
    pub fn is_complete(&self) -> bool {
        !self.book.is_empty() && !self.scope.is_empty()
    }
}

impl fmt::Display for EventIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "book={} scope={}", self.book, self.scope)
    }
}

/// Reference to an event already known to the reporting backend.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EventId {
    pub id: String,
    pub book: String,
    pub scope: String,
}

impl EventId {
    pub fn new(id: impl Into<String>, book: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            book: book.into(),
            scope: scope.into(),
        }
    }

    /// Fresh uuid-backed reference inside the given namespace.
    pub fn generate(book: impl Into<String>, scope: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), book, scope)
    }

    pub fn identity(&self) -> EventIdentity {
        EventIdentity::new(self.book.clone(), self.scope.clone())
    }
}

/// Direction of an attached message relative to its connection.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-full", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    First,
    Second,
}

impl Default for Direction {
    fn default() -> Self {
        Self::First
    }
}

/// Identifier of a message stored by the reporting backend.
///
/// The book carried here must match the book of any event the message is
/// attached to.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MessageId {
    pub book: String,
    pub session_alias: String,
    pub direction: Direction,
    pub sequence: i64,
    pub timestamp: DateTime<Utc>,
}

impl MessageId {
    pub fn new(
        book: impl Into<String>,
        session_alias: impl Into<String>,
        direction: Direction,
        sequence: i64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            book: book.into(),
            session_alias: session_alias.into(),
            direction,
            sequence,
            timestamp,
        }
    }

    /// JSON rendering quoted in diagnostics that name this identifier.
    #[cfg(feature = "serde-full")]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "book={} alias={} seq={}",
            self.book, self.session_alias, self.sequence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_completeness() {
        assert!(EventIdentity::new("book", "scope").is_complete());
        assert!(!EventIdentity::new("", "scope").is_complete());
        assert!(!EventIdentity::new("book", "").is_complete());
    }

    #[test]
    fn test_generated_event_ids_are_unique() {
        let a = EventId::generate("book", "scope");
        let b = EventId::generate("book", "scope");
        assert_ne!(a.id, b.id);
        assert_eq!(a.identity(), b.identity());
    }

    #[cfg(feature = "serde-full")]
    #[test]
    fn test_message_id_json_names_the_book() {
        let id = MessageId::new("book-1", "alias-1", Direction::Second, 7, Utc::now());
        let json = id.to_json();
        assert!(json.contains("\"book\":\"book-1\""));
        assert!(json.contains("\"direction\":\"SECOND\""));
    }
}
