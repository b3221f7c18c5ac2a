use tracing::warn;

use uibridge_core_types::{EventId, EventIdentity, MessageId};

use crate::config::ReporterCfg;
use crate::errors::{BuildError, BuildResult, UNKNOWN_EVENT_NAME, UNKNOWN_EVENT_TYPE};

/// Picks the book/scope pair for a new event.
///
/// A parent reference wins when it carries both fields; otherwise the
/// injected reporting defaults apply, with the box name doubling as scope.
pub fn resolve(parent: Option<&EventId>, cfg: &ReporterCfg) -> EventIdentity {
    match parent {
        Some(parent) if parent.identity().is_complete() => parent.identity(),
        _ => EventIdentity::new(cfg.book_name.clone(), cfg.box_name.clone()),
    }
}

/// Checks every attached message identifier against the resolved book.
///
/// Stops at the first mismatch, in input order; the error names the resolved
/// identity and the serialized offending identifier.
pub fn validate_books(
    identity: &EventIdentity,
    event_name: Option<&str>,
    event_type: Option<&str>,
    message_ids: &[MessageId],
) -> BuildResult<()> {
    for message_id in message_ids {
        if message_id.book != identity.book {
            warn!(
                book = %identity.book,
                message = %message_id,
                "attached message book does not match resolved event book"
            );
            return Err(BuildError::IdentityMismatch {
                book: identity.book.clone(),
                scope: identity.scope.clone(),
                name: non_empty_or(event_name, UNKNOWN_EVENT_NAME),
                event_type: non_empty_or(event_type, UNKNOWN_EVENT_TYPE),
                message_id: message_id.to_json(),
            });
        }
    }
    Ok(())
}

fn non_empty_or(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uibridge_core_types::Direction;

    fn cfg() -> ReporterCfg {
        ReporterCfg::new("default-book", "default-box")
    }

    fn message_id(book: &str) -> MessageId {
        MessageId::new(book, "alias", Direction::First, 1, Utc::now())
    }

    #[test]
    fn test_resolve_prefers_complete_parent_identity() {
        let parent = EventId::new("parent-1", "parent-book", "parent-scope");
        let identity = resolve(Some(&parent), &cfg());
        assert_eq!(identity, EventIdentity::new("parent-book", "parent-scope"));
    }

    #[test]
    fn test_resolve_falls_back_to_defaults() {
        let identity = resolve(None, &cfg());
        assert_eq!(identity, EventIdentity::new("default-book", "default-box"));

        let incomplete = EventId::new("parent-1", "parent-book", "");
        let identity = resolve(Some(&incomplete), &cfg());
        assert_eq!(identity, EventIdentity::new("default-book", "default-box"));
    }

    #[test]
    fn test_validate_books_accepts_matching_ids() {
        let identity = EventIdentity::new("book-a", "scope-a");
        let ids = [message_id("book-a"), message_id("book-a")];
        assert!(validate_books(&identity, None, None, &ids).is_ok());
        assert!(validate_books(&identity, None, None, &[]).is_ok());
    }

    #[test]
    fn test_validate_books_reports_first_mismatch() {
        let identity = EventIdentity::new("book-a", "scope-a");
        let ids = [
            message_id("book-a"),
            message_id("book-b"),
            message_id("book-c"),
        ];
        let err = validate_books(&identity, Some("evt"), None, &ids).unwrap_err();
        match err {
            BuildError::IdentityMismatch {
                book,
                scope,
                name,
                event_type,
                message_id,
            } => {
                assert_eq!(book, "book-a");
                assert_eq!(scope, "scope-a");
                assert_eq!(name, "evt");
                assert_eq!(event_type, UNKNOWN_EVENT_TYPE);
                assert!(message_id.contains("\"book\":\"book-b\""));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_event_name_uses_placeholder() {
        let identity = EventIdentity::new("book-a", "scope-a");
        let ids = [message_id("book-b")];
        let err = validate_books(&identity, Some(""), Some(""), &ids).unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("name: 'Unknown event name'"));
        assert!(rendered.contains("type: 'Unknown event type'"));
    }
}
