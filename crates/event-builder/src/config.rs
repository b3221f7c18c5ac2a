use serde::{Deserialize, Serialize};

/// Reporting defaults injected into the builder at construction time.
///
/// Treated as an immutable snapshot; consulted only when a batch carries no
/// parent event reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReporterCfg {
    /// Book every locally-rooted event is filed under.
    pub book_name: String,
    /// Component/box name doubling as the event scope for locally-rooted
    /// events.
    pub box_name: String,
}

impl ReporterCfg {
    pub fn new(book_name: impl Into<String>, box_name: impl Into<String>) -> Self {
        Self {
            book_name: book_name.into(),
            box_name: box_name.into(),
        }
    }
}

impl Default for ReporterCfg {
    fn default() -> Self {
        Self {
            book_name: "local".into(),
            box_name: "uibridge".into(),
        }
    }
}
