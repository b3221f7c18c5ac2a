use serde::Serialize;

use crate::errors::{BuildError, BuildResult};
use crate::model::{AdditionalInfo, ExecutionResult};

/// Literal fragments the reporting backend keys on; byte-stable.
pub const DESCRIPTION_PREFIX: &str = "Description: \n";
pub const RESULT_HEADER: &str = "Result";
pub const ACTION_MESSAGES_HEADER: &str = "Action messages";
pub const ACTION_STATUS_ROW: &str = "Action status";
pub const ERRORS_ROW: &str = "Errors";
pub const SESSION_ID_ROW: &str = "SessionId";

/// One renderable unit inside an event body.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Message { data: String },
    Table { rows: Vec<TableRow> },
}

impl ContentBlock {
    pub fn message(data: impl Into<String>) -> Self {
        Self::Message { data: data.into() }
    }

    pub fn table(rows: Vec<TableRow>) -> Self {
        Self::Table { rows }
    }
}

/// Name/value pair inside a table block.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TableRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl TableRow {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Accumulates content blocks in emission order.
#[derive(Debug, Default)]
pub struct PayloadBuilder {
    blocks: Vec<ContentBlock>,
}

impl PayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(ContentBlock::message(text));
        self
    }

    /// Emits a header message followed by the table itself.
    pub fn print_table(&mut self, header: impl Into<String>, rows: Vec<TableRow>) -> &mut Self {
        self.blocks.push(ContentBlock::message(header));
        self.blocks.push(ContentBlock::table(rows));
        self
    }

    pub fn into_blocks(self) -> Vec<ContentBlock> {
        self.blocks
    }
}

/// Renders the fixed block sequence for one batch result.
///
/// Pure function of its inputs: identical inputs produce an identical block
/// list.
pub fn render(
    info: &AdditionalInfo,
    result: &ExecutionResult,
    store_action_messages: bool,
) -> BuildResult<Vec<ContentBlock>> {
    let mut payload = PayloadBuilder::new();

    payload.print_text(format!("{DESCRIPTION_PREFIX}{}", info.description));

    if info.print_table {
        if info.keys.len() != info.values.len() {
            return Err(BuildError::MalformedInput(format!(
                "request parameters table has {} keys but {} values",
                info.keys.len(),
                info.values.len()
            )));
        }
        if !info.keys.is_empty() {
            let rows = info
                .keys
                .iter()
                .zip(info.values.iter())
                .map(|(key, value)| TableRow::new(key, value))
                .collect();
            payload.print_table(info.request_params_table_title.clone(), rows);
        }
    }

    let mut rows = Vec::with_capacity(3);
    rows.push(TableRow::new(ACTION_STATUS_ROW, result.script_status.as_str()));
    if let Some(error) = result.error_message.as_deref().filter(|m| !m.is_empty()) {
        rows.push(TableRow::new(ERRORS_ROW, error));
    }
    if !result.session_id.is_empty() {
        rows.push(TableRow::new(SESSION_ID_ROW, result.session_id.clone()));
    }
    payload.print_table(RESULT_HEADER, rows);

    if store_action_messages && !result.action_results.is_empty() {
        let rows = result
            .action_results
            .iter()
            .map(|detail| TableRow::new(detail.action_id.clone(), detail.result.clone()))
            .collect();
        payload.print_table(ACTION_MESSAGES_HEADER, rows);
    }

    Ok(payload.into_blocks())
}

/// Serializes a block list to the JSON-array wire body.
pub fn serialize_blocks(blocks: &[ContentBlock]) -> BuildResult<Vec<u8>> {
    Ok(serde_json::to_vec(blocks)?)
}
