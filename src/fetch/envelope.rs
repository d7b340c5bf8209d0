// src/fetch/envelope.rs
//
// Google Visualization (gviz) responses are JSON wrapped in a JavaScript
// callback. Everything that knows about that wrapper lives here.

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Marker the service writes before the JSON payload (47 bytes).
pub const ENVELOPE_PREFIX: &str = "/*O_o*/\ngoogle.visualization.Query.setResponse(";
/// Marker the service writes after the JSON payload.
pub const ENVELOPE_SUFFIX: &str = ");";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub errors: Vec<QueryError>,
    #[serde(default)]
    pub table: Option<Table>,
}

#[derive(Debug, Deserialize)]
pub struct QueryError {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detailed_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub cols: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Row {
    /// One entry per column; `null` for cells the sheet left blank.
    #[serde(default)]
    pub c: Vec<Option<Cell>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub v: Option<Value>,
    /// Formatted value, present for numbers and dates.
    #[serde(default)]
    pub f: Option<String>,
}

/// Strip the callback wrapper and return the JSON payload.
///
/// Precondition: `body` is `ENVELOPE_PREFIX + payload + ENVELOPE_SUFFIX`,
/// optionally followed by whitespace.
pub fn strip_envelope(body: &str) -> Result<&str> {
    let inner = body
        .strip_prefix(ENVELOPE_PREFIX)
        .ok_or_else(|| anyhow!("response does not start with the gviz prefix"))?;
    inner
        .trim_end()
        .strip_suffix(ENVELOPE_SUFFIX)
        .ok_or_else(|| anyhow!("response does not end with the gviz suffix"))
}

/// Turn a raw gviz response body into its table.
pub fn parse_remote_table(body: &str) -> Result<Table> {
    let payload = strip_envelope(body)?;
    let resp: QueryResponse =
        serde_json::from_str(payload).context("decoding gviz JSON payload")?;
    debug!(version = ?resp.version, status = ?resp.status, "decoded gviz response");

    if resp.status.as_deref() == Some("error") {
        let detail = resp
            .errors
            .first()
            .and_then(|e| {
                e.detailed_message
                    .clone()
                    .or_else(|| e.message.clone())
                    .or_else(|| e.reason.clone())
            })
            .unwrap_or_else(|| "unknown error".to_string());
        warn!(%detail, "gviz query returned an error status");
        bail!("gviz query failed: {}", detail);
    }

    resp.table.context("gviz response has no table")
}
