//! CSV export of backend tables and the browser download that saves it.
use crate::shared::data_source::ClubDataSource;
use crate::shared::date_utils::format_date_safe;
use chrono::NaiveDate;
use contracts::enums::export_table::ExportTable;
use contracts::shared::table_data::{ErrorInfo, Record};
use futures::future::join_all;
use serde_json::{Number, Value};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const CSV_MIME: &str = "text/csv;charset=utf-8;";
const FILE_PREFIX: &str = "lapala";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("fetch failed: {0}")]
    Fetch(ErrorInfo),

    #[error("save failed: {0}")]
    Save(String),
}

/// Destination for encoded CSV text
pub trait FileSink {
    /// Save `text` as `<filename>.csv`
    fn save(&self, text: &str, filename: &str) -> Result<(), ExportError>;
}

/// Saves through a browser download
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownload;

impl FileSink for BrowserDownload {
    fn save(&self, text: &str, filename: &str) -> Result<(), ExportError> {
        save_as_file(text, filename)
    }
}

/// Per-table outcome channel for [`export_all_known_tables`]
pub trait ExportReporter {
    fn table_failed(&self, table: ExportTable, error: &ExportError);

    fn table_skipped(&self, _table: ExportTable) {}

    fn table_exported(&self, _table: ExportTable, _rows: usize) {}
}

/// Sends outcomes to the console log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl ExportReporter for LogReporter {
    fn table_failed(&self, table: ExportTable, error: &ExportError) {
        log::warn!("Export of {} skipped: {}", table.table_name(), error);
    }

    fn table_skipped(&self, table: ExportTable) {
        log::debug!("Export of {}: no rows", table.table_name());
    }

    fn table_exported(&self, table: ExportTable, rows: usize) {
        log::info!("Exported {} ({} rows)", table.table_name(), rows);
    }
}

/// Encode records as CSV. Columns come from the first record, in its key
/// order; later records are read by those keys only.
///
/// Returns `None` for an absent or empty record set.
pub fn encode_records(records: Option<&[Record]>) -> Option<String> {
    let records = records.filter(|r| !r.is_empty())?;
    let columns: Vec<&str> = records[0].keys().map(String::as_str).collect();

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(columns.join(","));
    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|column| escape_csv_cell(&value_to_text(record.get(*column))))
            .collect();
        lines.push(row.join(","));
    }

    Some(lines.join("\n"))
}

/// Quote a cell containing a comma, quote or newline; double inner quotes.
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn value_to_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => number_to_text(n),
        Some(Value::Bool(b)) => b.to_string(),
        Some(nested) => nested.to_string(),
    }
}

/// Integral floats print without a fraction ("3", not "3.0").
fn number_to_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

/// `lapala_<table>_<YYYY-MM-DD>`, without extension
pub fn export_filename(table: ExportTable, date: NaiveDate) -> String {
    format!(
        "{}_{}_{}",
        FILE_PREFIX,
        table.table_name(),
        format_date_safe(date)
    )
}

/// Export every table of the manifest and return the labels of the ones
/// that produced a file, in manifest order.
///
/// All fetches run concurrently; one table failing never stops the others.
/// Tables without rows produce no file.
pub async fn export_all_known_tables<S, F, R>(
    source: &S,
    sink: &F,
    reporter: &R,
    date: NaiveDate,
) -> Vec<&'static str>
where
    S: ClubDataSource + ?Sized,
    F: FileSink + ?Sized,
    R: ExportReporter + ?Sized,
{
    let responses = join_all(ExportTable::ALL.iter().map(|&table| source.fetch(table))).await;

    let mut exported = Vec::new();
    for (table, response) in ExportTable::ALL.into_iter().zip(responses) {
        let rows = match response.into_result() {
            Ok(rows) => rows,
            Err(e) => {
                reporter.table_failed(table, &ExportError::Fetch(e));
                continue;
            }
        };

        let Some(text) = encode_records(Some(rows.as_slice())) else {
            reporter.table_skipped(table);
            continue;
        };

        match sink.save(&text, &export_filename(table, date)) {
            Ok(()) => {
                reporter.table_exported(table, rows.len());
                exported.push(table.display_name());
            }
            Err(e) => reporter.table_failed(table, &e),
        }
    }

    exported
}

/// Download `text` as `<filename>.csv` through the browser
pub fn save_as_file(text: &str, filename: &str) -> Result<(), ExportError> {
    download_csv(text, &format!("{}.csv", filename)).map_err(ExportError::Save)
}

fn js_error(step: &'static str) -> impl Fn(JsValue) -> String {
    move |e| format!("Failed to {}: {:?}", step, e)
}

/// Wrap the text in a CSV blob and click a hidden link to it.
/// The object URL is revoked even when the click step fails.
fn download_csv(text: &str, filename: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type(CSV_MIME);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(js_error("create blob"))?;
    let url =
        Url::create_object_url_with_blob(&blob).map_err(js_error("create object URL"))?;

    let clicked = (|| -> Result<(), String> {
        let link: HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_error("create link"))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| "created element is not a link".to_string())?;
        link.set_href(&url);
        link.set_download(filename);
        link.style()
            .set_property("display", "none")
            .map_err(js_error("hide link"))?;
        body.append_child(&link).map_err(js_error("attach link"))?;
        link.click();
        body.remove_child(&link).map_err(js_error("detach link"))?;
        Ok(())
    })();

    Url::revoke_object_url(&url).map_err(js_error("revoke object URL"))?;
    clicked
}
