use crate::{AggregateTable, CsvColumns, Error, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Pretty-print the table as a JSON array with 4-space indentation
pub fn render_json(table: &AggregateTable) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    table.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|err| Error::Encoding(err.to_string()))
}

/// Script that hands the table to the viewer page as `window.top.LOG_DATA`.
///
/// The assignment runs inside an immediately invoked arrow function so the
/// script declares nothing else.
pub fn render_js_payload(table: &AggregateTable) -> Result<String> {
    let json = render_json(table)?;
    Ok(format!(
        "((win) => {{ win.LOG_DATA = {}; }})(window.top);",
        json
    ))
}

/// Header line plus one line per suite, comma-joined and never quoted.
///
/// Rows may have different lengths. There is no trailing newline.
pub fn render_csv(columns: &CsvColumns) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for line in columns.lines() {
        writer.write_record(&line)?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|err| Error::Io(err.into_error()))?;
    let mut text = String::from_utf8(bytes).map_err(|err| Error::Encoding(err.to_string()))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
