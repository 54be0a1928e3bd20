//! Assertions over generated artifacts.

use anyhow::{Context, Result};
use serde_json::Value;

const JS_PREFIX: &str = "((win) => { win.LOG_DATA = ";
const JS_SUFFIX: &str = "; })(window.top);";

/// Extract the JSON array embedded in a `data.js` payload.
pub fn parse_js_payload(js: &str) -> Result<Value> {
    let json = js
        .strip_prefix(JS_PREFIX)
        .and_then(|rest| rest.strip_suffix(JS_SUFFIX))
        .context("data.js does not wrap a LOG_DATA assignment")?;
    Ok(serde_json::from_str(json)?)
}

/// Assert the payload row for `suite` holds `expected` for `build`.
pub fn assert_suite_value(rows: &Value, suite: &str, build: &str, expected: u64) -> Result<()> {
    let rows = rows.as_array().context("Expected LOG_DATA to be an array")?;
    let row = rows
        .iter()
        .find(|row| row["suite"].as_str() == Some(suite))
        .with_context(|| format!("No row for suite {}", suite))?;

    let actual = row[build]
        .as_u64()
        .with_context(|| format!("Suite {} has no value for build {}", suite, build))?;
    if actual != expected {
        anyhow::bail!(
            "Suite {} build {}: expected {}, got {}",
            suite,
            build,
            expected,
            actual
        );
    }

    Ok(())
}

/// Assert the CSV text consists of exactly `expected` lines.
pub fn assert_csv_lines(csv: &str, expected: &[&str]) -> Result<()> {
    let lines: Vec<&str> = csv.lines().collect();
    if lines != expected {
        anyhow::bail!("CSV mismatch:\nexpected {:?}\n     got {:?}", expected, lines);
    }
    Ok(())
}
