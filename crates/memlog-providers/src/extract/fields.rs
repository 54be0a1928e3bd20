use regex::Regex;
use std::sync::LazyLock;

static MEMINFO_FIELDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<label>.+) \(after GC\) - used: (?P<used>\d+) - total: (?P<total>\d+) - limit: (?P<limit>\d+)(?: - tests: (?P<tests>\d+))?",
    )
    .unwrap()
});

/// Numeric fields of one `[MEMINFO]` reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemInfoFields {
    pub label: String,
    pub used: u64,
    pub total: u64,
    pub limit: u64,
    pub tests: Option<u64>,
}

/// Parse `<label> (after GC) - used: N - total: N - limit: N [- tests: N]`.
///
/// Trailing text after the last field is ignored. Values that overflow `u64`
/// reject the line.
pub fn parse_fields(payload: &str) -> Option<MemInfoFields> {
    let caps = MEMINFO_FIELDS.captures(payload)?;

    Some(MemInfoFields {
        label: caps["label"].to_string(),
        used: caps["used"].parse().ok()?,
        total: caps["total"].parse().ok()?,
        limit: caps["limit"].parse().ok()?,
        tests: match caps.name("tests") {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        },
    })
}
