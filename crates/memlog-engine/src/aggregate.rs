use indexmap::IndexMap;
use memlog_types::SourceResult;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// First cell of the CSV header row
pub const CSV_HEADER_FIRST_CELL: &str = "Suite";

/// Key holding the suite name in each JSON row
const SUITE_KEY: &str = "suite";

/// Suite-major pivot: `suite -> build label -> used bytes`.
///
/// Suites keep first-seen order, builds within a suite keep encounter order.
/// Serializes as an array with one object per suite,
/// `{ "suite": <name>, <build>: <used>, ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateTable {
    suites: IndexMap<String, IndexMap<String, u64>>,
}

impl AggregateTable {
    pub fn get(&self, suite: &str, build: &str) -> Option<u64> {
        self.suites.get(suite)?.get(build).copied()
    }

    pub fn suite_names(&self) -> impl Iterator<Item = &str> {
        self.suites.keys().map(String::as_str)
    }

    pub fn builds(&self, suite: &str) -> Option<&IndexMap<String, u64>> {
        self.suites.get(suite)
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    fn record(&mut self, suite: &str, build: &str, used: u64) {
        self.suites
            .entry(suite.to_string())
            .or_default()
            .insert(build.to_string(), used);
    }
}

impl Serialize for AggregateTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.suites.len()))?;
        for (suite, builds) in &self.suites {
            seq.serialize_element(&SuiteRow { suite, builds })?;
        }
        seq.end()
    }
}

struct SuiteRow<'a> {
    suite: &'a str,
    builds: &'a IndexMap<String, u64>,
}

impl Serialize for SuiteRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.builds.len() + 1))?;

        // A build literally labeled "suite" takes over the suite key's value
        // but not its position.
        match self.builds.get(SUITE_KEY) {
            Some(used) => map.serialize_entry(SUITE_KEY, used)?,
            None => map.serialize_entry(SUITE_KEY, self.suite)?,
        }
        for (build, used) in self.builds {
            if build != SUITE_KEY {
                map.serialize_entry(build, used)?;
            }
        }

        map.end()
    }
}

/// Column structure for the CSV artifact.
///
/// Each suite row lists values in the order they were encountered, so a
/// suite missing from some builds has a shorter row that is not aligned
/// with the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvColumns {
    header: Vec<String>,
    rows: IndexMap<String, Vec<u64>>,
}

impl CsvColumns {
    /// Build labels in first-seen order (without the leading `Suite` cell)
    pub fn build_labels(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, &[u64])> {
        self.rows
            .iter()
            .map(|(suite, values)| (suite.as_str(), values.as_slice()))
    }

    /// Header row followed by one row per suite, as text cells
    pub fn lines(&self) -> Vec<Vec<String>> {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);

        let mut header = Vec::with_capacity(self.header.len() + 1);
        header.push(CSV_HEADER_FIRST_CELL.to_string());
        header.extend(self.header.iter().cloned());
        lines.push(header);

        for (suite, values) in &self.rows {
            let mut line = Vec::with_capacity(values.len() + 1);
            line.push(suite.clone());
            line.extend(values.iter().map(u64::to_string));
            lines.push(line);
        }

        lines
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub table: AggregateTable,
    pub csv: Option<CsvColumns>,
}

/// Pivot per-build records into the suite-major table.
///
/// Builds are visited in `result` order and records in extraction order; a
/// repeated `(suite, build)` pair keeps the last value. With `want_csv`, the
/// CSV columns are filled alongside and the header lists every build label,
/// including builds that produced no records.
pub fn aggregate(result: &SourceResult, want_csv: bool) -> Aggregate {
    let mut table = AggregateTable::default();
    let mut csv = want_csv.then(|| CsvColumns {
        header: result.labels().map(str::to_string).collect(),
        rows: IndexMap::new(),
    });

    for (build, records) in result.iter() {
        for record in records {
            table.record(&record.label, build, record.used_bytes);
            if let Some(columns) = csv.as_mut() {
                columns
                    .rows
                    .entry(record.label.clone())
                    .or_default()
                    .push(record.used_bytes);
            }
        }
    }

    Aggregate { table, csv }
}
