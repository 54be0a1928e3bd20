pub mod aggregate;
pub mod error;
pub mod export;

pub use aggregate::{Aggregate, AggregateTable, CSV_HEADER_FIRST_CELL, CsvColumns, aggregate};
pub use error::{Error, Result};
pub use export::{render_csv, render_js_payload, render_json};
