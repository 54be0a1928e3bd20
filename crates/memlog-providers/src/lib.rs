// Error types
pub mod error;

// Manifest of labeled sources
pub mod manifest;

// [MEMINFO] log extraction
pub mod extract;

pub use error::{Error, Result};
pub use extract::{ClassifiedLine, MemInfoFields, classify_line, extract_records, parse_fields};
pub use manifest::{Manifest, infer_label};
