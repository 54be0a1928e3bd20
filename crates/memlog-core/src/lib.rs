pub mod label;
pub mod path;

pub use label::{MAX_LABEL_FILE_NAME_LEN, normalize_label};
pub use path::*;
