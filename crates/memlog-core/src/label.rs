use regex::Regex;
use std::sync::LazyLock;

/// Upper bound on the length of a normalized label, in characters
pub const MAX_LABEL_FILE_NAME_LEN: usize = 255;

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s./:;#@-]+").expect("separator pattern is valid"));

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("non-word pattern is valid"));

/// Turn an arbitrary build label into a safe file name fragment.
///
/// Separator runs (whitespace, `.`, `/`, `:`, `;`, `#`, `@`, `-`) collapse to
/// a single `_`, anything else outside `[a-z0-9_]` is dropped, and the result
/// is capped at [`MAX_LABEL_FILE_NAME_LEN`] characters. The output may be
/// empty.
pub fn normalize_label(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let separated = SEPARATOR_RUN.replace_all(&lowered, "_");
    let mut cleaned = NON_WORD.replace_all(&separated, "").into_owned();
    // Only ASCII survives the filter above, so byte and char lengths agree.
    cleaned.truncate(MAX_LABEL_FILE_NAME_LEN);
    cleaned
}
