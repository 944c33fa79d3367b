use std::sync::LazyLock;

use regex::Regex;

use crate::accessor::ValueKind;
use crate::provider::RowProvider;

/// Complete signed decimal: optional sign, optional integer part and
/// fraction point, at least one digit.
static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:\d*\.)?\d+$").expect("Invalid numeric pattern"));

/// Whether the whole text is a signed decimal number.
pub fn is_numeric(text: &str) -> bool {
    NUMERIC.is_match(text)
}

/// Guess a column's kind from one sample row's innermost cell text.
///
/// Returns None when the sample is missing or not numeric; the caller falls
/// back to the default kind. Runs against a single row, so an
/// unrepresentative sample yields an accepted wrong guess.
pub fn infer_kind(rows: &dyn RowProvider, sample_row: usize, column: usize) -> Option<ValueKind> {
    let text = rows.leaf_text(sample_row, column)?;
    is_numeric(&text).then_some(ValueKind::Numeric)
}
