use crate::provider::Header;

/// Expand spanned headers into one entry per logical column. The state
/// table, marker lookup, and initial-column resolution all index into the
/// expanded form.
pub fn expand(headers: &[Header]) -> Vec<Header> {
    let mut expanded = Vec::new();
    for header in headers {
        for _ in 0..header.span.max(1) {
            log::debug!(
                "[headers] column {} covered by header {}",
                expanded.len(),
                header.id
            );
            expanded.push(header.clone());
        }
    }
    expanded
}

/// Logical index of the activated header: spans accumulate while walking,
/// identity decides the match. None when the ID is not among the headers;
/// callers treat that as a no-op.
pub fn logical_index(headers: &[Header], activated_id: &str) -> Option<usize> {
    let mut index = 0;
    for header in headers {
        if header.id == activated_id {
            return Some(index);
        }
        index += header.span.max(1);
    }
    None
}
