use tablesort::headers::{expand, logical_index};
use tablesort::Header;

fn header(id: &str, label: &str, span: usize) -> Header {
    Header {
        id: id.to_string(),
        label: label.to_string(),
        span,
        kind: None,
    }
}

// ============================================================================
// Logical Index
// ============================================================================

#[test]
fn test_unit_spans_index_directly() {
    let headers = vec![header("a", "A", 1), header("b", "B", 1), header("c", "C", 1)];

    assert_eq!(logical_index(&headers, "a"), Some(0));
    assert_eq!(logical_index(&headers, "b"), Some(1));
    assert_eq!(logical_index(&headers, "c"), Some(2));
}

#[test]
fn test_spans_accumulate() {
    // Spans [2, 1] over three logical columns: the second header starts at
    // logical column 2.
    let headers = vec![header("wide", "Wide", 2), header("narrow", "Narrow", 1)];

    assert_eq!(logical_index(&headers, "wide"), Some(0));
    assert_eq!(logical_index(&headers, "narrow"), Some(2));
}

#[test]
fn test_unknown_id_not_found() {
    let headers = vec![header("a", "A", 1)];
    assert_eq!(logical_index(&headers, "zzz"), None);
}

#[test]
fn test_identity_beats_shared_labels() {
    // Two headers with the same label stay distinguishable by ID.
    let headers = vec![header("first", "Total", 1), header("second", "Total", 2)];

    assert_eq!(logical_index(&headers, "first"), Some(0));
    assert_eq!(logical_index(&headers, "second"), Some(1));
}

#[test]
fn test_empty_header_set() {
    assert_eq!(logical_index(&[], "a"), None);
}

// ============================================================================
// Expansion
// ============================================================================

#[test]
fn test_expand_repeats_spanned_headers() {
    let headers = vec![header("wide", "Wide", 2), header("narrow", "Narrow", 1)];
    let expanded = expand(&headers);

    assert_eq!(expanded.len(), 3);
    assert_eq!(expanded[0].id, "wide");
    assert_eq!(expanded[1].id, "wide");
    assert_eq!(expanded[2].id, "narrow");
}

#[test]
fn test_expand_unit_spans() {
    let headers = vec![header("a", "A", 1), header("b", "B", 1)];
    let expanded = expand(&headers);

    assert_eq!(expanded.len(), 2);
    assert_eq!(expanded[1].id, "b");
}

#[test]
fn test_expand_clamps_zero_span() {
    let headers = vec![header("z", "Z", 0)];
    let expanded = expand(&headers);

    assert_eq!(expanded.len(), 1);
}

#[test]
fn test_expanded_entry_matches_logical_index() {
    let headers = vec![header("wide", "Wide", 2), header("narrow", "Narrow", 1)];
    let expanded = expand(&headers);

    let index = logical_index(&headers, "narrow").unwrap();
    assert_eq!(expanded[index].id, "narrow");
}
