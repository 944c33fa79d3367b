use tabledom::text::{char_width, display_width, pad_to_width, truncate_to_width};

// ============================================================================
// Width Measurement
// ============================================================================

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_wide_chars() {
    // CJK characters are two columns wide
    assert_eq!(display_width("日本"), 4);
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
}

// ============================================================================
// Truncation
// ============================================================================

#[test]
fn test_truncate_shorter_than_max() {
    assert_eq!(truncate_to_width("abc", 10), "abc");
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
}

#[test]
fn test_truncate_zero_width() {
    assert_eq!(truncate_to_width("abc", 0), "");
}

#[test]
fn test_truncate_wide_chars_never_split() {
    // Two columns needed for the second char; only one remains after the
    // ellipsis is reserved, so it is dropped whole.
    let out = truncate_to_width("日本語", 4);
    assert_eq!(out, "日…");
    assert_eq!(display_width(&out), 3);
}

// ============================================================================
// Padding
// ============================================================================

#[test]
fn test_pad_fills_to_width() {
    assert_eq!(pad_to_width("ab", 5), "ab   ");
}

#[test]
fn test_pad_truncates_overflow() {
    assert_eq!(pad_to_width("abcdefgh", 5), "abcd…");
}

#[test]
fn test_pad_exact_width_unchanged() {
    assert_eq!(pad_to_width("abcde", 5), "abcde");
}
