use tablesort::ComparableValue;

#[test]
fn test_number_ordering() {
    let small = ComparableValue::number(1.5);
    let large = ComparableValue::number(20.0);

    assert!(large.gt(&small));
    assert!(small.lt(&large));
    assert!(!small.gt(&large));
}

#[test]
fn test_text_ordering_ignores_case() {
    let bob = ComparableValue::text("Bob");
    let alice = ComparableValue::text("alice");
    let carl = ComparableValue::text("Carl");

    // Case-folded: alice < bob < carl
    assert!(bob.gt(&alice));
    assert!(bob.lt(&carl));
    assert!(alice.lt(&carl));
}

#[test]
fn test_equal_text_is_neither() {
    let a = ComparableValue::text("Same");
    let b = ComparableValue::text("sAME");

    assert!(!a.gt(&b));
    assert!(!a.lt(&b));
}

#[test]
fn test_nan_sorts_above_numbers() {
    let nan = ComparableValue::number(f64::NAN);
    let big = ComparableValue::number(1e12);

    assert!(nan.gt(&big));
    assert!(big.lt(&nan));
}

#[test]
fn test_nan_ties_with_nan() {
    let a = ComparableValue::number(f64::NAN);
    let b = ComparableValue::number(f64::NAN);

    assert!(!a.gt(&b));
    assert!(!a.lt(&b));
}

#[test]
fn test_numbers_order_before_text() {
    let number = ComparableValue::number(99.0);
    let text = ComparableValue::text("1");

    assert!(number.lt(&text));
    assert!(text.gt(&number));
}

#[test]
fn test_negative_numbers() {
    let neg = ComparableValue::number(-3.0);
    let zero = ComparableValue::number(0.0);

    assert!(neg.lt(&zero));
    assert!(zero.gt(&neg));
}
