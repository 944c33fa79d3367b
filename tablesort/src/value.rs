use std::cmp::Ordering;

/// A cell value in comparable form.
///
/// Text is case-normalized at construction so ordering ignores letter case.
/// Numbers order before text when a column mixes both.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparableValue {
    Number(f64),
    Text(String),
}

impl ComparableValue {
    pub fn number(n: f64) -> Self {
        ComparableValue::Number(n)
    }

    pub fn text(s: impl Into<String>) -> Self {
        ComparableValue::Text(s.into().to_lowercase())
    }

    /// Whether `self` orders strictly after `other` in ascending order.
    pub fn gt(&self, other: &ComparableValue) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Whether `self` orders strictly before `other` in ascending order.
    pub fn lt(&self, other: &ComparableValue) -> bool {
        self.compare(other) == Ordering::Less
    }

    fn compare(&self, other: &ComparableValue) -> Ordering {
        match (self, other) {
            (ComparableValue::Number(a), ComparableValue::Number(b)) => compare_numbers(*a, *b),
            (ComparableValue::Text(a), ComparableValue::Text(b)) => a.cmp(b),
            (ComparableValue::Number(_), ComparableValue::Text(_)) => Ordering::Less,
            (ComparableValue::Text(_), ComparableValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// NaN orders above every number and ties with itself, so unparseable cells
/// collect at the large end instead of poisoning comparisons.
fn compare_numbers(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
