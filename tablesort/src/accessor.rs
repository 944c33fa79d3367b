use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::provider::RowProvider;
use crate::value::ComparableValue;

/// Declared or inferred shape of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueKind {
    /// Text nested inside an anchor-style child.
    Link,
    /// Editable control whose current value is compared.
    Input,
    /// Cell text parsed as a number.
    Numeric,
    /// Cell text compared case-insensitively.
    #[default]
    Text,
}

impl ValueKind {
    /// Parse a declared kind tag. Unknown tags fall back to `Text`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "link" => ValueKind::Link,
            "input" => ValueKind::Input,
            "numeric" => ValueKind::Numeric,
            _ => ValueKind::Text,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Link => "link",
            ValueKind::Input => "input",
            ValueKind::Numeric => "numeric",
            ValueKind::Text => "text",
        }
    }
}

/// Extracts one cell's comparable value from the current row ordering.
/// Must not mutate rows; it is re-run against live positions after every
/// exchange.
pub type Accessor = Arc<dyn Fn(&dyn RowProvider, usize, usize) -> ComparableValue + Send + Sync>;

/// Caller-supplied accessors, consulted before the built-ins.
#[derive(Clone, Default)]
pub struct AccessorOverrides {
    accessors: HashMap<ValueKind, Accessor>,
}

impl AccessorOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<F>(&mut self, kind: ValueKind, accessor: F)
    where
        F: Fn(&dyn RowProvider, usize, usize) -> ComparableValue + Send + Sync + 'static,
    {
        self.accessors.insert(kind, Arc::new(accessor));
    }

    pub fn get(&self, kind: ValueKind) -> Option<&Accessor> {
        self.accessors.get(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }
}

impl std::fmt::Debug for AccessorOverrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessorOverrides")
            .field("kinds", &self.accessors.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Resolve the accessor for a kind: an override wins verbatim, otherwise
/// the built-in for that kind.
pub fn resolve(kind: ValueKind, overrides: &AccessorOverrides) -> Accessor {
    if let Some(accessor) = overrides.get(kind) {
        return accessor.clone();
    }

    match kind {
        ValueKind::Link => Arc::new(|rows, row, column| {
            ComparableValue::text(rows.link_text(row, column).unwrap_or_default())
        }),
        ValueKind::Input => Arc::new(|rows, row, column| {
            ComparableValue::text(rows.input_value(row, column).unwrap_or_default())
        }),
        ValueKind::Numeric => Arc::new(|rows, row, column| {
            ComparableValue::number(parse_number(&rows.text(row, column).unwrap_or_default()))
        }),
        ValueKind::Text => Arc::new(|rows, row, column| {
            ComparableValue::text(rows.text(row, column).unwrap_or_default())
        }),
    }
}

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("Invalid numeric pattern")
});

/// Longest numeric prefix of the trimmed text as a float, so cells like
/// "12.5 km" still compare by their number. NaN when no prefix parses.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    match NUMERIC_PREFIX.find(trimmed) {
        Some(found) => found.as_str().parse().unwrap_or(f64::NAN),
        None => f64::NAN,
    }
}
