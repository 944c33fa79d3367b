use crate::element::Element;

/// Direction indicator shown on a sorted column's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMarker {
    Ascending,
    Descending,
}

impl SortMarker {
    /// Suffix appended to the header label when rendered.
    pub const fn suffix(&self) -> &'static str {
        match self {
            SortMarker::Ascending => " \u{25b2}",
            SortMarker::Descending => " \u{25bc}",
        }
    }
}

/// A header cell covering one or more logical columns.
#[derive(Debug, Clone)]
pub struct HeaderCell {
    pub element: Element,
    pub span: usize,
    pub marker: Option<SortMarker>,
}

impl HeaderCell {
    pub fn new(element: Element) -> Self {
        Self {
            element,
            span: 1,
            marker: None,
        }
    }

    /// Number of logical columns this header covers. Clamped to at least 1.
    pub fn span(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    pub fn label(&self) -> &str {
        self.element.text_content().unwrap_or("")
    }

    /// Label with the direction marker suffix, as rendered.
    pub fn display_label(&self) -> String {
        match self.marker {
            Some(marker) => format!("{}{}", self.label(), marker.suffix()),
            None => self.label().to_string(),
        }
    }
}

/// Spanned header cells over a sequence of exchangeable body rows.
///
/// Rows are opaque element trees; the table never inspects them beyond
/// indexed child access. Reordering happens exclusively through
/// [`Table::exchange`].
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<Element>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: HeaderCell) -> Self {
        self.headers.push(header);
        self
    }

    pub fn row(mut self, row: Element) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Element>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total logical columns across all header spans.
    pub fn column_count(&self) -> usize {
        self.headers.iter().map(|h| h.span).sum()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Element> {
        self.rows.get(row)?.child_at(column)
    }

    pub fn header_by_id(&self, id: &str) -> Option<&HeaderCell> {
        self.headers.iter().find(|h| h.element.id == id)
    }

    /// Relocate the rows at `i` and `j`, leaving every other position
    /// untouched. Adjacent rows are reinserted, distant rows swapped; either
    /// way each row handle ends up at exactly one position. Out-of-range or
    /// equal indices are ignored.
    pub fn exchange(&mut self, i: usize, j: usize) {
        if i == j || i >= self.rows.len() || j >= self.rows.len() {
            return;
        }

        if i == j + 1 || j == i + 1 {
            let hi = i.max(j);
            let row = self.rows.remove(hi);
            self.rows.insert(hi - 1, row);
        } else {
            self.rows.swap(i, j);
        }
    }

    /// Set the marker on the header with the given ID and clear every other
    /// header's marker.
    pub fn set_marker(&mut self, id: &str, marker: SortMarker) {
        log::debug!("[table] {marker:?} marker on header {id}");
        for header in &mut self.headers {
            header.marker = (header.element.id == id).then_some(marker);
        }
    }

    pub fn clear_markers(&mut self) {
        for header in &mut self.headers {
            header.marker = None;
        }
    }
}
