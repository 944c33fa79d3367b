use tabledom::{SortMarker, Table};

use crate::accessor::ValueKind;
use crate::machine::SortDirection;
use crate::provider::{Header, HeaderProvider, RowProvider};

/// Data attribute carrying a header's declared kind.
pub const KIND_ATTR: &str = "sort-kind";

impl RowProvider for Table {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn text(&self, row: usize, column: usize) -> Option<String> {
        self.cell(row, column)?.text_content().map(str::to_string)
    }

    fn link_text(&self, row: usize, column: usize) -> Option<String> {
        self.cell(row, column)?
            .first_child()?
            .text_content()
            .map(str::to_string)
    }

    fn input_value(&self, row: usize, column: usize) -> Option<String> {
        let cell = self.cell(row, column)?;
        // The control is normally nested in the cell, but tolerate a bare
        // input used directly as the cell.
        match cell.first_child() {
            Some(child) => child.value().map(str::to_string),
            None => cell.value().map(str::to_string),
        }
    }

    fn leaf_text(&self, row: usize, column: usize) -> Option<String> {
        let leaf = self.rows.get(row)?.descend_at(column);
        leaf.text_content().map(str::to_string)
    }

    fn exchange(&mut self, i: usize, j: usize) {
        Table::exchange(self, i, j);
    }
}

impl HeaderProvider for Table {
    fn headers(&self) -> Vec<Header> {
        self.headers
            .iter()
            .map(|header| Header {
                id: header.element.id.clone(),
                label: header.label().to_string(),
                span: header.span,
                kind: header
                    .element
                    .get_data(KIND_ATTR)
                    .map(|tag| ValueKind::from_tag(tag)),
            })
            .collect()
    }
}

impl From<SortDirection> for SortMarker {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => SortMarker::Ascending,
            SortDirection::Descending => SortMarker::Descending,
        }
    }
}
