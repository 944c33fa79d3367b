use crate::accessor::ValueKind;

/// A header as the engine sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Stable identity used to resolve activations.
    pub id: String,
    pub label: String,
    /// Number of logical columns this header covers.
    pub span: usize,
    /// Declared value kind, when the column carries one.
    pub kind: Option<ValueKind>,
}

/// Row access and repositioning for a bound table.
///
/// Extraction methods return None when the addressed cell or its markup
/// shape is missing; accessors absorb that into their fallback values.
pub trait RowProvider {
    fn row_count(&self) -> usize;

    /// Primary text of the cell itself.
    fn text(&self, row: usize, column: usize) -> Option<String>;

    /// Text nested inside the cell's first child (anchor-style markup).
    fn link_text(&self, row: usize, column: usize) -> Option<String>;

    /// Current value of the editable control inside the cell.
    fn input_value(&self, row: usize, column: usize) -> Option<String>;

    /// Text of the innermost markup reached by descending through child
    /// positions matching the column. Used for type inference.
    fn leaf_text(&self, row: usize, column: usize) -> Option<String>;

    /// Reposition the rows at `i` and `j`. Every other position, and the
    /// set of row handles, must be preserved.
    fn exchange(&mut self, i: usize, j: usize);
}

/// Header access for a bound table.
pub trait HeaderProvider {
    fn headers(&self) -> Vec<Header>;
}
