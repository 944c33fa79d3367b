use crate::accessor::{self, AccessorOverrides, ValueKind};
use crate::headers;
use crate::infer;
use crate::machine::{ColumnState, SortDirection, SortMachine};
use crate::provider::{Header, HeaderProvider, RowProvider};
use crate::sort::SortSession;
use crate::value::ComparableValue;

/// Row sampled when a column declares no kind.
const INFERENCE_ROW: usize = 0;

/// Outcome of a trigger: which logical column was sorted, in which
/// direction, and which previously sorted column was reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOutcome {
    pub column: usize,
    pub direction: SortDirection,
    pub previous: Option<usize>,
}

/// Comparator-driven reordering over a bound table.
///
/// The sorter owns the table while bound and reorders its rows exclusively
/// through the provider's exchange primitive. Presentation stays with the
/// caller, driven by the outcomes [`Sorter::trigger`] returns. The default
/// sorter is bound to nothing and every trigger on it is a no-op.
pub struct Sorter<T> {
    table: Option<T>,
    headers: Vec<Header>,
    columns: Vec<Header>,
    machine: SortMachine,
    overrides: AccessorOverrides,
}

impl<T> Default for Sorter<T> {
    fn default() -> Self {
        Self {
            table: None,
            headers: Vec::new(),
            columns: Vec::new(),
            machine: SortMachine::default(),
            overrides: AccessorOverrides::default(),
        }
    }
}

impl<T: RowProvider + HeaderProvider> Sorter<T> {
    /// Bind a table: read its headers, expand spans into logical columns,
    /// and size the per-column state table.
    pub fn bind(table: T) -> Self {
        let raw = table.headers();
        let columns = headers::expand(&raw);
        let machine = SortMachine::new(columns.len());
        log::debug!(
            "[sorter] bound table: {} columns, {} rows",
            columns.len(),
            table.row_count()
        );

        Self {
            table: Some(table),
            headers: raw,
            columns,
            machine,
            overrides: AccessorOverrides::default(),
        }
    }

    /// Install a custom accessor for a kind. Overrides are consulted before
    /// the built-ins on every later sort.
    pub fn with_accessor<F>(mut self, kind: ValueKind, accessor: F) -> Self
    where
        F: Fn(&dyn RowProvider, usize, usize) -> ComparableValue + Send + Sync + 'static,
    {
        self.overrides.set(kind, accessor);
        self
    }

    /// Declare the logical column the table should start ordered by: marks
    /// it ascending and sorts it once, without a trigger. Columns outside
    /// the table are ignored. Chain after [`Sorter::with_accessor`] so
    /// overrides participate in the initial sort.
    pub fn with_initial_column(mut self, column: usize) -> Self {
        if !self.machine.seed(column) {
            log::debug!("[sorter] initial column {column} out of range, ignored");
            return self;
        }

        if let Some(table) = self.table.as_mut() {
            let kind = self
                .columns
                .get(column)
                .and_then(|header| header.kind)
                .or_else(|| infer::infer_kind(&*table, INFERENCE_ROW, column))
                .unwrap_or_default();
            let accessor = accessor::resolve(kind, &self.overrides);
            let exchanges =
                SortSession::new(table, accessor, column, SortDirection::Ascending).run();
            log::debug!("[sorter] initial column {column}: {exchanges} exchanges");
        }

        self
    }

    /// Sort by the header with the given ID.
    ///
    /// Returns None, changing nothing, when no table is bound or the ID
    /// matches no header. The caller applies markers from the outcome.
    pub fn trigger(&mut self, header_id: &str) -> Option<SortOutcome> {
        let Some(table) = self.table.as_mut() else {
            log::debug!("[sorter] trigger {header_id} ignored: no table bound");
            return None;
        };
        let Some(column) = headers::logical_index(&self.headers, header_id) else {
            log::debug!("[sorter] trigger {header_id} ignored: unknown header");
            return None;
        };

        let kind = self
            .headers
            .iter()
            .find(|header| header.id == header_id)
            .and_then(|header| header.kind)
            .or_else(|| infer::infer_kind(&*table, INFERENCE_ROW, column))
            .unwrap_or_default();
        let accessor = accessor::resolve(kind, &self.overrides);

        let activation = self.machine.activate(column)?;
        log::debug!(
            "[sorter] sorting column {column} ({}) {:?}",
            kind.as_str(),
            activation.direction
        );

        let rows = table.row_count();
        let exchanges = SortSession::new(table, accessor, column, activation.direction).run();
        log::debug!("[sorter] column {column}: {rows} rows, {exchanges} exchanges");

        Some(SortOutcome {
            column,
            direction: activation.direction,
            previous: activation.previous,
        })
    }

    /// Release the table and every piece of per-table state. Safe to call
    /// repeatedly; later calls return None.
    pub fn unbind(&mut self) -> Option<T> {
        self.headers.clear();
        self.columns.clear();
        self.machine = SortMachine::default();
        self.table.take()
    }

    pub fn is_bound(&self) -> bool {
        self.table.is_some()
    }

    pub fn table(&self) -> Option<&T> {
        self.table.as_ref()
    }

    pub fn table_mut(&mut self) -> Option<&mut T> {
        self.table.as_mut()
    }

    /// Header covering the given logical column.
    pub fn header_at(&self, column: usize) -> Option<&Header> {
        self.columns.get(column)
    }

    pub fn column_state(&self, column: usize) -> ColumnState {
        self.machine.state(column)
    }

    /// The currently sorted logical column, if any.
    pub fn active_column(&self) -> Option<usize> {
        self.machine.active()
    }
}
