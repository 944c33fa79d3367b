/// Direction a column is ordered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Ascending)
    }
}

/// Per-column sort state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnState {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

/// Result of activating a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub direction: SortDirection,
    /// Column whose state this activation reset, when switching columns.
    pub previous: Option<usize>,
}

/// Tracks which column is sorted and in which direction.
///
/// Reselecting the active column flips it between descending and ascending.
/// Selecting a different column starts it descending and resets the old
/// one, so at most one column is ever sorted.
#[derive(Debug, Clone, Default)]
pub struct SortMachine {
    states: Vec<ColumnState>,
    active: Option<usize>,
}

impl SortMachine {
    pub fn new(columns: usize) -> Self {
        Self {
            states: vec![ColumnState::Unsorted; columns],
            active: None,
        }
    }

    pub fn column_count(&self) -> usize {
        self.states.len()
    }

    pub fn state(&self, column: usize) -> ColumnState {
        self.states.get(column).copied().unwrap_or_default()
    }

    /// The currently sorted column, if any.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Mark a column ascending without an activation, for data that is
    /// already ordered when the table is bound. Returns false for columns
    /// outside the table.
    pub fn seed(&mut self, column: usize) -> bool {
        if column >= self.states.len() {
            return false;
        }
        self.states[column] = ColumnState::Ascending;
        self.active = Some(column);
        true
    }

    /// Activate a column: flip its direction, or start descending when it
    /// was unsorted. Any other active column is reset and reported. None
    /// for columns outside the table.
    pub fn activate(&mut self, column: usize) -> Option<Activation> {
        if column >= self.states.len() {
            return None;
        }

        let next = match self.states[column] {
            ColumnState::Unsorted | ColumnState::Ascending => ColumnState::Descending,
            ColumnState::Descending => ColumnState::Ascending,
        };
        self.states[column] = next;

        let previous = match self.active {
            Some(active) if active != column => {
                self.states[active] = ColumnState::Unsorted;
                Some(active)
            }
            _ => None,
        };
        self.active = Some(column);

        let direction = match next {
            ColumnState::Ascending => SortDirection::Ascending,
            _ => SortDirection::Descending,
        };

        Some(Activation {
            direction,
            previous,
        })
    }
}
