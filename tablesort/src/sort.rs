use crate::accessor::Accessor;
use crate::machine::SortDirection;
use crate::provider::RowProvider;
use crate::value::ComparableValue;

/// One sort pass: the rows, the accessor and column producing keys, the
/// direction, and a tally of exchanges performed.
///
/// Keys are re-read from the provider on every comparison because each
/// exchange moves rows under the positions being compared.
pub struct SortSession<'a> {
    rows: &'a mut dyn RowProvider,
    accessor: Accessor,
    column: usize,
    direction: SortDirection,
    exchanges: usize,
}

impl<'a> SortSession<'a> {
    pub fn new(
        rows: &'a mut dyn RowProvider,
        accessor: Accessor,
        column: usize,
        direction: SortDirection,
    ) -> Self {
        Self {
            rows,
            accessor,
            column,
            direction,
            exchanges: 0,
        }
    }

    /// Sort every row and return the number of exchanges performed.
    pub fn run(self) -> usize {
        let len = self.rows.row_count();
        self.run_range(0, len)
    }

    /// Sort the half-open position range `lo..hi`, clamped to the rows that
    /// exist. Returns the number of exchanges performed.
    pub fn run_range(mut self, lo: usize, hi: usize) -> usize {
        let hi = hi.min(self.rows.row_count());
        if lo < hi {
            self.quicksort(lo, hi);
        }
        self.exchanges
    }

    fn key(&self, row: usize) -> ComparableValue {
        (self.accessor)(&*self.rows, row, self.column)
    }

    /// Whether `a` must come after `b` for this session's direction.
    fn sorts_after(&self, a: &ComparableValue, b: &ComparableValue) -> bool {
        if self.direction.is_ascending() {
            a.gt(b)
        } else {
            a.lt(b)
        }
    }

    fn exchange(&mut self, i: usize, j: usize) {
        self.rows.exchange(i, j);
        self.exchanges += 1;
    }

    /// Quicksort over the half-open range `lo..hi`. The smaller partition
    /// is recursed into eagerly, the larger one continues in this loop, so
    /// auxiliary call depth stays logarithmic.
    fn quicksort(&mut self, mut lo: usize, mut hi: usize) {
        while hi > lo + 1 {
            if hi - lo == 2 {
                let a = self.key(lo);
                let b = self.key(lo + 1);
                if self.sorts_after(&a, &b) {
                    self.exchange(lo, lo + 1);
                }
                return;
            }

            let j = self.partition(lo, hi);

            if j - lo < hi - j {
                self.quicksort(lo, j);
                lo = j + 1;
            } else {
                self.quicksort(j + 1, hi);
                hi = j;
            }
        }
    }

    /// Median-of-three partition. The median of the first, second and last
    /// keys ends up at `lo` as the pivot; the cursors then sweep inward and
    /// exchange misplaced pairs. A pair that is neither greater nor less is
    /// never exchanged.
    fn partition(&mut self, lo: usize, hi: usize) -> usize {
        let mut i = lo + 1;
        let mut j = hi - 1;

        if self.sorts_after(&self.key(lo), &self.key(i)) {
            self.exchange(i, lo);
        }
        if self.sorts_after(&self.key(j), &self.key(lo)) {
            self.exchange(lo, j);
        }
        if self.sorts_after(&self.key(lo), &self.key(i)) {
            self.exchange(i, lo);
        }

        // The pivot stays at `lo` for the whole sweep, so one snapshot is
        // enough.
        let pivot = self.key(lo);

        loop {
            while self.sorts_after(&self.key(j), &pivot) {
                j -= 1;
            }
            while self.sorts_after(&pivot, &self.key(i)) {
                i += 1;
            }

            if j <= i {
                break;
            }

            let a = self.key(i);
            let b = self.key(j);
            if a.gt(&b) || a.lt(&b) {
                self.exchange(i, j);
            }

            i += 1;
            j -= 1;
        }

        let first = self.key(lo);
        let split = self.key(j);
        if first.gt(&split) || first.lt(&split) {
            self.exchange(lo, j);
        }

        j
    }
}

/// Sort all of a provider's rows by one column. Returns the number of
/// exchanges performed.
pub fn sort_rows(
    rows: &mut dyn RowProvider,
    accessor: Accessor,
    column: usize,
    direction: SortDirection,
) -> usize {
    SortSession::new(rows, accessor, column, direction).run()
}
