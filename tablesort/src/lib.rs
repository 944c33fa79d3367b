pub mod accessor;
pub mod dom;
pub mod engine;
pub mod headers;
pub mod infer;
pub mod machine;
pub mod provider;
pub mod sort;
pub mod value;

pub use accessor::{Accessor, AccessorOverrides, ValueKind};
pub use dom::KIND_ATTR;
pub use engine::{SortOutcome, Sorter};
pub use machine::{Activation, ColumnState, SortDirection, SortMachine};
pub use provider::{Header, HeaderProvider, RowProvider};
pub use sort::{sort_rows, SortSession};
pub use value::ComparableValue;
