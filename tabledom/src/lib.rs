pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod table;
pub mod text;

pub use element::{find_element, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::hit_header;
pub use layout::Rect;
pub use render::{render, HeaderRegion, RenderResult};
pub use table::{HeaderCell, SortMarker, Table};
