pub mod aggregate;
pub mod play_event;

pub use aggregate::{AggregateRow, AggregateTable, GroupBy};
pub use play_event::{PlayEvent, RawPlayRecord};
