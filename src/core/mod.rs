pub mod aggregate;
pub mod loader;
pub mod logic;
pub mod normalize;
pub mod search;

pub use aggregate::{AllTimeTables, WrappedTables};
pub use logic::{Core, ListeningHistory, LoadOutcome, LoadReport};
