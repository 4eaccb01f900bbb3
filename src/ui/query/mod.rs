//! Catalog query state: search, sort and pagination as a reducer.

mod intent;
mod reducer;
mod state;

pub use intent::{QueryIntent, SortField, SortOrder, SortSpec};
pub use reducer::QueryReducer;
pub use state::{QueryState, DEFAULT_PAGE_SIZE};
