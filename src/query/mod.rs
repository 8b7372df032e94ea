mod filter;
mod summary;

pub use filter::{FilterState, filter};
pub use summary::{Summary, percentage, summarize};
