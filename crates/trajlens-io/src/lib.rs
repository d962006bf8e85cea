//! Output files: append-only detector logs and atomically written reports

mod io;
mod paths;

pub use io::{append_record, atomic_write};
pub use paths::{OutputPaths, REPRODUCTION_LOG, SEARCH_LOG, TOOL_USAGE_LOG};
