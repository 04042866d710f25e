pub mod config;
pub mod error;
pub mod gedcom;
pub mod graph;
pub mod model;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use error::{GedError, Result};
pub use gedcom::{parse_file, parse_reader, parse_str};
pub use graph::{ChartStyle, Traversal, TraversalLimits};
pub use model::{Event, EventKind, Family, Genealogy, Person};
