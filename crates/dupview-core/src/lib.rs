//! Duplicate detection and group-by partitioning for tabular views.
//!
//! Given a record set and an ordered collection of active attribute names,
//! the core keeps only records whose combination of active values occurs more
//! than once, sorts them into contiguous runs and inserts a header row in
//! front of each run.

pub mod dedupe;
pub mod filters;
pub mod label;
pub mod partition;
pub mod view;

pub use dedupe::{composite_key, key_frequencies, retain_duplicates};
pub use filters::{ActiveFilterSet, Toggle};
pub use label::{build_header, build_label};
pub use partition::{partition, partition_nested, run_ranges, sort_by_attribute};
pub use view::{FilterControl, GroupedView, NoopAdapter, ViewAdapter, ViewStats};
