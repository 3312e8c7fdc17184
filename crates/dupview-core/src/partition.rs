//! Splitting retained records into contiguous runs with header rows.
//!
//! Two strategies are provided:
//!
//! - [`partition`] groups by a single primary attribute (the most recently
//!   activated filter). For more than one active filter it descends into
//!   each run with the same primary attribute and depth, which converges
//!   immediately and leaves the grouping single-level.
//! - [`partition_nested`] splits by every active filter in activation order
//!   and heads each innermost run, so every record under a header shares all
//!   of the header's values.

use std::ops::Range;

use tracing::trace;

use dupview_model::{DisplayRow, Record};

use crate::filters::ActiveFilterSet;
use crate::label::build_header;

/// Stable ascending sort by the value of `name`; records lacking it sort first.
pub fn sort_by_attribute(records: &mut [Record], name: &str) {
    records.sort_by(|a, b| a.get(name).cmp(&b.get(name)));
}

/// Index ranges of maximal runs sharing one value of `name`.
///
/// Expects `records` already sorted by `name`.
pub fn run_ranges(records: &[Record], name: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    for idx in 1..records.len() {
        if records[idx].get(name) != records[idx - 1].get(name) {
            ranges.push(start..idx);
            start = idx;
        }
    }
    if !records.is_empty() {
        ranges.push(start..records.len());
    }
    ranges
}

/// Sorts `records` by `primary`, splits them into runs and, at the top level,
/// emits a header in front of each run.
///
/// Nested calls (`top_level == false`) produce no output of their own; a run
/// is emitted as its contiguous slice whenever the nested result is empty.
/// Boundaries are only checked before the last index: the final run always
/// extends to the end, so a last record whose value differs from its
/// predecessor joins the preceding run.
pub fn partition(
    mut records: Vec<Record>,
    primary: &str,
    depth: usize,
    top_level: bool,
    filters: &ActiveFilterSet,
) -> Vec<DisplayRow> {
    let mut result = Vec::new();
    if records.is_empty() {
        return result;
    }
    sort_by_attribute(&mut records, primary);

    let last = records.len() - 1;
    let mut start = 0;
    for idx in 0..records.len() {
        if idx == last {
            // The closing run takes everything from `start`, whatever its values.
            emit_run(
                &records[start..],
                primary,
                depth,
                top_level,
                false,
                filters,
                &mut result,
            );
        } else if idx > 0 && records[idx].get(primary) != records[idx - 1].get(primary) {
            let descend = filters.len() > 1 && depth != filters.len();
            emit_run(
                &records[start..idx],
                primary,
                depth,
                top_level,
                descend,
                filters,
                &mut result,
            );
            start = idx;
        }
    }
    result
}

fn emit_run(
    run: &[Record],
    primary: &str,
    depth: usize,
    top_level: bool,
    descend: bool,
    filters: &ActiveFilterSet,
    result: &mut Vec<DisplayRow>,
) {
    let mut sub_section = Vec::new();
    if descend {
        trace!(depth, primary, run = run.len(), "descending into run");
        sub_section = partition(run.to_vec(), primary, depth, false, filters);
    }
    if filters.len() <= 1 || sub_section.is_empty() {
        sub_section = run.iter().cloned().map(DisplayRow::Record).collect();
    }
    if top_level {
        result.push(DisplayRow::Header(build_header(&run[0], filters)));
        result.extend(sub_section);
    }
}

/// Groups by every active filter in activation order, with one header per
/// innermost run.
pub fn partition_nested(records: Vec<Record>, filters: &ActiveFilterSet) -> Vec<DisplayRow> {
    let names: Vec<&str> = filters.iter().collect();
    let mut runs = Vec::new();
    split_nested(records, &names, &mut runs);

    let mut result = Vec::new();
    for run in runs {
        result.push(DisplayRow::Header(build_header(&run[0], filters)));
        result.extend(run.into_iter().map(DisplayRow::Record));
    }
    result
}

fn split_nested(mut records: Vec<Record>, names: &[&str], runs: &mut Vec<Vec<Record>>) {
    if records.is_empty() {
        return;
    }
    let Some((name, rest)) = names.split_first() else {
        runs.push(records);
        return;
    };
    sort_by_attribute(&mut records, name);
    let ranges = run_ranges(&records, name);
    let mut remaining = records.into_iter();
    for range in ranges {
        let run: Vec<Record> = remaining.by_ref().take(range.len()).collect();
        split_nested(run, rest, runs);
    }
}
