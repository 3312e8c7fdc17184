//! Toggle handling and display recomputation.
//!
//! [`GroupedView`] owns the active filters and the current display sequence
//! for one dataset. Every toggle recomputes the sequence in full: duplicate
//! detection over the whole record set, then partitioning, then the result
//! replaces the previous sequence and the [`ViewAdapter`] is asked to redraw.

use std::sync::Arc;

use tracing::{debug, info_span};

use dupview_model::{Dataset, DisplayRow, GroupingMode, ViewOptions};

use crate::dedupe::retain_duplicates;
use crate::filters::{ActiveFilterSet, Toggle};
use crate::partition::{partition, partition_nested};

/// Receives the display sequence after each recomputation.
pub trait ViewAdapter {
    fn rerender(&mut self, rows: &[DisplayRow]);
}

/// Adapter that ignores redraw requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAdapter;

impl ViewAdapter for NoopAdapter {
    fn rerender(&mut self, _rows: &[DisplayRow]) {}
}

/// A toggle control offered to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub name: String,
    pub active: bool,
}

/// Header and record counts of a display sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewStats {
    pub headers: usize,
    pub records: usize,
}

impl ViewStats {
    pub fn from_rows(rows: &[DisplayRow]) -> Self {
        let headers = rows.iter().filter(|row| row.is_header()).count();
        Self {
            headers,
            records: rows.len() - headers,
        }
    }
}

/// Grouped, duplicate-only view over a read-only dataset.
#[derive(Debug, Clone)]
pub struct GroupedView {
    dataset: Arc<Dataset>,
    filters: ActiveFilterSet,
    options: ViewOptions,
    display: Vec<DisplayRow>,
}

impl GroupedView {
    /// Creates a view showing the raw records with no filter active.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_options(dataset, ViewOptions::default())
    }

    pub fn with_options(dataset: Arc<Dataset>, options: ViewOptions) -> Self {
        let display = raw_rows(&dataset);
        Self {
            dataset,
            filters: ActiveFilterSet::new(),
            options,
            display,
        }
    }

    /// Applies an optional toggle, recomputes the display sequence and asks
    /// `adapter` to redraw it.
    ///
    /// Passing `None` recomputes without toggling.
    pub fn handle_filter(&mut self, name: Option<&str>, adapter: &mut dyn ViewAdapter) {
        self.recompute(name);
        adapter.rerender(&self.display);
    }

    /// Applies an optional toggle and recomputes the display sequence.
    pub fn recompute(&mut self, name: Option<&str>) -> &[DisplayRow] {
        let span = info_span!("recompute", dataset = %self.dataset.name);
        let _guard = span.enter();

        if let Some(name) = name {
            let outcome = self.filters.toggle(name);
            debug!(
                filter = name,
                activated = matches!(outcome, Toggle::Activated),
                active = self.filters.len(),
                "filter toggled"
            );
        }

        self.display = match self.filters.last_active() {
            Some(primary) => {
                let retained = retain_duplicates(&self.dataset.records, &self.filters);
                match self.options.grouping {
                    GroupingMode::Literal => partition(retained, primary, 0, true, &self.filters),
                    GroupingMode::Nested => partition_nested(retained, &self.filters),
                }
            }
            None => raw_rows(&self.dataset),
        };

        let stats = ViewStats::from_rows(&self.display);
        debug!(
            headers = stats.headers,
            records = stats.records,
            "display recomputed"
        );
        &self.display
    }

    pub fn display(&self) -> &[DisplayRow] {
        &self.display
    }

    pub fn stats(&self) -> ViewStats {
        ViewStats::from_rows(&self.display)
    }

    pub fn filters(&self) -> &ActiveFilterSet {
        &self.filters
    }

    pub fn columns(&self) -> &[String] {
        &self.dataset.columns
    }

    /// Toggle controls for the eligible attributes, with their active state.
    pub fn filter_controls(&self) -> Vec<FilterControl> {
        let names = self
            .options
            .filterable
            .as_ref()
            .unwrap_or(&self.dataset.columns);
        names
            .iter()
            .map(|name| FilterControl {
                name: name.clone(),
                active: self.filters.contains(name),
            })
            .collect()
    }
}

fn raw_rows(dataset: &Dataset) -> Vec<DisplayRow> {
    dataset
        .records
        .iter()
        .cloned()
        .map(DisplayRow::Record)
        .collect()
}
