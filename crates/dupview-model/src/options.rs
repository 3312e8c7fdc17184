//! Configuration options for grouped views.

use serde::{Deserialize, Serialize};

/// How records are split into runs once duplicates are retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    /// Single-level grouping by the most recently activated filter.
    #[default]
    Literal,
    /// Hierarchical grouping: split by each active filter in activation
    /// order, with one header per innermost run.
    Nested,
}

/// Options controlling how a grouped view is computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Run-splitting strategy.
    pub grouping: GroupingMode,

    /// Attributes offered as filter controls.
    ///
    /// `None` offers every dataset column. Toggling is not restricted by
    /// this list; it only drives the controls a renderer shows.
    pub filterable: Option<Vec<String>>,
}

impl ViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_grouping(mut self, grouping: GroupingMode) -> Self {
        self.grouping = grouping;
        self
    }

    #[must_use]
    pub fn with_filterable(mut self, names: Vec<String>) -> Self {
        self.filterable = Some(names);
        self
    }
}
