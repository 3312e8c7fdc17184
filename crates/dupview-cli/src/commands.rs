use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{info, info_span, warn};

use dupview_cli::render::{RenderFormat, TerminalAdapter};
use dupview_core::{GroupedView, ViewStats};
use dupview_ingest::{CsvOptions, load_dataset, pizzas};
use dupview_model::{Dataset, GroupingMode, ViewOptions};

use crate::cli::{DatasetArgs, GroupArgs, OutputArg};

/// Outcome of a `group` run.
pub struct GroupResult {
    pub dataset: String,
    pub format: RenderFormat,
    pub active: Vec<String>,
    pub primary: Option<String>,
    pub stats: ViewStats,
    /// Final rendering; `None` when every step was already printed.
    pub rendered: Option<String>,
}

pub fn run_group(args: &GroupArgs) -> Result<GroupResult> {
    let dataset = Arc::new(load(&args.dataset)?);
    let span = info_span!("group", dataset = %dataset.name);
    let _guard = span.enter();

    for name in &args.toggles {
        if !dataset.has_column(name) {
            warn!(filter = %name, "toggled attribute is not a dataset column");
        }
    }

    let grouping = if args.nested {
        GroupingMode::Nested
    } else {
        GroupingMode::Literal
    };
    let options = ViewOptions::new().with_grouping(grouping);
    let format = render_format(args.output);
    let mut adapter =
        TerminalAdapter::new(format, dataset.columns.clone()).with_echo(args.steps);
    let mut view = GroupedView::with_options(Arc::clone(&dataset), options);

    if args.toggles.is_empty() {
        view.handle_filter(None, &mut adapter);
    }
    for name in &args.toggles {
        view.handle_filter(Some(name.as_str()), &mut adapter);
    }

    let stats = view.stats();
    info!(
        renders = adapter.renders(),
        headers = stats.headers,
        records = stats.records,
        "grouping complete"
    );
    let rendered = if args.steps {
        None
    } else {
        adapter.latest().map(str::to_string)
    };
    Ok(GroupResult {
        dataset: dataset.name.clone(),
        format,
        active: view.filters().iter().map(str::to_string).collect(),
        primary: view.filters().last_active().map(str::to_string),
        stats,
        rendered,
    })
}

pub fn print_group(result: &GroupResult) {
    if let Some(text) = &result.rendered {
        println!("{text}");
    }
    if result.format != RenderFormat::Table {
        return;
    }
    println!("Dataset: {}", result.dataset);
    if result.active.is_empty() {
        println!("Active filters: none");
    } else {
        println!("Active filters: {}", result.active.join(", "));
    }
    if let Some(primary) = &result.primary {
        println!("Grouped by: {primary}");
    }
    println!(
        "Groups: {}  Records: {}",
        result.stats.headers, result.stats.records
    );
}

pub fn run_columns(args: &DatasetArgs) -> Result<()> {
    let dataset = load(args)?;
    let mut table = Table::new();
    table.set_header(vec!["Column", "Distinct", "Missing"]);
    dupview_cli::render::apply_table_style(&mut table);
    for idx in [1, 2] {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    for name in &dataset.columns {
        let mut distinct = BTreeSet::new();
        let mut missing = 0usize;
        for record in &dataset.records {
            match record.get(name) {
                Some(value) => {
                    distinct.insert(value);
                }
                None => missing += 1,
            }
        }
        table.add_row(vec![
            Cell::new(name),
            Cell::new(distinct.len()),
            Cell::new(missing),
        ]);
    }
    println!("Dataset: {} ({} records)", dataset.name, dataset.len());
    println!("{table}");
    Ok(())
}

fn load(args: &DatasetArgs) -> Result<Dataset> {
    let Some(path) = &args.input else {
        info!("no input given, using the pizza sample");
        return Ok(pizzas());
    };
    let delimiter = u8::try_from(args.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| anyhow!("delimiter must be a single ASCII character"))?;
    let list_separator = if args.no_lists {
        None
    } else {
        Some(args.list_separator)
    };
    let options = CsvOptions::default()
        .with_delimiter(delimiter)
        .with_list_separator(list_separator);
    load_dataset(path, &options).with_context(|| format!("load {}", path.display()))
}

fn render_format(output: OutputArg) -> RenderFormat {
    match output {
        OutputArg::Table => RenderFormat::Table,
        OutputArg::Json => RenderFormat::Json,
        OutputArg::Plain => RenderFormat::Plain,
    }
}
