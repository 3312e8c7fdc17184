//! Terminal rendering of display sequences.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tracing::warn;

use dupview_core::ViewAdapter;
use dupview_model::{DisplayRow, GroupHeader, Record};

/// Output style for a display sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderFormat {
    #[default]
    Table,
    Json,
    Plain,
}

/// Bordered table with one column per dataset column; header rows carry
/// their label in the first cell.
pub fn render_table(rows: &[DisplayRow], columns: &[String]) -> Table {
    let mut table = Table::new();
    let mut heading = vec![header_cell("#")];
    heading.extend(columns.iter().map(|name| header_cell(name)));
    table.set_header(heading);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for row in rows {
        match row {
            DisplayRow::Header(header) => table.add_row(group_row(header, columns.len())),
            DisplayRow::Record(record) => table.add_row(record_row(record, columns)),
        };
    }
    table
}

/// One line per row: `# label` for headers, `- id name=value ...` for
/// records. Absent attributes are left out.
pub fn render_plain(rows: &[DisplayRow], columns: &[String]) -> String {
    let mut lines = Vec::with_capacity(rows.len());
    for row in rows {
        match row {
            DisplayRow::Header(header) => lines.push(format!("# {}", header.label)),
            DisplayRow::Record(record) => {
                let mut line = format!("- {}", record.id.0);
                for name in columns {
                    if let Some(value) = record.get(name) {
                        line.push_str(&format!(" {name}={value}"));
                    }
                }
                lines.push(line);
            }
        }
    }
    lines.join("\n")
}

/// Pretty JSON array of tagged rows.
pub fn render_json(rows: &[DisplayRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

/// Renders to a string in the requested format.
pub fn render(rows: &[DisplayRow], columns: &[String], format: RenderFormat) -> String {
    match format {
        RenderFormat::Table => render_table(rows, columns).to_string(),
        RenderFormat::Plain => render_plain(rows, columns),
        RenderFormat::Json => render_json(rows).unwrap_or_else(|error| {
            warn!(%error, "failed to serialize display rows");
            "[]".to_string()
        }),
    }
}

/// View adapter that renders every redraw to text.
///
/// The latest rendering is kept for the caller; with `echo` set each one is
/// also printed to stdout as it happens.
#[derive(Debug, Clone)]
pub struct TerminalAdapter {
    format: RenderFormat,
    columns: Vec<String>,
    echo: bool,
    renders: usize,
    latest: Option<String>,
}

impl TerminalAdapter {
    pub fn new(format: RenderFormat, columns: Vec<String>) -> Self {
        Self {
            format,
            columns,
            echo: false,
            renders: 0,
            latest: None,
        }
    }

    #[must_use]
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Number of redraws received so far.
    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }
}

impl ViewAdapter for TerminalAdapter {
    fn rerender(&mut self, rows: &[DisplayRow]) {
        let text = render(rows, &self.columns, self.format);
        self.renders += 1;
        if self.echo {
            println!("{text}");
            println!();
        }
        self.latest = Some(text);
    }
}

fn group_row(header: &GroupHeader, width: usize) -> Vec<Cell> {
    let mut cells = vec![
        Cell::new(&header.label)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ];
    cells.extend((0..width).map(|_| Cell::new("")));
    cells
}

fn record_row(record: &Record, columns: &[String]) -> Vec<Cell> {
    let mut cells = vec![Cell::new(record.id.0)];
    for name in columns {
        match record.get(name) {
            Some(value) => cells.push(Cell::new(value)),
            None => cells.push(dim_cell("-")),
        }
    }
    cells
}

/// Condensed rounded style shared by every table the binary prints.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
