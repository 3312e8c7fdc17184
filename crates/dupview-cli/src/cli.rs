//! CLI argument definitions for the duplicate grouping viewer.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use dupview_cli::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "dupview",
    version,
    about = "Group records that share attribute values",
    long_about = "Show only the records whose values for the toggled attributes occur more\n\
                  than once, grouped under a header per shared value.\n\n\
                  Reads CSV, TSV or JSON; uses a built-in pizza sample when no input is given."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging settings; `--log-level` beats `-v/-q`, and either beats `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let explicit = self.verbosity.is_present() || self.log_level.is_some();
        let level = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig::default()
            .with_level_filter(level)
            .with_env_filter(!explicit)
            .with_format(self.log_format.into())
            .with_ansi(with_ansi)
            .with_log_file(self.log_file.clone())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Toggle attributes and show the grouped duplicate view.
    Group(GroupArgs),

    /// List dataset columns with distinct and missing value counts.
    Columns(DatasetArgs),
}

/// Where the records come from.
#[derive(Args)]
pub struct DatasetArgs {
    /// CSV, TSV or JSON file (default: built-in pizza sample).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Field delimiter for CSV input.
    #[arg(long = "delimiter", value_name = "CHAR", default_value_t = ',')]
    pub delimiter: char,

    /// Split cells containing this character into lists.
    #[arg(long = "list-separator", value_name = "CHAR", default_value_t = ';')]
    pub list_separator: char,

    /// Keep every cell as a single value.
    #[arg(long = "no-lists")]
    pub no_lists: bool,
}

#[derive(Args)]
pub struct GroupArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Attribute to toggle; repeat to toggle several in order.
    ///
    /// Toggling a name twice deactivates it again. The last toggled name
    /// that remains active decides the grouping.
    #[arg(short = 't', long = "toggle", value_name = "NAME")]
    pub toggles: Vec<String>,

    /// Group by every active attribute instead of the last one only.
    #[arg(long = "nested")]
    pub nested: bool,

    /// How to print the display sequence.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,

    /// Print the display after every toggle, not only the last one.
    #[arg(long = "steps")]
    pub steps: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
    Plain,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
