//! Command implementations and argument parsing for the boruvka CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use boruvka_core::{ContractionBuilder, ContractionError, ContractionOutcome};
use boruvka_providers_dimacs::{GraphSource, GraphSourceError};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_SOURCE_NAME: &str = "graph";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "boruvka",
    about = "Compute minimum spanning forests by concurrent Boruvka contraction."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Contract a graph file into its minimum spanning forest.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Number of worker threads (defaults to the available parallelism).
    #[arg(long)]
    pub workers: Option<usize>,

    /// Seed for the contention backoff jitter.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Summary format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output: OutputFormat,

    /// Include every forest edge in the summary.
    #[arg(long)]
    pub print_edges: bool,

    /// Graph file to load.
    #[command(subcommand)]
    pub source: RunSource,
}

/// Graph file formats accepted by `run`.
#[derive(Debug, Subcommand, Clone)]
pub enum RunSource {
    /// DIMACS shortest-path file (`p sp`, 1-based `a` arcs).
    Dimacs(SourceArgs),
    /// Plain edge list: a vertex count line, then `<u> <v> <w>` with 0-based ids.
    EdgeList(SourceArgs),
}

/// Arguments shared by every graph file format.
#[derive(Debug, Args, Clone)]
pub struct SourceArgs {
    /// Path to the graph file.
    pub path: PathBuf,

    /// Override name for the graph (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Summary formats written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `key: value` lines.
    #[default]
    Human,
    /// A single JSON object.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph file was malformed.
    #[error("failed to read `{path}`: {source}")]
    Source {
        /// Path of the offending file.
        path: PathBuf,
        /// Parse failure reported by the provider.
        #[source]
        source: GraphSourceError,
    },
    /// Engine configuration, graph loading or contraction failed.
    #[error(transparent)]
    Core(#[from] ContractionError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the graph.
    pub data_source: String,
    /// Number of vertices declared by the graph file.
    pub vertex_count: usize,
    /// Number of edges read from the graph file.
    pub edge_count: usize,
    /// Number of worker threads used.
    pub workers: usize,
    /// Contraction result.
    pub outcome: ContractionOutcome,
    /// Format used by [`render_summary`].
    pub output: OutputFormat,
    /// Whether [`render_summary`] lists the forest edges.
    pub print_edges: bool,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph or contracting it fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use boruvka_cli::cli::{Cli, Command, OutputFormat, RunCommand, RunSource, SourceArgs, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n0 1 2\n1 2 1\n0 2 3\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         workers: Some(2),
///         seed: None,
///         output: OutputFormat::Human,
///         print_edges: false,
///         source: RunSource::EdgeList(SourceArgs {
///             path: file.path().to_path_buf(),
///             name: None,
///         }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.outcome.forest().total_weight(), 3.0);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(workers = field::Empty, format = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        workers,
        seed,
        output,
        print_edges,
        source,
    } = command;

    let mut builder = ContractionBuilder::new();
    if let Some(count) = workers {
        builder = builder.with_workers(count);
    }
    if let Some(value) = seed {
        builder = builder.with_seed(value);
    }
    let engine = builder.build()?;

    let span = Span::current();
    span.record("workers", engine.workers().get());
    let graph = match source {
        RunSource::Dimacs(args) => {
            span.record("format", field::display("dimacs"));
            load_source(&args, |name, reader| {
                GraphSource::from_dimacs_reader(name, reader)
            })?
        }
        RunSource::EdgeList(args) => {
            span.record("format", field::display("edge-list"));
            load_source(&args, |name, reader| {
                GraphSource::from_edge_list_reader(name, reader)
            })?
        }
    };

    let data_source = graph.name().to_owned();
    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();
    let loaded = graph
        .into_builder()
        .build()
        .map_err(ContractionError::from)?;
    let outcome = engine.run(loaded)?;

    info!(
        data_source = data_source.as_str(),
        components = outcome.forest().component_count(),
        total_weight = outcome.forest().total_weight(),
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source,
        vertex_count,
        edge_count,
        workers: engine.workers().get(),
        outcome,
        output,
        print_edges,
    })
}

#[instrument(
    name = "cli.load_source",
    err,
    skip(args, parse),
    fields(
        path = field::Empty,
        override_name = field::Empty,
        vertices = field::Empty,
        edges = field::Empty,
    ),
)]
pub(super) fn load_source<F>(args: &SourceArgs, parse: F) -> Result<GraphSource, CliError>
where
    F: FnOnce(String, BufReader<File>) -> Result<GraphSource, GraphSourceError>,
{
    let span = Span::current();
    span.record("path", field::display(args.path.display()));
    span.record(
        "override_name",
        field::display(args.name.as_deref().unwrap_or("<derived>")),
    );

    let name = derive_data_source_name(&args.path, args.name.as_deref());
    let reader = open_reader(&args.path)?;
    let graph = parse(name, reader).map_err(|source| CliError::Source {
        path: args.path.clone(),
        source,
    })?;
    span.record("vertices", graph.vertex_count());
    span.record("edges", graph.edge_count());
    Ok(graph)
}

#[instrument(name = "cli.open_reader", err, fields(path = field::Empty))]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| DEFAULT_SOURCE_NAME.to_owned(), ToOwned::to_owned)
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    data_source: &'a str,
    vertices: usize,
    edges: usize,
    workers: usize,
    connected: bool,
    components: usize,
    total_weight: f64,
    tree_edges: usize,
    merges: u64,
    contended: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    forest_edges: Option<Vec<EdgeReport>>,
}

#[derive(Serialize)]
struct EdgeReport {
    source: usize,
    target: usize,
    weight: f64,
}

impl<'a> SummaryReport<'a> {
    fn new(summary: &'a ExecutionSummary) -> Self {
        let forest = summary.outcome.forest();
        let totals = summary.outcome.stats().total();
        let forest_edges = summary.print_edges.then(|| {
            forest
                .edges()
                .iter()
                .map(|edge| EdgeReport {
                    source: edge.source(),
                    target: edge.target(),
                    weight: edge.weight(),
                })
                .collect()
        });
        Self {
            data_source: &summary.data_source,
            vertices: summary.vertex_count,
            edges: summary.edge_count,
            workers: summary.workers,
            connected: forest.is_tree(),
            components: forest.component_count(),
            total_weight: forest.total_weight(),
            tree_edges: forest.edges().len(),
            merges: totals.merges(),
            contended: totals.contended(),
            forest_edges,
        }
    }
}

/// Renders `summary` to `writer` in the format it was requested in.
///
/// Human output is one `key: value` line per field followed, when requested,
/// by one `source<TAB>target<TAB>weight` line per forest edge. JSON output is
/// a single object terminated by a newline.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let report = SummaryReport::new(summary);
    match summary.output {
        OutputFormat::Human => render_human(&report, &mut writer),
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, &report)?;
            writeln!(writer)
        }
    }
}

fn render_human(report: &SummaryReport<'_>, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", report.data_source)?;
    writeln!(writer, "vertices: {}", report.vertices)?;
    writeln!(writer, "edges: {}", report.edges)?;
    writeln!(writer, "workers: {}", report.workers)?;
    writeln!(writer, "connected: {}", report.connected)?;
    writeln!(writer, "components: {}", report.components)?;
    writeln!(writer, "total weight: {}", report.total_weight)?;
    writeln!(writer, "tree edges: {}", report.tree_edges)?;
    writeln!(writer, "merges: {}", report.merges)?;
    writeln!(writer, "contended: {}", report.contended)?;
    for edge in report.forest_edges.iter().flatten() {
        writeln!(writer, "{}\t{}\t{}", edge.source, edge.target, edge.weight)?;
    }
    Ok(())
}
