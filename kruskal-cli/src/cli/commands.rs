//! Command implementations and argument parsing for the kruskal CLI.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use kruskal_core::{
    Edge, MinimumSpanningForest, MstError, Weight,
    generator::{GeneratorError, seeded_complete_graph},
    kruskal_mst_in_place,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_SEED: u64 = 42;
const DEFAULT_MIN_WEIGHT: i64 = 1;
const DEFAULT_MAX_WEIGHT: i64 = 100;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kruskal",
    about = "Compute minimum spanning trees with Kruskal's algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning forest of an edge list file.
    Solve(SolveCommand),
    /// Print a random complete graph as a text edge list.
    Generate(GenerateCommand),
}

/// Options accepted by the `solve` command.
#[derive(Debug, Args, Clone)]
pub struct SolveCommand {
    /// Path to the edge list.
    pub path: PathBuf,

    /// Vertex count; inferred from the input when omitted.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub nodes: Option<usize>,

    /// Layout of the edge list file.
    #[arg(long, value_enum, default_value_t = InputFormat::Text)]
    pub format: InputFormat,

    /// Numeric type used for edge weights.
    #[arg(long, value_enum, default_value_t = WeightKind::Integer)]
    pub weights: WeightKind,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of vertices in the complete graph.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub nodes: usize,

    /// Seed for the random weight generator.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Smallest weight that may be drawn.
    #[arg(long = "min-weight", default_value_t = DEFAULT_MIN_WEIGHT, allow_negative_numbers = true)]
    pub min_weight: i64,

    /// Largest weight that may be drawn.
    #[arg(long = "max-weight", default_value_t = DEFAULT_MAX_WEIGHT, allow_negative_numbers = true)]
    pub max_weight: i64,
}

/// Edge list file layouts understood by `solve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One `weight u v` triple per line, separated by whitespace or commas.
    Text,
    /// `{"node_count": N, "edges": [[w, u, v], ...]}` with `node_count`
    /// optional.
    Json,
}

/// Numeric weight types accepted by `solve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WeightKind {
    /// Signed 64-bit integers.
    Integer,
    /// 64-bit floats; NaN and infinities are rejected.
    Float,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while reading an edge list.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A text edge list line could not be parsed.
    #[error("{path}:{line}: {message}")]
    Parse {
        /// Path of the edge list.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },
    /// A JSON edge list could not be decoded.
    #[error("failed to decode `{path}`: {source}")]
    Json {
        /// Path of the edge list.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The edge list was rejected by the MST engine.
    #[error(transparent)]
    Mst(#[from] MstError),
    /// Graph generation failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

impl CliError {
    /// Returns the stable code of the underlying library error, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Mst(err) => Some(err.code().as_str()),
            Self::Generator(err) => Some(err.code().as_str()),
            Self::Io { .. } | Self::Parse { .. } | Self::Json { .. } => None,
        }
    }
}

/// A generated complete graph ready to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGraph {
    /// Vertex count.
    pub node_count: usize,
    /// Seed the weights were drawn with.
    pub seed: u64,
    /// Edges in lexicographic endpoint order.
    pub edges: Vec<Edge<i64>>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionSummary {
    /// Forest computed from integer weights.
    IntegerForest(MinimumSpanningForest<i64>),
    /// Forest computed from float weights.
    FloatForest(MinimumSpanningForest<f64>),
    /// Output of `generate`.
    Graph(GeneratedGraph),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing or solving fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, Command, ExecutionSummary, InputFormat, SolveCommand, WeightKind, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "1 0 1\n2 1 2\n3 0 2\n")?;
/// let cli = Cli {
///     command: Command::Solve(SolveCommand {
///         path: file.path().to_path_buf(),
///         nodes: None,
///         format: InputFormat::Text,
///         weights: WeightKind::Integer,
///     }),
/// };
/// let ExecutionSummary::IntegerForest(forest) = run_cli(cli)? else {
///     unreachable!("integer weights were requested");
/// };
/// assert_eq!(forest.total_weight(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Solve(solve) => {
            Span::current().record("command", field::display("solve"));
            run_solve(solve)
        }
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(&generate).map(ExecutionSummary::Graph)
        }
    }
}

#[instrument(
    name = "cli.solve",
    err,
    skip(command),
    fields(path = field::Empty, format = field::Empty, weights = field::Empty),
)]
pub(super) fn run_solve(command: SolveCommand) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    span.record("path", field::display(command.path.display()));
    span.record("format", field::debug(command.format));
    span.record("weights", field::debug(command.weights));

    match command.weights {
        WeightKind::Integer => solve_with::<i64>(&command).map(ExecutionSummary::IntegerForest),
        WeightKind::Float => solve_with::<f64>(&command).map(ExecutionSummary::FloatForest),
    }
}

fn solve_with<W>(command: &SolveCommand) -> Result<MinimumSpanningForest<W>, CliError>
where
    W: Weight + fmt::Display + FromStr + DeserializeOwned,
    <W as FromStr>::Err: fmt::Display,
{
    let EdgeList {
        node_count,
        mut edges,
    } = load_edges::<W>(&command.path, command.format)?;
    let node_count = command
        .nodes
        .or(node_count)
        .unwrap_or_else(|| infer_node_count(&edges));

    let forest = kruskal_mst_in_place(node_count, &mut edges)?;
    info!(
        vertices = forest.node_count(),
        accepted = forest.edges().len(),
        components = forest.component_count(),
        total_weight = %forest.total_weight(),
        "solve completed"
    );
    Ok(forest)
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(nodes = command.nodes, seed = command.seed),
)]
pub(super) fn run_generate(command: &GenerateCommand) -> Result<GeneratedGraph, CliError> {
    let edges = seeded_complete_graph(
        command.nodes,
        command.min_weight..=command.max_weight,
        command.seed,
    )?;
    info!(edges = edges.len(), "generate completed");
    Ok(GeneratedGraph {
        node_count: command.nodes,
        seed: command.seed,
        edges,
    })
}

/// Edges read from a file plus the vertex count it declared, if any.
#[derive(Debug)]
pub(super) struct EdgeList<W> {
    pub(super) node_count: Option<usize>,
    pub(super) edges: Vec<Edge<W>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeListDocument<W> {
    #[serde(default)]
    node_count: Option<usize>,
    edges: Vec<(W, usize, usize)>,
}

#[instrument(name = "cli.load_edges", err, skip(format), fields(path = field::Empty))]
pub(super) fn load_edges<W>(path: &Path, format: InputFormat) -> Result<EdgeList<W>, CliError>
where
    W: FromStr + DeserializeOwned,
    <W as FromStr>::Err: fmt::Display,
{
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    match format {
        InputFormat::Text => Ok(EdgeList {
            node_count: None,
            edges: parse_text_edges(path, reader)?,
        }),
        InputFormat::Json => {
            let document: EdgeListDocument<W> =
                serde_json::from_reader(reader).map_err(|source| CliError::Json {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok(EdgeList {
                node_count: document.node_count,
                edges: document.edges.into_iter().map(Edge::from).collect(),
            })
        }
    }
}

/// Parses `weight u v` lines; blank lines and `#` comments are skipped.
pub(super) fn parse_text_edges<W>(path: &Path, reader: impl BufRead) -> Result<Vec<Edge<W>>, CliError>
where
    W: FromStr,
    <W as FromStr>::Err: fmt::Display,
{
    let mut edges = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let parse_error = |message: String| CliError::Parse {
            path: path.to_path_buf(),
            line: index + 1,
            message,
        };
        let fields: Vec<&str> = content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|field| !field.is_empty())
            .collect();
        let [weight, source, target] = fields.as_slice() else {
            return Err(parse_error(format!(
                "expected `weight u v`, found {} fields",
                fields.len()
            )));
        };

        let weight = weight
            .parse::<W>()
            .map_err(|err| parse_error(format!("invalid weight `{weight}`: {err}")))?;
        let vertex = |raw: &str| {
            raw.parse::<usize>()
                .map_err(|err| parse_error(format!("invalid vertex `{raw}`: {err}")))
        };
        edges.push(Edge::new(weight, vertex(*source)?, vertex(*target)?));
    }
    Ok(edges)
}

/// One past the largest endpoint, or zero for an empty list.
pub(super) fn infer_node_count<W>(edges: &[Edge<W>]) -> usize {
    edges
        .iter()
        .map(|edge| edge.source().max(edge.target()))
        .max()
        .map_or(0, |largest| largest.saturating_add(1))
}

/// Renders `summary` to `writer`.
///
/// Forests print a header block followed by one `u\tv\tw` line per accepted
/// edge. Generated graphs print as a text edge list that `solve` reads back.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{ExecutionSummary, render_summary};
/// # use kruskal_core::{Edge, kruskal_mst};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let forest = kruskal_mst(2, &[Edge::new(4_i64, 0, 1)])?;
/// let mut buffer = Vec::new();
/// render_summary(&ExecutionSummary::IntegerForest(forest), &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "vertices: 2\nedges: 1\ncomponents: 1\nspanning tree: yes\ntotal weight: 4\n0\t1\t4\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::IntegerForest(forest) => render_forest(forest, &mut writer),
        ExecutionSummary::FloatForest(forest) => render_forest(forest, &mut writer),
        ExecutionSummary::Graph(graph) => {
            writeln!(writer, "# vertices: {}", graph.node_count)?;
            writeln!(writer, "# seed: {}", graph.seed)?;
            for edge in &graph.edges {
                writeln!(writer, "{} {} {}", edge.weight(), edge.source(), edge.target())?;
            }
            Ok(())
        }
    }
}

fn render_forest<W: Weight + fmt::Display>(
    forest: &MinimumSpanningForest<W>,
    mut writer: impl Write,
) -> io::Result<()> {
    writeln!(writer, "vertices: {}", forest.node_count())?;
    writeln!(writer, "edges: {}", forest.edges().len())?;
    writeln!(writer, "components: {}", forest.component_count())?;
    let spanning = if forest.is_spanning_tree() { "yes" } else { "no" };
    writeln!(writer, "spanning tree: {spanning}")?;
    writeln!(writer, "total weight: {}", forest.total_weight())?;
    for edge in forest.edges() {
        writeln!(writer, "{}\t{}\t{}", edge.source(), edge.target(), edge.weight())?;
    }
    Ok(())
}
