//! Argument parsing and command execution for the complexnets CLI.

use std::io::{self, Write};

use clap::{ArgGroup, Args, Parser, Subcommand};
use complexnets_core::{
    BarabasiAlbertParams, DEFAULT_RETRY_BUDGET, DegreeSequence, ErdosRenyiParams, GeneratorError,
    Graph, GraphGenerator, HotExtendedParams, connected_components,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "complexnets",
    about = "Generate complex networks and print their edge lists."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a graph with one of the stochastic models.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Seed for the random stream; drawn from OS entropy when omitted.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Model to run.
    #[command(subcommand)]
    pub model: Model,
}

/// Graph models exposed on the command line.
#[derive(Debug, Subcommand, Clone)]
pub enum Model {
    /// Erdős–Rényi `G(n, p)`, pruned to its largest component.
    ErdosRenyi(ErdosRenyiArgs),
    /// Barabási–Albert preferential attachment.
    BarabasiAlbert(BarabasiAlbertArgs),
    /// HOT-Extended geometric/hop-distance model.
    HotExtended(HotExtendedArgs),
    /// Realise a target degree sequence.
    DegreeSequence(DegreeSequenceArgs),
}

impl Model {
    const fn label(&self) -> &'static str {
        match self {
            Self::ErdosRenyi(_) => "erdos-renyi",
            Self::BarabasiAlbert(_) => "barabasi-albert",
            Self::HotExtended(_) => "hot-extended",
            Self::DegreeSequence(_) => "degree-sequence",
        }
    }
}

/// Erdős–Rényi arguments.
#[derive(Debug, Args, Clone)]
pub struct ErdosRenyiArgs {
    /// Number of vertices before pruning.
    #[arg(long)]
    pub vertices: usize,

    /// Probability of each possible edge.
    #[arg(long)]
    pub probability: f64,
}

/// Barabási–Albert arguments.
#[derive(Debug, Args, Clone)]
pub struct BarabasiAlbertArgs {
    /// Size of the complete seed graph (`m0`).
    #[arg(long)]
    pub seed_vertices: usize,

    /// Links made by each new vertex (`m`).
    #[arg(long)]
    pub edges_per_vertex: usize,

    /// Final number of vertices (`n`).
    #[arg(long)]
    pub vertices: usize,

    /// Consecutive rejected draws tolerated per new vertex.
    #[arg(long, default_value_t = DEFAULT_RETRY_BUDGET)]
    pub retry_budget: usize,
}

/// HOT-Extended arguments.
#[derive(Debug, Args, Clone)]
pub struct HotExtendedArgs {
    /// Links made by each new vertex (`m`).
    #[arg(long)]
    pub edges_per_vertex: usize,

    /// Final number of vertices (`n`).
    #[arg(long)]
    pub vertices: usize,

    /// Weight of the hop distance to the root during attachment.
    #[arg(long)]
    pub xi: f64,

    /// Root links added after each attachment (`q`).
    #[arg(long)]
    pub reinforcement_edges: usize,

    /// Weight of the hop-distance gain during reinforcement.
    #[arg(long)]
    pub r: f64,
}

/// Degree-sequence arguments; exactly one input form is required.
#[derive(Debug, Args, Clone)]
#[command(group(ArgGroup::new("input").required(true).args(["degrees", "histogram"])))]
pub struct DegreeSequenceArgs {
    /// Target degree of each vertex, in vertex order.
    #[arg(long, value_delimiter = ',')]
    pub degrees: Option<Vec<usize>>,

    /// Vertex counts per degree: the `k`-th entry counts vertices of degree `k`.
    #[arg(long, value_delimiter = ',')]
    pub histogram: Option<Vec<usize>>,
}

impl DegreeSequenceArgs {
    fn into_sequence(self) -> DegreeSequence {
        match (self.degrees, self.histogram) {
            (Some(degrees), _) => DegreeSequence::new(degrees),
            (None, Some(counts)) => DegreeSequence::from_histogram(&counts),
            (None, None) => DegreeSequence::default(),
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The generator rejected its parameters or failed while building.
    #[error(transparent)]
    Core(#[from] GeneratorError),
}

/// Outcome of a generator run.
#[derive(Debug, Clone)]
pub struct GraphSummary {
    /// Model label as typed on the command line.
    pub model: &'static str,
    /// Generated graph.
    pub graph: Graph,
    /// Number of connected components in `graph`.
    pub components: usize,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the generator rejects its parameters or fails.
///
/// # Examples
/// ```
/// use complexnets_cli::cli::{Cli, Command, ErdosRenyiArgs, GenerateCommand, Model, run_cli};
///
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         seed: Some(7),
///         model: Model::ErdosRenyi(ErdosRenyiArgs {
///             vertices: 6,
///             probability: 1.0,
///         }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.graph.edge_count(), 15);
/// assert_eq!(summary.components, 1);
/// # Ok::<(), complexnets_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<GraphSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(generate)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(model = command.model.label(), seed = field::Empty),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GraphSummary, CliError> {
    let mut generator = match command.seed {
        Some(seed) => {
            Span::current().record("seed", seed);
            GraphGenerator::seeded(seed)
        }
        None => GraphGenerator::from_entropy(),
    };

    let model = command.model.label();
    let graph = match command.model {
        Model::ErdosRenyi(args) => {
            generator.erdos_renyi(&ErdosRenyiParams::new(args.vertices, args.probability)?)?
        }
        Model::BarabasiAlbert(args) => {
            let params =
                BarabasiAlbertParams::new(args.seed_vertices, args.edges_per_vertex, args.vertices)?
                    .with_retry_budget(args.retry_budget);
            generator.barabasi_albert(&params)?
        }
        Model::HotExtended(args) => generator.hot_extended(&HotExtendedParams::new(
            args.edges_per_vertex,
            args.vertices,
            args.xi,
            args.reinforcement_edges,
            args.r,
        )?)?,
        Model::DegreeSequence(args) => generator.degree_sequence(&args.into_sequence())?,
    };

    let components = connected_components(&graph).len();
    info!(
        model,
        vertices = graph.vertices_count(),
        edges = graph.edge_count(),
        components,
        "command completed"
    );
    Ok(GraphSummary {
        model,
        graph,
        components,
    })
}

/// Renders `summary` to `writer`: a three-line header followed by one
/// tab-separated line per edge.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use complexnets_cli::cli::{GraphSummary, render_summary};
/// # use complexnets_core::{Graph, VertexId};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let id = |raw| VertexId::new(raw).expect("positive");
/// let summary = GraphSummary {
///     model: "demo",
///     graph: Graph::from_edges([(id(1), id(2))])?,
///     components: 1,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "vertices: 2\nedges: 1\ncomponents: 1\n1\t2\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &GraphSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "vertices: {}", summary.graph.vertices_count())?;
    writeln!(writer, "edges: {}", summary.graph.edge_count())?;
    writeln!(writer, "components: {}", summary.components)?;
    for (low, high) in summary.graph.edges() {
        writeln!(writer, "{low}\t{high}")?;
    }
    Ok(())
}
