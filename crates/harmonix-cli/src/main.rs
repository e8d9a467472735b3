//! Harmonix CLI - harmonic analysis of graph clique complexes.
//!
//! # Usage
//!
//! ```bash
//! # Analyze the reference graph (square + filled triangle)
//! harmonix analyze
//!
//! # Analyze another built-in graph
//! harmonix analyze --graph two-squares
//!
//! # Machine-readable output with exact rational entries
//! harmonix analyze --format json
//!
//! # List the built-in graphs
//! harmonix graphs
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use harmonix_core::{analyze, OrientedGraph};

#[derive(Parser)]
#[command(name = "harmonix")]
#[command(about = "Harmonic space of a graph's clique complex", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a built-in graph
    Analyze {
        /// Built-in graph to analyze
        #[arg(long, value_enum, default_value = "reference")]
        graph: BuiltinGraph,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the built-in graphs
    Graphs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BuiltinGraph {
    /// Square plus a filled triangle hanging off one corner
    Reference,
    /// A single filled triangle
    Triangle,
    /// A bare 4-cycle
    Square,
    /// Two disjoint bare 4-cycles
    TwoSquares,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// JSON with exact rational kernel entries
    Json,
}

impl BuiltinGraph {
    fn description(self) -> &'static str {
        match self {
            Self::Reference => {
                "six vertices: a 4-cycle plus a filled triangle sharing one vertex"
            }
            Self::Triangle => "three vertices forming a single filled triangle",
            Self::Square => "four vertices forming one unfilled 4-cycle",
            Self::TwoSquares => "eight vertices forming two disjoint unfilled 4-cycles",
        }
    }

    fn build(self) -> Result<OrientedGraph> {
        let graph = match self {
            Self::Reference => OrientedGraph::from_pairs(
                &[1, 2, 3, 4, 5, 6],
                &[(1, 2), (2, 3), (3, 4), (4, 1), (3, 5), (5, 6), (3, 6)],
            ),
            Self::Triangle => OrientedGraph::from_pairs(&[1, 2, 3], &[(1, 2), (2, 3), (3, 1)]),
            Self::Square => {
                OrientedGraph::from_pairs(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4), (4, 1)])
            }
            Self::TwoSquares => OrientedGraph::from_pairs(
                &[1, 2, 3, 4, 5, 6, 7, 8],
                &[
                    (1, 2),
                    (2, 3),
                    (3, 4),
                    (4, 1),
                    (5, 6),
                    (6, 7),
                    (7, 8),
                    (8, 5),
                ],
            ),
        };
        graph.context("built-in graph failed validation")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { graph, format } => {
            let analysis = analyze(&graph.build()?).context("harmonic analysis failed")?;
            match format {
                OutputFormat::Text => println!("{analysis}"),
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&analysis)
                        .context("failed to serialize analysis")?;
                    println!("{json}");
                }
            }
        }
        Commands::Graphs => {
            for graph in [
                BuiltinGraph::Reference,
                BuiltinGraph::Triangle,
                BuiltinGraph::Square,
                BuiltinGraph::TwoSquares,
            ] {
                let name = graph
                    .to_possible_value()
                    .expect("no skipped variants")
                    .get_name()
                    .to_string();
                println!("{name:<12} {}", graph.description());
            }
        }
    }

    Ok(())
}
