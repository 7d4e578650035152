//! CLI entry point for the state-space solver.
//!
//! Usage:
//!   state-search solve <puzzle.json> [options]
//!   state-search solve --stdin [options]
//!
//! Options:
//!   --strategy <dfs|bfs>      Search strategy (default: bfs)
//!   --max-depth <n>           Maximum depth-first recursion depth (default: 1024)
//!   --max-expansions <n>      Stop after expanding this many states (default: unlimited)
//!
//! Exit status is 0 when a solution is found, 1 when none exists and 2 when
//! the puzzle could not be loaded or a search limit was hit.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state_search::{
    ExpressionTreePuzzle, PuzzleError, SearchLimits, SearchReport, Solver, Strategy,
    DEFAULT_MAX_DEPTH,
};

#[derive(Parser)]
#[command(name = "state-search")]
#[command(about = "Depth-first and breadth-first puzzle solver")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an expression-tree puzzle
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Search strategy
        #[arg(long, value_enum, default_value_t = StrategyArg::Bfs)]
        strategy: StrategyArg,

        /// Maximum depth-first recursion depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Maximum number of state expansions
        #[arg(long)]
        max_expansions: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Dfs,
    Bfs,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Dfs => Strategy::Dfs,
            StrategyArg::Bfs => Strategy::Bfs,
        }
    }
}

/// Output format for a solve run
/// Exit status when a solution was found
const EXIT_SOLVED: u8 = 0;
/// Exit status when the search space was exhausted without a solution
const EXIT_UNSOLVED: u8 = 1;
/// Exit status for unreadable puzzles and aborted searches
const EXIT_ERROR: u8 = 2;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    strategy: Strategy,
    limits: SearchLimits,
    path_length: usize,
    path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignment: Option<BTreeMap<String, u8>>,
    expansions: usize,
    pruned: usize,
    time_elapsed_ms: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            strategy,
            max_depth,
            max_expansions,
        } => {
            let puzzle = match load_puzzle(file, stdin) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error loading puzzle: {e}");
                    return ExitCode::from(EXIT_ERROR);
                }
            };

            let strategy = Strategy::from(strategy);
            let limits = SearchLimits {
                max_depth,
                max_expansions,
            };
            info!(%strategy, unassigned = puzzle.unassigned().len(), "solving puzzle");

            let report = match strategy.solver(limits).search(&puzzle) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Search aborted: {e}");
                    return ExitCode::from(EXIT_ERROR);
                }
            };

            let output = format_report(strategy, limits, &report);
            match serde_json::to_string_pretty(&output) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error serializing result: {e}");
                    return ExitCode::from(EXIT_ERROR);
                }
            }

            ExitCode::from(exit_status(&output))
        }
    }
}

fn load_puzzle(file: Option<PathBuf>, stdin: bool) -> Result<ExpressionTreePuzzle, PuzzleError> {
    let json_content = if stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(path) = file {
        fs::read_to_string(&path)?
    } else {
        return Err(PuzzleError::Invalid(
            "must provide either a file path or --stdin".to_string(),
        ));
    };
    ExpressionTreePuzzle::from_json(&json_content)
}

fn exit_status(output: &SolveOutput) -> u8 {
    if output.solved {
        EXIT_SOLVED
    } else {
        EXIT_UNSOLVED
    }
}

fn format_report(
    strategy: Strategy,
    limits: SearchLimits,
    report: &SearchReport<ExpressionTreePuzzle>,
) -> SolveOutput {
    SolveOutput {
        solved: report.is_solved(),
        strategy,
        limits,
        path_length: report.path.len(),
        path: report.path.identities(),
        assignment: report.path.last().map(|p| p.variables().clone()),
        expansions: report.stats.expansions,
        pruned: report.stats.pruned,
        time_elapsed_ms: report.stats.time_elapsed_ms,
    }
}
