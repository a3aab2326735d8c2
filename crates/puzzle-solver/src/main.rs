//! CLI entry point for the puzzle solver.
//!
//! Usage:
//!   puzzle-solver solve <puzzle.json> [options]
//!   puzzle-solver solve --stdin [options]
//!
//! Options:
//!   --strategy <dfs|bfs>     Search strategy (default: dfs)
//!   --forbid <fingerprint>   State that may not appear on the path (repeatable)
//!   -v                       Increase logging verbosity (repeatable)

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{info, LevelFilter};

use puzzle_solver::{InputError, PuzzleFile, SeenSet, Strategy};

#[derive(Parser)]
#[command(name = "puzzle-solver")]
#[command(about = "Depth-first and breadth-first solver for full-information puzzles")]
#[command(version)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    log_level: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a path from the puzzle's starting state to a solved state
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Search strategy
        #[arg(long, value_enum, default_value_t = Strategy::Dfs)]
        strategy: Strategy,

        /// Fingerprint of a state that may not appear on the path
        #[arg(long, value_name = "FINGERPRINT")]
        forbid: Vec<String>,
    },
}

fn read_puzzle(file: Option<PathBuf>, stdin: bool) -> Result<PuzzleFile, InputError> {
    if stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| InputError::Read {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        PuzzleFile::from_json(&buffer)
    } else if let Some(path) = file {
        PuzzleFile::read(&path)
    } else {
        Err(InputError::MissingInput)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            strategy,
            forbid,
        } => {
            let puzzle = match read_puzzle(file, stdin).and_then(PuzzleFile::into_puzzle) {
                Ok(puzzle) => puzzle,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            };

            let mut seen: SeenSet = forbid.into_iter().collect();
            info!("solving with {:?}, {} forbidden states", strategy, seen.len());
            let report = puzzle.solve(strategy, Some(&mut seen));

            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: failed to encode result: {}", e);
                    return ExitCode::FAILURE;
                }
            }

            if report.solved {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
