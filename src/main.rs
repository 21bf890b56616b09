//! # bellman-queens
//!
//! Command-line front end for two independent solvers:
//!
//! 1.  **Shortest paths**: Bellman-Ford from one source vertex over a weighted edge list,
//!     with detection of negative-weight cycles reachable from that source.
//! 2.  **N-Queens**: the board is encoded as CNF, handed to a SAT solver, and every
//!     solution is enumerated by blocking each model found.
//!
//! ## Usage
//!
//! ```sh
//! bellman-queens [OPTIONS] <FILE> [SOURCE]
//! bellman-queens [OPTIONS] <SUBCOMMAND>
//! ```
//!
//! ### Subcommands
//!
//! 1.  **`paths`**: shortest paths over a graph file (or every `.txt`/`.graph` file in a
//!     directory). Each line of the file is `<source> <target> <weight>`.
//!     ```sh
//!     bellman-queens paths graph.txt A
//!     ```
//!
//! 2.  **`queens`**: enumerate all N-Queens placements. Asks for the board size when
//!     `--size` is missing.
//!     ```sh
//!     bellman-queens queens --size 8 --clauses no --verify
//!     bellman-queens queens -n 6 --export-dimacs six.cnf
//!     ```
//!
//! 3.  **`completions`**: print a shell completion script.
//!
//! ### Common Options
//!
//! -   `-v, --verbose`: more logging on stderr (repeatable). `RUST_LOG` takes precedence.
//! -   `-s, --stats`: print problem and search statistics.
//!
//! Fatal errors (unreadable or empty graph, unknown source vertex, SAT backend failure)
//! are reported on stderr with a non-zero exit status.

use crate::command_line::cli::{Cli, Commands, solve_paths, solve_queens};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

mod command_line;

/// Global allocator using `tikv-jemallocator`, which also backs the memory statistics.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);

    match cli.command {
        Some(Commands::Paths { path, source }) => solve_paths(&path, source.as_deref(), &cli.common),
        Some(Commands::Queens {
            size,
            clauses,
            export_dimacs,
            verify,
        }) => solve_queens(size, clauses, export_dimacs.as_deref(), verify, &cli.common),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => match cli.path {
            Some(path) => solve_paths(&path, cli.source.as_deref(), &cli.common),
            None => {
                Cli::command().print_help()?;
                anyhow::bail!("no graph file or command provided");
            }
        },
    }
}
