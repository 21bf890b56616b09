#![allow(clippy::cast_precision_loss)]

use crate::command_line::prompt;
use anyhow::{Context, bail, ensure};
use bellman_queens::graph::bellman_ford::{self, ShortestPaths};
use bellman_queens::graph::loader::{self, Loaded};
use bellman_queens::graph::report;
use bellman_queens::queens::dimacs::write_dimacs;
use bellman_queens::queens::{BatsatOracle, SolutionEnumerator};
use clap::{Args, Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface of the application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(
    name = "bellman-queens",
    version,
    about = "Bellman-Ford shortest paths and N-Queens through SAT"
)]
pub(crate) struct Cli {
    /// A graph file (or a directory of them) to solve when no subcommand is given.
    pub path: Option<PathBuf>,

    /// Source vertex for the global path form. Defaults to the smallest label.
    pub source: Option<String>,

    /// Specifies the subcommand to execute (`paths`, `queens`, `completions`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Single-source shortest paths with Bellman-Ford.
    ///
    /// The file holds one edge per line: `<source> <target> <weight>`.
    Paths {
        /// Graph file, or a directory searched for `.txt` / `.graph` files.
        path: PathBuf,

        /// Source vertex label. Defaults to the lexicographically smallest label.
        source: Option<String>,
    },

    /// Enumerate every N-Queens placement with a SAT solver.
    Queens {
        /// Board size. Prompted for interactively when omitted.
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// Whether to print every clause handed to the solver afterwards.
        #[arg(long, value_enum, default_value_t = ClauseDump::Ask)]
        clauses: ClauseDump,

        /// Write the generated CNF (without blocking clauses) to this DIMACS file.
        #[arg(long)]
        export_dimacs: Option<PathBuf>,

        /// Check every decoded placement before counting it.
        #[arg(long, default_value_t = false)]
        verify: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// When to dump the clause list after a `queens` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ClauseDump {
    /// Ask on the console.
    Ask,
    /// Always print.
    Yes,
    /// Never print.
    No,
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides it.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,

    /// Print problem and search statistics after solving.
    #[arg(short, long, global = true, default_value_t = false)]
    pub(crate) stats: bool,
}

/// Solves one graph file, or every graph file under a directory.
///
/// # Errors
///
/// If a file cannot be read, holds no valid edge, or lacks the requested source.
pub(crate) fn solve_paths(
    path: &Path,
    source: Option<&str>,
    common: &CommonOptions,
) -> anyhow::Result<()> {
    if !path.is_dir() {
        return solve_graph_file(path, source, common);
    }

    for entry in walkdir::WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }
        if file_path
            .extension()
            .is_none_or(|ext| ext != "txt" && ext != "graph")
        {
            tracing::info!(path = %file_path.display(), "skipping non-graph file");
            continue;
        }

        solve_graph_file(file_path, source, common)?;
        println!();
    }

    Ok(())
}

/// Loads a graph, runs Bellman-Ford and prints the report.
///
/// # Errors
///
/// If the file cannot be loaded or the source vertex does not exist.
pub(crate) fn solve_graph_file(
    path: &Path,
    source: Option<&str>,
    common: &CommonOptions,
) -> anyhow::Result<()> {
    let time = Instant::now();
    let Loaded { graph, skipped } = loader::load_file(path)?;
    let parse_time = time.elapsed();

    let source = match source {
        Some(label) => label,
        None => graph
            .first_vertex()
            .map(|v| graph.label(v))
            .context("graph has no vertex")?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_summary(&mut out, &path.display().to_string(), &graph)?;

    let time = Instant::now();
    let paths = bellman_ford::run(&graph, source)?;
    let elapsed = time.elapsed();

    report::write_results(&mut out, &graph, &paths)?;

    if common.stats {
        print_paths_stats(
            parse_time,
            elapsed,
            graph.vertex_count(),
            graph.edge_count(),
            skipped.len(),
            &paths,
        );
    }

    Ok(())
}

/// Runs the interactive N-Queens session.
///
/// # Errors
///
/// If the console fails, the SAT backend fails, or `--verify` rejects a placement.
pub(crate) fn solve_queens(
    size: Option<usize>,
    clauses: ClauseDump,
    export_dimacs: Option<&Path>,
    verify: bool,
    common: &CommonOptions,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let n = match size {
        Some(n) => n,
        None => match prompt::read_board_size(&mut input, &mut out)? {
            Some(n) => n,
            None => bail!("no board size given"),
        },
    };

    writeln!(out, "\n=== Recherche de TOUTES les solutions pour N={n} ===")?;
    writeln!(out, "Génération des contraintes pour n={n}...")?;

    let time = Instant::now();
    let mut enumerator = SolutionEnumerator::new(n, BatsatOracle::new())?;
    let encode_time = time.elapsed();

    if let Some(dimacs_path) = export_dimacs {
        export_clauses(dimacs_path, n, &enumerator)?;
        writeln!(out, "DIMACS written to: {}", dimacs_path.display())?;
    }

    let time = Instant::now();
    let mut count = 0;
    while let Some(placement) = enumerator.next_solution()? {
        count += 1;
        if verify {
            ensure!(
                placement.is_solution(),
                "solution {count} failed verification:\n{placement}"
            );
        }
        if count == 1 {
            writeln!(out, "\n=== Échiquier {n}x{n} {}\n", "=".repeat(n))?;
            write!(out, "{placement}")?;
        }
    }
    let elapsed = time.elapsed();
    writeln!(out, "Résolution terminée.")?;

    if count == 0 {
        writeln!(out, "Aucune solution trouvée pour N={n}.")?;
    } else {
        writeln!(out, "\nNombre total de solutions trouvées pour N={n} : {count}")?;
    }

    if common.stats {
        print_queens_stats(encode_time, elapsed, &enumerator, count);
    }

    let dump = match clauses {
        ClauseDump::Yes => true,
        ClauseDump::No => false,
        ClauseDump::Ask => {
            prompt::confirm(&mut input, &mut out, "Voulez-vous afficher les contraintes ?")?
        }
    };
    if dump {
        writeln!(out, "Contraintes utilisées :")?;
        for clause in enumerator.clauses() {
            writeln!(out, "[{}]", clause.iter().join(", "))?;
        }
    }

    Ok(())
}

fn export_clauses(
    path: &Path,
    n: usize,
    enumerator: &SolutionEnumerator<BatsatOracle>,
) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Unable to write {}", path.display()))?;
    let mut writer = io::BufWriter::new(file);
    write_dimacs(
        &mut writer,
        &format!("{n}-queens"),
        enumerator.encoder().num_vars(),
        enumerator.encoded_clauses(),
    )?;
    writer.flush()?;
    Ok(())
}

/// Allocated and resident memory in MiB, as reported by jemalloc.
fn memory_usage() -> Option<(f64, f64)> {
    epoch::advance().ok()?;
    let allocated = stats::allocated::mib().ok()?.read().ok()?;
    let resident = stats::resident::mib().ok()?.read().ok()?;
    Some((
        allocated as f64 / (1024.0 * 1024.0),
        resident as f64 / (1024.0 * 1024.0),
    ))
}

/// Helper function to print a single statistic line in a formatted table row.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

fn print_memory() {
    match memory_usage() {
        Some((allocated, resident)) => {
            stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
            stat_line("Resident memory (MiB)", format!("{resident:.2}"));
        }
        None => stat_line("Memory usage (MiB)", "n/a"),
    }
}

fn print_paths_stats(
    parse_time: Duration,
    elapsed: Duration,
    vertices: usize,
    edges: usize,
    skipped: usize,
    paths: &ShortestPaths,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Vertices", vertices);
    stat_line("Edges", edges);
    stat_line("Skipped lines", skipped);

    println!("========================[ Search Statistics ]========================");
    stat_line("Relaxation passes", paths.passes());
    stat_line_with_rate("Edge relaxations", paths.passes() * edges, elapsed_secs);
    stat_line("Negative cycle", if paths.success() { "no" } else { "yes" });
    print_memory();
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}

fn print_queens_stats(
    encode_time: Duration,
    elapsed: Duration,
    enumerator: &SolutionEnumerator<BatsatOracle>,
    solutions: usize,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Encode time (s)", format!("{:.3}", encode_time.as_secs_f64()));
    stat_line("Board size", enumerator.encoder().size());
    stat_line("Variables", enumerator.encoder().num_vars());
    stat_line("Clauses (original)", enumerator.encoded_clauses().len());

    println!("========================[ Search Statistics ]========================");
    stat_line("Blocking clauses", enumerator.blocking_clauses());
    stat_line("Total clauses", enumerator.clauses().len());
    stat_line_with_rate("Solutions", solutions, elapsed_secs);
    print_memory();
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_path_form() {
        let cli = Cli::try_parse_from(["bellman-queens", "graph.txt", "B"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("graph.txt")));
        assert_eq!(cli.source.as_deref(), Some("B"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_paths_subcommand() {
        let cli = Cli::try_parse_from(["bellman-queens", "paths", "g.txt", "--stats"]).unwrap();
        match cli.command {
            Some(Commands::Paths { path, source }) => {
                assert_eq!(path, PathBuf::from("g.txt"));
                assert_eq!(source, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(cli.common.stats);
    }

    #[test]
    fn test_queens_subcommand() {
        let cli = Cli::try_parse_from([
            "bellman-queens",
            "-vv",
            "queens",
            "-n",
            "6",
            "--clauses",
            "no",
            "--verify",
        ])
        .unwrap();

        assert_eq!(cli.common.verbose, 2);
        match cli.command {
            Some(Commands::Queens {
                size,
                clauses,
                export_dimacs,
                verify,
            }) => {
                assert_eq!(size, Some(6));
                assert_eq!(clauses, ClauseDump::No);
                assert_eq!(export_dimacs, None);
                assert!(verify);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_invalid_board_size_is_rejected() {
        assert!(Cli::try_parse_from(["bellman-queens", "queens", "-n", "four"]).is_err());
    }
}
