//! main.rs
//! Reads a batch of graphs, runs Prim and Kruskal on each and writes the comparison
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use citymst::{debug, io, report};

const DEFAULT_INPUT_FILE: &str = "data/input.json";
const DEFAULT_OUTPUT_FILE: &str = "data/output.json";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph batch to analyze
    #[arg(default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Where the results document is written
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Analyze graphs on the rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Skip the per-graph summary on stdout
    #[arg(short, long)]
    quiet: bool,

    /// Debug-level logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> citymst::Result<()> {
    let graphs = io::read_graphs(&args.input)?;
    if !args.quiet {
        println!("{}", "=".repeat(80));
        println!("City Transportation Network Optimization - MST Analysis");
        println!("{}", "=".repeat(80));
        println!(
            "\nLoaded {} graph(s) from '{}'\n",
            graphs.len(),
            args.input.display()
        );
    }

    let reports = report::analyze_all(&graphs, args.parallel);
    if !args.quiet {
        for graph_report in &reports {
            println!("{}", report::render_summary(graph_report));
        }
    }

    io::write_results(&args.output, &reports)?;
    if !args.quiet {
        println!("{}", "=".repeat(80));
        println!("Results written to '{}'", args.output.display());
        println!("{}", "=".repeat(80));
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(err, error = %err, "analysis aborted");
            eprintln!("Error: {err}");
            eprintln!("\nUsage: citymst [input_file] [output_file]");
            eprintln!("  Default input:  {DEFAULT_INPUT_FILE}");
            eprintln!("  Default output: {DEFAULT_OUTPUT_FILE}");
            ExitCode::FAILURE
        }
    }
}
