//! arpsort - ARP table sorter
//!
//! Entry point for the arpsort command line tool.

use anyhow::Context;
use arp_types::MacAddress;
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use arpsort::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(name = "arpsort", version)]
#[command(about = "Sort a `show ip arp` dump by IP and export a MAC to IP map", long_about = None)]
struct Args {
    /// ARP table dump to read
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// MAC to IP JSON file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Report the IP of this MAC (any notation); may be repeated
    #[arg(short, long = "watch", value_name = "MAC")]
    watch: Vec<MacAddress>,

    /// Wireshark manuf file to use instead of the bundled OUI table
    #[arg(long, value_name = "PATH")]
    manuf: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            input: args.input,
            output: args.output,
            watch: args.watch,
            manuf: args.manuf,
        }
    }
}

/// Initializes tracing/logging subsystem
///
/// Logs go to stderr so reports on stdout stay clean. `RUST_LOG` overrides
/// the default level.
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from(args);
    let stdout = io::stdout();
    let summary = arpsort::run(&config, BufWriter::new(stdout.lock()))?;

    info!(
        unique_ips = summary.unique_ips,
        output = %config.output.display(),
        "arpsort finished"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "arpsort failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
