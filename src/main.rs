/*
 * Reads a definitions file of marker-wrapped C prototypes
 * (BEGIN <ret> PREFIX<name>(<args>) SECOND END) and prints
 * wrapper stubs that forward each call to a loader pointer.
*/

mod cli;
mod generator;
mod parser;

use std::fs::File;
use std::io::{self, BufReader, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::Args;
use generator::Generator;
use parser::definitions::{DefinitionError, DefinitionsReader};
use parser::markers::Markers;

fn init_tracing(verbose : u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(args : &Args) -> Result<()> {
    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open definitions file {}", args.input.display()))?;
    let reader = DefinitionsReader::new(
        BufReader::new(file),
        Markers::with_export_prefix(&args.export_prefix),
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut generator = Generator::new(args.emit, &args.call_prefix);
    let mut skipped = 0usize;

    for item in reader {
        match item {
            Ok(decl) => generator.push(&mut out, decl)?,
            Err(err @ DefinitionError::Malformed { .. }) if args.keep_going => {
                warn!("{}", err);
                skipped += 1;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to process {}", args.input.display()));
            }
        }
    }

    let written = generator.finish(&mut out)?;
    info!(written, skipped, input = %args.input.display(), "generation complete");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    run(&args)
}
