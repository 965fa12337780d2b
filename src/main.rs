use std::io;

use clap::Parser;
use shunt::{
    get_results,
    io::{read_program, write_results},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// shunt runs small programs built from assignments, `if`, `while` and
/// `return`, printing every returned value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shunt to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Only print the last returned value.
    #[arg(short, long)]
    last: bool,

    /// Log every executed assignment and return to stderr.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn install_tracing(verbose: bool) {
    let default = if verbose { "shunt=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(io::stderr)
                                     .try_init();
}

fn main() {
    let args = Args::parse();
    install_tracing(args.verbose);

    let script = if args.file {
        read_program(&args.contents).unwrap_or_else(|e| {
                                        eprintln!("{e}");
                                        std::process::exit(1);
                                    })
    } else {
        args.contents
    };
    debug!(length = script.len(), "program loaded");

    let results = match get_results(&script) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };
    info!(count = results.len(), "program finished");

    let shown = if args.last {
        results.last().map_or(&[][..], std::slice::from_ref)
    } else {
        &results[..]
    };

    if let Err(e) = write_results(&mut io::stdout().lock(), shown) {
        eprintln!("Failed to write results: {e}");
        std::process::exit(1);
    }
}
