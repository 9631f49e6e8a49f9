use std::{
    fs,
    io::{self, Read},
};

use clap::{ArgAction, Parser};
use glyph::get_result;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, fmt};

/// glyph is a minimal language in which every piece of syntax is an
/// operator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells glyph to treat the contents as a path to a script file.
    #[arg(short, long)]
    file: bool,

    /// Raises the log level; repeat for more detail (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The script to run. Read from standard input when omitted.
    contents: Option<String>,
}

/// Installs the log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the verbosity count picks the level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt().with_env_filter(filter)
         .with_target(false)
         .with_writer(io::stderr)
         .init();
}

fn read_script(args: Args) -> io::Result<String> {
    match args.contents {
        Some(path) if args.file => fs::read_to_string(path),
        Some(script) => Ok(script),
        None => {
            let mut script = String::new();
            io::stdin().read_to_string(&mut script)?;
            Ok(script)
        },
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let script = read_script(args).unwrap_or_else(|e| {
                                      error!("Failed to read the input script: {e}");
                                      std::process::exit(1);
                                  });
    debug!(bytes = script.len(), "script loaded");

    if let Err(e) = get_result(&script) {
        error!("{e}");
        std::process::exit(1);
    }
}
