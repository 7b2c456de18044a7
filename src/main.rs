use std::fs;

use clap::Parser;
use lisper::{
    error::EvalError,
    eval,
    interpreter::parser::core::{DEFAULT_MAX_DEPTH, ParserConfig},
    parse_with,
};

/// lisper evaluates a single Lisp-style expression built from integer,
/// comparison, boolean and string primitives.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lisper to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed expression without evaluating it.
    #[arg(short, long)]
    parse_only: bool,

    /// Maximum nesting of lists and quotes accepted by the parser.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    contents: String,
}

/// Installs a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();

    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let config = ParserConfig { max_depth: args.max_depth };

    let outcome = parse_with(&source, &config).map_err(EvalError::from)
                                              .and_then(|value| {
                                                  if args.parse_only {
                                                      Ok(value)
                                                  } else {
                                                      eval(&value)
                                                  }
                                              });

    match outcome {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
