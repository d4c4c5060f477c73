use std::{fs, process};

use clap::Parser;
use log::{debug, info};
use scical::{
    EvalOptions, Evaluator, Grammar,
    interpreter::options::DEFAULT_MAX_DEPTH,
    session::{
        core::{Session, format_value},
        dispatcher::{DEFAULT_WORKERS, Dispatcher},
        keypad::Key,
    },
};

/// scical evaluates calculator expressions such as `sqrt(9+16)` or `sin30`.
/// Trigonometric functions work in degrees.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as a file with one expression per line.
    #[arg(short, long, conflicts_with = "keys")]
    file: bool,

    /// Treat the contents as space-separated key labels, e.g. "9 + 1 =".
    #[arg(short, long)]
    keys: bool,

    /// Accept postfix `!` and `%` and absolute value bars `|x|`.
    #[arg(short = 'x', long)]
    extended: bool,

    /// Deepest nesting of signs, groups and functions accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    contents: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let grammar = if args.extended { Grammar::Extended } else { Grammar::Reference };
    let evaluator = Evaluator::new(EvalOptions::default().with_grammar(grammar)
                                                         .with_max_depth(args.max_depth));
    debug!("using {:?}", evaluator.options());

    let succeeded = if args.keys {
        run_keys(&args.contents, evaluator)
    } else if args.file {
        let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        });
        run_lines(&script, evaluator)
    } else {
        run_expression(&args.contents, evaluator)
    };

    if !succeeded {
        process::exit(1);
    }
}

/// Evaluates `source` as one expression and prints the answer.
///
/// Returns `false` if evaluation failed.
fn run_expression(source: &str, evaluator: Evaluator) -> bool {
    match evaluator.evaluate(source) {
        Ok(value) => {
            println!("{}", format_value(value));
            true
        },
        Err(e) => {
            eprintln!("Error: {e}");
            false
        },
    }
}

/// Evaluates every non-blank line and prints one answer per line.
///
/// Returns `false` if any line failed.
fn run_lines(source: &str, evaluator: Evaluator) -> bool {
    let mut succeeded = true;

    for line in source.lines().filter(|l| !l.trim().is_empty()) {
        match evaluator.evaluate(line) {
            Ok(value) => println!("{}", format_value(value)),
            Err(e) => {
                eprintln!("Error: {e}");
                succeeded = false;
            },
        }
    }
    succeeded
}

/// Feeds key labels to a session backed by a worker pool and prints the
/// final display.
///
/// Returns `false` if the display ends up showing an error.
fn run_keys(labels: &str, evaluator: Evaluator) -> bool {
    let dispatcher = match Dispatcher::new(DEFAULT_WORKERS, evaluator) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            eprintln!("Error: failed to start evaluation workers: {e}");
            return false;
        },
    };
    let mut session = Session::new(&dispatcher);

    for label in labels.split(' ').filter(|l| !l.is_empty()) {
        // A submit disables input; wait for the answer before the next key.
        session.wait();
        if !session.press(Key::from_label(label)) {
            info!("key {label:?} ignored");
        }
    }
    session.wait();

    let display = session.display();
    if display.starts_with("Error: ") {
        eprintln!("{display}");
        return false;
    }
    println!("{display}");
    true
}
