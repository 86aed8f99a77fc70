use std::fs;

use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env};
use pilcrow::{error::Error, evaluate, global_context, interpreter::value::core::Value, parse, tokenize};

/// pilcrow is a small imperative scripting language with closures, loops and
/// lists.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pilcrow to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Stops after the given stage and prints its output.
    #[arg(short, long, value_enum, default_value_t = Stage::Eval)]
    stage: Stage,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

/// The pipeline stage whose output is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Stage {
    /// The token stream with positions.
    Tokens,
    /// The syntax tree as a parenthesized expression.
    Ast,
    /// The value of every top-level statement.
    Eval,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    Builder::from_env(Env::default().default_filter_or(level)).init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = run(&script, args.stage) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Runs the pipeline up to `stage` and prints that stage's output.
fn run(script: &str, stage: Stage) -> Result<(), Error> {
    let tokens = tokenize(script)?;
    if stage == Stage::Tokens {
        for (token, position) in &tokens {
            println!("{position}: {token}");
        }
        return Ok(());
    }

    let program = parse(&tokens)?;
    if stage == Stage::Ast {
        println!("{program}");
        return Ok(());
    }

    match evaluate(&program, &global_context())? {
        Value::List(results) => results.iter().for_each(|value| println!("{value}")),
        other => println!("{other}"),
    }
    Ok(())
}
