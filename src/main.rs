use std::{env, fs::read_to_string, path::Path, process::ExitCode, time::Instant};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vls::{
    format_error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    samples::{sample_program, CONCEPTS},
    semantic::analyzer::analyze,
};

const USAGE: &str = "Usage: vlsc <file.vls> [--tokens] [--ast]\n       vlsc --example <concept>";

struct Options {
    file: String,
    dump_tokens: bool,
    dump_ast: bool,
}

enum Command {
    Compile(Options),
    Example(String),
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let Some(first) = args.get(1) else {
        return Err(String::from(USAGE));
    };

    if first == "--example" {
        return match args.get(2) {
            Some(concept) if args.len() == 3 => Ok(Command::Example(concept.clone())),
            _ => Err(format!(
                "Usage: vlsc --example <concept>\nAvailable concepts: {}",
                CONCEPTS.join(", ")
            )),
        };
    }

    if Path::new(first).extension().and_then(|ext| ext.to_str()) != Some("vls") {
        return Err(String::from("Error: the file must have a .vls extension"));
    }

    let mut options = Options {
        file: first.clone(),
        dump_tokens: false,
        dump_ast: false,
    };

    for flag in &args[2..] {
        match flag.as_str() {
            "--tokens" => options.dump_tokens = true,
            "--ast" => options.dump_ast = true,
            other => return Err(format!("Unknown option `{}`\n{}", other, USAGE)),
        }
    }

    Ok(Command::Compile(options))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    match parse_args(&args) {
        Ok(Command::Example(concept)) => match sample_program(&concept) {
            Some(sample) => {
                println!("Example of {}:\n{}", concept, sample);
                ExitCode::SUCCESS
            }
            None => {
                eprintln!(
                    "Unknown concept `{}`, available concepts: {}",
                    concept,
                    CONCEPTS.join(", ")
                );
                ExitCode::from(2)
            }
        },
        Ok(Command::Compile(options)) => compile_file(&options),
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::from(2)
        }
    }
}

fn compile_file(options: &Options) -> ExitCode {
    let source = match read_to_string(&options.file) {
        Ok(source) => source,
        Err(err) => {
            error!(file = %options.file, error = %err, "failed to read source file");
            eprintln!("Error: could not read `{}`: {}", options.file, err);
            return ExitCode::from(1);
        }
    };

    let file_name = Path::new(&options.file)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| options.file.clone());

    let start = Instant::now();

    if options.dump_tokens {
        match tokenize(&source) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{}", token.debug());
                }
            }
            Err(err) => {
                eprint!("{}", format_error(&err, &file_name, &source));
                return ExitCode::from(1);
            }
        }
        info!(elapsed = ?start.elapsed(), "tokenized");
    }

    let parse_start = Instant::now();
    let program = match parse(&source) {
        Ok(program) => program,
        Err(err) => {
            eprint!("{}", format_error(&err, &file_name, &source));
            return ExitCode::from(1);
        }
    };
    info!(elapsed = ?parse_start.elapsed(), "parsed");

    if options.dump_ast {
        println!("{}", pretty_print(format!("{:?}", program.body)));
    }

    let analyze_start = Instant::now();
    if let Err(err) = analyze(&program) {
        eprint!("{}", format_error(&err, &file_name, &source));
        return ExitCode::from(1);
    }
    info!(elapsed = ?analyze_start.elapsed(), "analyzed");
    info!(total = ?start.elapsed(), "front end finished");

    println!("Compilation successful!");
    ExitCode::SUCCESS
}

/// Indents a `Debug` rendering by its brackets.
fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent: usize = 0;
    let mut ignore_next_space = false;

    for c in string.chars() {
        match c {
            '{' | '(' | '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            '}' | ')' | ']' => {
                indent = indent.saturating_sub(1);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => {
                ignore_next_space = false;
                result.push(c);
            }
        }
    }

    result
}
