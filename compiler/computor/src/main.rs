use std::io::{self, BufRead, Write};

use clap::Parser;
use computor::{solve_equation, Error};
use computor_parser::{normalize, render_snippet, Diagnostic, ParserConfig};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "computor",
    version,
    about = "Reduce and solve polynomial equations of degree 2 or lower",
    long_about = "computor reads an equation made of terms 'a * X^p', prints its reduced form\n\
        and polynomial degree, then solves it when the degree is at most 2.\n\n\
        Set COMPUTOR_STRICT=0 to disable strict checks by default.\n\n\
        EXAMPLES:\n\
        \n  computor \"5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0\"\n\
        \n  computor --json \"1 * X^0 + 2 * X^1 + 5 * X^2 = 0\"\n\
        \n  echo '6 * X^0 = 6 * X^0' | computor"
)]
struct Cli {
    /// Equation to solve (read from stdin if not provided)
    #[arg(value_name = "EQUATION", allow_hyphen_values = true)]
    equation: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Disable strict checks
    #[arg(long)]
    lenient: bool,

    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG wins over -v when set
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

/// Strict mode is on unless `COMPUTOR_STRICT` turns it off or `--lenient` is given.
fn parser_config(env_strict: Option<&str>, lenient: bool) -> ParserConfig {
    let strict = !matches!(env_strict.map(str::trim), Some("0" | "false" | "off"));
    ParserConfig {
        strict: strict && !lenient,
    }
}

fn read_equation_from_stdin(mode: OutputMode) -> Result<String, String> {
    if mode == OutputMode::Text {
        print!("Enter equation: ");
        io::stdout()
            .flush()
            .map_err(|e| format!("failed to write prompt: {e}"))?;
    }

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| format!("failed to read from stdin: {e}"))?;

    let equation = line.trim();
    if equation.is_empty() {
        return Err("No equation provided".to_string());
    }
    Ok(equation.to_string())
}

fn run(equation: &str, config: ParserConfig, mode: OutputMode, verbose: u8) -> i32 {
    debug!("solving '{equation}' with {config:?}");

    match solve_equation(equation, config) {
        Ok(report) => match mode {
            OutputMode::Text => {
                println!("{report}");
                0
            }
            OutputMode::Json => match serde_json::to_string_pretty(&report) {
                Ok(json) => {
                    println!("{json}");
                    0
                }
                Err(e) => {
                    eprintln!("Error: failed to serialize JSON: {e}");
                    1
                }
            },
        },
        Err(err) => {
            eprintln!("Error: {err}");
            if let Error::Parse(parse_err) = &err {
                if verbose > 0 && parse_err.column().is_some() {
                    eprint!(
                        "{}",
                        render_snippet(&Diagnostic::from(parse_err), &normalize(equation))
                    );
                }
            }
            1
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let env_strict = std::env::var("COMPUTOR_STRICT").ok();
    let config = parser_config(env_strict.as_deref(), cli.lenient);
    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    let equation = match cli.equation {
        Some(equation) => equation,
        None => match read_equation_from_stdin(mode) {
            Ok(equation) => equation,
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        },
    };

    run(&equation, config, mode, cli.verbose)
}

fn main() {
    std::process::exit(run_cli());
}
