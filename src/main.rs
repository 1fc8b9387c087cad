use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use rpncalc::api::{self, CALCULATE_ROUTE};
use rpncalc::calculator::{self, CalcResult, evaluate_expression, format_postfix};
use rpncalc::config::Config;
use rpncalc::logging;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(name = "rpncalc")]
struct Cli {
    /// Path to a config file (defaults to the user config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one or more infix expressions.
    Eval {
        #[arg(required = true)]
        expressions: Vec<String>,
    },
    /// Evaluate a whitespace-separated postfix expression, e.g. "3 4 + 2 *".
    Rpn { input: String },
    /// Print the postfix form of an infix expression.
    Postfix { expression: String },
    /// Run a JSON request body through the calculate handler.
    Request {
        /// Request body; read from stdin when omitted.
        body: Option<String>,
        #[arg(long, default_value = "POST")]
        method: String,
    },
    /// Read expressions from stdin, one per line.
    Repl,
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when an evaluation failed but the command itself ran.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config.log_level)?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Eval { expressions } => {
            let mut all_ok = true;
            for expression in &expressions {
                all_ok &= print_result(&evaluate_expression(expression), &config);
            }
            Ok(all_ok)
        }
        Commands::Rpn { input } => match calculator::evaluate_postfix(&input) {
            Ok(value) => {
                println!("{}", calculator::format_result(value));
                Ok(true)
            }
            Err(e) => {
                eprintln!("error: {}", e);
                Ok(false)
            }
        },
        Commands::Postfix { expression } => match calculator::convert(&expression) {
            Ok(tokens) => {
                println!("{}", format_postfix(&tokens));
                Ok(true)
            }
            Err(e) => {
                eprintln!("error: {}", e);
                Ok(false)
            }
        },
        Commands::Request { body, method } => {
            let body = match body {
                Some(body) => body,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read request body from stdin")?;
                    buf
                }
            };

            info!(method = %method, route = CALCULATE_ROUTE, "handling request");
            let response = api::handle(&method, body.as_bytes(), &config.api);
            let json = response
                .to_json()
                .context("Failed to encode response body")?;
            println!("{}", response.status);
            println!("{}", json);
            Ok(response.is_success())
        }
        Commands::Repl => repl(&config),
    }
}

fn repl(config: &Config) -> Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut all_ok = true;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        all_ok &= print_result(&evaluate_expression(&line), config);
        stdout.flush().context("Failed to flush stdout")?;
    }

    Ok(all_ok)
}

fn print_result(result: &CalcResult, config: &Config) -> bool {
    match result {
        CalcResult::Success {
            display_result,
            plain_result,
            ..
        } => {
            if config.display.thousands_separators {
                println!("{}", display_result);
            } else {
                println!("{}", plain_result);
            }
            true
        }
        CalcResult::Error {
            expression,
            message,
        } => {
            debug!(expression = %expression, "evaluation failed");
            eprintln!("error: {}", message);
            false
        }
    }
}
