// main.rs

mod calculator;
mod commands;
mod completion;
mod error;
mod history;
mod parser;
mod repl;
mod util;

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::calculator::Calculator;
use crate::util::{flush, write_line};

#[derive(Parser, Debug)]
#[command(name = "calc-shell", version, about = "Calculator with a searchable history")]
struct Cli {
    /// Log every operation to stderr
    #[arg(short, long, env = "CALC_VERBOSE")]
    verbose: bool,

    /// Prompt shown before each line
    #[arg(long, env = "CALC_PROMPT", default_value = "calc> ")]
    prompt: String,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Cmd {
    /// Interactive calculator (default)
    Repl,
    /// Run the sample calculations and print the history
    Demo,
}

/// `RUST_LOG`, when set, replaces the built-in directives entirely.
fn build_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::WARN.into());
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => builder.parse_lossy(directives),
        None => {
            let level = if verbose { Level::DEBUG } else { Level::INFO };
            builder.parse_lossy(format!("calc_shell={}", level.as_str().to_lowercase()))
        }
    }
}

fn init_tracing(verbose: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let env_filter = build_filter(rust_log.as_deref(), verbose);

    // Quiet unless asked, so log lines do not interleave with prompts.
    let wanted = verbose || rust_log.is_some();
    let console = wanted.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .init();
}

fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    let mut calc = Calculator::new();
    let lines = [
        format!("5 + 3 = {}", calc.add(5.0, 3.0)),
        format!("10 - 4 = {}", calc.subtract(10.0, 4.0)),
        format!("6 * 7 = {}", calc.multiply(6.0, 7.0)),
        format!("20 / 5 = {}", calc.divide(20.0, 5.0)?),
        format!("Area of circle with radius 3 = {}", calc.area_of_circle(3.0)?),
    ];
    for line in lines {
        write_line(out, line)?;
    }
    write_line(out, "\nCalculation History:")?;
    for entry in calc.history() {
        write_line(out, entry)?;
    }
    flush(out)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Cmd::Repl) {
        Cmd::Repl => {
            let code = repl::start_repl(&cli.prompt)?;
            if code != 0 {
                std::process::exit(code);
            }
        }
        Cmd::Demo => run_demo(&mut std::io::stdout().lock()).context("demo failed")?,
    }
    Ok(())
}
