// commands.rs

use std::io::Write;

use anyhow::{Context, Result};
use itertools::Itertools;
use tracing::debug;

use crate::calculator::Calculator;
use crate::util::write_line;

/// Command names offered for completion, in help order.
pub const COMMANDS: &[&str] = &[
    "add", "sub", "mul", "div", "area", "history", "search", "clear", "help", "exit", "quit",
];

const USAGE: &[(&str, &str)] = &[
    ("add <a> <b>", "a + b"),
    ("sub <a> <b>", "a - b"),
    ("mul <a> <b>", "a * b"),
    ("div <a> <b>", "a / b"),
    ("area <r>", "area of a circle with radius r"),
    ("history [n]", "show the last n records, or all of them"),
    ("search <term>", "show records containing term"),
    ("clear", "forget all records"),
    ("help", "show this table"),
    ("exit [code]", "leave the calculator"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit(i32),
}

/// Runs one tokenized line against `calc`, writing whatever it prints to `out`.
///
/// Usage mistakes and rejected arguments are reported on `out` and the session
/// continues; only I/O failures come back as errors.
pub fn run_command<W: Write + ?Sized>(
    tokens: &[String],
    calc: &mut Calculator,
    out: &mut W,
) -> Result<Outcome> {
    let Some((command, args)) = tokens.split_first() else {
        return Ok(Outcome::Continue);
    };
    debug!(command = command.as_str(), ?args, "dispatching");
    let message = match dispatch(command, args, calc) {
        Ok(Reply::Exit(code)) => return Ok(Outcome::Exit(code)),
        Ok(Reply::Lines(lines)) => lines,
        Err(msg) => vec![format!("{command}: {msg}")],
    };
    for line in message {
        write_line(out, line).context("failed to write command output")?;
    }
    Ok(Outcome::Continue)
}

enum Reply {
    Lines(Vec<String>),
    Exit(i32),
}

impl Reply {
    fn value(v: f64) -> Self {
        Reply::Lines(vec![v.to_string()])
    }
}

fn dispatch(command: &str, args: &[String], calc: &mut Calculator) -> Result<Reply, String> {
    let reply = match command {
        "add" | "+" => {
            let (a, b) = two_numbers(args, "add <a> <b>")?;
            Reply::value(calc.add(a, b))
        }
        "sub" | "-" => {
            let (a, b) = two_numbers(args, "sub <a> <b>")?;
            Reply::value(calc.subtract(a, b))
        }
        "mul" | "*" => {
            let (a, b) = two_numbers(args, "mul <a> <b>")?;
            Reply::value(calc.multiply(a, b))
        }
        "div" | "/" => {
            let (a, b) = two_numbers(args, "div <a> <b>")?;
            Reply::value(calc.divide(a, b).map_err(|e| e.to_string())?)
        }
        "area" => {
            let [r] = args else {
                return Err(usage("area <r>"));
            };
            let r = number(r)?;
            Reply::value(calc.area_of_circle(r).map_err(|e| e.to_string())?)
        }
        "history" => {
            let log = calc.log();
            let shown = match args {
                [] => log.all(),
                [n] => log.tail(n.parse::<usize>().map_err(|_| format!("{n}: not a count"))?),
                _ => return Err(usage("history [n]")),
            };
            let first = log.len() - shown.len() + 1;
            Reply::Lines(
                shown
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| format!("{:>5}  {}", first + i, entry))
                    .collect(),
            )
        }
        "search" => {
            if args.is_empty() {
                return Err(usage("search <term>"));
            }
            Reply::Lines(calc.search_history(&args.iter().join(" ")))
        }
        "clear" => {
            calc.clear_history();
            Reply::Lines(Vec::new())
        }
        "help" => Reply::Lines(
            USAGE
                .iter()
                .map(|(synopsis, what)| format!("  {synopsis:<16}{what}"))
                .collect(),
        ),
        "exit" | "quit" => match args {
            [] => Reply::Exit(0),
            [code] => {
                let code = code
                    .parse::<i32>()
                    .map_err(|_| format!("{code}: numeric argument required"))?;
                Reply::Exit(code)
            }
            _ => return Err(usage("exit [code]")),
        },
        _ => return Err("command not found".to_string()),
    };
    Ok(reply)
}

fn usage(synopsis: &str) -> String {
    format!("usage: {synopsis}")
}

fn number(token: &str) -> Result<f64, String> {
    token
        .parse::<f64>()
        .map_err(|_| format!("{token}: not a number"))
}

fn two_numbers(args: &[String], synopsis: &str) -> Result<(f64, f64), String> {
    match args {
        [a, b] => Ok((number(a)?, number(b)?)),
        _ => Err(usage(synopsis)),
    }
}
