// repl.rs

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use tracing::{debug, info};

use crate::calculator::Calculator;
use crate::commands::{run_command, Outcome};
use crate::completion::CommandCompleter;
use crate::parser::split_line;
use crate::util::flush;

/// Reads commands until `exit`, Ctrl-C or Ctrl-D. Returns the exit code.
pub fn start_repl(prompt: &str) -> Result<i32> {
    let config = Config::builder().completion_type(CompletionType::List).build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> =
        Editor::with_config(config).context("failed to create line editor")?;
    rl.set_helper(Some(CommandCompleter::new()));

    let mut calc = Calculator::new();
    let mut stdout = std::io::stdout();
    info!("calculator session started");
    let code = loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if let Err(err) = rl.add_history_entry(trimmed) {
                    debug!(%err, "line not added to editor history");
                }
                let tokens = split_line(trimmed);
                let outcome = run_command(&tokens, &mut calc, &mut stdout)?;
                flush(&mut stdout).context("failed to flush stdout")?;
                if let Outcome::Exit(code) = outcome {
                    break code;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break 0,
            Err(err) => return Err(err).context("failed to read line"),
        }
    };
    debug!(code, records = calc.log().len(), "calculator session ended");
    Ok(code)
}
