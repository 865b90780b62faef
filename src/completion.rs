// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::commands::COMMANDS;

/// Completes command names in the first word of the line.
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn candidates(&self, prefix: &str) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = COMMANDS
            .iter()
            .copied()
            .filter(|name| name.starts_with(prefix))
            .collect();
        names.sort_unstable();
        names
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;
    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let prefix = &line[..pos];
        let start = prefix.len() - prefix.trim_start().len();
        let word = &prefix[start..];
        // Arguments are numbers or search terms; nothing to offer there.
        if word.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let completions = self
            .candidates(word)
            .into_iter()
            .map(|name| Pair {
                display: name.to_string(),
                replacement: format!("{} ", name),
            })
            .collect();
        Ok((start, completions))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rustyline::history::DefaultHistory;

    #[test]
    fn candidates_filter_by_prefix() {
        let completer = CommandCompleter::new();
        assert_eq!(completer.candidates("a"), vec!["add", "area"]);
        assert_eq!(completer.candidates("s"), vec!["search", "sub"]);
        assert!(completer.candidates("x").is_empty());
        assert_eq!(completer.candidates("").len(), COMMANDS.len());
    }

    #[test]
    fn completes_only_the_first_word() {
        let completer = CommandCompleter::new();
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        let (start, pairs) = completer.complete("  cl", 4, &ctx).unwrap();
        assert_eq!(start, 2);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].replacement, "clear ");

        let (_, pairs) = completer.complete("add 1", 5, &ctx).unwrap();
        assert!(pairs.is_empty());
    }
}
