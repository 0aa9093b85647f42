//! Driver cycles over a long-lived evaluator
//!
//! A [`Session`] runs tokenize → parse → eval cycles against one evaluator, so
//! variables assigned on one line are visible on the next. A failed cycle
//! clears the environment before the error is handed back.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::lexer::tokenize;
use crate::parser::parse;
use crate::runtime::{Evaluator, Value};

/// Text printed for the `:help` command
pub const HELP_TEXT: &str = "Interactive loop help.
\t:quit -> quit the interactive loop
\t:clear_runtime -> clear all variables assigned
\t:help -> display this help";

/// What an interactive line asked for
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Blank line
    Skip,
    /// `:quit`
    Quit,
    /// `:clear_runtime`; the environment is now empty
    Cleared,
    /// `:help`
    Help,
    /// Result of evaluating the line (`None` when it held no tokens)
    Value(Option<Value>),
}

/// Interpreter session owning one evaluator
pub struct Session {
    evaluator: Evaluator,
}

impl Session {
    /// Creates a session bound to stdout and stdin
    pub fn new() -> Self {
        Self::with_evaluator(Evaluator::new())
    }

    /// Creates a session around an existing evaluator
    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Session { evaluator }
    }

    /// Evaluator driven by this session
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Mutable evaluator driven by this session
    pub fn evaluator_mut(&mut self) -> &mut Evaluator {
        &mut self.evaluator
    }

    /// Runs one full cycle over `source`
    ///
    /// Returns `Ok(None)` when the source holds no tokens (blank or
    /// comment-only). On error the environment is cleared.
    pub fn run_source(&mut self, source: &str) -> Result<Option<Value>> {
        let result = self.cycle(source);

        if let Err(err) = &result {
            tracing::warn!(stage = ?err.stage(), error = %err, "cycle failed, clearing environment");
            self.evaluator.clear();
        }

        result
    }

    fn cycle(&mut self, source: &str) -> Result<Option<Value>> {
        let tokens = tokenize(source)?;
        if tokens.is_empty() {
            return Ok(None);
        }

        let tree = parse(tokens)?;
        self.evaluator.eval(&tree).map(Some)
    }

    /// Handles one line of interactive input
    pub fn execute_line(&mut self, line: &str) -> Result<LineOutcome> {
        let line = line.trim();

        match line {
            "" => Ok(LineOutcome::Skip),
            ":quit" => Ok(LineOutcome::Quit),
            ":clear_runtime" => {
                self.evaluator.clear();
                Ok(LineOutcome::Cleared)
            }
            ":help" => Ok(LineOutcome::Help),
            _ => self.run_source(line).map(LineOutcome::Value),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a source file, terminating every line with `\n`
///
/// Line endings are normalised, so a comment on the last line always ends.
pub fn load_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|err| Error::Io {
        message: format!("cannot open file \"{}\": {}", path.display(), err),
    })?;

    let mut source = String::with_capacity(content.len() + 1);
    for line in content.lines() {
        source.push_str(line);
        source.push('\n');
    }

    Ok(source)
}

/// Runs a whole source file in a fresh session bound to stdio
pub fn run_file(path: impl AsRef<Path>) -> Result<Option<Value>> {
    let path = path.as_ref();
    let source = load_source(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "running file");

    Session::new().run_source(&source)
}
