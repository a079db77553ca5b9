//! REPL implementation
//!
//! This module implements the interactive session: read one line, hand it
//! to the interpreter, append the response to the log and print it.

use crate::cli::commands::completion_words;
use crate::cli::interpreter::Interpreter;
use crate::cli::render::{apply_response, show, TerminalLog};
use crate::error::{Result, TerminalError};
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::MemHistory;
use rustyline::validate::Validator;
use rustyline::Context;
use rustyline::Helper;
use rustyline::{CompletionType, Config, Editor};
use std::io;
use tracing::debug;

/// Prompt shown before each input
const PROMPT: &str = "$ ";

/// Completion candidates for the text left of the cursor
fn complete_words(typed: &str) -> Vec<String> {
    let typed = typed.to_lowercase();
    completion_words()
        .into_iter()
        .filter(|word| word.starts_with(&typed))
        .map(|s| s.to_string())
        .collect()
}

/// Command completer
struct TerminalCompleter;

impl Completer for TerminalCompleter {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> std::result::Result<(usize, Vec<String>), ReadlineError> {
        Ok((0, complete_words(&line[..pos])))
    }
}

impl Hinter for TerminalCompleter {
    type Hint = String;
}

impl Highlighter for TerminalCompleter {}

impl Validator for TerminalCompleter {}

impl Helper for TerminalCompleter {}

/// Interactive terminal session
pub struct Repl {
    /// The rustyline editor
    editor: Editor<TerminalCompleter, MemHistory>,
    /// Whether the REPL should continue running
    running: bool,
    /// Interpreter fed by the editor
    interpreter: Interpreter,
    /// Everything rendered since the last clear
    log: TerminalLog,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new(interpreter: Interpreter) -> Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .completion_type(CompletionType::List)
            .auto_add_history(true)
            .build();

        let mut editor =
            Editor::<TerminalCompleter, MemHistory>::with_history(config, MemHistory::new())
                .map_err(|e| {
                    TerminalError::Io(io::Error::new(
                        io::ErrorKind::Other,
                        format!("Failed to initialize editor: {}", e),
                    ))
                })?;

        editor.set_helper(Some(TerminalCompleter));

        Ok(Self {
            editor,
            running: true,
            interpreter,
            log: TerminalLog::new(),
        })
    }

    /// Run the REPL loop
    pub fn run(&mut self) -> Result<()> {
        self.print_welcome();

        while self.running {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    // The editor already shows the typed line, so it is
                    // logged but not printed again.
                    self.log.push_command(line);
                    self.submit(line)?;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    self.running = false;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    self.running = false;
                }
            }
        }

        debug!(lines = self.log.len(), "session ended");
        Ok(())
    }

    /// Process one input and print what it appended to the log
    fn submit(&mut self, input: &str) -> Result<()> {
        let response = self.interpreter.process(input);
        let update = apply_response(&mut self.log, &response);
        show(&mut io::stdout(), &update)?;
        Ok(())
    }

    /// Print welcome message
    fn print_welcome(&self) {
        println!();
        println!("levkany.com terminal v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Type \"help\" for available commands.");
        println!();
    }
}
