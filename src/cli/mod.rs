//! CLI module
//!
//! This module holds the command interpreter and the terminal front end
//! around it: argument parsing, the REPL and the line renderer.

pub mod args;
pub mod commands;
pub mod interpreter;
pub mod render;
pub mod repl;

// Re-exports
pub use interpreter::{Interpreter, Output, Response, ResponseKind};
pub use repl::Repl;
