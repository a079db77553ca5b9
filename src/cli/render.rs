//! Terminal log and line rendering
//!
//! The log is append-only: lines are only ever removed all at once, by a
//! clear. Each response is split on `\n` into one line per segment, and any
//! parenthesized text inside a line is marked dim.

use crate::cli::interpreter::{Response, ResponseKind};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{style, Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use regex::Regex;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Visual style of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Echo of what the user typed
    Command,
    /// Neutral output
    Response,
    /// Output of a performed side effect
    Success,
    /// Error output
    Error,
}

impl LineStyle {
    /// Foreground color used in the terminal
    pub fn color(&self) -> Color {
        match self {
            LineStyle::Command => Color::White,
            LineStyle::Response => Color::Reset,
            LineStyle::Success => Color::Green,
            LineStyle::Error => Color::Red,
        }
    }
}

impl From<ResponseKind> for LineStyle {
    fn from(kind: ResponseKind) -> Self {
        match kind {
            ResponseKind::Response => LineStyle::Response,
            ResponseKind::Success => LineStyle::Success,
            ResponseKind::Error => LineStyle::Error,
        }
    }
}

/// A run of text within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Text of the run
    pub text: String,
    /// Parenthesized text, drawn dim
    pub dim: bool,
}

impl Span {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            dim: false,
        }
    }

    fn dim(text: &str) -> Self {
        Self {
            text: text.to_string(),
            dim: true,
        }
    }
}

/// One visual line of the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// How the whole line is colored
    pub style: LineStyle,
    /// Runs of text, left to right
    pub spans: Vec<Span>,
}

impl LogLine {
    /// The line's text without styling
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

fn dim_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\([^)]+\)").expect("dim pattern is a valid regex"))
}

/// Split a line into plain and dim spans
///
/// An empty line becomes a single space so blank lines keep their height.
pub fn split_spans(line: &str) -> Vec<Span> {
    let line = if line.is_empty() { " " } else { line };

    let mut spans = Vec::new();
    let mut last = 0;
    for m in dim_pattern().find_iter(line) {
        if m.start() > last {
            spans.push(Span::plain(&line[last..m.start()]));
        }
        spans.push(Span::dim(m.as_str()));
        last = m.end();
    }
    if last < line.len() {
        spans.push(Span::plain(&line[last..]));
    }
    spans
}

/// Append-only log of rendered lines
#[derive(Debug, Default)]
pub struct TerminalLog {
    lines: Vec<LogLine>,
}

impl TerminalLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the echo of a submitted input
    ///
    /// Echoes are shown verbatim, without the dim rule.
    pub fn push_command(&mut self, input: &str) -> &LogLine {
        self.lines.push(LogLine {
            style: LineStyle::Command,
            spans: vec![Span::plain(input)],
        });
        &self.lines[self.lines.len() - 1]
    }

    /// Apply a response and return the lines it appended
    ///
    /// A screen-clear response empties the log and appends nothing.
    pub fn push_response(&mut self, response: &Response) -> &[LogLine] {
        let Some(text) = response.text() else {
            self.clear();
            return &[];
        };

        let start = self.lines.len();
        let style = LineStyle::from(response.kind);
        for line in text.split('\n') {
            self.lines.push(LogLine {
                style,
                spans: split_spans(line),
            });
        }
        &self.lines[start..]
    }

    /// Remove every line
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// All lines, oldest first
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// What the screen has to do after a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenUpdate {
    /// Wipe the screen and move to the top
    Clear,
    /// Print these already-styled lines
    Print(Vec<String>),
}

/// Apply a response to the log and work out the matching screen update
pub fn apply_response(log: &mut TerminalLog, response: &Response) -> ScreenUpdate {
    if response.is_clear() {
        log.clear();
        return ScreenUpdate::Clear;
    }

    ScreenUpdate::Print(log.push_response(response).iter().map(styled).collect())
}

/// Carry out a screen update on `out`
pub fn show(out: &mut impl Write, update: &ScreenUpdate) -> io::Result<()> {
    match update {
        ScreenUpdate::Clear => execute!(out, Clear(ClearType::All), MoveTo(0, 0))?,
        ScreenUpdate::Print(lines) => {
            for line in lines {
                writeln!(out, "{}", line)?;
            }
        }
    }
    out.flush()
}

/// Render a line with terminal colors
pub fn styled(line: &LogLine) -> String {
    let color = line.style.color();
    line.spans
        .iter()
        .map(|span| {
            let content = style(span.text.as_str()).with(color);
            let content = if span.dim { content.dim() } else { content };
            content.to_string()
        })
        .collect()
}
