//! services/cli/src/adapters/terminal.rs
//!
//! This module contains the terminal adapter, which implements the `Terminal`
//! port from the `core` crate. Frames are painted with the `console` crate;
//! commands are read line by line from stdin, so piped input works too.

use std::io::{self, BufRead, BufReader};
use std::sync::Mutex;

use arxiv_news_core::ports::{PortError, PortResult, Terminal};
use arxiv_news_core::render::{Frame, Line, LineKind};
use console::{style, StyledObject, Term};

/// Paints frames on stdout and reads commands from a line-oriented input.
pub struct ConsoleTerminal {
    term: Term,
    input: Mutex<Box<dyn BufRead + Send>>,
}

impl ConsoleTerminal {
    /// Paints on stdout and reads commands from stdin.
    pub fn new() -> Self {
        Self::with_input(BufReader::new(io::stdin()))
    }

    /// Paints on stdout and reads commands from `input`.
    pub fn with_input(input: impl BufRead + Send + 'static) -> Self {
        Self {
            term: Term::stdout(),
            input: Mutex::new(Box::new(input)),
        }
    }
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for ConsoleTerminal {
    fn show_loading(&self, category: &str) -> PortResult<()> {
        self.term.clear_screen()?;
        self.term.write_line(&format!("Loading {}...", style(category).bold()))?;
        Ok(())
    }

    fn show(&self, frame: &Frame) -> PortResult<()> {
        self.term.clear_screen()?;

        let is_new = match frame {
            Frame::Paper(paper) => paper.is_new,
            Frame::EmptyCategory { .. } => true,
        };
        for line in frame.lines() {
            self.term.write_line(&paint(&line, is_new).to_string())?;
        }
        Ok(())
    }

    fn read_command(&self) -> PortResult<String> {
        let mut input = self
            .input
            .lock()
            .map_err(|_| PortError::Io(io::Error::other("command input lock poisoned")))?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(PortError::InputClosed);
        }
        Ok(line)
    }
}

fn paint(line: &Line, is_new: bool) -> StyledObject<&str> {
    let text = style(line.text.as_str());
    match line.kind {
        LineKind::Border => text.cyan(),
        LineKind::Header => text.cyan().bold(),
        LineKind::Flag => text.yellow().bold(),
        LineKind::Title => text.bold(),
        LineKind::Date if is_new => text.green(),
        LineKind::Date => text.yellow(),
        LineKind::Authors | LineKind::Tags | LineKind::Id => text.dim(),
        LineKind::Notice => text.italic(),
        LineKind::Abstract | LineKind::Blank => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arxiv_news_core::Command;
    use std::io::Cursor;

    #[test]
    fn reads_one_line_per_command() {
        let terminal = ConsoleTerminal::with_input(Cursor::new("q\n\nnc\n"));

        assert_eq!(terminal.read_command().unwrap(), "q\n");
        assert_eq!(terminal.read_command().unwrap(), "\n");
        assert_eq!(
            Command::parse(&terminal.read_command().unwrap()),
            Command::NextCategory
        );
    }

    #[test]
    fn end_of_input_is_an_error() {
        let terminal = ConsoleTerminal::with_input(Cursor::new("p"));

        assert_eq!(terminal.read_command().unwrap(), "p");
        assert!(matches!(terminal.read_command(), Err(PortError::InputClosed)));
        assert!(matches!(terminal.read_command(), Err(PortError::InputClosed)));
    }
}
