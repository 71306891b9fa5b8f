//! Feedback sink for player-facing output.
//!
//! Game messages ("Unit 3 is defending"), board renders, `prnt` output and
//! the final result all go through one handler chosen by the caller:
//! - CLI: stdout
//! - Tests: buffer for assertions
//! - Quiet runs: silent
//!
//! Uses enum dispatch instead of trait objects; the set of sinks is closed.

use std::sync::Arc;

use parking_lot::Mutex;

/// Writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }
}

/// Captures output to a buffer.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    /// Discards everything.
    Silent,
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Captured output. Empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}

/// Handler shared by the interpreter, the game and the CLI.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_captures_lines() {
        let handler = buffer_handler();
        handler.println("Turn number 1");
        handler.println("Acting unit: 2");
        assert_eq!(handler.get_output(), "Turn number 1\nActing unit: 2\n");
    }

    #[test]
    fn silent_discards_output() {
        let handler = silent_handler();
        handler.println("Player 1 has won the game");
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn clones_share_the_buffer() {
        let handler = buffer_handler();
        let game_side = Arc::clone(&handler);
        game_side.println("Player 2 eliminated");
        assert_eq!(handler.get_output(), "Player 2 eliminated\n");
    }
}
