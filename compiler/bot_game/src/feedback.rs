//! Player-facing output: action messages, the board and the outcome.

use std::fmt;

use bot_eval::SharedPrintHandler;

use crate::Board;

pub struct Feedback {
    handler: SharedPrintHandler,
    show_messages: bool,
    show_board: bool,
}

impl Feedback {
    pub fn new(handler: SharedPrintHandler, show_messages: bool, show_board: bool) -> Self {
        Feedback {
            handler,
            show_messages,
            show_board,
        }
    }

    pub fn handler(&self) -> &SharedPrintHandler {
        &self.handler
    }

    /// An action or turn message, shown only when messages are on.
    pub fn message(&self, msg: impl fmt::Display) {
        if self.show_messages {
            self.handler.println(&msg.to_string());
        }
    }

    /// Shown regardless of settings.
    pub fn announce(&self, msg: impl fmt::Display) {
        self.handler.println(&msg.to_string());
    }

    pub fn board(&self, board: &Board) {
        if self.show_board {
            self.handler.println(&board.render());
        }
    }
}
