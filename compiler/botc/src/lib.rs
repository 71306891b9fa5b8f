//! Bot battle command-line driver.
//!
//! `main.rs` only dispatches on the first argument; the commands live in
//! [`commands`] so they can be tested without spawning a process.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber, once.
///
/// Filters come from `BOT_LOG`, or `RUST_LOG` when that is unset. With
/// neither set nothing is installed and tracing stays off. Logs go to
/// stderr so they never mix with game output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if let Ok(directives) = std::env::var("BOT_LOG") {
            EnvFilter::new(directives)
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    });
}
