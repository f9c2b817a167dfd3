use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures on the startup and teardown paths.
///
/// Gameplay itself has no recoverable errors; game over is a state, not a
/// failure. Everything here is surfaced before raw mode is entered or while
/// talking to the terminal.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("invalid board geometry: {0}")]
    Board(String),
}
