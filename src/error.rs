//! Shell-level errors
//!
//! The simulation itself cannot fail. Everything here comes from the outside
//! world: the terminal or the settings file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("cannot read settings file {}: {}", .path.display(), .source)]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file {}: {}", .path.display(), .source)]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
