use std::io;
use std::path::PathBuf;

/// Failures of the command-line front end. Parsing itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading names from standard input failed.
    #[error("cannot read stdin: {0}")]
    Stdin(#[source] io::Error),

    /// Writing results to standard output failed.
    #[error("cannot write stdout: {0}")]
    Stdout(#[source] io::Error),

    /// The batch root does not exist or is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
