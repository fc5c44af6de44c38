use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed progress line {line} ({text:?}): {reason}")]
    Parse {
        line: usize,
        text: String,
        reason: String,
    },
}
