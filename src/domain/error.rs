//! Domain error types.

use std::path::PathBuf;

/// Top-level error type for inistore.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing key [{section}] {key}")]
    Missing { section: String, key: String },
}

impl From<&StoreError> for std::process::ExitCode {
    fn from(err: &StoreError) -> Self {
        let code: u8 = match err {
            StoreError::Io { .. } => 1,
            StoreError::Missing { .. } => 2,
        };
        std::process::ExitCode::from(code)
    }
}
