//! Error types for cvcheck

use std::fmt;
use std::path::PathBuf;

/// Main error type for cvcheck operations
///
/// The scan and match primitives never fail; the only fatal condition is a
/// page artifact that cannot be read.
#[derive(Debug)]
pub enum CheckError {
    /// A page artifact (markup or stylesheet) could not be read
    Artifact { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Artifact { path, source } => {
                write!(f, "Failed to read artifact {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Artifact { source, .. } => Some(source),
        }
    }
}

/// Convenience Result type for cvcheck operations
pub type Result<T> = std::result::Result<T, CheckError>;
