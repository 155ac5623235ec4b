//! # Error Handling
//!
//! Provides the unified `AppError` enum shared by the core library and the CLI.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// IO failure tied to the file being patched.
    /// Created explicitly so the path ends up in the message.
    #[from(ignore)]
    #[display("IO Error on {}: {source}", path.display())]
    File {
        /// The file that could not be read or written.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) | AppError::File { source: e, .. } => Some(e),
            AppError::General(_) => None,
        }
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_file_error_names_path() {
        let app_err = AppError::File {
            path: PathBuf::from("/tmp/dbusmgr.go"),
            source: Error::new(ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            app_err.to_string(),
            "IO Error on /tmp/dbusmgr.go: no such file"
        );
        assert!(app_err.source().is_some());
    }
}
