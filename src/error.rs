// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Component errors (selection, backend) live next to their components and
//! convert into [`Error`] when they cross the crate boundary.

use crate::application::port::BackendError;
use crate::domain::selection::SelectionError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Selection Error: {0}")]
    Selection(#[from] SelectionError),
    #[error("Backend Error: {0}")]
    Backend(#[from] BackendError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn selection_error_converts() {
        let err: Error = SelectionError::IndexOutOfRange { index: 4, len: 2 }.into();
        assert!(matches!(err, Error::Selection(_)));
        assert!(err.to_string().contains("index 4"));
    }

    #[test]
    fn backend_error_converts() {
        fn connect() -> Result<()> {
            Err(BackendError::Network("connection refused".into()))?;
            Ok(())
        }

        let err = connect().expect_err("backend failure propagates");
        assert!(matches!(
            err,
            Error::Backend(BackendError::Network(ref msg)) if msg == "connection refused"
        ));
        assert_eq!(
            err.to_string(),
            "Backend Error: network error: connection refused"
        );
    }
}
