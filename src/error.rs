// SPDX-License-Identifier: MPL-2.0
//! Crate error type.
//!
//! Only the startup, configuration and state layers produce errors. The
//! selection handler itself never fails: its edge cases degrade to empty or
//! unchanged page state.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The default printer asks for a label size the label-size list does not offer.
    #[error("Invalid default label size '{size}'. Please choose one of the following: {}", .known.join(" "))]
    InvalidLabelSize { size: String, known: Vec<String> },

    /// Two printers resolve to the same option value.
    #[error("Duplicate printer '{value}'. Printer ids must be unique and must not equal another printer's position")]
    DuplicatePrinter { value: String },

    #[error("Argument Error: {0}")]
    Cli(String),
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

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Cli(err.to_string())
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
    fn duplicate_printer_names_the_value() {
        let err = Error::DuplicatePrinter {
            value: "1".to_string(),
        };
        assert!(err.to_string().starts_with("Duplicate printer '1'."));
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
    fn invalid_label_size_lists_known_sizes() {
        let err = Error::InvalidLabelSize {
            size: "99".into(),
            known: vec!["62".into(), "29x90".into()],
        };
        let message = err.to_string();
        assert!(message.contains("'99'"));
        assert!(message.ends_with("62 29x90"));
    }

    #[test]
    fn cli_error_from_pico_args() {
        let err: Error = pico_args::Error::MissingArgument.into();
        assert!(matches!(err, Error::Cli(_)));
    }
}
