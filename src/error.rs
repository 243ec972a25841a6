//! Error types for the Pokedex shell
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex shell.
///
/// None of these are fatal: the REPL reports them and reads the next line.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// First token of the line did not name a registered command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The remote API could not be reached or answered with a failure status
    #[error("Request failed: {0}")]
    Transport(String),

    /// The payload did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Writing command output failed
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for PokedexError {
    fn from(err: reqwest::Error) -> Self {
        PokedexError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for PokedexError {
    fn from(err: serde_json::Error) -> Self {
        PokedexError::Decode(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex shell.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_from_serde() {
        let err: PokedexError = serde_json::from_slice::<serde_json::Value>(b"")
            .unwrap_err()
            .into();
        assert!(matches!(err, PokedexError::Decode(_)));
        assert!(err.to_string().starts_with("Invalid response"));
    }

    #[test]
    fn test_unknown_command_message() {
        let err = PokedexError::UnknownCommand("fly".to_string());
        assert_eq!(err.to_string(), "Unknown command: fly");
    }
}
