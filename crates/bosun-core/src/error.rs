//! Error types for Bosun command execution

use thiserror::Error;

/// Result type alias for command execution
pub type CommandResult<T> = Result<T, CommandError>;

/// Failure surface for command implementations
///
/// Anything a command returns here is caught at the dispatch boundary,
/// logged at error severity, and suppressed. It never reaches the host's
/// message-processing loop.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The argument string could not be interpreted by the command
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The command resolved its arguments but failed while acting on them
    #[error("execution failed: {0}")]
    Failed(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other error raised inside a command implementation
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CommandError {
    /// Create a new invalid-arguments error
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments(message.into())
    }

    /// Create a new execution failure
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommandError::invalid_arguments("expected a player id");
        assert_eq!(err.to_string(), "invalid arguments: expected a player id");

        let err = CommandError::failed("target offline");
        assert_eq!(err.to_string(), "execution failed: target offline");
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: CommandError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
