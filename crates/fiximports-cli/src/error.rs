//! Error types for fiximports-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from fiximports-core
    #[error(transparent)]
    Core(#[from] fiximports_core::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_message_is_unchanged() {
        let error = CliError::from(fiximports_core::Error::NoFiles);
        assert_eq!(error.to_string(), "no files specified");
    }
}
