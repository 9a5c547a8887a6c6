use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Invalid bind address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Failed to render page: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("Unknown quick action: {slug}")]
    UnknownAction { slug: String },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = Error::Config {
            message: "missing [server] table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Configuration error: missing [server] table"
        );
    }

    #[test]
    fn test_fmt_error_converts_to_render() {
        let err: Error = std::fmt::Error.into();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn test_unknown_action_message() {
        let err = Error::UnknownAction {
            slug: "launch-rockets".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown quick action: launch-rockets");
    }
}
