use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ChatdockError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("panel.padding out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: panel.padding out of range"
        );
    }

    #[test]
    fn chatdock_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ChatdockError = config_err.into();
        assert!(matches!(err, ChatdockError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn chatdock_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ChatdockError = io_err.into();
        assert!(matches!(err, ChatdockError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn chatdock_error_other_variants() {
        let err = ChatdockError::Backend("connection refused".into());
        assert_eq!(err.to_string(), "backend error: connection refused");

        let err = ChatdockError::Runtime("no reactor".into());
        assert_eq!(err.to_string(), "runtime error: no reactor");
    }
}
