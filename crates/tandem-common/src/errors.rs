use std::path::PathBuf;

use crate::id::SessionId;

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
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to create view for session {id}: {reason}")]
    ViewCreation { id: SessionId, reason: String },

    #[error("view operation failed for session {id}: {reason}")]
    ViewOperation { id: SessionId, reason: String },

    #[error("failed to write session state to {path}: {reason}")]
    Persist { path: PathBuf, reason: String },

    #[error("no session id left to allocate")]
    IdsExhausted,
}

#[derive(Debug, thiserror::Error)]
pub enum TandemError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
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

        let err = ConfigError::ValidationError("sidebar.width = 5 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: sidebar.width = 5 is out of range"
        );
    }

    #[test]
    fn session_error_display_names_the_session() {
        let id = SessionId::new(3).unwrap();
        let err = SessionError::ViewCreation {
            id,
            reason: "no display".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to create view for session 3: no display"
        );

        let err = SessionError::Persist {
            path: PathBuf::from("/tmp/sessions.json"),
            reason: "read-only".into(),
        };
        assert!(err.to_string().contains("/tmp/sessions.json"));

        assert_eq!(
            SessionError::IdsExhausted.to_string(),
            "no session id left to allocate"
        );
    }

    #[test]
    fn tandem_error_from_session() {
        let err: TandemError = SessionError::ViewOperation {
            id: SessionId::new(1).unwrap(),
            reason: "gone".into(),
        }
        .into();
        assert!(matches!(err, TandemError::Session(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn tandem_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TandemError = io_err.into();
        assert!(matches!(err, TandemError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn tandem_error_other_variants() {
        let err = TandemError::WebView("js error".into());
        assert_eq!(err.to_string(), "webview error: js error");

        let err = TandemError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
