//! Configuration validation.
//!
//! Each section has its own check; errors are collected into a single
//! `ConfigError`.

mod helpers;


use crate::schema::TandemConfig;
use helpers::validate_range;
use tandem_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TandemConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    validate_sidebar(&mut errors, config);
    validate_session(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &TandemConfig) {
    validate_range(errors, "window.width", config.window.width, 400, 7680);
    validate_range(errors, "window.height", config.window.height, 300, 4320);
    if config.window.title.trim().is_empty() {
        errors.push("window.title must not be empty".into());
    }
}

fn validate_sidebar(errors: &mut Vec<String>, config: &TandemConfig) {
    validate_range(errors, "sidebar.width", config.sidebar.width, 48, 400);
    if config.sidebar.width >= config.window.width {
        errors.push(format!(
            "sidebar.width = {} leaves no room inside window.width = {}",
            config.sidebar.width, config.window.width
        ));
    }
}

fn validate_session(errors: &mut Vec<String>, config: &TandemConfig) {
    let url = config.session.url.as_str();
    match url.strip_prefix("https://") {
        Some(rest) if !rest.is_empty() => {}
        _ => errors.push(format!("session.url = {url:?} must be an https:// URL")),
    }
    if config.session.user_agent.trim().is_empty() {
        errors.push("session.user_agent must not be empty".into());
    }
}
