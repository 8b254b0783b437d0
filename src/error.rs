//! Error type for overlay construction and redraw.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum ControlsError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl ControlsError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "E_INVALID_CONFIG",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
        }
    }
}
