use thiserror::Error;

/// Main error type for the tailwind-config crate
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("No content sources declared")]
    NoContentSources,

    #[error("Content root does not exist: {path}")]
    MissingContentRoot { path: String },

    #[error("Color palette is missing required key: {key}")]
    MissingPaletteKey { key: String },

    #[error("Shade map '{name}' is missing its DEFAULT entry")]
    MissingDefaultShade { name: String },

    #[error("Container configuration is missing")]
    MissingContainer,

    #[error("Container padding is missing its DEFAULT entry")]
    MissingDefaultPadding,

    #[error("Configuration error: {message}")]
    Invalid { message: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
