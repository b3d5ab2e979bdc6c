use thiserror::Error;

/// Result type alias for Aktara operations
pub type Result<T> = std::result::Result<T, AktaraError>;

/// Errors that can occur during Aktara operations
#[derive(Error, Debug)]
pub enum AktaraError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog API error with HTTP status
    #[error("Catalog API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Failed to write config file: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Product not found in the catalog
    #[error("Product not found: {0}")]
    ProductNotFound(u64),

    /// A form submission was refused (bad credentials, missing fields)
    #[error("{0}")]
    Rejected(String),

    /// Local storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Environment variable error
    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),
}

impl AktaraError {
    /// Create an API error from HTTP status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 2,
            Self::Config(_) | Self::Toml(_) | Self::TomlSerialize(_) => 3,
            Self::Api { .. } | Self::Http(_) | Self::Json(_) => 4,
            Self::ProductNotFound(_) => 5,
            Self::Rejected(_) | Self::Storage(_) | Self::Io(_) | Self::Env(_) => 1,
        }
    }
}
