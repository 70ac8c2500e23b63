use std::io;

use thiserror::Error;

/// Library-wide error type for ghctx operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// The configuration provider failed; its message is surfaced as-is.
    #[error(transparent)]
    ConfigLookupFailed(Box<AppError>),

    /// The identity provider failed; its message is surfaced as-is.
    #[error(transparent)]
    IdentityLookupFailed(Box<AppError>),

    /// Repository identifier has an unsupported shape.
    #[error("expected the \"[HOST/]OWNER/REPO\" format, got \"{0}\"")]
    MalformedReference(String),

    /// No workflow selector and no way to prompt for one.
    #[error("workflow ID, name, or filename required when not running interactively")]
    MissingSelector,

    /// JSON supplied through both `--json` and standard input.
    #[error("JSON can only be passed on one of STDIN or --json at a time")]
    ConflictingJsonSources,

    /// JSON and pass-through input arguments supplied together.
    #[error("only one of JSON or input arguments can be passed at a time")]
    ConflictingInputSources,

    /// Standard input could not be read.
    #[error("failed to read from STDIN")]
    StdinReadFailed(#[source] io::Error),

    /// HTTP transport failure.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Non-success HTTP status from the API.
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// GraphQL-level errors in an otherwise successful response.
    #[error("GraphQL: {0}")]
    GraphQl(String),

    /// Interactive prompt failure.
    #[error("Interactive prompt error: {0}")]
    Prompt(String),

    /// Internal failure (serialization and the like).
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::StdinReadFailed(err) => err.kind(),
            AppError::ConfigLookupFailed(inner) | AppError::IdentityLookupFailed(inner) => {
                inner.kind()
            }
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::ParseError { .. }
            | AppError::MalformedReference(_)
            | AppError::MissingSelector
            | AppError::ConflictingJsonSources
            | AppError::ConflictingInputSources => io::ErrorKind::InvalidInput,
            AppError::Api { status: 401 | 403, .. } => io::ErrorKind::PermissionDenied,
            AppError::Api { status: 404, .. } => io::ErrorKind::NotFound,
            AppError::Http(_)
            | AppError::Api { .. }
            | AppError::GraphQl(_)
            | AppError::Prompt(_)
            | AppError::InternalError(_) => io::ErrorKind::Other,
        }
    }
}
