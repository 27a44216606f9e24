use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Backend,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl QuoteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuoteError::ApiError(_) => ErrorCategory::Network,
            QuoteError::Rejected { .. } => ErrorCategory::Backend,
            QuoteError::SerializationError(_) => ErrorCategory::Data,
            QuoteError::IoError(_)
            | QuoteError::ConfigError { .. }
            | QuoteError::InvalidConfigValueError { .. }
            | QuoteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            QuoteError::ValidationError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Backend => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// True for failures of the request itself: transport, HTTP rejection
    /// or an undecodable body.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            QuoteError::ApiError(_) | QuoteError::Rejected { .. } | QuoteError::SerializationError(_)
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuoteError::ApiError(_) => "Could not reach the quote backend".to_string(),
            QuoteError::Rejected { message, .. } => format!("The backend rejected the request: {}", message),
            QuoteError::SerializationError(_) => "The backend sent an unexpected response".to_string(),
            QuoteError::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the backend is running and the base URL is correct",
            ErrorCategory::Backend => "Review the submitted values against the reference data",
            ErrorCategory::Data => "Make sure the base URL points at the quote backend",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::Input => "Fill in all required fields and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
