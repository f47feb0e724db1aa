use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanetError {
    #[error("Request to {url} failed: {reason}")]
    TransportError { url: String, reason: String },

    #[error("Response from {url} is not valid JSON: {reason}")]
    DecodeError { url: String, reason: String },

    #[error("Unexpected planet shape: field '{field}' must be {expected}, found {found}")]
    ShapeError {
        field: String,
        expected: String,
        found: String,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PlanetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlanetError::TransportError { .. } => ErrorCategory::Network,
            PlanetError::DecodeError { .. } | PlanetError::ShapeError { .. } => ErrorCategory::Data,
            PlanetError::ConfigValidationError { .. }
            | PlanetError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PlanetError::IoError(_) | PlanetError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// 嚴重程度決定 CLI 的退出碼
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常重試即可
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlanetError::TransportError { .. } => {
                "Check the URL and your network connection, then try again"
            }
            PlanetError::DecodeError { .. } => {
                "Make sure the URL points to a JSON API resource"
            }
            PlanetError::ShapeError { .. } => {
                "Make sure the URL points to a planet resource (e.g. /api/planets/1)"
            }
            PlanetError::ConfigValidationError { .. }
            | PlanetError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
            PlanetError::IoError(_) => "Check file paths and permissions",
            PlanetError::SerializationError(_) => "This is likely a bug, please report it",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlanetError::TransportError { url, .. } => {
                format!("Could not fetch planet from {}", url)
            }
            PlanetError::DecodeError { url, .. } => {
                format!("The response from {} was not JSON", url)
            }
            PlanetError::ShapeError { field, .. } => {
                format!("The response is not a planet record (bad '{}' field)", field)
            }
            PlanetError::ConfigValidationError { field, message } => {
                format!("Invalid configuration '{}': {}", field, message)
            }
            PlanetError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanetError>;
