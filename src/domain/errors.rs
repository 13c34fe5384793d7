/// Errors raised at the configuration boundary. The animation core itself cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    ConfigurationError(String),
    ParseError(String),
    EnvironmentError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::ConfigurationError(msg) => write!(f, "Configuration Error: {}", msg),
            AppError::ParseError(msg) => write!(f, "Parse Error: {}", msg),
            AppError::EnvironmentError(msg) => write!(f, "Environment Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::ParseError(error.to_string())
    }
}

pub type ConfigResult<T> = Result<T, AppError>;
