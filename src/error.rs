use std::fmt;

/// Central error types for the SPM photo browser
#[derive(Debug)]
pub enum AppError {
    /// Transport error (reqwest)
    Network(reqwest::Error),
    /// Response body could not be decoded
    Json(serde_json::Error),
    /// API answered with a non-success status
    Server { status: u16, message: String },
    /// Validation error (e.g. invalid inputs)
    Validation(String),
    /// Invalid or unreadable configuration
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "Network error: {}", e),
            AppError::Json(e) => write!(f, "JSON error: {}", e),
            AppError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

// Conversions from other error types
impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

/// User-friendly error messages for UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => {
                "Could not reach the photo server. Please try again.".to_string()
            }
            AppError::Json(_) => "The photo server sent an unexpected response.".to_string(),
            AppError::Server { status: 401, .. } | AppError::Server { status: 403, .. } => {
                "You are not authorized to do this.".to_string()
            }
            AppError::Server { message, .. } => message.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Config(msg) => format!("Invalid configuration: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_auth_details() {
        let err = AppError::Server {
            status: 403,
            message: "Forbidden by policy 7".to_string(),
        };
        assert_eq!(err.user_message(), "You are not authorized to do this.");
        assert_eq!(err.to_string(), "Server error (403): Forbidden by policy 7");
    }

    #[test]
    fn test_json_conversion() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: AppError = parse.into();
        assert!(matches!(err, AppError::Json(_)));
    }
}
