use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    NotFound(String),
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Text shown to an operator. HTTP failures carry the server's own message,
    /// everything else uses the prefixed description.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AppError::Http { message, .. } | AppError::NotFound(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::NotFound(message) => write!(formatter, "Not found: {message}"),
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn user_message_prefers_server_text() {
        let err = AppError::Http {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(err.to_string(), "Request failed (401): Invalid credentials");
    }

    #[test]
    fn user_message_keeps_prefix_for_local_failures() {
        let err = AppError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), "Network error: connection refused");
    }
}
