//! Error types shared across the crate.

/// Top-level application error
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// The window or document global is unavailable.
    DomError(String),
    /// IntersectionObserver construction failed.
    ObserverError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::DomError(message) => write!(f, "DOM error: {}", message),
            AppError::ObserverError(message) => write!(f, "Observer error: {}", message),
        }
    }
}

impl std::error::Error for AppError {}

pub type DomResult<T> = Result<T, AppError>;
pub type ObserverResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_their_context() {
        let error = AppError::DomError("window is not available".to_string());
        assert_eq!(error.to_string(), "DOM error: window is not available");

        let error = AppError::ObserverError("bad threshold".to_string());
        assert_eq!(error.to_string(), "Observer error: bad threshold");
    }
}
