//! Generic error handling utilities
//!
//! Provides unified error handling that can work across different error types
//! while maintaining domain-specific error logging patterns.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)`; otherwise it should return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a message the user can act on
    /// (bad configuration, broken addon packaging)
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<&str>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// User-actionable errors log their own message; system errors log the
/// operation context. Full details always go to debug level.
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    if error.is_user_actionable() {
        if let Some(user_msg) = error.user_message() {
            log::error!("FATAL: {}: {}", operation_context, user_msg);
        } else {
            log::error!("FATAL: {}", operation_context);
        }
    } else {
        log::error!("FATAL: {}", operation_context);
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct TestUserError {
        message: String,
    }

    impl fmt::Display for TestUserError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.message)
        }
    }

    impl std::error::Error for TestUserError {}

    impl ContextualError for TestUserError {
        fn is_user_actionable(&self) -> bool {
            true
        }

        fn user_message(&self) -> Option<&str> {
            Some(&self.message)
        }
    }

    #[derive(Debug)]
    struct TestSystemError {
        internal_details: String,
    }

    impl fmt::Display for TestSystemError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "System error: {}", self.internal_details)
        }
    }

    impl std::error::Error for TestSystemError {}

    impl ContextualError for TestSystemError {
        fn is_user_actionable(&self) -> bool {
            false
        }

        fn user_message(&self) -> Option<&str> {
            None
        }
    }

    #[test]
    fn test_user_actionable_error_shows_specific_message() {
        let error = TestUserError {
            message: "Addon directory has no src folder".to_string(),
        };

        assert!(error.is_user_actionable());
        assert_eq!(
            error.user_message(),
            Some("Addon directory has no src folder")
        );
        log_error_with_context(&error, "Addon bootstrap");
    }

    #[test]
    fn test_system_error_uses_generic_context() {
        let error = TestSystemError {
            internal_details: "Permission denied".to_string(),
        };

        assert!(!error.is_user_actionable());
        assert_eq!(error.user_message(), None);
        log_error_with_context(&error, "Listing addon directories");
    }
}
