use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("email is empty")]
    Empty,

    #[error("{0}")]
    InvalidFormat(String),
}

/// Failures reported by a credential store.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("User already exists")]
    UserExists,

    #[error("User not found")]
    UserNotFound,

    #[error("App not found")]
    AppNotFound,

    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for authentication operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately carries no detail.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists")]
    UserExists,

    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("App not found: {0}")]
    AppNotFound(i32),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::JwtError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AuthError {
    /// Stable label for the `error.kind` log attribute.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::UserExists => "user_exists",
            AuthError::UserNotFound(_) => "user_not_found",
            AuthError::AppNotFound(_) => "app_not_found",
            AuthError::Password(_) => "password_hashing",
            AuthError::Token(_) => "token_signing",
            AuthError::Storage(_) => "storage",
        }
    }

    /// Whether the failure is a fault of this service rather than of the caller.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AuthError::Password(_) | AuthError::Token(_) | AuthError::Storage(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_has_no_detail() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_internal_classification() {
        assert!(AuthError::Storage("disk I/O error".to_string()).is_internal());
        assert!(AuthError::Token(auth::JwtError::MissingSecret).is_internal());
        assert!(!AuthError::InvalidCredentials.is_internal());
        assert!(!AuthError::UserExists.is_internal());
        assert!(!AuthError::AppNotFound(3).is_internal());
    }

    #[test]
    fn test_kinds_are_distinct() {
        let kinds = [
            AuthError::InvalidCredentials.kind(),
            AuthError::UserExists.kind(),
            AuthError::UserNotFound(1).kind(),
            AuthError::AppNotFound(1).kind(),
            AuthError::Storage(String::new()).kind(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
