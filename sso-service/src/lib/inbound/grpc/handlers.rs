use tonic::Status;

use crate::domain::auth::errors::AuthError;

pub mod is_admin;
pub mod login;
pub mod register;

/// Wire mapping of service failures.
///
/// Internal failures are already logged with their detail by the service;
/// the caller only ever sees a generic message for them.
impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Status::unauthenticated("invalid email or password"),
            AuthError::UserExists => Status::already_exists("user already exists"),
            AuthError::UserNotFound(_) => Status::not_found("user not found"),
            AuthError::AppNotFound(_) => Status::not_found("app not found"),
            AuthError::Password(_) | AuthError::Token(_) | AuthError::Storage(_) => {
                Status::internal("internal error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Status::from(AuthError::InvalidCredentials).code(),
            Code::Unauthenticated
        );
        assert_eq!(Status::from(AuthError::UserExists).code(), Code::AlreadyExists);
        assert_eq!(Status::from(AuthError::UserNotFound(1)).code(), Code::NotFound);
        assert_eq!(Status::from(AuthError::AppNotFound(1)).code(), Code::NotFound);
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let status = Status::from(AuthError::Storage(
            "no such table: users at /var/lib/sso.db".to_string(),
        ));

        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), "internal error");
    }
}
