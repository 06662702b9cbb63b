use thiserror::Error;
use tonic::Status;

use crate::domain::auth::errors::EmailError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register<S: AuthServicePort>(
    service: &S,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    let command = request.try_into_command()?;

    let user_id = service.register(command).await?;

    Ok(RegisterResponse { user_id: user_id.0 })
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("email is required")]
    MissingEmail,

    #[error("password is required")]
    MissingPassword,

    #[error("invalid email: {0}")]
    Email(#[from] EmailError),
}

impl From<ParseRegisterRequestError> for Status {
    fn from(err: ParseRegisterRequestError) -> Self {
        Status::invalid_argument(err.to_string())
    }
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ParseRegisterRequestError> {
        if self.email.is_empty() {
            return Err(ParseRegisterRequestError::MissingEmail);
        }
        if self.password.is_empty() {
            return Err(ParseRegisterRequestError::MissingPassword);
        }

        let email = EmailAddress::new(self.email)?;
        Ok(RegisterCommand::new(email, self.password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        let command = request("alice@example.com", "secret")
            .try_into_command()
            .unwrap();

        assert_eq!(command.email.as_str(), "alice@example.com");
        assert_eq!(command.password, "secret");
    }

    #[test]
    fn test_missing_fields() {
        assert!(matches!(
            request("", "secret").try_into_command(),
            Err(ParseRegisterRequestError::MissingEmail)
        ));
        assert!(matches!(
            request("alice@example.com", "").try_into_command(),
            Err(ParseRegisterRequestError::MissingPassword)
        ));
    }

    #[test]
    fn test_malformed_email() {
        let err = request("alice", "secret").try_into_command().unwrap_err();
        let status = Status::from(err);

        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert!(status.message().starts_with("invalid email"));
    }
}
