use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Create a new account.
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `UserExists` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `Storage` - Store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError>;

    /// Verify credentials and issue a token for one application.
    ///
    /// # Returns
    /// Token signed with the application's secret
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `AppNotFound` - No application with this identifier
    /// * `Password` / `Token` / `Storage` - Internal failure
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError>;

    /// Report whether an account holds administrator privileges.
    ///
    /// # Errors
    /// * `UserNotFound` - No account with this identifier
    /// * `Storage` - Store operation failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
}

/// Persistence of users and applications.
///
/// Implementations must enforce email uniqueness atomically in the
/// storage engine so that concurrent registrations stay correct.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Insert a new user with the given password digest.
    ///
    /// # Errors
    /// * `UserExists` - Email is already registered
    /// * `Database` - Database operation failed
    async fn save_user(
        &self,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<UserId, StorageError>;

    /// Fetch a user by email.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this email
    /// * `Database` - Database operation failed
    async fn get_user(&self, email: &str) -> Result<User, StorageError>;

    /// Fetch an application by identifier.
    ///
    /// # Errors
    /// * `AppNotFound` - No application with this identifier
    /// * `Database` - Database operation failed
    async fn get_app(&self, app_id: AppId) -> Result<App, StorageError>;

    /// Read the admin flag of a user.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this identifier
    /// * `Database` - Database operation failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, StorageError>;
}
