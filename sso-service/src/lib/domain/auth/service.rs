use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialStore;

const OP_REGISTER: &str = "auth.register";
const OP_LOGIN: &str = "auth.login";
const OP_IS_ADMIN: &str = "auth.is_admin";

/// Domain service implementation for authentication.
///
/// Holds no per-request state; every call is one independent pass over
/// the store, the hasher and the issuer. Failures are classified once and
/// returned, never retried.
pub struct AuthService<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    password_hasher: auth::PasswordHasher,
    token_issuer: auth::TokenIssuer,
}

impl<S> AuthService<S>
where
    S: CredentialStore,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - User and application persistence
    /// * `password_hasher` - Hasher carrying the configured work factor
    /// * `token_issuer` - Issuer carrying the configured token lifetime
    pub fn new(
        store: Arc<S>,
        password_hasher: auth::PasswordHasher,
        token_issuer: auth::TokenIssuer,
    ) -> Self {
        Self {
            store,
            password_hasher,
            token_issuer,
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let hasher = self.password_hasher.clone();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| auth::PasswordError::HashingFailed(e.to_string()))?
            .map_err(AuthError::from)
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, AuthError> {
        let hasher = self.password_hasher.clone();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| auth::PasswordError::VerificationFailed(e.to_string()))?
            .map_err(AuthError::from)
    }

    async fn try_register(&self, command: RegisterCommand) -> Result<UserId, AuthError> {
        let password_hash = self.hash_password(command.password).await?;

        self.store
            .save_user(&command.email, &password_hash)
            .await
            .map_err(|e| match e {
                StorageError::UserExists => AuthError::UserExists,
                other => storage_failure(other),
            })
    }

    async fn try_login(&self, command: LoginCommand) -> Result<AccessToken, AuthError> {
        let user = match self.store.get_user(&command.email).await {
            Ok(user) => user,
            Err(StorageError::UserNotFound) => {
                // Burn one hash so an unknown email costs the same as a wrong password
                let _ = self.hash_password(command.password).await;
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(storage_failure(e)),
        };

        if !self
            .verify_password(command.password, user.password_hash)
            .await?
        {
            return Err(AuthError::InvalidCredentials);
        }

        let app = self
            .store
            .get_app(command.app_id)
            .await
            .map_err(|e| match e {
                StorageError::AppNotFound => AuthError::AppNotFound(command.app_id.0),
                other => storage_failure(other),
            })?;

        let token = self
            .token_issuer
            .mint(user.id.0, &user.email, app.id.0, &app.secret)?;

        Ok(AccessToken(token))
    }
}

#[async_trait]
impl<S> AuthServicePort for AuthService<S>
where
    S: CredentialStore,
{
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError> {
        let email = command.email.clone();
        tracing::info!(op = OP_REGISTER, email = %email, "Registering user");

        let result = self.try_register(command).await;
        match &result {
            Ok(user_id) => tracing::info!(
                op = OP_REGISTER,
                email = %email,
                user_id = user_id.0,
                "User registered"
            ),
            Err(e) => log_failure(OP_REGISTER, e),
        }

        result
    }

    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError> {
        let email = command.email.clone();
        let app_id = command.app_id;
        tracing::info!(op = OP_LOGIN, email = %email, app_id = app_id.0, "Logging user in");

        let result = self.try_login(command).await;
        match &result {
            Ok(_) => tracing::info!(
                op = OP_LOGIN,
                email = %email,
                app_id = app_id.0,
                "User logged in"
            ),
            Err(e) => log_failure(OP_LOGIN, e),
        }

        result
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        tracing::info!(op = OP_IS_ADMIN, user_id = user_id.0, "Checking admin flag");

        let result = self
            .store
            .is_admin(user_id)
            .await
            .map_err(|e| match e {
                StorageError::UserNotFound => AuthError::UserNotFound(user_id.0),
                other => storage_failure(other),
            });

        match &result {
            Ok(is_admin) => tracing::info!(
                op = OP_IS_ADMIN,
                user_id = user_id.0,
                is_admin = *is_admin,
                "Checked admin flag"
            ),
            Err(e) => log_failure(OP_IS_ADMIN, e),
        }

        result
    }
}

fn storage_failure(error: StorageError) -> AuthError {
    AuthError::Storage(error.to_string())
}

fn log_failure(op: &'static str, error: &AuthError) {
    if error.is_internal() {
        tracing::error!(
            op,
            error.kind = error.kind(),
            error.detail = %error,
            "Operation failed"
        );
    } else {
        tracing::warn!(op, error.kind = error.kind(), "Operation rejected");
    }
}
