use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Mints access tokens bound to one client application.
///
/// Every application signs with its own secret, so a leaked secret only
/// exposes the tokens of that application. The validity window is fixed
/// for the lifetime of the issuer.
#[derive(Debug, Clone, Copy)]
pub struct TokenIssuer {
    ttl: Duration,
}

impl TokenIssuer {
    /// Create a new issuer.
    ///
    /// # Arguments
    /// * `ttl` - Validity window of every minted token
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// Sign a token for `uid` scoped to `app_id`.
    ///
    /// # Arguments
    /// * `uid` - User identifier
    /// * `email` - User email
    /// * `app_id` - Application identifier
    /// * `secret` - The application's signing secret
    ///
    /// # Returns
    /// Signed JWT string with `exp` set to now + ttl
    ///
    /// # Errors
    /// * `MissingSecret` - The application has no signing secret
    /// * `ExpiryOutOfRange` - The ttl overflows the token expiry
    /// * `EncodingFailed` - Token generation failed
    pub fn mint(
        &self,
        uid: i64,
        email: &str,
        app_id: i32,
        secret: &[u8],
    ) -> Result<String, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }

        let claims = Claims::new(uid, email, app_id, self.ttl)?;
        JwtHandler::new(secret).encode(&claims)
    }

    /// Decode a token with the secret of the application it claims to be for.
    ///
    /// Not used by the issuing flow itself; downstream services holding the
    /// application secret use it to check tokens.
    ///
    /// # Errors
    /// * `MissingSecret` - Empty secret
    /// * `TokenExpired` - Token has expired
    /// * `DecodingFailed` - Signature is invalid or token is malformed
    pub fn verify(token: &str, secret: &[u8]) -> Result<Claims, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }

        JwtHandler::new(secret).decode(token)
    }
}
