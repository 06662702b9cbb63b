//! Credential primitives shared by authentication services.
//!
//! - Password hashing (Argon2id) with a configurable work factor
//! - JWT claims and HS256 signing
//! - Per-application token issuing
//!
//! Nothing here knows about users, applications, or storage. Services
//! feed identifiers and secrets in and get digests and tokens back.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Application Tokens
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(Duration::hours(1));
//! let secret = b"application_secret_at_least_32_bytes";
//!
//! let token = issuer.mint(42, "alice@example.com", 1, secret).unwrap();
//! let claims = TokenIssuer::verify(&token, secret).unwrap();
//! assert_eq!(claims.uid, 42);
//! assert_eq!(claims.app_id, 1);
//! ```

pub mod issuer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use issuer::TokenIssuer;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::HashingCost;
pub use password::PasswordError;
pub use password::PasswordHasher;
