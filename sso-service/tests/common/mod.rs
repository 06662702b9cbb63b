use std::sync::Arc;

use chrono::Duration;
use sso_service::config::StorageConfig;
use sso_service::domain::auth::models::UserId;
use sso_service::domain::auth::service::AuthService;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::outbound::repositories::SqliteCredentialStore;
use tempfile::TempDir;

pub const TOKEN_TTL_MINUTES: i64 = 30;

pub const APP_ID: i32 = 1;
pub const APP_SECRET: &[u8] = b"test-app-secret-for-jwt-signing-at-least-32-bytes";

pub const OTHER_APP_ID: i32 = 2;
pub const OTHER_APP_SECRET: &[u8] = b"another-app-secret-for-jwt-signing-32-bytes!";

/// Service wired to a scratch database, with two provisioned applications
pub struct TestApp {
    pub db: TestDb,
    pub service: Arc<AuthService<SqliteCredentialStore>>,
    pub grpc: AuthGrpcService<AuthService<SqliteCredentialStore>>,
}

/// Test database helper
pub struct TestDb {
    pub store: Arc<SqliteCredentialStore>,
    // Removes the database file on drop
    _dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db = TestDb::new().await;
        db.provision_app(APP_ID, "test-app", APP_SECRET).await;
        db.provision_app(OTHER_APP_ID, "other-app", OTHER_APP_SECRET)
            .await;

        // Minimum cost keeps the suite fast
        let password_hasher = auth::PasswordHasher::with_cost(auth::HashingCost {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .expect("Failed to build password hasher");
        let token_issuer = auth::TokenIssuer::new(Duration::minutes(TOKEN_TTL_MINUTES));

        let service = Arc::new(AuthService::new(
            Arc::clone(&db.store),
            password_hasher,
            token_issuer,
        ));
        let grpc = AuthGrpcService::new(Arc::clone(&service));

        Self { db, service, grpc }
    }
}

impl TestDb {
    /// Create a migrated database in a fresh temporary directory
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_name = format!(
            "test_sso_service_{}.db",
            uuid::Uuid::new_v4().to_string().replace('-', "_")
        );

        let config = StorageConfig {
            path: dir.path().join(db_name).to_string_lossy().into_owned(),
            max_connections: 5,
        };

        let store = SqliteCredentialStore::connect(&config)
            .await
            .expect("Failed to open test database");

        store.migrate().await.expect("Failed to run migrations");

        Self {
            store: Arc::new(store),
            _dir: dir,
        }
    }

    /// Insert an application row; provisioning is not part of the service
    pub async fn provision_app(&self, id: i32, name: &str, secret: &[u8]) {
        sqlx::query("INSERT INTO apps (id, name, secret) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(secret)
            .execute(self.store.pool())
            .await
            .expect("Failed to provision app");
    }

    pub async fn grant_admin(&self, user_id: UserId) {
        sqlx::query("UPDATE users SET is_admin = TRUE WHERE id = ?")
            .bind(user_id.0)
            .execute(self.store.pool())
            .await
            .expect("Failed to grant admin");
    }

    pub async fn count_users(&self, email: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(self.store.pool())
            .await
            .expect("Failed to count users")
    }
}
