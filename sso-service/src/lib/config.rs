use std::env;
use std::path::Path;
use std::time::Duration;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Longest accepted token lifetime: one year.
pub const MAX_TOKEN_TTL_MINUTES: i64 = 365 * 24 * 60;

/// Process-wide configuration.
///
/// Built once at startup and handed to the components that need it.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub env: DeploymentEnv,
    pub storage: StorageConfig,
    pub grpc: GrpcConfig,
    pub token: TokenConfig,
    pub hashing: HashingConfig,
}

/// Deployment flavour, selects the log format and level.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentEnv {
    Local,
    Dev,
    Prod,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// SQLite database file, created if missing
    pub path: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GrpcConfig {
    pub port: u16,
    pub timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenConfig {
    pub ttl_minutes: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HashingConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl GrpcConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl TokenConfig {
    /// Token lifetime, bounded to `1..=MAX_TOKEN_TTL_MINUTES` minutes.
    pub fn ttl(&self) -> Result<chrono::Duration, ConfigError> {
        if self.ttl_minutes <= 0 || self.ttl_minutes > MAX_TOKEN_TTL_MINUTES {
            return Err(ConfigError::Message(format!(
                "token.ttl_minutes must be between 1 and {}",
                MAX_TOKEN_TTL_MINUTES
            )));
        }

        chrono::Duration::try_minutes(self.ttl_minutes).ok_or_else(|| {
            ConfigError::Message("token.ttl_minutes is out of range".to_string())
        })
    }
}

impl From<&HashingConfig> for auth::HashingCost {
    fn from(config: &HashingConfig) -> Self {
        Self {
            memory_kib: config.memory_kib,
            iterations: config.iterations,
            parallelism: config.parallelism,
        }
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SSO__STORAGE__PATH, SSO__GRPC__PORT, etc.)
    /// 2. File named by CONFIG_PATH, if set
    /// 3. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 4. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        let explicit = env::var("CONFIG_PATH").ok();

        Self::load_from(&run_mode, explicit.as_deref().map(Path::new))
    }

    /// Load configuration for a given run mode and optional explicit file.
    ///
    /// The explicit file must exist when given.
    pub fn load_from(run_mode: &str, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        let configuration = builder
            // Example: SSO__TOKEN__TTL_MINUTES=15 overrides token.ttl_minutes
            .add_source(
                Environment::with_prefix("SSO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        config.token.ttl()?;

        Ok(config)
    }
}
