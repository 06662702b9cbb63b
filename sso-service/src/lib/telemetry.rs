use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::DeploymentEnv;

/// Install the global tracing subscriber for a deployment environment.
///
/// `local` logs human-readable text at debug, `dev` logs JSON at debug and
/// `prod` logs JSON at info. `RUST_LOG` takes precedence over the default
/// filter when set.
pub fn init(env: DeploymentEnv) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(env).into());

    let registry = tracing_subscriber::registry().with(filter);

    match env {
        DeploymentEnv::Local => registry.with(tracing_subscriber::fmt::layer()).init(),
        DeploymentEnv::Dev | DeploymentEnv::Prod => registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init(),
    }
}

fn default_filter(env: DeploymentEnv) -> &'static str {
    match env {
        DeploymentEnv::Local | DeploymentEnv::Dev => "sso_service=debug,auth=debug,tower=info",
        DeploymentEnv::Prod => "sso_service=info,auth=info,tower=warn",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prod_is_quieter_than_local() {
        assert!(default_filter(DeploymentEnv::Prod).contains("sso_service=info"));
        assert!(default_filter(DeploymentEnv::Local).contains("sso_service=debug"));
        assert_eq!(
            default_filter(DeploymentEnv::Dev),
            default_filter(DeploymentEnv::Local)
        );
    }
}
