use snafu::{ResultExt, Snafu};
use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to parse default log level directive"))]
    ParseDefaultDirective {
        source: tracing_subscriber::filter::ParseError,
    },

    #[snafu(display("failed to install the global tracing subscriber"))]
    InstallSubscriber { source: TryInitError },
}

/// Initializes `tracing` logging with options from the environment variable
/// given in the `env` parameter.
///
/// We force users to provide a variable name so it can be different per tool,
/// e.g. `KUBERAY_APPLY_LOG`. If the variable is not set (or can't be parsed),
/// the maximum log level is set to INFO.
///
/// Fails if a global subscriber was already installed.
pub fn initialize_logging(env: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_env(env) {
        Ok(env_filter) => env_filter,
        _ => EnvFilter::try_new(tracing::Level::INFO.to_string())
            .context(ParseDefaultDirectiveSnafu)?,
    };

    let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);
    Registry::default()
        .with(filter)
        .with(fmt)
        .try_init()
        .context(InstallSubscriberSnafu)?;

    tracing::debug!(env, "logging initialized");
    Ok(())
}
