pub(crate) mod core;
pub(crate) mod routes;
pub(crate) mod token;
pub(crate) mod types;
pub(crate) mod utils;
pub(crate) mod workers;

use config::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::core::error::ConfigError as Error;
use crate::core::{config::Args, state::AppState};
use crate::workers::sweeper::sweep_loop;

pub async fn run() -> Result<(), Error> {
    let config = Config::builder()
        .add_source(config::Environment::with_prefix("TOLLGATE"))
        .build()
        .map_err(Error::Config)?;

    let config = config.try_deserialize::<Args>().map_err(Error::Config)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_level).unwrap_or_default())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::new(&config)?;

    let registry = state.registry.clone();
    let sweep_period = std::time::Duration::from_secs(config.sweep_interval_secs);

    tokio::spawn(async move {
        sweep_loop(registry, sweep_period).await;
    });

    let app = routes::router::routes(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(Error::IO)?;

    tracing::debug!("listening on port {}", config.port);

    axum::serve(listener, app).await.map_err(Error::IO)?;

    Ok(())
}
