use household_money::{
    config::{Config, LogFormat},
    database::{self, pool::create_pool},
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let pool = create_pool(&config.database_url, config.database_max_connections).await?;
    database::migrate(&pool).await?;
    info!(database_url = %config.database_url, "Database ready");

    let app_state = AppState::new(pool, &config)?;
    let app = routes::router(app_state);

    let addr: SocketAddr = config.server_address.parse()?;
    info!(rate_provider = %config.rate_provider_url, "Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
