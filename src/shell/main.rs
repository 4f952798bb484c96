use leave_management::shell::{app_state, config::Config, http::router};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let state = app_state(config.seed_demo_data).await?;
    let app = router(state);

    tracing::info!(addr = %config.http_addr, seeded = config.seed_demo_data, "leave service listening");
    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
