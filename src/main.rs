use expense_tracker::{load_expenses, router, AppState, Config};
use expense_tracker::models::TrackerState;
use expense_tracker::reducer::with_expenses;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let expenses = load_expenses(&config.data_path).await;
    info!(
        count = expenses.len(),
        path = %config.data_path.display(),
        "loaded saved expenses"
    );
    let initial = with_expenses(&TrackerState::default(), expenses);
    let state = AppState::new(config.data_path.clone(), initial);

    let addr = config.addr();
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
