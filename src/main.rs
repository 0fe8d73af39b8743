mod model;
mod server;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config, error::AppError, router, scheduler::appointment_completion, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salonbook=debug,tower_http=debug,sea_orm=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, config.default_timezone);

    tracing::info!("Starting server");

    // Start appointment completion sweep
    let scheduler_state = state.clone();
    let sweep_cron = config.completion_sweep_cron.clone();
    tokio::spawn(async move {
        if let Err(e) = appointment_completion::start_scheduler(scheduler_state, &sweep_cron).await
        {
            tracing::error!("Appointment completion scheduler error: {}", e);
        }
    });

    let app = router::router().with_state(state);

    let listener = TcpListener::bind(config.bind_addr.as_str()).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
