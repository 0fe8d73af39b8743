use chrono::Utc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::appointment::AppointmentService, state::AppState};

/// Starts the appointment completion sweep
///
/// On every tick of `cron`, PENDING appointments whose end time has passed are
/// marked COMPLETED. A failed sweep is logged and retried on the next tick.
///
/// # Arguments
/// - `state`: Shared application state
/// - `cron`: Six-field cron expression, e.g. `"0 * * * * *"` for every minute
pub async fn start_scheduler(state: AppState, cron: &str) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            if let Err(e) = complete_elapsed_appointments(&state).await {
                tracing::error!("Error completing elapsed appointments: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Appointment completion scheduler started ({})", cron);

    Ok(())
}

async fn complete_elapsed_appointments(state: &AppState) -> Result<u64, AppError> {
    AppointmentService::new(&state.db, &state.booking_locks, state.default_timezone)
        .complete_elapsed(Utc::now())
        .await
}
