//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use chrono::NaiveTime;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a time of day from hour and minute for factory arguments.
///
/// Falls back to midnight for out-of-range components.
pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Creates a salon with one staff member and one 30 minute service.
///
/// The salon uses the factory default hours of 09:00 to 18:00 and no explicit
/// timezone. Use the individual factories if you need to customize specific
/// entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((salon, staff, service))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_salon_with_service(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::salon::Model,
        entity::salon_user::Model,
        entity::service::Model,
    ),
    DbErr,
> {
    let salon = crate::factory::salon::create_salon(db).await?;
    let staff = crate::factory::salon_user::create_salon_user(db, salon.id).await?;
    let service = crate::factory::service::create_service(db, staff.id).await?;

    Ok((salon, staff, service))
}

/// Creates everything an appointment booking needs.
///
/// Creates a salon with one staff member, a 30 minute service and a customer.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((salon, service, customer))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::salon::Model,
        entity::service::Model,
        entity::customer::Model,
    ),
    DbErr,
> {
    let (salon, _, service) = create_salon_with_service(db).await?;
    let customer = crate::factory::customer::create_customer(db).await?;

    Ok((salon, service, customer))
}
