//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler
//! through Axum's state extraction. Every field is cheap to clone: the database
//! connection is a pool handle and the booking locks share one `Arc`'d table.

use chrono_tz::Tz;
use sea_orm::DatabaseConnection;

use crate::server::service::booking_lock::BookingLocks;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Per salon and date locks serializing booking admission.
    ///
    /// All handlers must share this one instance; a fresh `BookingLocks` would
    /// not exclude concurrent bookings made through another.
    pub booking_locks: BookingLocks,

    /// Zone for salons without their own timezone.
    pub default_timezone: Tz,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `default_timezone` - Zone for salons without their own timezone
    ///
    /// # Returns
    /// - `AppState` - Initialized application state with an empty lock table
    pub fn new(db: DatabaseConnection, default_timezone: Tz) -> Self {
        Self {
            db,
            booking_locks: BookingLocks::new(),
            default_timezone,
        }
    }
}
