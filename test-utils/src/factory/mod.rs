//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly through SeaORM active
//! models, so foreign key parents must exist first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Salon open 09:00-18:00 with one staff member and a 30 minute service
//!     let (salon, staff, service) = factory::helpers::create_salon_with_service(&db).await?;
//!     let customer = factory::create_customer(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let salon = factory::salon::SalonFactory::new(&db)
//!     .hours(time(10, 0), time(0, 0))
//!     .timezone("Asia/Kolkata")
//!     .build()
//!     .await?;
//!
//! let appointment = factory::appointment::AppointmentFactory::new(&db, salon.id, customer.id)
//!     .window(start, end)
//!     .status("CANCELLED")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `salon` - Create salon entities
//! - `salon_user` - Create staff entities
//! - `service` - Create catalog services
//! - `customer` - Create customer entities
//! - `leave` - Create DAY and HOURS leave entities
//! - `appointment` - Create appointments and their service associations
//! - `helpers` - ID generation and multi-entity setups

pub mod appointment;
pub mod customer;
pub mod helpers;
pub mod leave;
pub mod salon;
pub mod salon_user;
pub mod service;

pub use appointment::create_appointment;
pub use customer::create_customer;
pub use leave::{create_day_leave, create_hours_leave};
pub use salon::create_salon;
pub use salon_user::create_salon_user;
pub use service::create_service;
