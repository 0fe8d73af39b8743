//! SeaORM entity models for the salon booking schema.

pub mod prelude;

pub mod appointment;
pub mod appointment_service;
pub mod customer;
pub mod leave;
pub mod salon;
pub mod salon_user;
pub mod service;
