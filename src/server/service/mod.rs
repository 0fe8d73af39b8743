//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Slot computation and booking admission rules
//! - **Orchestration**: Coordinating multiple repository calls per operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Serializing overlap checks and writes per salon day

pub mod appointment;
pub mod availability;
pub mod booking_lock;
pub mod catalog;
pub mod customer;
pub mod leave;
pub mod salon;

#[cfg(test)]
mod test;
