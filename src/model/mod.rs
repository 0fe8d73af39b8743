//! Wire-level DTOs shared by every endpoint.
//!
//! Field names are serialized in camelCase and every response is wrapped in the
//! `ApiResponse` envelope.

pub mod api;
pub mod appointment;
pub mod customer;
pub mod leave;
pub mod pagination;
pub mod salon;
pub mod service;
pub mod slot;
pub mod staff;
