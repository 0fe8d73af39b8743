//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the salon booking service: HTTP
//! endpoints, booking admission and availability, data access, and the scheduled
//! completion sweep. The backend uses Axum as the web framework and SeaORM for
//! database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Booking rules, availability, and CRUD orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Util** (`util/`) - Time arithmetic, label parsing, and interval helpers
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, booking locks, default zone)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum routes and OpenAPI documentation
//! - **Scheduler** (`scheduler/`) - Cron job completing elapsed appointments
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** converts the DTO into a parameter type and calls a service
//! 3. **Service** applies business rules and orchestrates data operations
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO inside the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
