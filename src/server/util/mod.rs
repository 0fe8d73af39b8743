//! Shared helpers for civil-time arithmetic and request value parsing.

pub mod interval;
pub mod parse;
pub mod time;
