use super::*;

mod count_pending_with_service;
mod update;
