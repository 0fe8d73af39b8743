use super::*;

mod complete_elapsed;
mod concurrency;
mod create;
mod update;
