use super::*;

mod create;
mod delete;
