use super::*;

mod staff;
mod update;
