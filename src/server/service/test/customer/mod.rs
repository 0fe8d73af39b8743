use super::*;

mod update;
