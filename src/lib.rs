// src/lib.rs — Library root for coopfold

pub mod cli;
pub mod core;
pub mod infra;
