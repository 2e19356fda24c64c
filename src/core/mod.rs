// src/core/mod.rs — Cooperative fold engine and the combinators built on it

pub mod clock;
pub mod combinators;
pub mod continuation;
pub mod detach;
pub mod engine;
pub mod scheduler;
pub mod timing;
pub mod truthy;
