// src/infra/errors.rs — Error types for coopfold

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FoldError {
    /// `reduce` was given nothing to start from.
    #[error("reduce of empty sequence with no initial value")]
    EmptyWithoutSeed,
}
