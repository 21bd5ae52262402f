//! Errors for compilation and proving.

use ark_relations::r1cs::SynthesisError;
use stealth_circuits::{RelationKind, SetupError};
use thiserror::Error;

/// Errors while compiling a relation into a constraint system.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("setup failed: {0}")]
    Setup(#[from] SetupError),
    #[error("synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("{relation}: declared {expected} public inputs, constraint system has {actual}")]
    PublicInputMismatch {
        relation: RelationKind,
        expected: usize,
        actual: usize,
    },
    #[error("{0}: constraint matrices unavailable")]
    Matrices(RelationKind),
}

/// Errors during key generation and proof generation.
#[derive(Error, Debug)]
pub enum ProverError {
    #[error("setup failed: {0}")]
    Setup(#[from] SetupError),
    #[error("synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("{0}: relation has no witness assignment")]
    MissingWitness(RelationKind),
}
