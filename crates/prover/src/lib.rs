//! Compilation and proving for the stealth circuits.
//!
//! - `compile`: synthesize a relation in setup mode and report its size
//! - `setup`, `prove`, `verify`: Groth16 over BLS12-381
//! - `logging`: tracing filters that keep arkworks gadget spans quiet

pub mod compile;
pub mod error;
pub mod logging;
pub mod prove;
pub mod setup;
pub mod verify;

pub use compile::{compile, compile_all, compile_kind, compile_many, CircuitStats, CompiledCircuit};
pub use error::{CompileError, ProverError};
pub use prove::ProofResult;
pub use setup::CircuitKeys;
pub use verify::VerifyError;
