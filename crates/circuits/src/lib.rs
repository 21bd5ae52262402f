//! ZK circuits for stealth addresses and value-commitment envelopes.
//!
//! This crate provides circuits for:
//! - `AddressCircuit`: Prove a one-time public key and nonce point were derived
//!   from a hidden address and random scalar
//! - `EnvelopeCircuit`: Prove a shared secret and a value commitment open with
//!   the same hidden random scalar
//!
//! All arithmetic happens on Jubjub, embedded in the BLS12-381 scalar field.

pub mod address;
pub mod curve;
pub mod envelope;
pub mod hash;
pub mod params;
pub mod relation;

#[cfg(test)]
mod tests;

pub use address::{derive_stealth_address, AddressCircuit, StealthAddress};
pub use envelope::{seal_envelope, Envelope, EnvelopeCircuit};
pub use hash::hash_point;
pub use params::{in_prime_subgroup, CircuitParams, CurveParams, SetupError, DEFAULT_SEED};
pub use relation::{AnyRelation, Relation, RelationKind};

pub use ark_ed_on_bls12_381::EdwardsAffine;

use ark_ed_on_bls12_381::Fq;

/// Common type aliases
pub type ConstraintF = Fq;
