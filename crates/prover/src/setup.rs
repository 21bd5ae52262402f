//! Groth16 key generation.

use std::sync::Arc;

use ark_bls12_381::Bls12_381;
use ark_groth16::{Groth16, ProvingKey, VerifyingKey};
use ark_snark::SNARK;
use ark_std::rand::{CryptoRng, RngCore};
use stealth_circuits::{CircuitParams, RelationKind};

use crate::error::ProverError;

/// Proving and verifying keys for one relation.
#[derive(Clone)]
pub struct CircuitKeys {
    pub kind: RelationKind,
    pub proving_key: ProvingKey<Bls12_381>,
    pub verifying_key: VerifyingKey<Bls12_381>,
}

/// Circuit-specific setup for `kind`.
pub fn setup<R: RngCore + CryptoRng>(
    kind: RelationKind,
    params: Arc<CircuitParams>,
    rng: &mut R,
) -> Result<CircuitKeys, ProverError> {
    tracing::info!(relation = %kind, "running circuit-specific setup");

    let (proving_key, verifying_key) =
        Groth16::<Bls12_381>::circuit_specific_setup(kind.empty(params), rng)?;

    Ok(CircuitKeys {
        kind,
        proving_key,
        verifying_key,
    })
}
