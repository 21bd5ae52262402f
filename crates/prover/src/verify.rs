//! Local proof verification.

use ark_bls12_381::Bls12_381;
use ark_groth16::{Groth16, Proof, VerifyingKey};
use ark_snark::SNARK;
use stealth_circuits::{ConstraintF, EdwardsAffine, Envelope, RelationKind, StealthAddress};
use thiserror::Error;

/// Errors during verification
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Verification failed: {0}")]
    Verification(String),
    #[error("{relation}: expected {expected} public inputs, got {actual}")]
    InvalidInputs {
        relation: RelationKind,
        expected: usize,
        actual: usize,
    },
}

/// Verify a proof for `kind` against raw public inputs.
pub fn verify(
    kind: RelationKind,
    vk: &VerifyingKey<Bls12_381>,
    proof: &Proof<Bls12_381>,
    public_inputs: &[ConstraintF],
) -> Result<bool, VerifyError> {
    if public_inputs.len() != kind.public_input_len() {
        return Err(VerifyError::InvalidInputs {
            relation: kind,
            expected: kind.public_input_len(),
            actual: public_inputs.len(),
        });
    }

    let valid = Groth16::<Bls12_381>::verify(vk, public_inputs, proof)
        .map_err(|e| VerifyError::Verification(e.to_string()))?;
    tracing::debug!(relation = %kind, valid, "verified");
    Ok(valid)
}

/// Verify an address proof
pub fn verify_address(
    vk: &VerifyingKey<Bls12_381>,
    proof: &Proof<Bls12_381>,
    stealth: &StealthAddress,
) -> Result<bool, VerifyError> {
    let public_inputs = vec![
        stealth.pk.x,
        stealth.pk.y,
        stealth.r_point.x,
        stealth.r_point.y,
    ];

    verify(RelationKind::Address, vk, proof, &public_inputs)
}

/// Verify an envelope proof
pub fn verify_envelope(
    vk: &VerifyingKey<Bls12_381>,
    proof: &Proof<Bls12_381>,
    pk: &EdwardsAffine,
    envelope: &Envelope,
    h: &EdwardsAffine,
) -> Result<bool, VerifyError> {
    let public_inputs = vec![
        pk.x,
        pk.y,
        envelope.shared_secret.x,
        envelope.shared_secret.y,
        envelope.commitment.x,
        envelope.commitment.y,
        h.x,
        h.y,
    ];

    verify(RelationKind::Envelope, vk, proof, &public_inputs)
}
