//! Groth16 proof generation.

use std::sync::Arc;
use std::time::Instant;

use ark_bls12_381::Bls12_381;
use ark_groth16::{Groth16, Proof, ProvingKey};
use ark_snark::SNARK;
use ark_std::rand::{CryptoRng, RngCore};
use stealth_circuits::{
    AddressCircuit, CircuitParams, ConstraintF, EdwardsAffine, EnvelopeCircuit, Relation,
};

use crate::error::ProverError;

/// A proof together with the public inputs it was generated against.
#[derive(Clone, Debug)]
pub struct ProofResult {
    pub proof: Proof<Bls12_381>,
    pub public_inputs: Vec<ConstraintF>,
}

/// Prove an assigned relation.
pub fn prove<C: Relation, R: RngCore + CryptoRng>(
    proving_key: &ProvingKey<Bls12_381>,
    relation: C,
    rng: &mut R,
) -> Result<ProofResult, ProverError> {
    let kind = relation.kind();
    let public_inputs = relation
        .public_inputs()
        .ok_or(ProverError::MissingWitness(kind))?;

    let start = Instant::now();
    let proof = Groth16::<Bls12_381>::prove(proving_key, relation, rng)?;
    tracing::debug!(relation = %kind, elapsed = ?start.elapsed(), "proof generated");

    Ok(ProofResult {
        proof,
        public_inputs,
    })
}

/// Prove knowledge of the address and scalar behind a stealth address.
pub fn prove_address<R: RngCore + CryptoRng>(
    proving_key: &ProvingKey<Bls12_381>,
    params: Arc<CircuitParams>,
    addr: EdwardsAffine,
    r_scalar: ConstraintF,
    rng: &mut R,
) -> Result<ProofResult, ProverError> {
    let circuit = AddressCircuit::from_secrets(addr, r_scalar, params)?;
    prove(proving_key, circuit, rng)
}

/// Prove that `v_scalar` is sealed to `pk` under `r_scalar`.
pub fn prove_envelope<R: RngCore + CryptoRng>(
    proving_key: &ProvingKey<Bls12_381>,
    params: Arc<CircuitParams>,
    v_scalar: ConstraintF,
    r_scalar: ConstraintF,
    pk: EdwardsAffine,
    h: EdwardsAffine,
    rng: &mut R,
) -> Result<ProofResult, ProverError> {
    prove(
        proving_key,
        EnvelopeCircuit::from_secrets(v_scalar, r_scalar, pk, h, params),
        rng,
    )
}
