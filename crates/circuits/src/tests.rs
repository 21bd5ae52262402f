//! Integration tests for both circuits.

use std::sync::Arc;

use ark_bls12_381::Bls12_381;
use ark_groth16::Groth16;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystem};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};

use crate::address::{derive_stealth_address, AddressCircuit};
use crate::curve::{base_mul, scalar_mul};
use crate::envelope::{seal_envelope, EnvelopeCircuit};
use crate::params::{CircuitParams, DEFAULT_SEED};
use crate::relation::Relation;
use crate::ConstraintF;

fn params() -> Arc<CircuitParams> {
    Arc::new(CircuitParams::new(DEFAULT_SEED).unwrap())
}

/// Test full Groth16 proof generation and verification for AddressCircuit
#[test]
fn test_address_full_proof() {
    let mut rng = StdRng::seed_from_u64(1);
    let params = params();

    // Setup
    let empty_circuit = AddressCircuit::empty(params.clone());
    let (pk, vk) = Groth16::<Bls12_381>::circuit_specific_setup(empty_circuit, &mut rng).unwrap();

    // Derive stealth address
    let addr = base_mul(&params.curve, &ConstraintF::from(1234u64));
    let r = ConstraintF::from(7u64);
    let circuit = AddressCircuit::from_secrets(addr, r, params.clone()).unwrap();
    let public_inputs = circuit.public_inputs().unwrap();

    // Generate proof
    let proof = Groth16::<Bls12_381>::prove(&pk, circuit, &mut rng).unwrap();

    // Verify proof
    let valid = Groth16::<Bls12_381>::verify(&vk, &public_inputs, &proof).unwrap();
    assert!(valid, "Address proof verification failed");

    // Same proof against another nonce point
    let other = derive_stealth_address(&params, &addr, ConstraintF::from(8u64)).unwrap();
    let mut wrong_inputs = public_inputs.clone();
    wrong_inputs[2] = other.r_point.x;
    wrong_inputs[3] = other.r_point.y;
    let valid = Groth16::<Bls12_381>::verify(&vk, &wrong_inputs, &proof).unwrap();
    assert!(!valid, "Invalid proof should be rejected");
}

/// Test full Groth16 proof for EnvelopeCircuit
#[test]
fn test_envelope_full_proof() {
    let mut rng = StdRng::seed_from_u64(2);
    let params = params();

    // Setup
    let empty_circuit = EnvelopeCircuit::empty(params.clone());
    let (pk, vk) = Groth16::<Bls12_381>::circuit_specific_setup(empty_circuit, &mut rng).unwrap();

    let recipient = base_mul(&params.curve, &ConstraintF::from(99u64));
    let h = base_mul(&params.curve, &ConstraintF::from(0x5eed_u64));
    let circuit = EnvelopeCircuit::from_secrets(
        ConstraintF::from(3u64),
        ConstraintF::from(5u64),
        recipient,
        h,
        params.clone(),
    );
    let public_inputs = circuit.public_inputs().unwrap();

    // Generate proof
    let proof = Groth16::<Bls12_381>::prove(&pk, circuit, &mut rng).unwrap();

    // Verify proof
    let valid = Groth16::<Bls12_381>::verify(&vk, &public_inputs, &proof).unwrap();
    assert!(valid, "Envelope proof verification failed");

    // Commitment to a different value
    let other = seal_envelope(
        &params,
        &recipient,
        &h,
        ConstraintF::from(4u64),
        ConstraintF::from(5u64),
    );
    let mut wrong_inputs = public_inputs.clone();
    wrong_inputs[4] = other.commitment.x;
    wrong_inputs[5] = other.commitment.y;
    let valid = Groth16::<Bls12_381>::verify(&vk, &wrong_inputs, &proof).unwrap();
    assert!(!valid, "Invalid proof should be rejected");
}

/// A stealth key produced by one relation feeds the other: the sender seals
/// a value to the one-time key it just derived.
#[test]
fn test_stealth_key_as_envelope_recipient() {
    let params = params();
    let addr = base_mul(&params.curve, &ConstraintF::from(4321u64));
    let r = ConstraintF::from(11u64);
    let stealth = derive_stealth_address(&params, &addr, r).unwrap();

    let h = base_mul(&params.curve, &ConstraintF::from(0x5eed_u64));
    let envelope = seal_envelope(&params, &stealth.pk, &h, ConstraintF::from(42u64), r);
    assert_eq!(envelope.shared_secret, scalar_mul(&stealth.pk, &r));

    let cs = ConstraintSystem::<ConstraintF>::new_ref();
    let circuit = EnvelopeCircuit::new(
        ConstraintF::from(42u64),
        r,
        stealth.pk,
        envelope.shared_secret,
        envelope.commitment,
        h,
        params,
    );
    circuit.generate_constraints(cs.clone()).unwrap();
    assert!(cs.is_satisfied().unwrap());
}
