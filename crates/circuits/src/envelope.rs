//! EnvelopeCircuit: proves a shared secret and a value commitment were built
//! from the same hidden random scalar.
//!
//! The commitment's blinding factor is not `r` itself but `H(r * G)`, which
//! ties the opening of `cm` to the nonce that also produced the shared secret.

use std::sync::Arc;

use ark_ed_on_bls12_381::{
    constraints::{EdwardsVar, FqVar},
    EdwardsAffine, Fq,
};
use ark_r1cs_std::prelude::*;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

use crate::curve::{add, base_mul, base_mul_var, scalar_mul, scalar_mul_var};
use crate::hash::{hash_point, hash_point_var};
use crate::params::CircuitParams;
use crate::relation::{Relation, RelationKind};

/// Public outputs of sealing a value to a recipient key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Envelope {
    /// `r * pk`
    pub shared_secret: EdwardsAffine,
    /// `H(r * G) * G + v * h`
    pub commitment: EdwardsAffine,
}

/// Seal value `v` to `pk` under the random scalar `r`, committing with the
/// value generator `h`.
pub fn seal_envelope(
    params: &CircuitParams,
    pk: &EdwardsAffine,
    h: &EdwardsAffine,
    v: Fq,
    r: Fq,
) -> Envelope {
    let shared_secret = scalar_mul(pk, &r);

    let preimage = base_mul(&params.curve, &r);
    let blinding = hash_point(&params.mimc, &preimage);
    let commitment = add(&base_mul(&params.curve, &blinding), &scalar_mul(h, &v));

    Envelope {
        shared_secret,
        commitment,
    }
}

/// Circuit that proves: "x = r * pk and cm = H(r * G) * G + v * h"
///
/// Public inputs:
/// - pk: The recipient public key
/// - x: The shared secret point
/// - cm: The value commitment
/// - h: The value generator
///
/// Private witnesses:
/// - v_scalar: The committed value
/// - r_scalar: The random scalar
#[derive(Clone)]
pub struct EnvelopeCircuit {
    /// Private: Committed value
    pub v_scalar: Option<Fq>,
    /// Private: Random scalar
    pub r_scalar: Option<Fq>,

    /// Public: Recipient public key
    pub pk: Option<EdwardsAffine>,
    /// Public: Shared secret
    pub x: Option<EdwardsAffine>,
    /// Public: Commitment
    pub cm: Option<EdwardsAffine>,
    /// Public: Value generator
    pub h: Option<EdwardsAffine>,

    pub params: Arc<CircuitParams>,
}

impl EnvelopeCircuit {
    /// Create a new circuit instance for proving.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        v_scalar: Fq,
        r_scalar: Fq,
        pk: EdwardsAffine,
        x: EdwardsAffine,
        cm: EdwardsAffine,
        h: EdwardsAffine,
        params: Arc<CircuitParams>,
    ) -> Self {
        Self {
            v_scalar: Some(v_scalar),
            r_scalar: Some(r_scalar),
            pk: Some(pk),
            x: Some(x),
            cm: Some(cm),
            h: Some(h),
            params,
        }
    }

    /// Seal `v_scalar` to `pk` and build an honest instance.
    pub fn from_secrets(
        v_scalar: Fq,
        r_scalar: Fq,
        pk: EdwardsAffine,
        h: EdwardsAffine,
        params: Arc<CircuitParams>,
    ) -> Self {
        let envelope = seal_envelope(&params, &pk, &h, v_scalar, r_scalar);
        Self::new(
            v_scalar,
            r_scalar,
            pk,
            envelope.shared_secret,
            envelope.commitment,
            h,
            params,
        )
    }

    /// Create an empty circuit for setup (constraint generation only).
    pub fn empty(params: Arc<CircuitParams>) -> Self {
        Self {
            v_scalar: None,
            r_scalar: None,
            pk: None,
            x: None,
            cm: None,
            h: None,
            params,
        }
    }
}

impl ConstraintSynthesizer<Fq> for EnvelopeCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fq>) -> Result<(), SynthesisError> {
        // 1. Allocate private witnesses
        let v_scalar_var = FqVar::new_witness(cs.clone(), || {
            self.v_scalar.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let r_scalar_var = FqVar::new_witness(cs.clone(), || {
            self.r_scalar.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // 2. Allocate public inputs
        let pk_var = EdwardsVar::new_input(cs.clone(), || {
            self.pk.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let x_var = EdwardsVar::new_input(cs.clone(), || {
            self.x.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let cm_var = EdwardsVar::new_input(cs.clone(), || {
            self.cm.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let h_var = EdwardsVar::new_input(cs.clone(), || {
            self.h.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // 3. x == r * pk
        let shared_secret = scalar_mul_var(&pk_var, &r_scalar_var)?;
        shared_secret.enforce_equal(&x_var)?;

        // 4. blinding = H(r * G)
        let preimage = base_mul_var(&self.params.curve, &r_scalar_var)?;
        let blinding = hash_point_var(&self.params.mimc, &preimage)?;

        // 5. cm == blinding * G + v * h
        let lhs = base_mul_var(&self.params.curve, &blinding)?;
        let hv = scalar_mul_var(&h_var, &v_scalar_var)?;
        let commitment = lhs + &hv;
        commitment.enforce_equal(&cm_var)?;

        Ok(())
    }
}

impl Relation for EnvelopeCircuit {
    fn kind(&self) -> RelationKind {
        RelationKind::Envelope
    }

    fn public_inputs(&self) -> Option<Vec<Fq>> {
        let points = [self.pk?, self.x?, self.cm?, self.h?];
        Some(points.iter().flat_map(|p| [p.x, p.y]).collect())
    }
}
