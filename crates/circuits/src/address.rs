//! AddressCircuit: proves a stealth public key was derived from a hidden
//! address and a hidden random scalar.

use std::sync::Arc;

use ark_ed_on_bls12_381::{
    constraints::{EdwardsVar, FqVar},
    EdwardsAffine, Fq,
};
use ark_r1cs_std::prelude::*;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

use crate::curve::{base_mul, base_mul_var, scalar_mul, scalar_mul_var};
use crate::hash::{hash_point, hash_point_var};
use crate::params::{in_prime_subgroup, CircuitParams, SetupError};
use crate::relation::{Relation, RelationKind};

/// Public half of a stealth address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StealthAddress {
    /// One-time public key `H(r * addr) * addr`
    pub pk: EdwardsAffine,
    /// Nonce point `r * G`
    pub r_point: EdwardsAffine,
}

/// Derive the stealth address for `addr` under the random scalar `r`.
///
/// `addr` must lie in the prime-order subgroup: the circuit allocates it
/// there, so any other point would yield a key no proof can match.
pub fn derive_stealth_address(
    params: &CircuitParams,
    addr: &EdwardsAffine,
    r: Fq,
) -> Result<StealthAddress, SetupError> {
    if !in_prime_subgroup(addr) {
        return Err(SetupError::InvalidAddress);
    }

    let addr_r = scalar_mul(addr, &r);
    let h = hash_point(&params.mimc, &addr_r);

    Ok(StealthAddress {
        pk: scalar_mul(addr, &h),
        r_point: base_mul(&params.curve, &r),
    })
}

/// Circuit that proves: "pk = H(r * addr) * addr and r_point = r * G"
///
/// Public inputs:
/// - pk: The one-time public key
/// - r_point: The nonce point
///
/// Private witnesses:
/// - addr: The recipient address point
/// - r_scalar: The random scalar
#[derive(Clone)]
pub struct AddressCircuit {
    /// Private: Address point
    pub addr: Option<EdwardsAffine>,
    /// Private: Random scalar
    pub r_scalar: Option<Fq>,

    /// Public: One-time public key
    pub pk: Option<EdwardsAffine>,
    /// Public: Nonce point
    pub r_point: Option<EdwardsAffine>,

    pub params: Arc<CircuitParams>,
}

impl AddressCircuit {
    /// Create a new circuit instance for proving.
    pub fn new(
        addr: EdwardsAffine,
        r_scalar: Fq,
        pk: EdwardsAffine,
        r_point: EdwardsAffine,
        params: Arc<CircuitParams>,
    ) -> Self {
        Self {
            addr: Some(addr),
            r_scalar: Some(r_scalar),
            pk: Some(pk),
            r_point: Some(r_point),
            params,
        }
    }

    /// Derive the public inputs from `addr` and `r_scalar` and build an
    /// honest instance.
    pub fn from_secrets(
        addr: EdwardsAffine,
        r_scalar: Fq,
        params: Arc<CircuitParams>,
    ) -> Result<Self, SetupError> {
        let stealth = derive_stealth_address(&params, &addr, r_scalar)?;
        Ok(Self::new(addr, r_scalar, stealth.pk, stealth.r_point, params))
    }

    /// Create an empty circuit for setup (constraint generation only).
    pub fn empty(params: Arc<CircuitParams>) -> Self {
        Self {
            addr: None,
            r_scalar: None,
            pk: None,
            r_point: None,
            params,
        }
    }
}

impl ConstraintSynthesizer<Fq> for AddressCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fq>) -> Result<(), SynthesisError> {
        // 1. Allocate private witnesses
        let addr_var = EdwardsVar::new_witness(cs.clone(), || {
            self.addr.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let r_scalar_var = FqVar::new_witness(cs.clone(), || {
            self.r_scalar.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // 2. Allocate public inputs
        let pk_var = EdwardsVar::new_input(cs.clone(), || {
            self.pk.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let r_point_var = EdwardsVar::new_input(cs.clone(), || {
            self.r_point.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // 3. pk == H(r * addr) * addr
        let addr_r = scalar_mul_var(&addr_var, &r_scalar_var)?;
        let h = hash_point_var(&self.params.mimc, &addr_r)?;
        let derived_pk = scalar_mul_var(&addr_var, &h)?;
        derived_pk.enforce_equal(&pk_var)?;

        // 4. r_point == r * G
        let derived_r_point = base_mul_var(&self.params.curve, &r_scalar_var)?;
        derived_r_point.enforce_equal(&r_point_var)?;

        Ok(())
    }
}

impl Relation for AddressCircuit {
    fn kind(&self) -> RelationKind {
        RelationKind::Address
    }

    fn public_inputs(&self) -> Option<Vec<Fq>> {
        let pk = self.pk?;
        let r_point = self.r_point?;
        Some(vec![pk.x, pk.y, r_point.x, r_point.y])
    }
}
