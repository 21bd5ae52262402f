//! Scalar multiplication and point addition, natively and in-circuit.
//!
//! Scalars are constraint-field elements read as integers. Points are in the
//! prime-order subgroup, so the product depends only on the scalar modulo the
//! group order and native and in-circuit results agree.

use ark_ec::{AffineRepr, CurveGroup};
use ark_ed_on_bls12_381::{
    constraints::{EdwardsVar, FqVar},
    EdwardsAffine, Fq,
};
use ark_ff::PrimeField;
use ark_r1cs_std::{groups::CurveVar, prelude::*};
use ark_relations::r1cs::SynthesisError;

use crate::params::CurveParams;

/// `scalar * base`.
pub fn scalar_mul(base: &EdwardsAffine, scalar: &Fq) -> EdwardsAffine {
    base.mul_bigint(scalar.into_bigint()).into_affine()
}

/// `scalar * G`.
pub fn base_mul(curve: &CurveParams, scalar: &Fq) -> EdwardsAffine {
    scalar_mul(&curve.base(), scalar)
}

pub fn add(a: &EdwardsAffine, b: &EdwardsAffine) -> EdwardsAffine {
    (*a + *b).into_affine()
}

/// In-circuit `scalar * base` where `base` is itself a circuit variable.
/// Double-and-add over the canonical bit decomposition of `scalar`.
pub fn scalar_mul_var(base: &EdwardsVar, scalar: &FqVar) -> Result<EdwardsVar, SynthesisError> {
    let bits = scalar.to_bits_le()?;
    base.scalar_mul_le(bits.iter())
}

/// In-circuit `scalar * G` using the precomputed doublings of `G`.
pub fn base_mul_var(curve: &CurveParams, scalar: &FqVar) -> Result<EdwardsVar, SynthesisError> {
    let bits = scalar.to_bits_le()?;
    let mut result = EdwardsVar::zero();
    result.precomputed_base_scalar_mul_le(bits.iter().zip(curve.base_powers()))?;
    Ok(result)
}
