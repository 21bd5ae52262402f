//! Curve and hash parameters shared by both relations.

use ark_ec::{AffineRepr, Group};
use ark_ed_on_bls12_381::{EdwardsAffine, EdwardsProjective, Fq, Fr};
use ark_ff::PrimeField;
use mimc::{MiMCError, MiMCParams};
use thiserror::Error;

/// Seed used for the MiMC round constants when none is given.
///
/// Both relations hash under this one seed, so the stealth-address hash and
/// the envelope blinding hash share a domain. Build [`CircuitParams`] with
/// distinct seeds per relation to separate them.
pub const DEFAULT_SEED: &str = "seed";

/// Bit length of the scalars fed to scalar multiplication.
pub const SCALAR_BITS: usize = Fq::MODULUS_BIT_SIZE as usize;

/// Whether `point` is on the curve and in the prime-order subgroup.
pub fn in_prime_subgroup(point: &EdwardsAffine) -> bool {
    point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve()
}

/// Errors raised while preparing parameters, before any constraint exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("base point is not a prime-order point on the curve")]
    InvalidBasePoint,
    #[error("address is not a prime-order point on the curve")]
    InvalidAddress,
    #[error("hash setup failed: {0}")]
    Hash(#[from] MiMCError),
}

/// Twisted-Edwards (Jubjub) parameters: the base point `G` and the
/// doublings `2^i * G` used for fixed-base multiplication in-circuit.
#[derive(Clone, Debug)]
pub struct CurveParams {
    base: EdwardsAffine,
    base_powers: Vec<EdwardsProjective>,
}

impl CurveParams {
    /// Jubjub with its standard prime-order generator.
    pub fn jubjub() -> Result<Self, SetupError> {
        Self::with_base(EdwardsAffine::generator())
    }

    /// Use `base` as `G`. It must be a non-identity point of the prime-order
    /// subgroup.
    pub fn with_base(base: EdwardsAffine) -> Result<Self, SetupError> {
        if base.is_zero() || !in_prime_subgroup(&base) {
            return Err(SetupError::InvalidBasePoint);
        }

        let mut base_powers = Vec::with_capacity(SCALAR_BITS);
        let mut power = base.into_group();
        for _ in 0..SCALAR_BITS {
            base_powers.push(power);
            power.double_in_place();
        }

        Ok(Self { base, base_powers })
    }

    pub fn base(&self) -> EdwardsAffine {
        self.base
    }

    pub fn base_powers(&self) -> &[EdwardsProjective] {
        &self.base_powers
    }

    /// Order of the subgroup generated by `G`.
    pub fn order(&self) -> <Fr as PrimeField>::BigInt {
        Fr::MODULUS
    }
}

/// Immutable configuration threaded into every relation.
#[derive(Clone, Debug)]
pub struct CircuitParams {
    pub curve: CurveParams,
    pub mimc: MiMCParams<Fq>,
}

impl CircuitParams {
    /// Jubjub parameters with MiMC keyed by `seed`.
    pub fn new(seed: &str) -> Result<Self, SetupError> {
        Self::with_curve(CurveParams::jubjub()?, seed)
    }

    pub fn with_curve(curve: CurveParams, seed: &str) -> Result<Self, SetupError> {
        Ok(Self {
            curve,
            mimc: MiMCParams::new(seed)?,
        })
    }
}
