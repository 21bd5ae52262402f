//! In-circuit MiMC.

use ark_ff::PrimeField;
use ark_r1cs_std::{fields::fp::FpVar, prelude::*};
use ark_relations::r1cs::SynthesisError;

use crate::{MiMCParams, EXPONENT};

/// R1CS counterpart of [`crate::MiMC`]. Round constants enter the circuit as
/// constants, so the gadget allocates nothing until [`MiMCGadget::sum`].
pub struct MiMCGadget<'a, F: PrimeField> {
    params: &'a MiMCParams<F>,
    data: Vec<FpVar<F>>,
}

impl<'a, F: PrimeField> MiMCGadget<'a, F> {
    pub fn new(params: &'a MiMCParams<F>) -> Self {
        Self {
            params,
            data: Vec::new(),
        }
    }

    /// Append inputs in order.
    pub fn write(&mut self, inputs: &[FpVar<F>]) {
        self.data.extend_from_slice(inputs);
    }

    /// Absorb everything written so far and return the digest variable.
    pub fn sum(self) -> Result<FpVar<F>, SynthesisError> {
        let mut h = FpVar::zero();
        for m in &self.data {
            let r = encrypt(self.params, &h, m)?;
            h = r + &h + m;
        }
        Ok(h)
    }
}

/// MiMC block cipher in-circuit; three constraints per round.
pub fn encrypt<F: PrimeField>(
    params: &MiMCParams<F>,
    key: &FpVar<F>,
    msg: &FpVar<F>,
) -> Result<FpVar<F>, SynthesisError> {
    let mut x = msg.clone();
    for c in params.round_constants() {
        let t = &x + key + *c;
        x = t.pow_by_constant([EXPONENT])?;
    }
    Ok(x + key)
}

/// One-shot in-circuit hash of `inputs`.
pub fn hash_var<F: PrimeField>(
    params: &MiMCParams<F>,
    inputs: &[FpVar<F>],
) -> Result<FpVar<F>, SynthesisError> {
    let mut gadget = MiMCGadget::new(params);
    gadget.write(inputs);
    gadget.sum()
}
