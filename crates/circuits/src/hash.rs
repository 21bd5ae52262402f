//! Hashing a curve point to a scalar.

use ark_ed_on_bls12_381::{
    constraints::{EdwardsVar, FqVar},
    EdwardsAffine, Fq,
};
use ark_relations::r1cs::SynthesisError;
use mimc::{MiMC, MiMCGadget, MiMCParams};

/// `MiMC(p.x, p.y)`.
pub fn hash_point(params: &MiMCParams<Fq>, point: &EdwardsAffine) -> Fq {
    let mut hasher = MiMC::new(params);
    hasher.write(&[point.x, point.y]);
    hasher.sum()
}

/// In-circuit `MiMC(p.x, p.y)`.
pub fn hash_point_var(params: &MiMCParams<Fq>, point: &EdwardsVar) -> Result<FqVar, SynthesisError> {
    let mut hasher = MiMCGadget::new(params);
    hasher.write(&[point.x.clone(), point.y.clone()]);
    hasher.sum()
}
