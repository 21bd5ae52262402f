//! MiMC hash function keyed by a public seed, with R1CS gadgets.
//!
//! Round constants are derived from the seed by chaining Keccak-256, so two
//! instances built from the same seed hash identically. The compression mode
//! is Miyaguchi-Preneel over the MiMC block cipher with exponent 5:
//!
//! ```text
//! E_k(m) = round_n(...round_1(m)) + k,   round_i(x) = (x + k + c_i)^5
//! h_0 = 0,   h_{j+1} = E_{h_j}(m_j) + h_j + m_j
//! ```

pub mod constraints;

use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use sha3::{Digest, Keccak256};
use thiserror::Error;

pub use constraints::MiMCGadget;

/// Number of rounds used when none is given.
pub const DEFAULT_ROUNDS: usize = 111;

/// S-box exponent.
pub const EXPONENT: u64 = 5;

/// Errors raised while building MiMC parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MiMCError {
    #[error("MiMC requires at least one round")]
    ZeroRounds,
    #[error("x^5 is not a permutation of a field with modulus {0}")]
    UnsupportedField(String),
}

/// Seed-derived MiMC parameters for a field `F`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MiMCParams<F: PrimeField> {
    seed: String,
    round_constants: Vec<F>,
}

impl<F: PrimeField> MiMCParams<F> {
    /// Derive parameters with [`DEFAULT_ROUNDS`] rounds.
    pub fn new(seed: &str) -> Result<Self, MiMCError> {
        Self::with_rounds(seed, DEFAULT_ROUNDS)
    }

    /// Derive parameters with an explicit round count.
    pub fn with_rounds(seed: &str, rounds: usize) -> Result<Self, MiMCError> {
        if rounds == 0 {
            return Err(MiMCError::ZeroRounds);
        }
        check_exponent::<F>()?;

        let mut digest = Keccak256::digest(seed.as_bytes());
        let round_constants = (0..rounds)
            .map(|_| {
                digest = Keccak256::digest(digest);
                F::from_be_bytes_mod_order(&digest)
            })
            .collect();

        Ok(Self {
            seed: seed.to_owned(),
            round_constants,
        })
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn rounds(&self) -> usize {
        self.round_constants.len()
    }

    pub fn round_constants(&self) -> &[F] {
        &self.round_constants
    }

    /// MiMC block cipher: encrypt `msg` under `key`.
    pub fn encrypt(&self, key: F, msg: F) -> F {
        let mut x = msg;
        for c in &self.round_constants {
            x = (x + key + c).pow([EXPONENT]);
        }
        x + key
    }

    /// One-shot hash of `inputs`.
    pub fn hash(&self, inputs: &[F]) -> F {
        let mut hasher = MiMC::new(self);
        hasher.write(inputs);
        hasher.sum()
    }
}

/// `x^5` permutes `F` iff `5` does not divide `p - 1`.
fn check_exponent<F: PrimeField>() -> Result<(), MiMCError> {
    let modulus = BigUint::from_bytes_le(&F::MODULUS.to_bytes_le());
    let order = &modulus - BigUint::one();
    if (order % EXPONENT).is_zero() {
        return Err(MiMCError::UnsupportedField(modulus.to_string()));
    }
    Ok(())
}

/// Native hasher. Collects inputs with [`MiMC::write`] and is consumed by
/// [`MiMC::sum`].
pub struct MiMC<'a, F: PrimeField> {
    params: &'a MiMCParams<F>,
    data: Vec<F>,
}

impl<'a, F: PrimeField> MiMC<'a, F> {
    pub fn new(params: &'a MiMCParams<F>) -> Self {
        Self {
            params,
            data: Vec::new(),
        }
    }

    /// Append inputs in order.
    pub fn write(&mut self, inputs: &[F]) {
        self.data.extend_from_slice(inputs);
    }

    /// Absorb everything written so far and return the digest.
    pub fn sum(self) -> F {
        let mut h = F::zero();
        for m in self.data {
            let r = self.params.encrypt(h, m);
            h += r + m;
        }
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fr;
    use ark_ff::fields::{Fp64, MontBackend, MontConfig};
    use ark_std::UniformRand;
    use rand::{rngs::StdRng, SeedableRng};

    #[derive(MontConfig)]
    #[modulus = "11"]
    #[generator = "2"]
    struct F11Config;
    type F11 = Fp64<MontBackend<F11Config, 1>>;

    #[test]
    fn test_hash_deterministic() {
        let params = MiMCParams::<Fr>::new("seed").unwrap();
        let inputs = [Fr::from(3u64), Fr::from(4u64)];

        assert_eq!(params.hash(&inputs), params.hash(&inputs));

        let other = MiMCParams::<Fr>::new("seed").unwrap();
        assert_eq!(params, other);
        assert_eq!(params.hash(&inputs), other.hash(&inputs));
    }

    #[test]
    fn test_distinct_inputs_distinct_digests() {
        let params = MiMCParams::<Fr>::new("seed").unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let a = [Fr::rand(&mut rng), Fr::rand(&mut rng)];
        let b = [a[0], a[1] + Fr::from(1u64)];
        assert_ne!(params.hash(&a), params.hash(&b));

        // Ingestion order matters.
        assert_ne!(params.hash(&a), params.hash(&[a[1], a[0]]));
    }

    #[test]
    fn test_seed_separates_domains() {
        let a = MiMCParams::<Fr>::new("seed").unwrap();
        let b = MiMCParams::<Fr>::new("other-seed").unwrap();
        let inputs = [Fr::from(1u64), Fr::from(2u64)];

        assert_ne!(a.round_constants(), b.round_constants());
        assert_ne!(a.hash(&inputs), b.hash(&inputs));
    }

    #[test]
    fn test_incremental_writes_match_one_shot() {
        let params = MiMCParams::<Fr>::new("seed").unwrap();
        let (x, y) = (Fr::from(10u64), Fr::from(20u64));

        let mut hasher = MiMC::new(&params);
        hasher.write(&[x]);
        hasher.write(&[y]);

        assert_eq!(hasher.sum(), params.hash(&[x, y]));
    }

    #[test]
    fn test_round_count() {
        let params = MiMCParams::<Fr>::new("seed").unwrap();
        assert_eq!(params.rounds(), DEFAULT_ROUNDS);
        assert_eq!(params.seed(), "seed");

        let short = MiMCParams::<Fr>::with_rounds("seed", 10).unwrap();
        assert_eq!(short.rounds(), 10);
        assert_eq!(short.round_constants(), &params.round_constants()[..10]);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert_eq!(
            MiMCParams::<Fr>::with_rounds("seed", 0),
            Err(MiMCError::ZeroRounds)
        );
    }

    #[test]
    fn test_non_permutation_field_rejected() {
        // 5 divides 11 - 1
        assert_eq!(
            MiMCParams::<F11>::new("seed"),
            Err(MiMCError::UnsupportedField("11".to_string()))
        );
    }
}
