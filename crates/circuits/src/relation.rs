//! The relation capability shared by both circuits.

use std::fmt;
use std::sync::Arc;

use ark_ed_on_bls12_381::Fq;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

use crate::address::AddressCircuit;
use crate::envelope::EnvelopeCircuit;
use crate::params::CircuitParams;

/// A circuit with declared public and private inputs.
pub trait Relation: ConstraintSynthesizer<Fq> {
    fn kind(&self) -> RelationKind;

    /// Verifier inputs in allocation order, or `None` for an empty instance.
    fn public_inputs(&self) -> Option<Vec<Fq>>;
}

/// The two relations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Address,
    Envelope,
}

impl RelationKind {
    pub const ALL: [RelationKind; 2] = [RelationKind::Address, RelationKind::Envelope];

    pub fn name(self) -> &'static str {
        match self {
            RelationKind::Address => "circuit_addr",
            RelationKind::Envelope => "circuit_env",
        }
    }

    /// Number of public field elements (two per point).
    pub fn public_input_len(self) -> usize {
        match self {
            // pk, r_point
            RelationKind::Address => 4,
            // pk, x, cm, h
            RelationKind::Envelope => 8,
        }
    }

    /// Number of private field elements (two per point).
    pub fn secret_input_len(self) -> usize {
        match self {
            // addr, r_scalar
            RelationKind::Address => 3,
            // v_scalar, r_scalar
            RelationKind::Envelope => 2,
        }
    }

    /// An instance without witnesses, for setup and compilation.
    pub fn empty(self, params: Arc<CircuitParams>) -> AnyRelation {
        match self {
            RelationKind::Address => AddressCircuit::empty(params).into(),
            RelationKind::Envelope => EnvelopeCircuit::empty(params).into(),
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Either relation, for drivers that pick one at runtime.
#[derive(Clone)]
pub enum AnyRelation {
    Address(AddressCircuit),
    Envelope(EnvelopeCircuit),
}

impl From<AddressCircuit> for AnyRelation {
    fn from(circuit: AddressCircuit) -> Self {
        AnyRelation::Address(circuit)
    }
}

impl From<EnvelopeCircuit> for AnyRelation {
    fn from(circuit: EnvelopeCircuit) -> Self {
        AnyRelation::Envelope(circuit)
    }
}

impl ConstraintSynthesizer<Fq> for AnyRelation {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fq>) -> Result<(), SynthesisError> {
        match self {
            AnyRelation::Address(circuit) => circuit.generate_constraints(cs),
            AnyRelation::Envelope(circuit) => circuit.generate_constraints(cs),
        }
    }
}

impl Relation for AnyRelation {
    fn kind(&self) -> RelationKind {
        match self {
            AnyRelation::Address(circuit) => circuit.kind(),
            AnyRelation::Envelope(circuit) => circuit.kind(),
        }
    }

    fn public_inputs(&self) -> Option<Vec<Fq>> {
        match self {
            AnyRelation::Address(circuit) => circuit.public_inputs(),
            AnyRelation::Envelope(circuit) => circuit.public_inputs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::DEFAULT_SEED;
    use ark_relations::r1cs::{ConstraintSystem, SynthesisMode};

    #[test]
    fn test_empty_instances_synthesize_in_setup_mode() {
        let params = Arc::new(CircuitParams::new(DEFAULT_SEED).unwrap());

        for kind in RelationKind::ALL {
            let circuit = kind.empty(params.clone());
            assert_eq!(circuit.kind(), kind);

            let cs = ConstraintSystem::<Fq>::new_ref();
            cs.set_mode(SynthesisMode::Setup);
            circuit.generate_constraints(cs.clone()).unwrap();

            // constant one plus the declared public inputs
            assert_eq!(cs.num_instance_variables(), kind.public_input_len() + 1);
            assert!(cs.num_constraints() > 0);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(RelationKind::Address.to_string(), "circuit_addr");
        assert_eq!(RelationKind::Envelope.to_string(), "circuit_env");
    }
}
