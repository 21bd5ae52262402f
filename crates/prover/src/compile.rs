//! Compiling relations into R1CS and reporting their size.

use std::fmt;
use std::sync::Arc;

use ark_relations::r1cs::{ConstraintMatrices, ConstraintSystem, OptimizationGoal, SynthesisMode};
use rayon::prelude::*;
use serde::{Serialize, Serializer};
use stealth_circuits::{CircuitParams, ConstraintF, Relation, RelationKind};

use crate::error::CompileError;

/// Size of a compiled constraint system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CircuitStats {
    pub constraints: usize,
    /// Witness variables that are not declared private inputs
    pub internal: usize,
    /// Declared private input field elements
    pub secret: usize,
    /// Instance variables, including the constant one
    pub public: usize,
}

/// A relation compiled in setup mode.
#[derive(Clone, Debug, Serialize)]
pub struct CompiledCircuit {
    #[serde(rename = "relation", serialize_with = "serialize_kind")]
    pub kind: RelationKind,
    #[serde(flatten)]
    pub stats: CircuitStats,
    #[serde(skip)]
    pub matrices: ConstraintMatrices<ConstraintF>,
}

impl CompiledCircuit {
    pub fn constraint_count(&self) -> usize {
        self.stats.constraints
    }

    /// `(internal, secret, public)`
    pub fn variable_count(&self) -> (usize, usize, usize) {
        (self.stats.internal, self.stats.secret, self.stats.public)
    }
}

impl fmt::Display for CompiledCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind.name();
        writeln!(f, "{name} constraints: {}", self.stats.constraints)?;
        write!(
            f,
            "{name} internal: {} secret: {} public: {}",
            self.stats.internal, self.stats.secret, self.stats.public
        )
    }
}

fn serialize_kind<S: Serializer>(kind: &RelationKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(kind.name())
}

/// Synthesize `relation` without witnesses and collect its matrices.
pub fn compile<R: Relation>(relation: R) -> Result<CompiledCircuit, CompileError> {
    let kind = relation.kind();
    let _span = tracing::debug_span!("compile", relation = %kind).entered();

    let cs = ConstraintSystem::<ConstraintF>::new_ref();
    cs.set_optimization_goal(OptimizationGoal::Constraints);
    cs.set_mode(SynthesisMode::Setup);
    relation.generate_constraints(cs.clone())?;
    cs.finalize();

    let public = cs.num_instance_variables();
    if public != kind.public_input_len() + 1 {
        return Err(CompileError::PublicInputMismatch {
            relation: kind,
            expected: kind.public_input_len(),
            actual: public - 1,
        });
    }

    let secret = kind.secret_input_len();
    let stats = CircuitStats {
        constraints: cs.num_constraints(),
        internal: cs.num_witness_variables().saturating_sub(secret),
        secret,
        public,
    };
    let matrices = cs.to_matrices().ok_or(CompileError::Matrices(kind))?;

    tracing::debug!(
        constraints = stats.constraints,
        internal = stats.internal,
        secret = stats.secret,
        public = stats.public,
        "compiled"
    );

    Ok(CompiledCircuit {
        kind,
        stats,
        matrices,
    })
}

/// Compile the empty instance of `kind`.
pub fn compile_kind(
    kind: RelationKind,
    params: Arc<CircuitParams>,
) -> Result<CompiledCircuit, CompileError> {
    compile(kind.empty(params))
}

/// Compile each relation in parallel, each with its own parameters keyed by
/// `seed`. One result per relation; a failure does not stop the others.
pub fn compile_many(
    kinds: &[RelationKind],
    seed: &str,
) -> Vec<(RelationKind, Result<CompiledCircuit, CompileError>)> {
    kinds
        .par_iter()
        .map(|&kind| {
            let result = CircuitParams::new(seed)
                .map_err(CompileError::from)
                .and_then(|params| compile_kind(kind, Arc::new(params)));
            (kind, result)
        })
        .collect()
}

/// [`compile_many`] over both relations.
pub fn compile_all(seed: &str) -> Vec<(RelationKind, Result<CompiledCircuit, CompileError>)> {
    compile_many(&RelationKind::ALL, seed)
}
