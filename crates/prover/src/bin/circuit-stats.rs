//! Compile the stealth circuits and print their constraint and variable
//! counts.
//!
//! Usage:
//!   circuit-stats [--relation addr|env|all] [--seed <SEED>] [--json]

use clap::{Parser, ValueEnum};
use stealth_circuits::{RelationKind, DEFAULT_SEED};
use stealth_prover::{compile_many, logging};

/// Report constraint-system sizes for the stealth circuits.
#[derive(Parser, Debug)]
#[command(name = "circuit-stats", version, about)]
struct Cli {
    /// Relation to compile.
    #[arg(long, value_enum, default_value_t = RelationArg::All)]
    relation: RelationArg,
    /// Seed for the MiMC round constants.
    #[arg(long, default_value = DEFAULT_SEED)]
    seed: String,
    /// Print a JSON array instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RelationArg {
    Addr,
    Env,
    All,
}

impl RelationArg {
    fn kinds(self) -> Vec<RelationKind> {
        match self {
            RelationArg::Addr => vec![RelationKind::Address],
            RelationArg::Env => vec![RelationKind::Envelope],
            RelationArg::All => RelationKind::ALL.to_vec(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(logging::env_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::info!(seed = %cli.seed, "compiling circuits");

    let mut compiled = Vec::new();
    let mut failed = 0;
    for (kind, result) in compile_many(&cli.relation.kinds(), &cli.seed) {
        match result {
            Ok(circuit) => compiled.push(circuit),
            Err(e) => {
                tracing::error!(relation = %kind, error = %e, "compilation failed");
                failed += 1;
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&compiled)?);
    } else {
        for circuit in &compiled {
            println!("{circuit}");
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} relation(s) failed to compile");
    }
    Ok(())
}
