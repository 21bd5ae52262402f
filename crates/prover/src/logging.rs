//! Log filtering for binaries that synthesize circuits.
//!
//! arkworks instruments its gadgets with INFO-level spans under the `r1cs`
//! target, each recording the whole constraint system. Those spans stay off
//! regardless of the caller's directives.

use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

const GADGET_SPANS_OFF: &str = "r1cs=off";

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn env_filter() -> EnvFilter {
    let directives =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    filter_from(&directives)
}

/// Filter from `directives` with gadget spans disabled.
pub fn filter_from(directives: &str) -> EnvFilter {
    let directives = directives.trim();
    if directives.is_empty() {
        EnvFilter::new(GADGET_SPANS_OFF)
    } else {
        EnvFilter::new(format!("{directives},{GADGET_SPANS_OFF}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile_kind;
    use stealth_circuits::{CircuitParams, RelationKind, DEFAULT_SEED};
    use std::sync::Arc;
    use tracing::Level;

    #[test]
    fn test_gadget_spans_disabled() {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter_from("trace"))
            .with_writer(std::io::sink)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            assert!(!tracing::enabled!(target: "r1cs", Level::ERROR));
            assert!(tracing::enabled!(target: "stealth_prover", Level::TRACE));
        });
    }

    #[test]
    fn test_compile_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter_from(DEFAULT_LOG_FILTER))
            .with_writer(std::io::sink)
            .finish();
        let params = Arc::new(CircuitParams::new(DEFAULT_SEED).unwrap());

        let compiled = tracing::subscriber::with_default(subscriber, || {
            compile_kind(RelationKind::Address, params)
        })
        .unwrap();

        assert_eq!(compiled.variable_count().2, 5);
    }

    #[test]
    fn test_empty_directives() {
        let filter = filter_from("  ").to_string();
        assert!(filter.contains("r1cs=off"));
        assert!(!filter.starts_with(','));
    }
}
