//! Constructor-synthesis engine.
//!
//! Synthesizes constructors for partial classes/structs from declarative
//! markers placed on fields and types. The host hands the engine a read-only
//! symbol snapshot ([`ctorgen_model::Database`]) plus the candidate types
//! carrying the generation marker; the engine answers with zero or one
//! generated source unit per candidate and structured diagnostics for the
//! single generation-blocking condition it can detect itself.
//!
//! The engine is total: misuse and broken symbols degrade to per-type skips
//! or safe fallbacks, never to a crash of the whole pass. Cancellation is
//! cooperative and checked between per-type units only, so output is always
//! per-type atomic.

mod cache;
mod chain;
mod emit;
mod fields;
mod options;
mod synth;

use thiserror::Error;

use ctorgen_core::{CancellationToken, Diagnostic};
use ctorgen_model::{Database, TypeId};

use crate::cache::{type_fingerprint, TypeOutcome, UnitCache};
use crate::chain::ChainResolver;

pub use ctorgen_emit::GeneratedUnit;
pub use options::{
    GeneratorOptions, DEFAULT_OBSOLETE_MESSAGE, PROP_CHAIN_THIS_CALL, PROP_EMIT_NULL_CHECKS,
    PROP_GENERATE_DOCUMENTATION, PROP_MATCH_BASE_ON_NAME, PROP_OBSOLETE_MESSAGE,
};

/// Diagnostic code for the single generation-blocking condition.
pub const PARAMETER_TYPE_CONFLICT: &str = "CTORGEN_PARAMETER_TYPE_CONFLICT";

/// Per-type generation failure. Resolved locally: the offending type is
/// skipped with a diagnostic and the pass continues.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error(
        "constructor parameter `{parameter}` of `{type_name}` would need both \
         `{first}` and `{second}` and no rename is available"
    )]
    ParameterTypeConflict {
        type_name: String,
        parameter: String,
        first: String,
        second: String,
    },
}

impl GenerateError {
    fn to_diagnostic(&self) -> Diagnostic {
        match self {
            GenerateError::ParameterTypeConflict { type_name, .. } => {
                Diagnostic::error(PARAMETER_TYPE_CONFLICT, self.to_string(), type_name.clone())
            }
        }
    }
}

/// Result of one generation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationResult {
    /// One unit per candidate that needed a constructor, in candidate order.
    pub units: Vec<GeneratedUnit>,
    pub diagnostics: Vec<Diagnostic>,
    /// The pass was abandoned before all candidates were processed.
    pub cancelled: bool,
}

/// The constructor generator. One instance may serve many passes; the
/// per-type cache carries over so unchanged types are never recomputed.
pub struct Generator {
    options: GeneratorOptions,
    cache: UnitCache,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            options,
            cache: UnitCache::default(),
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Run one generation pass over the candidate types.
    ///
    /// Per-type outputs are independent; the content of each unit does not
    /// depend on the order candidates are processed in.
    pub fn generate(
        &self,
        db: &dyn Database,
        candidates: &[TypeId],
        cancel: &CancellationToken,
    ) -> GenerationResult {
        let mut result = GenerationResult::default();
        let mut resolver = ChainResolver::new(db, &self.options);
        let mut generated = 0usize;
        let mut skipped = 0usize;
        let mut blocked = 0usize;

        for &id in candidates {
            if cancel.is_cancelled() {
                tracing::debug!(
                    target: "ctorgen.engine",
                    "pass cancelled; abandoning remaining candidates"
                );
                result.cancelled = true;
                break;
            }
            match self.generate_one(db, id, &mut resolver) {
                TypeOutcome::Unit(unit) => {
                    generated += 1;
                    result.units.push(unit);
                }
                TypeOutcome::Skipped => skipped += 1,
                TypeOutcome::Blocked(diagnostic) => {
                    blocked += 1;
                    result.diagnostics.push(diagnostic);
                }
            }
        }

        tracing::debug!(
            target: "ctorgen.engine",
            generated,
            skipped,
            blocked,
            "constructor generation pass finished"
        );
        result
    }

    fn generate_one(
        &self,
        db: &dyn Database,
        id: TypeId,
        resolver: &mut ChainResolver<'_>,
    ) -> TypeOutcome {
        let data = db.type_data(id);
        if !data.is_generated() {
            tracing::trace!(
                target: "ctorgen.engine",
                type_name = %data.qualified_name(),
                "not a generation candidate"
            );
            return TypeOutcome::Skipped;
        }

        let fingerprint = type_fingerprint(db, id, &self.options);
        if let Some(outcome) = self.cache.lookup(id, fingerprint) {
            tracing::trace!(
                target: "ctorgen.cache",
                type_name = %data.qualified_name(),
                "cache hit"
            );
            return outcome;
        }

        let outcome = match resolver.resolve(id) {
            Ok(resolved) => match emit::emit_unit(data, &resolved, &self.options) {
                Some(unit) => TypeOutcome::Unit(unit),
                None => {
                    tracing::trace!(
                        target: "ctorgen.engine",
                        type_name = %data.qualified_name(),
                        "no constructor needed"
                    );
                    TypeOutcome::Skipped
                }
            },
            Err(err) => {
                tracing::debug!(
                    target: "ctorgen.engine",
                    type_name = %data.qualified_name(),
                    error = %err,
                    "generation blocked for this type"
                );
                TypeOutcome::Blocked(err.to_diagnostic())
            }
        };
        self.cache.store(id, fingerprint, outcome)
    }
}
