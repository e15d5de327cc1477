//! Core shared types for ctorgen.
//!
//! This crate is intentionally small and dependency-free.

mod accessibility;
mod cancel;
mod idents;

pub use accessibility::Accessibility;
pub use cancel::CancellationToken;
pub use idents::{escape_identifier, is_reserved_keyword, parameter_name_for_field};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A structured diagnostic produced by the engine.
///
/// The engine has no view of source positions; the host maps diagnostics back
/// to declarations through the qualified type name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
    /// Qualified name of the type the diagnostic applies to.
    pub type_name: String,
}

impl Diagnostic {
    pub fn error(
        code: &'static str,
        message: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            type_name: type_name.into(),
        }
    }

    pub fn warning(
        code: &'static str,
        message: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            type_name: type_name.into(),
        }
    }
}
