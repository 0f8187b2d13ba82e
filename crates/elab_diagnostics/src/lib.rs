//! Structured diagnostics for the elaboration engine.
//!
//! Modeled on the teacher's `aion_diagnostics`, scoped down to line-number
//! locations since no source-text database is in scope for this core
//! (spec.md §1).

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use severity::Severity;
pub use sink::DiagnosticSink;
