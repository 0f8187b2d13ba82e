//! A single diagnostic message: severity, code, text, and source line.

use crate::code::DiagnosticCode;
use crate::severity::Severity;

/// A diagnostic emitted during elaboration.
///
/// Unlike a full compiler diagnostic, this carries only a source line
/// number and identifier names (spec.md §1: "Reporting source-level
/// diagnostics beyond line numbers and identifier names" is out of scope),
/// never a source snippet or span.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// The diagnostic's severity.
    pub severity: Severity,
    /// The diagnostic's structured code.
    pub code: DiagnosticCode,
    /// The human-readable message.
    pub message: String,
    /// The source line this diagnostic pertains to, if known.
    pub line: Option<u32>,
    /// Additional notes attached to the diagnostic.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates an error-severity diagnostic.
    pub fn error(code: DiagnosticCode, message: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            line,
            notes: Vec::new(),
        }
    }

    /// Creates a warning-severity diagnostic.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            line,
            notes: Vec::new(),
        }
    }

    /// Attaches a note, returning `self` for chaining.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} [{}] (line {line}): {}", self.severity, self.code, self.message),
            None => write!(f, "{} [{}]: {}", self.severity, self.code, self.message),
        }
    }
}
