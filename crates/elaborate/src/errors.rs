//! Diagnostic codes and constructors for the elaborator's error taxonomy
//! (spec.md §7).

use elab_diagnostics::{Category, Diagnostic, DiagnosticCode};

/// An unknown gate library, or a missing ground/power type when needed.
pub const E_LIBRARY_LOOKUP: DiagnosticCode = DiagnosticCode::new(Category::Error, 1);
/// An instance's type is neither a known entity nor a known gate type.
pub const E_TYPE_RESOLUTION: DiagnosticCode = DiagnosticCode::new(Category::Error, 2);
/// A port name is not on the target entity, or a pin name is not on the
/// target gate type.
pub const E_PORT_LOOKUP: DiagnosticCode = DiagnosticCode::new(Category::Error, 3);
/// A port assignment's lhs size does not equal the sum of its rhs sizes.
pub const E_WIDTH_MISMATCH: DiagnosticCode = DiagnosticCode::new(Category::Error, 4);
/// An rhs bit is neither a parent-scope binding, a local signal, nor a
/// literal.
pub const E_SIGNAL_RESOLUTION: DiagnosticCode = DiagnosticCode::new(Category::Error, 5);
/// The netlist container rejected a create/mark/add-source/add-destination
/// operation.
pub const E_CONTAINER_REJECTION: DiagnosticCode = DiagnosticCode::new(Category::Error, 6);
/// The net merger made no progress with pending merges remaining.
pub const E_CYCLIC_MERGE: DiagnosticCode = DiagnosticCode::new(Category::Error, 7);

/// An entity is declared in the IR but never instantiated.
pub const W_UNINSTANTIATED_ENTITY: DiagnosticCode = DiagnosticCode::new(Category::Warning, 1);
/// An entity reached the top instantiation without having been
/// initialized and was force-initialized.
pub const W_LATE_INITIALIZATION: DiagnosticCode = DiagnosticCode::new(Category::Warning, 2);
/// A scheduled merge endpoint had no alias to resolve it through.
pub const W_NO_ALIAS_FOR_MERGE: DiagnosticCode = DiagnosticCode::new(Category::Warning, 3);
/// A data-channel write failed while folding a slave's data onto its
/// merge master.
pub const W_DATA_SET_FAILURE: DiagnosticCode = DiagnosticCode::new(Category::Warning, 4);

/// An unknown gate library name, or a missing ground/power type.
pub fn library_lookup_failure(message: impl Into<String>) -> Diagnostic {
    Diagnostic::error(E_LIBRARY_LOOKUP, message, None)
}

/// An instance type that resolves to neither an entity nor a gate type.
pub fn type_resolution_failure(line: u32, message: impl Into<String>) -> Diagnostic {
    Diagnostic::error(E_TYPE_RESOLUTION, message, Some(line))
}

/// A port or pin name absent from its target.
pub fn port_lookup_failure(line: u32, message: impl Into<String>) -> Diagnostic {
    Diagnostic::error(E_PORT_LOOKUP, message, Some(line))
}

/// A port assignment whose lhs and rhs sizes disagree.
pub fn width_mismatch(line: u32, message: impl Into<String>) -> Diagnostic {
    Diagnostic::error(E_WIDTH_MISMATCH, message, Some(line))
}

/// An rhs bit that resolves to nothing: not bound, not local, not literal.
pub fn signal_resolution_failure(line: u32, message: impl Into<String>) -> Diagnostic {
    Diagnostic::error(E_SIGNAL_RESOLUTION, message, Some(line))
}

/// The netlist container refused a mutation.
pub fn container_rejection(message: impl Into<String>) -> Diagnostic {
    Diagnostic::error(E_CONTAINER_REJECTION, message, None)
}

/// The net merger found no sink master with pending merges remaining.
pub fn cyclic_merge() -> Diagnostic {
    Diagnostic::error(E_CYCLIC_MERGE, "cyclic dependency between signals", None)
}

/// An entity defined in the IR but never instantiated.
pub fn uninstantiated_entity(message: impl Into<String>) -> Diagnostic {
    Diagnostic::warning(W_UNINSTANTIATED_ENTITY, message, None)
}

/// An entity that reached the top instantiation uninitialized.
pub fn late_initialization(message: impl Into<String>) -> Diagnostic {
    Diagnostic::warning(W_LATE_INITIALIZATION, message, None)
}

/// A merge endpoint with no alias to resolve it through.
pub fn no_alias_for_merge(message: impl Into<String>) -> Diagnostic {
    Diagnostic::warning(W_NO_ALIAS_FOR_MERGE, message, None)
}

/// A non-fatal data-channel write failure during merging.
pub fn data_set_failure(message: impl Into<String>) -> Diagnostic {
    Diagnostic::warning(W_DATA_SET_FAILURE, message, None)
}
