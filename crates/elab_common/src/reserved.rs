//! Reserved literal strings used throughout the elaborator (spec.md §3, §6).
//!
//! These are the only strings ever compared as literals: constant-zero,
//! constant-one, and high-impedance signal names; the top-module and
//! top-entity bookkeeping names; the ground/power gate names; the two data
//! channels; and the alias suffix pattern.

/// Reserved signal name denoting constant-zero.
pub const ZERO: &str = "'0'";

/// Reserved signal name denoting constant-one.
pub const ONE: &str = "'1'";

/// Reserved signal name denoting high-impedance (no-connect marker).
pub const HIGH_Z: &str = "'Z'";

/// Name under which the top module is reserved in the netlist container.
pub const TOP_MODULE: &str = "top_module";

/// Literal bumped in `instance_name_occurrences` for the top entity (spec.md §4.E, §9).
pub const TOP_ENTITY: &str = "top_entity";

/// Name of the inserted ground driver gate.
pub const GLOBAL_GND: &str = "global_gnd";

/// Name of the inserted power driver gate.
pub const GLOBAL_VCC: &str = "global_vcc";

/// Data channel for entity/instance/signal attributes.
pub const ATTRIBUTE_CHANNEL: &str = "attribute";

/// Data channel for instance generic assignments.
pub const GENERIC_CHANNEL: &str = "generic";

/// Returns `true` if `s` is one of the three reserved literal signal names
/// (`'0'`, `'1'`, `'Z'`) that are never resolved through aliasing.
pub fn is_literal(s: &str) -> bool {
    s == ZERO || s == ONE || s == HIGH_Z
}
