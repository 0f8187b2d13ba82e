//! The [`GateLibrary`] trait: a queryable catalog of gate types.

use crate::gate_type::GateType;
use elab_common::Name;
use std::collections::BTreeMap;

/// A queryable catalog of gate types, reindexed into the elaborator's name
/// ordering at load time (spec.md §3's `tmp_gate_types`).
pub trait GateLibrary<N: Name> {
    /// Returns every gate type this library declares, keyed by name.
    fn get_gate_types(&self) -> &BTreeMap<N, GateType<N>>;

    /// Returns the gate type names usable as a ground driver, in the
    /// library's own iteration order. Empty if ground insertion is
    /// impossible from this library.
    fn get_gnd_gate_types(&self) -> &[N];

    /// Returns the gate type names usable as a power driver, in the
    /// library's own iteration order. Empty if power insertion is
    /// impossible from this library.
    fn get_vcc_gate_types(&self) -> &[N];
}

/// A concrete, in-memory [`GateLibrary`] built up by [`Self::with_gate_type`].
#[derive(Clone, Debug)]
pub struct BasicGateLibrary<N: Name> {
    gate_types: BTreeMap<N, GateType<N>>,
    gnd_types: Vec<N>,
    vcc_types: Vec<N>,
}

impl<N: Name> BasicGateLibrary<N> {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self {
            gate_types: BTreeMap::new(),
            gnd_types: Vec::new(),
            vcc_types: Vec::new(),
        }
    }

    /// Adds a gate type to the library.
    pub fn with_gate_type(mut self, gate_type: GateType<N>) -> Self {
        self.gate_types.insert(gate_type.name().clone(), gate_type);
        self
    }

    /// Declares a gate type name as usable for ground insertion.
    pub fn with_gnd_type(mut self, name: N) -> Self {
        self.gnd_types.push(name);
        self
    }

    /// Declares a gate type name as usable for power insertion.
    pub fn with_vcc_type(mut self, name: N) -> Self {
        self.vcc_types.push(name);
        self
    }
}

impl<N: Name> Default for BasicGateLibrary<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Name> GateLibrary<N> for BasicGateLibrary<N> {
    fn get_gate_types(&self) -> &BTreeMap<N, GateType<N>> {
        &self.gate_types
    }

    fn get_gnd_gate_types(&self) -> &[N] {
        &self.gnd_types
    }

    fn get_vcc_gate_types(&self) -> &[N] {
        &self.vcc_types
    }
}
