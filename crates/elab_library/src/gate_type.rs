//! [`GateType`] — a library-provided leaf cell with fixed pins and groups.

use elab_common::Name;
use std::collections::BTreeMap;

/// A gate type: a fixed set of scalar input/output pins, plus named
/// multi-bit pin groups (e.g. a 4-bit input bus pin `A`).
///
/// Scalar pins have an implicit single-bit range; a pin group's bit
/// indices are the `Vec<u32>` stored under its name — this is the same
/// shape `Signal::ranges`'s single dimension takes, so the port-width
/// validator can drop it straight into a port-Signal's ranges.
#[derive(Clone, Debug)]
pub struct GateType<N: Name> {
    name: N,
    input_pins: Vec<N>,
    output_pins: Vec<N>,
    input_pin_groups: BTreeMap<N, Vec<u32>>,
    output_pin_groups: BTreeMap<N, Vec<u32>>,
}

impl<N: Name> GateType<N> {
    /// Creates a gate type with no pins.
    pub fn new(name: N) -> Self {
        Self {
            name,
            input_pins: Vec::new(),
            output_pins: Vec::new(),
            input_pin_groups: BTreeMap::new(),
            output_pin_groups: BTreeMap::new(),
        }
    }

    /// The gate type's name.
    pub fn name(&self) -> &N {
        &self.name
    }

    /// Declares a scalar input pin.
    pub fn with_input_pin(mut self, pin: N) -> Self {
        self.input_pins.push(pin);
        self
    }

    /// Declares a scalar output pin.
    pub fn with_output_pin(mut self, pin: N) -> Self {
        self.output_pins.push(pin);
        self
    }

    /// Declares a multi-bit input pin group spanning the given bit indices.
    pub fn with_input_pin_group(mut self, name: N, bits: Vec<u32>) -> Self {
        self.input_pin_groups.insert(name, bits);
        self
    }

    /// Declares a multi-bit output pin group spanning the given bit
    /// indices.
    pub fn with_output_pin_group(mut self, name: N, bits: Vec<u32>) -> Self {
        self.output_pin_groups.insert(name, bits);
        self
    }

    /// Returns the scalar input pins.
    pub fn get_input_pins(&self) -> &[N] {
        &self.input_pins
    }

    /// Returns the scalar output pins.
    pub fn get_output_pins(&self) -> &[N] {
        &self.output_pins
    }

    /// Returns the multi-bit input pin groups.
    pub fn get_input_pin_groups(&self) -> &BTreeMap<N, Vec<u32>> {
        &self.input_pin_groups
    }

    /// Returns the multi-bit output pin groups.
    pub fn get_output_pin_groups(&self) -> &BTreeMap<N, Vec<u32>> {
        &self.output_pin_groups
    }
}
