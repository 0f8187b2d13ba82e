//! [`Instance`] — a use-site of an entity or a library gate.

use crate::signal::Signal;
use elab_common::Name;
use std::collections::BTreeMap;

/// A use-site of an entity or library gate inside another entity.
///
/// The declared `type_` is resolved at validation time (spec.md §4.D) to
/// either a known entity or a gate type; an instance whose type matches
/// neither is a fatal "type neither entity nor gate type" error.
#[derive(Clone, Debug)]
pub struct Instance<N: Name> {
    /// The source line this instantiation was declared on.
    pub line: u32,
    /// The instantiated entity or gate type name.
    pub type_: N,
    /// The instance name (unique within its enclosing entity).
    pub name: N,
    /// Port name → (port-side signal, right-hand-side signal list).
    ///
    /// The port-side `Signal`'s `ranges_known` may start `false`; the
    /// port-width validator fills it in from the resolved target.
    port_assignments: BTreeMap<N, (Signal<N>, Vec<Signal<N>>)>,
    /// Generic name → (data type, value), as plain text.
    generic_assignments: BTreeMap<String, (String, String)>,
    attributes: Vec<(String, String, String)>,
}

impl<N: Name> Instance<N> {
    /// Creates a new, empty instance declaration.
    pub fn new(line: u32, type_: N, name: N) -> Self {
        Self {
            line,
            type_,
            name,
            port_assignments: BTreeMap::new(),
            generic_assignments: BTreeMap::new(),
            attributes: Vec::new(),
        }
    }

    /// Records a port assignment under the port's own name.
    pub fn add_port_assignment(&mut self, port: Signal<N>, assignment: Vec<Signal<N>>) {
        self.port_assignments
            .insert(port.name.clone(), (port, assignment));
    }

    /// Returns the port assignments, keyed by port name.
    pub fn port_assignments(&self) -> &BTreeMap<N, (Signal<N>, Vec<Signal<N>>)> {
        &self.port_assignments
    }

    /// Returns the port assignments mutably, keyed by port name (used by
    /// the port-width validator to fill in unresolved ranges).
    pub fn port_assignments_mut(&mut self) -> &mut BTreeMap<N, (Signal<N>, Vec<Signal<N>>)> {
        &mut self.port_assignments
    }

    /// Records a generic (parameter) assignment.
    pub fn add_generic_assignment(&mut self, generic: impl Into<String>, data_type: impl Into<String>, value: impl Into<String>) {
        self.generic_assignments
            .insert(generic.into(), (data_type.into(), value.into()));
    }

    /// Returns the generic assignments, keyed by generic name.
    pub fn generic_assignments(&self) -> &BTreeMap<String, (String, String)> {
        &self.generic_assignments
    }

    /// Attaches an attribute (key, type, value) to this instance.
    pub fn add_attribute(&mut self, key: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((key.into(), ty.into(), value.into()));
    }

    /// Returns the attributes attached to this instance.
    pub fn attributes(&self) -> &[(String, String, String)] {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elab_common::CaseSensitiveName as N;

    #[test]
    fn port_assignment_roundtrip() {
        let mut inst = Instance::new(1, N::from_str("AND2"), N::from_str("u1"));
        let port = Signal::scalar(1, N::from_str("A"));
        let rhs = vec![Signal::scalar(1, N::from_str("i(0)"))];
        inst.add_port_assignment(port, rhs);
        assert_eq!(inst.port_assignments().len(), 1);
        assert!(inst.port_assignments().contains_key(&N::from_str("A")));
    }

    #[test]
    fn generic_assignment_roundtrip() {
        let mut inst = Instance::new(1, N::from_str("counter"), N::from_str("u1"));
        inst.add_generic_assignment("WIDTH", "integer", "8");
        assert_eq!(
            inst.generic_assignments().get("WIDTH"),
            Some(&("integer".to_string(), "8".to_string()))
        );
    }

    #[test]
    fn attributes_accumulate() {
        let mut inst = Instance::new(1, N::from_str("AND2"), N::from_str("u1"));
        inst.add_attribute("LOC", "string", "X0Y0");
        assert_eq!(inst.attributes().len(), 1);
    }
}
