//! [`Entity`] — a declared hardware module in the IR, and its [`Direction`]s.

use crate::instance::Instance;
use crate::signal::Signal;
use elab_common::Name;
use std::collections::BTreeMap;

/// The direction of a port on an entity boundary.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    /// An input port.
    In,
    /// An output port.
    Out,
    /// A bidirectional port.
    InOut,
}

/// One entity in the IR: ports, internal signals, assignments, and
/// instantiations of other entities or library gates.
///
/// `expanded_ports`, `expanded_signals`, and `expanded_assignments` are
/// derived caches (spec.md §3) populated once by the Entity Initializer
/// (spec.md §4.C); they start empty and `initialized = false`.
#[derive(Clone, Debug)]
pub struct Entity<N: Name> {
    /// The source line this entity was declared on.
    pub line: u32,
    /// The entity's name.
    pub name: N,
    ports: BTreeMap<N, (Direction, Signal<N>)>,
    signals: BTreeMap<N, Signal<N>>,
    assignments: Vec<(Vec<Signal<N>>, Vec<Signal<N>>)>,
    instances: BTreeMap<N, Instance<N>>,
    attributes: Vec<(String, String, String)>,

    initialized: bool,
    expanded_ports: BTreeMap<N, Vec<N>>,
    expanded_signals: BTreeMap<N, Vec<N>>,
    expanded_assignments: BTreeMap<N, N>,
}

impl<N: Name> Entity<N> {
    /// Creates a new, empty entity declaration.
    pub fn new(line: u32, name: N) -> Self {
        Self {
            line,
            name,
            ports: BTreeMap::new(),
            signals: BTreeMap::new(),
            assignments: Vec::new(),
            instances: BTreeMap::new(),
            attributes: Vec::new(),
            initialized: false,
            expanded_ports: BTreeMap::new(),
            expanded_signals: BTreeMap::new(),
            expanded_assignments: BTreeMap::new(),
        }
    }

    /// Declares a port.
    pub fn add_port(&mut self, direction: Direction, signal: Signal<N>) {
        self.ports.insert(signal.name.clone(), (direction, signal));
    }

    /// Returns the entity's ports, keyed by port name.
    pub fn ports(&self) -> &BTreeMap<N, (Direction, Signal<N>)> {
        &self.ports
    }

    /// Declares an internal signal.
    pub fn add_signal(&mut self, signal: Signal<N>) {
        self.signals.insert(signal.name.clone(), signal);
    }

    /// Returns the entity's internal signals, keyed by signal name.
    pub fn signals(&self) -> &BTreeMap<N, Signal<N>> {
        &self.signals
    }

    /// Declares an intra-entity assignment `lhs = rhs`.
    pub fn add_assignment(&mut self, lhs: Vec<Signal<N>>, rhs: Vec<Signal<N>>) {
        self.assignments.push((lhs, rhs));
    }

    /// Returns the entity's intra-entity assignments, in declaration order.
    pub fn assignments(&self) -> &[(Vec<Signal<N>>, Vec<Signal<N>>)] {
        &self.assignments
    }

    /// Declares an instance (of another entity or a library gate).
    pub fn add_instance(&mut self, instance: Instance<N>) {
        self.instances.insert(instance.name.clone(), instance);
    }

    /// Returns the entity's instances, keyed by instance name.
    pub fn instances(&self) -> &BTreeMap<N, Instance<N>> {
        &self.instances
    }

    /// Returns the entity's instances mutably (used by the port-width
    /// validator to fill in unresolved port-assignment ranges).
    pub fn instances_mut(&mut self) -> &mut BTreeMap<N, Instance<N>> {
        &mut self.instances
    }

    /// Attaches an attribute (key, type, value) to this entity.
    pub fn add_attribute(&mut self, key: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((key.into(), ty.into(), value.into()));
    }

    /// Returns the attributes attached to this entity.
    pub fn attributes(&self) -> &[(String, String, String)] {
        &self.attributes
    }

    /// Returns `true` once the Entity Initializer has populated the
    /// expansion caches.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the per-port bit-level expansion cache.
    pub fn expanded_ports(&self) -> &BTreeMap<N, Vec<N>> {
        &self.expanded_ports
    }

    /// Returns the per-signal bit-level expansion cache.
    pub fn expanded_signals(&self) -> &BTreeMap<N, Vec<N>> {
        &self.expanded_signals
    }

    /// Returns the pointwise lhs-bit → rhs-bit assignment cache.
    pub fn expanded_assignments(&self) -> &BTreeMap<N, N> {
        &self.expanded_assignments
    }

    /// Installs the Entity Initializer's output, marking the entity
    /// initialized. Called exactly once per [`initialize`](crate::Entity::is_initialized)
    /// invocation; re-invoking replaces the previous cache wholesale,
    /// which is what makes `initialize` idempotent.
    pub fn install_expansion_cache(
        &mut self,
        expanded_ports: BTreeMap<N, Vec<N>>,
        expanded_signals: BTreeMap<N, Vec<N>>,
        expanded_assignments: BTreeMap<N, N>,
    ) {
        self.expanded_ports = expanded_ports;
        self.expanded_signals = expanded_signals;
        self.expanded_assignments = expanded_assignments;
        self.initialized = true;
    }
}
