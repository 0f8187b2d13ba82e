//! Mutable elaboration state threaded through one `build_netlist` call
//! (spec.md §3's "global to one elaboration run" maps).

use std::collections::BTreeMap;

use elab_common::Name;
use elab_diagnostics::DiagnosticSink;
use elab_ir::{Direction, Entity};
use elab_library::GateType;
use elab_netlist::{ModuleId, NetId, NetlistContainer};

use crate::alias;

/// Where a net surviving merging is externally visible as a module's port.
pub struct ModulePortRecord {
    /// The port's direction on the module boundary.
    pub direction: Direction,
    /// The port name as written into the container.
    pub port_name: String,
    /// The module this net is a port of.
    pub module: ModuleId,
}

/// Owns the netlist under construction and every map the elaborator needs
/// for the duration of one `build_netlist` call. Dropped at return; a
/// fresh context is created per elaboration run (spec.md §9).
pub struct ElaborationContext<'a, N: Name> {
    /// The netlist under construction.
    pub container: NetlistContainer,
    /// The parsed IR, mutated in place by the Entity Initializer's caches.
    pub entities: BTreeMap<N, Entity<N>>,
    /// The gate library's types, reindexed into `N`'s ordering.
    pub gate_types: BTreeMap<N, GateType<N>>,
    /// Gate type names usable for ground insertion.
    pub gnd_types: Vec<N>,
    /// Gate type names usable for power insertion.
    pub vcc_types: Vec<N>,
    /// The diagnostic sink for this run.
    pub sink: &'a DiagnosticSink,
    /// Total observed occurrences of each internal signal name, design-wide.
    pub signal_name_occurrences: BTreeMap<N, u32>,
    /// Total observed occurrences of each instance name, design-wide.
    pub instance_name_occurrences: BTreeMap<N, u32>,
    /// Every created net, indexed by the alias that owns it.
    pub net_by_name: BTreeMap<N, NetId>,
    /// Pending wire-alias merges: master name → list of slave names.
    pub nets_to_merge: BTreeMap<N, Vec<N>>,
    /// Net → the module port it backs, maintained as a side-table so the
    /// merger can move port roles by rewriting a single entry.
    pub module_ports: BTreeMap<NetId, ModulePortRecord>,
    /// How many times each entity was instantiated, for the "defined but
    /// never instantiated" warning.
    pub instantiation_count: BTreeMap<N, u32>,
}

impl<'a, N: Name> ElaborationContext<'a, N> {
    /// Creates a fresh context over `entities`, ready to elaborate against
    /// `gate_types`.
    pub fn new(
        entities: BTreeMap<N, Entity<N>>,
        gate_types: BTreeMap<N, GateType<N>>,
        gnd_types: Vec<N>,
        vcc_types: Vec<N>,
        sink: &'a DiagnosticSink,
        design_name: impl Into<String>,
    ) -> Self {
        Self {
            container: NetlistContainer::new(design_name),
            entities,
            gate_types,
            gnd_types,
            vcc_types,
            sink,
            signal_name_occurrences: BTreeMap::new(),
            instance_name_occurrences: BTreeMap::new(),
            net_by_name: BTreeMap::new(),
            nets_to_merge: BTreeMap::new(),
            module_ports: BTreeMap::new(),
            instantiation_count: BTreeMap::new(),
        }
    }

    /// Derives a unique alias for a signal name, consulting and updating
    /// `signal_name_occurrences`.
    pub fn alias_signal(&mut self, name: &N) -> N {
        alias::unique(&mut self.signal_name_occurrences, name)
    }

    /// Derives a unique alias for an instance name, consulting and
    /// updating `instance_name_occurrences`.
    pub fn alias_instance(&mut self, name: &N) -> N {
        alias::unique(&mut self.instance_name_occurrences, name)
    }

    /// Records `alias` as the owning name of `net` in `net_by_name`.
    pub fn register_net(&mut self, alias: N, net: NetId) {
        self.net_by_name.insert(alias, net);
    }

    /// Schedules `slave` to be merged into `master` (the rhs of an
    /// assignment), per spec.md §4.E step 4.
    pub fn schedule_merge(&mut self, master: N, slave: N) {
        self.nets_to_merge.entry(master).or_default().push(slave);
    }
}
