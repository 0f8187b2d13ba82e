//! THE CORE: components A–G of the elaboration pipeline and the two public
//! entry points (spec.md §6).
//!
//! `parse()` itself — turning source HDL text into the IR this crate
//! consumes — is owned by a concrete HDL-specific producer and is out of
//! scope here; [`DesignSource`] is the seam that producer implements.

#![warn(missing_docs)]

pub mod alias;
pub mod boundary;
pub mod context;
pub mod errors;
pub mod expand;
pub mod initializer;
pub mod instantiator;
pub mod merger;
pub mod validator;

use std::collections::BTreeMap;

use elab_common::Name;
use elab_diagnostics::DiagnosticSink;
use elab_ir::Entity;
use elab_library::GateLibraryRegistry;
use elab_netlist::NetlistContainer;

use context::ElaborationContext;

/// Supplies the IR this crate elaborates: entities keyed by name, plus the
/// designated top entity (spec.md §3's "last entity" or a config override).
///
/// A concrete HDL-specific parser implements this over whatever it built
/// its IR into; the core never reads source text itself.
pub trait DesignSource<N: Name> {
    /// The entity to elaborate as the design's top.
    fn top_entity(&self) -> N;
    /// Consumes the source, handing the core ownership of every entity.
    fn into_entities(self) -> BTreeMap<N, Entity<N>>;
}

/// A [`DesignSource`] built directly from an entity map, for callers (and
/// tests) that already have IR in hand.
pub struct InMemoryDesign<N: Name> {
    entities: BTreeMap<N, Entity<N>>,
    top: N,
}

impl<N: Name> InMemoryDesign<N> {
    /// Wraps `entities` with `top` as the designated top entity.
    pub fn new(entities: BTreeMap<N, Entity<N>>, top: N) -> Self {
        Self { entities, top }
    }
}

impl<N: Name> DesignSource<N> for InMemoryDesign<N> {
    fn top_entity(&self) -> N {
        self.top.clone()
    }

    fn into_entities(self) -> BTreeMap<N, Entity<N>> {
        self.entities
    }
}

/// Runs `parse` (the external producer step, spec.md §6) and, on success,
/// elaborates its result exactly as [`instantiate`] does.
///
/// Returns `None` if `parse` itself fails, without touching the gate
/// library or emitting any diagnostic — parse failure is the producer's
/// own concern.
pub fn parse_and_instantiate<N, S>(
    parse: impl FnOnce() -> Option<S>,
    registry: &dyn GateLibraryRegistry<N>,
    gate_library_name: &str,
    design_name: impl Into<String>,
    sink: &DiagnosticSink,
) -> Option<NetlistContainer>
where
    N: Name,
    S: DesignSource<N>,
{
    let source = parse()?;
    instantiate(source, registry, gate_library_name, design_name, sink)
}

/// Elaborates `source` against the gate library named `gate_library_name`,
/// returning the finished netlist or `None` on any fatal diagnostic.
///
/// Runs the pipeline in order: resolve the gate library, validate every
/// instance's port widths (§4.D), recursively instantiate from the top
/// entity (§4.E), merge wire-only assignments (§4.F), then bind the
/// surviving module ports and insert ground/power drivers (§4.G). The
/// reserved `'0'`/`'1'` nets are created by the instantiator before any
/// instance body is walked, so a port binding can reference them from the
/// very first assignment.
pub fn instantiate<N, S>(
    source: S,
    registry: &dyn GateLibraryRegistry<N>,
    gate_library_name: &str,
    design_name: impl Into<String>,
    sink: &DiagnosticSink,
) -> Option<NetlistContainer>
where
    N: Name,
    S: DesignSource<N>,
{
    let Some(library) = registry.get(gate_library_name) else {
        sink.emit(errors::library_lookup_failure(format!(
            "unknown gate library {gate_library_name:?}"
        )));
        return None;
    };
    let gate_types = library.get_gate_types().clone();
    let gnd_types = library.get_gnd_gate_types().to_vec();
    let vcc_types = library.get_vcc_gate_types().to_vec();

    let top_name = source.top_entity();
    let mut entities = source.into_entities();

    if !validator::validate_instances(&mut entities, &gate_types, sink) {
        return None;
    }

    let mut ctx = ElaborationContext::new(entities, gate_types, gnd_types, vcc_types, sink, design_name);

    if !instantiator::build_netlist(&mut ctx, &top_name) {
        return None;
    }
    if !merger::merge_nets(&mut ctx) {
        return None;
    }
    if !boundary::finalize(&mut ctx) {
        return None;
    }

    Some(ctx.container)
}

#[cfg(test)]
mod tests {
    use super::*;
    use elab_common::CaseSensitiveName as N;
    use elab_ir::{Direction, Instance, Signal};
    use elab_library::{standard_library, InMemoryLibraryRegistry};

    fn registry() -> InMemoryLibraryRegistry<N> {
        InMemoryLibraryRegistry::new().with_library("standard", standard_library::<N>())
    }

    #[test]
    fn unknown_gate_library_fails_before_touching_entities() {
        let sink = DiagnosticSink::new();
        let design = InMemoryDesign::new(BTreeMap::new(), N::from_str("top"));
        let result = instantiate(design, &registry(), "missing", "design", &sink);
        assert!(result.is_none());
        assert!(sink.has_errors());
    }

    #[test]
    fn single_and2_instance_elaborates_to_a_wired_gate() {
        let mut top = Entity::new(1, N::from_str("top"));
        top.add_port(Direction::In, Signal::scalar(1, N::from_str("a")));
        top.add_port(Direction::In, Signal::scalar(1, N::from_str("b")));
        top.add_port(Direction::Out, Signal::scalar(1, N::from_str("y")));

        let mut inst = Instance::new(1, N::from_str("AND2"), N::from_str("u1"));
        inst.add_port_assignment(Signal::scalar(1, N::from_str("A")), vec![Signal::scalar(1, N::from_str("a"))]);
        inst.add_port_assignment(Signal::scalar(1, N::from_str("B")), vec![Signal::scalar(1, N::from_str("b"))]);
        inst.add_port_assignment(Signal::scalar(1, N::from_str("Y")), vec![Signal::scalar(1, N::from_str("y"))]);
        top.add_instance(inst);

        let mut entities = BTreeMap::new();
        entities.insert(N::from_str("top"), top);
        let design = InMemoryDesign::new(entities, N::from_str("top"));

        let sink = DiagnosticSink::new();
        let netlist = instantiate(design, &registry(), "standard", "design", &sink).expect("elaborates cleanly");

        let top_module = netlist.top_module();
        let gate = netlist
            .gates()
            .find(|(_, g)| g.name() == "u1")
            .map(|(id, _)| *id)
            .expect("u1 instantiated");
        assert_eq!(netlist.gate(gate).unwrap().type_name(), "AND2");

        let in_a = *netlist.module(top_module).unwrap().input_ports().get("a").unwrap();
        let in_b = *netlist.module(top_module).unwrap().input_ports().get("b").unwrap();
        let out_y = *netlist.module(top_module).unwrap().output_ports().get("y").unwrap();
        assert!(netlist.is_destination(in_a, gate, "A").unwrap());
        assert!(netlist.is_destination(in_b, gate, "B").unwrap());
        assert!(netlist.is_source(out_y, gate, "Y").unwrap());
    }

    #[test]
    fn undeclared_top_entity_fails() {
        let sink = DiagnosticSink::new();
        let design = InMemoryDesign::new(BTreeMap::new(), N::from_str("missing_top"));
        let result = instantiate(design, &registry(), "standard", "design", &sink);
        assert!(result.is_none());
        assert!(sink.has_errors());
    }

    #[test]
    fn parse_and_instantiate_short_circuits_on_parse_failure() {
        let sink = DiagnosticSink::new();
        let result: Option<NetlistContainer> =
            parse_and_instantiate(|| -> Option<InMemoryDesign<N>> { None }, &registry(), "standard", "design", &sink);
        assert!(result.is_none());
        assert!(!sink.has_errors());
    }

    #[test]
    fn parse_and_instantiate_runs_the_full_pipeline_on_success() {
        let mut top = Entity::new(1, N::from_str("top"));
        top.add_port(Direction::In, Signal::scalar(1, N::from_str("a")));
        top.add_port(Direction::Out, Signal::scalar(1, N::from_str("y")));
        top.add_assignment(vec![Signal::scalar(1, N::from_str("y"))], vec![Signal::scalar(1, N::from_str("a"))]);

        let mut entities = BTreeMap::new();
        entities.insert(N::from_str("top"), top);
        let design = InMemoryDesign::new(entities, N::from_str("top"));

        let sink = DiagnosticSink::new();
        let netlist = parse_and_instantiate(|| Some(design), &registry(), "standard", "design", &sink)
            .expect("parses and elaborates");
        let top_module = netlist.top_module();
        let net = *netlist.module(top_module).unwrap().input_ports().get("a").unwrap();
        assert_eq!(*netlist.module(top_module).unwrap().output_ports().get("y").unwrap(), net);
    }
}
