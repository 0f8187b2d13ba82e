//! Port-Width Validator (spec.md §4.D) — matches every instance's port
//! assignments to the target entity's ports or the gate type's pin
//! groups, and checks widths.

use crate::errors;
use elab_common::Name;
use elab_diagnostics::DiagnosticSink;
use elab_ir::Entity;
use elab_library::GateType;
use std::collections::BTreeMap;

/// Runs the validator over every instance of every entity in `entities`.
///
/// Returns `false` (after emitting a fatal diagnostic for each failure) if
/// any instance's type fails to resolve, references an unknown port/pin,
/// or has a port-assignment width mismatch.
pub fn validate_instances<N: Name>(
    entities: &mut BTreeMap<N, Entity<N>>,
    gate_types: &BTreeMap<N, GateType<N>>,
    sink: &DiagnosticSink,
) -> bool {
    let names: Vec<N> = entities.keys().cloned().collect();
    let mut ok = true;
    for name in names {
        let mut entity = entities.remove(&name).expect("name came from entities.keys()");
        if !validate_entity(&mut entity, entities, gate_types, sink) {
            ok = false;
        }
        entities.insert(name, entity);
    }
    ok
}

fn validate_entity<N: Name>(
    entity: &mut Entity<N>,
    entities: &BTreeMap<N, Entity<N>>,
    gate_types: &BTreeMap<N, GateType<N>>,
    sink: &DiagnosticSink,
) -> bool {
    let mut ok = true;
    for instance in entity.instances_mut().values_mut() {
        let line = instance.line;
        if let Some(target_entity) = entities.get(&instance.type_) {
            for (port_name, (port_sig, rhs)) in instance.port_assignments_mut() {
                let Some((_, target_sig)) = target_entity.ports().get(port_name) else {
                    sink.emit(errors::port_lookup_failure(
                        line,
                        format!("unknown port {port_name:?} on entity {:?}", target_entity.name),
                    ));
                    ok = false;
                    continue;
                };
                if !port_sig.ranges_known() {
                    port_sig.set_ranges(target_sig.ranges().to_vec());
                }
                let rhs_size: i64 = rhs.iter().map(|s| s.size()).sum();
                if port_sig.size() != rhs_size {
                    sink.emit(errors::width_mismatch(
                        line,
                        format!(
                            "port {port_name:?} expects {} bits, got {rhs_size}",
                            port_sig.size()
                        ),
                    ));
                    ok = false;
                }
            }
        } else if let Some(gate_type) = gate_types.get(&instance.type_) {
            for (pin_name, (port_sig, rhs)) in instance.port_assignments_mut() {
                let group_bits = gate_type
                    .get_input_pin_groups()
                    .get(pin_name)
                    .or_else(|| gate_type.get_output_pin_groups().get(pin_name));
                let is_scalar_pin = gate_type.get_input_pins().contains(pin_name)
                    || gate_type.get_output_pins().contains(pin_name);

                if let Some(bits) = group_bits {
                    port_sig.set_ranges(vec![bits.clone()]);
                } else if is_scalar_pin {
                    port_sig.set_ranges(Vec::new());
                } else {
                    sink.emit(errors::port_lookup_failure(
                        line,
                        format!("unknown pin {pin_name:?} on gate type {:?}", gate_type.name()),
                    ));
                    ok = false;
                    continue;
                }

                let rhs_size: i64 = rhs.iter().map(|s| s.size()).sum();
                if port_sig.size() != rhs_size {
                    sink.emit(errors::width_mismatch(
                        line,
                        format!("pin {pin_name:?} expects {} bits, got {rhs_size}", port_sig.size()),
                    ));
                    ok = false;
                }
            }
        } else {
            sink.emit(errors::type_resolution_failure(
                line,
                format!("type {:?} is neither entity nor gate type", instance.type_),
            ));
            ok = false;
        }
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use elab_common::CaseSensitiveName as N;
    use elab_ir::{Direction, Instance, Signal};

    fn entity_with_port(name: &str, port: &str, bits: &[u32]) -> Entity<N> {
        let mut e = Entity::new(1, N::from_str(name));
        e.add_port(
            Direction::In,
            Signal::new(1, N::from_str(port), vec![bits.to_vec()], false, true),
        );
        e
    }

    #[test]
    fn entity_instance_fills_unresolved_ranges() {
        let mut entities = BTreeMap::new();
        entities.insert(N::from_str("sub"), entity_with_port("sub", "a", &[0, 1, 2, 3]));

        let mut top: Entity<N> = Entity::new(1, N::from_str("top"));
        let mut inst = Instance::new(2, N::from_str("sub"), N::from_str("u1"));
        let unresolved = Signal::new(2, N::from_str("a"), Vec::new(), false, false);
        let rhs = vec![Signal::new(2, N::from_str("i"), vec![vec![0, 1, 2, 3]], false, true)];
        inst.add_port_assignment(unresolved, rhs);
        top.add_instance(inst);
        entities.insert(N::from_str("top"), top);

        let gate_types = BTreeMap::new();
        let sink = DiagnosticSink::new();
        assert!(validate_instances(&mut entities, &gate_types, &sink));
        assert!(!sink.has_errors());

        let top = entities.get(&N::from_str("top")).unwrap();
        let inst = top.instances().get(&N::from_str("u1")).unwrap();
        let (port_sig, _) = inst.port_assignments().get(&N::from_str("a")).unwrap();
        assert!(port_sig.ranges_known());
        assert_eq!(port_sig.size(), 4);
    }

    #[test]
    fn width_mismatch_is_fatal() {
        let mut entities = BTreeMap::new();
        entities.insert(N::from_str("sub"), entity_with_port("sub", "a", &[0, 1, 2, 3]));

        let mut top: Entity<N> = Entity::new(1, N::from_str("top"));
        let mut inst = Instance::new(2, N::from_str("sub"), N::from_str("u1"));
        let unresolved = Signal::new(2, N::from_str("a"), Vec::new(), false, false);
        let rhs = vec![Signal::new(2, N::from_str("i"), vec![vec![0, 1, 2]], false, true)];
        inst.add_port_assignment(unresolved, rhs);
        top.add_instance(inst);
        entities.insert(N::from_str("top"), top);

        let gate_types = BTreeMap::new();
        let sink = DiagnosticSink::new();
        assert!(!validate_instances(&mut entities, &gate_types, &sink));
        assert!(sink.has_errors());
    }

    #[test]
    fn unknown_type_fails_as_neither_entity_nor_gate() {
        let mut entities = BTreeMap::new();
        let mut top: Entity<N> = Entity::new(1, N::from_str("top"));
        top.add_instance(Instance::new(2, N::from_str("mystery"), N::from_str("u1")));
        entities.insert(N::from_str("top"), top);

        let gate_types = BTreeMap::new();
        let sink = DiagnosticSink::new();
        assert!(!validate_instances(&mut entities, &gate_types, &sink));
    }

    #[test]
    fn gate_scalar_pin_gets_empty_ranges() {
        let mut entities = BTreeMap::new();
        let mut top: Entity<N> = Entity::new(1, N::from_str("top"));
        let mut inst = Instance::new(2, N::from_str("AND2"), N::from_str("u1"));
        let unresolved = Signal::new(2, N::from_str("A"), Vec::new(), false, false);
        let rhs = vec![Signal::scalar(2, N::from_str("i(0)"))];
        inst.add_port_assignment(unresolved, rhs);
        top.add_instance(inst);
        entities.insert(N::from_str("top"), top);

        let mut gate_types = BTreeMap::new();
        gate_types.insert(
            N::from_str("AND2"),
            GateType::new(N::from_str("AND2"))
                .with_input_pin(N::from_str("A"))
                .with_input_pin(N::from_str("B"))
                .with_output_pin(N::from_str("Y")),
        );

        let sink = DiagnosticSink::new();
        assert!(validate_instances(&mut entities, &gate_types, &sink));
    }
}
