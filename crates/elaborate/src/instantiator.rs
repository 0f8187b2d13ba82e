//! Recursive Instantiator (spec.md §4.E) — walks the instance tree from the
//! top entity down, creating modules, nets, and gates, and scheduling every
//! intra-entity wire-to-wire assignment for the Net Merger.

use std::collections::{BTreeMap, VecDeque};

use elab_common::{reserved, Name};
use elab_ir::{Direction, Instance};
use elab_library::GateType;
use elab_netlist::{ContainerRef, ModuleId};

use crate::context::{ElaborationContext, ModulePortRecord};
use crate::errors;
use crate::expand::expand;
use crate::initializer;

/// Elaborates `top_name` into `ctx.container`'s pre-existing top module.
///
/// Returns `false` (with fatal diagnostics already in `ctx.sink`) on any
/// unrecoverable error: an undeclared top entity, a width mismatch the
/// validator missed, an unresolvable signal, or a container rejection.
pub fn build_netlist<N: Name>(ctx: &mut ElaborationContext<N>, top_name: &N) -> bool {
    if !ctx.entities.contains_key(top_name) {
        ctx.sink.emit(errors::type_resolution_failure(
            0,
            format!("top entity {top_name:?} is not declared"),
        ));
        return false;
    }

    let all_entities: Vec<N> = ctx.entities.keys().cloned().collect();
    for name in &all_entities {
        ensure_initialized(ctx, name, true);
    }

    count_occurrences(ctx, top_name);

    for name in &all_entities {
        if name != top_name && !ctx.instantiation_count.contains_key(name) {
            ctx.sink.emit(errors::uninstantiated_entity(format!(
                "entity {name:?} is declared but never instantiated"
            )));
        }
    }

    *ctx.instance_name_occurrences
        .entry(N::from_str(reserved::TOP_ENTITY))
        .or_insert(0) += 1;

    if create_literal_nets(ctx).is_none() {
        return false;
    }

    let Some(top_assignments) = build_top_boundary(ctx, top_name) else {
        return false;
    };

    let top_module = ctx.container.top_module();
    if apply_entity_attributes(ctx, top_name, top_module).is_none() {
        return false;
    }
    let top_alias = ctx.alias_instance(&N::from_str(reserved::TOP_MODULE));
    if let Err(e) = ctx.container.set_module_name(top_module, top_alias.as_str().to_string()) {
        ctx.sink.emit(errors::container_rejection(e.to_string()));
        return false;
    }
    if let Err(e) = ctx.container.set_module_type(top_module, top_name.as_str().to_string()) {
        ctx.sink.emit(errors::container_rejection(e.to_string()));
        return false;
    }

    elaborate_entity(ctx, top_name, top_module, &top_assignments).is_some()
}

/// Force-initializes every entity that reached this point uninitialized
/// (spec.md §4.C's lazy-init and force-init paths collapse into this single
/// eager pass, since the occurrence pre-pass needs every entity's expansion
/// caches populated before it can walk them).
fn ensure_initialized<N: Name>(ctx: &mut ElaborationContext<N>, name: &N, warn_if_late: bool) {
    let Some(already) = ctx.entities.get(name).map(|e| e.is_initialized()) else {
        return;
    };
    if already {
        return;
    }
    if warn_if_late {
        ctx.sink.emit(errors::late_initialization(format!(
            "entity {name:?} was force-initialized; it should have been initialized before elaboration"
        )));
    }
    let mut entity = ctx.entities.remove(name).expect("checked present above");
    initializer::initialize(&mut entity);
    ctx.entities.insert(name.clone(), entity);
}

/// Creates the permanent `'0'`/`'1'` nets that every scope can merge a
/// constant assignment onto, before any entity body is elaborated.
///
/// `'Z'` deliberately gets no net: it is the no-connect marker, and every
/// site that resolves a bit to `'Z'` treats the missing `net_by_name` entry
/// as "leave this pin floating" rather than a failure.
fn create_literal_nets<N: Name>(ctx: &mut ElaborationContext<N>) -> Option<()> {
    for literal in [reserved::ZERO, reserved::ONE] {
        let net_id = match ctx.container.create_net(None, literal.to_string()) {
            Ok(id) => id,
            Err(e) => {
                ctx.sink.emit(errors::container_rejection(e.to_string()));
                return None;
            }
        };
        ctx.register_net(N::from_str(literal), net_id);
    }
    Some(())
}

/// Visits every instance edge reachable from `top_name`, following only
/// instances whose type resolves to a known entity, counting each
/// instantiation edge (not each distinct entity) into
/// `instantiation_count`, `signal_name_occurrences`, and
/// `instance_name_occurrences`.
fn count_occurrences<N: Name>(ctx: &mut ElaborationContext<N>, top_name: &N) {
    let mut queue = VecDeque::new();
    queue.push_back(top_name.clone());

    while let Some(name) = queue.pop_front() {
        *ctx.instantiation_count.entry(name.clone()).or_insert(0) += 1;

        let Some(entity) = ctx.entities.get(&name) else {
            continue;
        };

        for bit in entity.expanded_signals().values().flatten() {
            *ctx.signal_name_occurrences.entry(bit.clone()).or_insert(0) += 1;
        }

        let mut children = Vec::new();
        for instance in entity.instances().values() {
            *ctx.instance_name_occurrences
                .entry(instance.name.clone())
                .or_insert(0) += 1;
            if ctx.entities.contains_key(&instance.type_) {
                children.push(instance.type_.clone());
            }
        }
        queue.extend(children);
    }
}

/// Builds the top-level boundary nets: one literally-named net per expanded
/// top-port bit, marked as a global input/output/both per the port's
/// direction. Returns the identity map fed into the first recursive call as
/// `parent_assignments`.
fn build_top_boundary<N: Name>(ctx: &mut ElaborationContext<N>, top_name: &N) -> Option<BTreeMap<N, N>> {
    let top_bits: Vec<(N, Direction)> = {
        let top_entity = ctx.entities.get(top_name)?;
        let mut bits = Vec::new();
        for (port_name, (direction, _)) in top_entity.ports() {
            if let Some(expanded) = top_entity.expanded_ports().get(port_name) {
                for bit in expanded {
                    bits.push((bit.clone(), *direction));
                }
            }
        }
        bits
    };

    let mut top_assignments = BTreeMap::new();
    for (bit, direction) in top_bits {
        *ctx.signal_name_occurrences.entry(bit.clone()).or_insert(0) += 1;

        let net_id = match ctx.container.create_net(None, bit.as_str().to_string()) {
            Ok(id) => id,
            Err(e) => {
                ctx.sink.emit(errors::container_rejection(e.to_string()));
                return None;
            }
        };
        ctx.register_net(bit.clone(), net_id);

        let mark_result = match direction {
            Direction::In => ctx.container.mark_global_input(net_id),
            Direction::Out => ctx.container.mark_global_output(net_id),
            Direction::InOut => ctx
                .container
                .mark_global_input(net_id)
                .and_then(|_| ctx.container.mark_global_output(net_id)),
        };
        if let Err(e) = mark_result {
            ctx.sink.emit(errors::container_rejection(e.to_string()));
            return None;
        }

        top_assignments.insert(bit.clone(), bit);
    }

    Some(top_assignments)
}

/// Translates a bit name for merge scheduling or child-port binding: first
/// through `parent_assignments`, then through `signal_alias`, else accepted
/// unchanged if it is a reserved constant literal. Returns `None` if none of
/// those apply.
fn resolve_bit<N: Name>(
    parent_assignments: &BTreeMap<N, N>,
    signal_alias: &BTreeMap<N, N>,
    name: &N,
) -> Option<N> {
    if let Some(n) = parent_assignments.get(name) {
        return Some(n.clone());
    }
    if let Some(n) = signal_alias.get(name) {
        return Some(n.clone());
    }
    if reserved::is_literal(name.as_str()) {
        return Some(name.clone());
    }
    None
}

/// Elaborates one entity's body into `module` (spec.md §4.E steps 2-5):
/// module-port registration, local signal creation, intra-entity assignment
/// scheduling, and recursion into every child instance.
fn elaborate_entity<N: Name>(
    ctx: &mut ElaborationContext<N>,
    entity_name: &N,
    module: ModuleId,
    parent_assignments: &BTreeMap<N, N>,
) -> Option<()> {
    ensure_initialized(ctx, entity_name, false);

    let (expanded_ports, expanded_signals, expanded_assignments, signals, port_directions, instances) = {
        let entity = ctx.entities.get(entity_name)?;
        let expanded_ports = entity.expanded_ports().clone();
        let expanded_signals = entity.expanded_signals().clone();
        let expanded_assignments = entity.expanded_assignments().clone();
        let signals = entity.signals().clone();
        let port_directions: BTreeMap<N, Direction> = entity
            .ports()
            .iter()
            .map(|(name, (direction, _))| (name.clone(), *direction))
            .collect();
        let instances = entity.instances().clone();
        (expanded_ports, expanded_signals, expanded_assignments, signals, port_directions, instances)
    };

    // Step 2: every expanded port bit that the parent bound to one of its
    // own nets backs that net's role as a module port.
    for (port_name, bits) in &expanded_ports {
        let direction = port_directions.get(port_name).copied().unwrap_or(Direction::In);
        for bit in bits {
            if let Some(net_name) = parent_assignments.get(bit) {
                if let Some(&net_id) = ctx.net_by_name.get(net_name) {
                    ctx.module_ports.insert(
                        net_id,
                        ModulePortRecord {
                            direction,
                            port_name: bit.as_str().to_string(),
                            module,
                        },
                    );
                }
            }
        }
    }

    // Step 3: every expanded internal signal bit gets a fresh alias, a net
    // under that alias, and the declared signal's attributes.
    let mut signal_alias: BTreeMap<N, N> = BTreeMap::new();
    for (signal_name, bits) in &expanded_signals {
        let sig_attributes = signals
            .get(signal_name)
            .map(|s| s.attributes().to_vec())
            .unwrap_or_default();
        for bit in bits {
            let alias = ctx.alias_signal(bit);
            let net_id = match ctx.container.create_net(Some(module), alias.as_str().to_string()) {
                Ok(id) => id,
                Err(e) => {
                    ctx.sink.emit(errors::container_rejection(e.to_string()));
                    return None;
                }
            };
            ctx.register_net(alias.clone(), net_id);
            signal_alias.insert(bit.clone(), alias);
            for (key, ty, value) in &sig_attributes {
                let _ = ctx.container.set_data(
                    ContainerRef::Net(net_id),
                    reserved::ATTRIBUTE_CHANNEL,
                    key.clone(),
                    ty.clone(),
                    value.clone(),
                );
            }
        }
    }

    // Step 4: schedule every intra-entity assignment as a merge, master
    // being the rhs side.
    for (lhs_bit, rhs_bit) in &expanded_assignments {
        let resolved_lhs = resolve_bit(parent_assignments, &signal_alias, lhs_bit);
        let resolved_rhs = resolve_bit(parent_assignments, &signal_alias, rhs_bit);
        match (resolved_lhs, resolved_rhs) {
            (Some(lhs), Some(rhs)) => {
                if lhs.as_str() != reserved::HIGH_Z && rhs.as_str() != reserved::HIGH_Z {
                    ctx.schedule_merge(rhs, lhs);
                }
            }
            _ => ctx.sink.emit(errors::no_alias_for_merge(format!(
                "no alias for net in assignment {lhs_bit:?} = {rhs_bit:?}"
            ))),
        }
    }

    // Step 5: recurse into every child instance.
    for instance in instances.values() {
        elaborate_instance(ctx, instance, module, parent_assignments, &signal_alias)?;
    }

    Some(())
}

/// Elaborates one child instance: builds its flattened port-bit → target-net
/// map, then either recurses into a sub-entity or wires up a library gate.
fn elaborate_instance<N: Name>(
    ctx: &mut ElaborationContext<N>,
    instance: &Instance<N>,
    parent_module: ModuleId,
    parent_assignments: &BTreeMap<N, N>,
    signal_alias: &BTreeMap<N, N>,
) -> Option<()> {
    let mut instance_assignments: BTreeMap<N, N> = BTreeMap::new();
    for (port_sig, rhs_sigs) in instance.port_assignments().values() {
        let lhs_bits = expand(port_sig);
        let mut rhs_bits = Vec::new();
        for s in rhs_sigs {
            rhs_bits.extend(expand(s));
        }
        if lhs_bits.len() != rhs_bits.len() {
            ctx.sink.emit(errors::width_mismatch(
                instance.line,
                format!("instance {:?} port assignment bit-count mismatch", instance.name),
            ));
            return None;
        }
        for (lhs, rhs) in lhs_bits.into_iter().zip(rhs_bits) {
            match resolve_bit(parent_assignments, signal_alias, &rhs) {
                Some(target) => {
                    instance_assignments.insert(lhs, target);
                }
                None => {
                    ctx.sink.emit(errors::signal_resolution_failure(
                        instance.line,
                        format!("rhs bit {rhs:?} for instance {:?} resolves to nothing", instance.name),
                    ));
                    return None;
                }
            }
        }
    }

    let child_alias = ctx.alias_instance(&instance.name);

    if ctx.entities.contains_key(&instance.type_) {
        let child_module = match ctx.container.create_module(
            parent_module,
            child_alias.as_str().to_string(),
            instance.type_.as_str().to_string(),
        ) {
            Ok(id) => id,
            Err(e) => {
                ctx.sink.emit(errors::container_rejection(e.to_string()));
                return None;
            }
        };
        apply_entity_attributes(ctx, &instance.type_, child_module)?;
        apply_instance_data(ctx, instance, ContainerRef::Module(child_module));
        elaborate_entity(ctx, &instance.type_, child_module, &instance_assignments)?;
        return Some(());
    }

    let Some(gate_type) = ctx.gate_types.get(&instance.type_).cloned() else {
        ctx.sink.emit(errors::type_resolution_failure(
            instance.line,
            format!("type {:?} is neither entity nor gate type", instance.type_),
        ));
        return None;
    };

    let gate_id = match ctx.container.create_gate(
        parent_module,
        child_alias.as_str().to_string(),
        instance.type_.as_str().to_string(),
    ) {
        Ok(id) => id,
        Err(e) => {
            ctx.sink.emit(errors::container_rejection(e.to_string()));
            return None;
        }
    };
    apply_instance_data(ctx, instance, ContainerRef::Gate(gate_id));

    for (port_name, (port_sig, _)) in instance.port_assignments() {
        let Some(is_output) = gate_pin_is_output(&gate_type, port_name) else {
            ctx.sink.emit(errors::port_lookup_failure(
                instance.line,
                format!("unknown pin {port_name:?} on gate type {:?}", instance.type_),
            ));
            return None;
        };
        for bit in expand(port_sig) {
            let Some(net_name) = instance_assignments.get(&bit) else {
                ctx.sink.emit(errors::signal_resolution_failure(
                    instance.line,
                    format!("undeclared assigned signal {bit:?}"),
                ));
                return None;
            };
            if net_name.as_str() == reserved::HIGH_Z {
                continue;
            }
            let Some(&net_id) = ctx.net_by_name.get(net_name) else {
                ctx.sink.emit(errors::signal_resolution_failure(
                    instance.line,
                    format!("no net named {net_name:?}"),
                ));
                return None;
            };
            let pin = bit.as_str().to_string();
            let result = if is_output {
                ctx.container.add_source(net_id, gate_id, pin)
            } else {
                ctx.container.add_destination(net_id, gate_id, pin)
            };
            if let Err(e) = result {
                ctx.sink.emit(errors::container_rejection(e.to_string()));
                return None;
            }
        }
    }

    Some(())
}

/// Returns `Some(true)` if `pin_name` is one of the gate type's output pins
/// or output pin groups, `Some(false)` if it is an input pin or group, and
/// `None` if the gate type has no such pin.
fn gate_pin_is_output<N: Name>(gate_type: &GateType<N>, pin_name: &N) -> Option<bool> {
    if gate_type.get_output_pin_groups().contains_key(pin_name) || gate_type.get_output_pins().contains(pin_name) {
        Some(true)
    } else if gate_type.get_input_pin_groups().contains_key(pin_name) || gate_type.get_input_pins().contains(pin_name)
    {
        Some(false)
    } else {
        None
    }
}

/// Applies an instance's attributes and generic assignments onto its
/// realized module or gate.
fn apply_instance_data<N: Name>(ctx: &mut ElaborationContext<N>, instance: &Instance<N>, target: ContainerRef) {
    for (key, ty, value) in instance.attributes() {
        let _ = ctx
            .container
            .set_data(target, reserved::ATTRIBUTE_CHANNEL, key.clone(), ty.clone(), value.clone());
    }
    for (generic, (ty, value)) in instance.generic_assignments() {
        let _ = ctx
            .container
            .set_data(target, reserved::GENERIC_CHANNEL, generic.clone(), ty.clone(), value.clone());
    }
}

/// Applies an entity's own attributes onto the module realizing it.
fn apply_entity_attributes<N: Name>(ctx: &mut ElaborationContext<N>, entity_name: &N, module: ModuleId) -> Option<()> {
    let attrs = ctx.entities.get(entity_name)?.attributes().to_vec();
    for (key, ty, value) in attrs {
        let _ = ctx
            .container
            .set_data(ContainerRef::Module(module), reserved::ATTRIBUTE_CHANNEL, key, ty, value);
    }
    Some(())
}
