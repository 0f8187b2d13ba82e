//! Top-Module Boundary & Finalization (spec.md §4.G) — applies surviving
//! module-port bindings, inserts ground/power drivers, and sweeps dangling
//! nets.

use elab_common::{reserved, Name};
use elab_ir::Direction;
use elab_netlist::NetId;

use crate::context::ElaborationContext;
use crate::errors;

/// Runs after [`crate::merger::merge_nets`]: binds surviving `module_ports`
/// entries onto their modules, inserts ground/power gates as needed, and
/// deletes every net left with no sources, destinations, or global mark.
///
/// Returns `false` (with fatal diagnostics already emitted) on a container
/// rejection or a missing ground/power gate type when one is required.
pub fn finalize<N: Name>(ctx: &mut ElaborationContext<N>) -> bool {
    if !apply_module_ports(ctx) {
        return false;
    }
    let gnd_types = ctx.gnd_types.clone();
    if !insert_literal_driver(ctx, reserved::ZERO, reserved::GLOBAL_GND, &gnd_types) {
        return false;
    }
    let vcc_types = ctx.vcc_types.clone();
    if !insert_literal_driver(ctx, reserved::ONE, reserved::GLOBAL_VCC, &vcc_types) {
        return false;
    }
    sweep_dangling_nets(ctx);
    true
}

fn apply_module_ports<N: Name>(ctx: &mut ElaborationContext<N>) -> bool {
    for (&net, record) in &ctx.module_ports {
        let result = match record.direction {
            Direction::In => ctx.container.set_input_port_name(record.module, record.port_name.clone(), net),
            Direction::Out => ctx.container.set_output_port_name(record.module, record.port_name.clone(), net),
            Direction::InOut => ctx
                .container
                .set_input_port_name(record.module, record.port_name.clone(), net)
                .and_then(|_| {
                    ctx.container
                        .set_output_port_name(record.module, record.port_name.clone(), net)
                }),
        };
        if let Err(e) = result {
            ctx.sink.emit(errors::container_rejection(e.to_string()));
            return false;
        }
    }
    true
}

/// Examines the permanent net named `literal` (`'0'`/`'1'`): if it has any
/// destination, instantiates `driver_name` under the first available gate
/// type in `candidate_types`, marks it ground/power, and sources the net
/// from it. Otherwise the net is deleted — it was never driven.
fn insert_literal_driver<N: Name>(
    ctx: &mut ElaborationContext<N>,
    literal: &str,
    driver_name: &str,
    candidate_types: &[N],
) -> bool {
    let Some(net_id) = ctx.net_by_name.get(&N::from_str(literal)).copied() else {
        return true;
    };
    let has_destination = match ctx.container.net(net_id) {
        Some(net) => !net.destinations().is_empty(),
        None => return true,
    };

    if !has_destination {
        if let Err(e) = ctx.container.delete_net(net_id) {
            ctx.sink.emit(errors::container_rejection(e.to_string()));
            return false;
        }
        ctx.net_by_name.remove(&N::from_str(literal));
        return true;
    }

    let Some(gate_type) = candidate_types.first() else {
        ctx.sink.emit(errors::library_lookup_failure(format!(
            "net {literal:?} needs a driver but the library declares no matching gate type"
        )));
        return false;
    };

    let top_module = ctx.container.top_module();
    let gate_id = match ctx
        .container
        .create_gate(top_module, driver_name.to_string(), gate_type.as_str().to_string())
    {
        Ok(id) => id,
        Err(e) => {
            ctx.sink.emit(errors::container_rejection(e.to_string()));
            return false;
        }
    };

    let mark_result = if literal == reserved::ZERO {
        ctx.container.mark_ground_gate(gate_id)
    } else {
        ctx.container.mark_power_gate(gate_id)
    };
    if let Err(e) = mark_result {
        ctx.sink.emit(errors::container_rejection(e.to_string()));
        return false;
    }

    let output_pin = gate_type_output_pin(ctx, gate_type);
    if let Err(e) = ctx.container.add_source(net_id, gate_id, output_pin) {
        ctx.sink.emit(errors::container_rejection(e.to_string()));
        return false;
    }

    true
}

fn gate_type_output_pin<N: Name>(ctx: &ElaborationContext<N>, gate_type_name: &N) -> String {
    ctx.gate_types
        .get(gate_type_name)
        .and_then(|gt| gt.get_output_pins().first())
        .map(|p| p.as_str().to_string())
        .unwrap_or_default()
}

fn sweep_dangling_nets<N: Name>(ctx: &mut ElaborationContext<N>) {
    let dangling: Vec<NetId> = ctx
        .container
        .nets()
        .filter(|(_, net)| net.is_dangling())
        .map(|(&id, _)| id)
        .collect();
    for net_id in dangling {
        let _ = ctx.container.delete_net(net_id);
    }
}
