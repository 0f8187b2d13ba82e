//! Net Merger (spec.md §4.F) — folds every wire-only assignment's slave net
//! onto its master, sink-master first, until `nets_to_merge` is empty or a
//! cycle is detected.

use elab_common::{reserved, Name};
use elab_netlist::{ContainerRef, Net, NetId};

use crate::context::ElaborationContext;
use crate::errors;

/// Repeatedly picks a *sink master* — one whose slave list contains no name
/// that is itself a pending master — and folds its slaves into it.
///
/// Returns `false` (with a fatal cyclic-merge diagnostic already emitted)
/// if a full scan finds no sink master while merges remain pending.
pub fn merge_nets<N: Name>(ctx: &mut ElaborationContext<N>) -> bool {
    while !ctx.nets_to_merge.is_empty() {
        let sink_master = ctx
            .nets_to_merge
            .iter()
            .find(|(_, slaves)| slaves.iter().all(|slave| !ctx.nets_to_merge.contains_key(slave)))
            .map(|(master, _)| master.clone());

        let Some(master_name) = sink_master else {
            ctx.sink.emit(errors::cyclic_merge());
            return false;
        };

        let slaves = ctx.nets_to_merge.remove(&master_name).unwrap_or_default();

        if master_name.as_str() == reserved::HIGH_Z {
            continue;
        }
        let Some(&master_net) = ctx.net_by_name.get(&master_name) else {
            ctx.sink.emit(errors::no_alias_for_merge(format!(
                "merge master {master_name:?} has no registered net"
            )));
            continue;
        };

        for slave_name in slaves {
            if slave_name.as_str() == reserved::HIGH_Z || slave_name == master_name {
                continue;
            }
            let Some(&slave_net) = ctx.net_by_name.get(&slave_name) else {
                ctx.sink.emit(errors::no_alias_for_merge(format!(
                    "merge slave {slave_name:?} has no registered net"
                )));
                continue;
            };
            if slave_net == master_net {
                continue;
            }
            fold_slave_into_master(ctx, master_net, slave_net);
            ctx.net_by_name.remove(&slave_name);
        }
    }
    true
}

fn fold_slave_into_master<N: Name>(ctx: &mut ElaborationContext<N>, master: NetId, slave: NetId) {
    let (is_global_input, is_global_output, sources, destinations, data_channels) = {
        let Some(slave_net) = ctx.container.net(slave) else {
            return;
        };
        (
            slave_net.is_global_input(),
            slave_net.is_global_output(),
            slave_net.sources().to_vec(),
            slave_net.destinations().to_vec(),
            collect_data_channels(slave_net),
        )
    };

    if is_global_input {
        let _ = ctx.container.mark_global_input(master);
    }
    if is_global_output {
        let _ = ctx.container.mark_global_output(master);
    }

    for endpoint in &sources {
        let _ = ctx.container.add_source(master, endpoint.gate, endpoint.pin.clone());
    }
    for endpoint in &destinations {
        let _ = ctx.container.add_destination(master, endpoint.gate, endpoint.pin.clone());
    }

    for (channel, entries) in data_channels {
        for (key, ty, value) in entries {
            if ctx
                .container
                .set_data(ContainerRef::Net(master), &channel, key, ty, value)
                .is_err()
            {
                ctx.sink.emit(errors::data_set_failure(format!(
                    "failed to fold data channel {channel:?} from slave net onto master"
                )));
            }
        }
    }

    if let Some(record) = ctx.module_ports.remove(&slave) {
        ctx.module_ports.insert(master, record);
    }

    let _ = ctx.container.delete_net(slave);
}

fn collect_data_channels(net: &Net) -> Vec<(String, Vec<(String, String, String)>)> {
    const CHANNELS: [&str; 2] = [reserved::ATTRIBUTE_CHANNEL, reserved::GENERIC_CHANNEL];
    CHANNELS
        .iter()
        .map(|c| (c.to_string(), net.data(c).to_vec()))
        .filter(|(_, entries)| !entries.is_empty())
        .collect()
}
