//! [`NetlistContainer`] — the mutable graph the elaborator writes into.
//!
//! Owns every [`Net`], [`Gate`], and [`Module`] and exposes the mutation
//! surface spec.md §6 requires: creation, deletion, endpoint bookkeeping,
//! global/ground/power marking, and the `"attribute"`/`"generic"` data
//! channels. The elaborator keeps its own name→ref indices; the container
//! only enforces name uniqueness within the scopes spec.md §8 names.

use std::collections::HashMap;

use crate::error::NetlistError;
use crate::gate::Gate;
use crate::ids::{GateId, ModuleId, NetId};
use crate::module::Module;
use crate::net::{Endpoint, Net};
use crate::store::Store;
use elab_common::ArenaId;

/// Dispatches the `"attribute"`/`"generic"` data channel operations across
/// the three container object kinds that can carry them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContainerRef {
    /// A gate instance.
    Gate(GateId),
    /// A module instance.
    Module(ModuleId),
    /// A net.
    Net(NetId),
}

/// The netlist under construction: nets, gates, and the module hierarchy.
pub struct NetlistContainer {
    design_name: String,
    top_module: ModuleId,
    modules: Store<ModuleId, Module>,
    gates: Store<GateId, Gate>,
    nets: Store<NetId, Net>,
    net_names: HashMap<String, NetId>,
    gate_names: HashMap<(ModuleId, String), GateId>,
    module_names: HashMap<(Option<ModuleId>, String), ModuleId>,
}

impl NetlistContainer {
    /// Creates a container with a single, empty top module named
    /// `"top_module"`.
    pub fn new(design_name: impl Into<String>) -> Self {
        let mut modules = Store::new();
        let top_module = modules.insert(|id| Module::new(id, "top_module".to_string(), String::new(), None));
        let mut module_names = HashMap::new();
        module_names.insert((None, "top_module".to_string()), top_module);

        Self {
            design_name: design_name.into(),
            top_module,
            modules,
            gates: Store::new(),
            nets: Store::new(),
            net_names: HashMap::new(),
            gate_names: HashMap::new(),
            module_names,
        }
    }

    /// The design's name.
    pub fn design_name(&self) -> &str {
        &self.design_name
    }

    /// Sets the design's name.
    pub fn set_design_name(&mut self, name: impl Into<String>) {
        self.design_name = name.into();
    }

    /// The container's single, pre-existing top module.
    pub fn top_module(&self) -> ModuleId {
        self.top_module
    }

    /// Creates a child module under `parent`.
    pub fn create_module(
        &mut self,
        parent: ModuleId,
        name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Result<ModuleId, NetlistError> {
        if self.modules.get(parent).is_none() {
            return Err(NetlistError::NoSuchModule(parent));
        }
        let name = name.into();
        let key = (Some(parent), name.clone());
        if self.module_names.contains_key(&key) {
            return Err(NetlistError::DuplicateNetName(name));
        }
        let type_name = type_name.into();
        let id = self
            .modules
            .insert(|id| Module::new(id, name.clone(), type_name, Some(parent)));
        self.module_names.insert(key, id);
        Ok(id)
    }

    /// Renames a module (used to repurpose the pre-existing top module for
    /// the top entity).
    pub fn set_module_name(&mut self, module: ModuleId, name: impl Into<String>) -> Result<(), NetlistError> {
        let parent = self
            .modules
            .get(module)
            .ok_or(NetlistError::NoSuchModule(module))?
            .parent();
        let name = name.into();
        let old_name = self.modules.get(module).unwrap().name().to_string();
        self.module_names.remove(&(parent, old_name));
        self.module_names.insert((parent, name.clone()), module);
        self.modules.get_mut(module).unwrap().set_name(name);
        Ok(())
    }

    /// Sets a module's entity-type name.
    pub fn set_module_type(&mut self, module: ModuleId, type_name: impl Into<String>) -> Result<(), NetlistError> {
        self.modules
            .get_mut(module)
            .ok_or(NetlistError::NoSuchModule(module))?
            .set_type_name(type_name.into());
        Ok(())
    }

    /// Creates a gate under `owner`, auto-allocating its ID.
    pub fn create_gate(
        &mut self,
        owner: ModuleId,
        name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Result<GateId, NetlistError> {
        if self.modules.get(owner).is_none() {
            return Err(NetlistError::NoSuchModule(owner));
        }
        let name = name.into();
        let key = (owner, name.clone());
        if self.gate_names.contains_key(&key) {
            return Err(NetlistError::DuplicateNetName(name));
        }
        let type_name = type_name.into();
        let id = self
            .gates
            .insert(|id| Gate::new(id, name.clone(), type_name, owner));
        self.gate_names.insert(key, id);
        Ok(id)
    }

    /// Creates a net, failing if the name is already in use anywhere in the
    /// design (nets are named globally per spec.md §8).
    pub fn create_net(&mut self, owner: Option<ModuleId>, name: impl Into<String>) -> Result<NetId, NetlistError> {
        let name = name.into();
        if self.net_names.contains_key(&name) {
            return Err(NetlistError::DuplicateNetName(name));
        }
        let id = self
            .nets
            .insert(|id| Net::new(id, name.clone(), owner));
        self.net_names.insert(name, id);
        Ok(id)
    }

    /// Deletes a net.
    pub fn delete_net(&mut self, net: NetId) -> Result<(), NetlistError> {
        let removed = self.nets.remove(net).ok_or(NetlistError::NoSuchNet(net))?;
        self.net_names.remove(removed.name());
        Ok(())
    }

    /// Marks a net as a design-level global input.
    pub fn mark_global_input(&mut self, net: NetId) -> Result<(), NetlistError> {
        self.nets
            .get_mut(net)
            .ok_or(NetlistError::NoSuchNet(net))?
            .set_global_input(true);
        Ok(())
    }

    /// Marks a net as a design-level global output.
    pub fn mark_global_output(&mut self, net: NetId) -> Result<(), NetlistError> {
        self.nets
            .get_mut(net)
            .ok_or(NetlistError::NoSuchNet(net))?
            .set_global_output(true);
        Ok(())
    }

    /// Marks a gate as the netlist's ground driver.
    pub fn mark_ground_gate(&mut self, gate: GateId) -> Result<(), NetlistError> {
        self.gates
            .get_mut(gate)
            .ok_or(NetlistError::NoSuchGate(gate))?
            .set_ground(true);
        Ok(())
    }

    /// Marks a gate as the netlist's power driver.
    pub fn mark_power_gate(&mut self, gate: GateId) -> Result<(), NetlistError> {
        self.gates
            .get_mut(gate)
            .ok_or(NetlistError::NoSuchGate(gate))?
            .set_power(true);
        Ok(())
    }

    /// Adds `(gate, pin)` as a source (driver) of `net`.
    pub fn add_source(&mut self, net: NetId, gate: GateId, pin: impl Into<String>) -> Result<(), NetlistError> {
        if self.gates.get(gate).is_none() {
            return Err(NetlistError::NoSuchGate(gate));
        }
        self.nets
            .get_mut(net)
            .ok_or(NetlistError::NoSuchNet(net))?
            .add_source(Endpoint { gate, pin: pin.into() });
        Ok(())
    }

    /// Removes `(gate, pin)` from `net`'s sources, if present.
    pub fn remove_source(&mut self, net: NetId, gate: GateId, pin: impl Into<String>) -> Result<(), NetlistError> {
        self.nets
            .get_mut(net)
            .ok_or(NetlistError::NoSuchNet(net))?
            .remove_source(&Endpoint { gate, pin: pin.into() });
        Ok(())
    }

    /// Adds `(gate, pin)` as a destination (load) of `net`.
    pub fn add_destination(&mut self, net: NetId, gate: GateId, pin: impl Into<String>) -> Result<(), NetlistError> {
        if self.gates.get(gate).is_none() {
            return Err(NetlistError::NoSuchGate(gate));
        }
        self.nets
            .get_mut(net)
            .ok_or(NetlistError::NoSuchNet(net))?
            .add_destination(Endpoint { gate, pin: pin.into() });
        Ok(())
    }

    /// Removes `(gate, pin)` from `net`'s destinations, if present.
    pub fn remove_destination(&mut self, net: NetId, gate: GateId, pin: impl Into<String>) -> Result<(), NetlistError> {
        self.nets
            .get_mut(net)
            .ok_or(NetlistError::NoSuchNet(net))?
            .remove_destination(&Endpoint { gate, pin: pin.into() });
        Ok(())
    }

    /// Returns `true` if `(gate, pin)` is a recorded source of `net`.
    pub fn is_source(&self, net: NetId, gate: GateId, pin: &str) -> Result<bool, NetlistError> {
        let net = self.nets.get(net).ok_or(NetlistError::NoSuchNet(net))?;
        Ok(net.sources().iter().any(|e| e.gate == gate && e.pin == pin))
    }

    /// Returns `true` if `(gate, pin)` is a recorded destination of `net`.
    pub fn is_destination(&self, net: NetId, gate: GateId, pin: &str) -> Result<bool, NetlistError> {
        let net = self.nets.get(net).ok_or(NetlistError::NoSuchNet(net))?;
        Ok(net.destinations().iter().any(|e| e.gate == gate && e.pin == pin))
    }

    /// Appends a `(key, type, value)` entry to the named data channel on a
    /// gate, module, or net.
    pub fn set_data(
        &mut self,
        target: ContainerRef,
        channel: &str,
        key: impl Into<String>,
        ty: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), NetlistError> {
        let (key, ty, value) = (key.into(), ty.into(), value.into());
        match target {
            ContainerRef::Gate(id) => {
                self.gates
                    .get_mut(id)
                    .ok_or(NetlistError::NoSuchGate(id))?
                    .data_mut()
                    .set(channel, key, ty, value);
            }
            ContainerRef::Module(id) => {
                self.modules
                    .get_mut(id)
                    .ok_or(NetlistError::NoSuchModule(id))?
                    .data_mut()
                    .set(channel, key, ty, value);
            }
            ContainerRef::Net(id) => {
                self.nets
                    .get_mut(id)
                    .ok_or(NetlistError::NoSuchNet(id))?
                    .data_mut()
                    .set(channel, key, ty, value);
            }
        }
        Ok(())
    }

    /// Binds `port_name` to `net` as an input port of `module`.
    pub fn set_input_port_name(
        &mut self,
        module: ModuleId,
        port_name: impl Into<String>,
        net: NetId,
    ) -> Result<(), NetlistError> {
        if self.nets.get(net).is_none() {
            return Err(NetlistError::NoSuchNet(net));
        }
        self.modules
            .get_mut(module)
            .ok_or(NetlistError::NoSuchModule(module))?
            .set_input_port(port_name.into(), net);
        Ok(())
    }

    /// Binds `port_name` to `net` as an output port of `module`.
    pub fn set_output_port_name(
        &mut self,
        module: ModuleId,
        port_name: impl Into<String>,
        net: NetId,
    ) -> Result<(), NetlistError> {
        if self.nets.get(net).is_none() {
            return Err(NetlistError::NoSuchNet(net));
        }
        self.modules
            .get_mut(module)
            .ok_or(NetlistError::NoSuchModule(module))?
            .set_output_port(port_name.into(), net);
        Ok(())
    }

    /// Returns a net by ID.
    pub fn net(&self, id: NetId) -> Option<&Net> {
        self.nets.get(id)
    }

    /// Returns a gate by ID.
    pub fn gate(&self, id: GateId) -> Option<&Gate> {
        self.gates.get(id)
    }

    /// Returns a module by ID.
    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        self.modules.get(id)
    }

    /// Returns the net currently registered under `name`, if any.
    pub fn net_id_by_name(&self, name: &str) -> Option<NetId> {
        self.net_names.get(name).copied()
    }

    /// Iterates over all live nets.
    pub fn nets(&self) -> impl Iterator<Item = (&NetId, &Net)> {
        self.nets.iter()
    }

    /// Iterates over all live gates.
    pub fn gates(&self) -> impl Iterator<Item = (&GateId, &Gate)> {
        self.gates.iter()
    }

    /// Iterates over all live modules.
    pub fn modules(&self) -> impl Iterator<Item = (&ModuleId, &Module)> {
        self.modules.iter()
    }
}
