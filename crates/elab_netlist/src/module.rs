//! [`Module`] — an elaborated instance of an entity in the output netlist.

use crate::data::DataChannels;
use crate::ids::{ModuleId, NetId};
use std::collections::BTreeMap;

/// An elaborated instance of an entity, forming one node of the output
/// netlist's hierarchy.
#[derive(Clone, Debug)]
pub struct Module {
    id: ModuleId,
    name: String,
    type_name: String,
    parent: Option<ModuleId>,
    input_ports: BTreeMap<String, NetId>,
    output_ports: BTreeMap<String, NetId>,
    data: DataChannels,
}

impl Module {
    pub(crate) fn new(id: ModuleId, name: String, type_name: String, parent: Option<ModuleId>) -> Self {
        Self {
            id,
            name,
            type_name,
            parent,
            input_ports: BTreeMap::new(),
            output_ports: BTreeMap::new(),
            data: DataChannels::new(),
        }
    }

    /// This module's own ID.
    pub fn id(&self) -> ModuleId {
        self.id
    }

    /// The module instance's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The module's entity-type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The parent module, or `None` if this is the design's top module.
    pub fn parent(&self) -> Option<ModuleId> {
        self.parent
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_type_name(&mut self, type_name: String) {
        self.type_name = type_name;
    }

    pub(crate) fn set_input_port(&mut self, port_name: String, net: NetId) {
        self.input_ports.insert(port_name, net);
    }

    pub(crate) fn set_output_port(&mut self, port_name: String, net: NetId) {
        self.output_ports.insert(port_name, net);
    }

    /// Returns the module's input-port-name → net bindings.
    pub fn input_ports(&self) -> &BTreeMap<String, NetId> {
        &self.input_ports
    }

    /// Returns the module's output-port-name → net bindings.
    pub fn output_ports(&self) -> &BTreeMap<String, NetId> {
        &self.output_ports
    }

    pub(crate) fn data_mut(&mut self) -> &mut DataChannels {
        &mut self.data
    }

    /// Returns the entries recorded under the named data channel.
    pub fn data(&self, channel: &str) -> &[(String, String, String)] {
        self.data.get(channel)
    }
}
