//! [`Gate`] — an instantiated leaf cell in the elaborated netlist.

use crate::data::DataChannels;
use crate::ids::{GateId, ModuleId};

/// A leaf-cell instance under some module, of a named gate type.
#[derive(Clone, Debug)]
pub struct Gate {
    id: GateId,
    name: String,
    type_name: String,
    owner: ModuleId,
    is_ground: bool,
    is_power: bool,
    data: DataChannels,
}

impl Gate {
    pub(crate) fn new(id: GateId, name: String, type_name: String, owner: ModuleId) -> Self {
        Self {
            id,
            name,
            type_name,
            owner,
            is_ground: false,
            is_power: false,
            data: DataChannels::new(),
        }
    }

    /// This gate's own ID.
    pub fn id(&self) -> GateId {
        self.id
    }

    /// The gate instance's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The gate's library type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The module this gate was created under.
    pub fn owner(&self) -> ModuleId {
        self.owner
    }

    /// Returns `true` if this gate has been marked as the netlist's ground
    /// driver.
    pub fn is_ground(&self) -> bool {
        self.is_ground
    }

    /// Returns `true` if this gate has been marked as the netlist's power
    /// driver.
    pub fn is_power(&self) -> bool {
        self.is_power
    }

    pub(crate) fn set_ground(&mut self, value: bool) {
        self.is_ground = value;
    }

    pub(crate) fn set_power(&mut self, value: bool) {
        self.is_power = value;
    }

    pub(crate) fn data_mut(&mut self) -> &mut DataChannels {
        &mut self.data
    }

    /// Returns the entries recorded under the named data channel.
    pub fn data(&self, channel: &str) -> &[(String, String, String)] {
        self.data.get(channel)
    }
}
