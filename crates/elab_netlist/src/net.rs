//! [`Net`] — a connection in the elaborated netlist.

use crate::data::DataChannels;
use crate::ids::{GateId, ModuleId, NetId};

/// One `(gate, pin)` endpoint of a net.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Endpoint {
    /// The gate the endpoint belongs to.
    pub gate: GateId,
    /// The pin name on that gate.
    pub pin: String,
}

/// A connection between gates: has sources (drivers) and destinations
/// (loads), and may be marked as a design-level global input/output.
#[derive(Clone, Debug)]
pub struct Net {
    id: NetId,
    name: String,
    sources: Vec<Endpoint>,
    destinations: Vec<Endpoint>,
    is_global_input: bool,
    is_global_output: bool,
    owner: Option<ModuleId>,
    data: DataChannels,
}

impl Net {
    pub(crate) fn new(id: NetId, name: String, owner: Option<ModuleId>) -> Self {
        Self {
            id,
            name,
            sources: Vec::new(),
            destinations: Vec::new(),
            is_global_input: false,
            is_global_output: false,
            owner,
            data: DataChannels::new(),
        }
    }

    /// This net's own ID.
    pub fn id(&self) -> NetId {
        self.id
    }

    /// This net's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The module this net was created under, if any.
    pub fn owner(&self) -> Option<ModuleId> {
        self.owner
    }

    /// Returns `true` if the net is marked as a design-level global input.
    pub fn is_global_input(&self) -> bool {
        self.is_global_input
    }

    /// Returns `true` if the net is marked as a design-level global output.
    pub fn is_global_output(&self) -> bool {
        self.is_global_output
    }

    pub(crate) fn set_global_input(&mut self, value: bool) {
        self.is_global_input = value;
    }

    pub(crate) fn set_global_output(&mut self, value: bool) {
        self.is_global_output = value;
    }

    /// Returns the net's driving `(gate, pin)` endpoints.
    pub fn sources(&self) -> &[Endpoint] {
        &self.sources
    }

    /// Returns the net's loading `(gate, pin)` endpoints.
    pub fn destinations(&self) -> &[Endpoint] {
        &self.destinations
    }

    /// Returns `true` if there are neither sources nor destinations and the
    /// net is not a global boundary net.
    pub fn is_dangling(&self) -> bool {
        self.sources.is_empty()
            && self.destinations.is_empty()
            && !self.is_global_input
            && !self.is_global_output
    }

    pub(crate) fn add_source(&mut self, endpoint: Endpoint) {
        if !self.sources.contains(&endpoint) {
            self.sources.push(endpoint);
        }
    }

    pub(crate) fn remove_source(&mut self, endpoint: &Endpoint) {
        self.sources.retain(|e| e != endpoint);
    }

    pub(crate) fn add_destination(&mut self, endpoint: Endpoint) {
        if !self.destinations.contains(&endpoint) {
            self.destinations.push(endpoint);
        }
    }

    pub(crate) fn remove_destination(&mut self, endpoint: &Endpoint) {
        self.destinations.retain(|e| e != endpoint);
    }

    pub(crate) fn data_mut(&mut self) -> &mut DataChannels {
        &mut self.data
    }

    /// Returns the entries recorded under the named data channel.
    pub fn data(&self, channel: &str) -> &[(String, String, String)] {
        self.data.get(channel)
    }
}
