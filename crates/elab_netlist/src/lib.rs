//! The mutable netlist graph the elaborator writes into: nets, gates, and
//! the module hierarchy, plus the `"attribute"`/`"generic"` data channels
//! attachable to gates and modules.

#![warn(missing_docs)]

pub mod container;
pub mod data;
pub mod error;
pub mod gate;
pub mod ids;
pub mod module;
pub mod net;
pub mod store;

pub use container::{ContainerRef, NetlistContainer};
pub use error::NetlistError;
pub use gate::Gate;
pub use ids::{GateId, ModuleId, NetId};
pub use module::Module;
pub use net::{Endpoint, Net};
