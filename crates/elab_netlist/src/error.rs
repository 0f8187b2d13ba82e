//! Container-level rejections (spec.md §7's "container rejection" class).

use crate::ids::{GateId, ModuleId, NetId};

/// An operation the container refused to perform.
#[derive(Debug, thiserror::Error)]
pub enum NetlistError {
    /// A net with this name already exists.
    #[error("a net named {0:?} already exists")]
    DuplicateNetName(String),
    /// No net exists with this ID.
    #[error("no such net: {0:?}")]
    NoSuchNet(NetId),
    /// No gate exists with this ID.
    #[error("no such gate: {0:?}")]
    NoSuchGate(GateId),
    /// No module exists with this ID.
    #[error("no such module: {0:?}")]
    NoSuchModule(ModuleId),
}
