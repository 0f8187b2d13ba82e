//! Opaque ID newtypes for the nets, gates, and modules held by the
//! [`crate::container::NetlistContainer`].

elab_common::define_id!(
    /// Opaque, copyable ID for a net.
    NetId
);

elab_common::define_id!(
    /// Opaque, copyable ID for a gate instance.
    GateId
);

elab_common::define_id!(
    /// Opaque, copyable ID for a module instance.
    ModuleId
);
