//! The gate library: a queryable catalog of leaf cell types the
//! elaborator instantiates library gates against.

#![warn(missing_docs)]

pub mod gate_type;
pub mod library;
pub mod registry;
pub mod standard;

pub use gate_type::GateType;
pub use library::{BasicGateLibrary, GateLibrary};
pub use registry::{GateLibraryRegistry, InMemoryLibraryRegistry};
pub use standard::standard_library;
