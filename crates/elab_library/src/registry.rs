//! Looking up a [`GateLibrary`] by the name passed to an elaboration run.

use crate::library::GateLibrary;
use elab_common::Name;
use std::collections::BTreeMap;

/// Resolves a gate library by name (the `gate_library_name` argument to the
/// core's public entry points, spec.md §6).
pub trait GateLibraryRegistry<N: Name> {
    /// Looks up a library by name.
    fn get(&self, name: &str) -> Option<&dyn GateLibrary<N>>;
}

/// An in-memory registry mapping library names to [`GateLibrary`] instances.
pub struct InMemoryLibraryRegistry<N: Name> {
    libraries: BTreeMap<String, Box<dyn GateLibrary<N>>>,
}

impl<N: Name> InMemoryLibraryRegistry<N> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            libraries: BTreeMap::new(),
        }
    }

    /// Registers a library under a name.
    pub fn with_library(mut self, name: impl Into<String>, library: impl GateLibrary<N> + 'static) -> Self {
        self.libraries.insert(name.into(), Box::new(library));
        self
    }
}

impl<N: Name> Default for InMemoryLibraryRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Name> GateLibraryRegistry<N> for InMemoryLibraryRegistry<N> {
    fn get(&self, name: &str) -> Option<&dyn GateLibrary<N>> {
        self.libraries.get(name).map(|b| b.as_ref())
    }
}
