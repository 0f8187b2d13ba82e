//! Entity Initializer (spec.md §4.C) — pre-expands every entity's ports,
//! internal signals, and intra-entity assignments once.

use crate::expand::expand;
use elab_common::Name;
use elab_ir::Entity;
use std::collections::BTreeMap;

/// Computes and caches `expanded_ports`, `expanded_signals`, and
/// `expanded_assignments` on `entity`.
///
/// Idempotent: re-invocation recomputes all three from scratch and
/// replaces the cache wholesale, rather than merging into what's there.
///
/// `expanded_assignments` is built by expanding each assignment's lhs and
/// rhs lists separately (rhs signals with `binary=true` expand bit-for-bit
/// like any other signal), concatenating across assignments in the order
/// declared, then zipping lhs bits to rhs bits pointwise. It is the
/// caller's responsibility that every assignment's expanded lhs and rhs
/// have equal length; a mismatch here is an upstream authoring bug that
/// this core does not detect — it only surfaces, downstream, as a missing
/// alias warning during merge scheduling.
pub fn initialize<N: Name>(entity: &mut Entity<N>) {
    let mut expanded_ports = BTreeMap::new();
    for (port_name, (_, signal)) in entity.ports() {
        expanded_ports.insert(port_name.clone(), expand(signal));
    }

    let mut expanded_signals = BTreeMap::new();
    for (signal_name, signal) in entity.signals() {
        expanded_signals.insert(signal_name.clone(), expand(signal));
    }

    let mut lhs_bits = Vec::new();
    let mut rhs_bits = Vec::new();
    for (lhs, rhs) in entity.assignments() {
        lhs_bits.extend(lhs.iter().flat_map(expand));
        rhs_bits.extend(rhs.iter().flat_map(expand));
    }

    let mut expanded_assignments = BTreeMap::new();
    for (lhs_bit, rhs_bit) in lhs_bits.into_iter().zip(rhs_bits) {
        expanded_assignments.insert(lhs_bit, rhs_bit);
    }

    entity.install_expansion_cache(expanded_ports, expanded_signals, expanded_assignments);
}

#[cfg(test)]
mod tests {
    use super::*;
    use elab_common::CaseSensitiveName as N;
    use elab_ir::{Direction, Signal};

    #[test]
    fn expands_ports_and_signals() {
        let mut e: Entity<N> = Entity::new(1, N::from_str("top"));
        e.add_port(
            Direction::In,
            Signal::new(1, N::from_str("i"), vec![vec![0, 1, 2, 3]], false, true),
        );
        e.add_signal(Signal::scalar(2, N::from_str("internal")));

        initialize(&mut e);

        assert!(e.is_initialized());
        assert_eq!(e.expanded_ports().get(&N::from_str("i")).unwrap().len(), 4);
        assert_eq!(e.expanded_signals().get(&N::from_str("internal")).unwrap().len(), 1);
    }

    #[test]
    fn zips_assignment_bits_pointwise() {
        let mut e: Entity<N> = Entity::new(1, N::from_str("top"));
        let lhs = vec![Signal::new(1, N::from_str("o"), vec![vec![0, 1]], false, true)];
        let rhs = vec![Signal::new(1, N::from_str("i"), vec![vec![0, 1]], false, true)];
        e.add_assignment(lhs, rhs);

        initialize(&mut e);

        assert_eq!(
            e.expanded_assignments().get(&N::from_str("o(0)")),
            Some(&N::from_str("i(0)"))
        );
        assert_eq!(
            e.expanded_assignments().get(&N::from_str("o(1)")),
            Some(&N::from_str("i(1)"))
        );
    }

    #[test]
    fn reinitializing_recomputes_from_scratch() {
        let mut e: Entity<N> = Entity::new(1, N::from_str("top"));
        e.add_signal(Signal::scalar(1, N::from_str("a")));
        initialize(&mut e);
        assert_eq!(e.expanded_signals().len(), 1);

        // A fresh initialize() call with no signals clears the old cache.
        let mut e2: Entity<N> = Entity::new(1, N::from_str("top"));
        initialize(&mut e2);
        assert!(e2.expanded_signals().is_empty());
        assert!(e2.is_initialized());
    }
}
