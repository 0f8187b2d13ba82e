//! Signal Expander (spec.md §4.A) — turns a ranged/bused signal into an
//! ordered list of single-bit names.

use elab_common::Name;
use elab_ir::Signal;

/// Expands `signal` into its ordered list of single-bit names.
///
/// A binary literal expands to one name per character of its text. A
/// scalar (empty ranges) expands to `[name]` unchanged. Otherwise the
/// Cartesian product of `ranges` is enumerated in row-major order — the
/// first dimension varies slowest — emitting `name(i₁)(i₂)…(iₖ)` for every
/// index tuple.
///
/// Pure function of `signal`'s value: re-expansion always yields an
/// identical list.
pub fn expand<N: Name>(signal: &Signal<N>) -> Vec<N> {
    if signal.binary {
        return signal
            .name
            .as_str()
            .chars()
            .map(|c| N::from_str(&c.to_string()))
            .collect();
    }

    let ranges = signal.ranges();
    if ranges.is_empty() {
        return vec![signal.name.clone()];
    }

    let mut names = vec![signal.name.clone()];
    for dim in ranges {
        let mut next = Vec::with_capacity(names.len() * dim.len());
        for base in &names {
            for i in dim {
                next.push(base.concat(&format!("({i})")));
            }
        }
        names = next;
    }
    names
}
