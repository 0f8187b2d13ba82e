//! Alias Generator (spec.md §4.B) — assigns collision-free suffixed names
//! per scope using global occurrence counts.

use elab_common::Name;
use std::collections::BTreeMap;

/// Returns a globally unique alias for `name`, consulting and updating
/// `occurrences` — the design-wide total-occurrence map produced by the
/// Recursive Instantiator's pre-pass (spec.md §4.E).
///
/// If `name`'s recorded count is below 2, it is unambiguous design-wide and
/// is returned unadorned, with no increment. Otherwise the same counter is
/// incremented in place and the alias `name + "__[" + k + "]__"` is
/// returned, where `k` is the post-increment value. Because the counter
/// already starts at the design-wide total when a name collides, every
/// occurrence of a colliding name gets suffixed — including what a reader
/// might expect to be the "first" one — there is no unadorned occurrence
/// once the total reaches 2. This mirrors the reference `get_unique_alias`
/// exactly, including that quirk.
pub fn unique<N: Name>(occurrences: &mut BTreeMap<N, u32>, name: &N) -> N {
    let count = occurrences.get(name).copied().unwrap_or(0);
    if count < 2 {
        return name.clone();
    }
    let counter = occurrences.entry(name.clone()).or_insert(0);
    *counter += 1;
    name.concat(&format!("__[{counter}]__"))
}
