//! Configuration types deserialized from `elab.toml`.

use serde::Deserialize;

/// The name-ordering mode the elaborator runs under (spec.md §3, §9).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameMode {
    /// Two names are equal iff their bytes are identical.
    CaseSensitive,
    /// Two names are equal iff they are equal after ASCII upper-folding.
    CaseInsensitive,
}

impl Default for NameMode {
    fn default() -> Self {
        NameMode::CaseSensitive
    }
}

/// Top-level configuration for one elaboration run, parsed from `elab.toml`.
#[derive(Debug, Deserialize)]
pub struct ElabConfig {
    /// The name-ordering mode to elaborate under.
    #[serde(default)]
    pub name_mode: NameMode,
    /// The gate library name passed to `instantiate`/`parse_and_instantiate`.
    pub gate_library: String,
    /// Overrides the IR producer's choice of top entity by name, if set.
    #[serde(default)]
    pub top_entity: Option<String>,
}
