//! Named data channels ("attribute", "generic") attachable to gates and
//! modules, per spec.md §6's container interface.

use std::collections::BTreeMap;

/// A `(key, type, value)` triple stored under a named channel.
pub type DataEntry = (String, String, String);

/// Per-object storage for the `"attribute"` and `"generic"` data channels.
#[derive(Clone, Debug, Default)]
pub struct DataChannels {
    channels: BTreeMap<String, Vec<DataEntry>>,
}

impl DataChannels {
    /// Creates an empty channel set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry under the named channel.
    pub fn set(&mut self, channel: &str, key: String, ty: String, value: String) {
        self.channels
            .entry(channel.to_string())
            .or_default()
            .push((key, ty, value));
    }

    /// Returns the entries recorded under the named channel, in insertion
    /// order.
    pub fn get(&self, channel: &str) -> &[DataEntry] {
        self.channels
            .get(channel)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_roundtrip() {
        let mut d = DataChannels::new();
        d.set("attribute", "LOC".into(), "string".into(), "X0Y0".into());
        assert_eq!(d.get("attribute").len(), 1);
        assert_eq!(d.get("generic").len(), 0);
    }

}
