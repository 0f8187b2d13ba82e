//! The identifier type the elaborator is generic over.
//!
//! Port names, signal names, instance names, entity names, gate types, and
//! pin names are all instances of [`Name`]. The elaborator never compares
//! or hashes raw `String`s directly — every such operation goes through a
//! `Name` impl, so the IR producer can choose case-sensitive or
//! case-insensitive ordering without the elaborator's logic changing at
//! all. Two elaboration runs over the same design under the two orderings
//! produce isomorphic netlists but may assign different aliases.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

/// A name usable as a map key and for alias/expansion suffixing.
///
/// Implementors must provide a total order (`Ord`), string conversion, and
/// concatenation, matching the C++ source's reliance on a template string
/// type with operator `+` and `operator<`.
pub trait Name: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Constructs a name from a UTF-8 string slice.
    fn from_str(s: &str) -> Self;

    /// Borrows the name's UTF-8 content.
    fn as_str(&self) -> &str;

    /// Returns the number of bytes in the name (used for binary-literal sizing).
    fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Returns `true` if the name is empty.
    fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Concatenates `suffix` onto this name, returning a new name.
    fn concat(&self, suffix: &str) -> Self {
        let mut s = self.as_str().to_string();
        s.push_str(suffix);
        Self::from_str(&s)
    }

    /// Compares this name's text against a literal, using this name type's
    /// notion of equality (case-sensitive or case-insensitive).
    fn eq_str(&self, other: &str) -> bool {
        self == &Self::from_str(other)
    }
}

/// A case-sensitive name: two names are equal iff their bytes are identical.
///
/// The default ordering mode; equivalent to instantiating the C++ source's
/// `hdl_parser<T>` with `T = std::string`.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct CaseSensitiveName(String);

impl Name for CaseSensitiveName {
    fn from_str(s: &str) -> Self {
        Self(s.to_string())
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseSensitiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for CaseSensitiveName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A case-insensitive name: comparison and hashing fold ASCII letters to
/// uppercase (matching `case_insensitive_char_traits::eq`/`lt` in
/// `case_insensitive_string.h`), while the original casing is preserved for
/// display and for the text written into the netlist container.
///
/// Equivalent to instantiating the C++ source's `hdl_parser<T>` with
/// `T = case_insensitive_string`.
#[derive(Clone, Debug)]
pub struct CaseInsensitiveName(String);

impl CaseInsensitiveName {
    fn folded(&self) -> Vec<u8> {
        self.0.bytes().map(|b| b.to_ascii_uppercase()).collect()
    }
}

impl Name for CaseInsensitiveName {
    fn from_str(s: &str) -> Self {
        Self(s.to_string())
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseInsensitiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq for CaseInsensitiveName {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl Eq for CaseInsensitiveName {}

impl PartialOrd for CaseInsensitiveName {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CaseInsensitiveName {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.folded().cmp(&other.folded())
    }
}

impl Hash for CaseInsensitiveName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_sensitive_distinguishes_case() {
        let a = CaseSensitiveName::from_str("Clk");
        let b = CaseSensitiveName::from_str("clk");
        assert_ne!(a, b);
        assert!(a < b || b < a);
    }

    #[test]
    fn case_insensitive_folds_case() {
        let a = CaseInsensitiveName::from_str("Clk");
        let b = CaseInsensitiveName::from_str("CLK");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "Clk", "display form preserves original casing");
    }

    #[test]
    fn case_insensitive_hash_matches_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(CaseInsensitiveName::from_str("A"));
        assert!(!set.insert(CaseInsensitiveName::from_str("a")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn concat_appends_suffix() {
        let n = CaseSensitiveName::from_str("data");
        let m = n.concat("(0)");
        assert_eq!(m.as_str(), "data(0)");
    }

    #[test]
    fn eq_str_respects_case_mode() {
        let n = CaseInsensitiveName::from_str("RST");
        assert!(n.eq_str("rst"));
        let n = CaseSensitiveName::from_str("RST");
        assert!(!n.eq_str("rst"));
    }

    #[test]
    fn ordering_is_total_for_btreemap_keys() {
        use std::collections::BTreeMap;
        let mut m: BTreeMap<CaseSensitiveName, i32> = BTreeMap::new();
        m.insert(CaseSensitiveName::from_str("b"), 2);
        m.insert(CaseSensitiveName::from_str("a"), 1);
        let keys: Vec<_> = m.keys().map(|k| k.as_str().to_string()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
