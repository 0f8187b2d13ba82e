//! [`Signal`] — a named wire inside an entity, or a binary literal.

use elab_common::Name;

/// A named signal reference: a wire inside an entity, a port, or (when
/// `binary` is set) a literal bit-string whose characters are each one
/// expanded bit.
///
/// The `size` invariant (spec.md §3): if `ranges_known` and `binary`, size
/// = `name.len()`; else if `ranges_known` and `ranges` is empty, size = 1;
/// else if `ranges_known`, size = the product of the dimension lengths;
/// else size is unknown (`-1`).
#[derive(Clone, Debug)]
pub struct Signal<N: Name> {
    /// The source line this signal reference was declared on.
    pub line: u32,
    /// The signal's name, or (if `binary`) its literal bit-string value.
    pub name: N,
    /// Index sets, one per dimension. Empty for a scalar.
    ranges: Vec<Vec<u32>>,
    /// `true` if `name` is a binary literal rather than an identifier.
    pub binary: bool,
    /// `true` once `ranges` reflects the signal's real bounds.
    ///
    /// Only the left side of a port assignment may start out `false`; the
    /// port-width validator (spec.md §4.D) fills it in from the target.
    ranges_known: bool,
    size: i64,
    attributes: Vec<(String, String, String)>,
}

impl<N: Name> Signal<N> {
    /// Constructs a signal reference and computes its cached size.
    pub fn new(line: u32, name: N, ranges: Vec<Vec<u32>>, binary: bool, ranges_known: bool) -> Self {
        let mut s = Self {
            line,
            name,
            ranges,
            binary,
            ranges_known,
            size: 0,
            attributes: Vec::new(),
        };
        s.recompute_size();
        s
    }

    /// Constructs a scalar signal reference with known, empty ranges.
    pub fn scalar(line: u32, name: N) -> Self {
        Self::new(line, name, Vec::new(), false, true)
    }

    /// Constructs a binary-literal signal reference (e.g. from a `'0'`/`'1'`
    /// constant or a multi-bit binary constant).
    pub fn binary_literal(line: u32, name: N) -> Self {
        Self::new(line, name, Vec::new(), true, true)
    }

    /// Returns the cached size: number of bits this signal reference spans,
    /// or `-1` if unknown.
    pub fn size(&self) -> i64 {
        self.size
    }

    /// Returns the signal's index-set ranges, one per dimension.
    pub fn ranges(&self) -> &[Vec<u32>] {
        &self.ranges
    }

    /// Returns `true` once `ranges` reflects the signal's real bounds.
    pub fn ranges_known(&self) -> bool {
        self.ranges_known
    }

    /// Overwrites the ranges (used by the port-width validator to fill in
    /// an unresolved left-hand-side port signal) and marks them known.
    pub fn set_ranges(&mut self, ranges: Vec<Vec<u32>>) {
        self.ranges = ranges;
        self.ranges_known = true;
        self.recompute_size();
    }

    /// Attaches an attribute (key, type, value) to this signal.
    pub fn add_attribute(&mut self, key: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((key.into(), ty.into(), value.into()));
    }

    /// Returns the attributes attached to this signal.
    pub fn attributes(&self) -> &[(String, String, String)] {
        &self.attributes
    }

    fn recompute_size(&mut self) {
        self.size = if !self.ranges_known {
            -1
        } else if self.binary {
            self.name.len() as i64
        } else if self.ranges.is_empty() {
            1
        } else {
            self.ranges.iter().map(|dim| dim.len() as i64).product()
        };
    }
}
