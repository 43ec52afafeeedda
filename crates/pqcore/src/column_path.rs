use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Path from the schema root to a (possibly nested) column.
///
/// The dotted text form has no escaping, so a field name containing `.`
/// cannot round trip through [`ColumnPath::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ColumnPath {
    parts: Vec<String>,
}

impl ColumnPath {
    pub fn new(parts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        ColumnPath {
            parts: parts.into_iter().map(|p| p.into()).collect(),
        }
    }

    /// Path of the schema root, containing no segments.
    pub const fn root() -> Self {
        ColumnPath { parts: Vec::new() }
    }

    /// Parse a dot separated path. The empty string is the root path.
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            return Self::root();
        }
        ColumnPath::new(s.split('.'))
    }

    /// Return a new path with `part` appended.
    ///
    /// The new path owns its own storage. `self` is left untouched.
    pub fn extend(&self, part: impl Into<String>) -> Self {
        let mut parts = Vec::with_capacity(self.parts.len() + 1);
        parts.extend(self.parts.iter().cloned());
        parts.push(part.into());
        ColumnPath { parts }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Name of the leaf this path points to.
    pub fn leaf(&self) -> Option<&str> {
        self.parts.last().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn into_parts(self) -> Vec<String> {
        self.parts
    }
}

impl fmt::Display for ColumnPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.join("."))
    }
}

impl FromStr for ColumnPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ColumnPath::parse(s))
    }
}

impl From<Vec<String>> for ColumnPath {
    fn from(parts: Vec<String>) -> Self {
        ColumnPath { parts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_leaves_original() {
        let p1 = ColumnPath::parse("a.b");
        let p2 = p1.extend("c");

        assert_eq!("a.b.c", p2.to_string());
        assert_eq!("a.b", p1.to_string());
        assert_eq!(Some("c"), p2.leaf());
    }

    #[test]
    fn siblings_do_not_alias() {
        let base = ColumnPath::parse("a");
        let left = base.extend("x");
        let right = base.extend("y");

        assert_eq!("a.x", left.to_string());
        assert_eq!("a.y", right.to_string());
        assert_ne!(left.parts().as_ptr(), right.parts().as_ptr());
        assert_ne!(base.parts().as_ptr(), left.parts().as_ptr());
    }

    #[test]
    fn root() {
        let root = ColumnPath::root();
        assert_eq!("", root.to_string());
        assert!(root.is_empty());
        assert_eq!(None, root.leaf());
        assert_eq!(root, ColumnPath::parse(""));
        assert_eq!("leaf", root.extend("leaf").to_string());
    }

    #[test]
    fn parse_render_roundtrip() {
        for s in ["a", "a.b", "list.element.item", "a..b"] {
            let p: ColumnPath = s.parse().unwrap();
            assert_eq!(s, p.to_string());
            assert_eq!(p, ColumnPath::parse(&p.to_string()));
        }
    }

    #[test]
    fn dotted_segment_does_not_roundtrip() {
        let p = ColumnPath::new(["a.b", "c"]);
        let parsed = ColumnPath::parse(&p.to_string());

        assert_eq!(2, p.len());
        assert_eq!(3, parsed.len());
        assert_ne!(p, parsed);
    }
}
