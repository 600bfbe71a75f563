//! Path normalization
//!
//! Turns `"user.addresses[0].city"` into the key sequence
//! `["user", "addresses", "0", "city"]`.
//!
//! Only a single decimal digit inside brackets is recognised as an index.
//! `items[12]` stays one literal key, and any other bracket content is plain
//! text. `,` separates keys as well as `.`.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// `[d]` with exactly one ASCII digit
static BRACKET_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([0-9])\]").expect("bracket index pattern is valid"));

/// One step of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Segment {
    /// Property name. Also addresses an array element when it is the
    /// canonical decimal form of the index.
    Key(String),
    /// Array index (or an object member named by its decimal form)
    Index(usize),
}

impl Segment {
    /// The key as a property name
    pub fn as_key(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Self::Key(key) => std::borrow::Cow::Borrowed(key),
            Self::Index(index) => std::borrow::Cow::Owned(index.to_string()),
        }
    }

    /// The key as an array index, if it names one
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Key(key) => parse_canonical_index(key),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// `"0"`, `"7"`, `"42"` but not `"07"`, `"+1"` or `""`
fn parse_canonical_index(key: &str) -> Option<usize> {
    let canonical = key == "0" || (!key.starts_with('0') && key.bytes().all(|b| b.is_ascii_digit()));
    if canonical { key.parse().ok() } else { None }
}

/// An ordered, already-normalized key sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<Segment>);

impl Path {
    /// Parse a dotted/bracketed path string
    ///
    /// - `"a.b"` -> `["a", "b"]`
    /// - `"list[1]"` -> `["list", "1"]`
    /// - `"m[0][1]"` -> `["m", "0", "1"]`
    /// - `"list[12]"` -> `["list[12]"]`
    pub fn parse(path: &str) -> Self {
        path.split('.')
            .flat_map(|piece| {
                let spliced = BRACKET_INDEX.replace_all(piece, ",${1}");
                spliced
                    .split(',')
                    .map(|key| Segment::Key(key.to_owned()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.0.iter()
    }

    /// Append a segment, builder style
    pub fn push(mut self, segment: impl Into<Segment>) -> Self {
        self.0.push(segment.into());
        self
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

/// Anything that can be normalized into a [`Path`].
///
/// Strings are parsed; paths and segment sequences pass through untouched,
/// which is what makes [`normalize`] idempotent.
pub trait IntoPath {
    fn into_path(self) -> Path;
}

impl IntoPath for Path {
    fn into_path(self) -> Path {
        self
    }
}

impl IntoPath for &Path {
    fn into_path(self) -> Path {
        self.clone()
    }
}

impl IntoPath for &str {
    fn into_path(self) -> Path {
        Path::parse(self)
    }
}

impl IntoPath for String {
    fn into_path(self) -> Path {
        Path::parse(&self)
    }
}

impl IntoPath for &String {
    fn into_path(self) -> Path {
        Path::parse(self)
    }
}

impl IntoPath for Vec<Segment> {
    fn into_path(self) -> Path {
        Path(self)
    }
}

impl IntoPath for &[Segment] {
    fn into_path(self) -> Path {
        Path(self.to_vec())
    }
}

impl<const N: usize> IntoPath for [Segment; N] {
    fn into_path(self) -> Path {
        Path(self.into())
    }
}

/// Normalize a path string (or pass through an existing key sequence)
pub fn normalize(path: impl IntoPath) -> Path {
    path.into_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(path: &Path) -> Vec<String> {
        path.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(keys(&Path::parse("user")), vec!["user"]);
    }

    #[test]
    fn test_parse_nested() {
        assert_eq!(keys(&Path::parse("user.name")), vec!["user", "name"]);
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(keys(&Path::parse("items[0]")), vec!["items", "0"]);
        assert_eq!(
            keys(&Path::parse("data[3].value")),
            vec!["data", "3", "value"]
        );
    }

    #[test]
    fn test_parse_multiple_indices() {
        assert_eq!(keys(&Path::parse("matrix[0][1]")), vec!["matrix", "0", "1"]);
    }

    #[test]
    fn test_multi_digit_index_stays_literal() {
        assert_eq!(keys(&Path::parse("list[12]")), vec!["list[12]"]);
        assert_eq!(keys(&Path::parse("list[a]")), vec!["list[a]"]);
        assert_eq!(keys(&Path::parse("list[]")), vec!["list[]"]);
    }

    #[test]
    fn test_text_after_bracket_sticks_to_digit() {
        assert_eq!(keys(&Path::parse("a[1]b")), vec!["a", "1b"]);
    }

    #[test]
    fn test_comma_separates_keys() {
        assert_eq!(keys(&Path::parse("a,b.c")), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_pieces_are_kept() {
        assert_eq!(keys(&Path::parse("")), vec![""]);
        assert_eq!(keys(&Path::parse("a..b")), vec!["a", "", "b"]);
    }

    #[test]
    fn test_normalize_passes_sequences_through() {
        let path = Path::default().push("a").push(3usize);
        assert_eq!(normalize(&path), path);
        assert_eq!(normalize(normalize("x.y[2]")), normalize("x.y[2]"));
        assert_eq!(
            normalize(vec![Segment::from("a[1]")]).segments(),
            &[Segment::Key("a[1]".into())]
        );
    }

    #[test]
    fn test_display_and_serialize() {
        let path = Path::parse("list[1].name");
        assert_eq!(path.to_string(), "list.1.name");
        assert_eq!(
            serde_json::to_value(Path::default().push("a").push(2usize)).unwrap(),
            serde_json::json!(["a", 2])
        );
    }

    #[test]
    fn test_canonical_index() {
        assert_eq!(Segment::from("0").as_index(), Some(0));
        assert_eq!(Segment::from("42").as_index(), Some(42));
        assert_eq!(Segment::from("07").as_index(), None);
        assert_eq!(Segment::from("").as_index(), None);
        assert_eq!(Segment::from("-1").as_index(), None);
        assert_eq!(Segment::from(5usize).as_key(), "5");
    }
}
