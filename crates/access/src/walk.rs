//! Graph walker: follow a key sequence through a document

use crate::kind::is_truthy;
use crate::path::{Path, Segment};
use serde_json::Value;
use std::borrow::Cow;

/// Own property shared by arrays and strings
const LENGTH: &str = "length";

/// Resolve `path` against `root`.
///
/// Each step needs a truthy accumulator that owns the next key. The first
/// step that fails short-circuits the rest to `None`. An empty path resolves
/// to `root` itself.
///
/// Document data comes back borrowed. A string's characters and the `length`
/// of strings and arrays are computed, so they come back owned.
pub fn resolve<'a>(root: &'a Value, path: &Path) -> Option<Cow<'a, Value>> {
    path.iter().try_fold(Cow::Borrowed(root), |acc, segment| {
        if !is_truthy(&acc) {
            return None;
        }
        match acc {
            Cow::Borrowed(value) => property(value, segment),
            Cow::Owned(value) => property(&value, segment).map(|v| Cow::Owned(v.into_owned())),
        }
    })
}

/// Own property lookup on a single value
fn property<'a>(value: &'a Value, segment: &Segment) -> Option<Cow<'a, Value>> {
    match value {
        Value::Object(map) => map.get(&*segment.as_key()).map(Cow::Borrowed),
        Value::Array(items) => match segment.as_index() {
            Some(index) => items.get(index).map(Cow::Borrowed),
            None => is_length(segment).then(|| Cow::Owned(Value::from(items.len()))),
        },
        Value::String(text) => match segment.as_index() {
            Some(index) => text
                .chars()
                .nth(index)
                .map(|c| Cow::Owned(Value::String(c.to_string()))),
            None => is_length(segment).then(|| Cow::Owned(Value::from(text.chars().count()))),
        },
        _ => None,
    }
}

fn is_length(segment: &Segment) -> bool {
    segment.as_key() == LENGTH
}
