//! Ordered, de-duplicated string sets (hashtags, keywords, industries).

use serde::{Deserialize, Serialize};

/// Insertion-ordered set of non-empty, trimmed strings.
///
/// Duplicates are dropped on insert, so the first occurrence wins its
/// position. Deserialized lists go through the same normalisation.
///
/// # Examples
///
/// ```
/// use sparc_core::TagSet;
///
/// let tags = TagSet::from_csv("#AI, #Data,,#AI , #Cloud");
/// assert_eq!(tags.as_slice(), &["#AI", "#Data", "#Cloud"]);
/// assert_eq!(tags.joined(" "), "#AI #Data #Cloud");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse comma-separated user input.
    pub fn from_csv(input: &str) -> Self {
        input.split(',').collect()
    }

    /// Insert a tag, returning `false` when it was empty or already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        let tag = tag.trim();
        if tag.is_empty() || self.0.iter().any(|t| t == tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    /// Tags in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no tags.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Join the tags with a separator.
    pub fn joined(&self, separator: &str) -> String {
        self.0.join(separator)
    }

    /// Consume the set into its ordered tags.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl<S: Into<String>> From<Vec<S>> for TagSet {
    fn from(tags: Vec<S>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(tags: TagSet) -> Self {
        tags.0
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
