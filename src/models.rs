// src/models.rs

//! Plain data types shared by the parser, the help formatter and the validator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// --- TAG MODELS ---

/// The value stored for a tag name.
///
/// The first occurrence of a tag stores a `Single`; every later occurrence of the
/// same name turns the entry into a `Multi`, keeping encounter order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum TagValue {
    Single(String),
    Multi(Vec<String>),
}

impl TagValue {
    /// Returns the value if it is a plain string.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::Multi(_) => None,
        }
    }

    /// Returns every value in encounter order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(s) => vec![s.as_str()],
            Self::Multi(list) => list.iter().map(String::as_str).collect(),
        }
    }

    /// Folds another occurrence of the same tag into this value.
    pub(crate) fn push(&mut self, value: String) {
        match self {
            Self::Single(first) => {
                let first = std::mem::take(first);
                *self = Self::Multi(vec![first, value]);
            }
            Self::Multi(list) => list.push(value),
        }
    }
}

/// The tags parsed out of a single comment block.
///
/// Names are kept in first-encounter order so dumps are stable. This order is
/// never used for rendering; the [`AllowList`] decides that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    entries: Vec<(String, TagValue)>,
    // name -> position in `entries`
    index: HashMap<String, usize>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an occurrence of `name`, merging with earlier occurrences.
    pub fn insert(&mut self, name: &str, value: String) {
        let existing = self
            .index
            .get(name)
            .and_then(|&pos| self.entries.get_mut(pos));
        match existing {
            Some((_, existing)) => existing.push(value),
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries
                    .push((name.to_string(), TagValue::Single(value)));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.index
            .get(name)
            .and_then(|&pos| self.entries.get(pos))
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The implicit `description` entry, if it is still a plain string.
    pub fn description(&self) -> Option<&str> {
        self.get("description").and_then(TagValue::as_single)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for TagSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// --- ALLOW LIST ---

/// One allow-listed tag and whether its lines get re-indented on render.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AllowTag {
    pub name: String,
    #[serde(default)]
    pub align: bool,
}

impl AllowTag {
    pub fn new(name: impl Into<String>, align: bool) -> Self {
        Self {
            name: name.into(),
            align,
        }
    }
}

/// Ordered set of tags that are rendered as help text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "Vec<AllowTag>", into = "Vec<AllowTag>")]
pub struct AllowList {
    tags: Vec<AllowTag>,
}

/// Tags rendered when the host supplies no allow-list of its own.
pub const DEFAULT_ALLOW_TAGS: &[(&str, bool)] = &[
    ("description", false),
    ("usage", false),
    ("arguments", true),
    ("options", true),
    ("example", true),
];

impl Default for AllowList {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_ALLOW_TAGS)
    }
}

impl AllowList {
    /// An allow-list that renders nothing.
    pub fn empty() -> Self {
        Self { tags: Vec::new() }
    }

    pub fn from_pairs(pairs: &[(&str, bool)]) -> Self {
        let mut list = Self::empty();
        for (name, align) in pairs {
            list.set(name, *align);
        }
        list
    }

    /// Adds `name`, or updates its align flag in place if it is already listed.
    pub fn set(&mut self, name: &str, align: bool) {
        match self.tags.iter_mut().find(|t| t.name == name) {
            Some(tag) => tag.align = align,
            None => self.tags.push(AllowTag::new(name, align)),
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.tags.retain(|t| t.name != name);
    }

    /// The align flag for `name`, or `None` if it is not allowed.
    pub fn align_for(&self, name: &str) -> Option<bool> {
        self.tags.iter().find(|t| t.name == name).map(|t| t.align)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AllowTag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl From<Vec<AllowTag>> for AllowList {
    fn from(tags: Vec<AllowTag>) -> Self {
        let mut list = Self::empty();
        for tag in tags {
            list.set(&tag.name, tag.align);
        }
        list
    }
}

impl From<AllowList> for Vec<AllowTag> {
    fn from(list: AllowList) -> Self {
        list.tags
    }
}

// --- DEFINITION CONFIG (what a command declares, usually read from TOML) ---

/// Declarative argument entry, e.g. a `[[arguments]]` table.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentConfig {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
}

/// Declarative option entry, e.g. an `[[options]]` table.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionConfig {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub expects_value: bool,
    #[serde(default)]
    pub description: String,
}

/// The arguments and options a concrete command declares. Empty by default.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionConfig {
    #[serde(default)]
    pub arguments: Vec<ArgumentConfig>,
    #[serde(default)]
    pub options: Vec<OptionConfig>,
}

impl DefinitionConfig {
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty() && self.options.is_empty()
    }
}
