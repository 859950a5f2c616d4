//! Person domain model.
//!
//! # Responsibility
//! - Define the directory record and its category tags.
//! - Keep the persisted JSON shape `{id, name, fact, tags?}` stable.
//!
//! # Invariants
//! - `id` is minted once at creation and never reused.
//! - `tags` keeps insertion order; duplicates are not rejected.
//! - A missing `tags` field decodes as an empty list.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier for one directory entry.
///
/// Freshly minted ids are random v4 UUIDs, but any string read back from
/// storage is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Mints a new collision-resistant id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for PersonId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for PersonId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Work,
    Personal,
    Outreach,
}

impl Tag {
    /// All tags in display order.
    pub const ALL: [Tag; 3] = [Tag::Work, Tag::Personal, Tag::Outreach];

    /// Wire/display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Outreach => "outreach",
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known tag labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl Display for UnknownTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown tag `{}`; expected work|personal|outreach",
            self.0
        )
    }
}

impl Error for UnknownTag {}

impl FromStr for Tag {
    type Err = UnknownTag;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "personal" => Ok(Self::Personal),
            "outreach" => Ok(Self::Outreach),
            _ => Err(UnknownTag(value.to_string())),
        }
    }
}

/// One directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Short free-text note about the person.
    pub fact: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Person {
    /// Creates a person with a freshly minted id.
    pub fn new(name: impl Into<String>, fact: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self::with_id(PersonId::generate(), name, fact, tags)
    }

    /// Creates a person with a caller-provided id.
    ///
    /// Used when identity already exists, e.g. fixtures or imported data.
    pub fn with_id(
        id: impl Into<PersonId>,
        name: impl Into<String>,
        fact: impl Into<String>,
        tags: Vec<Tag>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fact: fact.into(),
            tags,
        }
    }

    /// Returns whether this person carries `tag`.
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}
