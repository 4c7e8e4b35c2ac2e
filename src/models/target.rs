//! Desired course set.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Wire marker for [`Target::All`].
pub const ALL_MARKER: &str = "ALL";

/// The set of courses a student wants to complete.
///
/// Serialized as the string `"ALL"` or as an array of course IDs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Target {
    /// Every course in the catalog.
    #[default]
    All,
    /// An explicit set of course IDs. Unknown IDs are ignored.
    Ids(BTreeSet<String>),
}

impl Target {
    /// Creates an explicit target from any iterable of IDs.
    pub fn ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Target::Ids(ids.into_iter().map(Into::into).collect())
    }

    /// Whether the course is part of the desired set.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        match self {
            Target::All => true,
            Target::Ids(ids) => ids.contains(id),
        }
    }

    /// Whether this target selects the whole catalog.
    pub fn is_all(&self) -> bool {
        matches!(self, Target::All)
    }
}

impl Serialize for Target {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Target::All => serializer.serialize_str(ALL_MARKER),
            Target::Ids(ids) => ids.serialize(serializer),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TargetRepr {
    Marker(String),
    Ids(Vec<String>),
}

impl<'de> Deserialize<'de> for Target {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match TargetRepr::deserialize(deserializer)? {
            TargetRepr::Marker(s) if s == ALL_MARKER => Ok(Target::All),
            TargetRepr::Marker(s) => Err(de::Error::invalid_value(
                de::Unexpected::Str(&s),
                &"\"ALL\" or an array of course IDs",
            )),
            TargetRepr::Ids(ids) => Ok(Target::Ids(ids.into_iter().collect())),
        }
    }
}
