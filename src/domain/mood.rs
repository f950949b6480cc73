//! Mood tags attached to diary entries

use crate::error::DiaryError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Label shown for a stored tag that is not part of the mood enumeration
pub const FALLBACK_LABEL: &str = "📝 Note";

/// The closed set of moods an entry can be written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Bright,
    #[default]
    Calm,
    Reflective,
    Stormy,
}

impl Mood {
    /// Every mood, in display order
    pub const ALL: [Mood; 4] = [Mood::Bright, Mood::Calm, Mood::Reflective, Mood::Stormy];

    /// Tag used in persisted entries
    pub fn tag(&self) -> &'static str {
        match self {
            Mood::Bright => "bright",
            Mood::Calm => "calm",
            Mood::Reflective => "reflective",
            Mood::Stormy => "stormy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Bright => "😊 Bright",
            Mood::Calm => "😌 Calm",
            Mood::Reflective => "🧠 Reflective",
            Mood::Stormy => "🌧️ Stormy",
        }
    }

    /// Icon part of the label
    pub fn icon(&self) -> &'static str {
        self.label().split(' ').next().unwrap_or_default()
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Mood {
    type Err = DiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bright" => Ok(Mood::Bright),
            "calm" => Ok(Mood::Calm),
            "reflective" => Ok(Mood::Reflective),
            "stormy" => Ok(Mood::Stormy),
            _ => Err(DiaryError::InvalidMood(s.to_string())),
        }
    }
}

/// Mood tag as stored on an entry.
///
/// Persisted data may carry tags outside the enumeration, including `null`,
/// non-string values or no `mood` key at all. They are kept verbatim so a
/// load/save cycle never rewrites them, and they render with
/// [`FALLBACK_LABEL`]. New tags can only be produced from a [`Mood`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoodTag(Option<Value>);

impl MoodTag {
    /// The mood this tag names, if it is a known one.
    ///
    /// Matching is exact: stored tags are compared against the lowercase
    /// enumeration tags without normalization.
    pub fn mood(&self) -> Option<Mood> {
        let tag = self.as_str()?;
        Mood::ALL.into_iter().find(|mood| mood.tag() == tag)
    }

    pub fn label(&self) -> &'static str {
        self.mood().map_or(FALLBACK_LABEL, |mood| mood.label())
    }

    /// The stored tag when it is a string
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_ref().and_then(Value::as_str)
    }

    /// True when the record had no `mood` key
    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Mood> for MoodTag {
    fn from(mood: Mood) -> Self {
        MoodTag(Some(Value::String(mood.tag().to_string())))
    }
}

impl Serialize for MoodTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for MoodTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| MoodTag(Some(value)))
    }
}

impl fmt::Display for MoodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(Value::String(tag)) => f.write_str(tag),
            Some(value) => write!(f, "{}", value),
            None => Ok(()),
        }
    }
}
