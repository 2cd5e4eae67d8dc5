use std::collections::BTreeMap;

use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;

use crate::recipe::{self, Recipe};

/// Placeholder shown for a date whose meal is still undecided.
pub const UNKNOWN_TITLE: &str = "Onbekend";

/// Planned meal for a single date, keyed by `YYYY-MM-DD` in a [`Schedule`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduleEntry {
    Recipe { id: String },
    Custom { name: String },
    Unknown,
    /// Object or array with no usable field. Kept verbatim so saving the
    /// schedule writes it back untouched; it resolves to an empty title.
    Unrecognized(Value),
}

pub type Schedule = BTreeMap<String, ScheduleEntry>;

impl ScheduleEntry {
    pub fn recipe(id: impl Into<String>) -> Self {
        Self::Recipe { id: id.into() }
    }

    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom { name: name.into() }
    }

    /// Decodes one persisted value.
    ///
    /// A bare string, even an empty one, is the legacy encoding of a recipe
    /// reference. Objects are read with the precedence `id`, `name`,
    /// `unknown`, each only when truthy. Scalars other than strings yield
    /// `None`.
    pub fn decode(value: &Value) -> Option<Self> {
        let map = match value {
            Value::String(id) => return Some(Self::recipe(id)),
            Value::Object(map) => map,
            Value::Array(_) => return Some(Self::Unrecognized(value.clone())),
            _ => return None,
        };

        if let Some(id) = map.get("id").filter(|v| is_truthy(v)) {
            return Some(match id.as_str() {
                Some(id) => Self::recipe(id),
                None => Self::Unrecognized(value.clone()),
            });
        }

        if let Some(name) = map.get("name").filter(|v| is_truthy(v)) {
            return Some(match name.as_str() {
                Some(name) => Self::custom(name),
                None => Self::Unrecognized(value.clone()),
            });
        }

        if map.get("unknown").is_some_and(is_truthy) {
            return Some(Self::Unknown);
        }

        // `{"id": ""}` is what an empty legacy string is written back as
        if map.len() == 1 && map.get("id").is_some_and(Value::is_string) {
            return Some(Self::recipe(""));
        }

        Some(Self::Unrecognized(value.clone()))
    }

    pub fn recipe_id(&self) -> Option<&str> {
        match self {
            Self::Recipe { id } => Some(id),
            _ => None,
        }
    }

    /// Display title for this entry. A recipe reference that no longer
    /// resolves yields an empty string.
    pub fn title(&self, recipes: &[Recipe]) -> String {
        match self {
            Self::Recipe { id } if id.is_empty() => String::new(),
            Self::Recipe { id } => recipe::find(recipes, id)
                .map(|r| r.title.to_owned())
                .unwrap_or_default(),
            Self::Custom { name } => name.to_owned(),
            Self::Unknown => UNKNOWN_TITLE.to_owned(),
            Self::Unrecognized(_) => String::new(),
        }
    }
}

impl Serialize for ScheduleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Self::Unrecognized(value) = self {
            return value.serialize(serializer);
        }

        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Recipe { id } => map.serialize_entry("id", id)?,
            Self::Custom { name } => map.serialize_entry("name", name)?,
            Self::Unknown => map.serialize_entry("unknown", &true)?,
            Self::Unrecognized(_) => {}
        }
        map.end()
    }
}

/// Turns the raw `schedule` document into typed entries. Numbers, booleans
/// and `null` are dropped; every string, object and array is kept.
pub fn normalize(raw: &Value) -> Schedule {
    let Value::Object(map) = raw else {
        return Schedule::new();
    };

    map.iter()
        .filter_map(|(date, value)| {
            ScheduleEntry::decode(value).map(|entry| (date.to_owned(), entry))
        })
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(v) => *v,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
