//! Project model definition and its wire representation.

use std::{fmt, str::FromStr};

use jiff::{
    civil::{Date, DateTime},
    tz::TimeZone,
    Timestamp,
};
use serde::{Deserialize, Deserializer, Serialize};

use super::PlantType;

/// Opaque identifier assigned by the remote store.
///
/// Remote stores hand out either string ids (document stores) or integer ids
/// (relational stores); both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for ProjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

/// A community-garden project as held in the collection.
///
/// `plant_type` and `start_date` are optional here because records created by
/// older clients may lack them; the editor requires both before submitting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Identifier assigned by the remote store
    #[serde(rename = "_id", alias = "id")]
    pub id: ProjectId,

    /// Name of the school or garden running the project
    pub name: String,

    /// Free-form description, possibly long
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// What the project grows
    #[serde(default, deserialize_with = "lenient_optional")]
    pub plant_type: Option<PlantType>,

    /// Day the project started
    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<Date>,
}

impl Project {
    /// Assemble a project from a store-assigned id and submitted fields.
    pub fn new(id: ProjectId, fields: ProjectFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            plant_type: Some(fields.plant_type),
            start_date: Some(fields.start_date),
        }
    }

    /// Overwrite every field except the identity.
    pub fn apply(&mut self, fields: ProjectFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.plant_type = Some(fields.plant_type);
        self.start_date = Some(fields.start_date);
    }
}

/// Validated project fields, as sent to the remote store on create and
/// update. The identifier is never part of the payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFields {
    pub name: String,
    pub description: String,
    pub plant_type: PlantType,
    pub start_date: Date,
}

fn null_as_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Empty or missing strings map to `None`; anything else must parse.
fn lenient_optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Accepts `YYYY-MM-DD` and full ISO timestamps such as
/// `2024-03-01T00:00:00.000Z`, keeping only the calendar day.
fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Date>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => parse_date(raw.trim())
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Parse a calendar date, tolerating a trailing time component.
///
/// Accepts `YYYY-MM-DD`, a civil datetime (`2024-03-01T10:00`) or an
/// instant with an offset (`2024-03-01T00:00:00.000Z`, read in UTC). Any
/// other trailing text is an error.
pub fn parse_date(raw: &str) -> Result<Date, String> {
    if let Ok(day) = raw.parse::<Date>() {
        return Ok(day);
    }
    if let Ok(datetime) = raw.parse::<DateTime>() {
        return Ok(datetime.date());
    }
    raw.parse::<Timestamp>()
        .map(|instant| instant.to_zoned(TimeZone::UTC).date())
        .map_err(|_| format!("Invalid date '{raw}': expected YYYY-MM-DD"))
}
