use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Closed set of attributes a search can rank on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CriterionKey {
    Cost,
    Location,
    HasParking,
    HasMeetingRooms,
    HasOfficeWithFurniture,
    HasTransport,
    HasCanteen,
}

impl CriterionKey {
    pub const ALL: [CriterionKey; 7] = [
        CriterionKey::Cost,
        CriterionKey::Location,
        CriterionKey::HasParking,
        CriterionKey::HasMeetingRooms,
        CriterionKey::HasOfficeWithFurniture,
        CriterionKey::HasTransport,
        CriterionKey::HasCanteen,
    ];

    /// Wire name of the key, as clients send it
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionKey::Cost => "cost",
            CriterionKey::Location => "location",
            CriterionKey::HasParking => "hasParking",
            CriterionKey::HasMeetingRooms => "hasMeetingRooms",
            CriterionKey::HasOfficeWithFurniture => "hasOfficeWithFurniture",
            CriterionKey::HasTransport => "hasTransport",
            CriterionKey::HasCanteen => "hasCanteen",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }
}

impl fmt::Display for CriterionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target value of a criterion, typed by its key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CriterionValue {
    /// Cost ceiling
    Budget(f64),
    /// Accepted locations (exact, case-sensitive)
    Locations(Vec<String>),
    /// Required amenity state
    Flag(bool),
}

/// One user-selected ranking dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub key: CriterionKey,
    pub value: CriterionValue,
    pub priority: u8,
}

impl Criterion {
    pub fn budget(ceiling: f64, priority: u8) -> Self {
        Self {
            key: CriterionKey::Cost,
            value: CriterionValue::Budget(ceiling),
            priority,
        }
    }

    pub fn locations<I, S>(accepted: I, priority: u8) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: CriterionKey::Location,
            value: CriterionValue::Locations(accepted.into_iter().map(Into::into).collect()),
            priority,
        }
    }

    pub fn amenity(key: CriterionKey, wanted: bool, priority: u8) -> Self {
        Self {
            key,
            value: CriterionValue::Flag(wanted),
            priority,
        }
    }
}

/// A ranking candidate (a business park)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub location: String,
    pub cost: f64,
    #[serde(rename = "hasParking", default)]
    pub has_parking: bool,
    #[serde(rename = "hasMeetingRooms", default)]
    pub has_meeting_rooms: bool,
    #[serde(rename = "hasOfficeWithFurniture", default)]
    pub has_office_with_furniture: bool,
    #[serde(rename = "hasTransport", default)]
    pub has_transport: bool,
    #[serde(rename = "hasCanteen", default)]
    pub has_canteen: bool,
}

impl Facility {
    /// Amenity flag for a boolean key, `None` for cost and location
    pub fn amenity(&self, key: CriterionKey) -> Option<bool> {
        match key {
            CriterionKey::HasParking => Some(self.has_parking),
            CriterionKey::HasMeetingRooms => Some(self.has_meeting_rooms),
            CriterionKey::HasOfficeWithFurniture => Some(self.has_office_with_furniture),
            CriterionKey::HasTransport => Some(self.has_transport),
            CriterionKey::HasCanteen => Some(self.has_canteen),
            CriterionKey::Cost | CriterionKey::Location => None,
        }
    }
}

/// Distinct locations of a catalogue, in first-seen order
pub fn unique_locations(catalogue: &[Facility]) -> Vec<String> {
    let mut locations: Vec<String> = Vec::new();
    for facility in catalogue {
        if !locations.contains(&facility.location) {
            locations.push(facility.location.clone());
        }
    }
    locations
}

/// Ranked, score-annotated facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    #[serde(rename = "park")]
    pub facility: Facility,
    pub score: f64,
    pub contributions: BTreeMap<CriterionKey, f64>,
}

/// Everything one engine call produces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub weights: BTreeMap<CriterionKey, f64>,
    #[serde(rename = "consistencyRatio")]
    pub consistency_ratio: f64,
    pub results: Vec<RankedResult>,
}

/// Persisted search, as stored in the history table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: uuid::Uuid,
    #[serde(rename = "clientId")]
    pub client_id: String,
    pub criteria: serde_json::Value,
    pub result: serde_json::Value,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}
