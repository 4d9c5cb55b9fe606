use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;

/// Column key the feed uses for procedural/surgical time. It is a category
/// of its own, not a location id, and never appears in `location_names`.
pub const SURGERY_COLUMN_KEY: &str = "Surgery";

/// Half-day block of a clinic day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    Am,
    Pm,
}

impl Block {
    pub fn as_str(&self) -> &'static str {
        match self {
            Block::Am => "AM",
            Block::Pm => "PM",
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Block {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AM" => Ok(Block::Am),
            "PM" => Ok(Block::Pm),
            other => Err(ScheduleError::InvalidBlock(other.to_string())),
        }
    }
}

/// How an anchor date expands into a list of displayed dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    Week,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepDirection {
    Previous,
    Next,
}

/// Location id -> free-text time label. Ordered by location id so that
/// "first entry" selection is deterministic regardless of feed ordering.
pub type BlockLocations = BTreeMap<String, String>;

/// Practitioner id -> block key -> location entries. Block keys stay raw
/// strings at the wire layer and are validated against {AM, PM} by the
/// aggregator.
pub type DaySchedule = HashMap<String, HashMap<String, BlockLocations>>;

/// Parsed body of the feed's schedule endpoint. Every field is optional on
/// the wire; absent fields become empty maps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchedulePayload {
    #[serde(default)]
    pub schedule: HashMap<String, DaySchedule>,
    #[serde(default)]
    pub practitioner_names: HashMap<String, String>,
    #[serde(default)]
    pub practitioner_roles: HashMap<String, String>,
    #[serde(default)]
    pub location_names: HashMap<String, String>,
}

/// One named group of practitioners, in display order. Static configuration
/// owned by the embedding application, never derived from feed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    pub name: String,
    pub practitioners: Vec<String>,
}

/// A pod after roster matching: canonical order kept, unmatched names
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPod {
    pub name: String,
    pub practitioner_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCell {
    pub date: String,
    pub column_label: String,
    pub am: String,
    pub pm: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PractitionerRow {
    pub practitioner_id: String,
    pub display_name: String,
    pub cells: Vec<DayCell>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodRows {
    pub name: String,
    pub rows: Vec<PractitionerRow>,
}

/// Ready-to-render availability grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleGrid {
    pub days: Vec<String>,
    pub pods: Vec<PodRows>,
}

// Error types specific to schedule aggregation
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("unrecognized half-day block {0:?} (expected \"AM\" or \"PM\")")]
    InvalidBlock(String),

    #[error("schedule feed error: {0}")]
    Feed(String),
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        // Malformed payloads and transport failures both originate upstream
        AppError::ExternalService(err.to_string())
    }
}
