use crate::models::stage::Stage;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-stage completion flags for one order.
///
/// The flags are independent booleans; the store enforces no ordering
/// between stages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageFlags {
    #[serde(default)]
    pub plotting: bool,
    #[serde(default)]
    pub cutting: bool,
    #[serde(default)]
    pub separation: bool,
    #[serde(default)]
    pub embroidery: bool,
    #[serde(default)]
    pub workshop: bool,
    #[serde(default)]
    pub finishing: bool,
}

impl StageFlags {
    pub fn get(&self, stage: Stage) -> bool {
        match stage {
            Stage::Plotting => self.plotting,
            Stage::Cutting => self.cutting,
            Stage::Separation => self.separation,
            Stage::Embroidery => self.embroidery,
            Stage::Workshop => self.workshop,
            Stage::Finishing => self.finishing,
        }
    }

    pub fn set(&mut self, stage: Stage, done: bool) {
        match stage {
            Stage::Plotting => self.plotting = done,
            Stage::Cutting => self.cutting = done,
            Stage::Separation => self.separation = done,
            Stage::Embroidery => self.embroidery = done,
            Stage::Workshop => self.workshop = done,
            Stage::Finishing => self.finishing = done,
        }
    }

    /// At least one stage done
    pub fn any(&self) -> bool {
        Stage::ALL.iter().any(|s| self.get(*s))
    }

    /// Every stage done
    pub fn all(&self) -> bool {
        Stage::ALL.iter().all(|s| self.get(*s))
    }
}

/// Layout artwork attached to an order.
///
/// The bytes are hex-encoded in snapshots so the order list stays a plain
/// JSON document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutImage {
    pub content_type: String,
    #[serde(with = "hex_bytes")]
    pub data: Vec<u8>,
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        hex::decode(&encoded).map_err(serde::de::Error::custom)
    }
}

/// One order on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique, monotonically assigned by the store
    pub id: u64,
    pub client: String,
    pub order_number: String,
    pub date_in: NaiveDate,
    pub date_due: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub stages: StageFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutImage>,
}

impl Order {
    /// Past its due date and not fully complete. A finished order is never
    /// delayed, whatever its due date; an order due today is not yet
    /// delayed.
    pub fn is_delayed(&self, today: NaiveDate) -> bool {
        self.date_due < today && !self.stages.all()
    }

    /// Substring filter on client name or order number. `term` must
    /// already be lowercased.
    pub fn matches(&self, term: &str) -> bool {
        self.client.to_lowercase().contains(term)
            || self.order_number.to_lowercase().contains(term)
    }
}
