use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six fixed production steps an order passes through.
///
/// Each stage is tracked as an independent completion flag, not a strict
/// sequence: a later stage may be marked complete while an earlier one is
/// still pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Plotting,
    Cutting,
    Separation,
    Embroidery,
    Workshop,
    Finishing,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 6] = [
        Stage::Plotting,
        Stage::Cutting,
        Stage::Separation,
        Stage::Embroidery,
        Stage::Workshop,
        Stage::Finishing,
    ];

    /// Machine name used in queries, snapshots and the roster.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Plotting => "plotting",
            Stage::Cutting => "cutting",
            Stage::Separation => "separation",
            Stage::Embroidery => "embroidery",
            Stage::Workshop => "workshop",
            Stage::Finishing => "finishing",
        }
    }

    /// Human-readable label for board rendering and notifications.
    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Plotting => "Plotting",
            Stage::Cutting => "Cutting",
            Stage::Separation => "Separation",
            Stage::Embroidery => "Embroidery/Silk",
            Stage::Workshop => "Workshop",
            Stage::Finishing => "Finishing",
        }
    }

    /// Parse a machine name. Returns None for anything else.
    pub fn from_name(name: &str) -> Option<Stage> {
        Stage::ALL.iter().copied().find(|s| s.name() == name)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for stage in Stage::ALL {
            assert_eq!(Stage::from_name(stage.name()), Some(stage));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(Stage::from_name("painting"), None);
        assert_eq!(Stage::from_name(""), None);
        // Machine names are lowercase only
        assert_eq!(Stage::from_name("Cutting"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Stage::Embroidery).unwrap();
        assert_eq!(json, "\"embroidery\"");

        let stage: Stage = serde_json::from_str("\"workshop\"").unwrap();
        assert_eq!(stage, Stage::Workshop);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Stage::Plotting.display_name(), "Plotting");
        assert_eq!(Stage::Embroidery.display_name(), "Embroidery/Silk");
    }

    #[test]
    fn test_all_covers_six_distinct_stages() {
        let mut names: Vec<&str> = Stage::ALL.iter().map(|s| s.name()).collect();
        names.dedup();
        assert_eq!(names.len(), 6);
    }
}
