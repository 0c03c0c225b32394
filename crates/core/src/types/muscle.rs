//! Muscle map and training-area types

use serde::{Deserialize, Serialize};

use super::common::PageParams;

/// A muscle drawn on the body map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Muscle {
    /// Stable key, e.g. `biceps_brachii`
    pub id: String,
    pub name: String,
    /// SVG path data (`d` attribute)
    pub path: String,
    /// 0 (very weak) to 5 (very strong)
    pub strength: u8,
}

impl Muscle {
    pub fn color(&self) -> &'static str {
        strength_color(self.strength)
    }
}

const STRENGTH_COLORS: [&str; 6] = [
    "#e0e0e0", "#ffcc80", "#ffb74d", "#ff9800", "#f57c00", "#e65100",
];

/// Fill colour for a strength level; levels above 5 use the strongest colour
pub fn strength_color(strength: u8) -> &'static str {
    STRENGTH_COLORS[usize::from(strength).min(STRENGTH_COLORS.len() - 1)]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleListItem {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleByRegionParams {
    pub region_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuscleSearchParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body region that groups muscles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingArea {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub muscles: Vec<MuscleListItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_colors() {
        assert_eq!(strength_color(0), "#e0e0e0");
        assert_eq!(strength_color(3), "#ff9800");
        assert_eq!(strength_color(5), "#e65100");
        assert_eq!(strength_color(9), "#e65100");
    }

    #[test]
    fn test_muscle_color_follows_strength() {
        let muscle = Muscle {
            id: "biceps_brachii".to_string(),
            name: "Biceps".to_string(),
            path: "M0 0L1 1".to_string(),
            strength: 1,
        };
        assert_eq!(muscle.color(), "#ffcc80");
    }
}
