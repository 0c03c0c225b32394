//! Exercise action types

use serde::{Deserialize, Serialize};

use super::common::PageParams;

/// `{id, name}` reference embedded in action items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionListItem {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    /// Equipment display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument_ids: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruments: Option<Vec<NamedRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach: Option<NamedRef>,
    #[serde(default)]
    pub coach_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_legion_ids: Option<Vec<u64>>,
    #[serde(rename = "musclIds", default, skip_serializing_if = "Option::is_none")]
    pub muscle_ids: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<NamedRef>>,
    #[serde(default)]
    pub related_action_id: u64,
    #[serde(default, rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub scene: u8,
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub difficulty: u8,
    #[serde(default)]
    pub attribute: u8,
    #[serde(default)]
    pub calories: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Training area
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_support: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_children: Option<bool>,
    /// Translated copies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ActionListItem>>,
}

/// Filters of the action list.
///
/// Scene: 1 strength, 2 pilates, 3 cardio, 4 stretching.
/// Difficulty: 1 beginner, 2 intermediate, 3 advanced.
/// Type: 1 video, 2 non-video, 3 intro, 4 outro.
/// Status: 1 listed, 2 unlisted, 3 draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSearchParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument_ids: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_region_ids: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_ids: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<u64>>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach_id: Option<u64>,
    /// Fuzzy name match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang_code: Option<String>,
    /// 0 disabled, 1 enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang_status: Option<u8>,
    /// 0 untranslated, 1 translating, 2 translated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_status: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionCreateBody {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument_ids: Option<Vec<u64>>,
    pub coach_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_legion_ids: Option<Vec<u64>>,
    #[serde(rename = "musclIds", default, skip_serializing_if = "Option::is_none")]
    pub muscle_ids: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<u64>>,
    pub related_action_id: u64,
    #[serde(rename = "type")]
    pub kind: u8,
    pub scene: u8,
    pub introduction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
    pub remark: String,
    pub difficulty: u8,
    pub attribute: u8,
    pub calories: f64,
}

/// Partial action update; only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionUpdateBody {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument_ids: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_legion_ids: Option<Vec<u64>>,
    #[serde(rename = "musclIds", default, skip_serializing_if = "Option::is_none")]
    pub muscle_ids: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_action_id: Option<u64>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
}

/// Listing status change: 1 listed, 2 unlisted, 3 draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStatus {
    pub id: u64,
    pub status: u8,
}
