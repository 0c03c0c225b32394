//! Parameter normalization
//!
//! Turns a caller-facing search object into the exact query object an
//! endpoint expects. Two rules exist, switched per resource:
//!
//! - `size` is renamed to `pageSize`
//! - `name` is trimmed and sent as `keyword`, or dropped when blank
//!
//! Everything else passes through. Absent or null fields never produce a
//! wire key. The output is always a freshly built map; the input is consumed
//! and never edited in place.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::routes::{ActionRoutes, CoachRoutes};

/// Which renaming rules a resource's list endpoint applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeRules {
    pub rename_size: bool,
    pub name_to_keyword: bool,
}

impl NormalizeRules {
    pub const PASSTHROUGH: Self = Self {
        rename_size: false,
        name_to_keyword: false,
    };
    pub const PAGE_SIZE: Self = Self {
        rename_size: true,
        name_to_keyword: false,
    };
    pub const KEYWORD: Self = Self {
        rename_size: false,
        name_to_keyword: true,
    };
    pub const PAGE_SIZE_AND_KEYWORD: Self = Self {
        rename_size: true,
        name_to_keyword: true,
    };
}

/// Backend resources that expose a list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Role,
    Tag,
    Coach(CoachRoutes),
    Action(ActionRoutes),
    Equipment,
    Character,
    AiAction,
    Muscle,
}

impl Resource {
    /// The normalization table
    pub const fn rules(self) -> NormalizeRules {
        match self {
            Resource::User | Resource::Role | Resource::Character | Resource::Muscle => {
                NormalizeRules::PASSTHROUGH
            }
            Resource::Coach(CoachRoutes::Singular) => NormalizeRules::PASSTHROUGH,
            Resource::Coach(CoachRoutes::Plural) => NormalizeRules::PAGE_SIZE_AND_KEYWORD,
            Resource::Action(ActionRoutes::Plural) => NormalizeRules::PAGE_SIZE,
            Resource::Action(ActionRoutes::Singular) => NormalizeRules::PASSTHROUGH,
            Resource::Equipment | Resource::Tag => NormalizeRules::KEYWORD,
            Resource::AiAction => NormalizeRules::PAGE_SIZE,
        }
    }
}

/// Normalize an already-decoded query object.
///
/// A pre-existing `pageSize` or `keyword` survives when its source key is
/// absent, so normalizing twice is a no-op. When both are present the
/// renamed value wins. A `name` that is not a string is left untouched.
pub fn normalize_map(input: Map<String, Value>, rules: NormalizeRules) -> Map<String, Value> {
    let mut output = Map::with_capacity(input.len());
    let mut size = None;
    let mut name = None;

    for (key, value) in input {
        if value.is_null() {
            continue;
        }
        match key.as_str() {
            "size" if rules.rename_size => size = Some(value),
            "name" if rules.name_to_keyword => name = Some(value),
            _ => {
                output.insert(key, value);
            }
        }
    }

    if let Some(size) = size {
        output.insert("pageSize".to_string(), size);
    }

    match name {
        Some(Value::String(name)) => {
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                output.insert("keyword".to_string(), Value::String(trimmed.to_string()));
            }
        }
        Some(other) => {
            output.insert("name".to_string(), other);
        }
        None => {}
    }

    output
}

/// Serialize `params` and normalize the result.
///
/// `params` must serialize to an object (or to nothing, e.g. `None`).
pub fn normalize<T: Serialize + ?Sized>(
    params: &T,
    rules: NormalizeRules,
) -> Result<Map<String, Value>, CoreError> {
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(normalize_map(map, rules)),
        Value::Null => Ok(Map::new()),
        Value::Bool(_) => Err(CoreError::NotAnObject("a boolean")),
        Value::Number(_) => Err(CoreError::NotAnObject("a number")),
        Value::String(_) => Err(CoreError::NotAnObject("a string")),
        Value::Array(_) => Err(CoreError::NotAnObject("an array")),
    }
}
