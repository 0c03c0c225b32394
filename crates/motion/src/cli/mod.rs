//! Command-line front-end over the resource clients

use crate::prelude::{println, *};
use colored::Colorize;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

pub mod action;
pub mod ai;
pub mod auth;
pub mod character;
pub mod coach;
pub mod equipment;
pub mod menu;
pub mod muscle;
pub mod output;
pub mod role;
pub mod tag;
pub mod upload;
pub mod user;

/// Pagination and filters shared by every list command
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Page size
    #[arg(long, default_value = "20")]
    pub size: u32,

    /// Free-text name filter
    #[arg(long)]
    pub name: Option<String>,

    /// Additional filters as JSON, or @path to a JSON file
    #[arg(long, value_name = "JSON|@FILE")]
    pub filter: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Merge the flags into the filter object and decode it as `T`
    pub fn search<T: DeserializeOwned>(&self) -> Result<T> {
        let mut fields = match &self.filter {
            Some(filter) => read_object(filter)?,
            None => Map::new(),
        };
        fields.insert("page".to_string(), self.page.into());
        fields.insert("size".to_string(), self.size.into());
        if let Some(name) = &self.name {
            fields.insert("name".to_string(), Value::String(name.clone()));
        }

        serde_json::from_value(Value::Object(fields)).wrap_err("Invalid list filters")
    }
}

/// A request body given on the command line
#[derive(Debug, Clone, clap::Args)]
pub struct DataArgs {
    /// Body as JSON, or @path to a JSON file
    #[arg(long, short, value_name = "JSON|@FILE")]
    pub data: String,
}

impl DataArgs {
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        read_data(&self.data)
    }
}

/// Parse inline JSON, or the JSON file named after a leading `@`
pub fn read_data<T: DeserializeOwned>(data: &str) -> Result<T> {
    let text = match data.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {path}"))?,
        None => data.to_string(),
    };

    serde_json::from_str(&text).wrap_err("Invalid JSON body")
}

fn read_object(data: &str) -> Result<Map<String, Value>> {
    match read_data::<Value>(data)? {
        Value::Object(map) => Ok(map),
        other => Err(eyre!("Expected a JSON object, got {other}")),
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Confirmation line for commands without a response body
pub fn done(message: impl std::fmt::Display) {
    println!("{} {}", "✓".green().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use motion_core::types::coach::CoachSearchParams;
    use motion_core::types::PageParams;
    use std::io::Write;

    fn args(filter: Option<&str>) -> ListArgs {
        ListArgs {
            page: 2,
            size: 50,
            name: Some("john".to_string()),
            filter: filter.map(str::to_string),
            json: false,
        }
    }

    #[test]
    fn test_search_merges_flags_into_filter() {
        let params: CoachSearchParams = args(Some(r#"{"status": 1, "page": 9}"#)).search().unwrap();

        assert_eq!(params.page, PageParams::new(2, 50));
        assert_eq!(params.name.as_deref(), Some("john"));
        assert_eq!(params.status, Some(1));
    }

    #[test]
    fn test_search_rejects_non_object_filter() {
        let err = args(Some("[1]")).search::<CoachSearchParams>().unwrap_err();
        assert!(err.to_string().contains("JSON object"));
    }

    #[test]
    fn test_read_data_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"sort": 3}}"#).unwrap();

        let value: Value = read_data(&format!("@{}", file.path().display())).unwrap();
        assert_eq!(value, serde_json::json!({ "sort": 3 }));
    }
}
