//! Table rendering for list responses

use crate::prelude::{println, *};
use colored::Colorize;
use motion_core::types::action::ActionListItem;
use motion_core::types::ai::AiActionItem;
use motion_core::types::character::CharacterListItem;
use motion_core::types::coach::CoachListItem;
use motion_core::types::equipment::EquipmentListItem;
use motion_core::types::muscle::{MuscleListItem, TrainingArea};
use motion_core::types::system::{MenuRoute, RoleListItem, UserListItem};
use motion_core::types::tag::TagListItem;
use motion_core::types::PaginatedResponse;
use prettytable::{Cell, Row};
use serde::Serialize;

/// A list item that can be shown as one table row
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

/// `1` is enabled everywhere in the back office
fn status(code: u8) -> String {
    match code {
        1 => "enabled".green().to_string(),
        2 => "disabled".red().to_string(),
        other => other.to_string(),
    }
}

impl TableRow for UserListItem {
    const HEADERS: &'static [&'static str] =
        &["ID", "Username", "Nickname", "Mobile", "Email", "Status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.username.clone(),
            self.nickname.clone(),
            self.mobile.clone(),
            self.email.clone(),
            self.status.clone(),
        ]
    }
}

impl TableRow for RoleListItem {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Description", "Members"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.description.clone(),
            self.member_count.map_or_else(|| "-".to_string(), |count| count.to_string()),
        ]
    }
}

impl TableRow for TagListItem {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Updated"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), opt(&self.updated_at)]
    }
}

impl TableRow for CoachListItem {
    const HEADERS: &'static [&'static str] =
        &["ID", "Name", "Email", "Phone", "Language", "Status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            opt(&self.language),
            status(self.status),
        ]
    }
}

impl TableRow for ActionListItem {
    const HEADERS: &'static [&'static str] =
        &["ID", "Name", "Coach", "Difficulty", "Calories", "Status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.coach
                .as_ref()
                .map_or_else(|| self.coach_id.to_string(), |coach| coach.name.clone()),
            self.difficulty.to_string(),
            format!("{:.1}", self.calories),
            self.status.map_or_else(|| "-".to_string(), status),
        ]
    }
}

impl TableRow for EquipmentListItem {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Language", "Sort", "Status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            opt(&self.language),
            self.sort.map_or_else(|| "-".to_string(), |sort| sort.to_string()),
            status(self.status),
        ]
    }
}

impl TableRow for CharacterListItem {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Creator", "Status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.creator.clone(),
            status(self.status),
        ]
    }
}

impl TableRow for AiActionItem {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Version"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.version.clone()]
    }
}

impl TableRow for MuscleListItem {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Region"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.region_id.map_or_else(|| "-".to_string(), |id| id.to_string()),
        ]
    }
}

impl TableRow for TrainingArea {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Muscles"];

    fn cells(&self) -> Vec<String> {
        let muscles: Vec<&str> = self.muscles.iter().map(|m| m.name.as_str()).collect();
        vec![self.id.to_string(), self.name.clone(), muscles.join(", ")]
    }
}

pub fn print_rows<T: TableRow>(rows: &[T]) {
    let mut table = new_table();
    table.add_row(Row::new(
        T::HEADERS
            .iter()
            .map(|header| Cell::new(&header.bold().to_string()))
            .collect(),
    ));
    for row in rows {
        table.add_row(Row::new(row.cells().iter().map(|cell| Cell::new(cell)).collect()));
    }
    table.printstd();
}

pub fn print_list<T: TableRow + Serialize>(rows: &[T], json: bool) -> Result<()> {
    if json {
        return super::print_json(&rows);
    }
    if rows.is_empty() {
        println!("No results.");
        return Ok(());
    }
    print_rows(rows);
    Ok(())
}

pub fn print_page<T: TableRow + Serialize>(page: &PaginatedResponse<T>, json: bool) -> Result<()> {
    if json {
        return super::print_json(page);
    }

    println!(
        "Found {} result(s), page {} of {}:\n",
        page.total,
        page.page,
        page.page_count().max(1)
    );
    if page.list.is_empty() {
        println!("No results.");
        return Ok(());
    }

    print_rows(&page.list);

    if page.has_next_page() {
        println!("\nMore results on page {}, use --page {}", page.page + 1, page.page + 1);
    }
    Ok(())
}

/// Indented menu tree with each entry's permission buttons
pub fn print_menu_tree(tree: &[MenuRoute]) {
    for root in tree {
        for (depth, node) in root.walk() {
            let title = if node.meta.title.is_empty() {
                node.name.clone().unwrap_or_else(|| node.path.clone())
            } else {
                node.meta.title.clone()
            };
            let id = node.id.map_or_else(String::new, |id| format!("#{id} "));
            println!(
                "{}{}{} {}",
                "  ".repeat(depth),
                id.bright_black(),
                title.bold(),
                node.path.cyan()
            );
            for auth in &node.meta.auth_list {
                println!("{}  - {}", "  ".repeat(depth), auth.title.bright_blue());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_match_headers() {
        let tag = TagListItem {
            id: 1,
            name: "core".to_string(),
            created_at: None,
            updated_at: None,
            deleted_at: None,
        };
        assert_eq!(tag.cells().len(), TagListItem::HEADERS.len());
        assert_eq!(tag.cells()[2], "-");

        let area = TrainingArea {
            id: 3,
            name: "Legs".to_string(),
            muscles: vec![
                MuscleListItem {
                    id: 1,
                    name: "Quadriceps".to_string(),
                    region_id: Some(3),
                },
                MuscleListItem {
                    id: 2,
                    name: "Hamstrings".to_string(),
                    region_id: Some(3),
                },
            ],
        };
        assert_eq!(area.cells()[2], "Quadriceps, Hamstrings");
    }
}
