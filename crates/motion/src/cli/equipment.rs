use crate::prelude::*;
use motion_core::types::equipment::{
    EquipmentCreateBody, EquipmentSearchParams, EquipmentUpdateBody,
};

use super::output::print_page;
use super::{done, print_json, DataArgs, ListArgs};

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List equipment
    List(ListArgs),

    /// Create equipment from a JSON body
    Create(DataArgs),

    /// Update equipment from a JSON body
    Update(DataArgs),

    /// Delete equipment
    Delete { id: u64 },

    /// Whether any action still references the equipment
    InUse { id: u64 },

    /// Start translating the equipment name
    Translate { id: u64 },

    /// Set the display position
    Sort {
        id: u64,
        #[arg(allow_negative_numbers = true)]
        sort: i32,
    },
}

pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = global.client()?;
    let equipment = client.equipment();

    match cmd {
        Commands::List(args) => {
            let page = equipment
                .list(&args.search::<EquipmentSearchParams>()?)
                .await?;
            print_page(&page, args.json)?;
        }
        Commands::Create(data) => {
            equipment
                .create(&data.parse::<EquipmentCreateBody>()?)
                .await?;
            done("Equipment created");
        }
        Commands::Update(data) => {
            equipment
                .update(&data.parse::<EquipmentUpdateBody>()?)
                .await?;
            done("Equipment updated");
        }
        Commands::Delete { id } => {
            equipment.delete(id).await?;
            done(format!("Equipment {id} deleted"));
        }
        Commands::InUse { id } => {
            print_json(&equipment.check_in_use(id).await?)?;
        }
        Commands::Translate { id } => {
            equipment.translate(id).await?;
            done(format!("Translation of equipment {id} started"));
        }
        Commands::Sort { id, sort } => {
            equipment.update_sort(id, sort).await?;
            done(format!("Equipment {id} moved to position {sort}"));
        }
    }

    Ok(())
}
