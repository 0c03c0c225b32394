use crate::prelude::*;
use motion_core::types::character::{
    CharacterCreateBody, CharacterPermissionBody, CharacterSearchParams, CharacterUpdateBody,
};

use super::output::print_page;
use super::{done, DataArgs, ListArgs};

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List characters
    List(ListArgs),

    /// Create a character from a JSON body
    Create(DataArgs),

    /// Update a character from a JSON body
    Update(DataArgs),

    /// Delete a character
    Delete { id: u64 },

    /// Replace a character's menu grants
    Permission(DataArgs),

    /// Enable a character
    Enable { id: u64 },

    /// Disable a character
    Disable { id: u64 },
}

pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = global.client()?;
    let characters = client.characters();

    match cmd {
        Commands::List(args) => {
            let page = characters
                .list(&args.search::<CharacterSearchParams>()?)
                .await?;
            print_page(&page, args.json)?;
        }
        Commands::Create(data) => {
            characters
                .create(&data.parse::<CharacterCreateBody>()?)
                .await?;
            done("Character created");
        }
        Commands::Update(data) => {
            characters
                .update(&data.parse::<CharacterUpdateBody>()?)
                .await?;
            done("Character updated");
        }
        Commands::Delete { id } => {
            characters.delete(id).await?;
            done(format!("Character {id} deleted"));
        }
        Commands::Permission(data) => {
            characters
                .update_permission(&data.parse::<CharacterPermissionBody>()?)
                .await?;
            done("Character permissions updated");
        }
        Commands::Enable { id } => {
            characters.toggle_status(id, 1).await?;
            done(format!("Character {id} enabled"));
        }
        Commands::Disable { id } => {
            characters.toggle_status(id, 2).await?;
            done(format!("Character {id} disabled"));
        }
    }

    Ok(())
}
