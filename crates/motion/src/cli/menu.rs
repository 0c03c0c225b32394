use crate::prelude::{println, *};
use motion_core::types::system::{
    MenuActionCreateBody, MenuActionUpdateBody, MenuCreateBody, MenuUpdateBody,
};

use super::output::print_menu_tree;
use super::{done, print_json, DataArgs};

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Show the menu tree
    Tree {
        /// Only entries visible to the signed-in user
        #[arg(long)]
        mine: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a menu entry from a JSON body
    Create(DataArgs),

    /// Update a menu entry from a JSON body
    Update(DataArgs),

    /// Delete a menu entry
    Delete { id: u64 },

    /// Create a permission button from a JSON body
    CreateAction(DataArgs),

    /// Update a permission button from a JSON body
    UpdateAction(DataArgs),

    /// Delete a permission button
    DeleteAction { id: u64 },

    /// List the permission codes known to the backend
    PermissionCodes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = global.client()?;
    let menus = client.menus();

    match cmd {
        Commands::Tree { mine, json } => {
            let tree = if mine {
                menus.current_user_tree().await?
            } else {
                menus.all_tree().await?
            };
            if json {
                return print_json(&tree);
            }
            print_menu_tree(&tree);
        }
        Commands::Create(data) => {
            menus.create(&data.parse::<MenuCreateBody>()?).await?;
            done("Menu created");
        }
        Commands::Update(data) => {
            menus.update(&data.parse::<MenuUpdateBody>()?).await?;
            done("Menu updated");
        }
        Commands::Delete { id } => {
            menus.delete(id).await?;
            done(format!("Menu {id} deleted"));
        }
        Commands::CreateAction(data) => {
            menus
                .create_action(&data.parse::<MenuActionCreateBody>()?)
                .await?;
            done("Menu action created");
        }
        Commands::UpdateAction(data) => {
            menus
                .update_action(&data.parse::<MenuActionUpdateBody>()?)
                .await?;
            done("Menu action updated");
        }
        Commands::DeleteAction { id } => {
            menus.delete_action(id).await?;
            done(format!("Menu action {id} deleted"));
        }
        Commands::PermissionCodes { json } => {
            let codes = menus.permission_codes().await?;
            if json {
                return print_json(&codes);
            }
            for code in codes {
                println!("{code}");
            }
        }
    }

    Ok(())
}
