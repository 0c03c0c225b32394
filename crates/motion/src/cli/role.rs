use crate::prelude::*;
use motion_core::types::system::{
    RoleCreateBody, RolePermissionUpdateBody, RoleSearchParams, RoleUpdateBody,
};

use super::output::print_page;
use super::{done, DataArgs, ListArgs};

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List roles
    List(ListArgs),

    /// Create a role from a JSON body
    Create(DataArgs),

    /// Update a role from a JSON body
    Update(DataArgs),

    /// Replace a role's menu grants (`{"id":1,"roleMenus":[{"menuId":2,"actionId":3}]}`)
    Permission(DataArgs),

    /// Delete a role
    Delete { id: u64 },
}

pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = global.client()?;
    let roles = client.roles();

    match cmd {
        Commands::List(args) => {
            let page = roles.list(&args.search::<RoleSearchParams>()?).await?;
            print_page(&page, args.json)?;
        }
        Commands::Create(data) => {
            roles.create(&data.parse::<RoleCreateBody>()?).await?;
            done("Role created");
        }
        Commands::Update(data) => {
            roles.update(&data.parse::<RoleUpdateBody>()?).await?;
            done("Role updated");
        }
        Commands::Permission(data) => {
            let body = data.parse::<RolePermissionUpdateBody>()?;
            roles.update_permission(&body).await?;
            done(format!("Role {} granted {} menu action(s)", body.id, body.role_menus.len()));
        }
        Commands::Delete { id } => {
            roles.delete(id).await?;
            done(format!("Role {id} deleted"));
        }
    }

    Ok(())
}
