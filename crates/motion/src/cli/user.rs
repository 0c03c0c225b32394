use crate::prelude::*;
use motion_core::types::system::{UserCreateBody, UserSearchParams, UserUpdateBody};

use super::output::print_page;
use super::{done, DataArgs, ListArgs};

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List users (`--name` is ignored; filter with `--filter '{"username":"..."}'`)
    List(ListArgs),

    /// Create a user from a JSON body
    Create(DataArgs),

    /// Update a user from a JSON body
    Update(DataArgs),

    /// Delete a user
    Delete { id: u64 },
}

pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = global.client()?;
    let users = client.users();

    match cmd {
        Commands::List(args) => {
            let page = users.list(&args.search::<UserSearchParams>()?).await?;
            print_page(&page, args.json)?;
        }
        Commands::Create(data) => {
            users.create(&data.parse::<UserCreateBody>()?).await?;
            done("User created");
        }
        Commands::Update(data) => {
            users.update(&data.parse::<UserUpdateBody>()?).await?;
            done("User updated");
        }
        Commands::Delete { id } => {
            users.delete(id).await?;
            done(format!("User {id} deleted"));
        }
    }

    Ok(())
}
