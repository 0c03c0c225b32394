use crate::prelude::*;
use motion_core::types::action::{
    ActionCreateBody, ActionSearchParams, ActionStatus, ActionUpdateBody,
};

use super::output::print_page;
use super::{done, DataArgs, ListArgs};

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List actions
    #[command(after_help = "EXAMPLES:
  # Beginner actions with tags 3 or 5:
  motion action list --filter '{\"difficulty\": 1, \"tagIds\": [3, 5]}'")]
    List(ListArgs),

    /// Create an action from a JSON body
    Create(DataArgs),

    /// Update an action from a JSON body (must include `id`)
    Update(DataArgs),

    /// Delete an action
    Delete { id: u64 },

    /// Change an action's listing status
    Status { id: u64, status: u8 },
}

pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = global.client()?;
    let actions = client.actions();

    match cmd {
        Commands::List(args) => {
            let page = actions.list(&args.search::<ActionSearchParams>()?).await?;
            print_page(&page, args.json)?;
        }
        Commands::Create(data) => {
            actions.create(&data.parse::<ActionCreateBody>()?).await?;
            done("Action created");
        }
        Commands::Update(data) => {
            let body = data.parse::<ActionUpdateBody>()?;
            actions.update(&body).await?;
            done(format!("Action {} updated", body.id));
        }
        Commands::Delete { id } => {
            actions.delete(id).await?;
            done(format!("Action {id} deleted"));
        }
        Commands::Status { id, status } => {
            actions.update_status(&ActionStatus { id, status }).await?;
            done(format!("Action {id} status set to {status}"));
        }
    }

    Ok(())
}
