use crate::prelude::*;
use motion_core::types::coach::{CoachCreateBody, CoachSearchParams, CoachUpdateBody};

use super::output::print_page;
use super::{done, print_json, DataArgs, ListArgs};

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List coaches
    #[command(after_help = "EXAMPLES:
  # Enabled coaches whose name contains \"john\":
  motion coach list --name john --filter '{\"status\": 1}'

  # Same search against a backend that mounts /coach:
  motion coach list --name john --coach-routes singular")]
    List(ListArgs),

    /// Create a coach from a JSON body
    Create(DataArgs),

    /// Update a coach from a JSON body
    Update(DataArgs),

    /// Delete a coach
    Delete { id: u64 },

    /// Whether any action still references the coach
    InUse { id: u64 },

    /// Start translating the coach profile
    Translate { id: u64 },
}

pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = global.client()?;
    let coaches = client.coaches();

    match cmd {
        Commands::List(args) => {
            let page = coaches.list(&args.search::<CoachSearchParams>()?).await?;
            print_page(&page, args.json)?;
        }
        Commands::Create(data) => {
            coaches.create(&data.parse::<CoachCreateBody>()?).await?;
            done("Coach created");
        }
        Commands::Update(data) => {
            coaches.update(&data.parse::<CoachUpdateBody>()?).await?;
            done("Coach updated");
        }
        Commands::Delete { id } => {
            coaches.delete(id).await?;
            done(format!("Coach {id} deleted"));
        }
        Commands::InUse { id } => {
            print_json(&coaches.check_in_use(id).await?)?;
        }
        Commands::Translate { id } => {
            coaches.translate(id).await?;
            done(format!("Translation of coach {id} started"));
        }
    }

    Ok(())
}
