use crate::prelude::*;
use motion_core::types::muscle::{MuscleByRegionParams, MuscleSearchParams};

use super::output::print_list;

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Muscles of one training area
    List {
        #[arg(long)]
        region: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Training areas with their muscles
    Areas {
        /// Free-text name filter
        #[arg(long)]
        name: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = global.client()?;
    let muscles = client.muscles();

    match cmd {
        Commands::List { region, json } => {
            let list = muscles
                .list_by_region(&MuscleByRegionParams { region_id: region })
                .await?;
            print_list(&list, json)
        }
        Commands::Areas { name, json } => {
            let params = name.map(|name| MuscleSearchParams {
                name: Some(name),
                ..Default::default()
            });
            let areas = muscles.training_areas(params.as_ref()).await?;
            print_list(&areas, json)
        }
    }
}
