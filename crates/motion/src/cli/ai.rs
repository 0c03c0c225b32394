use crate::prelude::*;
use motion_core::types::ai::AiActionSearchParams;

use super::output::print_page;
use super::ListArgs;

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List the AI action library
    List(ListArgs),
}

pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = global.client()?;

    match cmd {
        Commands::List(args) => {
            let page = client
                .ai_actions()
                .list(&args.search::<AiActionSearchParams>()?)
                .await?;
            print_page(&page, args.json)
        }
    }
}
