use crate::prelude::*;
use motion_core::types::tag::TagSearchParams;

use super::output::print_page;
use super::ListArgs;

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List tags
    List(ListArgs),
}

pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = global.client()?;

    match cmd {
        Commands::List(args) => {
            let page = client
                .tags()
                .list(&args.search::<TagSearchParams>()?)
                .await?;
            print_page(&page, args.json)
        }
    }
}
