use crate::prelude::{println, *};
use colored::Colorize;
use motion_core::types::auth::{
    ChangePasswordParams, LoginParams, RegisterParams, UpdateUserInfoParams,
};

use super::{done, print_json, DataArgs};

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Sign in and print the issued tokens
    #[command(after_help = "EXAMPLES:
  # Sign in and export the token for later commands:
  export MOTION_ACCESS_TOKEN=$(motion auth login admin --password secret --token-only)")]
    Login {
        username: String,

        #[arg(long, env = "MOTION_PASSWORD")]
        password: String,

        /// Print only the access token
        #[arg(long)]
        token_only: bool,
    },

    /// Register a new account
    Register(DataArgs),

    /// Show the signed-in user
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update the signed-in user's profile
    UpdateProfile(DataArgs),

    /// Change the signed-in user's password
    ChangePassword(DataArgs),
}

pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = global.client()?;
    let auth = client.auth();

    match cmd {
        Commands::Login {
            username,
            password,
            token_only,
        } => {
            let tokens = auth.login(&LoginParams { username, password }).await?;
            if token_only {
                println!("{}", tokens.access_token);
            } else {
                print_json(&tokens)?;
            }
        }
        Commands::Register(data) => {
            let tokens = auth.register(&data.parse::<RegisterParams>()?).await?;
            print_json(&tokens)?;
        }
        Commands::Whoami { json } => {
            let user = auth.user_info().await?;
            if json {
                return print_json(&user);
            }
            println!("{} {}", "User:".bold().cyan(), user.username);
            println!("{} {}", "ID:".bold().cyan(), user.user_id);
            if !user.email.is_empty() {
                println!("{} {}", "Email:".bold().cyan(), user.email);
            }
            if !user.roles.is_empty() {
                println!("{} {}", "Roles:".bold().cyan(), user.roles.join(", ").bright_green());
            }
            println!("{} {}", "Buttons:".bold().cyan(), user.buttons.len());
        }
        Commands::UpdateProfile(data) => {
            auth.update_user_info(&data.parse::<UpdateUserInfoParams>()?)
                .await?;
            done("Profile updated");
        }
        Commands::ChangePassword(data) => {
            auth.change_password(&data.parse::<ChangePasswordParams>()?)
                .await?;
            done("Password changed");
        }
    }

    Ok(())
}
