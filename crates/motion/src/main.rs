use crate::prelude::{eprintln, *};
use clap::Parser;
use motion::{Client, HttpTransport, MotionConfig};
use motion_core::{ActionRoutes, CoachRoutes, ProfileRoutes, RouteConfig};

mod cli;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Admin client for the motion fitness-content backend"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Backend base URL (overrides MOTION_BASE_URL)
    #[clap(long, global = true)]
    base_url: Option<String>,

    /// Access token sent as the Authorization header (overrides MOTION_ACCESS_TOKEN)
    #[clap(long, global = true)]
    token: Option<String>,

    /// Request timeout in seconds (overrides MOTION_TIMEOUT_SECS)
    #[clap(long, global = true)]
    timeout: Option<u64>,

    /// Coach endpoints: `singular` (/coach) or `plural` (/coaches)
    #[clap(long, env = "MOTION_COACH_ROUTES", global = true, default_value = "plural")]
    coach_routes: CoachRoutes,

    /// Action endpoints: `plural` (/actions) or `singular` (/action)
    #[clap(long, env = "MOTION_ACTION_ROUTES", global = true, default_value = "plural")]
    action_routes: ActionRoutes,

    /// Profile update endpoint: `user` (/user) or `user-info` (/user/info)
    #[clap(long, env = "MOTION_PROFILE_ROUTES", global = true, default_value = "user")]
    profile_routes: ProfileRoutes,

    /// Whether to display additional information.
    #[clap(long, env = "MOTION_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    pub fn routes(&self) -> RouteConfig {
        RouteConfig::new(self.coach_routes, self.action_routes, self.profile_routes)
    }

    pub fn config(&self) -> Result<MotionConfig> {
        let config = match &self.base_url {
            Some(url) => MotionConfig::from_lookup(|key| match key {
                "MOTION_BASE_URL" => Some(url.clone()),
                _ => std::env::var(key).ok(),
            }),
            None => MotionConfig::from_env(),
        }?;

        Ok(config.with_overrides(None, self.token.clone(), self.timeout))
    }

    pub fn client(&self) -> Result<Client<HttpTransport>> {
        let config = self.config()?;
        if self.verbose {
            eprintln!("Base URL: {}", config.base_url);
            eprintln!("Routes: {:?}", self.routes());
        }

        let transport = HttpTransport::new(&config).wrap_err("Failed to create HTTP transport")?;
        Ok(Client::new(transport, self.routes()))
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Sign in, register and manage the current user's profile
    #[clap(subcommand)]
    Auth(cli::auth::Commands),

    /// Back-office users
    #[clap(subcommand)]
    User(cli::user::Commands),

    /// Roles and their menu grants
    #[clap(subcommand)]
    Role(cli::role::Commands),

    /// Menu tree and permission buttons
    #[clap(subcommand)]
    Menu(cli::menu::Commands),

    /// Action tags
    #[clap(subcommand)]
    Tag(cli::tag::Commands),

    /// Coaches
    #[clap(subcommand)]
    Coach(cli::coach::Commands),

    /// Exercise actions
    #[clap(subcommand)]
    Action(cli::action::Commands),

    /// Training equipment
    #[clap(subcommand)]
    Equipment(cli::equipment::Commands),

    /// Admin characters
    #[clap(subcommand)]
    Character(cli::character::Commands),

    /// AI action library
    #[clap(subcommand)]
    AiAction(cli::ai::Commands),

    /// Muscles and training areas
    #[clap(subcommand)]
    Muscle(cli::muscle::Commands),

    /// File uploads
    #[clap(subcommand)]
    Upload(cli::upload::Commands),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    let global = app.global;

    match app.command {
        SubCommands::Auth(cmd) => cli::auth::run(cmd, global).await,
        SubCommands::User(cmd) => cli::user::run(cmd, global).await,
        SubCommands::Role(cmd) => cli::role::run(cmd, global).await,
        SubCommands::Menu(cmd) => cli::menu::run(cmd, global).await,
        SubCommands::Tag(cmd) => cli::tag::run(cmd, global).await,
        SubCommands::Coach(cmd) => cli::coach::run(cmd, global).await,
        SubCommands::Action(cmd) => cli::action::run(cmd, global).await,
        SubCommands::Equipment(cmd) => cli::equipment::run(cmd, global).await,
        SubCommands::Character(cmd) => cli::character::run(cmd, global).await,
        SubCommands::AiAction(cmd) => cli::ai::run(cmd, global).await,
        SubCommands::Muscle(cmd) => cli::muscle::run(cmd, global).await,
        SubCommands::Upload(cmd) => cli::upload::run(cmd, global).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_client_uses_flags() {
        let app = App::try_parse_from([
            "motion",
            "tag",
            "list",
            "--base-url",
            "http://localhost:8080",
            "--coach-routes",
            "singular",
            "--verbose",
        ])
        .unwrap();

        let client = app.global.client().unwrap();
        assert_eq!(client.routes().coach, CoachRoutes::Singular);
        assert_eq!(app.global.config().unwrap().base_url, "http://localhost:8080");
    }
}
