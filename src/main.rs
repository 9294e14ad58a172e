//! ldctl - Main entry point

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{debug, info};

use ldctl::{
    output_environments, output_maintainers, output_members, output_role_keys, output_roles,
    ClientOptions, Cli, Command, HostResolver, LdClient, PageLimit, Result, TokenResolver,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting ldctl v{}", env!("CARGO_PKG_VERSION"));

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let credential = TokenResolver::resolve(cli.token.as_deref(), cli.oauth)?;
    let host = HostResolver::resolve(cli.host.as_deref());

    debug!(
        "host={}, format={}, page_limit={}, max_concurrency={}, credential={:?}",
        host, cli.format, cli.page_limit, cli.max_concurrency, credential
    );

    let options = ClientOptions {
        http_timeout: Duration::from_secs(cli.http_timeout),
        max_concurrency: cli.max_concurrency,
        page_limit: PageLimit::new(cli.page_limit)?,
        ..ClientOptions::default()
    };
    let client = LdClient::new(credential, host, options)?;

    match cli.command {
        Command::Maintainers { team } => {
            let maintainers = client.get_all_team_maintainers(&team).await?;
            info!("Found {} maintainers for team '{}'", maintainers.len(), team);
            output_maintainers(&maintainers, cli.format)
        }
        Command::Roles { team, keys_only } => {
            if keys_only {
                let keys = client.get_all_team_role_keys(&team).await?;
                output_role_keys(&keys, cli.format)
            } else {
                let roles = client.get_all_team_roles(&team).await?;
                info!("Found {} custom roles for team '{}'", roles.len(), team);
                output_roles(&roles, cli.format)
            }
        }
        Command::Members { team, email } => {
            let members = match (team, email) {
                (_, Some(email)) => vec![client.get_member_by_email(&email).await?],
                (Some(team), None) => client.get_all_team_members(&team).await?,
                (None, None) => client.get_all_members().await?,
            };
            info!("Found {} members", members.len());
            output_members(&members, cli.format)
        }
        Command::Environments { project } => {
            let environments = client.get_all_environments(&project).await?;
            info!(
                "Found {} environments for project '{}'",
                environments.len(),
                project
            );
            output_environments(&environments, cli.format)
        }
    }
}
