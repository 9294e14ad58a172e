//! CLI argument parsing

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{api, defaults};

/// LaunchDarkly collection lister CLI
#[derive(Parser, Debug)]
#[command(name = "ldctl")]
#[command(version)]
#[command(
    about = "List complete LaunchDarkly team, member and environment collections",
    long_about = None
)]
pub struct Cli {
    /// API token (overrides LAUNCHDARKLY_ACCESS_TOKEN / LAUNCHDARKLY_OAUTH_TOKEN)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Treat --token as an OAuth token
    #[arg(long, global = true, default_value_t = false)]
    pub oauth: bool,

    /// API host (overrides LAUNCHDARKLY_API_HOST)
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Items requested per page
    #[arg(
        long,
        global = true,
        default_value_t = api::DEFAULT_PAGE_LIMIT,
        value_parser = clap::value_parser!(u32)
            .range(api::MIN_PAGE_LIMIT as i64..=api::MAX_PAGE_LIMIT as i64)
    )]
    pub page_limit: u32,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value_t = defaults::HTTP_TIMEOUT_SECS)]
    pub http_timeout: u64,

    /// Maximum concurrent API requests
    #[arg(long, global = true, default_value_t = defaults::MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    #[command(subcommand)]
    pub command: Command,
}

/// Collections that can be listed
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all maintainers of a team
    Maintainers {
        /// Team key
        team: String,
    },
    /// List all custom roles assigned to a team
    Roles {
        /// Team key
        team: String,
        /// Print only role keys
        #[arg(long, default_value_t = false)]
        keys_only: bool,
    },
    /// List account members
    Members {
        /// Only members of this team
        #[arg(long, conflicts_with = "email")]
        team: Option<String>,
        /// Only the member with this exact email
        #[arg(long)]
        email: Option<String>,
    },
    /// List all environments of a project
    Environments {
        /// Project key
        project: String,
    },
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
