//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Stash - manage repositories on a Stash server
#[derive(Parser)]
#[command(name = "stash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub globals: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct GlobalOpts {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Stash hostname (overrides config and Project.toml)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Override the local user for accessing Stash
    #[arg(short = 'U', long = "override-user", global = true)]
    pub user_override: Option<String>,

    /// Password for the Stash user
    #[arg(
        long,
        env = "STASH_PASSWORD",
        hide_env_values = true,
        global = true
    )]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a repository
    Create(CreateArgs),

    /// Delete a repository
    Delete(DeleteArgs),

    /// List repositories available in a project or personal space
    Repos(ReposArgs),

    /// List pull requests for a repository
    Prs(PrsArgs),

    /// List the permissions for the users of a project
    Permissions(PermissionsArgs),

    /// Show what the local git checkout points at
    Info(InfoArgs),

    /// Show the Project.toml metadata record
    Metadata(MetadataArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Addressing flags shared by the repository commands.
///
/// Exactly one of project or user must be given.
#[derive(Args)]
pub struct ScopeArgs {
    /// Stash project to address
    #[arg(short = 'p', long, short_alias = 'o', alias = "organization")]
    pub project: Option<String>,

    /// User whose personal space to address
    #[arg(short = 'u', long)]
    pub user: Option<String>,
}

#[derive(Args)]
pub struct CreateArgs {
    /// The name of the repository
    pub name: String,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// The name of the repository
    pub name: String,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Args)]
pub struct ReposArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Page size for paged responses
    #[arg(long)]
    pub page_size: Option<u64>,
}

#[derive(Args)]
pub struct PrsArgs {
    /// The name of the repository
    pub repo_name: String,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Pull request state to list (OPEN, MERGED, DECLINED, ALL)
    #[arg(long, default_value = "OPEN")]
    pub state: String,

    /// Dump the full JSON for each pull request
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct PermissionsArgs {
    /// Stash project to query
    #[arg(short = 'p', long, short_alias = 'o', alias = "organization")]
    pub project: Option<String>,

    /// Only show users whose name matches this filter
    pub filter: Option<String>,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Remote to inspect
    #[arg(long, default_value = "origin")]
    pub remote: String,
}

#[derive(Args)]
pub struct MetadataArgs {
    /// Path to Project.toml (defaults to ./Project.toml)
    #[arg(long)]
    pub manifest_path: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
