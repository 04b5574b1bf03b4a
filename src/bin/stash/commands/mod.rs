//! Command implementations

pub mod completions;
pub mod create;
pub mod delete;
pub mod info;
pub mod metadata;
pub mod permissions;
pub mod prs;
pub mod repos;

use std::path::Path;

use anyhow::{bail, Context, Result};
use url::Url;

use stashifier::core::metadata::{ProjectMetadata, METADATA_FILE};
use stashifier::rest::{Credentials, RestError, Scope, StashClient, STASH_API_VERSION};
use stashifier::util::config::{self, ClientConfig};

use crate::cli::{GlobalOpts, ScopeArgs};

/// Load the merged client configuration for the working directory.
fn session_config() -> ClientConfig {
    let project_path = config::project_config_path(Path::new("."));

    match config::global_config_path() {
        Some(global_path) => config::load_config(&global_path, &project_path),
        None => ClientConfig::load_or_default(&project_path),
    }
}

/// Resolve the Stash hostname: flag, then config, then Project.toml.
fn resolve_host(globals: &GlobalOpts, config: &ClientConfig) -> Result<String> {
    if let Some(host) = &globals.host {
        return Ok(host.clone());
    }

    if let Some(hostname) = &config.server.hostname {
        return Ok(hostname.clone());
    }

    let metadata_path = Path::new(METADATA_FILE);
    if metadata_path.exists() {
        let metadata = ProjectMetadata::load(metadata_path)
            .with_context(|| format!("failed to load {}", METADATA_FILE))?;
        return Ok(metadata.servers.source_host);
    }

    bail!(
        "no Stash hostname configured; pass --host or set [server] hostname in {}",
        config::project_config_path(Path::new(".")).display()
    )
}

/// Resolve the username to authenticate as: flag, config, then local user.
fn resolve_username(globals: &GlobalOpts, config: &ClientConfig) -> Option<String> {
    globals
        .user_override
        .clone()
        .or_else(|| config.auth.username.clone())
        .or_else(|| std::env::var("USER").ok())
}

/// Build a REST client from the global options and configuration.
pub fn client(globals: &GlobalOpts) -> Result<StashClient> {
    let config = session_config();
    let host = resolve_host(globals, &config)?;
    let version = config
        .server
        .api_version
        .as_deref()
        .unwrap_or(STASH_API_VERSION);

    let base = Url::parse(&format!("https://{}/rest/api/{}", host, version))
        .with_context(|| format!("invalid Stash hostname `{}`", host))?;

    let mut client = StashClient::with_base_url(base);

    if let Some(password) = &globals.password {
        let username = resolve_username(globals, &config).ok_or_else(|| {
            anyhow::anyhow!("no username available; pass -U or set [auth] username")
        })?;
        tracing::debug!("authenticating as {}", username);
        client = client.with_credentials(Credentials {
            username,
            password: password.clone(),
        });
    }

    Ok(client)
}

/// Turn the shared scope flags into an API scope.
pub fn scope(args: &ScopeArgs) -> Result<Scope> {
    match (&args.project, &args.user) {
        (Some(_), Some(_)) => Err(RestError::Input(
            "EITHER --user or --project may be supplied".to_string(),
        )
        .into()),
        (Some(project), None) => Ok(Scope::Project(project.clone())),
        (None, Some(user)) => Ok(Scope::User(user.clone())),
        (None, None) => Err(RestError::Input(
            "either --user or --project is required".to_string(),
        )
        .into()),
    }
}
