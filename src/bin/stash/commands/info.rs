//! `stash info` command
//!
//! Shows what the local git checkout points at: the remote's host,
//! owning project or user, repository name, and the current branch.

use std::path::Path;

use anyhow::{Context, Result};

use stashifier::git::{LocalRepo, RemoteOwner};

use crate::cli::InfoArgs;

pub fn execute(args: InfoArgs) -> Result<()> {
    let repo = LocalRepo::discover(Path::new("."))
        .context("the current directory is not inside a git checkout")?;

    let info = repo.remote_info(&args.remote)?;

    println!("remote:  {}", repo.remote_url(&args.remote)?);
    println!("host:    {}", info.host);
    match &info.owner {
        Some(RemoteOwner::Project(project)) => println!("project: {}", project),
        Some(RemoteOwner::User(user)) => println!("user:    ~{}", user),
        None => {}
    }
    println!("repo:    {}", info.repo);

    match repo.current_branch() {
        Ok(branch) => println!("branch:  {}", branch),
        Err(e) => tracing::debug!("no current branch: {}", e),
    }

    Ok(())
}
