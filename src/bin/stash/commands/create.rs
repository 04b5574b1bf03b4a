//! `stash create` command
//!
//! Creates a repository in a project or personal space.

use anyhow::Result;

use crate::cli::{CreateArgs, GlobalOpts};

pub fn execute(args: CreateArgs, globals: &GlobalOpts) -> Result<()> {
    let scope = super::scope(&args.scope)?;
    let client = super::client(globals)?;

    let repo = client.create_repository(&scope, &args.name)?;

    println!(
        "Successfully created repo {} with clone URL {}",
        repo.name,
        repo.clone_url("ssh")?
    );

    Ok(())
}
