//! `stash repos` command
//!
//! Lists the repositories visible in a project or personal space.

use anyhow::Result;

use crate::cli::{GlobalOpts, ReposArgs};

pub fn execute(args: ReposArgs, globals: &GlobalOpts) -> Result<()> {
    let scope = super::scope(&args.scope)?;
    let client = super::client(globals)?;

    let repos = client.list_repositories(&scope, args.page_size)?;

    println!(
        "Retrieved {} repos in {} pages",
        repos.entity_count(),
        repos.page_count
    );
    for repo in &repos.entities {
        println!("{}", repo.name);
    }

    Ok(())
}
