//! `stash prs` command
//!
//! Lists pull requests for a repository.

use anyhow::Result;

use crate::cli::{GlobalOpts, PrsArgs};

pub fn execute(args: PrsArgs, globals: &GlobalOpts) -> Result<()> {
    let scope = super::scope(&args.scope)?;
    let client = super::client(globals)?;

    let state = if args.state.eq_ignore_ascii_case("all") {
        "ALL".to_string()
    } else {
        args.state.to_ascii_uppercase()
    };

    let prs = client.list_pull_requests(&scope, &args.repo_name, Some(&state))?;

    if prs.entities.is_empty() {
        println!("No {} pull requests for {}", state, args.repo_name);
        return Ok(());
    }

    for pr in &prs.entities {
        if args.json {
            println!("{}", pr.dump());
        } else {
            println!(
                "#{} [{}] {} ({})",
                pr.id,
                pr.state,
                pr.title,
                pr.author_name().unwrap_or("unknown")
            );
        }
    }

    Ok(())
}
