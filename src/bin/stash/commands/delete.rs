//! `stash delete` command

use anyhow::Result;

use crate::cli::{DeleteArgs, GlobalOpts};

pub fn execute(args: DeleteArgs, globals: &GlobalOpts) -> Result<()> {
    let scope = super::scope(&args.scope)?;
    let client = super::client(globals)?;

    let outcome = client.delete_repository(&scope, &args.name)?;

    match outcome.message {
        Some(message) => println!("Deletion OK: {}", message),
        None => println!(
            "Deletion attempt succeeded with status {}",
            outcome.status.as_u16()
        ),
    }

    Ok(())
}
