//! `stash permissions` command
//!
//! Lists the user permission grants on a project.

use anyhow::Result;

use stashifier::rest::RestError;

use crate::cli::{GlobalOpts, PermissionsArgs};

pub fn execute(args: PermissionsArgs, globals: &GlobalOpts) -> Result<()> {
    let project = args.project.ok_or_else(|| {
        RestError::Input("permissions are queried per project; supply --project".to_string())
    })?;

    let client = super::client(globals)?;
    let grants = client.list_user_permissions(&project, args.filter.as_deref())?;

    if grants.entities.is_empty() {
        println!("No user permissions found for project {}", project);
        return Ok(());
    }

    for grant in &grants.entities {
        println!(
            "{:<18} {} ({})",
            grant.permission,
            grant.user_label(),
            grant.user.name
        );
    }

    Ok(())
}
