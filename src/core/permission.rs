//! Project permission entities from the Stash API.

use serde::Deserialize;

use crate::core::pull_request::UserRef;

/// A user's permission grant on a project, from `permissions/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct PermissionGrant {
    pub user: UserRef,
    pub permission: String,
}

impl PermissionGrant {
    /// Display name of the grantee, falling back to the login name.
    pub fn user_label(&self) -> &str {
        self.user.display_name.as_deref().unwrap_or(&self.user.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_grant() {
        let grant: PermissionGrant = serde_json::from_str(
            r#"{
                "user": { "name": "bwarfield", "displayName": "Ben Warfield" },
                "permission": "PROJECT_ADMIN"
            }"#,
        )
        .unwrap();

        assert_eq!(grant.permission, "PROJECT_ADMIN");
        assert_eq!(grant.user_label(), "Ben Warfield");
    }
}
