//! Repository entities from the Stash API.
//!
//! Exposes the fields we actually care about and keeps the clone links
//! around so callers can pick a protocol without digging through the raw
//! response themselves.

use serde::Deserialize;
use thiserror::Error;

/// A repository as returned by the Stash API.
#[derive(Debug, Clone, Deserialize)]
pub struct StashRepo {
    pub id: u64,
    pub slug: String,
    pub name: String,

    #[serde(default)]
    links: RepoLinks,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RepoLinks {
    #[serde(default)]
    clone: Vec<CloneLink>,
}

/// One entry of the `links.clone` list.
#[derive(Debug, Clone, Deserialize)]
pub struct CloneLink {
    pub name: String,
    pub href: String,
}

/// No clone link advertised for the requested protocol.
#[derive(Debug, Error)]
#[error("no clone link for protocol `{protocol}` found on repository `{repository}`")]
pub struct NoCloneLink {
    pub protocol: String,
    pub repository: String,
}

impl StashRepo {
    /// Get the clone URL for a protocol (`ssh`, `http`).
    pub fn clone_url(&self, protocol: &str) -> Result<&str, NoCloneLink> {
        self.links
            .clone
            .iter()
            .find(|link| link.name == protocol)
            .map(|link| link.href.as_str())
            .ok_or_else(|| NoCloneLink {
                protocol: protocol.to_string(),
                repository: self.name.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StashRepo {
        serde_json::from_str(
            r#"{
                "id": 42,
                "slug": "stashifier",
                "name": "stashifier",
                "links": {
                    "clone": [
                        { "name": "ssh", "href": "ssh://git@git.amplify.com/sharedinfrastructure/stashifier.git" },
                        { "name": "http", "href": "https://git.amplify.com/scm/sharedinfrastructure/stashifier.git" }
                    ]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_clone_url_by_protocol() {
        let repo = sample();
        assert!(repo.clone_url("ssh").unwrap().starts_with("ssh://"));
        assert!(repo.clone_url("http").unwrap().starts_with("https://"));
    }

    #[test]
    fn test_clone_url_unknown_protocol() {
        let repo = sample();
        let err = repo.clone_url("svn").unwrap_err();
        assert_eq!(err.protocol, "svn");
        assert_eq!(err.repository, "stashifier");
    }

    #[test]
    fn test_deserialize_without_links() {
        let repo: StashRepo =
            serde_json::from_str(r#"{ "id": 7, "slug": "bare", "name": "bare" }"#).unwrap();
        assert!(repo.clone_url("ssh").is_err());
    }
}
