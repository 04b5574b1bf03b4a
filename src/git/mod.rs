//! Local git repository helpers.
//!
//! Reads the remote URL and current branch from a checkout on disk and
//! extracts the Stash project (or personal space) and repository name from
//! the remote URL. Supports the URL shapes Stash hands out: `ssh://` with an
//! optional port, scp-style `git@host:PROJ/repo.git`, and `~user` personal
//! namespaces.

use std::path::Path;

use git2::Repository;
use regex::Regex;
use thiserror::Error;

/// Error inspecting a local git checkout.
#[derive(Debug, Error)]
pub enum GitError {
    #[error("not inside a git repository")]
    NotARepository(#[source] git2::Error),

    #[error("remote `{remote}` is not configured")]
    MissingRemote {
        remote: String,
        #[source]
        source: git2::Error,
    },

    #[error("remote `{remote}` has no URL")]
    RemoteWithoutUrl { remote: String },

    #[error("could not read HEAD")]
    Head(#[source] git2::Error),

    #[error("could not parse remote URL `{url}`")]
    UnparseableUrl { url: String },
}

/// Who owns the remote repository: a project or a user's personal space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOwner {
    Project(String),
    /// Personal `~user` namespace
    User(String),
}

/// Information extracted from a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteInfo {
    pub protocol: Option<String>,
    pub ssh_user: Option<String>,
    pub host: String,
    pub owner: Option<RemoteOwner>,
    pub repo: String,
}

/// A local git checkout.
pub struct LocalRepo {
    repo: Repository,
}

impl std::fmt::Debug for LocalRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalRepo").finish_non_exhaustive()
    }
}

impl LocalRepo {
    /// Discover the repository containing `path`.
    pub fn discover(path: &Path) -> Result<Self, GitError> {
        let repo = Repository::discover(path).map_err(GitError::NotARepository)?;
        Ok(LocalRepo { repo })
    }

    /// Get the URL for a remote (presumably `origin`).
    pub fn remote_url(&self, remote: &str) -> Result<String, GitError> {
        let found = self
            .repo
            .find_remote(remote)
            .map_err(|source| GitError::MissingRemote {
                remote: remote.to_string(),
                source,
            })?;

        found
            .url()
            .map(str::to_string)
            .ok_or_else(|| GitError::RemoteWithoutUrl {
                remote: remote.to_string(),
            })
    }

    /// Read the current branch shorthand from HEAD.
    pub fn current_branch(&self) -> Result<String, GitError> {
        let head = self.repo.head().map_err(GitError::Head)?;
        Ok(head.shorthand().unwrap_or("HEAD").to_string())
    }

    /// Extract project/user and repository information from a remote's URL.
    pub fn remote_info(&self, remote: &str) -> Result<RemoteInfo, GitError> {
        let url = self.remote_url(remote)?;
        parse_remote_url(&url).ok_or(GitError::UnparseableUrl { url })
    }
}

/// Parse a git remote URL into its Stash components.
///
/// Returns `None` when the URL does not look like anything Stash would
/// hand out.
pub fn parse_remote_url(url: &str) -> Option<RemoteInfo> {
    let pattern = Regex::new(
        r"(?x)
        ^(?:(?P<protocol>ssh|git|https?)://)?      # optional leading protocol
        (?:(?P<ssh_user>\w+)@)?                    # optional ssh user
        (?P<host>[.\w-]+?)(?::\d+/|[:/])           # host, optional port, separator
        (?:(?:~(?P<user>[^/]+)|(?P<project>[^/~]+))/)?  # ~user or project
        (?P<repo>[^/]+?)(?:\.git)?$                # repository name
        ",
    )
    .unwrap();

    let captures = pattern.captures(url)?;

    let group = |name: &str| captures.name(name).map(|m| m.as_str().to_string());

    let owner = if let Some(user) = group("user") {
        Some(RemoteOwner::User(user))
    } else {
        group("project").map(RemoteOwner::Project)
    };

    Some(RemoteInfo {
        protocol: group("protocol"),
        ssh_user: group("ssh_user"),
        host: group("host")?,
        owner,
        repo: group("repo")?,
    })
}
