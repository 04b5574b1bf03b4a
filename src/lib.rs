//! Stashifier - Stash client library and repository tooling
//!
//! This crate provides the library functionality behind the `stash` CLI:
//! the immutable project metadata record read from `Project.toml`, a
//! blocking REST client for the Stash API, local git inspection, and
//! layered client configuration.

pub mod core;
pub mod git;
pub mod rest;
pub mod util;

pub use core::{
    metadata::ProjectMetadata, page::Paged, permission::PermissionGrant,
    pull_request::PullRequest, repo::StashRepo,
};

pub use git::LocalRepo;
pub use rest::{Scope, StashClient};
pub use util::ClientConfig;
