//! Core data structures for the Stash client.
//!
//! This module contains the foundational types:
//! - The project metadata record read from Project.toml
//! - Stash API entities (repositories, pull requests, permissions)
//! - The paged response envelope

pub mod metadata;
pub mod page;
pub mod permission;
pub mod pull_request;
pub mod repo;

pub use metadata::{MetadataError, ProjectMetadata, METADATA_FILE};
pub use page::{Paged, PagedResponse};
pub use permission::PermissionGrant;
pub use pull_request::PullRequest;
pub use repo::StashRepo;
