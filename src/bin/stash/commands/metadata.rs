//! `stash metadata` command
//!
//! Loads Project.toml and prints the normalized record.

use std::path::PathBuf;

use anyhow::{Context, Result};

use stashifier::core::metadata::{ProjectMetadata, METADATA_FILE};

use crate::cli::MetadataArgs;

pub fn execute(args: MetadataArgs) -> Result<()> {
    let path = args
        .manifest_path
        .unwrap_or_else(|| PathBuf::from(METADATA_FILE));

    let meta = ProjectMetadata::load(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    println!("package:       {}", meta.package_name);
    println!("project:       {}", meta.project_name);
    println!("code type:     {}", meta.code_type);
    println!("component:     {}", meta.is_component);
    println!("style checks:  pep8={} lint={}", meta.style.pep8, meta.style.lint);
    if let Some(host_class) = &meta.host_class {
        println!("host class:    {}", host_class);
    }
    if !meta.description.is_empty() {
        println!("description:   {}", meta.description);
    }
    if !meta.keywords.is_empty() {
        println!("keywords:      {}", meta.keywords);
    }
    println!("author:        {} <{}>", meta.author.name, meta.author.email);
    if let Some(im) = &meta.author.im {
        println!("author im:     {}", im);
    }
    if !meta.organization.is_empty() {
        println!("organization:  {}", meta.organization);
    }
    if let Some(url) = &meta.url {
        println!("url:           {}", url);
    }
    println!("license:       {}", meta.license_name);
    println!("zip safe:      {}", meta.zip_safe);
    println!("registry:      {}", meta.servers.artifact_registry_url);
    println!("ci server:     {}", meta.servers.ci_server_url);
    println!("source host:   {}", meta.servers.source_host);

    Ok(())
}
