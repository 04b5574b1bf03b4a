//! Project.toml metadata parsing and schema.
//!
//! `Project.toml` is a flat key/value document describing the package for
//! external build, packaging, and CI tooling. It is read once into an
//! immutable [`ProjectMetadata`] record and passed explicitly to whatever
//! needs it; nothing mutates it after load.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Canonical metadata file name.
pub const METADATA_FILE: &str = "Project.toml";

/// Error loading or validating project metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to read project metadata at {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse project metadata")]
    Parse(#[from] toml::de::Error),

    #[error("missing or invalid field `{field}`: {reason}")]
    MissingOrInvalidField { field: &'static str, reason: String },
}

impl MetadataError {
    fn missing(field: &'static str) -> Self {
        MetadataError::MissingOrInvalidField {
            field,
            reason: "required field is absent or empty".to_string(),
        }
    }

    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        MetadataError::MissingOrInvalidField {
            field,
            reason: reason.into(),
        }
    }
}

/// Packaging classification consumed by the build tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeType {
    /// An importable library package
    Library,
    /// A deployable application
    Application,
    /// A standalone developer tool
    Tool,
}

impl CodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeType::Library => "library",
            CodeType::Application => "application",
            CodeType::Tool => "tool",
        }
    }
}

impl std::fmt::Display for CodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style-check toggles for the external linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleChecks {
    pub pep8: bool,
    pub lint: bool,
}

/// Package author contact details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
    /// Instant-messaging handle, rarely set
    pub im: Option<String>,
}

/// External service endpoints the project publishes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Servers {
    /// Registry that stores and serves built packages
    pub artifact_registry_url: Url,
    /// Continuous-integration server building the project
    pub ci_server_url: Url,
    /// Hostname of the version-control hosting service
    pub source_host: String,
}

/// The loaded, validated project metadata record.
///
/// Constructed once via [`ProjectMetadata::load`] and never mutated.
/// Boolean-semantic fields are genuine booleans here regardless of how the
/// source document spelled them, and optional fields distinguish "not
/// provided" from "provided as empty".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    /// Distribution/package identifier
    pub package_name: String,

    /// Human-facing project identifier (defaults to the package name)
    pub project_name: String,

    /// Packaging strategy selector
    pub code_type: CodeType,

    /// Component flag consumed by downstream tooling
    pub is_component: bool,

    /// Linter toggles for the test tree
    pub style: StyleChecks,

    /// Deployment target classification
    pub host_class: Option<String>,

    pub description: String,
    pub long_description: String,
    pub keywords: String,

    pub author: Author,
    pub organization: String,
    pub url: Option<String>,
    pub license_name: String,
    pub zip_safe: bool,

    pub servers: Servers,
}

/// A boolean that tolerates string spellings in the source document.
///
/// Legacy definitions wrote `zip_safe = "True"` while newer ones use native
/// booleans; both normalize to `bool` at load time.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum BoolFlag {
    Native(bool),
    Text(String),
}

impl BoolFlag {
    fn normalize(self, field: &'static str) -> Result<bool, MetadataError> {
        match self {
            BoolFlag::Native(value) => Ok(value),
            BoolFlag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(MetadataError::invalid(
                    field,
                    format!("`{}` is not a boolean", other),
                )),
            },
        }
    }
}

/// Raw metadata as deserialized from the flat TOML document.
#[derive(Debug, Deserialize)]
struct RawMetadata {
    package: Option<String>,
    project: Option<String>,
    code_type: Option<CodeType>,
    is_component: Option<BoolFlag>,
    test_pep8: Option<BoolFlag>,
    test_lint: Option<BoolFlag>,
    host_class: Option<String>,

    #[serde(default)]
    description: String,

    #[serde(default)]
    long_description: String,

    #[serde(default)]
    keywords: String,

    author: Option<String>,

    #[serde(default)]
    author_email: String,

    author_im: Option<String>,

    #[serde(default)]
    organization: String,

    url: Option<String>,
    license: Option<String>,
    zip_safe: Option<BoolFlag>,

    artifact_registry_url: Option<String>,
    ci_server_url: Option<String>,
    source_host: Option<String>,
}

impl ProjectMetadata {
    /// Load the metadata record from a file path.
    pub fn load(path: &Path) -> Result<Self, MetadataError> {
        let content = std::fs::read_to_string(path).map_err(|source| MetadataError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::parse(&content)
    }

    /// Parse the metadata record from document content.
    pub fn parse(content: &str) -> Result<Self, MetadataError> {
        let raw: RawMetadata = toml::from_str(content)?;

        let package_name = required("package", raw.package)?;
        let project_name = match optional(raw.project) {
            Some(name) => name,
            None => package_name.clone(),
        };

        Ok(ProjectMetadata {
            package_name,
            project_name,
            code_type: raw.code_type.unwrap_or(CodeType::Library),
            is_component: flag("is_component", raw.is_component, false)?,
            style: StyleChecks {
                pep8: flag("test_pep8", raw.test_pep8, true)?,
                lint: flag("test_lint", raw.test_lint, true)?,
            },
            host_class: optional(raw.host_class),
            description: raw.description,
            long_description: raw.long_description,
            keywords: raw.keywords,
            author: Author {
                name: required("author", raw.author)?,
                email: raw.author_email,
                im: optional(raw.author_im),
            },
            organization: raw.organization,
            url: optional(raw.url),
            license_name: required("license", raw.license)?,
            zip_safe: flag("zip_safe", raw.zip_safe, false)?,
            servers: Servers {
                artifact_registry_url: server_url(
                    "artifact_registry_url",
                    raw.artifact_registry_url,
                )?,
                ci_server_url: server_url("ci_server_url", raw.ci_server_url)?,
                source_host: required("source_host", raw.source_host)?,
            },
        })
    }
}

/// A required field: absent or blank fails the load.
fn required(field: &'static str, value: Option<String>) -> Result<String, MetadataError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(MetadataError::missing(field)),
    }
}

/// An optional field: absent and blank both mean "not provided".
fn optional(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn flag(
    field: &'static str,
    value: Option<BoolFlag>,
    default: bool,
) -> Result<bool, MetadataError> {
    match value {
        Some(raw) => raw.normalize(field),
        None => Ok(default),
    }
}

fn server_url(field: &'static str, value: Option<String>) -> Result<Url, MetadataError> {
    let text = required(field, value)?;
    Url::parse(&text).map_err(|e| MetadataError::invalid(field, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CANONICAL: &str = r#"
package = "stashifier"
project = "stashifier"
code_type = "library"
is_component = false
test_pep8 = true
test_lint = true
description = "Stash client library for Amplify utilities."
long_description = ""
keywords = ""
author = "Ben Warfield"
author_email = "bwarfield@amplify.com"
author_im = ""
organization = "SHAREDINFRASTRUCTURE"
url = ""
license = "amplify"
zip_safe = "True"
artifact_registry_url = "https://packages.wgenhq.net/pynest"
ci_server_url = "https://poe210.wgenhq.net/jenkins"
source_host = "git.amplify.com"
"#;

    #[test]
    fn test_parse_canonical_document() {
        let meta = ProjectMetadata::parse(CANONICAL).unwrap();

        assert_eq!(meta.package_name, "stashifier");
        assert_eq!(meta.project_name, "stashifier");
        assert_eq!(meta.code_type, CodeType::Library);
        assert!(!meta.is_component);
        assert!(meta.style.pep8);
        assert!(meta.style.lint);
        assert_eq!(meta.author.name, "Ben Warfield");
        assert_eq!(meta.author.email, "bwarfield@amplify.com");
        assert_eq!(meta.license_name, "amplify");
        assert_eq!(meta.servers.source_host, "git.amplify.com");
        assert_eq!(
            meta.servers.ci_server_url.as_str(),
            "https://poe210.wgenhq.net/jenkins"
        );
    }

    #[test]
    fn test_load_twice_yields_equal_records() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(METADATA_FILE);
        std::fs::write(&path, CANONICAL).unwrap();

        let first = ProjectMetadata::load(&path).unwrap();
        let second = ProjectMetadata::load(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_string_booleans_normalize() {
        let meta = ProjectMetadata::parse(CANONICAL).unwrap();
        // zip_safe = "True" in the source document
        assert!(meta.zip_safe);

        let lowered = CANONICAL.replace("zip_safe = \"True\"", "zip_safe = \"false\"");
        let meta = ProjectMetadata::parse(&lowered).unwrap();
        assert!(!meta.zip_safe);

        let native = CANONICAL.replace("zip_safe = \"True\"", "zip_safe = true");
        let meta = ProjectMetadata::parse(&native).unwrap();
        assert!(meta.zip_safe);
    }

    #[test]
    fn test_bad_boolean_text_is_rejected() {
        let garbled = CANONICAL.replace("zip_safe = \"True\"", "zip_safe = \"yep\"");
        let err = ProjectMetadata::parse(&garbled).unwrap_err();
        match err {
            MetadataError::MissingOrInvalidField { field, .. } => {
                assert_eq!(field, "zip_safe");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_package_fails_naming_field() {
        let doc = CANONICAL.replace("package = \"stashifier\"", "");
        let err = ProjectMetadata::parse(&doc).unwrap_err();
        assert!(matches!(
            err,
            MetadataError::MissingOrInvalidField { field: "package", .. }
        ));
    }

    #[test]
    fn test_blank_required_fields_fail() {
        for (key, line) in [
            ("package", "package = \"stashifier\""),
            ("author", "author = \"Ben Warfield\""),
            ("license", "license = \"amplify\""),
        ] {
            let doc = CANONICAL.replace(line, &format!("{} = \"  \"", key));
            let err = ProjectMetadata::parse(&doc).unwrap_err();
            match err {
                MetadataError::MissingOrInvalidField { field, .. } => assert_eq!(field, key),
                other => panic!("unexpected error for {}: {}", key, other),
            }
        }
    }

    #[test]
    fn test_empty_optionals_normalize_to_none() {
        let meta = ProjectMetadata::parse(CANONICAL).unwrap();
        // url and author_im are empty strings in the document; host_class is absent
        assert_eq!(meta.url, None);
        assert_eq!(meta.author.im, None);
        assert_eq!(meta.host_class, None);
    }

    #[test]
    fn test_provided_optionals_survive() {
        let doc = format!("{}\nhost_class = \"mhcstash\"\n", CANONICAL);
        let meta = ProjectMetadata::parse(&doc).unwrap();
        assert_eq!(meta.host_class.as_deref(), Some("mhcstash"));
    }

    #[test]
    fn test_project_name_defaults_to_package_name() {
        let doc = CANONICAL.replace("project = \"stashifier\"", "");
        let meta = ProjectMetadata::parse(&doc).unwrap();
        assert_eq!(meta.project_name, "stashifier");
    }

    #[test]
    fn test_unknown_code_type_is_rejected() {
        let doc = CANONICAL.replace("code_type = \"library\"", "code_type = \"firmware\"");
        assert!(ProjectMetadata::parse(&doc).is_err());
    }

    #[test]
    fn test_missing_server_field_fails() {
        let doc = CANONICAL.replace("source_host = \"git.amplify.com\"", "");
        let err = ProjectMetadata::parse(&doc).unwrap_err();
        assert!(matches!(
            err,
            MetadataError::MissingOrInvalidField { field: "source_host", .. }
        ));
    }

    #[test]
    fn test_invalid_server_url_fails() {
        let doc = CANONICAL.replace(
            "ci_server_url = \"https://poe210.wgenhq.net/jenkins\"",
            "ci_server_url = \"not a url\"",
        );
        let err = ProjectMetadata::parse(&doc).unwrap_err();
        assert!(matches!(
            err,
            MetadataError::MissingOrInvalidField { field: "ci_server_url", .. }
        ));
    }
}
