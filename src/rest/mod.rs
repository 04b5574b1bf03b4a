//! REST client for the Stash API.
//!
//! All requests go through [`StashClient`], which owns the base URL and
//! credentials explicitly rather than stashing them in module globals. URL
//! construction follows the Stash namespace rules: a request addresses
//! exactly one of `projects/{key}` or `users/{slug}`, optionally a
//! repository under it, then further path segments.

pub mod errors;

use reqwest::blocking::Response;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::core::page::{Paged, PagedResponse};
use crate::core::permission::PermissionGrant;
use crate::core::pull_request::PullRequest;
use crate::core::repo::StashRepo;

pub use errors::RestError;

/// Stash REST API version this client speaks.
pub const STASH_API_VERSION: &str = "1.0";

const PROJECT_NAMESPACE: &str = "projects";
const USER_NAMESPACE: &str = "users";
const REPOSITORY_NAMESPACE: &str = "repos";

/// The namespace a request addresses: a project or a personal space.
///
/// The API accepts one or the other, never both; making this an enum keeps
/// that rule out of every call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// `projects/{key}`
    Project(String),
    /// `users/{slug}`
    User(String),
}

impl Scope {
    fn segments(&self) -> [&str; 2] {
        match self {
            Scope::Project(key) => [PROJECT_NAMESPACE, key.as_str()],
            Scope::User(slug) => [USER_NAMESPACE, slug.as_str()],
        }
    }
}

/// Basic-auth credentials for the Stash server.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Outcome of a repository deletion.
///
/// Stash answers 202 with a message body, or an empty body on some
/// versions; both count as success.
#[derive(Debug, Clone)]
pub struct DeleteOutcome {
    pub status: StatusCode,
    pub message: Option<String>,
}

/// Error envelope the Stash API uses for failed requests.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

/// Blocking client for one Stash server.
pub struct StashClient {
    base: Url,
    credentials: Option<Credentials>,
    http: reqwest::blocking::Client,
}

impl StashClient {
    /// Create a client for a Stash host, e.g. `git.amplify.com`.
    pub fn new(host: &str) -> Result<Self, RestError> {
        let base = Url::parse(&format!("https://{}/rest/api/{}", host, STASH_API_VERSION))?;
        Ok(Self::with_base_url(base))
    }

    /// Create a client against an explicit API base URL.
    pub fn with_base_url(base: Url) -> Self {
        StashClient {
            base,
            credentials: None,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Attach basic-auth credentials to every request.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Build an API URL under the given scope.
    pub fn api_url(
        &self,
        scope: &Scope,
        repository: Option<&str>,
        tail: &[&str],
    ) -> Result<Url, RestError> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| RestError::Input("API base URL cannot hold a path".to_string()))?;
            segments.extend(scope.segments());
            if let Some(repository) = repository {
                segments.push(REPOSITORY_NAMESPACE);
                segments.push(repository);
            }
            segments.extend(tail);
        }
        Ok(url)
    }

    /// Create a repository in the given scope.
    pub fn create_repository(&self, scope: &Scope, name: &str) -> Result<StashRepo, RestError> {
        if name.trim().is_empty() {
            return Err(RestError::Input(
                "repository name must not be empty".to_string(),
            ));
        }

        let url = self.api_url(scope, None, &[REPOSITORY_NAMESPACE])?;
        let body = serde_json::json!({ "name": name });
        tracing::debug!("POST {} with {}", url, body);

        let response = self
            .authorized(self.http.post(url.clone()))
            .json(&body)
            .send()
            .map_err(|source| RestError::Transport {
                url: url.to_string(),
                source,
            })?;

        let response = Self::check_status(response)?;
        response.json().map_err(RestError::Decode)
    }

    /// Delete a repository in the given scope.
    pub fn delete_repository(&self, scope: &Scope, name: &str) -> Result<DeleteOutcome, RestError> {
        let url = self.api_url(scope, Some(name), &[])?;
        tracing::debug!("DELETE {}", url);

        let response = self
            .authorized(self.http.delete(url.clone()))
            .send()
            .map_err(|source| RestError::Transport {
                url: url.to_string(),
                source,
            })?;

        let response = Self::check_status(response)?;
        let status = response.status();
        let text = response.text().map_err(RestError::Decode)?;

        let message = if text.trim().is_empty() {
            None
        } else {
            serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|value| value.get("message").and_then(|m| m.as_str().map(String::from)))
        };

        Ok(DeleteOutcome { status, message })
    }

    /// List the repositories visible in a scope.
    pub fn list_repositories(
        &self,
        scope: &Scope,
        limit: Option<u64>,
    ) -> Result<Paged<StashRepo>, RestError> {
        let url = self.api_url(scope, None, &[REPOSITORY_NAMESPACE])?;
        self.get_paged(url, limit)
    }

    /// List pull requests for a repository, optionally filtered by state.
    pub fn list_pull_requests(
        &self,
        scope: &Scope,
        repository: &str,
        state: Option<&str>,
    ) -> Result<Paged<PullRequest>, RestError> {
        let mut url = self.api_url(scope, Some(repository), &["pull-requests"])?;
        if let Some(state) = state {
            url.query_pairs_mut().append_pair("state", state);
        }
        self.get_paged(url, None)
    }

    /// List the user permission grants on a project.
    ///
    /// Permissions only exist in the project namespace.
    pub fn list_user_permissions(
        &self,
        project: &str,
        filter: Option<&str>,
    ) -> Result<Paged<PermissionGrant>, RestError> {
        let scope = Scope::Project(project.to_string());
        let mut url = self.api_url(&scope, None, &["permissions", "users"])?;
        if let Some(filter) = filter {
            url.query_pairs_mut().append_pair("filter", filter);
        }
        self.get_paged(url, None)
    }

    /// GET a paged endpoint, following `nextPageStart` until the last page.
    fn get_paged<T: DeserializeOwned>(
        &self,
        url: Url,
        limit: Option<u64>,
    ) -> Result<Paged<T>, RestError> {
        let mut paged = Paged::new();
        let mut start: Option<u64> = None;

        loop {
            let mut page_url = url.clone();
            {
                let mut pairs = page_url.query_pairs_mut();
                if let Some(start) = start {
                    pairs.append_pair("start", &start.to_string());
                }
                if let Some(limit) = limit {
                    pairs.append_pair("limit", &limit.to_string());
                }
            }
            tracing::debug!("GET {}", page_url);

            let response = self
                .authorized(self.http.get(page_url.clone()))
                .send()
                .map_err(|source| RestError::Transport {
                    url: page_url.to_string(),
                    source,
                })?;

            let response = Self::check_status(response)?;
            let page: PagedResponse<T> = response.json().map_err(RestError::Decode)?;

            let is_last = page.is_last_page;
            let next = page.next_page_start;
            paged.push_page(page);

            match (is_last, next) {
                (false, Some(next)) => start = Some(next),
                _ => break,
            }
        }

        Ok(paged)
    }

    fn authorized(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.credentials {
            Some(credentials) => {
                request.basic_auth(&credentials.username, Some(&credentials.password))
            }
            None => request,
        }
    }

    /// Turn a non-success response into a `RestError::Response`, pulling
    /// messages out of the Stash error envelope when present.
    fn check_status(response: Response) -> Result<Response, RestError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let reason = status
            .canonical_reason()
            .unwrap_or("unknown reason")
            .to_string();

        let errors = response
            .text()
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorEnvelope>(&body).ok())
            .map(|envelope| {
                envelope
                    .errors
                    .into_iter()
                    .map(|entry| entry.message)
                    .collect()
            })
            .unwrap_or_default();

        Err(RestError::Response {
            status,
            reason,
            errors,
        })
    }
}
