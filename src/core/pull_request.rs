//! Pull request entities from the Stash API.

use serde::{Deserialize, Serialize};

/// A pull request, with the fields we summarize plus everything else the
/// server sent, so a full dump stays faithful to the upstream response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub id: u64,
    pub title: String,
    pub state: String,

    #[serde(default)]
    pub author: Option<Participant>,

    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

/// A pull request participant (author, reviewer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub user: UserRef,

    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

/// Minimal user reference embedded in other entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub name: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

impl PullRequest {
    /// Display name of the author, falling back to the login name.
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().map(|participant| {
            participant
                .user
                .display_name
                .as_deref()
                .unwrap_or(&participant.user.name)
        })
    }

    /// Dump the full upstream representation as JSON.
    pub fn dump(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
