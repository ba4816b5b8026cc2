//! Entities and enumerations shared across Gerrit resources.
//!
//! These types are not resources themselves; they appear nested inside
//! changes, projects, branches and tags.

use serde::{Deserialize, Serialize};

use crate::rest::Timestamp;

/// The kind of change a revision introduces relative to its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevisionKind {
    /// Any change that is not one of the kinds below.
    #[default]
    Rework,
    /// Conflict-free rebase with the same commit message.
    TrivialRebase,
    /// Conflict-free merge whose first parent moved.
    MergeFirstParentUpdate,
    /// Same tree and parents, different commit message.
    NoCodeChange,
    /// Same tree, parents and commit message.
    NoChange,
}

impl RevisionKind {
    /// Returns `true` if the revision leaves the code unchanged.
    #[must_use]
    pub const fn is_code_unchanged(&self) -> bool {
        matches!(self, Self::NoCodeChange | Self::NoChange)
    }
}

/// The state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectState {
    /// The project accepts reads and writes.
    #[default]
    Active,
    /// The project can be read but not written.
    ReadOnly,
    /// The project is hidden from everyone but its owners.
    Hidden,
}

/// Project type filter for project listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectType {
    /// Every project.
    #[default]
    All,
    /// Projects holding code.
    Code,
    /// Projects that only hold permissions.
    Permissions,
}

/// The action of a permission rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionAction {
    /// Grants the permission.
    #[default]
    Allow,
    /// Denies the permission, overridable further down the hierarchy.
    Deny,
    /// Denies the permission everywhere below.
    Block,
    /// Grants priority for interactive operations.
    Interactive,
    /// Grants priority for batch operations.
    Batch,
}

impl PermissionAction {
    /// Returns `true` if the rule denies the permission.
    #[must_use]
    pub const fn is_denial(&self) -> bool {
        matches!(self, Self::Deny | Self::Block)
    }
}

/// A link to an external site, such as a code browser.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WebLinkInfo {
    /// The link name.
    pub name: String,

    /// Tooltip for the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    /// The link target.
    pub url: String,

    /// URL of an icon for the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Author or committer of a commit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GitPersonInfo {
    /// The person's name.
    pub name: String,

    /// The person's email address.
    pub email: String,

    /// When the action happened.
    pub date: Timestamp,

    /// Time zone offset from UTC in minutes.
    #[serde(default)]
    pub tz: i32,
}

/// A commit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CommitInfo {
    /// The commit id. Omitted when the commit is nested in a revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    /// The parent commits; only `commit` and `subject` are populated.
    #[serde(default)]
    pub parents: Vec<CommitInfo>,

    /// The author.
    #[serde(default)]
    pub author: GitPersonInfo,

    /// The committer.
    #[serde(default)]
    pub committer: GitPersonInfo,

    /// First line of the commit message.
    #[serde(default)]
    pub subject: String,

    /// The full commit message.
    #[serde(default)]
    pub message: String,

    /// Links to the commit in external sites.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_links: Vec<WebLinkInfo>,
}

/// A REST call the caller can make on a resource.
///
/// Plugins frequently contribute actions, so the set is discovered at
/// runtime.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ActionInfo {
    /// HTTP method of the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Short label for a button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Longer description of the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Whether the action is currently permitted.
    #[serde(default)]
    pub enabled: bool,
}
