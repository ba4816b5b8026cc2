//! Branch endpoints of a project.
//!
//! Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-projects.html#branch-endpoints>

use serde::{Deserialize, Serialize};

use crate::clients::{GerritError, HttpMethod};
use crate::rest::resources::{query_args, ProjectsService, WebLinkInfo};
use crate::rest::build_path;

/// Information about a branch.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BranchInfo {
    /// The full ref name, such as `refs/heads/master`.
    #[serde(rename = "ref")]
    pub git_ref: String,

    /// The commit the branch points to. Symbolic refs such as `HEAD` carry
    /// the target ref name instead.
    pub revision: String,

    /// Whether the caller may delete the branch.
    #[serde(default)]
    pub can_delete: bool,

    /// Links to the branch in external sites.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_links: Vec<WebLinkInfo>,
}

impl BranchInfo {
    /// Returns the branch name without the `refs/heads/` prefix.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.git_ref
            .strip_prefix("refs/heads/")
            .unwrap_or(&self.git_ref)
    }
}

/// Options for [`ProjectsService::list_branches`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListBranchesOptions {
    /// Maximum number of branches.
    #[serde(rename = "n", skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Number of branches to skip.
    #[serde(rename = "S", skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,

    /// Only branches containing this substring, case-insensitive.
    #[serde(rename = "m", skip_serializing_if = "Option::is_none")]
    pub substring: Option<String>,

    /// Only branches matching this regex.
    #[serde(rename = "r", skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

impl ProjectsService<'_> {
    /// Lists the branches of a project, including `HEAD` and
    /// `refs/meta/config`.
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn list_branches(
        &self,
        project: &str,
        options: Option<&ListBranchesOptions>,
    ) -> Result<Vec<BranchInfo>, GerritError> {
        let path = build_path("projects/{project}/branches/", &[("project", project)]);
        let args = query_args(options)?;
        self.client
            .invoke(HttpMethod::Get, &path, Some(args.into()))
            .await
    }

    /// Retrieves a branch. `branch` may be given with or without
    /// `refs/heads/`.
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn get_branch(&self, project: &str, branch: &str) -> Result<BranchInfo, GerritError> {
        let path = build_path(
            "projects/{project}/branches/{branch}",
            &[("project", project), ("branch", branch)],
        );
        self.client.invoke(HttpMethod::Get, &path, None).await
    }
}
