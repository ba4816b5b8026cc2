//! Project endpoints.
//!
//! Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-projects.html>
//!
//! Branch, tag, commit and access operations on projects live in their own
//! modules but are all reached through [`ProjectsService`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::clients::{GerritClient, GerritError, HttpMethod};
use crate::rest::resources::{query_args, ProjectState, ProjectType, WebLinkInfo};
use crate::rest::build_path;

/// Information about a project.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProjectInfo {
    /// The URL-encoded project name.
    pub id: String,

    /// The project name. Omitted when the project is a map key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The parent project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// The description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The project state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ProjectState>,

    /// Branch names mapped to revisions, when filtered by branch.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub branches: BTreeMap<String, String>,

    /// Links to the project in external sites.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_links: Vec<WebLinkInfo>,
}

/// Options for [`ProjectsService::list_projects`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListProjectsOptions {
    /// Maximum number of projects.
    #[serde(rename = "n", skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Number of projects to skip.
    #[serde(rename = "S", skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,

    /// Only projects with this branch; its revision is included.
    #[serde(rename = "b", skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Include project descriptions.
    #[serde(rename = "d", skip_serializing_if = "Option::is_none")]
    pub description: Option<bool>,

    /// Only projects starting with this prefix.
    #[serde(rename = "p", skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Only projects matching this regex; `^` and `$` are implicit.
    #[serde(rename = "r", skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,

    /// Only projects containing this substring.
    #[serde(rename = "m", skip_serializing_if = "Option::is_none")]
    pub substring: Option<String>,

    /// Return the inheritance tree. Cannot be combined with `branch`.
    #[serde(rename = "t", skip_serializing_if = "Option::is_none")]
    pub tree: Option<bool>,

    /// Only projects of this type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
}

/// Submit strategy of a new project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmitType {
    /// Inherit the parent's setting.
    Inherit,
    /// Merge only if the change is a fast-forward.
    FastForwardOnly,
    /// Fast-forward when possible, merge otherwise.
    MergeIfNecessary,
    /// Always create a merge commit.
    MergeAlways,
    /// Cherry-pick onto the branch.
    CherryPick,
    /// Rebase when the change is not a fast-forward.
    RebaseIfNecessary,
    /// Always rebase.
    RebaseAlways,
}

/// Body of [`ProjectsService::create_project`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateProjectInput {
    /// Parent project; defaults to `All-Projects`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// The description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Only hold permissions, no code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_only: Option<bool>,

    /// Create an initial empty commit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_empty_commit: Option<bool>,

    /// The submit strategy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_type: Option<SubmitType>,

    /// Initial branches; the first becomes `HEAD`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<String>,

    /// Groups owning the project.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owners: Vec<String>,
}

/// Body of [`ProjectsService::set_head`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct HeadInput<'a> {
    #[serde(rename = "ref")]
    git_ref: &'a str,
}

/// Git repository statistics of a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RepositoryStatisticsInfo {
    /// Number of loose objects.
    #[serde(default)]
    pub number_of_loose_objects: u64,
    /// Number of loose refs.
    #[serde(default)]
    pub number_of_loose_refs: u64,
    /// Number of pack files.
    #[serde(default)]
    pub number_of_pack_files: u64,
    /// Number of packed objects.
    #[serde(default)]
    pub number_of_packed_objects: u64,
    /// Number of packed refs.
    #[serde(default)]
    pub number_of_packed_refs: u64,
    /// Size of loose objects in bytes.
    #[serde(default)]
    pub size_of_loose_objects: u64,
    /// Size of packed objects in bytes.
    #[serde(default)]
    pub size_of_packed_objects: u64,
}

/// Project operations, obtained from [`GerritClient::projects`].
#[derive(Debug, Clone, Copy)]
pub struct ProjectsService<'a> {
    pub(super) client: &'a GerritClient,
}

impl<'a> ProjectsService<'a> {
    pub(crate) const fn new(client: &'a GerritClient) -> Self {
        Self { client }
    }

    /// Lists projects accessible by the caller, keyed by name.
    ///
    /// Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-projects.html#list-projects>
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn list_projects(
        &self,
        options: Option<&ListProjectsOptions>,
    ) -> Result<BTreeMap<String, ProjectInfo>, GerritError> {
        let args = query_args(options)?;
        self.client
            .invoke(HttpMethod::Get, "projects/", Some(args.into()))
            .await
    }

    /// Retrieves a project.
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn get_project(&self, project: &str) -> Result<ProjectInfo, GerritError> {
        let path = build_path("projects/{project}", &[("project", project)]);
        self.client.invoke(HttpMethod::Get, &path, None).await
    }

    /// Creates a project.
    ///
    /// Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-projects.html#create-project>
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails; `409 Conflict` if the
    /// project already exists.
    pub async fn create_project(
        &self,
        project: &str,
        input: &CreateProjectInput,
    ) -> Result<ProjectInfo, GerritError> {
        let path = build_path("projects/{project}", &[("project", project)]);
        let body = serde_json::to_value(input)?;
        self.client.invoke(HttpMethod::Put, &path, Some(body)).await
    }

    /// Returns the ref `HEAD` points to, such as `refs/heads/master`.
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn get_head(&self, project: &str) -> Result<String, GerritError> {
        let path = build_path("projects/{project}/HEAD", &[("project", project)]);
        self.client.invoke(HttpMethod::Get, &path, None).await
    }

    /// Points `HEAD` at `git_ref` and returns the new target.
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn set_head(&self, project: &str, git_ref: &str) -> Result<String, GerritError> {
        let path = build_path("projects/{project}/HEAD", &[("project", project)]);
        let body = serde_json::to_value(HeadInput { git_ref })?;
        self.client.invoke(HttpMethod::Put, &path, Some(body)).await
    }

    /// Returns statistics of the project's Git repository.
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn get_repository_statistics(
        &self,
        project: &str,
    ) -> Result<RepositoryStatisticsInfo, GerritError> {
        let path = build_path("projects/{project}/statistics.git", &[("project", project)]);
        self.client.invoke(HttpMethod::Get, &path, None).await
    }
}
