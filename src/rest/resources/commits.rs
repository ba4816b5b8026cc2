//! Commit endpoints of a project.

use crate::clients::{GerritError, HttpMethod};
use crate::rest::resources::{CommitInfo, ProjectsService};
use crate::rest::build_path;

impl ProjectsService<'_> {
    /// Retrieves a commit of a project. The commit must be visible to the
    /// caller.
    ///
    /// Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-projects.html#get-commit>
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn get_commit(&self, project: &str, commit: &str) -> Result<CommitInfo, GerritError> {
        let path = build_path(
            "projects/{project}/commits/{commit}",
            &[("project", project), ("commit", commit)],
        );
        self.client.invoke(HttpMethod::Get, &path, None).await
    }
}
