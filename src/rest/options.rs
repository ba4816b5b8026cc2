//! Request options shared by several Gerrit endpoints.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_LIMIT;

/// The ref holding a project's configuration.
pub const META_CONFIG_REF: &str = "refs/meta/config";

/// The symbolic ref of a repository's default branch.
pub const HEAD_REF: &str = "HEAD";

/// Paging parameters for list and query endpoints.
///
/// Serializes to Gerrit's `n` (limit) and `S` (skip) query parameters.
/// Unset values are omitted and the server default applies.
///
/// # Example
///
/// ```rust
/// use gerrit_api::rest::ListOptions;
///
/// let options = ListOptions::new(50, 25);
/// let value = serde_json::to_value(&options).unwrap();
/// assert_eq!(value, serde_json::json!({"n": 25, "S": 50}));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Maximum number of results.
    #[serde(rename = "n", skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Number of results to skip from the start.
    #[serde(rename = "S", skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

impl ListOptions {
    /// Creates options for a page. A zero `skip` or `limit` is left unset.
    #[must_use]
    pub const fn new(skip: u32, limit: u32) -> Self {
        Self {
            limit: if limit == 0 { None } else { Some(limit) },
            skip: if skip == 0 { None } else { Some(skip) },
        }
    }

    /// Creates options for a page using the default page size of 25.
    #[must_use]
    pub const fn page(skip: u32) -> Self {
        Self::new(skip, DEFAULT_LIMIT)
    }
}

/// Optional fields requested with the `o` parameter.
///
/// Each option makes the server do more work, so request only what is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdditionalField {
    /// Summary of each label required for submit.
    Labels,
    /// Detailed label votes, including permitted values.
    DetailedLabels,
    /// Submit requirements and their status.
    SubmitRequirements,
    /// The current revision of the change.
    CurrentRevision,
    /// All revisions of the change.
    AllRevisions,
    /// Download commands for each revision.
    DownloadCommands,
    /// Commit information for the current revision.
    CurrentCommit,
    /// Commit information for all revisions.
    AllCommits,
    /// Files modified in the current revision.
    CurrentFiles,
    /// Files modified in all revisions.
    AllFiles,
    /// Name, email and username of every account.
    DetailedAccounts,
    /// Reviewer updates of the change.
    ReviewerUpdates,
    /// Messages posted on the change.
    Messages,
    /// Actions available on the current revision.
    CurrentActions,
    /// Actions available on the change.
    ChangeActions,
    /// Whether the caller has reviewed the change.
    Reviewed,
    /// Skip computing insertions and deletions.
    SkipDiffstat,
    /// Whether the change can be submitted.
    Submittable,
    /// Web links for the change and its revisions.
    WebLinks,
    /// Consistency checks for the change.
    Check,
    /// Footers added on submit.
    CommitFooters,
    /// Push certificates of each revision.
    PushCertificates,
    /// Tracking ids from the commit messages.
    TrackingIds,
    /// Detailed account fields (account queries).
    Details,
    /// All registered emails (account queries).
    AllEmails,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_options_omit_unset_fields() {
        assert_eq!(serde_json::to_value(ListOptions::default()).unwrap(), json!({}));
        assert_eq!(
            serde_json::to_value(ListOptions::new(0, 10)).unwrap(),
            json!({"n": 10})
        );
    }

    #[test]
    fn test_page_uses_default_limit() {
        let options = ListOptions::page(75);
        assert_eq!(options.limit, Some(25));
        assert_eq!(options.skip, Some(75));
    }

    #[test]
    fn test_additional_field_wire_names() {
        assert_eq!(
            serde_json::to_value(AdditionalField::CurrentRevision).unwrap(),
            json!("CURRENT_REVISION")
        );
        assert_eq!(
            serde_json::to_value(AdditionalField::SkipDiffstat).unwrap(),
            json!("SKIP_DIFFSTAT")
        );
        assert_eq!(
            serde_json::to_value(AdditionalField::AllEmails).unwrap(),
            json!("ALL_EMAILS")
        );
    }

    #[test]
    fn test_ref_constants() {
        assert_eq!(META_CONFIG_REF, "refs/meta/config");
        assert_eq!(HEAD_REF, "HEAD");
    }
}
