//! Change endpoints.
//!
//! Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-changes.html>
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::{TimeZone, Utc};
//! use gerrit_api::query::{time_value, Query};
//! use gerrit_api::rest::resources::QueryChangesOptions;
//! use gerrit_api::rest::{AdditionalField, ListOptions};
//!
//! let since = Utc.with_ymd_and_hms(2024, 11, 19, 8, 51, 36).unwrap();
//! let query = Query::and([
//!     Query::or([Query::field("status", "open"), Query::field("status", "merged")]),
//!     Query::field("since", time_value(since)),
//! ]);
//!
//! let options = QueryChangesOptions::new(&query)
//!     .list(ListOptions::new(0, 100))
//!     .field(AdditionalField::CurrentRevision)
//!     .field(AdditionalField::CurrentCommit);
//!
//! let changes = client.changes().query_changes(&options).await?;
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::clients::{GerritClient, GerritError, HttpMethod};
use crate::query::Query;
use crate::rest::resources::{query_args, AccountInfo, ActionInfo, CommitInfo, RevisionKind};
use crate::rest::{build_path, AdditionalField, ListOptions, Timestamp};

/// The status of a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeStatus {
    /// The change is open.
    #[default]
    New,
    /// The change was submitted.
    Merged,
    /// The change was abandoned.
    Abandoned,
}

impl ChangeStatus {
    /// Returns `true` if the change is merged or abandoned.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Merged | Self::Abandoned)
    }
}

/// A user in the attention set of a change.
///
/// <https://gerrit-review.googlesource.com/Documentation/rest-api-changes.html#attention-set-info>
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AttentionSetInfo {
    /// The user.
    pub account: AccountInfo,

    /// When the entry was last updated.
    #[serde(default)]
    pub last_update: Timestamp,

    /// Why the user was added or removed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// The account the reason refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_account: Option<AccountInfo>,
}

/// A patch set of a change.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RevisionInfo {
    /// How the revision relates to the previous one.
    #[serde(default)]
    pub kind: RevisionKind,

    /// The patch set number.
    #[serde(rename = "_number", default)]
    pub number: u32,

    /// When the patch set was created.
    #[serde(default)]
    pub created: Timestamp,

    /// Who uploaded the patch set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader: Option<AccountInfo>,

    /// The Git ref of the patch set.
    #[serde(rename = "ref", default)]
    pub git_ref: String,

    /// The commit ([`AdditionalField::CurrentCommit`] or
    /// [`AdditionalField::AllCommits`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<CommitInfo>,

    /// The patch set description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Actions available on the revision, keyed by view name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub actions: BTreeMap<String, ActionInfo>,
}

/// Information about a change.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChangeInfo {
    /// Triplet id `project~branch~Change-Id`, or `project~number`.
    pub id: String,

    /// The project name.
    pub project: String,

    /// The target branch, without `refs/heads/`.
    pub branch: String,

    /// The topic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// The `Change-Id` footer value.
    #[serde(default)]
    pub change_id: String,

    /// The subject of the current revision.
    #[serde(default)]
    pub subject: String,

    /// The change status.
    #[serde(default)]
    pub status: ChangeStatus,

    /// When the change was created.
    #[serde(default)]
    pub created: Timestamp,

    /// When the change was last updated.
    #[serde(default)]
    pub updated: Timestamp,

    /// When the change was submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted: Option<Timestamp>,

    /// Hashtags on the change.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hashtags: Vec<String>,

    /// Whether the change can be merged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mergeable: Option<bool>,

    /// Lines inserted.
    #[serde(default)]
    pub insertions: u32,

    /// Lines deleted.
    #[serde(default)]
    pub deletions: u32,

    /// The change number.
    #[serde(rename = "_number", default)]
    pub number: u64,

    /// The owner.
    #[serde(default)]
    pub owner: AccountInfo,

    /// Users in the attention set, keyed by account id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attention_set: BTreeMap<String, AttentionSetInfo>,

    /// Commit id of the current revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_revision: Option<String>,

    /// Revisions keyed by commit id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub revisions: BTreeMap<String, RevisionInfo>,

    /// Whether the change is work in progress.
    #[serde(default)]
    pub work_in_progress: bool,

    /// Whether the change is private.
    #[serde(default)]
    pub is_private: bool,

    /// Set on the last entry when more results are available.
    #[serde(rename = "_more_changes", default)]
    pub more_changes: bool,
}

impl ChangeInfo {
    /// Returns the current revision, if it was requested.
    #[must_use]
    pub fn current(&self) -> Option<&RevisionInfo> {
        self.current_revision
            .as_ref()
            .and_then(|commit| self.revisions.get(commit))
    }
}

/// Options for [`ChangesService::query_changes`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryChangesOptions {
    /// Paging.
    #[serde(flatten)]
    pub list: ListOptions,

    /// The search expression.
    #[serde(rename = "q", skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Optional fields to include.
    #[serde(rename = "o", skip_serializing_if = "Vec::is_empty")]
    pub additional_fields: Vec<AdditionalField>,
}

impl QueryChangesOptions {
    /// Creates options searching for `query`.
    #[must_use]
    pub fn new(query: &Query) -> Self {
        Self {
            query: (!query.is_empty()).then(|| query.to_string()),
            ..Self::default()
        }
    }

    /// Sets the paging options.
    #[must_use]
    pub const fn list(mut self, list: ListOptions) -> Self {
        self.list = list;
        self
    }

    /// Requests an optional field.
    #[must_use]
    pub fn field(mut self, field: AdditionalField) -> Self {
        self.additional_fields.push(field);
        self
    }
}

/// Change operations, obtained from [`GerritClient::changes`].
#[derive(Debug, Clone, Copy)]
pub struct ChangesService<'a> {
    client: &'a GerritClient,
}

impl<'a> ChangesService<'a> {
    pub(crate) const fn new(client: &'a GerritClient) -> Self {
        Self { client }
    }

    /// Queries changes visible to the caller.
    ///
    /// Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-changes.html#list-changes>
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn query_changes(
        &self,
        options: &QueryChangesOptions,
    ) -> Result<Vec<ChangeInfo>, GerritError> {
        let args = query_args(Some(options))?;
        self.client
            .invoke(HttpMethod::Get, "changes/", Some(args.into()))
            .await
    }

    /// Retrieves a change by any of its identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn get_change(
        &self,
        change: &str,
        fields: &[AdditionalField],
    ) -> Result<ChangeInfo, GerritError> {
        let path = build_path("changes/{change}", &[("change", change)]);
        let args = serde_json::json!({ "o": fields });
        self.client
            .invoke(HttpMethod::Get, &path, Some(args))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn change_json() -> serde_json::Value {
        json!({
            "id": "demo~master~I8473b95934b5732ac55d26311a706c9c2bde9940",
            "project": "demo",
            "branch": "master",
            "change_id": "I8473b95934b5732ac55d26311a706c9c2bde9940",
            "subject": "Implementing Feature X",
            "status": "NEW",
            "created": "2013-02-01 09:59:32.126000000",
            "updated": "2013-02-21 11:16:36.775000000",
            "insertions": 34,
            "deletions": 101,
            "_number": 3965,
            "owner": {"name": "John Doe"},
            "attention_set": {
                "1000096": {
                    "account": {"_account_id": 1000096, "name": "John Doe"},
                    "last_update": "2013-02-21 11:16:36.775000000",
                    "reason": "reviewer or cc replied"
                }
            },
            "current_revision": "184ebe53805e102605d11f6b143486d15c23a09c",
            "revisions": {
                "184ebe53805e102605d11f6b143486d15c23a09c": {
                    "kind": "REWORK",
                    "_number": 1,
                    "created": "2013-02-01 09:59:32.126000000",
                    "ref": "refs/changes/65/3965/1"
                }
            }
        })
    }

    #[test]
    fn test_change_info_deserialization() {
        let change: ChangeInfo = serde_json::from_value(change_json()).unwrap();

        assert_eq!(change.number, 3965);
        assert_eq!(change.status, ChangeStatus::New);
        assert_eq!(change.owner.name.as_deref(), Some("John Doe"));
        assert!(change.submitted.is_none());
        assert_eq!(
            change.attention_set["1000096"].reason.as_deref(),
            Some("reviewer or cc replied")
        );
        assert!(!change.more_changes);
    }

    #[test]
    fn test_current_revision_lookup() {
        let change: ChangeInfo = serde_json::from_value(change_json()).unwrap();
        let current = change.current().unwrap();

        assert_eq!(current.number, 1);
        assert_eq!(current.git_ref, "refs/changes/65/3965/1");
        assert_eq!(current.kind, RevisionKind::Rework);
    }

    #[test]
    fn test_query_changes_options_serialization() {
        let query = Query::or([Query::field("status", "open"), Query::field("status", "merged")]);
        let options = QueryChangesOptions::new(&query)
            .list(ListOptions::new(0, 100))
            .field(AdditionalField::CurrentRevision)
            .field(AdditionalField::WebLinks);

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "n": 100,
                "q": "(status:open OR status:merged)",
                "o": ["CURRENT_REVISION", "WEB_LINKS"]
            })
        );
    }

    #[test]
    fn test_empty_query_is_omitted() {
        let options = QueryChangesOptions::new(&Query::or([]));
        assert!(options.query.is_none());
        assert_eq!(serde_json::to_value(&options).unwrap(), json!({}));
    }

    #[test]
    fn test_change_status_helpers() {
        assert!(ChangeStatus::Merged.is_closed());
        assert!(!ChangeStatus::New.is_closed());
    }
}
