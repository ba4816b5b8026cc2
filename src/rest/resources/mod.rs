//! Gerrit REST resources.
//!
//! Each resource family exposes a service borrowed from a
//! [`GerritClient`](crate::clients::GerritClient):
//!
//! - [`AccountsService`]: account queries and activation
//! - [`ChangesService`]: change queries and lookups
//! - [`ProjectsService`]: projects, with their branches, tags, commits and
//!   access rights
//! - [`GroupsService`]: groups and their members
//! - [`ConfigService`]: server version and settings
//!
//! Option structs serialize to query parameters for `GET` calls, using the
//! short names Gerrit expects (`n`, `S`, `o`, ...). Optional fields that are
//! unset are left out of the request.
//!
//! # Example
//!
//! ```rust,ignore
//! use gerrit_api::rest::resources::{ListBranchesOptions, ListProjectsOptions};
//!
//! let projects = client
//!     .projects()
//!     .list_projects(Some(&ListProjectsOptions {
//!         prefix: Some("platform/".to_string()),
//!         ..Default::default()
//!     }))
//!     .await?;
//!
//! for name in projects.keys() {
//!     let branches = client.projects().list_branches(name, None).await?;
//!     println!("{name}: {} branches", branches.len());
//! }
//! ```

mod access;
mod accounts;
mod branches;
mod changes;
mod commits;
mod common;
mod config;
mod groups;
mod projects;
mod tags;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::GerritError;

pub use access::{AccessSectionInfo, PermissionInfo, PermissionRuleInfo, ProjectAccessInfo};
pub use accounts::{
    AccountInfo, AccountsService, AvatarInfo, ListAccountsOptions, QueryAccountsOptions,
};
pub use branches::{BranchInfo, ListBranchesOptions};
pub use changes::{
    AttentionSetInfo, ChangeInfo, ChangeStatus, ChangesService, QueryChangesOptions, RevisionInfo,
};
pub use common::{
    ActionInfo, CommitInfo, GitPersonInfo, PermissionAction, ProjectState, ProjectType,
    RevisionKind, WebLinkInfo,
};
pub use config::{
    AuthInfo, ChangeConfigInfo, ConfigService, DownloadInfo, DownloadSchemeInfo, GerritInfo,
    PluginConfigInfo, ReceiveInfo, ServerInfo, SshdInfo, SuggestInfo, UserConfigInfo,
};
pub use groups::{
    GroupField, GroupInfo, GroupOptionsInfo, GroupsService, ListGroupMembersOptions,
    ListGroupsOptions,
};
pub use projects::{
    CreateProjectInput, ListProjectsOptions, ProjectInfo, ProjectsService,
    RepositoryStatisticsInfo, SubmitType,
};
pub use tags::{ListTagsOptions, TagInfo};

/// Serializes an options struct into query arguments.
///
/// `None` yields no arguments. Options must serialize to a JSON object.
pub(crate) fn query_args<T: Serialize>(
    options: Option<&T>,
) -> Result<Map<String, Value>, GerritError> {
    let Some(options) = options else {
        return Ok(Map::new());
    };

    match serde_json::to_value(options)? {
        Value::Object(args) => Ok(args),
        other => Err(GerritError::InvalidArguments {
            reason: format!("options must serialize to an object, got {other}"),
        }),
    }
}

// Verify services are Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AccountsService<'static>>();
    assert_send_sync::<ChangesService<'static>>();
    assert_send_sync::<ProjectsService<'static>>();
    assert_send_sync::<GroupsService<'static>>();
    assert_send_sync::<ConfigService<'static>>();
};
