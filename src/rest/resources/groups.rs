//! Group endpoints.
//!
//! Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-groups.html>

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::clients::{GerritClient, GerritError, HttpMethod};
use crate::rest::resources::{query_args, AccountInfo};
use crate::rest::{build_path, ListOptions, Timestamp};

/// Optional fields of [`GroupInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupField {
    /// Direct subgroups.
    Includes,
    /// Direct members.
    Members,
}

/// Options of a group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GroupOptionsInfo {
    /// Whether the group is visible to all users.
    #[serde(default)]
    pub visible_to_all: bool,
}

/// Information about a group.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GroupInfo {
    /// The URL-encoded UUID of the group.
    pub id: String,

    /// The group name. Omitted when the group is a map key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// URL to information about the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Group options.
    #[serde(default)]
    pub options: GroupOptionsInfo,

    /// The description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The numeric id. Only set for internal groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,

    /// Name of the owner group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// URL-encoded UUID of the owner group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    /// When the group was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<Timestamp>,

    /// Set on the last entry when more results are available.
    #[serde(rename = "_more_groups", default)]
    pub more_groups: bool,

    /// Direct members ([`GroupField::Members`]).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<AccountInfo>,

    /// Direct subgroups ([`GroupField::Includes`]).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<GroupInfo>,
}

/// Options for [`GroupsService::list_groups`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListGroupsOptions {
    /// Paging.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Optional fields to include.
    #[serde(rename = "o", skip_serializing_if = "Vec::is_empty")]
    pub additional_fields: Vec<GroupField>,
}

/// Options for [`GroupsService::list_group_members`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListGroupMembersOptions {
    /// Resolve members of subgroups too.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub recursive: bool,
}

/// Group operations, obtained from [`GerritClient::groups`].
#[derive(Debug, Clone, Copy)]
pub struct GroupsService<'a> {
    client: &'a GerritClient,
}

impl<'a> GroupsService<'a> {
    pub(crate) const fn new(client: &'a GerritClient) -> Self {
        Self { client }
    }

    /// Lists groups visible to the caller, keyed by name.
    ///
    /// Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-groups.html#list-groups>
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn list_groups(
        &self,
        options: Option<&ListGroupsOptions>,
    ) -> Result<BTreeMap<String, GroupInfo>, GerritError> {
        let args = query_args(options)?;
        self.client
            .invoke(HttpMethod::Get, "groups/", Some(args.into()))
            .await
    }

    /// Lists the direct members of a group, or all members when
    /// `recursive` is set.
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn list_group_members(
        &self,
        group: &str,
        options: Option<&ListGroupMembersOptions>,
    ) -> Result<Vec<AccountInfo>, GerritError> {
        let path = build_path("groups/{group}/members/", &[("group", group)]);
        let args = query_args(options)?;
        self.client
            .invoke(HttpMethod::Get, &path, Some(args.into()))
            .await
    }
}
