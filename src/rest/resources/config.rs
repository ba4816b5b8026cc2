//! Server configuration endpoints.
//!
//! Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-config.html>

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::clients::{GerritClient, GerritError, HttpMethod};

/// Authentication settings of the server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AuthInfo {
    /// The authentication type, such as `LDAP` or `OAUTH`.
    #[serde(rename = "type")]
    pub auth_type: String,

    /// Whether contributor agreements are required.
    #[serde(default)]
    pub use_contributor_agreements: bool,

    /// Account fields users may edit.
    #[serde(default)]
    pub editable_account_fields: Vec<String>,

    /// The login URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,

    /// Text of the login link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_text: Option<String>,

    /// URL to switch accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_account_url: Option<String>,

    /// The registration URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_url: Option<String>,

    /// Text of the registration link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_text: Option<String>,

    /// URL to edit the full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_full_name_url: Option<String>,

    /// URL to obtain an HTTP password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_password_url: Option<String>,

    /// Whether Git over HTTP uses basic authentication.
    #[serde(default)]
    pub is_git_basic_auth: bool,
}

/// Change-related settings of the server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChangeConfigInfo {
    #[serde(default)]
    pub allow_drafts: bool,

    /// Number of changed lines from which a change counts as large.
    #[serde(default)]
    pub large_change: u32,

    /// Label of the reply button.
    #[serde(default)]
    pub reply_label: String,

    /// Tooltip of the reply button.
    #[serde(default)]
    pub reply_tooltip: String,

    /// Seconds between polls for change updates.
    #[serde(default)]
    pub update_delay: u32,

    /// Whether changes of a topic are submitted together.
    #[serde(default)]
    pub submit_whole_topic: bool,
}

/// A download scheme, such as `http` or `ssh`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DownloadSchemeInfo {
    /// URL pattern with a `${project}` placeholder.
    pub url: String,

    #[serde(default)]
    pub is_auth_required: bool,

    #[serde(default)]
    pub is_auth_supported: bool,

    /// Download commands keyed by name.
    #[serde(default)]
    pub commands: BTreeMap<String, String>,

    /// Clone commands keyed by name.
    #[serde(default)]
    pub clone_commands: BTreeMap<String, String>,
}

/// Download settings of the server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DownloadInfo {
    /// Schemes keyed by name.
    #[serde(default)]
    pub schemes: BTreeMap<String, DownloadSchemeInfo>,

    /// Supported archive formats.
    #[serde(default)]
    pub archives: Vec<String>,
}

/// General settings of the server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GerritInfo {
    /// Name of the root project.
    pub all_projects_name: String,

    /// Name of the project holding user data.
    pub all_users_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_bug_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_bug_text: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReceiveInfo {
    /// Whether signed push is enabled.
    #[serde(rename = "enableSignedPush", default)]
    pub enable_signed_push: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PluginConfigInfo {
    /// Whether an avatar provider is installed.
    #[serde(default)]
    pub has_avatars: bool,
}

/// Present when the SSH daemon is enabled. Carries no fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SshdInfo {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SuggestInfo {
    /// Characters typed before suggestions are shown.
    #[serde(default)]
    pub from: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserConfigInfo {
    /// Name shown for users without a full name.
    #[serde(default)]
    pub anonymous_coward_name: String,
}

/// Settings the server exposes to clients.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ServerInfo {
    #[serde(default)]
    pub auth: AuthInfo,

    #[serde(default)]
    pub change: ChangeConfigInfo,

    #[serde(default)]
    pub download: DownloadInfo,

    #[serde(default)]
    pub gerrit: GerritInfo,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub gitweb: BTreeMap<String, String>,

    #[serde(default)]
    pub plugin: PluginConfigInfo,

    #[serde(default)]
    pub receive: ReceiveInfo,

    /// Set when the SSH daemon is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sshd: Option<SshdInfo>,

    #[serde(default)]
    pub suggest: SuggestInfo,

    /// URL aliases, pattern to replacement.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub url_aliases: BTreeMap<String, String>,

    #[serde(default)]
    pub user: UserConfigInfo,
}

/// Server configuration operations, obtained from
/// [`GerritClient::config_service`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigService<'a> {
    client: &'a GerritClient,
}

impl<'a> ConfigService<'a> {
    pub(crate) const fn new(client: &'a GerritClient) -> Self {
        Self { client }
    }

    /// Returns the server version, such as `3.9.1`.
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn get_version(&self) -> Result<String, GerritError> {
        self.client
            .invoke(HttpMethod::Get, "config/server/version", None)
            .await
    }

    /// Returns the settings the server exposes to clients.
    ///
    /// Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-config.html#get-info>
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn get_server_info(&self) -> Result<ServerInfo, GerritError> {
        self.client
            .invoke(HttpMethod::Get, "config/server/info", None)
            .await
    }
}
