//! Account endpoints.
//!
//! Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-accounts.html>
//!
//! # Example
//!
//! ```rust,ignore
//! use gerrit_api::rest::resources::ListAccountsOptions;
//!
//! // Active and inactive accounts
//! let options = ListAccountsOptions {
//!     inactive: Some(true),
//!     ..Default::default()
//! };
//! let accounts = client.accounts().list_accounts(Some(&options)).await?;
//!
//! client.accounts().delete_active("1000002").await?;
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clients::{GerritClient, GerritError, HttpMethod};
use crate::query::Query;
use crate::rest::resources::query_args;
use crate::rest::{build_path, AdditionalField, ListOptions};

/// An avatar image of an account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AvatarInfo {
    /// URL of the image.
    pub url: String,

    /// Height of the image in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Information about an account.
///
/// Most fields are only populated when the matching [`AdditionalField`] was
/// requested.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AccountInfo {
    /// The numeric account id.
    #[serde(rename = "_account_id", default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,

    /// The full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The preferred email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Further email addresses ([`AdditionalField::AllEmails`]).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_emails: Vec<String>,

    /// The username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Avatars, populated when an avatar plugin is installed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub avatars: Vec<AvatarInfo>,

    /// Set on the last entry when more results are available.
    #[serde(rename = "_more_accounts", default)]
    pub more_accounts: bool,

    /// The status message of the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Whether the account is inactive.
    #[serde(default)]
    pub inactive: bool,

    /// Tags such as `SERVICE_USER`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Options for [`AccountsService::query_accounts`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryAccountsOptions {
    /// Paging.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Optional fields to include.
    #[serde(rename = "o", skip_serializing_if = "Vec::is_empty")]
    pub additional_fields: Vec<AdditionalField>,

    /// Match accounts by prefix, as the suggest box does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggest: Option<bool>,
}

/// Options for [`AccountsService::list_accounts`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAccountsOptions {
    /// Paging.
    pub list: ListOptions,

    /// Include active accounts. Unset means `true`.
    pub active: Option<bool>,

    /// Include inactive accounts. Unset means `false`.
    pub inactive: Option<bool>,

    /// Optional fields to include.
    pub additional_fields: Vec<AdditionalField>,
}

impl ListAccountsOptions {
    /// Returns the account query selecting the requested states.
    #[must_use]
    pub fn query(&self) -> Query {
        let mut states = Vec::new();
        if self.active != Some(false) {
            states.push(Query::field("is", "active"));
        }
        if self.inactive == Some(true) {
            states.push(Query::field("is", "inactive"));
        }
        Query::or(states)
    }
}

/// Account operations, obtained from [`GerritClient::accounts`].
#[derive(Debug, Clone, Copy)]
pub struct AccountsService<'a> {
    client: &'a GerritClient,
}

impl<'a> AccountsService<'a> {
    pub(crate) const fn new(client: &'a GerritClient) -> Self {
        Self { client }
    }

    /// Queries accounts visible to the caller.
    ///
    /// `query` is sent as the `q` parameter; pass a [`Query`] or raw text.
    ///
    /// Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-accounts.html#query-account>
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn query_accounts(
        &self,
        query: impl fmt::Display,
        options: Option<&QueryAccountsOptions>,
    ) -> Result<Vec<AccountInfo>, GerritError> {
        let mut args = query_args(options)?;
        args.insert("q".to_string(), query.to_string().into());
        self.client
            .invoke(HttpMethod::Get, "accounts/", Some(args.into()))
            .await
    }

    /// Lists accounts by state. Without options only active accounts are
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn list_accounts(
        &self,
        options: Option<&ListAccountsOptions>,
    ) -> Result<Vec<AccountInfo>, GerritError> {
        let default_options = ListAccountsOptions::default();
        let options = options.unwrap_or(&default_options);
        let query = options.query();
        tracing::debug!(query = %query, "Listing Gerrit accounts");

        let query_options = QueryAccountsOptions {
            list: options.list,
            additional_fields: options.additional_fields.clone(),
            suggest: None,
        };
        self.query_accounts(query, Some(&query_options)).await
    }

    /// Retrieves an account by id, username, email or `self`.
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn get_account(&self, account: &str) -> Result<AccountInfo, GerritError> {
        let path = build_path("accounts/{account}", &[("account", account)]);
        self.client.invoke(HttpMethod::Get, &path, None).await
    }

    /// Activates an account.
    ///
    /// Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-accounts.html#set-active>
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn set_active(&self, account: &str) -> Result<(), GerritError> {
        let path = build_path("accounts/{account}/active", &[("account", account)]);
        self.client
            .invoke_raw(HttpMethod::Put, &path, None, &[])
            .await?;
        Ok(())
    }

    /// Deactivates an account.
    ///
    /// Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-accounts.html#delete-active>
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails; `409 Conflict` if the
    /// account is already inactive.
    pub async fn delete_active(&self, account: &str) -> Result<(), GerritError> {
        let path = build_path("accounts/{account}/active", &[("account", account)]);
        self.client
            .invoke_raw(HttpMethod::Delete, &path, None, &[])
            .await?;
        Ok(())
    }
}
