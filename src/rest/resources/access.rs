//! Access rights of a project.
//!
//! Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-access.html>

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::clients::{GerritError, HttpMethod};
use crate::rest::resources::{GroupInfo, PermissionAction, ProjectInfo, ProjectsService, WebLinkInfo};
use crate::rest::build_path;

/// A rule granting a permission to a group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PermissionRuleInfo {
    /// What the rule does.
    pub action: PermissionAction,

    /// Whether force pushes are permitted.
    #[serde(default)]
    pub force: bool,

    /// Lower bound of a label range.
    #[serde(default)]
    pub min: i32,

    /// Upper bound of a label range.
    #[serde(default)]
    pub max: i32,
}

/// A permission and its rules, keyed by group UUID.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PermissionInfo {
    /// The label name, for label permissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Whether the permission is exclusive to this ref.
    #[serde(default)]
    pub exclusive: bool,

    /// Rules keyed by group UUID.
    #[serde(default)]
    pub rules: BTreeMap<String, PermissionRuleInfo>,
}

/// Permissions assigned on a ref pattern.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AccessSectionInfo {
    /// Permissions keyed by name, such as `read` or `label-Code-Review`.
    #[serde(default)]
    pub permissions: BTreeMap<String, PermissionInfo>,
}

/// Access rights of a project.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProjectAccessInfo {
    /// Revision of `refs/meta/config` the rights were read from.
    pub revision: String,

    /// The parent project rights are inherited from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherits_from: Option<ProjectInfo>,

    /// Local sections keyed by ref pattern.
    #[serde(default)]
    pub local: BTreeMap<String, AccessSectionInfo>,

    /// Whether the caller owns any ref of the project.
    #[serde(default)]
    pub is_owner: bool,

    /// Ref patterns the caller owns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owner_of: Vec<String>,

    /// Whether the caller can upload to any ref.
    #[serde(default)]
    pub can_upload: bool,

    /// Whether the caller can create refs.
    #[serde(default)]
    pub can_add: bool,

    /// Whether the caller can create tags.
    #[serde(default)]
    pub can_add_tags: bool,

    /// Whether the caller can see `refs/meta/config`.
    #[serde(default)]
    pub config_visible: bool,

    /// Groups referenced by the rules, keyed by UUID.
    #[serde(default)]
    pub groups: BTreeMap<String, GroupInfo>,

    /// Links to the configuration in external sites.
    #[serde(rename = "configWebLinks", default, skip_serializing_if = "Vec::is_empty")]
    pub config_web_links: Vec<WebLinkInfo>,

    /// Whether access changes must go through review.
    #[serde(default)]
    pub require_change_for_config_update: bool,
}

impl ProjectsService<'_> {
    /// Lists the access rights of a project.
    ///
    /// Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-projects.html#get-access>
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn list_access_rights(&self, project: &str) -> Result<ProjectAccessInfo, GerritError> {
        let path = build_path("projects/{project}/access", &[("project", project)]);
        self.client.invoke(HttpMethod::Get, &path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_access_deserialization() {
        let value = json!({
            "revision": "61157ed63e14d261b6dca40650472a9b0bd88474",
            "inherits_from": {
                "id": "All-Projects",
                "name": "All-Projects",
                "description": "Access inherited by all other projects."
            },
            "local": {
                "refs/*": {
                    "permissions": {
                        "read": {
                            "rules": {
                                "c2ce4749a32ceb82cd6adcce65b8216e12afb41c": {
                                    "action": "ALLOW",
                                    "force": false
                                },
                                "global:Anonymous-Users": {"action": "BLOCK"}
                            }
                        },
                        "label-Code-Review": {
                            "label": "Code-Review",
                            "exclusive": true,
                            "rules": {
                                "global:Registered-Users": {"action": "ALLOW", "min": -1, "max": 1}
                            }
                        }
                    }
                }
            },
            "is_owner": true,
            "owner_of": ["refs/*"],
            "can_upload": true,
            "can_add": true,
            "config_visible": true,
            "groups": {
                "global:Anonymous-Users": {
                    "id": "global%3AAnonymous-Users",
                    "options": {},
                    "name": "Anonymous Users"
                }
            },
            "configWebLinks": [{"name": "gitiles", "url": "https://example.com/config"}]
        });

        let access: ProjectAccessInfo = serde_json::from_value(value).unwrap();

        assert_eq!(
            access.inherits_from.as_ref().unwrap().name.as_deref(),
            Some("All-Projects")
        );
        let section = &access.local["refs/*"];
        let read = &section.permissions["read"];
        assert!(read.rules["global:Anonymous-Users"].action.is_denial());
        let review = &section.permissions["label-Code-Review"];
        assert!(review.exclusive);
        assert_eq!(review.rules["global:Registered-Users"].min, -1);
        assert_eq!(review.rules["global:Registered-Users"].max, 1);
        assert!(access.is_owner);
        assert!(!access.can_add_tags);
        assert_eq!(
            access.groups["global:Anonymous-Users"].name.as_deref(),
            Some("Anonymous Users")
        );
        assert_eq!(access.config_web_links.len(), 1);
    }
}
