//! Tag endpoints of a project.

use serde::{Deserialize, Serialize};

use crate::clients::{GerritError, HttpMethod};
use crate::rest::resources::{query_args, GitPersonInfo, ProjectsService, WebLinkInfo};
use crate::rest::{build_path, ListOptions, Timestamp};

/// Information about a tag.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TagInfo {
    /// The full ref name, such as `refs/tags/v1.0`.
    #[serde(rename = "ref")]
    pub git_ref: String,

    /// The revision the tag points to.
    pub revision: String,

    /// The tag object id. Only set for annotated tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    /// The tag message. Only set for annotated tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The tagger. Only set for annotated tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagger: Option<GitPersonInfo>,

    /// When the tag was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,

    /// Whether the caller may delete the tag.
    #[serde(default)]
    pub can_delete: bool,

    /// Links to the tag in external sites.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_links: Vec<WebLinkInfo>,
}

impl TagInfo {
    /// Returns `true` for annotated tags.
    #[must_use]
    pub const fn is_annotated(&self) -> bool {
        self.object.is_some()
    }
}

/// Options for [`ProjectsService::list_tags`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListTagsOptions {
    /// Paging.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Only tags containing this substring, case-insensitive.
    #[serde(rename = "m", skip_serializing_if = "Option::is_none")]
    pub substring: Option<String>,

    /// Only tags matching this regex.
    #[serde(rename = "r", skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

impl ProjectsService<'_> {
    /// Lists the tags of a project.
    ///
    /// Gerrit API docs: <https://gerrit-review.googlesource.com/Documentation/rest-api-projects.html#list-tags>
    ///
    /// # Errors
    ///
    /// Returns [`GerritError`] if the call fails.
    pub async fn list_tags(
        &self,
        project: &str,
        options: Option<&ListTagsOptions>,
    ) -> Result<Vec<TagInfo>, GerritError> {
        let path = build_path("projects/{project}/tags/", &[("project", project)]);
        let args = query_args(options)?;
        self.client
            .invoke(HttpMethod::Get, &path, Some(args.into()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_list_deserialization() {
        let value = json!([
            {
                "ref": "refs/tags/v1.0",
                "revision": "49ce77fdcfd3398dc0dedbe016d1a425fd52d666",
                "object": "1624f5af8ae89148d1a3730df8c290413e3dcf30",
                "message": "Annotated tag",
                "tagger": {
                    "name": "David Pursehouse",
                    "email": "david.pursehouse@sonymobile.com",
                    "date": "2014-10-06 07:35:03.000000000",
                    "tz": 540
                }
            },
            {
                "ref": "refs/tags/v2.0",
                "revision": "1624f5af8ae89148d1a3730df8c290413e3dcf30"
            }
        ]);

        let tags: Vec<TagInfo> = serde_json::from_value(value).unwrap();

        assert!(tags[0].is_annotated());
        assert_eq!(tags[0].tagger.as_ref().unwrap().tz, 540);
        assert!(!tags[1].is_annotated());
        assert!(tags[1].tagger.is_none());
        assert!(tags[1].created.is_none());
    }

    #[test]
    fn test_list_tags_options_flatten_paging() {
        let options = ListTagsOptions {
            list: ListOptions::new(20, 10),
            regex: Some("v1\\..*".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"n": 10, "S": 20, "r": "v1\\..*"})
        );
    }
}
