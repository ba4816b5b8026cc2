//! Path templates for Gerrit REST endpoints.
//!
//! Endpoints are declared as templates with `{name}` placeholders, such as
//! `projects/{project}/branches/{branch}`. Gerrit identifiers routinely
//! contain `/` (`infra/tools`, `refs/heads/main`), so every substituted
//! value is percent-encoded as a single path segment.
//!
//! # Example
//!
//! ```rust
//! use gerrit_api::rest::build_path;
//!
//! let path = build_path(
//!     "projects/{project}/branches/{branch}",
//!     &[("project", "infra/tools"), ("branch", "refs/heads/main")],
//! );
//! assert_eq!(path, "projects/infra%2Ftools/branches/refs%2Fheads%2Fmain");
//! ```

/// Substitutes `{key}` placeholders in `template` with encoded values.
///
/// Placeholders without a matching id are left untouched.
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &encode_segment(value));
    }

    result
}

/// Percent-encodes `value` for use as one path segment.
#[must_use]
pub fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
