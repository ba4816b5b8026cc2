//! Gerrit REST resources.
//!
//! This module provides the typed surface over the transport shim:
//!
//! - **[`Timestamp`]**: Gerrit's `YYYY-MM-DD HH:MM:SS.nnnnnnnnn` instants
//! - **[`ListOptions`]** and **[`AdditionalField`]**: Paging and `o` options
//!   shared by list and query endpoints
//! - **[`build_path`]**: Endpoint templates with percent-encoded ids
//! - **[`resources`]**: Per-resource services and their entities
//!
//! # Example
//!
//! ```rust,ignore
//! use gerrit_api::query::Query;
//! use gerrit_api::rest::resources::QueryChangesOptions;
//! use gerrit_api::rest::{AdditionalField, ListOptions};
//!
//! let options = QueryChangesOptions::new(&Query::field("status", "open"))
//!     .list(ListOptions::new(0, 100))
//!     .field(AdditionalField::CurrentRevision);
//!
//! for change in client.changes().query_changes(&options).await? {
//!     println!("{} {}", change.number, change.subject);
//! }
//! ```

mod options;
mod path;
pub mod resources;
mod timestamp;

pub use options::{AdditionalField, ListOptions, HEAD_REF, META_CONFIG_REF};
pub use path::{build_path, encode_segment};
pub use timestamp::Timestamp;
