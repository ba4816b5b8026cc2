//! The Gerrit transport shim.
//!
//! This module provides [`GerritClient`], which sits between the resource
//! services and the generic [`HttpClient`](crate::clients::HttpClient) and
//! enforces Gerrit's calling conventions.
//!
//! # Overview
//!
//! - [`GerritClient`]: Credential injection, `a/` path rewriting, argument
//!   encoding and response decoding
//! - [`GerritError`]: Error type for calls made through the client
//! - [`RequestFn`] / [`plain_text`] / [`no_content_type`]: Per-call request mutators
//! - [`strip_magic_prefix`] / [`MAGIC_PREFIX`]: Gerrit's anti-XSSI framing
//!
//! # Response framing
//!
//! Gerrit prefixes JSON bodies with `)]}'` and a newline so a browser cannot
//! evaluate them as script. The client strips exactly that prefix from every
//! response, successful or not, before decoding or building an error
//! message.
//!
//! # Retry Behavior
//!
//! The shim never retries. The number of attempts for 429 and 5xx responses
//! comes from [`GerritConfig::tries`](crate::GerritConfig::tries) and is
//! handled by the generic invoker.

mod client;
mod errors;

pub use client::{
    no_content_type, plain_text, strip_magic_prefix, GerritClient, RequestFn, MAGIC_PREFIX,
};
pub use errors::GerritError;
