//! HTTP client for the PullPush.io Reddit search API.
//!
//! PullPush indexes Reddit submissions and comments and exposes them through
//! a simple JSON search API. This crate wraps the two endpoints the pipeline
//! needs (submission search, comment lookup by link id) with typed responses
//! and explicit errors. No retries: every call is at-most-once and the
//! caller decides how to handle a failure.

mod client;
mod error;
mod types;

pub use client::PullPushClient;
pub use error::PullPushError;
pub use types::{RawComment, RawSubmission};
