//! Holibay server core: a vacation-rental and local-services marketplace.
//!
//! Properties and services move through an admin moderation workflow;
//! approved car/bike listings aggregate into a browsable model catalog; an
//! admin explorer drills down four taxonomies; every moderation outcome
//! fans out to persisted notifications with best-effort email.

pub mod common;
pub mod domains;
pub mod kernel;
pub mod server;
