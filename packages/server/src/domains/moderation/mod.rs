//! Shared moderation workflow pieces used by the properties and services
//! domains.

pub mod machine;

pub use machine::{review, ReviewDecision, Reviewed, TransitionError};
