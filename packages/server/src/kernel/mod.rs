//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod scheduled_tasks;
pub mod sink;
pub mod storage;
pub mod stream_hub;
pub mod test_dependencies;
pub mod traits;

pub use deps::{CourierAdapter, ServerDeps};
pub use sink::PgNotificationSink;
pub use storage::BucketStorageClient;
pub use stream_hub::StreamHub;
pub use test_dependencies::{
    NullStorage, RecordingEmail, RecordingSink, SentEmail, TestDependencies,
};
pub use traits::{BaseEmailService, BaseNotificationSink, BaseStorageService};
