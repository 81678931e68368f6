// TestDependencies - mock implementations for testing
//
// Recording/failing fakes for the infrastructure traits, plus a builder
// that assembles a ServerDeps around them.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};

use super::{BaseEmailService, BaseNotificationSink, BaseStorageService, ServerDeps};
use crate::domains::notifications::models::NewNotification;
use crate::kernel::stream_hub::StreamHub;

// =============================================================================
// Recording Notification Sink
// =============================================================================

/// Captures every enqueued notification; optionally fails every call to
/// exercise the fire-and-forget contract.
pub struct RecordingSink {
    enqueued: Arc<Mutex<Vec<NewNotification>>>,
    fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            enqueued: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            enqueued: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    pub fn enqueued(&self) -> Vec<NewNotification> {
        self.enqueued.lock().unwrap().clone()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseNotificationSink for RecordingSink {
    async fn enqueue(&self, notification: NewNotification) -> Result<()> {
        if self.fail {
            anyhow::bail!("sink unavailable");
        }
        self.enqueued.lock().unwrap().push(notification);
        Ok(())
    }
}

// =============================================================================
// Recording Email Service
// =============================================================================

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub link: Option<String>,
}

pub struct RecordingEmail {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    fail: bool,
}

impl RecordingEmail {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for RecordingEmail {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseEmailService for RecordingEmail {
    async fn send(&self, to: &str, subject: &str, body: &str, link: Option<&str>) -> Result<()> {
        if self.fail {
            anyhow::bail!("email gateway unavailable");
        }
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            link: link.map(|l| l.to_string()),
        });
        Ok(())
    }
}

// =============================================================================
// Null Storage
// =============================================================================

/// Accepts every upload and fabricates a URL.
pub struct NullStorage;

#[async_trait]
impl BaseStorageService for NullStorage {
    async fn upload(&self, _bytes: Vec<u8>, bucket: &str, path: &str) -> Result<String> {
        Ok(format!("https://storage.test/object/public/{}/{}", bucket, path))
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Bundle of fakes with handles kept for assertions.
pub struct TestDependencies {
    pub sink: Arc<RecordingSink>,
    pub email: Arc<RecordingEmail>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            sink: Arc::new(RecordingSink::new()),
            email: Arc::new(RecordingEmail::new()),
        }
    }

    pub fn with_failing_sink() -> Self {
        Self {
            sink: Arc::new(RecordingSink::failing()),
            email: Arc::new(RecordingEmail::new()),
        }
    }

    pub fn with_failing_email() -> Self {
        Self {
            sink: Arc::new(RecordingSink::new()),
            email: Arc::new(RecordingEmail::failing()),
        }
    }

    pub fn into_deps(self, db_pool: PgPool) -> (ServerDeps, Arc<RecordingSink>, Arc<RecordingEmail>) {
        let sink = Arc::clone(&self.sink);
        let email = Arc::clone(&self.email);
        let deps = ServerDeps::new(
            db_pool,
            self.sink,
            self.email,
            Arc::new(NullStorage),
            StreamHub::new(),
            "https://holibay.test".to_string(),
        );
        (deps, sink, email)
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
