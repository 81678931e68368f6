//! In-process pub/sub hub backing the SSE endpoints.
//!
//! Topic-keyed broadcast channels; payloads are `serde_json::Value`, so the
//! hub stays ignorant of what rides over it. Producers here are the
//! notification fan-out (`notifications:{user_id}`) and the unread-count
//! tick (`notifications:{user_id}:unread`).

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

#[derive(Clone)]
pub struct StreamHub {
    channels: Arc<RwLock<HashMap<String, broadcast::Sender<serde_json::Value>>>>,
    capacity: usize,
}

impl StreamHub {
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(RwLock::new(HashMap::new())),
            capacity,
        }
    }

    /// Publish to a topic. Nobody listening means the value is dropped.
    pub async fn publish(&self, topic: &str, value: serde_json::Value) {
        let channels = self.channels.read().await;
        if let Some(tx) = channels.get(topic) {
            let _ = tx.send(value);
        }
    }

    /// Subscribe to a topic, creating its channel on first use.
    pub async fn subscribe(&self, topic: &str) -> broadcast::Receiver<serde_json::Value> {
        let mut channels = self.channels.write().await;
        let tx = channels
            .entry(topic.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0);
        tx.subscribe()
    }

    /// Drop channels whose receivers are all gone.
    pub async fn cleanup(&self) {
        let mut channels = self.channels.write().await;
        channels.retain(|_, tx| tx.receiver_count() > 0);
    }
}

impl Default for StreamHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn roundtrip() {
        let hub = StreamHub::new();
        let mut rx = hub.subscribe("notifications:u1").await;

        let value = serde_json::json!({"type": "notification", "title": "Listing approved"});
        hub.publish("notifications:u1", value.clone()).await;

        assert_eq!(rx.recv().await.unwrap(), value);
    }

    #[tokio::test]
    async fn publish_without_subscribers_drops_silently() {
        let hub = StreamHub::new();
        hub.publish("notifications:ghost", serde_json::json!({})).await;
    }

    #[tokio::test]
    async fn cleanup_reaps_dead_channels() {
        let hub = StreamHub::new();
        let rx = hub.subscribe("notifications:u2").await;
        drop(rx);

        hub.cleanup().await;

        assert!(hub.channels.read().await.is_empty());
    }
}
