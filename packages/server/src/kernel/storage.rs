//! HTTP client for the managed object store.
//!
//! POST the raw bytes, receive nothing useful back, derive the public URL
//! from the bucket and path. The store serves uploads from a stable
//! `/object/public/` prefix.

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::BaseStorageService;

pub struct BucketStorageClient {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl BucketStorageClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/object/public/{}/{}", self.endpoint, bucket, path)
    }
}

#[async_trait]
impl BaseStorageService for BucketStorageClient {
    async fn upload(&self, bytes: Vec<u8>, bucket: &str, path: &str) -> Result<String> {
        let url = format!("{}/object/{}/{}", self.endpoint, bucket, path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/octet-stream")
            .body(bytes)
            .send()
            .await
            .context("Object storage request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Object storage upload failed ({}): {}", status, body);
        }

        Ok(self.public_url(bucket, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_strips_trailing_slash() {
        let client =
            BucketStorageClient::new("https://storage.holibay.app/".to_string(), "k".to_string());
        assert_eq!(
            client.public_url("listings", "abc/0.jpg"),
            "https://storage.holibay.app/object/public/listings/abc/0.jpg"
        );
    }
}
