use serde::{Deserialize, Serialize};

/// Response body returned by the send endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendResponse {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Outgoing message payload.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
