// Thin client for a transactional email HTTP API (Resend-compatible shape):
// POST {base_url}/emails with a JSON body, bearer-token auth.

pub mod models;

use reqwest::{header, Client};

use crate::models::{OutboundEmail, SendResponse};

#[derive(Debug, Clone)]
pub struct CourierOptions {
    pub api_key: String,
    pub base_url: String,
    /// Sender address, e.g. "Holibay <no-reply@holibay.app>"
    pub from: String,
}

#[derive(Debug, Clone)]
pub struct CourierService {
    options: CourierOptions,
}

impl CourierService {
    pub fn new(options: CourierOptions) -> Self {
        Self { options }
    }

    pub async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        link: Option<&str>,
    ) -> Result<SendResponse, &'static str> {
        let url = format!("{}/emails", self.options.base_url.trim_end_matches('/'));

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "Content-Type",
            "application/json"
                .parse()
                .expect("Header value should parse correctly"),
        );

        // Deep links ride along as a trailing line in the plain-text body.
        let text = match link {
            Some(link) => format!("{}\n\n{}", body, link),
            None => body.to_string(),
        };

        let payload = OutboundEmail {
            from: self.options.from.clone(),
            to: to.to_string(),
            subject: subject.to_string(),
            text,
            link: link.map(|l| l.to_string()),
        };

        let client = Client::new();
        let res = client
            .post(url)
            .bearer_auth(&self.options.api_key)
            .headers(headers)
            .json(&payload)
            .send()
            .await;

        match res {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    let error_body = response.text().await.unwrap_or_default();
                    eprintln!("Courier error ({}): {}", status, error_body);
                    return Err("Courier returned an error");
                }

                match response.json::<SendResponse>().await {
                    Ok(data) => Ok(data),
                    Err(e) => {
                        eprintln!("Failed to parse Courier response: {}", e);
                        Err("Error parsing send response")
                    }
                }
            }
            Err(e) => {
                eprintln!("Request to Courier failed: {}", e);
                Err("Error sending email")
            }
        }
    }
}
