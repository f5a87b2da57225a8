//! Delivery of quote requests to the hosted form relay.
//!
//! The relay (FormSubmit) turns a JSON POST into an email to the business.
//! A single attempt is made; the customer resubmits if it fails.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use super::models::{QuoteRequest, NOT_SPECIFIED};

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Network failure, DNS, timeout, ...
    #[error("Relay request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Relay returned HTTP {0}")]
    HttpStatus(u16),
}

/// Body of the relay POST
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub description: String,
    pub address: String,
    pub preferred_time: String,
    #[serde(rename = "_subject")]
    pub subject: String,
    /// Ask the relay to lay the fields out as a table
    #[serde(rename = "_template")]
    pub template: &'static str,
    #[serde(rename = "_captcha")]
    pub captcha: &'static str,
}

impl RelayPayload {
    pub fn from_request(request: &QuoteRequest) -> Self {
        let or_placeholder = |value: &str| {
            let value = value.trim();
            if value.is_empty() {
                NOT_SPECIFIED.to_string()
            } else {
                value.to_string()
            }
        };

        let name = request.name.trim().to_string();
        Self {
            subject: format!("Нова заявка від {}", name),
            name,
            phone: request.phone.trim().to_string(),
            email: or_placeholder(&request.email),
            service: request.service.trim().to_string(),
            description: request.description.trim().to_string(),
            address: request.address.trim().to_string(),
            preferred_time: or_placeholder(&request.preferred_time),
            template: "table",
            captcha: "false",
        }
    }
}

/// Anything that can forward a quote request to a human.
#[async_trait]
pub trait QuoteRelay: Send + Sync {
    async fn deliver(&self, payload: &RelayPayload) -> Result<(), RelayError>;
}

/// FormSubmit AJAX endpoint client
pub struct FormSubmitRelay {
    client: reqwest::Client,
    url: String,
}

impl FormSubmitRelay {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QuoteRelay for FormSubmitRelay {
    async fn deliver(&self, payload: &RelayPayload) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RelayError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}
