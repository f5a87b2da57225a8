//! Quote request and the posted contact form.

use serde::{Deserialize, Serialize};

/// Shown to the relay in place of optional fields the customer left blank.
pub const NOT_SPECIFIED: &str = "не вказано";

/// A customer's service request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteRequest {
    pub name: String,
    pub phone: String,
    /// Optional, empty when not given
    pub email: String,
    pub service: String,
    pub description: String,
    pub address: String,
    /// Optional, empty when not given
    pub preferred_time: String,
}

impl QuoteRequest {
    pub fn is_empty(&self) -> bool {
        *self == QuoteRequest::default()
    }
}

/// The contact form as posted: the request plus the honeypot.
///
/// The honeypot is named `website` on the wire and hidden with CSS, so only
/// bots fill it in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteForm {
    #[serde(flatten)]
    pub request: QuoteRequest,
    #[serde(default, rename = "website")]
    pub honeypot: String,
}
