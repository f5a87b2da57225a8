//! Contact form validation
//!
//! Rules run in a fixed order and stop at the first failure, so the customer
//! only ever sees one message.

use std::sync::LazyLock;

use regex::Regex;

use super::models::QuoteRequest;

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_CHARS: usize = 10;
const MIN_DESCRIPTION_CHARS: usize = 10;

/// Digits, spaces, `+`, `-` and parentheses, at least ten of them.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d+\s\-()]{10,}$").expect("valid regex"));

/// `local@domain.tld`, nothing stricter.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// The first rule a request breaks. `Display` is the text shown on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuoteValidationError {
    #[error("Будь ласка, введіть коректне ім'я (мінімум 2 символи)")]
    Name,

    #[error("Будь ласка, введіть коректний номер телефону")]
    Phone,

    #[error("Будь ласка, введіть коректний email")]
    Email,

    #[error("Будь ласка, оберіть послугу")]
    Service,

    #[error("Будь ласка, детально опишіть роботи (мінімум 10 символів)")]
    Description,

    #[error("Будь ласка, вкажіть адресу")]
    Address,
}

impl QuoteValidationError {
    /// Form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            QuoteValidationError::Name => "name",
            QuoteValidationError::Phone => "phone",
            QuoteValidationError::Email => "email",
            QuoteValidationError::Service => "service",
            QuoteValidationError::Description => "description",
            QuoteValidationError::Address => "address",
        }
    }
}

pub type ValidationResult = Result<(), QuoteValidationError>;

/// Validate a request against the known service titles.
pub fn validate(request: &QuoteRequest, services: &[&str]) -> ValidationResult {
    let name = request.name.trim();
    if name.is_empty() || name.chars().count() < MIN_NAME_CHARS {
        return Err(QuoteValidationError::Name);
    }

    let phone = request.phone.trim();
    if phone.is_empty() || phone.chars().count() < MIN_PHONE_CHARS || !PHONE_RE.is_match(phone) {
        return Err(QuoteValidationError::Phone);
    }

    let email = request.email.trim();
    if !email.is_empty() && !EMAIL_RE.is_match(email) {
        return Err(QuoteValidationError::Email);
    }

    let service = request.service.trim();
    if service.is_empty() || !services.iter().any(|known| *known == service) {
        return Err(QuoteValidationError::Service);
    }

    if request.description.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(QuoteValidationError::Description);
    }

    if request.address.trim().is_empty() {
        return Err(QuoteValidationError::Address);
    }

    Ok(())
}
