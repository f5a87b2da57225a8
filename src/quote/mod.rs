//! Quote submission: the contact form, its validation and delivery to the
//! form relay.

pub mod models;
pub mod pipeline;
pub mod relay;
pub mod routes;
pub mod validation;

pub use models::{QuoteForm, QuoteRequest};
pub use pipeline::{Notice, QuotePipeline, SubmissionOutcome, SubmissionStatus};
pub use relay::{FormSubmitRelay, QuoteRelay, RelayError, RelayPayload};
pub use routes::router;
pub use validation::{validate, QuoteValidationError};
