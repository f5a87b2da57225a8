//! Pricing engine module.
//!
//! Turns calculator input into an indicative estimate. The estimate is a
//! presentation aid only; the final price is set after an on-site visit.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{compute_cost, parse_quantity};
pub use models::{CostBreakdown, PricingInput, Rates, WorkType, CALLOUT_FEE, RATE_TABLE};
pub use routes::router;
