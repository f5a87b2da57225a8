//! Response DTOs for pricing API endpoints.

use serde::Serialize;

use super::models::{CostBreakdown, PricingInput, Rates, WorkType, RATE_TABLE};

/// Currency every amount is quoted in.
pub const CURRENCY: &str = "UAH";

/// Response for a cost calculation
#[derive(Debug, Serialize)]
pub struct CostBreakdownResponse {
    pub work_type: WorkType,
    pub outlet_count: u32,
    pub fixture_count: u32,
    pub wire_length_meters: u32,
    pub outlets_cost: u64,
    pub fixtures_cost: u64,
    pub wiring_cost: u64,
    pub callout_fee: u64,
    pub total: u64,
    pub currency: &'static str,
}

impl CostBreakdownResponse {
    pub fn new(input: &PricingInput, cost: &CostBreakdown) -> Self {
        Self {
            work_type: input.work_type,
            outlet_count: input.outlet_count,
            fixture_count: input.fixture_count,
            wire_length_meters: input.wire_length_meters,
            outlets_cost: cost.outlets_cost,
            fixtures_cost: cost.fixtures_cost,
            wiring_cost: cost.wiring_cost,
            callout_fee: cost.callout_fee,
            total: cost.total,
            currency: CURRENCY,
        }
    }
}

/// Rates for a single work type
#[derive(Debug, Serialize)]
pub struct WorkTypeRatesResponse {
    pub work_type: WorkType,
    pub label: &'static str,
    #[serde(flatten)]
    pub rates: Rates,
}

/// Response for the rate table
#[derive(Debug, Serialize)]
pub struct RateTableResponse {
    pub work_types: Vec<WorkTypeRatesResponse>,
    pub callout_fee: u64,
    pub currency: &'static str,
}

impl RateTableResponse {
    pub fn current() -> Self {
        Self {
            work_types: WorkType::ALL
                .iter()
                .map(|work_type| WorkTypeRatesResponse {
                    work_type: *work_type,
                    label: work_type.label(),
                    rates: RATE_TABLE.rates_for(*work_type),
                })
                .collect(),
            callout_fee: RATE_TABLE.callout_fee,
            currency: CURRENCY,
        }
    }
}
