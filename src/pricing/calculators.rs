//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no shared state.

use super::models::{CostBreakdown, PricingInput, RATE_TABLE};

/// Compute the estimate for the given quantities.
///
/// Never fails: every quantity is already non-negative, unknown work types
/// were mapped to installation when the input was parsed, and all products
/// are exact in `u64`.
///
/// # Examples
/// ```
/// use elektrik_web::pricing::{compute_cost, PricingInput, WorkType};
///
/// let cost = compute_cost(&PricingInput {
///     work_type: WorkType::Installation,
///     outlet_count: 5,
///     ..Default::default()
/// });
/// assert_eq!(cost.outlets_cost, 1250);
/// assert_eq!(cost.total, 1550);
/// ```
pub fn compute_cost(input: &PricingInput) -> CostBreakdown {
    let rates = RATE_TABLE.rates_for(input.work_type);

    let outlets_cost = u64::from(input.outlet_count) * rates.outlet;
    let fixtures_cost = u64::from(input.fixture_count) * rates.fixture;
    let wiring_cost = u64::from(input.wire_length_meters) * rates.wire_per_meter;
    let callout_fee = RATE_TABLE.callout_fee;

    CostBreakdown {
        outlets_cost,
        fixtures_cost,
        wiring_cost,
        callout_fee,
        total: outlets_cost + fixtures_cost + wiring_cost + callout_fee,
    }
}

/// Clamp a raw form value to a quantity.
///
/// Leading digits are honoured (`"12abc"` is 12), anything without them,
/// including negative numbers, is 0. Values past `u32::MAX` saturate.
pub fn parse_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..digits_end];

    if digits.is_empty() {
        return 0;
    }

    digits.parse::<u64>().map_or(u32::MAX, |n| n.min(u64::from(u32::MAX)) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::{WorkType, CALLOUT_FEE};

    fn input(work_type: WorkType, outlets: u32, fixtures: u32, wire: u32) -> PricingInput {
        PricingInput {
            work_type,
            outlet_count: outlets,
            fixture_count: fixtures,
            wire_length_meters: wire,
        }
    }

    // ==================== compute_cost tests ====================

    #[test]
    fn test_compute_cost_all_zero_is_callout_only() {
        let cost = compute_cost(&input(WorkType::Installation, 0, 0, 0));
        assert_eq!(
            cost,
            CostBreakdown {
                outlets_cost: 0,
                fixtures_cost: 0,
                wiring_cost: 0,
                callout_fee: 300,
                total: 300,
            }
        );
    }

    #[test]
    fn test_compute_cost_five_outlets_installation() {
        let cost = compute_cost(&input(WorkType::Installation, 5, 0, 0));
        assert_eq!(cost.outlets_cost, 1250);
        assert_eq!(cost.total, 1550);
    }

    #[test]
    fn test_compute_cost_mixed_quantities_per_work_type() {
        let cost = compute_cost(&input(WorkType::Installation, 2, 3, 10));
        assert_eq!(cost.outlets_cost, 500);
        assert_eq!(cost.fixtures_cost, 1050);
        assert_eq!(cost.wiring_cost, 800);
        assert_eq!(cost.total, 2650);

        let cost = compute_cost(&input(WorkType::Replacement, 2, 3, 10));
        assert_eq!(cost.outlets_cost, 400);
        assert_eq!(cost.fixtures_cost, 900);
        assert_eq!(cost.wiring_cost, 700);
        assert_eq!(cost.total, 2300);

        let cost = compute_cost(&input(WorkType::Repair, 2, 3, 10));
        assert_eq!(cost.outlets_cost, 300);
        assert_eq!(cost.fixtures_cost, 600);
        assert_eq!(cost.wiring_cost, 500);
        assert_eq!(cost.total, 1700);
    }

    #[test]
    fn test_compute_cost_total_is_sum_of_components() {
        for work_type in WorkType::ALL {
            for (o, f, w) in [(0, 0, 0), (1, 0, 0), (7, 4, 35), (100, 100, 1000)] {
                let cost = compute_cost(&input(work_type, o, f, w));
                assert_eq!(
                    cost.total,
                    cost.outlets_cost + cost.fixtures_cost + cost.wiring_cost + cost.callout_fee
                );
                assert_eq!(cost.callout_fee, CALLOUT_FEE);
            }
        }
    }

    #[test]
    fn test_compute_cost_is_idempotent() {
        let request = input(WorkType::Replacement, 3, 2, 15);
        let first = compute_cost(&request);
        let second = compute_cost(&request);
        assert_eq!(first, second);
        assert_eq!(request, input(WorkType::Replacement, 3, 2, 15));
    }

    #[test]
    fn test_compute_cost_max_quantities_do_not_overflow() {
        let cost = compute_cost(&input(WorkType::Installation, u32::MAX, u32::MAX, u32::MAX));
        assert_eq!(cost.outlets_cost, u64::from(u32::MAX) * 250);
        assert_eq!(cost.fixtures_cost, u64::from(u32::MAX) * 350);
        assert_eq!(cost.wiring_cost, u64::from(u32::MAX) * 80);
    }

    // ==================== parse_quantity tests ====================

    #[test]
    fn test_parse_quantity_plain_numbers() {
        assert_eq!(parse_quantity("0"), 0);
        assert_eq!(parse_quantity("5"), 5);
        assert_eq!(parse_quantity(" 42 "), 42);
        assert_eq!(parse_quantity("+7"), 7);
    }

    #[test]
    fn test_parse_quantity_clamps_disallowed_values_to_zero() {
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity("-3"), 0);
        assert_eq!(parse_quantity("-"), 0);
    }

    #[test]
    fn test_parse_quantity_leading_digits() {
        assert_eq!(parse_quantity("12abc"), 12);
        assert_eq!(parse_quantity("3.7"), 3);
    }

    #[test]
    fn test_parse_quantity_saturates() {
        assert_eq!(parse_quantity("99999999999"), u32::MAX);
        assert_eq!(parse_quantity("999999999999999999999999"), u32::MAX);
    }
}
