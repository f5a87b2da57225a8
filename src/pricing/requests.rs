//! Request DTOs for the calculator endpoints.

use serde::Deserialize;
use serde_json::Value;

use super::calculators::parse_quantity;
use super::models::{PricingInput, WorkType};

/// Calculator form as posted by the browser.
///
/// Quantities arrive as raw strings so that blank or malformed fields can be
/// clamped instead of rejected.
#[derive(Debug, Default, Deserialize)]
pub struct CalculatorForm {
    #[serde(default)]
    pub work_type: WorkType,
    #[serde(default)]
    pub outlets: String,
    #[serde(default)]
    pub light_fixtures: String,
    #[serde(default)]
    pub wire_length: String,
}

impl CalculatorForm {
    pub fn to_input(&self) -> PricingInput {
        PricingInput {
            work_type: self.work_type,
            outlet_count: parse_quantity(&self.outlets),
            fixture_count: parse_quantity(&self.light_fixtures),
            wire_length_meters: parse_quantity(&self.wire_length),
        }
    }
}

/// JSON request to calculate an estimate.
///
/// Fields are taken as raw JSON values: scripted clients send strings,
/// floats and nulls too, and none of those may fail the request.
#[derive(Debug, Default, Deserialize)]
pub struct CalculateCostRequest {
    #[serde(default)]
    pub work_type: Value,
    #[serde(default)]
    pub outlet_count: Value,
    #[serde(default)]
    pub fixture_count: Value,
    #[serde(default)]
    pub wire_length_meters: Value,
}

impl CalculateCostRequest {
    pub fn to_input(&self) -> PricingInput {
        PricingInput {
            work_type: self
                .work_type
                .as_str()
                .map(WorkType::from_str_lossy)
                .unwrap_or_default(),
            outlet_count: json_quantity(&self.outlet_count),
            fixture_count: json_quantity(&self.fixture_count),
            wire_length_meters: json_quantity(&self.wire_length_meters),
        }
    }
}

/// Integers clamp, floats truncate, strings go through [`parse_quantity`],
/// anything else is 0.
fn json_quantity(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(n) = n.as_u64() {
                n.min(u64::from(u32::MAX)) as u32
            } else if n.is_i64() {
                0
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f > 0.0)
                    .map_or(0, |f| f.trunc().min(f64::from(u32::MAX)) as u32)
            }
        }
        Value::String(s) => parse_quantity(s),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_form_clamps_fields() {
        let form = CalculatorForm {
            work_type: WorkType::Repair,
            outlets: "4".to_string(),
            light_fixtures: "-2".to_string(),
            wire_length: "".to_string(),
        };
        let input = form.to_input();
        assert_eq!(input.work_type, WorkType::Repair);
        assert_eq!(input.outlet_count, 4);
        assert_eq!(input.fixture_count, 0);
        assert_eq!(input.wire_length_meters, 0);
    }

    #[test]
    fn test_json_quantity_shapes() {
        assert_eq!(json_quantity(&serde_json::json!(7)), 7);
        assert_eq!(json_quantity(&serde_json::json!(-3)), 0);
        assert_eq!(json_quantity(&serde_json::json!(2.9)), 2);
        assert_eq!(json_quantity(&serde_json::json!(-0.5)), 0);
        assert_eq!(json_quantity(&serde_json::json!("5")), 5);
        assert_eq!(json_quantity(&serde_json::json!("abc")), 0);
        assert_eq!(json_quantity(&serde_json::json!(null)), 0);
        assert_eq!(json_quantity(&serde_json::json!([1])), 0);
        assert_eq!(json_quantity(&serde_json::json!(1e20)), u32::MAX);
        assert_eq!(json_quantity(&serde_json::json!(u64::MAX)), u32::MAX);
    }

    #[test]
    fn test_json_request_null_work_type_is_installation() {
        let request: CalculateCostRequest =
            serde_json::from_str(r#"{"work_type": null, "outlet_count": 5}"#).unwrap();
        let input = request.to_input();
        assert_eq!(input.work_type, WorkType::Installation);
        assert_eq!(input.outlet_count, 5);
    }

    #[test]
    fn test_json_request_negative_quantities_clamp_to_zero() {
        let request: CalculateCostRequest = serde_json::from_str(
            r#"{"work_type": "plumbing", "outlet_count": -5, "fixture_count": 2}"#,
        )
        .unwrap();
        let input = request.to_input();
        assert_eq!(input.work_type, WorkType::Installation);
        assert_eq!(input.outlet_count, 0);
        assert_eq!(input.fixture_count, 2);
        assert_eq!(input.wire_length_meters, 0);
    }
}
