//! Pricing models: work types, the rate table and cost breakdowns.
//!
//! All amounts are whole hryvnias held in `u64`, so every line item is an
//! exact integer product.

use serde::{Deserialize, Serialize};

/// Flat fee for dispatching an electrician, charged on every estimate.
pub const CALLOUT_FEE: u64 = 300;

/// Category of work. Selects the rate set used by the calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum WorkType {
    /// New outlets, fixtures and wiring. Also the fallback for unknown input.
    #[default]
    Installation,
    /// Swapping existing equipment.
    Replacement,
    /// Repair and diagnostics.
    Repair,
}

impl WorkType {
    pub const ALL: [WorkType; 3] = [
        WorkType::Installation,
        WorkType::Replacement,
        WorkType::Repair,
    ];

    /// Parse a work type, falling back to [`WorkType::Installation`] for
    /// anything that is not one of the three known values.
    pub fn from_str_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "replacement" => WorkType::Replacement,
            "repair" => WorkType::Repair,
            "installation" => WorkType::Installation,
            other => {
                tracing::debug!("Unknown work type {:?}, pricing as installation", other);
                WorkType::Installation
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Installation => "installation",
            WorkType::Replacement => "replacement",
            WorkType::Repair => "repair",
        }
    }

    /// Label shown on the calculator radio buttons.
    pub fn label(&self) -> &'static str {
        match self {
            WorkType::Installation => "Встановлення нових",
            WorkType::Replacement => "Заміна існуючих",
            WorkType::Repair => "Ремонт/Діагностика",
        }
    }

    /// Rates for this work type.
    pub fn rates(&self) -> Rates {
        RATE_TABLE.rates_for(*self)
    }
}

impl From<String> for WorkType {
    fn from(value: String) -> Self {
        WorkType::from_str_lossy(&value)
    }
}

/// Per-unit rates for one work type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rates {
    pub outlet: u64,
    pub fixture: u64,
    pub wire_per_meter: u64,
}

/// Fixed price list, one rate set per work type.
#[derive(Debug, Clone, Copy)]
pub struct RateTable {
    pub installation: Rates,
    pub replacement: Rates,
    pub repair: Rates,
    pub callout_fee: u64,
}

impl RateTable {
    pub const fn rates_for(&self, work_type: WorkType) -> Rates {
        match work_type {
            WorkType::Installation => self.installation,
            WorkType::Replacement => self.replacement,
            WorkType::Repair => self.repair,
        }
    }
}

pub const RATE_TABLE: RateTable = RateTable {
    installation: Rates {
        outlet: 250,
        fixture: 350,
        wire_per_meter: 80,
    },
    replacement: Rates {
        outlet: 200,
        fixture: 300,
        wire_per_meter: 70,
    },
    repair: Rates {
        outlet: 150,
        fixture: 200,
        wire_per_meter: 50,
    },
    callout_fee: CALLOUT_FEE,
};

/// Quantities entered into the calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingInput {
    pub work_type: WorkType,
    pub outlet_count: u32,
    pub fixture_count: u32,
    pub wire_length_meters: u32,
}

impl PricingInput {
    pub fn has_any_quantity(&self) -> bool {
        self.outlet_count > 0 || self.fixture_count > 0 || self.wire_length_meters > 0
    }
}

/// Line items and total of an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub outlets_cost: u64,
    pub fixtures_cost: u64,
    pub wiring_cost: u64,
    pub callout_fee: u64,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_type_parse_known_values() {
        assert_eq!(WorkType::from_str_lossy("installation"), WorkType::Installation);
        assert_eq!(WorkType::from_str_lossy("Replacement"), WorkType::Replacement);
        assert_eq!(WorkType::from_str_lossy(" repair "), WorkType::Repair);
    }

    #[test]
    fn test_work_type_unknown_falls_back_to_installation() {
        assert_eq!(WorkType::from_str_lossy("rewiring"), WorkType::Installation);
        assert_eq!(WorkType::from_str_lossy(""), WorkType::Installation);
        assert_eq!(WorkType::default(), WorkType::Installation);
    }

    #[test]
    fn test_work_type_deserialize_is_lossy() {
        let parsed: WorkType = serde_json::from_str("\"repair\"").unwrap();
        assert_eq!(parsed, WorkType::Repair);
        let parsed: WorkType = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(parsed, WorkType::Installation);
    }

    #[test]
    fn test_rate_table_values() {
        assert_eq!(WorkType::Installation.rates().outlet, 250);
        assert_eq!(WorkType::Replacement.rates().fixture, 300);
        assert_eq!(WorkType::Repair.rates().wire_per_meter, 50);
        assert_eq!(RATE_TABLE.callout_fee, 300);
    }
}
