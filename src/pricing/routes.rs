//! Calculator routes.
//!
//! The estimate is only computed when the form is submitted; editing a
//! field in the browser does not recalculate.

use askama::Template;
use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};

use crate::error::Result;
use crate::routes::layout::PageLayout;
use crate::AppState;

use super::calculators::compute_cost;
use super::models::{CostBreakdown, PricingInput, WorkType};
use super::requests::{CalculateCostRequest, CalculatorForm};
use super::responses::{CostBreakdownResponse, RateTableResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calculator", get(calculator_page).post(calculate))
        .route("/api/pricing/calculate", post(calculate_json))
        .route("/api/pricing/rates", get(rates_json))
}

#[derive(Debug, Clone)]
pub struct WorkTypeOption {
    pub value: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// Calculator form and result panel, shared by the calculator page and the
/// home page section.
#[derive(Debug, Clone)]
pub struct CalculatorView {
    pub work_types: Vec<WorkTypeOption>,
    pub outlets: String,
    pub light_fixtures: String,
    pub wire_length: String,
    pub outlet_rate: u64,
    pub fixture_rate: u64,
    pub wire_rate: u64,
    pub outlet_count: u32,
    pub fixture_count: u32,
    pub wire_length_meters: u32,
    pub has_any_input: bool,
    pub has_result: bool,
    pub cost: CostBreakdown,
}

impl CalculatorView {
    /// Inputs as entered, with no estimate yet
    pub fn new(input: &PricingInput) -> Self {
        let rates = input.work_type.rates();
        Self {
            work_types: WorkType::ALL
                .iter()
                .map(|wt| WorkTypeOption {
                    value: wt.as_str(),
                    label: wt.label(),
                    checked: *wt == input.work_type,
                })
                .collect(),
            outlets: blank_if_zero(input.outlet_count),
            light_fixtures: blank_if_zero(input.fixture_count),
            wire_length: blank_if_zero(input.wire_length_meters),
            outlet_rate: rates.outlet,
            fixture_rate: rates.fixture,
            wire_rate: rates.wire_per_meter,
            outlet_count: input.outlet_count,
            fixture_count: input.fixture_count,
            wire_length_meters: input.wire_length_meters,
            has_any_input: input.has_any_quantity(),
            has_result: false,
            cost: compute_cost(&PricingInput {
                work_type: input.work_type,
                ..Default::default()
            }),
        }
    }

    /// Inputs plus the computed estimate
    pub fn calculated(input: &PricingInput) -> Self {
        Self {
            has_result: input.has_any_quantity(),
            cost: compute_cost(input),
            ..Self::new(input)
        }
    }
}

fn blank_if_zero(value: u32) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

#[derive(Template)]
#[template(path = "calculator.html")]
struct CalculatorTemplate {
    layout: PageLayout,
    calculator: CalculatorView,
}

fn render(state: &AppState, calculator: CalculatorView) -> Result<Html<String>> {
    let template = CalculatorTemplate {
        layout: PageLayout::new(
            &state.content,
            "Калькулятор вартості робіт",
            "Орієнтовна вартість електромонтажних робіт за лічені секунди",
            "/calculator",
        ),
        calculator,
    };
    Ok(Html(template.render()?))
}

/// Calculator page with empty inputs
pub async fn calculator_page(State(state): State<AppState>) -> Result<Html<String>> {
    render(&state, CalculatorView::new(&PricingInput::default()))
}

/// Explicit "calculate" submit
pub async fn calculate(
    State(state): State<AppState>,
    Form(form): Form<CalculatorForm>,
) -> Result<Html<String>> {
    let input = form.to_input();
    tracing::debug!(
        work_type = input.work_type.as_str(),
        outlets = input.outlet_count,
        fixtures = input.fixture_count,
        wire = input.wire_length_meters,
        "Calculating estimate"
    );
    render(&state, CalculatorView::calculated(&input))
}

pub async fn calculate_json(Json(request): Json<CalculateCostRequest>) -> Json<CostBreakdownResponse> {
    let input = request.to_input();
    let cost = compute_cost(&input);
    Json(CostBreakdownResponse::new(&input, &cost))
}

pub async fn rates_json() -> Json<RateTableResponse> {
    Json(RateTableResponse::current())
}
