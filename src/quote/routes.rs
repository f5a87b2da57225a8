//! Contact page and quote submission routes

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use serde::Serialize;

use crate::content::models::{Contact, Phone};
use crate::error::Result;
use crate::routes::layout::PageLayout;
use crate::AppState;

use super::models::QuoteForm;
use super::pipeline::{QuotePipeline, SubmissionOutcome, SUCCESS_MESSAGE};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", get(contact_page).post(submit_form))
        .route("/api/quote", post(submit_json))
}

#[derive(Debug, Clone)]
pub struct ServiceOption {
    pub title: String,
    pub selected: bool,
}

/// Everything the quote form partial needs to render
#[derive(Debug, Clone)]
pub struct QuoteFormView {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub description: String,
    pub address: String,
    pub preferred_time: String,
    pub services: Vec<ServiceOption>,
    pub has_notice: bool,
    pub notice_is_error: bool,
    pub notice_message: String,
    pub invalid_field: String,
    pub submitting: bool,
}

impl QuoteFormView {
    pub fn new(pipeline: &QuotePipeline, service_titles: &[&str]) -> Self {
        let request = pipeline.request();
        let notice = pipeline.notice();
        Self {
            name: request.name.clone(),
            phone: request.phone.clone(),
            email: request.email.clone(),
            service: request.service.clone(),
            description: request.description.clone(),
            address: request.address.clone(),
            preferred_time: request.preferred_time.clone(),
            services: service_titles
                .iter()
                .map(|title| ServiceOption {
                    title: title.to_string(),
                    selected: *title == request.service,
                })
                .collect(),
            has_notice: notice.is_some(),
            notice_is_error: notice.map(|n| n.is_error()).unwrap_or(false),
            notice_message: notice.map(|n| n.message().to_string()).unwrap_or_default(),
            invalid_field: pipeline.invalid_field().unwrap_or_default().to_string(),
            submitting: pipeline.is_submitting(),
        }
    }
}

/// Contact details block of the contact section
#[derive(Debug, Clone)]
pub struct ContactView {
    pub primary_phone: String,
    pub primary_phone_href: String,
    pub other_phones: Vec<Phone>,
    pub email: String,
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub monday_friday: String,
    pub saturday: String,
    pub sunday: String,
    pub emergency: String,
    pub has_map: bool,
    pub map_url: String,
}

impl ContactView {
    pub fn new(contact: &Contact, maps_api_key: Option<&str>) -> Self {
        let primary_phone = contact.primary_phone_number().to_string();
        let coords = contact.address.coordinates;
        let map_url = maps_api_key
            .map(|key| {
                format!(
                    "https://www.google.com/maps/embed/v1/place?key={}&q={},{}&zoom=15",
                    key, coords.lat, coords.lng
                )
            })
            .unwrap_or_default();

        Self {
            primary_phone_href: contact
                .primary_phone()
                .map(|p| p.href())
                .unwrap_or_else(|| format!("tel:{}", primary_phone)),
            primary_phone,
            other_phones: contact.secondary_phones().into_iter().cloned().collect(),
            email: contact.email.clone(),
            street: contact.address.street.clone(),
            city: contact.address.city.clone(),
            region: contact.address.region.clone(),
            postal_code: contact.address.postal_code.clone(),
            monday_friday: contact.working_hours.monday_friday.clone(),
            saturday: contact.working_hours.saturday.clone(),
            sunday: contact.working_hours.sunday.clone(),
            emergency: contact.working_hours.emergency.clone(),
            has_map: !map_url.is_empty(),
            map_url,
        }
    }
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    layout: PageLayout,
    contact: ContactView,
    form: QuoteFormView,
}

fn render(state: &AppState, pipeline: &QuotePipeline) -> Result<Html<String>> {
    let content = &state.content;
    let template = ContactTemplate {
        layout: PageLayout::new(
            content,
            "Контакти та замовлення послуг",
            "Зв'яжіться з нами для професійної консультації та замовлення послуг електрика",
            "/contact",
        ),
        contact: ContactView::new(
            &content.company.contact,
            state.config.maps_api_key.as_deref(),
        ),
        form: QuoteFormView::new(pipeline, &content.service_titles()),
    };
    Ok(Html(template.render()?))
}

/// Contact page with an empty form
pub async fn contact_page(State(state): State<AppState>) -> Result<Html<String>> {
    render(&state, &QuotePipeline::new())
}

/// Browser form post
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<QuoteForm>,
) -> Result<(StatusCode, Html<String>)> {
    let mut pipeline = QuotePipeline::from_form(form);
    let outcome = pipeline
        .submit(
            state.relay.as_ref(),
            &state.content.service_titles(),
            state.content.primary_phone(),
        )
        .await;

    let status = match outcome {
        SubmissionOutcome::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmissionOutcome::Failed => StatusCode::BAD_GATEWAY,
        SubmissionOutcome::Sent | SubmissionOutcome::Suppressed | SubmissionOutcome::Busy => {
            StatusCode::OK
        }
    };

    Ok((status, render(&state, &pipeline)?))
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

/// JSON submission for scripted clients
pub async fn submit_json(
    State(state): State<AppState>,
    Json(form): Json<QuoteForm>,
) -> (StatusCode, Json<QuoteResponse>) {
    let mut pipeline = QuotePipeline::from_form(form);
    let outcome = pipeline
        .submit(
            state.relay.as_ref(),
            &state.content.service_titles(),
            state.content.primary_phone(),
        )
        .await;

    let message = pipeline
        .notice()
        .map(|n| n.message().to_string())
        .unwrap_or_default();

    let (status, body) = match outcome {
        // Bots get the same answer as people
        SubmissionOutcome::Sent | SubmissionOutcome::Suppressed => (
            StatusCode::OK,
            QuoteResponse {
                status: "sent",
                message: SUCCESS_MESSAGE.to_string(),
                field: None,
            },
        ),
        SubmissionOutcome::Rejected(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            QuoteResponse {
                status: "rejected",
                message,
                field: Some(err.field()),
            },
        ),
        SubmissionOutcome::Failed => (
            StatusCode::BAD_GATEWAY,
            QuoteResponse {
                status: "failed",
                message,
                field: None,
            },
        ),
        SubmissionOutcome::Busy => (
            StatusCode::CONFLICT,
            QuoteResponse {
                status: "busy",
                message,
                field: None,
            },
        ),
    };

    (status, Json(body))
}
