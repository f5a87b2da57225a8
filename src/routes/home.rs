//! Home page: every section of the site on one page

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::content::models::{BlogArticle, Company, Service, Testimonial};
use crate::content::sections::{self, FaqEntry, GalleryItem, FAQ, GALLERY_CATEGORIES};
use crate::error::Result;
use crate::pricing::{routes::CalculatorView, PricingInput};
use crate::quote::{routes::ContactView, routes::QuoteFormView, QuotePipeline};
use crate::routes::layout::PageLayout;
use crate::AppState;

const LATEST_ARTICLES: usize = 3;

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    #[serde(default = "default_category")]
    pub gallery: String,
}

fn default_category() -> String {
    "all".to_string()
}

#[derive(Debug, Clone)]
pub struct GalleryTab {
    pub category: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    layout: PageLayout,
    company: Company,
    certificates: Vec<String>,
    services: Vec<Service>,
    has_services: bool,
    testimonials: Vec<Testimonial>,
    has_testimonials: bool,
    average_rating: String,
    articles: Vec<BlogArticle>,
    has_articles: bool,
    gallery: Vec<GalleryItem>,
    gallery_tabs: Vec<GalleryTab>,
    faq: &'static [FaqEntry],
    calculator: CalculatorView,
    contact: ContactView,
    form: QuoteFormView,
}

/// Homepage handler
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Result<Html<String>> {
    let content = &state.content;

    let template = HomeTemplate {
        layout: PageLayout::new(content, "", "", "/"),
        company: content.company.company.clone(),
        certificates: content.company.certificates.clone(),
        has_services: !content.services.is_empty(),
        services: content.services.clone(),
        has_testimonials: !content.testimonials.is_empty(),
        testimonials: content.testimonials.clone(),
        average_rating: format!("{:.1}", content.average_rating()),
        has_articles: !content.articles.is_empty(),
        articles: content.latest_articles(LATEST_ARTICLES).to_vec(),
        gallery: sections::gallery_items(&query.gallery),
        gallery_tabs: gallery_tabs(&query.gallery),
        faq: FAQ,
        calculator: CalculatorView::new(&PricingInput::default()),
        contact: ContactView::new(
            &content.company.contact,
            state.config.maps_api_key.as_deref(),
        ),
        form: QuoteFormView::new(&QuotePipeline::new(), &content.service_titles()),
    };

    Ok(Html(template.render()?))
}

fn gallery_tabs(selected: &str) -> Vec<GalleryTab> {
    let selected = if GALLERY_CATEGORIES.iter().any(|(c, _)| *c == selected) {
        selected
    } else {
        "all"
    };
    GALLERY_CATEGORIES
        .iter()
        .map(|&(category, label)| GalleryTab {
            category,
            label,
            active: category == selected,
        })
        .collect()
}
