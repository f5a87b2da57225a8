//! Service detail pages

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde_json::json;

use crate::content::models::Service;
use crate::content::SiteContent;
use crate::error::Result;
use crate::routes::layout::PageLayout;
use crate::AppState;

#[derive(Template)]
#[template(path = "service.html")]
struct ServiceTemplate {
    layout: PageLayout,
    service: Service,
    has_features: bool,
    other_services: Vec<Service>,
    schema_json: String,
}

/// Service page; unknown ids go back to the home page
pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let content = &state.content;
    let Some(service) = content.find_service(&id) else {
        tracing::debug!("Unknown service {:?}, redirecting home", id);
        return Ok(Redirect::to("/").into_response());
    };

    let city = &content.company.contact.address.city;
    let title = format!("{} в {}", service.title, city);
    let description = format!(
        "{} Професійні електромонтажні роботи. Ціна {}. Виклик майстра ☎ {}",
        service.description,
        service.price,
        content.primary_phone()
    );

    let template = ServiceTemplate {
        layout: PageLayout::new(content, &title, &description, "/#services"),
        has_features: !service.features.is_empty(),
        other_services: content
            .services
            .iter()
            .filter(|s| s.id != service.id)
            .cloned()
            .collect(),
        schema_json: service_schema(content, service),
        service: service.clone(),
    };

    Ok(Html(template.render()?).into_response())
}

/// schema.org `Service` markup, safe to embed in a `<script>` tag
fn service_schema(content: &SiteContent, service: &Service) -> String {
    let address = &content.company.contact.address;
    let schema = json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "name": service.title,
        "description": service.description,
        "provider": {
            "@type": "LocalBusiness",
            "name": content.company.company.name,
            "telephone": content.primary_phone(),
            "address": {
                "@type": "PostalAddress",
                "streetAddress": address.street,
                "addressLocality": address.city,
                "addressRegion": address.region,
                "postalCode": address.postal_code,
                "addressCountry": "UA",
            },
        },
        "areaServed": { "@type": "City", "name": address.city },
        "offers": {
            "@type": "Offer",
            "price": service.price,
            "priceCurrency": "UAH",
            "availability": "https://schema.org/InStock",
        },
    });

    schema.to_string().replace("</", "<\\/")
}
