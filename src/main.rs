use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use elektrik_web::config::Config;
use elektrik_web::quote::FormSubmitRelay;
use elektrik_web::{app, content, unavailable_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "elektrik_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Invalid configuration")?;
    let addr = config.bind_addr();

    let relay = FormSubmitRelay::new(config.relay_url.clone(), config.relay_timeout)
        .context("Failed to build quote relay client")?;
    tracing::info!("Quote requests relay to {}", relay.url());

    let router = match content::load(&config.content_source).await {
        Ok(site) => {
            tracing::info!(
                "Loaded content from {}: {} services, {} testimonials, {} articles",
                config.content_source,
                site.services.len(),
                site.testimonials.len(),
                site.articles.len()
            );
            app(AppState::new(site, Arc::new(relay), config))
        }
        Err(e) => {
            tracing::error!("Failed to load content from {}: {}", config.content_source, e);
            unavailable_app(e.to_string(), &config.static_dir)
        }
    };

    tracing::info!("Starting server on {addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, router).await?;

    Ok(())
}
