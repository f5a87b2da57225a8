//! Blog route handlers

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::content::models::BlogArticle;
use crate::error::{AppError, Result};
use crate::routes::layout::PageLayout;
use crate::AppState;

/// Query parameters for blog listing
#[derive(Debug, Deserialize)]
pub struct BlogListQuery {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default)]
    pub tag: Option<String>,
}

fn default_page() -> usize {
    1
}

const POSTS_PER_PAGE: usize = 6;
const RELATED_POSTS: usize = 3;

/// Blog listing template
#[derive(Template)]
#[template(path = "blog/list.html")]
struct BlogListTemplate {
    layout: PageLayout,
    articles: Vec<BlogArticle>,
    tags: Vec<String>,
    current_tag: String,
    page: usize,
    total_pages: usize,
    has_previous: bool,
    has_next: bool,
    has_articles: bool,
    has_tag: bool,
}

/// Blog detail template
#[derive(Template)]
#[template(path = "blog/detail.html")]
struct BlogDetailTemplate {
    layout: PageLayout,
    article: BlogArticle,
    related: Vec<BlogArticle>,
    has_related: bool,
}

/// Blog listing page
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<BlogListQuery>,
) -> Result<Html<String>> {
    let content = &state.content;
    let tag = query.tag.filter(|t| !t.trim().is_empty());

    let matching: Vec<&BlogArticle> = content
        .articles
        .iter()
        .filter(|a| tag.as_ref().map_or(true, |t| a.tags.contains(t)))
        .collect();

    let total_pages = matching.len().div_ceil(POSTS_PER_PAGE).max(1);
    let page = query.page.clamp(1, total_pages);
    let articles: Vec<BlogArticle> = matching
        .into_iter()
        .skip((page - 1) * POSTS_PER_PAGE)
        .take(POSTS_PER_PAGE)
        .cloned()
        .collect();

    let template = BlogListTemplate {
        layout: PageLayout::new(
            content,
            "Блог про електрику",
            "Корисні статті, поради та рекомендації від професійних електриків",
            "/blog",
        ),
        has_articles: !articles.is_empty(),
        articles,
        tags: all_tags(&content.articles),
        has_tag: tag.is_some(),
        current_tag: tag.unwrap_or_default(),
        page,
        total_pages,
        has_previous: page > 1,
        has_next: page < total_pages,
    };

    Ok(Html(template.render()?))
}

/// Blog detail page
pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> Result<Html<String>> {
    let content = &state.content;
    let article = id
        .parse::<u32>()
        .ok()
        .and_then(|id| content.find_article(id))
        .ok_or(AppError::NotFound)?;

    let related: Vec<BlogArticle> = content
        .articles
        .iter()
        .filter(|a| a.id != article.id)
        .take(RELATED_POSTS)
        .cloned()
        .collect();

    let template = BlogDetailTemplate {
        layout: PageLayout::new(content, &article.title, &article.excerpt, "/blog"),
        article: article.clone(),
        has_related: !related.is_empty(),
        related,
    };

    Ok(Html(template.render()?))
}

/// Distinct tags in first-seen order
fn all_tags(articles: &[BlogArticle]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in articles.iter().flat_map(|a| a.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}
