//! Site content: the four JSON documents, loaded once at startup.
//!
//! [`SiteContent`] is the immutable snapshot every handler reads through
//! `AppState`. Nothing mutates it after [`load`] returns.

pub mod loader;
pub mod models;
pub mod sections;

pub use loader::{load, ContentError, ContentSource};
pub use models::{
    BlogArticle, Company, CompanyData, Contact, Phone, Service, Testimonial, FALLBACK_PHONE,
};

/// Everything the site renders, fully populated.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub company: CompanyData,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub articles: Vec<BlogArticle>,
}

impl SiteContent {
    pub fn new(
        mut company: CompanyData,
        services: Vec<Service>,
        testimonials: Vec<Testimonial>,
        mut articles: Vec<BlogArticle>,
    ) -> Self {
        company.contact.normalize();
        articles.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));

        Self {
            company,
            services,
            testimonials,
            articles,
        }
    }

    pub fn primary_phone(&self) -> &str {
        self.company.contact.primary_phone_number()
    }

    /// Titles offered in the quote form's service dropdown
    pub fn service_titles(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.title.as_str()).collect()
    }

    pub fn find_service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn find_article(&self, id: u32) -> Option<&BlogArticle> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Articles are kept newest first
    pub fn latest_articles(&self, limit: usize) -> &[BlogArticle] {
        &self.articles[..limit.min(self.articles.len())]
    }

    /// Mean testimonial rating with one decimal, 0.0 when there are none
    pub fn average_rating(&self) -> f64 {
        if self.testimonials.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.testimonials.iter().map(|t| u32::from(t.stars())).sum();
        let mean = f64::from(sum) / self.testimonials.len() as f64;
        (mean * 10.0).round() / 10.0
    }
}
