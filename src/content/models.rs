//! Site content records
//!
//! Deserialized from the static JSON documents. Optional fields get their
//! fallback values here, so templates and handlers never re-derive defaults.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const FALLBACK_PHONE: &str = "+380677523103";
pub const FALLBACK_EMAIL: &str = "info@elektrik220.km.ua";

/// A service offered by the business
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display price, e.g. "від 150 грн"
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub urgent: bool,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Customer testimonial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
    pub text: String,
    #[serde(default)]
    pub service: String,
    pub date: NaiveDate,
}

fn default_rating() -> u8 {
    5
}

impl Testimonial {
    /// Rating clamped to 1..=5 for star rendering
    pub fn stars(&self) -> u8 {
        self.rating.clamp(1, 5)
    }
}

/// Company profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    #[serde(default = "default_company_name")]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub completed_projects: String,
    #[serde(default)]
    pub guarantee: String,
    #[serde(default)]
    pub response_time: String,
    #[serde(default)]
    pub services_count: u32,
}

fn default_company_name() -> String {
    "Електрик 220В".to_string()
}

impl Default for Company {
    fn default() -> Self {
        Self {
            name: default_company_name(),
            tagline: String::new(),
            description: String::new(),
            experience: String::new(),
            completed_projects: String::new(),
            guarantee: String::new(),
            response_time: String::new(),
            services_count: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phone {
    pub number: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub primary: bool,
}

impl Phone {
    /// `tel:` link target with spaces stripped
    pub fn href(&self) -> String {
        let digits: String = self.number.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{}", digits)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Default for Coordinates {
    fn default() -> Self {
        Self {
            lat: 48.672192,
            lng: 26.5671073,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub coordinates: Coordinates,
}

impl Default for Address {
    fn default() -> Self {
        Self {
            street: "Рiчна 11".to_string(),
            city: "Кам'янець-Подільський".to_string(),
            region: "Хмельницька область".to_string(),
            postal_code: "32301".to_string(),
            coordinates: Coordinates::default(),
        }
    }
}

impl Address {
    pub fn full(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.street, self.city, self.region, self.postal_code
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingHours {
    pub monday_friday: String,
    pub saturday: String,
    pub sunday: String,
    pub emergency: String,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            monday_friday: "08:00 - 20:00".to_string(),
            saturday: "09:00 - 18:00".to_string(),
            sunday: "10:00 - 16:00".to_string(),
            emergency: "24/7".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub working_hours: WorkingHours,
}

fn default_email() -> String {
    FALLBACK_EMAIL.to_string()
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            phones: Vec::new(),
            email: default_email(),
            address: Address::default(),
            working_hours: WorkingHours::default(),
        }
    }
}

impl Contact {
    /// Guarantee a primary phone so every consumer has a number to show.
    pub(crate) fn normalize(&mut self) {
        self.phones.retain(|p| !p.number.trim().is_empty());
        if self.phones.is_empty() {
            self.phones.push(Phone {
                number: FALLBACK_PHONE.to_string(),
                kind: "Основний".to_string(),
                primary: true,
            });
        }
        if !self.phones.iter().any(|p| p.primary) {
            self.phones[0].primary = true;
        }
        if self.email.trim().is_empty() {
            self.email = default_email();
        }
    }

    pub fn primary_phone(&self) -> Option<&Phone> {
        self.phones
            .iter()
            .find(|p| p.primary)
            .or_else(|| self.phones.first())
    }

    /// Number to offer when anything else fails, e.g. a lost quote request.
    pub fn primary_phone_number(&self) -> &str {
        self.primary_phone()
            .map(|p| p.number.as_str())
            .unwrap_or(FALLBACK_PHONE)
    }

    pub fn secondary_phones(&self) -> Vec<&Phone> {
        let primary = self.primary_phone_number();
        self.phones.iter().filter(|p| p.number != primary).collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialMedia {
    pub facebook: String,
    pub instagram: String,
    pub telegram: String,
}

/// Contents of company.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyData {
    #[serde(default)]
    pub company: Company,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub certificates: Vec<String>,
    #[serde(default)]
    pub social_media: SocialMedia,
}

/// Blog article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogArticle {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
    #[serde(default = "default_author")]
    pub author: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reading_time: String,
}

fn default_author() -> String {
    "Електрик 220В".to_string()
}

impl BlogArticle {
    /// Content split on blank lines for paragraph rendering
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    pub fn display_date(&self) -> String {
        self.date.format("%d.%m.%Y").to_string()
    }
}

/// Document wrappers as stored on disk
#[derive(Debug, Deserialize)]
pub(crate) struct ServicesDocument {
    #[serde(default)]
    pub services: Vec<Service>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TestimonialsDocument {
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BlogDocument {
    #[serde(default)]
    pub articles: Vec<BlogArticle>,
}
