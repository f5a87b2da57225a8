//! Data shared by every page: header, footer and SEO tags.

use chrono::Datelike;

use crate::content::SiteContent;

const TITLE_SUFFIX: &str = " | Електрик 220В";

#[derive(Debug, Clone)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct PageLayout {
    pub seo_title: String,
    pub seo_description: String,
    pub company_name: String,
    pub tagline: String,
    pub primary_phone: String,
    pub primary_phone_href: String,
    pub email: String,
    pub address: String,
    pub emergency_hours: String,
    pub facebook: String,
    pub instagram: String,
    pub telegram: String,
    pub nav: Vec<NavLink>,
    pub year: i32,
}

const NAV: &[(&str, &str)] = &[
    ("/", "Головна"),
    ("/#services", "Послуги"),
    ("/calculator", "Калькулятор"),
    ("/#gallery", "Наші роботи"),
    ("/blog", "Блог"),
    ("/contact", "Контакти"),
];

impl PageLayout {
    /// `active` is the nav href to highlight
    pub fn new(content: &SiteContent, title: &str, description: &str, active: &str) -> Self {
        let company = &content.company.company;
        let contact = &content.company.contact;
        let primary = contact.primary_phone();

        let seo_title = if title.is_empty() {
            format!("{}{}", company.name, tagline_suffix(&company.tagline))
        } else {
            format!("{}{}", title, TITLE_SUFFIX)
        };
        let seo_description = if description.is_empty() {
            company.description.clone()
        } else {
            description.to_string()
        };

        Self {
            seo_title,
            seo_description,
            company_name: company.name.clone(),
            tagline: company.tagline.clone(),
            primary_phone: content.primary_phone().to_string(),
            primary_phone_href: primary
                .map(|p| p.href())
                .unwrap_or_else(|| format!("tel:{}", content.primary_phone())),
            email: contact.email.clone(),
            address: contact.address.full(),
            emergency_hours: contact.working_hours.emergency.clone(),
            facebook: content.company.social_media.facebook.clone(),
            instagram: content.company.social_media.instagram.clone(),
            telegram: content.company.social_media.telegram.clone(),
            nav: NAV
                .iter()
                .map(|&(href, label)| NavLink {
                    href,
                    label,
                    active: href == active,
                })
                .collect(),
            year: chrono::Utc::now().year(),
        }
    }
}

fn tagline_suffix(tagline: &str) -> String {
    if tagline.is_empty() {
        String::new()
    } else {
        format!(" - {}", tagline)
    }
}
