//! Sanitizers for singleton blocks.
//!
//! A singleton has no fixed placeholder text: anything missing or malformed
//! is taken from a fallback block instead, and non-object input yields a
//! copy of the fallback.

use serde_json::Value;

use super::{
    bool_field, clean_strings, field, free_str, required_str, resanitize, sanitize_list,
    text_key, Sanitize,
};
use crate::models::{ContactInfo, HeroContent, PortfolioContent, TechWatchContent};

pub fn sanitize_hero(raw: &Value, fallback: &HeroContent) -> HeroContent {
    if !raw.is_object() {
        return fallback.clone();
    }
    HeroContent {
        badge: required_str(raw, "badge", &fallback.badge),
        greeting: required_str(raw, "greeting", &fallback.greeting),
        highlight: required_str(raw, "highlight", &fallback.highlight),
        description: free_str(raw, "description", &fallback.description),
        primary_cta_label: required_str(raw, "primaryCtaLabel", &fallback.primary_cta_label),
        primary_cta_href: required_str(raw, "primaryCtaHref", &fallback.primary_cta_href),
        secondary_cta_label: required_str(raw, "secondaryCtaLabel", &fallback.secondary_cta_label),
        secondary_cta_href: required_str(raw, "secondaryCtaHref", &fallback.secondary_cta_href),
        secondary_cta_download: bool_field(
            raw,
            "secondaryCtaDownload",
            fallback.secondary_cta_download,
        ),
        tertiary_cta_label: required_str(raw, "tertiaryCtaLabel", &fallback.tertiary_cta_label),
        tertiary_cta_href: required_str(raw, "tertiaryCtaHref", &fallback.tertiary_cta_href),
        tertiary_cta_external: bool_field(
            raw,
            "tertiaryCtaExternal",
            fallback.tertiary_cta_external,
        ),
    }
}

pub fn sanitize_tech_watch(raw: &Value, fallback: &TechWatchContent) -> TechWatchContent {
    if !raw.is_object() {
        return fallback.clone();
    }
    TechWatchContent {
        badge: required_str(raw, "badge", &fallback.badge),
        title: required_str(raw, "title", &fallback.title),
        description: free_str(raw, "description", &fallback.description),
        focus_topics: list_or_fallback(raw, "focusTopics", &fallback.focus_topics),
        sources: list_or_fallback(raw, "sources", &fallback.sources),
        roadmap: list_or_fallback(raw, "roadmap", &fallback.roadmap),
    }
}

/// Overwrite the intro fields of `tech_watch` from `raw`, leaving the lists
/// alone. Blank badge or title keep the current value.
pub fn merge_tech_watch_intro(tech_watch: &TechWatchContent, raw: &Value) -> TechWatchContent {
    TechWatchContent {
        badge: required_str(raw, "badge", &tech_watch.badge),
        title: required_str(raw, "title", &tech_watch.title),
        description: free_str(raw, "description", &tech_watch.description),
        ..tech_watch.clone()
    }
}

pub fn sanitize_contact(raw: &Value, fallback: &ContactInfo) -> ContactInfo {
    if !raw.is_object() {
        return fallback.clone();
    }
    ContactInfo {
        email: required_str(raw, "email", &fallback.email),
        linkedin_url: required_str(raw, "linkedinUrl", &fallback.linkedin_url),
        location_line1: required_str(raw, "locationLine1", &fallback.location_line1),
        location_line2: optional_line(raw, "locationLine2", fallback.location_line2.as_deref()),
    }
}

/// A missing key keeps `fallback`; a present key that is blank, null or not
/// a string clears the line.
fn optional_line(raw: &Value, key: &str, fallback: Option<&str>) -> Option<String> {
    if field(raw, key).is_none() {
        return fallback.map(str::to_string);
    }
    text_key(raw, key)
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
}

pub fn sanitize_content(raw: &Value, fallback: &PortfolioContent) -> PortfolioContent {
    if !raw.is_object() {
        return fallback.clone();
    }
    let block = |key: &str| field(raw, key).unwrap_or(&Value::Null);
    PortfolioContent {
        hero: sanitize_hero(block("hero"), &fallback.hero),
        highlights: list_or_fallback(raw, "highlights", &fallback.highlights),
        about: match field(raw, "about") {
            Some(about) if about.is_array() => clean_strings(about),
            _ => fallback.about.clone(),
        },
        experiences: list_or_fallback(raw, "experiences", &fallback.experiences),
        soft_skills: list_or_fallback(raw, "softSkills", &fallback.soft_skills),
        certifications: list_or_fallback(raw, "certifications", &fallback.certifications),
        tech_watch: sanitize_tech_watch(block("techWatch"), &fallback.tech_watch),
        contact: sanitize_contact(block("contact"), &fallback.contact),
    }
}

/// Trim every paragraph and drop the blank ones.
pub fn clean_paragraphs(paragraphs: &[String]) -> Vec<String> {
    paragraphs
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn list_or_fallback<T: Sanitize>(raw: &Value, key: &str, fallback: &[T]) -> Vec<T> {
    match field(raw, key).and_then(Value::as_array) {
        Some(items) => sanitize_list(items),
        None => resanitize(fallback),
    }
}
