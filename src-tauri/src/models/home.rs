//! Home page blocks: hero banner and highlight statistics.

use serde::{Deserialize, Serialize};

/// The hero banner at the top of the home page.
///
/// Singleton block, no id. The three calls to action are flattened into
/// `primaryCta*`, `secondaryCta*` and `tertiaryCta*` keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub badge: String,
    pub greeting: String,
    /// Emphasized part of the greeting (usually the owner's name).
    pub highlight: String,
    pub description: String,
    pub primary_cta_label: String,
    pub primary_cta_href: String,
    pub secondary_cta_label: String,
    pub secondary_cta_href: String,
    /// When `true` the secondary link downloads its target (the CV).
    pub secondary_cta_download: bool,
    pub tertiary_cta_label: String,
    pub tertiary_cta_href: String,
    /// When `true` the tertiary link opens in a new window.
    pub tertiary_cta_external: bool,
}

/// Where a highlight takes its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightValueType {
    /// Number of projects, computed at read time.
    Projects,
    /// Number of skills, computed at read time.
    Skills,
    /// The highlight's own `customValue`.
    #[default]
    Custom,
}

impl HighlightValueType {
    /// Total mapping from an untrusted value; unknown or missing input is
    /// [`HighlightValueType::Custom`].
    pub fn or_default(raw: Option<&str>) -> HighlightValueType {
        match raw {
            Some("projects") => HighlightValueType::Projects,
            Some("skills") => HighlightValueType::Skills,
            _ => HighlightValueType::Custom,
        }
    }
}

/// A statistic shown under the hero banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub id: String,
    pub label: String,
    pub value_type: HighlightValueType,
    /// Only displayed for [`HighlightValueType::Custom`].
    pub custom_value: String,
}

impl Highlight {
    /// The value to display, given the current collection sizes.
    ///
    /// Counts render as `"<n>+"`, or `"0"` for an empty collection. A blank
    /// custom value renders as `"-"`.
    pub fn display_value(&self, project_count: usize, skill_count: usize) -> String {
        match self.value_type {
            HighlightValueType::Projects => format_count(project_count),
            HighlightValueType::Skills => format_count(skill_count),
            HighlightValueType::Custom if self.custom_value.trim().is_empty() => "-".to_string(),
            HighlightValueType::Custom => self.custom_value.clone(),
        }
    }
}

fn format_count(n: usize) -> String {
    if n > 0 {
        format!("{n}+")
    } else {
        "0".to_string()
    }
}

/// A highlight with its display value resolved. Read-only projection; never
/// stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightCard {
    pub id: String,
    pub label: String,
    pub value_type: HighlightValueType,
    pub value: String,
}

impl HighlightCard {
    pub fn resolve(highlight: &Highlight, project_count: usize, skill_count: usize) -> Self {
        Self {
            id: highlight.id.clone(),
            label: highlight.label.clone(),
            value_type: highlight.value_type,
            value: highlight.display_value(project_count, skill_count),
        }
    }
}
