//! Profile sections: professional experiences, soft skills, certifications.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub organization: String,
    /// Free-form period label (e.g. `"2023 - Aujourd'hui"`).
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftSkill {
    pub id: String,
    /// Free text, typically a single emoji glyph.
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub organization: String,
    /// Free-form date label; not parsed.
    pub date: String,
    pub summary: String,
    pub highlights: Vec<String>,
    pub skills: Vec<String>,
}
