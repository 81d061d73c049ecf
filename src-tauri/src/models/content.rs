//! Aggregate content blocks and the persisted snapshot.

use serde::{Deserialize, Serialize};

use super::{
    Certification, ContactInfo, Experience, HeroContent, Highlight, Project, Skill, SoftSkill,
    TechWatchContent,
};

/// Every editable block other than the project and skill collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    pub hero: HeroContent,
    pub highlights: Vec<Highlight>,
    /// "About me" paragraphs, in display order.
    pub about: Vec<String>,
    pub experiences: Vec<Experience>,
    pub soft_skills: Vec<SoftSkill>,
    pub certifications: Vec<Certification>,
    pub tech_watch: TechWatchContent,
    pub contact: ContactInfo,
}

/// The full stored document.
///
/// This is exactly what is written to local storage, to export files, and
/// what import and the bootstrap document are sanitized into:
///
/// ```json
/// { "projects": [...], "skills": [...], "content": { "hero": {...}, ... } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub content: PortfolioContent,
}
