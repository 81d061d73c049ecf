//! Sanitizers for collection entities.
//!
//! Non-object input is treated as an object with every field absent, so each
//! function yields a fully defaulted entity with a fresh id.

use serde_json::Value;

use super::{free_str, id_field, required_str, string_list, text_key, Sanitize};
use crate::models::{
    Certification, Experience, Highlight, HighlightValueType, IconKey, Project, Skill, SoftSkill,
    TechWatchRoadmapStep, TechWatchSource, TechWatchTopic,
};

const PROJECT_TITLE: &str = "Projet sans titre";
const SKILL_NAME: &str = "Compétence";
const SKILL_CATEGORY: &str = "Autre";
const HIGHLIGHT_LABEL: &str = "Statistique";
const EXPERIENCE_TITLE: &str = "Expérience";
const EXPERIENCE_ORGANIZATION: &str = "Organisation";
const PERIOD: &str = "Période";
const SOFT_SKILL_ICON: &str = "⭐";
const SOFT_SKILL_TITLE: &str = "Qualité";
const SOFT_SKILL_DESCRIPTION: &str = "Description à compléter";
const CERTIFICATION_TITLE: &str = "Certification";
const CERTIFICATION_ORGANIZATION: &str = "Organisme";
const TOPIC_TITLE: &str = "Sujet";
const SOURCE_LABEL: &str = "Source";

pub fn sanitize_project(raw: &Value) -> Project {
    Project {
        id: id_field(raw),
        title: required_str(raw, "title", PROJECT_TITLE),
        description: free_str(raw, "description", ""),
        icon: IconKey::or_default(text_key(raw, "icon")),
        technologies: string_list(raw, "technologies"),
        achievements: string_list(raw, "achievements"),
    }
}

pub fn sanitize_skill(raw: &Value) -> Skill {
    Skill {
        id: id_field(raw),
        name: required_str(raw, "name", SKILL_NAME),
        category: required_str(raw, "category", SKILL_CATEGORY),
        icon: IconKey::or_default(text_key(raw, "icon")),
    }
}

pub fn sanitize_highlight(raw: &Value) -> Highlight {
    Highlight {
        id: id_field(raw),
        label: required_str(raw, "label", HIGHLIGHT_LABEL),
        value_type: HighlightValueType::or_default(text_key(raw, "valueType")),
        // Blank custom values collapse to "" so the card shows the dash.
        custom_value: required_str(raw, "customValue", ""),
    }
}

pub fn sanitize_experience(raw: &Value) -> Experience {
    Experience {
        id: id_field(raw),
        title: required_str(raw, "title", EXPERIENCE_TITLE),
        organization: required_str(raw, "organization", EXPERIENCE_ORGANIZATION),
        period: required_str(raw, "period", PERIOD),
        description: free_str(raw, "description", ""),
    }
}

pub fn sanitize_soft_skill(raw: &Value) -> SoftSkill {
    SoftSkill {
        id: id_field(raw),
        icon: required_str(raw, "icon", SOFT_SKILL_ICON),
        title: required_str(raw, "title", SOFT_SKILL_TITLE),
        description: free_str(raw, "description", SOFT_SKILL_DESCRIPTION),
    }
}

pub fn sanitize_certification(raw: &Value) -> Certification {
    Certification {
        id: id_field(raw),
        title: required_str(raw, "title", CERTIFICATION_TITLE),
        organization: required_str(raw, "organization", CERTIFICATION_ORGANIZATION),
        date: free_str(raw, "date", ""),
        summary: free_str(raw, "summary", ""),
        highlights: string_list(raw, "highlights"),
        skills: string_list(raw, "skills"),
    }
}

pub fn sanitize_tech_watch_topic(raw: &Value) -> TechWatchTopic {
    TechWatchTopic {
        id: id_field(raw),
        title: required_str(raw, "title", TOPIC_TITLE),
        description: free_str(raw, "description", ""),
        actions: string_list(raw, "actions"),
    }
}

pub fn sanitize_tech_watch_source(raw: &Value) -> TechWatchSource {
    TechWatchSource {
        id: id_field(raw),
        label: required_str(raw, "label", SOURCE_LABEL),
        items: string_list(raw, "items"),
    }
}

pub fn sanitize_roadmap_step(raw: &Value) -> TechWatchRoadmapStep {
    TechWatchRoadmapStep {
        id: id_field(raw),
        period: required_str(raw, "period", PERIOD),
        goals: string_list(raw, "goals"),
    }
}

macro_rules! impl_sanitize {
    ($($ty:ty => $func:ident),+ $(,)?) => {
        $(
            impl Sanitize for $ty {
                fn sanitize(raw: &Value) -> Self {
                    $func(raw)
                }
            }
        )+
    };
}

impl_sanitize! {
    Project => sanitize_project,
    Skill => sanitize_skill,
    Highlight => sanitize_highlight,
    Experience => sanitize_experience,
    SoftSkill => sanitize_soft_skill,
    Certification => sanitize_certification,
    TechWatchTopic => sanitize_tech_watch_topic,
    TechWatchSource => sanitize_tech_watch_source,
    TechWatchRoadmapStep => sanitize_roadmap_step,
}
