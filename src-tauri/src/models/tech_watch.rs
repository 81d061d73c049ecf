//! Tech-watch page: intro block plus three ordered lists.

use serde::{Deserialize, Serialize};

/// A subject followed by the tech watch, with the concrete actions taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechWatchTopic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub actions: Vec<String>,
}

/// A group of information sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechWatchSource {
    pub id: String,
    pub label: String,
    pub items: Vec<String>,
}

/// One period of the tech-watch roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechWatchRoadmapStep {
    pub id: String,
    pub period: String,
    pub goals: Vec<String>,
}

/// The whole tech-watch block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechWatchContent {
    pub badge: String,
    pub title: String,
    pub description: String,
    pub focus_topics: Vec<TechWatchTopic>,
    pub sources: Vec<TechWatchSource>,
    pub roadmap: Vec<TechWatchRoadmapStep>,
}

/// The intro fields of [`TechWatchContent`], editable on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechWatchIntro {
    pub badge: String,
    pub title: String,
    pub description: String,
}

impl From<&TechWatchContent> for TechWatchIntro {
    fn from(content: &TechWatchContent) -> Self {
        Self {
            badge: content.badge.clone(),
            title: content.title.clone(),
            description: content.description.clone(),
        }
    }
}
