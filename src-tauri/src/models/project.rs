//! Project card shown on the projects page.

use serde::{Deserialize, Serialize};

use super::IconKey;

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: IconKey,
    /// Technology tags, in display order.
    pub technologies: Vec<String>,
    /// Bullet list of outcomes, in display order.
    pub achievements: Vec<String>,
}
