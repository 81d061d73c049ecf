//! Skill entries and their category grouping.

use serde::{Deserialize, Serialize};

use super::IconKey;

/// A technical skill.
///
/// `category` is free text; the skills page groups entries by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    pub icon: IconKey,
}

/// Skills sharing one category, as rendered on the skills page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

impl SkillGroup {
    /// Group `skills` by category. Groups appear in order of the first skill
    /// of each category; skills keep their collection order inside a group.
    pub fn group(skills: &[Skill]) -> Vec<SkillGroup> {
        let mut groups: Vec<SkillGroup> = Vec::new();
        for skill in skills {
            match groups.iter_mut().find(|g| g.category == skill.category) {
                Some(group) => group.skills.push(skill.clone()),
                None => groups.push(SkillGroup {
                    category: skill.category.clone(),
                    skills: vec![skill.clone()],
                }),
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(id: &str, category: &str) -> Skill {
        Skill {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: category.to_string(),
            icon: IconKey::Server,
        }
    }

    #[test]
    fn groups_follow_first_appearance_order() {
        let skills = vec![
            skill("linux", "Systèmes"),
            skill("cisco", "Réseau"),
            skill("ad", "Systèmes"),
            skill("glpi", "Services"),
        ];
        let groups = SkillGroup::group(&skills);
        let categories: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, ["Systèmes", "Réseau", "Services"]);
        let ids: Vec<&str> = groups[0].skills.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["linux", "ad"]);
    }

    #[test]
    fn no_skills_means_no_groups() {
        assert!(SkillGroup::group(&[]).is_empty());
    }
}
