//! Where each collection entity lives inside a snapshot.

use crate::models::{
    Certification, Experience, Highlight, PortfolioSnapshot, Project, Skill, SoftSkill,
    TechWatchRoadmapStep, TechWatchSource, TechWatchTopic,
};
use crate::sanitize::Sanitize;

/// A collection entity the store can add, update and delete generically.
pub trait Record: Sanitize {
    fn collection(snapshot: &PortfolioSnapshot) -> &Vec<Self>;

    fn collection_mut(snapshot: &mut PortfolioSnapshot) -> &mut Vec<Self>;
}

macro_rules! impl_record {
    ($($ty:ty => $($field:ident).+),+ $(,)?) => {
        $(
            impl Record for $ty {
                fn collection(snapshot: &PortfolioSnapshot) -> &Vec<Self> {
                    &snapshot.$($field).+
                }

                fn collection_mut(snapshot: &mut PortfolioSnapshot) -> &mut Vec<Self> {
                    &mut snapshot.$($field).+
                }
            }
        )+
    };
}

impl_record! {
    Project => projects,
    Skill => skills,
    Highlight => content.highlights,
    Experience => content.experiences,
    SoftSkill => content.soft_skills,
    Certification => content.certifications,
    TechWatchTopic => content.tech_watch.focus_topics,
    TechWatchSource => content.tech_watch.sources,
    TechWatchRoadmapStep => content.tech_watch.roadmap,
}
