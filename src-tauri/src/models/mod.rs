//! Portfolio content data model.
//!
//! Every type here is both the in-memory and the on-disk representation;
//! fields serialize with camelCase keys so the frontend and the stored JSON
//! share one schema. Values are only ever constructed through the sanitizers
//! in [`crate::sanitize`] or the hard-coded [`crate::defaults`], which keeps
//! every invariant of the schema (non-empty ids, recognized enum values,
//! no blank list elements) true by construction.

pub mod contact;
pub mod content;
pub mod home;
pub mod icon;
pub mod profile;
pub mod project;
pub mod skill;
pub mod tech_watch;

pub use contact::ContactInfo;
pub use content::{PortfolioContent, PortfolioSnapshot};
pub use home::{HeroContent, Highlight, HighlightCard, HighlightValueType};
pub use icon::{IconKey, IconOption};
pub use profile::{Certification, Experience, SoftSkill};
pub use project::Project;
pub use skill::{Skill, SkillGroup};
pub use tech_watch::{
    TechWatchContent, TechWatchIntro, TechWatchRoadmapStep, TechWatchSource, TechWatchTopic,
};

/// A record that lives in an ordered collection and is addressed by id.
pub trait Entity: Clone + PartialEq + std::fmt::Debug + serde::Serialize + Send + Sync {
    /// Short name used in log lines (e.g. `"project"`).
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}

macro_rules! impl_entity {
    ($($ty:ty => $kind:literal),+ $(,)?) => {
        $(
            impl Entity for $ty {
                const KIND: &'static str = $kind;

                fn id(&self) -> &str {
                    &self.id
                }

                fn set_id(&mut self, id: String) {
                    self.id = id;
                }
            }
        )+
    };
}

impl_entity! {
    Project => "project",
    Skill => "skill",
    Highlight => "highlight",
    Experience => "experience",
    SoftSkill => "soft_skill",
    Certification => "certification",
    TechWatchTopic => "tech_watch_topic",
    TechWatchSource => "tech_watch_source",
    TechWatchRoadmapStep => "tech_watch_roadmap_step",
}
