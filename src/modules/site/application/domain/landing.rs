use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::certificate::application::domain::Certificate;
use crate::modules::experience::application::domain::Experience;
use crate::modules::profile::application::domain::Profile;
use crate::modules::project::application::domain::{Project, ProjectCategory};
use crate::modules::skill::application::domain::SkillCategory;

/// Everything the public landing page shows: the profile and the visible
/// records of each collection, already sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LandingData {
    pub profile: Option<Profile>,
    pub projects: Vec<Project>,
    pub skill_categories: Vec<SkillCategory>,
    pub certificates: Vec<Certificate>,
    pub experiences: Vec<Experience>,
}

impl LandingData {
    /// What the page renders when the store cannot be read.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The position marked current, if any; otherwise the first listed.
    pub fn headline_experience(&self) -> Option<&Experience> {
        self.experiences
            .iter()
            .find(|e| e.is_current)
            .or_else(|| self.experiences.first())
    }
}

/// Project category selection from `?category=`.
///
/// Only an exact category name selects; anything else shows every project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryFilter(Option<ProjectCategory>);

impl CategoryFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        Self(raw.and_then(|r| r.parse().ok()))
    }

    pub fn selected(&self) -> Option<ProjectCategory> {
        self.0
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects
            .iter()
            .filter(|p| self.0.map_or(true, |c| p.category == c))
            .collect()
    }

    /// Categories that have at least one project, in display order, with
    /// their counts.
    pub fn tabs(projects: &[Project]) -> Vec<(ProjectCategory, usize)> {
        ProjectCategory::ALL
            .into_iter()
            .map(|c| (c, projects.iter().filter(|p| p.category == c).count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
