//! Content repository: projects, skills and certifications
//!
//! Everything here is resolved once from the translation resources and is
//! read-only afterwards. The showcase and presenters only ever borrow it.

pub mod projects;
pub mod skills;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, warn};

use crate::constants::accent;
use crate::i18n::Translator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: String,
    pub category: String,
    pub title: String,
    pub period: String,
    pub description: String,
    /// Display order
    pub tags: Vec<String>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_study: Option<CaseStudy>,
}

impl Project {
    /// Only projects with a case study can be opened
    pub fn has_case_study(&self) -> bool {
        self.case_study.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudy {
    pub overview: String,
    pub challenge: Challenge,
    pub approach: Approach,
    pub results: Results,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Challenge {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Approach {
    pub title: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Results {
    pub title: String,
    pub metrics: Vec<ResultMetric>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMetric {
    pub label: String,
    pub value: String,
}

/// A skill is either rated (level + achievements + related projects)
/// or a spoken language (level + badge). Never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Skill {
    Rated(RatedSkill),
    Language(LanguageSkill),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatedSkill {
    pub id: String,
    pub name: String,
    /// 0..=100
    pub level: u8,
    pub icon: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub related_projects: Vec<RelatedProject>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedProject {
    pub project_id: String,
    pub contribution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSkill {
    pub id: String,
    pub name: String,
    pub level: u8,
    pub badge: String,
}

impl Skill {
    pub fn name(&self) -> &str {
        match self {
            Skill::Rated(skill) => &skill.name,
            Skill::Language(skill) => &skill.name,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Skill::Rated(skill) => skill.level,
            Skill::Language(skill) => skill.level,
        }
    }

    /// Identity used for the "active orb" marker: id for rated skills,
    /// name for languages
    pub fn same_as(&self, other: &Skill) -> bool {
        match (self, other) {
            (Skill::Rated(a), Skill::Rated(b)) => a.id == b.id,
            (Skill::Language(a), Skill::Language(b)) => a.name == b.name,
            _ => false,
        }
    }
}

/// Skill grouping shown on the Skills tab, each with its accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Languages,
    Certifications,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Languages,
        SkillCategory::Certifications,
    ];

    pub fn accent(self) -> &'static str {
        match self {
            SkillCategory::Technical => accent::TECHNICAL,
            SkillCategory::Soft => accent::SOFT,
            SkillCategory::Languages => accent::LANGUAGES,
            SkillCategory::Certifications => accent::CERTIFICATIONS,
        }
    }

    pub fn title_key(self) -> &'static str {
        match self {
            SkillCategory::Technical => "skills.categories.technical.title",
            SkillCategory::Soft => "skills.categories.management.title",
            SkillCategory::Languages => "skills.categories.languages.title",
            SkillCategory::Certifications => "skills.categories.certifications.title",
        }
    }
}

/// Immutable collections resolved before first render
#[derive(Debug, Clone, Serialize)]
pub struct ContentRepository {
    projects: Vec<Project>,
    technical: Vec<Skill>,
    soft: Vec<Skill>,
    languages: Vec<Skill>,
    certifications: Vec<String>,
}

impl ContentRepository {
    /// Resolve every configured project and skill through `t`
    pub fn load(t: &Translator) -> Result<Self> {
        let projects = projects::PROJECTS
            .iter()
            .map(|config| projects::build_project(config, t))
            .collect();
        let technical = skills::TECHNICAL
            .iter()
            .map(|config| skills::build_rated_skill(config, t))
            .collect();
        let soft = skills::SOFT
            .iter()
            .map(|config| skills::build_rated_skill(config, t))
            .collect();
        let languages = skills::LANGUAGES
            .iter()
            .map(|config| skills::build_language_skill(config, t))
            .collect();
        let certifications = skills::CERTIFICATIONS
            .iter()
            .map(|cert| cert.to_string())
            .collect();

        let repo = Self::from_parts(projects, technical, soft, languages, certifications)?;
        info!(
            language = %t.language(),
            projects = repo.projects.len(),
            skills = repo.technical.len() + repo.soft.len() + repo.languages.len(),
            "Content repository loaded"
        );
        Ok(repo)
    }

    /// Assemble a repository, enforcing unique project ids and dropping
    /// related-project entries that point at no project
    pub fn from_parts(
        projects: Vec<Project>,
        mut technical: Vec<Skill>,
        mut soft: Vec<Skill>,
        languages: Vec<Skill>,
        certifications: Vec<String>,
    ) -> Result<Self> {
        let mut ids = HashSet::new();
        for project in &projects {
            if !ids.insert(project.id.as_str()) {
                bail!("Duplicate project id '{}'", project.id);
            }
        }

        for skill in technical.iter_mut().chain(soft.iter_mut()) {
            if let Skill::Rated(rated) = skill {
                rated.related_projects.retain(|related| {
                    let known = ids.contains(related.project_id.as_str());
                    if !known {
                        warn!(
                            skill = %rated.id,
                            project = %related.project_id,
                            "Dropping related project that does not exist"
                        );
                    }
                    known
                });
            }
        }

        Ok(Self {
            projects,
            technical,
            soft,
            languages,
            certifications,
        })
    }

    /// Projects in grid order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Skills of one category (certifications are plain strings, see
    /// [`ContentRepository::certifications`])
    pub fn skills(&self, category: SkillCategory) -> &[Skill] {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::Soft => &self.soft,
            SkillCategory::Languages => &self.languages,
            SkillCategory::Certifications => &[],
        }
    }

    pub fn certifications(&self) -> &[String] {
        &self.certifications
    }
}
