//! View models for the case-study modal and the skill detail panel
//!
//! Both are built from a selection and render nothing unless it is open.
//! Skill details branch on the skill shape, so the renderer handles rated
//! and language skills exhaustively.

use crate::content::{CaseStudy, ContentRepository, LanguageSkill, Project, RatedSkill, Skill};
use crate::showcase::{SelectedSkill, Selection};

#[derive(Debug, Clone, Copy)]
pub struct CaseStudyView<'a> {
    pub project: &'a Project,
    pub case_study: &'a CaseStudy,
}

/// Case study of the open project, if any
pub fn case_study_view(selection: &Selection<Project>) -> Option<CaseStudyView<'_>> {
    let project = selection.current()?;
    let case_study = project.case_study.as_ref()?;
    Some(CaseStudyView {
        project,
        case_study,
    })
}

#[derive(Debug, Clone)]
pub struct RelatedProjectView<'a> {
    pub project_id: &'a str,
    /// Title of the referenced project (the id when it cannot be found)
    pub title: &'a str,
    pub contribution: &'a str,
}

#[derive(Debug, Clone)]
pub enum SkillDetailView<'a> {
    Rated {
        skill: &'a RatedSkill,
        accent: &'a str,
        related: Vec<RelatedProjectView<'a>>,
    },
    Language {
        skill: &'a LanguageSkill,
        accent: &'a str,
    },
}

impl SkillDetailView<'_> {
    pub fn accent(&self) -> &str {
        match self {
            SkillDetailView::Rated { accent, .. } | SkillDetailView::Language { accent, .. } => {
                accent
            }
        }
    }
}

/// Detail of the open skill, if any
pub fn skill_detail_view<'a>(
    selection: &'a Selection<SelectedSkill>,
    content: &'a ContentRepository,
) -> Option<SkillDetailView<'a>> {
    let selected = selection.current()?;
    let accent = selected.accent.as_str();

    Some(match &selected.skill {
        Skill::Rated(skill) => SkillDetailView::Rated {
            skill,
            accent,
            related: skill
                .related_projects
                .iter()
                .map(|related| RelatedProjectView {
                    project_id: &related.project_id,
                    title: content
                        .project(&related.project_id)
                        .map(|p| p.title.as_str())
                        .unwrap_or(related.project_id.as_str()),
                    contribution: &related.contribution,
                })
                .collect(),
        },
        Skill::Language(skill) => SkillDetailView::Language { skill, accent },
    })
}
