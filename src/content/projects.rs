//! Project configuration table

use super::{Approach, CaseStudy, Challenge, Project, ResultMetric, Results};
use crate::i18n::Translator;

#[derive(Debug, Clone, Copy)]
pub struct ProjectConfig {
    pub id: &'static str,
    pub tags: &'static [&'static str],
    pub featured: bool,
}

pub const PROJECTS: &[ProjectConfig] = &[
    ProjectConfig {
        id: "bwsc25",
        tags: &["Project Management", "Strategy", "Operations"],
        featured: true,
    },
    ProjectConfig {
        id: "bwsc23",
        tags: &["DX", "Team Leadership", "World 8th"],
        featured: false,
    },
    ProjectConfig {
        id: "automation",
        tags: &["Automation", "AI", "-1600h/year"],
        featured: false,
    },
];

pub fn build_project(config: &ProjectConfig, t: &Translator) -> Project {
    let prefix = format!("projects.items.{}", config.id);

    Project {
        id: config.id.to_string(),
        category: t.t(&format!("{prefix}.category")),
        title: t.t(&format!("{prefix}.title")),
        period: t.t(&format!("{prefix}.period")),
        description: t.t(&format!("{prefix}.description")),
        tags: config.tags.iter().map(|tag| tag.to_string()).collect(),
        featured: config.featured,
        case_study: build_case_study(&prefix, t),
    }
}

/// A case study exists only when its overview is translated
fn build_case_study(prefix: &str, t: &Translator) -> Option<CaseStudy> {
    let cs = format!("{prefix}.caseStudy");
    let overview = t.text(&format!("{cs}.overview"))?;

    Some(CaseStudy {
        overview,
        challenge: Challenge {
            title: t.t(&format!("{cs}.challenge.title")),
            description: t.t(&format!("{cs}.challenge.description")),
        },
        approach: Approach {
            title: t.t(&format!("{cs}.approach.title")),
            steps: t.list(&format!("{cs}.approach.steps")).unwrap_or_default(),
        },
        results: Results {
            title: t.t(&format!("{cs}.results.title")),
            metrics: t
                .object::<Vec<ResultMetric>>(&format!("{cs}.results.metrics"))
                .unwrap_or_default(),
        },
    })
}
