//! Skill configuration table
//!
//! Levels, icons and project relations live here; names, descriptions,
//! achievements and per-project contributions come from the translation files.

use super::{LanguageSkill, RatedSkill, RelatedProject, Skill};
use crate::i18n::Translator;

#[derive(Debug, Clone, Copy)]
pub struct SkillConfig {
    pub id: &'static str,
    pub level: u8,
    pub icon: &'static str,
    pub related_project_ids: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct LanguageConfig {
    pub id: &'static str,
    pub level: u8,
    pub badge: &'static str,
}

pub const TECHNICAL: &[SkillConfig] = &[
    SkillConfig {
        id: "aiMl",
        level: 90,
        icon: "brain",
        related_project_ids: &["bwsc25", "automation"],
    },
    SkillConfig {
        id: "dataAnalysis",
        level: 85,
        icon: "chart",
        related_project_ids: &["bwsc25", "bwsc23"],
    },
    SkillConfig {
        id: "productDev",
        level: 88,
        icon: "cube",
        related_project_ids: &["automation"],
    },
    SkillConfig {
        id: "webDev",
        level: 80,
        icon: "code",
        related_project_ids: &[],
    },
    SkillConfig {
        id: "controlEng",
        level: 82,
        icon: "settings",
        related_project_ids: &["bwsc25", "bwsc23"],
    },
];

pub const SOFT: &[SkillConfig] = &[
    SkillConfig {
        id: "leadership",
        level: 92,
        icon: "users",
        related_project_ids: &["bwsc25", "bwsc23"],
    },
    SkillConfig {
        id: "projectMgmt",
        level: 90,
        icon: "clipboard",
        related_project_ids: &["bwsc25", "automation"],
    },
    SkillConfig {
        id: "fundraising",
        level: 78,
        icon: "briefcase",
        related_project_ids: &["bwsc23"],
    },
];

pub const LANGUAGES: &[LanguageConfig] = &[
    LanguageConfig {
        id: "japanese",
        level: 100,
        badge: "Native",
    },
    LanguageConfig {
        id: "spanish",
        level: 100,
        badge: "Native",
    },
    LanguageConfig {
        id: "english",
        level: 85,
        badge: "Business",
    },
];

pub const CERTIFICATIONS: &[&str] = &[
    "Google Data Analytics Professional Certification",
    "Control Design Onramp with Simulink",
];

/// Resolve a rated skill. Related projects without a translated
/// contribution are left out.
pub fn build_rated_skill(config: &SkillConfig, t: &Translator) -> Skill {
    let prefix = format!("skills.items.{}", config.id);

    let related_projects = config
        .related_project_ids
        .iter()
        .filter_map(|project_id| {
            let contribution = t
                .text(&format!("{prefix}.contributions.{project_id}"))
                .unwrap_or_default();
            (!contribution.is_empty()).then(|| RelatedProject {
                project_id: project_id.to_string(),
                contribution,
            })
        })
        .collect();

    Skill::Rated(RatedSkill {
        id: config.id.to_string(),
        name: t.t(&format!("{prefix}.name")),
        level: config.level.min(100),
        icon: config.icon.to_string(),
        description: t.t(&format!("{prefix}.description")),
        achievements: t.list(&format!("{prefix}.achievements")).unwrap_or_default(),
        related_projects,
    })
}

pub fn build_language_skill(config: &LanguageConfig, t: &Translator) -> Skill {
    Skill::Language(LanguageSkill {
        id: config.id.to_string(),
        name: t
            .text(&format!("skills.languages.{}", config.id))
            .unwrap_or_else(|| config.id.to_string()),
        level: config.level.min(100),
        badge: config.badge.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::tests::translator;
    use crate::i18n::Language;
    use serde_json::json;

    fn skill_translations() -> Translator {
        translator(
            Language::En,
            vec![(
                Language::En,
                json!({
                    "skills": {
                        "items": {
                            "aiMl": {
                                "name": "AI/ML",
                                "description": "Machine learning",
                                "achievements": ["Built a model", "Shipped it"],
                                "contributions": { "bwsc25": "Led AI rollout", "empty": "" }
                            }
                        },
                        "languages": { "english": "English" }
                    }
                }),
            )],
        )
    }

    #[test]
    fn test_related_projects_without_contribution_filtered() {
        let config = SkillConfig {
            id: "aiMl",
            level: 90,
            icon: "brain",
            related_project_ids: &["bwsc25", "ghost"],
        };
        let Skill::Rated(skill) = build_rated_skill(&config, &skill_translations()) else {
            panic!("expected rated skill");
        };
        assert_eq!(skill.related_projects.len(), 1);
        assert_eq!(skill.related_projects[0].project_id, "bwsc25");
        assert_eq!(skill.related_projects[0].contribution, "Led AI rollout");
    }

    #[test]
    fn test_explicitly_empty_contribution_filtered() {
        let config = SkillConfig {
            id: "aiMl",
            level: 90,
            icon: "brain",
            related_project_ids: &["empty"],
        };
        let Skill::Rated(skill) = build_rated_skill(&config, &skill_translations()) else {
            panic!("expected rated skill");
        };
        assert!(skill.related_projects.is_empty());
    }

    #[test]
    fn test_rated_skill_fields_resolved() {
        let config = SkillConfig {
            id: "aiMl",
            level: 140,
            icon: "brain",
            related_project_ids: &[],
        };
        let Skill::Rated(skill) = build_rated_skill(&config, &skill_translations()) else {
            panic!("expected rated skill");
        };
        assert_eq!(skill.name, "AI/ML");
        assert_eq!(skill.level, 100);
        assert_eq!(skill.achievements, vec!["Built a model", "Shipped it"]);
    }

    #[test]
    fn test_language_skill_name_falls_back_to_id() {
        let t = skill_translations();
        let english = build_language_skill(&LANGUAGES[2], &t);
        let spanish = build_language_skill(&LANGUAGES[1], &t);
        assert_eq!(english.name(), "English");
        assert_eq!(spanish.name(), "spanish");
        assert!(matches!(english, Skill::Language(ref l) if l.badge == "Business"));
    }
}
