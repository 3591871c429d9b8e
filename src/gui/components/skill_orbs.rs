//! Skill categories on the Skills tab

use eframe::egui;

use crate::content::{ContentRepository, Skill, SkillCategory};
use crate::gui::constants::*;
use crate::i18n::Translator;
use crate::showcase::{SelectedSkill, ShowcaseAction};

/// Renders each category as a row of orbs plus the certification list.
/// `is_active` marks the orb whose detail panel is currently open.
pub fn ui(
    ui: &mut egui::Ui,
    t: &Translator,
    content: &ContentRepository,
    is_active: impl Fn(&Skill) -> bool,
) -> Option<ShowcaseAction> {
    let mut action = None;

    for category in SkillCategory::ALL {
        let accent = category.accent();
        let color = accent_color(accent);

        ui.label(egui::RichText::new(t.t(category.title_key())).heading().color(color));
        ui.add_space(ITEM_SPACING);

        if category == SkillCategory::Certifications {
            for certification in content.certifications() {
                ui.label(format!("• {certification}"));
            }
            ui.add_space(SECTION_SPACING);
            continue;
        }

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(ITEM_SPACING, ITEM_SPACING);

            for skill in content.skills(category) {
                let response = orb(ui, skill, color, is_active(skill));
                let activated = response.clicked()
                    || (response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)));
                if activated {
                    action = Some(ShowcaseAction::OpenSkill(SelectedSkill {
                        skill: skill.clone(),
                        accent: accent.to_string(),
                    }));
                }
            }
        });

        ui.add_space(SECTION_SPACING);
    }

    action
}

fn orb(ui: &mut egui::Ui, skill: &Skill, color: egui::Color32, active: bool) -> egui::Response {
    let stroke = if active {
        egui::Stroke::new(STROKE_ACTIVE, color)
    } else {
        egui::Stroke::new(STROKE_NORMAL, color.gamma_multiply(0.5))
    };

    let frame = egui::Frame::group(ui.style())
        .stroke(stroke)
        .corner_radius(egui::CornerRadius::same(u8::MAX))
        .inner_margin(egui::Margin::same(CARD_MARGIN));

    let inner = frame.show(ui, |ui| {
        ui.set_width(ORB_WIDTH);
        ui.vertical_centered(|ui| {
            let icon = match skill {
                Skill::Rated(rated) => icon_glyph(&rated.icon),
                Skill::Language(language) => language.badge.as_str(),
            };
            ui.label(egui::RichText::new(icon).size(20.0));
            ui.label(egui::RichText::new(skill.name()).strong());
            ui.label(egui::RichText::new(format!("{}%", skill.level())).small().color(MUTED_TEXT));
        });
    });

    inner
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Map configured icon names onto glyphs of egui's bundled emoji font
fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "brain" => "🧠",
        "chart" => "📊",
        "cube" => "📦",
        "code" => "💻",
        "settings" => "⚙",
        "users" => "👥",
        "clipboard" => "📋",
        "briefcase" => "💼",
        _ => "●",
    }
}
