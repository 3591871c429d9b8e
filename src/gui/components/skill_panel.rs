//! Detail side panel for the open skill

use eframe::egui;

use crate::gui::constants::*;
use crate::i18n::Translator;
use crate::presenter::SkillDetailView;
use crate::showcase::ShowcaseAction;

/// Side panel for the open skill. Related-project buttons emit
/// [`ShowcaseAction::NavigateToProject`]; the close button, Escape and a
/// click anywhere outside the panel emit [`ShowcaseAction::CloseSkill`].
pub fn show(ctx: &egui::Context, t: &Translator, view: Option<SkillDetailView<'_>>) -> Option<ShowcaseAction> {
    let view = view?;
    let accent = accent_color(view.accent());
    let mut action = None;

    let panel = egui::SidePanel::right("skill_detail_panel")
        .resizable(false)
        .exact_width(MODAL_WIDTH * 0.6)
        .show(ctx, |ui| {
            ui.add_space(PADDING);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(t.t("common.close")).clicked() {
                        action = Some(ShowcaseAction::CloseSkill);
                    }
                });
            });

            egui::ScrollArea::vertical().show(ui, |ui| match &view {
                SkillDetailView::Rated { skill, related, .. } => {
                    ui.heading(egui::RichText::new(&skill.name).color(accent));
                    level_bar(ui, skill.level, accent);
                    ui.add_space(ITEM_SPACING);
                    ui.label(&skill.description);

                    if !skill.achievements.is_empty() {
                        ui.add_space(SECTION_SPACING);
                        ui.label(egui::RichText::new(t.t("skills.panel.achievements")).strong());
                        for achievement in &skill.achievements {
                            ui.label(format!("• {achievement}"));
                        }
                    }

                    if !related.is_empty() {
                        ui.add_space(SECTION_SPACING);
                        ui.label(egui::RichText::new(t.t("skills.panel.relatedProjects")).strong());
                        for project in related {
                            ui.add_space(ITEM_SPACING);
                            let button = egui::Button::new(
                                egui::RichText::new(format!("{} →", project.title)).color(accent),
                            );
                            if ui.add(button).clicked() {
                                action = Some(ShowcaseAction::NavigateToProject(
                                    project.project_id.to_string(),
                                ));
                            }
                            ui.label(egui::RichText::new(project.contribution).small().color(MUTED_TEXT));
                        }
                    }
                }
                SkillDetailView::Language { skill, .. } => {
                    ui.heading(egui::RichText::new(&skill.name).color(accent));
                    ui.label(egui::RichText::new(&skill.badge).strong().monospace());
                    level_bar(ui, skill.level, accent);
                }
            });
        });

    let clicked_outside = ctx.input(|i| {
        i.pointer.primary_clicked()
            && i.pointer
                .interact_pos()
                .is_some_and(|pos| !panel.response.rect.contains(pos))
    });
    if action.is_none() && (clicked_outside || ctx.input(|i| i.key_pressed(egui::Key::Escape))) {
        action = Some(ShowcaseAction::CloseSkill);
    }

    action
}

fn level_bar(ui: &mut egui::Ui, level: u8, color: egui::Color32) {
    ui.add(
        egui::ProgressBar::new(f32::from(level) / 100.0)
            .fill(color)
            .text(format!("{level}%")),
    );
}
