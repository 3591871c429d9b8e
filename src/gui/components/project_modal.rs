//! Case-study modal for the open project

use eframe::egui;

use crate::gui::constants::*;
use crate::i18n::Translator;
use crate::presenter::CaseStudyView;
use crate::showcase::ShowcaseAction;

/// Shows the modal when `view` is present. Escape, a click on the backdrop,
/// and the close button all emit [`ShowcaseAction::CloseProject`].
pub fn show(ctx: &egui::Context, t: &Translator, view: Option<CaseStudyView<'_>>) -> Option<ShowcaseAction> {
    let view = view?;
    let mut close_clicked = false;

    let modal = egui::Modal::new(egui::Id::new("case_study_modal")).show(ctx, |ui| {
        ui.set_width(MODAL_WIDTH);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&view.project.category).small().color(MUTED_TEXT));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(t.t("common.close")).clicked() {
                    close_clicked = true;
                }
            });
        });
        ui.heading(&view.project.title);
        ui.label(egui::RichText::new(&view.project.period).small().color(MUTED_TEXT));
        ui.separator();

        egui::ScrollArea::vertical().max_height(ctx.content_rect().height() * 0.7).show(ui, |ui| {
            let case_study = view.case_study;

            ui.label(&case_study.overview);
            ui.add_space(SECTION_SPACING);

            ui.label(egui::RichText::new(&case_study.challenge.title).strong());
            ui.label(&case_study.challenge.description);
            ui.add_space(SECTION_SPACING);

            ui.label(egui::RichText::new(&case_study.approach.title).strong());
            for (index, step) in case_study.approach.steps.iter().enumerate() {
                ui.label(format!("{}. {step}", index + 1));
            }
            ui.add_space(SECTION_SPACING);

            ui.label(egui::RichText::new(&case_study.results.title).strong());
            egui::Grid::new("case_study_metrics")
                .num_columns(2)
                .spacing([SECTION_SPACING, ITEM_SPACING])
                .show(ui, |ui| {
                    for metric in &case_study.results.metrics {
                        ui.label(egui::RichText::new(&metric.value).strong().color(ACCENT_FALLBACK));
                        ui.label(&metric.label);
                        ui.end_row();
                    }
                });
        });
    });

    (close_clicked || modal.should_close()).then_some(ShowcaseAction::CloseProject)
}
