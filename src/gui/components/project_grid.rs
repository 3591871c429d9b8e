//! Project cards for the Projects tab

use eframe::egui;

use crate::content::Project;
use crate::gui::constants::*;
use crate::i18n::Translator;
use crate::showcase::ShowcaseAction;

/// Renders every project card. Cards with a case study open it on click or
/// Enter; the highlighted card gets a thick stroke and, when `scroll_to`
/// names it, is scrolled into view.
pub fn ui(
    ui: &mut egui::Ui,
    t: &Translator,
    projects: &[Project],
    highlighted: Option<&str>,
    scroll_to: Option<&str>,
) -> Option<ShowcaseAction> {
    let mut action = None;

    ui.label(egui::RichText::new(t.t("works.projects.subtitle")).color(MUTED_TEXT));
    ui.add_space(ITEM_SPACING);

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(SECTION_SPACING, SECTION_SPACING);

        for project in projects {
            let is_highlighted = highlighted == Some(project.id.as_str());
            let response = card(ui, t, project, is_highlighted);

            if scroll_to == Some(project.id.as_str()) {
                response.scroll_to_me(Some(egui::Align::Center));
            }

            if !project.has_case_study() {
                continue;
            }

            let activated = response.clicked()
                || (response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)));
            if activated {
                action = Some(ShowcaseAction::OpenProject(project.id.clone()));
            }
        }
    });

    action
}

fn card(ui: &mut egui::Ui, t: &Translator, project: &Project, highlighted: bool) -> egui::Response {
    let stroke = if highlighted {
        egui::Stroke::new(STROKE_ACTIVE, HIGHLIGHT)
    } else {
        egui::Stroke::new(STROKE_NORMAL, ui.visuals().widgets.noninteractive.bg_stroke.color)
    };

    let frame = egui::Frame::group(ui.style())
        .stroke(stroke)
        .inner_margin(egui::Margin::same(CARD_MARGIN));

    let inner = frame.show(ui, |ui| {
        ui.set_width(CARD_WIDTH);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&project.category).small().color(MUTED_TEXT));
            if project.featured {
                ui.label(egui::RichText::new("★").color(ACCENT_FALLBACK));
            }
        });
        ui.label(egui::RichText::new(&project.title).strong().size(16.0));
        ui.label(egui::RichText::new(&project.period).small().color(MUTED_TEXT));
        ui.add_space(ITEM_SPACING);
        ui.label(&project.description);

        if !project.tags.is_empty() {
            ui.add_space(ITEM_SPACING);
            ui.horizontal_wrapped(|ui| {
                for tag in &project.tags {
                    ui.label(egui::RichText::new(format!("#{tag}")).small().monospace());
                }
            });
        }

        if project.has_case_study() {
            ui.add_space(ITEM_SPACING);
            ui.label(
                egui::RichText::new(format!("{} →", t.t("works.projects.viewCaseStudy")))
                    .color(ACCENT_FALLBACK),
            );
        }
    });

    let sense = if project.has_case_study() {
        egui::Sense::click()
    } else {
        egui::Sense::hover()
    };
    let response = inner.response.interact(sense);
    if project.has_case_study() {
        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    } else {
        response
    }
}
