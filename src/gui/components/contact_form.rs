use eframe::egui;

use crate::contact::{ContactForm, SubmitStatus};
use crate::gui::constants::*;
use crate::i18n::Translator;

/// Renders the contact form and returns true when send was clicked
pub fn ui(ui: &mut egui::Ui, t: &Translator, form: &mut ContactForm) -> bool {
    let mut submit = false;

    ui.group(|ui| {
        ui.label(egui::RichText::new(t.t("contact.heading")).heading().strong());
        ui.label(egui::RichText::new(t.t("contact.subheading")).color(MUTED_TEXT));
        ui.add_space(ITEM_SPACING);

        let enabled = !form.is_sending();
        ui.add_enabled_ui(enabled, |ui| {
            egui::Grid::new("contact_form_grid")
                .num_columns(2)
                .spacing([ITEM_SPACING, ITEM_SPACING])
                .show(ui, |ui| {
                    ui.label(t.t("contact.name"));
                    ui.text_edit_singleline(&mut form.name);
                    ui.end_row();

                    ui.label(t.t("contact.email"));
                    ui.text_edit_singleline(&mut form.email);
                    ui.end_row();

                    ui.label(t.t("contact.message"));
                    ui.add(egui::TextEdit::multiline(&mut form.message).desired_rows(4));
                    ui.end_row();
                });

            ui.add_space(ITEM_SPACING);
            if ui.button(t.t("contact.send")).clicked() {
                submit = true;
            }
        });

        if let Some(key) = form.status().message_key() {
            let color = match form.status() {
                SubmitStatus::Success => STATUS_SUCCESS,
                SubmitStatus::Sending => STATUS_PENDING,
                SubmitStatus::Error | SubmitStatus::Invalid => STATUS_ERROR,
                SubmitStatus::Idle => MUTED_TEXT,
            };
            ui.add_space(ITEM_SPACING);
            ui.colored_label(color, t.t(key));
        }
    });

    submit
}
