use eframe::egui;

use crate::i18n::Language;

/// JA / EN / ES buttons; returns the newly picked language
pub fn ui(ui: &mut egui::Ui, current: Language) -> Option<Language> {
    let mut picked = None;

    ui.horizontal(|ui| {
        for lang in Language::ALL {
            let response = ui
                .add(egui::Button::new(lang.code().to_uppercase()).selected(lang == current))
                .on_hover_text(format!("Switch to {}", lang.native_name()));
            if response.clicked() && lang != current {
                picked = Some(lang);
            }
        }
    });

    picked
}
