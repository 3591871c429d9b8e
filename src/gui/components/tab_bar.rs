use eframe::egui;

use crate::i18n::Translator;
use crate::showcase::{ShowcaseAction, Tab};

/// Projects | Skills switch. Clicking the active tab emits nothing.
pub fn ui(ui: &mut egui::Ui, t: &Translator, active: Tab) -> Option<ShowcaseAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        for tab in Tab::ALL {
            let label = egui::RichText::new(t.t(tab.label_key())).heading();
            let clicked = ui
                .add(egui::Button::new(label).selected(tab == active))
                .clicked();
            if clicked && tab != active {
                action = Some(ShowcaseAction::SwitchTab(tab));
            }
        }
    });

    action
}
