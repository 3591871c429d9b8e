//! Showcase window implemented with egui/eframe

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{error, info, warn};

use super::components::{
    contact_form, language_switcher, project_grid, project_modal, skill_orbs, skill_panel, tab_bar,
};
use super::constants::*;
use crate::config::Config;
use crate::contact::{ContactClient, ContactForm, SubmissionWorker};
use crate::content::ContentRepository;
use crate::i18n::{Language, Translator};
use crate::presenter;
use crate::showcase::{Showcase, Tab};

struct ShowcaseApp {
    translator: Translator,
    showcase: Showcase,
    contact: ContactForm,
    worker: Option<SubmissionWorker>,
    config: Config,
    config_path: PathBuf,
}

impl ShowcaseApp {
    fn new(cc: &CreationContext<'_>, translator: Translator, content: ContentRepository, config: Config, config_path: PathBuf) -> Self {
        info!(language = %translator.language(), "Initializing showcase window");

        super::fonts::install_cjk_fallback(&cc.egui_ctx);
        let worker = spawn_worker(cc, &config);
        let showcase = Showcase::new(Arc::new(content), config.timings());

        Self {
            translator,
            showcase,
            contact: ContactForm::new(),
            worker,
            config,
            config_path,
        }
    }

    /// Rebuild content for `language` and remount the showcase.
    /// On failure the current language stays active.
    fn switch_language(&mut self, language: Language) {
        let translator = self.translator.with_language(language);
        let content = match ContentRepository::load(&translator) {
            Ok(content) => content,
            Err(err) => {
                error!(error = ?err, %language, "Failed to load content, keeping current language");
                return;
            }
        };

        info!(from = %self.translator.language(), to = %language, "Switching language");
        self.translator = translator;
        // Dropping the old showcase cancels its pending tasks
        self.showcase = Showcase::new(Arc::new(content), self.config.timings());

        self.config.language = Some(language);
        if let Err(err) = self.config.save_to(&self.config_path) {
            warn!(error = ?err, "Failed to persist language choice");
        }
    }

    fn poll_contact(&mut self) {
        if let Some(worker) = &self.worker {
            while let Some(result) = worker.try_result() {
                self.contact.finish_submit(result);
            }
        }
    }

    fn submit_contact(&mut self) {
        let Some(message) = self.contact.begin_submit() else {
            return;
        };
        match &self.worker {
            Some(worker) => worker.submit(message),
            None => self
                .contact
                .finish_submit(Err("Contact submission is unavailable".to_string())),
        }
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.poll_contact();
        self.showcase.advance(now);

        let scroll_target = self.showcase.take_scroll_target();
        let mut actions = Vec::new();
        let mut new_language = None;
        let mut submit = false;

        let t = &self.translator;
        let showcase = &self.showcase;

        egui::TopBottomPanel::top("showcase_header").show(ctx, |ui| {
            ui.add_space(PADDING);
            ui.horizontal(|ui| {
                ui.heading(t.t("app.title"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    new_language = language_switcher::ui(ui, t.language());
                });
            });
            ui.add_space(ITEM_SPACING);
            actions.extend(tab_bar::ui(ui, t, showcase.active_tab()));
            ui.add_space(PADDING);
        });

        let skill_view = presenter::skill_detail_view(showcase.skill_selection(), showcase.content());
        actions.extend(skill_panel::show(ctx, t, skill_view));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(PADDING);
                match showcase.active_tab() {
                    Tab::Projects => actions.extend(project_grid::ui(
                        ui,
                        t,
                        showcase.content().projects(),
                        showcase.highlighted_project(),
                        scroll_target.as_deref(),
                    )),
                    Tab::Skills => actions.extend(skill_orbs::ui(ui, t, showcase.content(), |skill| {
                        showcase.is_skill_active(skill)
                    })),
                }

                ui.add_space(SECTION_SPACING);
                ui.separator();
                ui.add_space(SECTION_SPACING);
                submit = contact_form::ui(ui, t, &mut self.contact);
            });
        });

        let case_study = presenter::case_study_view(showcase.project_selection());
        actions.extend(project_modal::show(ctx, t, case_study));

        for action in actions {
            self.showcase.dispatch(action, now);
        }
        if submit {
            self.submit_contact();
        }
        if let Some(language) = new_language {
            self.switch_language(language);
        }

        if let Some(deadline) = self.showcase.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.showcase.unmount();
        info!("Showcase exiting");
    }
}

fn spawn_worker(cc: &CreationContext<'_>, config: &Config) -> Option<SubmissionWorker> {
    let ctx = cc.egui_ctx.clone();
    let spawned = ContactClient::new(config.contact_endpoint.clone())
        .and_then(|client| SubmissionWorker::spawn(client, move || ctx.request_repaint()));

    match spawned {
        Ok(worker) => Some(worker),
        Err(err) => {
            error!(error = ?err, "Failed to start contact submission worker");
            None
        }
    }
}

pub fn run_gui(config: Config, config_path: PathBuf, translator: Translator) -> Result<()> {
    let content = ContentRepository::load(&translator)?;

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([f32::from(config.window.width), f32::from(config.window.height)])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_app_id(APP_ID)
            .with_title(translator.t("app.title")),
        ..Default::default()
    };

    eframe::run_native(
        APP_ID,
        options,
        Box::new(move |cc| Ok(Box::new(ShowcaseApp::new(cc, translator, content, config, config_path)))),
    )
    .map_err(|err| anyhow!("Failed to launch showcase window: {err}"))
}
