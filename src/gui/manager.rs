//! Settings panel implemented with egui/eframe

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::info;

use super::components::{section_list, ResetDialog, SectionAction};
use super::constants::*;
use crate::config::SiteConfig;
use crate::layout::SectionStore;
use crate::site::nav_links;
use crate::storage::Storage;

struct StatusMessage {
    text: String,
    color: egui::Color32,
}

struct LayoutApp<S: Storage> {
    store: SectionStore<S>,
    site_name: String,
    reset_dialog: ResetDialog,
    status_message: Option<StatusMessage>,
}

impl<S: Storage> LayoutApp<S> {
    fn new(_cc: &CreationContext<'_>, store: SectionStore<S>, config: &SiteConfig) -> Self {
        info!("Initializing layout settings panel");

        let status_message = if store.is_hydrated() {
            None
        } else {
            Some(StatusMessage {
                text: "Layout not loaded, changes will not be saved".to_string(),
                color: STATUS_WARN,
            })
        };

        Self {
            store,
            site_name: config.name.clone(),
            reset_dialog: ResetDialog::new(),
            status_message,
        }
    }

    fn apply(&mut self, action: SectionAction) {
        match action {
            SectionAction::Toggle(id) => {
                self.store.toggle_section(&id);
                let visible = self
                    .store
                    .sections()
                    .iter()
                    .any(|s| s.id == id && s.enabled);
                self.status_message = Some(StatusMessage {
                    text: format!("'{id}' is now {}", if visible { "visible" } else { "hidden" }),
                    color: STATUS_OK,
                });
            }
            SectionAction::Reorder { moved, target } => {
                self.store.reorder_sections(&moved, &target);
                self.status_message = Some(StatusMessage {
                    text: format!("Moved '{moved}' to the place of '{target}'"),
                    color: STATUS_OK,
                });
            }
        }
    }
}

impl<S: Storage> eframe::App for LayoutApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(PADDING);
            ui.heading(format!("{} Layout", self.site_name));
            ui.add_space(SECTION_SPACING);

            egui::ScrollArea::vertical().show(ui, |ui| {
                let action = section_list::ui(ui, self.store.registry(), self.store.sections());
                if let Some(action) = action {
                    self.apply(action);
                }

                ui.add_space(SECTION_SPACING);

                if self.reset_dialog.ui(ui) {
                    self.store.reset_to_defaults();
                    self.status_message = Some(StatusMessage {
                        text: "Layout reset to defaults".to_string(),
                        color: STATUS_OK,
                    });
                }

                ui.add_space(SECTION_SPACING);
                ui.separator();
                ui.add_space(SECTION_SPACING);

                ui.group(|ui| {
                    ui.label(egui::RichText::new("Navigation Preview").strong());
                    ui.add_space(ITEM_SPACING / 2.0);

                    let enabled = self.store.enabled_sections();
                    let links = nav_links(self.store.registry(), &enabled);
                    if links.is_empty() {
                        ui.label(egui::RichText::new("(No linked sections)").italics().weak());
                    }
                    ui.horizontal_wrapped(|ui| {
                        for link in &links {
                            ui.label(format!("{} ({})", link.label, link.href));
                        }
                    });
                });

                if let Some(message) = &self.status_message {
                    ui.add_space(ITEM_SPACING);
                    ui.colored_label(message.color, &message.text);
                }
            });
        });
    }
}

pub fn run_gui<S: Storage + 'static>(store: SectionStore<S>, config: &SiteConfig) -> Result<()> {
    let title = format!("{} Layout", config.name);
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title(title.clone()),
        ..Default::default()
    };

    let config = config.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(LayoutApp::new(cc, store, &config)))),
    )
    .map_err(|err| anyhow!("Failed to launch settings panel: {err}"))
}
