use eframe::egui;

use crate::gui::constants::*;

/// Confirmation step in front of "reset to defaults"
pub struct ResetDialog {
    show_confirm: bool,
}

impl ResetDialog {
    pub fn new() -> Self {
        Self { show_confirm: false }
    }

    /// Renders the reset button and, when open, the confirmation window.
    /// Returns true only on the frame the user confirms.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> bool {
        if ui.button("↺ Reset to defaults").clicked() {
            self.show_confirm = true;
        }

        if !self.show_confirm {
            return false;
        }

        let mut confirmed = false;
        egui::Window::new("Confirm Reset")
            .collapsible(false)
            .resizable(false)
            .show(ui.ctx(), |ui| {
                ui.label("Restore the default section order and visibility?");
                ui.colored_label(STATUS_DANGER, "Your current layout will be lost.");

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    if ui.button("Reset").clicked() {
                        confirmed = true;
                        self.show_confirm = false;
                    }

                    if ui.button("Cancel").clicked() {
                        self.show_confirm = false;
                    }
                });
            });

        confirmed
    }
}

impl Default for ResetDialog {
    fn default() -> Self {
        Self::new()
    }
}
