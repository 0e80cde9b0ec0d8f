//! Drag-and-drop section list with enable switches

use eframe::egui;

use crate::gui::constants::*;
use crate::layout::SectionState;
use crate::registry::Registry;
use crate::site::content::section_label;

/// What the user asked for this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionAction {
    Toggle(String),
    /// Row `moved` was dropped onto row `target`
    Reorder { moved: String, target: String },
}

/// Renders every section in current order; returns at most one action
pub fn ui(ui: &mut egui::Ui, registry: &Registry, sections: &[SectionState]) -> Option<SectionAction> {
    let mut action = None;

    ui.group(|ui| {
        ui.label(egui::RichText::new("Page Sections").strong());
        ui.label(egui::RichText::new("Drag a section onto another to take its place")
            .small()
            .italics());
        ui.add_space(ITEM_SPACING);

        let frame = egui::Frame::default()
            .inner_margin(4.0)
            .stroke(ui.visuals().widgets.noninteractive.bg_stroke);

        let (_, dropped_payload) = ui.dnd_drop_zone::<String, ()>(frame, |ui| {
            for (row_idx, section) in sections.iter().enumerate() {
                let item_id = egui::Id::new("layout_section").with(&section.id);
                let label = section_label(registry.display_name(&section.id));

                let mut handle = None;
                ui.horizontal(|ui| {
                    let response = ui.dnd_drag_source(item_id, section.id.clone(), |ui| {
                        ui.label(egui::RichText::new("☰").weak());
                        let text = egui::RichText::new(label);
                        if section.enabled {
                            ui.label(text);
                        } else {
                            ui.label(text.weak().strikethrough());
                        }
                    }).response;

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let mut enabled = section.enabled;
                        if ui.checkbox(&mut enabled, "Visible").changed() {
                            action = Some(SectionAction::Toggle(section.id.clone()));
                        }
                    });

                    handle = Some(response);
                });

                if row_idx + 1 < sections.len() {
                    ui.separator();
                }

                let Some(response) = handle else { continue };

                if let Some(hovered) = response.dnd_hover_payload::<String>() {
                    // Line shows where the dragged row will land
                    let rect = response.rect;
                    let stroke = egui::Stroke::new(2.0, ui.visuals().selection.stroke.color);
                    let from_idx = sections.iter().position(|s| s.id == *hovered);
                    let y = match from_idx {
                        Some(from) if from > row_idx => rect.top(),
                        Some(from) if from < row_idx => rect.bottom(),
                        _ => rect.center().y,
                    };
                    ui.painter().hline(rect.x_range(), y, stroke);

                    if let Some(dragged) = response.dnd_release_payload::<String>() {
                        action = Some(SectionAction::Reorder {
                            moved: (*dragged).clone(),
                            target: section.id.clone(),
                        });
                    }
                }
            }
        });

        // Released below the last row: move to the end
        if !matches!(action, Some(SectionAction::Reorder { .. })) {
            if let (Some(dragged), Some(last)) = (dropped_payload, sections.last()) {
                action = Some(SectionAction::Reorder {
                    moved: (*dragged).clone(),
                    target: last.id.clone(),
                });
            }
        }

        ui.add_space(ITEM_SPACING / 2.0);

        let visible = sections.iter().filter(|s| s.enabled).count();
        ui.label(egui::RichText::new(
            format!("{visible} of {} section(s) visible", sections.len()))
            .small()
            .weak());
    });

    action
}
