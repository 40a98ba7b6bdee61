use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::views::post_card;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .auto_shrink(false)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(640.0);
                ui.add_space(24.0);

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Community Complaints")
                            .size(24.0)
                            .strong()
                            .color(colors::TEXT_LIGHT),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Refresh").clicked() {
                            state.load_dashboard();
                        }
                        if state.dashboard.loading {
                            ui.spinner();
                        }
                    });
                });
                ui.add_space(16.0);

                if state.dashboard.posts.is_empty() && !state.dashboard.loading {
                    ui.label(
                        egui::RichText::new("No complaints filed yet.")
                            .color(colors::TEXT_SECONDARY),
                    );
                }

                for post in &state.dashboard.posts {
                    post_card(ui, post);
                }
                ui.add_space(24.0);
            });
        });
}
