use eframe::egui;

use crate::app::state::create_post::GeoStatus;
use crate::app::state::AppState;
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .auto_shrink(false)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(520.0);
                ui.add_space(24.0);

                ui.label(
                    egui::RichText::new("File a Complaint")
                        .size(24.0)
                        .strong()
                        .color(colors::TEXT_LIGHT),
                );
                ui.add_space(16.0);

                field_label(ui, "Title");
                ui.add_sized(
                    [ui.available_width(), 28.0],
                    egui::TextEdit::singleline(&mut state.create_post.title)
                        .hint_text("Enter title...")
                        .text_color(colors::TEXT_LIGHT),
                );
                ui.add_space(10.0);

                field_label(ui, "Description");
                ui.add_sized(
                    [ui.available_width(), 90.0],
                    egui::TextEdit::multiline(&mut state.create_post.content)
                        .hint_text("Describe your complaint...")
                        .text_color(colors::TEXT_LIGHT),
                );
                ui.add_space(10.0);

                field_label(ui, "Photo (optional)");
                ui.add_sized(
                    [ui.available_width(), 28.0],
                    egui::TextEdit::singleline(&mut state.create_post.image_path)
                        .hint_text("path to an image file")
                        .text_color(colors::TEXT_LIGHT),
                );
                ui.add_space(10.0);

                field_label(ui, "Video (optional)");
                ui.add_sized(
                    [ui.available_width(), 28.0],
                    egui::TextEdit::singleline(&mut state.create_post.video_path)
                        .hint_text("path to a video file")
                        .text_color(colors::TEXT_LIGHT),
                );
                ui.add_space(14.0);

                location_row(ui, state);
                ui.add_space(20.0);

                ui.horizontal(|ui| {
                    let cancel = egui::Button::new(
                        egui::RichText::new("Cancel").color(colors::TEXT_SECONDARY),
                    )
                    .fill(colors::BUTTON_SECONDARY);
                    if ui.add_sized([120.0, 32.0], cancel).clicked() {
                        state.open_dashboard();
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let submit = egui::Button::new(
                            egui::RichText::new("Post Complaint").color(colors::TEXT_LIGHT),
                        )
                        .fill(colors::BUTTON_PRIMARY)
                        .min_size(egui::vec2(150.0, 32.0));

                        if ui.add_enabled(!state.create_post.submitting, submit).clicked() {
                            state
                                .create_post
                                .handle_submit(&state.api, &mut state.notifier);
                        }

                        if state.create_post.submitting {
                            ui.spinner();
                        }
                    });
                });
                ui.add_space(24.0);
            });
        });
}

fn location_row(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        let fetching = state.create_post.geo == GeoStatus::Loading;
        let label = if fetching {
            "Fetching location..."
        } else {
            "Attach my current location"
        };

        let mut opt_in = state.create_post.use_location;
        let checkbox = egui::Checkbox::new(&mut opt_in, label);
        if ui.add_enabled(!fetching, checkbox).changed() {
            state
                .create_post
                .set_use_location(opt_in, state.location.as_ref(), &mut state.notifier);
        }

        if fetching {
            ui.spinner();
        }
    });

    match state.create_post.geo {
        GeoStatus::Failed(cause) => {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(cause.user_message()).color(colors::ERROR));
                let retry =
                    egui::Button::new(egui::RichText::new("Retry").color(colors::TEXT_LIGHT))
                        .fill(colors::ERROR);
                if ui.add(retry).clicked() {
                    state.create_post.retry_location(state.location.as_ref());
                }
            });
        }
        _ => {
            if state.create_post.use_location {
                if let Some(sample) = state.create_post.location {
                    ui.label(
                        egui::RichText::new(format!(
                            "📍 {:.4}, {:.4}",
                            sample.latitude, sample.longitude
                        ))
                        .color(colors::TEXT_SECONDARY),
                    );
                }
            }
        }
    }
}

fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
        ui.label(egui::RichText::new(text).color(colors::TEXT_SECONDARY));
    });
}
