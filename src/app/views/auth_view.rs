use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter()
        .rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = if state.is_register_mode { 420.0 } else { 280.0 };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("📣 CiviPost")
                    .size(32.0)
                    .strong()
                    .color(colors::ACCENT),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new("File and track civic complaints")
                    .size(14.0)
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(20.0);

            ui.label(
                egui::RichText::new(if state.is_register_mode {
                    "Create Account"
                } else {
                    "Welcome Back"
                })
                .size(22.0)
                .color(colors::TEXT_LIGHT),
            );
            ui.add_space(16.0);

            if let Some(ref error) = state.auth_state.error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            let input_width = 280.0;
            let label_width = 90.0;
            let row_indent = (available_rect.width() - input_width - label_width - 20.0) / 2.0;

            if state.is_register_mode {
                labeled_input(ui, row_indent, label_width, input_width, "Username:", |ui, w| {
                    ui.add_sized(
                        [w, 28.0],
                        egui::TextEdit::singleline(&mut state.username_input)
                            .text_color(colors::TEXT_LIGHT),
                    );
                });
            }

            labeled_input(ui, row_indent, label_width, input_width, "Email:", |ui, w| {
                ui.add_sized(
                    [w, 28.0],
                    egui::TextEdit::singleline(&mut state.email_input)
                        .text_color(colors::TEXT_LIGHT),
                );
            });

            labeled_input(ui, row_indent, label_width, input_width, "Password:", |ui, w| {
                ui.add_sized(
                    [w, 28.0],
                    egui::TextEdit::singleline(&mut state.password_input)
                        .password(true)
                        .text_color(colors::TEXT_LIGHT),
                );
            });

            if state.is_register_mode {
                labeled_input(ui, row_indent, label_width, input_width, "Bio:", |ui, w| {
                    ui.add_sized(
                        [w, 28.0],
                        egui::TextEdit::singleline(&mut state.bio_input)
                            .text_color(colors::TEXT_LIGHT),
                    );
                });
                labeled_input(ui, row_indent, label_width, input_width, "Photo:", |ui, w| {
                    ui.add_sized(
                        [w, 28.0],
                        egui::TextEdit::singleline(&mut state.profile_image_input)
                            .hint_text("path to a profile image (optional)")
                            .text_color(colors::TEXT_LIGHT),
                    );
                });
            }

            ui.add_space(20.0);

            ui.horizontal(|ui| {
                let button_width = 130.0;
                let total_buttons_width = button_width * 2.0 + 10.0;
                ui.add_space((available_rect.width() - total_buttons_width) / 2.0);

                let submit = egui::Button::new(
                    egui::RichText::new(if state.is_register_mode {
                        "Sign Up"
                    } else {
                        "Login"
                    })
                    .color(colors::TEXT_LIGHT),
                )
                .fill(colors::BUTTON_PRIMARY);

                if ui
                    .add_enabled(!state.auth_state.loading, submit.min_size(egui::vec2(button_width, 32.0)))
                    .clicked()
                {
                    state.auth_state.clear_error();
                    if state.is_register_mode {
                        state.handle_register();
                    } else {
                        state.handle_login();
                    }
                }

                ui.add_space(10.0);

                let toggle = egui::Button::new(
                    egui::RichText::new(if state.is_register_mode {
                        "Back to Login"
                    } else {
                        "Create Account"
                    })
                    .color(colors::TEXT_SECONDARY),
                )
                .fill(colors::BUTTON_SECONDARY);

                if ui
                    .add_sized([button_width, 32.0], toggle)
                    .clicked()
                {
                    state.toggle_auth_mode();
                }
            });

            if state.auth_state.loading {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0) / 2.0);
                    ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });
    });
}

fn labeled_input(
    ui: &mut egui::Ui,
    indent: f32,
    label_width: f32,
    input_width: f32,
    label: &str,
    add_input: impl FnOnce(&mut egui::Ui, f32),
) {
    ui.horizontal(|ui| {
        ui.add_space(indent.max(0.0));
        ui.add_sized(
            [label_width, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        add_input(ui, input_width);
    });
    ui.add_space(8.0);
}
