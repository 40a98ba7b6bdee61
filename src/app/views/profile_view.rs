use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::views::post_card;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.profile.loading {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.spinner();
            ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
        });
        return;
    }

    if let Some(ref error) = state.profile.error {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(egui::RichText::new(error).color(colors::ERROR));
        });
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink(false)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(640.0);
                ui.add_space(24.0);

                egui::Frame::default()
                    .fill(colors::CARD_BG)
                    .corner_radius(8)
                    .inner_margin(egui::Margin::same(16))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        if state.profile.editing.is_some() {
                            edit_form(ui, state);
                        } else {
                            profile_card(ui, state);
                        }
                    });

                ui.add_space(20.0);
                ui.label(
                    egui::RichText::new("Your Complaints")
                        .size(18.0)
                        .strong()
                        .color(colors::TEXT_LIGHT),
                );
                ui.add_space(10.0);

                if state.profile.posts.is_empty() {
                    ui.label(
                        egui::RichText::new("You have not filed any complaints yet.")
                            .color(colors::TEXT_SECONDARY),
                    );
                }
                for post in &state.profile.posts {
                    post_card(ui, post);
                }
                ui.add_space(24.0);
            });
        });
}

fn profile_card(ui: &mut egui::Ui, state: &mut AppState) {
    let mut do_edit = false;
    let mut do_logout = false;

    if let Some(profile) = state.profile.profile.as_ref() {
        ui.horizontal(|ui| {
            monogram(ui, &profile.name);
            ui.add_space(12.0);

            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(&profile.name)
                        .size(20.0)
                        .strong()
                        .color(colors::TEXT_LIGHT),
                );
                ui.label(egui::RichText::new(&profile.email).color(colors::TEXT_SECONDARY));
                if !profile.bio.is_empty() {
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(&profile.bio).color(colors::TEXT_LIGHT));
                }
                ui.horizontal(|ui| {
                    if let Some(ref location) = profile.location {
                        ui.label(
                            egui::RichText::new(format!("📍 {location}"))
                                .color(colors::TEXT_SECONDARY),
                        );
                    }
                    if let Some(joined) = profile.joined_display() {
                        ui.label(egui::RichText::new(joined).color(colors::TEXT_SECONDARY));
                    }
                });

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    let edit = egui::Button::new(
                        egui::RichText::new("Edit Profile").color(colors::TEXT_LIGHT),
                    )
                    .fill(colors::BUTTON_SECONDARY);
                    if ui.add(edit).clicked() {
                        do_edit = true;
                    }

                    let logout = egui::Button::new(
                        egui::RichText::new("Logout").color(colors::TEXT_LIGHT),
                    )
                    .fill(colors::ERROR);
                    if ui.add(logout).clicked() {
                        do_logout = true;
                    }
                });
            });
        });
    }

    if do_edit {
        state.profile.begin_edit();
    }
    if do_logout {
        state.logout();
    }
}

fn edit_form(ui: &mut egui::Ui, state: &mut AppState) {
    let saving = state.profile.saving;
    let mut do_save = false;
    let mut do_cancel = false;

    if let Some(editing) = state.profile.editing.as_mut() {
        edit_field(ui, "Avatar URL", &mut editing.avatar);
        edit_field(ui, "Name", &mut editing.name);
        edit_field(ui, "Email", &mut editing.email);

        ui.label(egui::RichText::new("Bio").color(colors::TEXT_SECONDARY));
        ui.add_sized(
            [ui.available_width(), 70.0],
            egui::TextEdit::multiline(&mut editing.bio).text_color(colors::TEXT_LIGHT),
        );
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            let cancel =
                egui::Button::new(egui::RichText::new("Cancel").color(colors::TEXT_SECONDARY))
                    .fill(colors::BUTTON_SECONDARY);
            if ui.add_enabled(!saving, cancel).clicked() {
                do_cancel = true;
            }

            let save = egui::Button::new(egui::RichText::new("Save").color(colors::TEXT_LIGHT))
                .fill(colors::BUTTON_PRIMARY);
            if ui.add_enabled(!saving, save).clicked() {
                do_save = true;
            }

            if saving {
                ui.spinner();
            }
        });
    }

    if do_cancel {
        state.profile.cancel_edit();
    }
    if do_save {
        state.profile.save(&state.api);
    }
}

fn edit_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(egui::RichText::new(label).color(colors::TEXT_SECONDARY));
    ui.add_sized(
        [ui.available_width(), 28.0],
        egui::TextEdit::singleline(value).text_color(colors::TEXT_LIGHT),
    );
    ui.add_space(8.0);
}

fn monogram(ui: &mut egui::Ui, name: &str) {
    let initial = name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    egui::Frame::default()
        .fill(colors::ACCENT)
        .corner_radius(24)
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(initial)
                    .size(22.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
        });
}
