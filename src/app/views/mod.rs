use eframe::egui;

use crate::app::state::{AppState, AppView};
use crate::app::theme::colors;
use crate::shared::models::{Post, PostStatus};

pub mod auth_view;
pub mod create_post_view;
pub mod dashboard_view;
pub mod profile_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::ACCENT,
                    egui::RichText::new("📣 CiviPost").size(18.0).strong(),
                );

                if state.auth_state.authenticated {
                    ui.add_space(16.0);
                    if ui.button("Dashboard").clicked() {
                        state.open_dashboard();
                    }
                    if ui.button("New Complaint").clicked() {
                        state.open_create_post();
                    }
                    if ui.button("Profile").clicked() {
                        state.open_profile();
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    if state.auth_state.authenticated && ui.button("Logout").clicked() {
                        state.logout();
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Auth => auth_view::render(ui, state),
            AppView::Dashboard => dashboard_view::render(ui, state),
            AppView::CreatePost => create_post_view::render(ui, state),
            AppView::Profile => profile_view::render(ui, state),
        });
}

/// One complaint entry, shared by the dashboard and the profile view.
pub(crate) fn post_card(ui: &mut egui::Ui, post: &Post) {
    egui::Frame::default()
        .fill(colors::CARD_BG)
        .corner_radius(8)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            if !post.title.is_empty() {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new(&post.title).size(16.0).strong(),
                );
            }
            ui.colored_label(colors::TEXT_LIGHT, &post.content);

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if post.image.is_some() {
                    ui.colored_label(colors::TEXT_SECONDARY, "📷 photo");
                }
                if post.video.is_some() {
                    ui.colored_label(colors::TEXT_SECONDARY, "🎥 video");
                }
                if let (Some(lat), Some(lon)) = (post.latitude, post.longitude) {
                    ui.colored_label(
                        colors::TEXT_SECONDARY,
                        format!("📍 {lat:.4}, {lon:.4}"),
                    );
                }
            });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_SECONDARY, format!("👍 {} likes", post.likes));
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    format!("💬 {} comments", post.comments),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::Frame::default()
                        .fill(status_color(post.status))
                        .corner_radius(10)
                        .inner_margin(egui::Margin::symmetric(8, 2))
                        .show(ui, |ui| {
                            ui.colored_label(colors::TEXT_LIGHT, post.status.to_string());
                        });
                });
            });
        });
    ui.add_space(8.0);
}

fn status_color(status: PostStatus) -> egui::Color32 {
    match status {
        PostStatus::Completed => colors::STATUS_COMPLETED,
        PostStatus::InProgress => colors::STATUS_IN_PROGRESS,
        PostStatus::Open => colors::STATUS_OPEN,
    }
}
