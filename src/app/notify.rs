//! Toast Notifications
//!
//! Transient success/error messages rendered as an overlay in the top
//! right corner. The queue is bounded; the oldest toast is dropped when a
//! new one would exceed the cap, and expired toasts are pruned each frame.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::app::theme::colors;

const DEFAULT_CAP: usize = 6;
const DEFAULT_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    created: Instant,
}

/// Bounded queue of user-facing notifications.
#[derive(Debug)]
pub struct Notifier {
    toasts: VecDeque<Toast>,
    cap: usize,
    ttl: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::with_limits(DEFAULT_CAP, DEFAULT_TTL)
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(cap: usize, ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            cap,
            ttl,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        while self.toasts.len() >= self.cap {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            kind,
            message,
            created: Instant::now(),
        });
    }

    /// Drop toasts older than the TTL. Called once per frame from render.
    pub fn prune(&mut self) {
        let ttl = self.ttl;
        self.toasts.retain(|t| t.created.elapsed() < ttl);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn render(&mut self, ctx: &egui::Context) {
        self.prune();
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toast-overlay"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    let fill = match toast.kind {
                        ToastKind::Success => colors::SUCCESS,
                        ToastKind::Error => colors::ERROR,
                    };
                    egui::Frame::default()
                        .fill(fill)
                        .corner_radius(6)
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&toast.message).color(colors::TEXT_LIGHT),
                            );
                        });
                    ui.add_space(6.0);
                }
            });
    }
}
