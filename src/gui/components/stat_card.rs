// src/gui/components/stat_card.rs
use eframe::egui::{self, RichText};

/// Icon, small label and a big value. Clickable when `link` is set.
pub fn show(ui: &mut egui::Ui, icon: &str, label: &str, value: &str, link: bool) -> egui::Response {
    let resp = egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_min_width(150.0);
            ui.horizontal(|ui| {
                if !icon.is_empty() {
                    ui.label(RichText::new(icon).size(22.0));
                }
                ui.vertical(|ui| {
                    ui.weak(label);
                    ui.label(RichText::new(value).size(18.0).strong());
                });
            });
        })
        .response;
    if link {
        resp.interact(egui::Sense::click()).on_hover_cursor(egui::CursorIcon::PointingHand)
    } else {
        resp
    }
}

/// `—` until loaded, then `N개`.
pub fn count_text(n: Option<usize>) -> String {
    n.map(|n| format!("{}개", crate::format::thousands(n as u64))).unwrap_or_else(|| s!("—"))
}
