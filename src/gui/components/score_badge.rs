// src/gui/components/score_badge.rs
use eframe::egui::{self, Color32, RichText};

use crate::format::grade_colors;

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Grade letter on its grade color. `large` is the score page hero.
pub fn show(ui: &mut egui::Ui, grade: &str, large: bool) -> egui::Response {
    let (bg, fg) = grade_colors(grade);
    let (size, margin) = if large { (40.0, 14) } else { (13.0, 4) };
    egui::Frame::new()
        .fill(rgb(bg))
        .corner_radius(if large { 10.0 } else { 4.0 })
        .inner_margin(egui::Margin::symmetric(margin, margin / 2))
        .show(ui, |ui| {
            ui.label(RichText::new(grade).size(size).strong().color(rgb(fg)));
        })
        .response
}
