// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(table) = super::current_table(app) else {
        app.status("복사할 데이터가 없습니다");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let export = &app.state.options.export;
    logf!(
        "Copy: page={:?}, rows={}, headers={}",
        app.route.kind(),
        table.len(),
        table.headers.len()
    );
    let txt = csv::to_export_string(&table, export.include_headers, export.format);

    ui_ctx.copy_text(txt);
    app.status(format!("클립보드에 {}행 복사됨", table.len()));
}
