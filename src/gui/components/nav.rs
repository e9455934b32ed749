// src/gui/components/nav.rs
//
// Left sidebar: page links plus a small settings footer (API base, theme,
// thumbnails). Switching pages goes through App::navigate, which also moves
// the export DIR along when it is still the page default.

use eframe::egui;

use crate::config::{consts::APP_TITLE, options::PageKind};
use crate::gui::{app::App, router::Route};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();
    ui.add_space(6.0);
    ui.heading(APP_TITLE);
    ui.separator();

    let active = app.route.kind().nav_parent();
    let mut target: Option<Route> = None;
    for kind in PageKind::NAV {
        let selected = kind == active;
        let text = format!("{} {}", kind.icon(), kind.label());
        if ui.selectable_label(selected, text).clicked() && (!selected || app.route.kind() != kind) {
            target = Route::for_nav(kind);
        }
    }
    if let Some(route) = target {
        app.navigate(&ctx, route);
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        ui.add_space(6.0);
        let token_text = if app.api.token().is_some() { "관리자 토큰: 설정됨" } else { "관리자 토큰: 없음" };
        ui.weak(token_text);

        let before = app.state.gui.show_images;
        ui.checkbox(&mut app.state.gui.show_images, "이미지 표시");
        if before != app.state.gui.show_images {
            logf!("UI: show_images → {}", app.state.gui.show_images);
        }

        if ui.checkbox(&mut app.state.gui.dark_mode, "다크 모드").changed() {
            logf!("UI: dark_mode → {}", app.state.gui.dark_mode);
            ctx.set_visuals(if app.state.gui.dark_mode { egui::Visuals::dark() } else { egui::Visuals::light() });
        }

        ui.horizontal(|ui| {
            if ui.small_button("적용").clicked() {
                let base = app.api_base_text.clone();
                app.set_api_base(&ctx, &base);
            }
            ui.add(egui::TextEdit::singleline(&mut app.api_base_text).desired_width(110.0).font(egui::TextStyle::Small));
        });
        ui.weak("API 주소");
        ui.separator();
    });
}
