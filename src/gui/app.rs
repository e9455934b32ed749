// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    api::ApiClient,
    config::{
        consts::{APP_TITLE, HISTORY_LIMIT},
        options::ExportOptions,
        state::AppState,
    },
};

use super::{
    components,
    fonts,
    pages::{Page, PageCtx},
    router::{self, Route},
    thumbs::Thumbs,
};

pub fn run(options: eframe::NativeOptions, state: AppState, api: ApiClient) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, state, api)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub api: ApiClient,

    pub route: Route,
    pub page: Box<dyn Page>,
    pub history: Vec<Route>,
    pub thumbs: Thumbs,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // API base text field in the sidebar footer
    pub api_base_text: String,

    pub status: String,
}

impl App {
    pub fn new(egui_ctx: &egui::Context, state: AppState, api: ApiClient) -> Self {
        fonts::install(egui_ctx);
        egui_ctx.set_visuals(if state.gui.dark_mode { egui::Visuals::dark() } else { egui::Visuals::light() });

        let route = Route::Dashboard;
        let mut app = Self {
            out_path_text: state.options.export.out_path().to_string_lossy().into_owned(),
            out_path_dirty: false,
            api_base_text: s!(api.base_url().as_str().trim_end_matches('/')),
            page: router::page_for(&route),
            route,
            history: Vec::new(),
            thumbs: Thumbs::new(),
            status: s!("Idle"),
            state,
            api,
        };
        logf!("Init: api={}, token={}", app.api_base_text, app.api.token().is_some());
        app.enter_page(egui_ctx);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Open `route`, remembering the current one for Back.
    pub fn navigate(&mut self, egui_ctx: &egui::Context, route: Route) {
        if route == self.route {
            return;
        }
        let prev = std::mem::replace(&mut self.route, route);
        logf!("UI: Navigate {:?} → {:?}", prev, self.route);
        self.migrate_out_dir(prev.kind());
        push_history(&mut self.history, prev);
        self.thumbs.drop_queued();
        self.page = router::page_for(&self.route);
        self.enter_page(egui_ctx);
    }

    pub fn back(&mut self, egui_ctx: &egui::Context) {
        let Some(prev) = self.history.pop() else { return };
        let from = std::mem::replace(&mut self.route, prev);
        logf!("UI: Back {:?} → {:?}", from, self.route);
        self.migrate_out_dir(from.kind());
        self.thumbs.drop_queued();
        self.page = router::page_for(&self.route);
        self.enter_page(egui_ctx);
    }

    /// Re-run the current page's loads.
    pub fn refresh(&mut self, egui_ctx: &egui::Context) {
        logd!("UI: Refresh {:?}", self.route);
        self.enter_page(egui_ctx);
    }

    /// Swap in a new API base; pages reload against it.
    pub fn set_api_base(&mut self, egui_ctx: &egui::Context, base: &str) {
        let mut opts = self.state.options.api.clone();
        opts.base_url = crate::config::options::normalize_base_url(base);
        opts.admin_token = self.api.token().map(|t| s!(t));
        match ApiClient::new(&opts) {
            Ok(client) => {
                logf!("UI: API base → {}", opts.base_url);
                if let Err(e) = crate::store::remember_api_base(&opts.base_url) {
                    loge!("Store: save api base failed: {}", e);
                }
                self.state.options.api = opts;
                self.api = client;
                self.status("API 주소 변경됨");
                self.refresh(egui_ctx);
            }
            Err(e) => {
                loge!("UI: API base rejected: {}", e);
                self.status(format!("API 주소 오류: {e}"));
            }
        }
    }

    fn enter_page(&mut self, egui_ctx: &egui::Context) {
        let mut ctx = PageCtx::new(&self.api, egui_ctx, &mut self.thumbs, self.state.gui.show_images);
        self.page.on_enter(&mut ctx);
        let out = ctx.finish();
        if let Some(msg) = out.status {
            self.status = msg;
        }
    }

    /// If the visible DIR is still the default for the page we left, move it
    /// to the new page's default, keeping the file name typed in the box.
    fn migrate_out_dir(&mut self, prev: crate::config::options::PageKind) {
        let new_kind = self.route.kind();
        if prev == new_kind {
            return;
        }
        let export = &mut self.state.options.export;
        let prev_default = ExportOptions::default_dir_for(prev);
        let dir_in_text = std::path::Path::new(&self.out_path_text)
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| export.current_dir().to_path_buf());

        let norm = |p: &std::path::Path| p.components().collect::<std::path::PathBuf>();
        if norm(&dir_in_text) == norm(&prev_default) {
            let typed_is_default = !self.out_path_dirty && export.is_default_for(prev);
            export.set_default_path_for_page(new_kind);
            if !typed_is_default {
                // keep the typed file name, only the DIR follows the page
                if let Some(name) = std::path::Path::new(&self.out_path_text).file_name() {
                    let joined = ExportOptions::default_dir_for(new_kind).join(name);
                    export.set_path(&joined.to_string_lossy());
                }
            }
            self.out_path_text = export.out_path().to_string_lossy().into_owned();
            logd!("UI: Out path follows page → {}", self.out_path_text);
        }
    }
}

/// Oldest routes fall off once the Back stack is full.
fn push_history(history: &mut Vec<Route>, route: Route) {
    history.push(route);
    if history.len() > HISTORY_LIMIT {
        let excess = history.len() - HISTORY_LIMIT;
        history.drain(..excess);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.thumbs.pump(ctx);

        egui::SidePanel::left("nav")
            .resizable(false)
            .exact_width(180.0)
            .show(ctx, |ui| {
                components::nav::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("export")
            .show(ctx, |ui| {
                components::export_bar::draw(ui, self);
            });

        let mut outcome = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut go_back = false;
            let mut refresh = false;
            ui.horizontal(|ui| {
                if ui.add_enabled(!self.history.is_empty(), egui::Button::new("◀")).on_hover_text("뒤로").clicked() {
                    go_back = true;
                }
                ui.heading(format!("{} {}", self.route.kind().icon(), self.page.title()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⟳ 새로고침").clicked() {
                        refresh = true;
                    }
                });
            });
            ui.separator();

            if go_back {
                self.back(ctx);
                return;
            }
            if refresh {
                self.refresh(ctx);
            }

            let mut pctx = PageCtx::new(&self.api, ctx, &mut self.thumbs, self.state.gui.show_images);
            egui::ScrollArea::vertical()
                .id_salt(self.route.kind().slug())
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.page.ui(ui, &mut pctx);
                });
            outcome = Some(pctx.finish());
        });

        if let Some(out) = outcome {
            if let Some(token) = out.token {
                self.api.set_token(Some(&token));
                self.state.options.api.admin_token = Some(token);
            }
            if let Some(msg) = out.status {
                self.status = msg;
            }
            if let Some(route) = out.nav {
                self.navigate(ctx, route);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_keeps_the_most_recent_routes() {
        let mut history = Vec::new();
        for id in 0..(HISTORY_LIMIT as i64 + 5) {
            push_history(&mut history, Route::PurchaseScore(id));
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.first(), Some(&Route::PurchaseScore(5)));
        assert_eq!(history.last(), Some(&Route::PurchaseScore(HISTORY_LIMIT as i64 + 4)));
    }
}
