// src/gui/components/search_box.rs
//
// Search-as-you-type against the API plus the result list shown under the
// field. Requests fire once typing pauses; a newer query replaces the
// in-flight one, whose answer is then dropped.

use std::time::Duration;

use eframe::egui;

use crate::api::ApiResult;
use crate::config::consts::SEARCH_DEBOUNCE_SECS;
use crate::gui::task::Load;

pub struct RemoteSearch<T> {
    pub query: String,
    sent: String,
    edited_at: f64,
    pub results: Load<T>,
}

impl<T> Default for RemoteSearch<T> {
    fn default() -> Self {
        Self { query: s!(), sent: s!(), edited_at: 0.0, results: Load::Idle }
    }
}

impl<T: Send + 'static> RemoteSearch<T> {
    pub fn input(&mut self, ui: &mut egui::Ui, hint: &str, width: f32) -> egui::Response {
        let resp = ui.add(egui::TextEdit::singleline(&mut self.query).hint_text(hint).desired_width(width));
        if resp.changed() {
            self.edited_at = ui.input(|i| i.time);
        }
        resp
    }

    /// Poll the last request and fire a new one when the query settled.
    pub fn tick<F>(&mut self, ctx: &egui::Context, label: &'static str, fetch: F)
    where
        F: FnOnce(String) -> ApiResult<T> + Send + 'static,
    {
        self.results.poll();
        if self.query == self.sent {
            return;
        }
        let waited = ctx.input(|i| i.time) - self.edited_at;
        if waited < SEARCH_DEBOUNCE_SECS {
            ctx.request_repaint_after(Duration::from_secs_f64(SEARCH_DEBOUNCE_SECS - waited));
            return;
        }
        self.sent = self.query.clone();
        let q = s!(self.query.trim());
        if q.is_empty() {
            self.results = Load::Idle;
            return;
        }
        logd!("Search: {} q={}", label, q);
        self.results.start(ctx, label, move || fetch(q));
    }

    /// Forget the results; with `keep_text` the field keeps showing the pick.
    pub fn clear(&mut self, keep_text: Option<&str>) {
        self.query = keep_text.map(|t| s!(t)).unwrap_or_default();
        self.sent = self.query.clone();
        self.results = Load::Idle;
    }

    /// Replace the query and search right away (related-search chips).
    pub fn set_query(&mut self, q: &str) {
        self.query = s!(q);
        self.edited_at = f64::NEG_INFINITY;
    }

    pub fn sent_query(&self) -> &str {
        &self.sent
    }
}

impl<U: Send + 'static> RemoteSearch<Vec<U>> {
    pub fn items(&self) -> &[U] {
        self.results.ready().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Clickable rows of `(title, subtitle)`; returns the index picked.
pub fn result_list<T>(
    ui: &mut egui::Ui,
    heading: &str,
    items: &[T],
    max: usize,
    row: impl Fn(&T) -> (String, String),
) -> Option<usize> {
    if items.is_empty() {
        return None;
    }
    let mut picked = None;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(280.0);
        if !heading.is_empty() {
            ui.label(egui::RichText::new(heading).small().strong());
        }
        for (i, item) in items.iter().take(max).enumerate() {
            let (title, sub) = row(item);
            let resp = ui.add(egui::Button::new(title).frame(false));
            if !sub.is_empty() {
                ui.weak(sub);
            }
            if resp.clicked() {
                picked = Some(i);
            }
        }
    });
    picked
}
