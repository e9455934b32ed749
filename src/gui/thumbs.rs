// src/gui/thumbs.rs
//
// Product thumbnails: fetched by a few worker threads, decoded with
// `image`, uploaded as egui textures on the UI thread and cached by URL.
// Only cards on screen queue a download, and the texture cache is capped.

use std::collections::{HashMap, VecDeque};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions, Vec2};
use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, THUMB_CACHE_CAP, THUMB_MAX_PX, THUMB_WORKERS, USER_AGENT};

enum Thumb {
    Queued,
    Loading,
    Ready(TextureHandle),
    Failed,
}

struct Entry {
    thumb: Thumb,
    /// Frame this URL was last drawn on.
    used: u64,
}

type Decoded = (String, Result<ColorImage, String>);

pub struct Thumbs {
    http: Option<Client>,
    entries: HashMap<String, Entry>,
    queue: VecDeque<String>,
    frame: u64,
    in_flight: usize,
    tx: Sender<Decoded>,
    rx: Receiver<Decoded>,
}

impl Default for Thumbs {
    fn default() -> Self {
        Self::new()
    }
}

impl Thumbs {
    pub fn new() -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| loge!("Thumbs: client init failed: {}", e))
            .ok();
        let (tx, rx) = mpsc::channel();
        Self { http, entries: HashMap::new(), queue: VecDeque::new(), frame: 0, in_flight: 0, tx, rx }
    }

    /// Once per frame: upload finished images, trim the cache, start queued
    /// downloads.
    pub fn pump(&mut self, ctx: &egui::Context) {
        self.frame += 1;
        while let Ok((url, res)) = self.rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            let thumb = match res {
                Ok(img) => Thumb::Ready(ctx.load_texture(url.clone(), img, TextureOptions::LINEAR)),
                Err(e) => {
                    logd!("Thumbs: {} → {}", url, e);
                    Thumb::Failed
                }
            };
            let used = self.entries.get(&url).map_or(self.frame, |e| e.used);
            self.entries.insert(url, Entry { thumb, used });
        }
        self.evict(THUMB_CACHE_CAP);

        let Some(http) = self.http.clone() else { return };
        while self.in_flight < THUMB_WORKERS {
            let Some(url) = self.queue.pop_front() else { break };
            if let Some(e) = self.entries.get_mut(&url) {
                e.thumb = Thumb::Loading;
            }
            self.in_flight += 1;

            let tx = self.tx.clone();
            let http = http.clone();
            let ctx = ctx.clone();
            thread::spawn(move || {
                let res = fetch(&http, &url);
                let _ = tx.send((url, res));
                ctx.request_repaint();
            });
        }
    }

    /// Draw the thumbnail for `url` inside a `size` box, queueing it the
    /// first time it is on screen. A grey placeholder stands in until it
    /// arrives.
    pub fn show(&mut self, ui: &mut egui::Ui, url: Option<&str>, size: Vec2) -> egui::Response {
        let (rect, resp) = ui.allocate_exact_size(size, egui::Sense::click());
        if !ui.is_rect_visible(rect) {
            return resp;
        }
        let Some(url) = url.filter(|u| u.starts_with("http")) else {
            placeholder(ui, rect, "—");
            return resp;
        };
        let frame = self.frame;
        match self.entries.get_mut(url) {
            Some(entry) => {
                entry.used = frame;
                match &entry.thumb {
                    Thumb::Ready(tex) => {
                        let tex_size = tex.size_vec2();
                        let scale = (size.x / tex_size.x).min(size.y / tex_size.y);
                        let img_rect = egui::Rect::from_center_size(rect.center(), tex_size * scale);
                        egui::Image::new((tex.id(), tex_size * scale)).paint_at(ui, img_rect);
                    }
                    Thumb::Failed => placeholder(ui, rect, "✖"),
                    Thumb::Queued | Thumb::Loading => placeholder(ui, rect, "…"),
                }
            }
            None => {
                self.entries.insert(s!(url), Entry { thumb: Thumb::Queued, used: frame });
                self.queue.push_back(s!(url));
                placeholder(ui, rect, "…");
            }
        }
        resp
    }

    /// Forget downloads that have not started. Called when the page
    /// changes, so the old page's cards stop competing for workers.
    pub fn drop_queued(&mut self) {
        for url in self.queue.drain(..) {
            self.entries.remove(&url);
        }
    }

    /// Keep at most `cap` finished entries, dropping the least recently
    /// drawn. Queued and loading entries are never evicted.
    fn evict(&mut self, cap: usize) {
        let mut done: Vec<(u64, String)> = self
            .entries
            .iter()
            .filter(|(_, e)| matches!(e.thumb, Thumb::Ready(_) | Thumb::Failed))
            .map(|(url, e)| (e.used, url.clone()))
            .collect();
        if done.len() <= cap {
            return;
        }
        done.sort_unstable();
        let excess = done.len() - cap;
        for (_, url) in done.into_iter().take(excess) {
            self.entries.remove(&url);
        }
        logd!("Thumbs: evicted {} textures", excess);
    }
}

fn placeholder(ui: &egui::Ui, rect: egui::Rect, glyph: &str) {
    let visuals = ui.visuals();
    ui.painter().rect_filled(rect, 4.0, visuals.faint_bg_color);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(18.0),
        visuals.weak_text_color(),
    );
}

fn fetch(http: &Client, url: &str) -> Result<ColorImage, String> {
    let bytes = http
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .and_then(|r| r.bytes())
        .map_err(|e| e.to_string())?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| e.to_string())?
        .thumbnail(THUMB_MAX_PX, THUMB_MAX_PX)
        .to_rgba8();
    let (w, h) = img.dimensions();
    Ok(ColorImage::from_rgba_unmultiplied([w as usize, h as usize], img.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(ctx: &egui::Context, thumbs: &mut Thumbs, mut draw: impl FnMut(&mut egui::Ui, &mut Thumbs)) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| draw(ui, thumbs));
        });
    }

    #[test]
    fn only_visible_cards_queue_downloads() {
        let ctx = egui::Context::default();
        let mut thumbs = Thumbs::new();
        frame(&ctx, &mut thumbs, |ui, t| {
            t.show(ui, Some("https://img.example/top.jpg"), Vec2::splat(100.0));
            ui.add_space(5_000.0);
            t.show(ui, Some("https://img.example/below.jpg"), Vec2::splat(100.0));
            t.show(ui, None, Vec2::splat(100.0));
        });
        assert_eq!(thumbs.queue, ["https://img.example/top.jpg"]);
        assert!(!thumbs.entries.contains_key("https://img.example/below.jpg"));
    }

    #[test]
    fn navigation_drops_pending_downloads() {
        let ctx = egui::Context::default();
        let mut thumbs = Thumbs::new();
        frame(&ctx, &mut thumbs, |ui, t| {
            t.show(ui, Some("https://img.example/a.jpg"), Vec2::splat(50.0));
            t.show(ui, Some("https://img.example/b.jpg"), Vec2::splat(50.0));
        });
        assert_eq!(thumbs.queue.len(), 2);
        thumbs.drop_queued();
        assert!(thumbs.queue.is_empty());
        assert!(thumbs.entries.is_empty());
    }

    #[test]
    fn eviction_drops_least_recently_drawn() {
        let ctx = egui::Context::default();
        let mut thumbs = Thumbs::new();
        let pixel = ColorImage::from_rgba_unmultiplied([1, 1], &[200, 30, 30, 255]);
        for (i, used) in [5u64, 1, 9, 3].into_iter().enumerate() {
            let url = format!("https://img.example/{i}.jpg");
            let tex = ctx.load_texture(url.clone(), pixel.clone(), TextureOptions::LINEAR);
            thumbs.entries.insert(url, Entry { thumb: Thumb::Ready(tex), used });
        }
        thumbs.entries.insert(s!("https://img.example/q.jpg"), Entry { thumb: Thumb::Queued, used: 0 });

        thumbs.evict(2);

        let mut left: Vec<&str> = thumbs.entries.keys().map(String::as_str).collect();
        left.sort_unstable();
        assert_eq!(left, ["https://img.example/0.jpg", "https://img.example/2.jpg", "https://img.example/q.jpg"]);
    }
}
