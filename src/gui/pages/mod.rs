// src/gui/pages/mod.rs
use eframe::egui;

use crate::{api::ApiClient, config::options::PageKind, gui::router::Route, gui::thumbs::Thumbs, table::Table};

pub mod admin;
pub mod brand_detail;
pub mod brands;
pub mod channels;
pub mod collabs;
pub mod compare;
pub mod compete;
pub mod dashboard;
pub mod directors;
pub mod drops;
pub mod map;
pub mod news;
pub mod purchase_new;
pub mod purchase_score;
pub mod purchases;
pub mod sales;
pub mod watchlist;

/// What a page may touch while it draws. Navigation, status text and a
/// newly accepted admin token are collected here and applied by the app
/// after the frame.
pub struct PageCtx<'a> {
    pub api: &'a ApiClient,
    pub egui: &'a egui::Context,
    pub thumbs: &'a mut Thumbs,
    pub show_images: bool,
    nav: Option<Route>,
    status: Option<String>,
    token: Option<String>,
}

/// Requests a page left behind during one frame.
#[derive(Debug, Default)]
pub struct PageOutcome {
    pub nav: Option<Route>,
    pub status: Option<String>,
    pub token: Option<String>,
}

impl<'a> PageCtx<'a> {
    pub fn new(api: &'a ApiClient, egui: &'a egui::Context, thumbs: &'a mut Thumbs, show_images: bool) -> Self {
        Self { api, egui, thumbs, show_images, nav: None, status: None, token: None }
    }

    pub fn go(&mut self, route: Route) {
        self.nav = Some(route);
    }

    pub fn set_status<T: Into<String>>(&mut self, msg: T) {
        self.status = Some(msg.into());
    }

    /// The admin page accepted this token; the app keeps it for later calls.
    pub fn adopt_token(&mut self, token: &str) {
        self.token = Some(s!(token));
    }

    pub fn finish(self) -> PageOutcome {
        PageOutcome { nav: self.nav, status: self.status, token: self.token }
    }
}

pub trait Page {
    fn kind(&self) -> PageKind;

    fn title(&self) -> String {
        s!(self.kind().label())
    }

    /// Kick off the page's loads. Called when the route opens and on refresh.
    fn on_enter(&mut self, ctx: &mut PageCtx);

    /// Poll loads and draw.
    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx);

    /// The table Copy/Export act on, if the page shows one.
    fn table(&self) -> Option<Table> {
        None
    }
}

/// Helpers for driving a page's background writes without a window.
#[cfg(test)]
pub(crate) mod testing {
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use std::time::{Duration, Instant};

    use crate::api::ApiClient;
    use crate::config::options::ApiOptions;

    /// Answer one request with `status` and `body`, after a short pause so
    /// a caller can race a second write against it.
    pub fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut len = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((k, v)) = line.split_once(':') {
                    if k.eq_ignore_ascii_case("content-length") {
                        len = v.trim().parse().unwrap_or(0);
                    }
                }
            }
            let mut request = vec![0u8; len];
            reader.read_exact(&mut request).unwrap();
            thread::sleep(Duration::from_millis(150));
            let mut stream = stream;
            let reply = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(reply.as_bytes()).unwrap();
            stream.flush().unwrap();
        });
        base
    }

    pub fn client(base: &str) -> ApiClient {
        let opts = ApiOptions { base_url: s!(base), admin_token: Some(s!("t")), timeout_secs: 5 };
        ApiClient::new(&opts).unwrap()
    }

    /// Call `done` until it reports true; panics after five seconds.
    pub fn settle(mut done: impl FnMut() -> bool) {
        let started = Instant::now();
        while !done() {
            assert!(started.elapsed() < Duration::from_secs(5), "write never finished");
            thread::sleep(Duration::from_millis(10));
        }
    }
}
