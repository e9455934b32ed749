// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use fashion_console::api::ApiClient;
use fashion_console::config::consts::APP_TITLE;
use fashion_console::config::options::ApiOptions;
use fashion_console::config::state::AppState;
use fashion_console::{gui, logf, loge};

const ICON_PX: u32 = 64;

/// Price tag on a dark rounded square, drawn at startup.
fn app_icon() -> IconData {
    let img = image::RgbaImage::from_fn(ICON_PX, ICON_PX, |x, y| {
        let (fx, fy) = (x as f32 / ICON_PX as f32, y as f32 / ICON_PX as f32);
        let corner = |cx: f32, cy: f32| ((fx - cx).powi(2) + (fy - cy).powi(2)).sqrt() > 0.12;
        let outside = (fx < 0.12 && fy < 0.12 && corner(0.12, 0.12))
            || (fx > 0.88 && fy < 0.12 && corner(0.88, 0.12))
            || (fx < 0.12 && fy > 0.88 && corner(0.12, 0.88))
            || (fx > 0.88 && fy > 0.88 && corner(0.88, 0.88));
        if outside {
            return image::Rgba([0, 0, 0, 0]);
        }
        // diagonal tag band with a punched hole
        let band = (fx + fy - 1.0).abs() < 0.28;
        let hole = ((fx - 0.66).powi(2) + (fy - 0.34).powi(2)).sqrt() < 0.07;
        match (band, hole) {
            (true, false) => image::Rgba([0xE1, 0x1D, 0x48, 0xFF]),
            _ => image::Rgba([0x18, 0x18, 0x1B, 0xFF]),
        }
    });
    let (w, h) = img.dimensions();
    IconData { rgba: img.into_raw(), width: w, height: h }
}

fn main() {
    fashion_console::log::init();

    let api_opts = ApiOptions::from_env_and_store();
    let api = match ApiClient::new(&api_opts) {
        Ok(api) => api,
        Err(e) => {
            loge!("Startup: {} ({}); falling back to the default API base", e, api_opts.base_url);
            match ApiClient::new(&ApiOptions::default()) {
                Ok(api) => api,
                Err(e) => {
                    eprintln!("GUI failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    };
    logf!("Startup: api={} token={}", api.base_url(), if api.token().is_some() { "set" } else { "none" });

    let state = AppState::with_api(api_opts);
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state, api) {
        loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
