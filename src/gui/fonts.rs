// src/gui/fonts.rs
//
// egui's bundled fonts have no Hangul. Load the first system CJK font we
// can find and append it as a fallback to both families.

use std::sync::Arc;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

use crate::config::consts::{CJK_FONT_CANDIDATES, ENV_FONT};

const FONT_NAME: &str = "cjk";

pub fn install(ctx: &egui::Context) {
    let override_path = std::env::var(ENV_FONT).ok();
    let candidates = override_path.iter().map(String::as_str).chain(CJK_FONT_CANDIDATES.iter().copied());

    for path in candidates {
        match std::fs::read(path) {
            Ok(bytes) => {
                let mut fonts = FontDefinitions::default();
                fonts.font_data.insert(s!(FONT_NAME), Arc::new(FontData::from_owned(bytes)));
                for family in [FontFamily::Proportional, FontFamily::Monospace] {
                    fonts.families.entry(family).or_default().push(s!(FONT_NAME));
                }
                ctx.set_fonts(fonts);
                logf!("Fonts: CJK fallback {}", path);
                return;
            }
            Err(_) => logd!("Fonts: not found {}", path),
        }
    }
    loge!("Fonts: no CJK font found; set {} to a .ttf/.otf path", ENV_FONT);
}
