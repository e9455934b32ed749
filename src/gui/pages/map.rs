// src/gui/pages/map.rs
//
// Country markers on a plain lon/lat grid. No coastlines; the grid and
// the country codes are enough to find a market.

use eframe::egui::{self, Color32, Pos2, Rect, RichText, Sense, Stroke, Vec2};

use crate::config::consts::MAP_CHANNEL_LIMIT;
use crate::config::options::PageKind;
use crate::filters::{CountryStat, country_name, group_by_country};
use crate::gui::components::product_card::{INFO_BLUE, NEW_GREEN, SALE_RED};
use crate::gui::task::{Load, show_state};
use crate::model::ChannelHighlight;
use crate::table::Table;

use super::{Page, PageCtx};

const LAT_TOP: f32 = 75.0;
const LAT_BOTTOM: f32 = -50.0;
const MARKER_R: f32 = 8.0;

/// Equirectangular projection into `rect`, latitude clipped to the band
/// the markers use.
fn project(lon: f32, lat: f32, rect: Rect) -> Pos2 {
    let x = (lon + 180.0) / 360.0;
    let y = (LAT_TOP - lat.clamp(LAT_BOTTOM, LAT_TOP)) / (LAT_TOP - LAT_BOTTOM);
    Pos2::new(rect.left() + x * rect.width(), rect.top() + y * rect.height())
}

#[derive(Default)]
pub struct MapPage {
    channels: Load<Vec<ChannelHighlight>>,
    selected: Option<String>,
}

fn draw_map(ui: &mut egui::Ui, countries: &[CountryStat], selected: Option<&str>) -> Option<String> {
    let width = ui.available_width().clamp(360.0, 980.0);
    let size = Vec2::new(width, width * (LAT_TOP - LAT_BOTTOM) / 360.0);
    let (resp, painter) = ui.allocate_painter(size, Sense::click());
    let rect = resp.rect;
    let visuals = ui.visuals();

    painter.rect_filled(rect, 6.0, visuals.extreme_bg_color);
    let grid = Stroke::new(0.5, visuals.weak_text_color().gamma_multiply(0.3));
    for lon in (-180..=180).step_by(30) {
        let x = project(lon as f32, 0.0, rect).x;
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], grid);
    }
    for lat in (-30..=60).step_by(30) {
        let y = project(0.0, lat as f32, rect).y;
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], grid);
    }

    let hover = resp.hover_pos();
    let mut hit = None;
    for c in countries {
        let p = project(c.lon, c.lat, rect);
        let active = selected == Some(c.code.as_str());
        let color = if c.has_sales() { SALE_RED } else { INFO_BLUE };
        let r = if active { MARKER_R + 2.0 } else { MARKER_R };
        painter.circle(p, r, color.gamma_multiply(0.85), Stroke::new(1.5, Color32::WHITE));
        painter.text(
            p - Vec2::new(0.0, r + 8.0),
            egui::Align2::CENTER_CENTER,
            &c.code,
            egui::FontId::proportional(10.0),
            visuals.text_color(),
        );
        if hover.is_some_and(|h| h.distance(p) <= r + 3.0) {
            hit = Some(c.code.clone());
        }
    }
    if hit.is_some() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    if resp.clicked() { hit } else { None }
}

fn channel_row(ui: &mut egui::Ui, ch: &ChannelHighlight) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.hyperlink_to(RichText::new(&ch.channel_name).strong(), &ch.channel_url);
        ui.weak(ch.channel_type.as_deref().unwrap_or("-"));
        ui.horizontal(|ui| {
            if ch.is_running_sales {
                ui.colored_label(SALE_RED, RichText::new("세일").small());
            }
            if ch.is_selling_new_products {
                ui.colored_label(NEW_GREEN, RichText::new("NEW").small());
            }
        });
    });
}

impl Page for MapPage {
    fn kind(&self) -> PageKind {
        PageKind::Map
    }

    fn on_enter(&mut self, ctx: &mut PageCtx) {
        let api = ctx.api.clone();
        self.channels.start(ctx.egui, "channel highlights", move || api.channel_highlights(MAP_CHANNEL_LIMIT, 0));
    }

    fn ui(&mut self, ui: &mut egui::Ui, _ctx: &mut PageCtx) {
        self.channels.poll();

        ui.weak("국가별 채널 분포 / 세일 채널 강조");
        ui.add_space(6.0);
        show_state(ui, &self.channels);
        let Some(channels) = self.channels.ready() else { return };
        let countries = group_by_country(channels);

        let mut clicked = None;
        ui.columns(2, |cols| {
            clicked = draw_map(&mut cols[0], &countries, self.selected.as_deref());
            cols[0].horizontal(|ui| {
                ui.colored_label(SALE_RED, "●");
                ui.weak("세일 채널 있음");
                ui.colored_label(INFO_BLUE, "●");
                ui.weak("세일 없음");
            });

            let ui = &mut cols[1];
            ui.strong("국가 상세");
            let selected = self.selected.as_deref().and_then(|code| countries.iter().find(|c| c.code == code));
            match selected {
                None => {
                    ui.weak("지도의 마커를 클릭하면 채널 목록이 표시됩니다.");
                }
                Some(c) => {
                    ui.label(RichText::new(format!("{} ({})", country_name(&c.code), c.code)).strong());
                    ui.weak(format!("채널 {}개 · 세일 채널 {}개", c.channels.len(), c.sale_channels));
                    egui::ScrollArea::vertical().id_salt("map_country_channels").max_height(520.0).show(ui, |ui| {
                        for ch in &c.channels {
                            channel_row(ui, ch);
                        }
                    });
                }
            }
        });
        if let Some(code) = clicked {
            logd!("Map: select {}", code);
            self.selected = Some(code);
        }
    }

    fn table(&self) -> Option<Table> {
        let channels = self.channels.ready()?;
        match &self.selected {
            Some(code) => {
                let countries = group_by_country(channels);
                let c = countries.iter().find(|c| &c.code == code)?;
                Some(Table::from_items(c.channels.iter().copied()))
            }
            None => Some(Table::from_items(channels)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_maps_corners_and_clips_latitude() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(360.0, 125.0));
        assert_eq!(project(-180.0, LAT_TOP, rect), Pos2::new(0.0, 0.0));
        assert_eq!(project(180.0, LAT_BOTTOM, rect), Pos2::new(360.0, 125.0));
        // Seoul sits east of the meridian and north of the equator
        let seoul = project(127.8, 36.2, rect);
        assert!(seoul.x > 180.0 && seoul.y < project(0.0, 0.0, rect).y);
        // beyond the band clamps to the edge
        assert_eq!(project(0.0, 89.0, rect).y, 0.0);
    }
}
