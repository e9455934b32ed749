// src/gui/components/price_chart.rs
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::chart::{ChartModel, series_color};
use crate::format::thousands;

const HEIGHT: f32 = 260.0;
const LEFT: f32 = 78.0;
const BOTTOM: f32 = 22.0;
const PAD: f32 = 10.0;

fn color(index: usize) -> Color32 {
    let [r, g, b] = series_color(index);
    Color32::from_rgb(r, g, b)
}

pub fn show(ui: &mut egui::Ui, model: &ChartModel) {
    let width = ui.available_width().max(320.0);
    let (rect, resp) = ui.allocate_exact_size(Vec2::new(width, HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    let visuals = ui.visuals();
    let grid = Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color);
    let text = visuals.weak_text_color();
    let font = FontId::proportional(11.0);

    let plot = Rect::from_min_max(
        Pos2::new(rect.left() + LEFT, rect.top() + PAD),
        Pos2::new(rect.right() - PAD, rect.bottom() - BOTTOM),
    );
    let to_screen = |x: f32, y: f32| Pos2::new(plot.left() + x * plot.width(), plot.bottom() - y * plot.height());

    for tick in model.y_ticks(5) {
        let y = model.y_frac(tick.round() as i64);
        let p = to_screen(0.0, y);
        painter.line_segment([p, Pos2::new(plot.right(), p.y)], grid);
        let label = format!("₩{}", thousands(tick.max(0.0).round() as u64));
        painter.text(Pos2::new(plot.left() - 6.0, p.y), Align2::RIGHT_CENTER, label, font.clone(), text);
    }
    for idx in model.x_ticks(6) {
        let p = to_screen(model.x_frac(idx), 0.0);
        let label = model.dates[idx].get(5..).unwrap_or(model.dates[idx].as_str());
        painter.text(Pos2::new(p.x, plot.bottom() + 4.0), Align2::CENTER_TOP, label, font.clone(), text);
    }

    for (si, series) in model.series.iter().enumerate() {
        let c = color(si);
        let pts: Vec<Pos2> = series.points.iter().map(|p| to_screen(model.x_frac(p.x), model.y_frac(p.price))).collect();
        if pts.len() > 1 {
            painter.add(Shape::line(pts.clone(), Stroke::new(2.0, c)));
        }
        for (pos, point) in pts.iter().zip(&series.points) {
            if point.is_sale {
                painter.circle(*pos, 4.0, c, Stroke::new(1.5, Color32::WHITE));
            } else {
                painter.circle_filled(*pos, 2.5, c);
            }
        }
    }

    // nearest point tooltip
    if let Some(hover) = resp.hover_pos() {
        let nearest = model
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(move |p| (s, p)))
            .map(|(s, p)| (s, p, to_screen(model.x_frac(p.x), model.y_frac(p.price)).distance(hover)))
            .filter(|(_, _, d)| *d < 14.0)
            .min_by(|a, b| a.2.total_cmp(&b.2));
        if let Some((s, p, _)) = nearest {
            let sale = if p.is_sale { " (세일)" } else { "" };
            resp.on_hover_text(format!("{}\n{}\n₩{}{}", s.name, model.dates[p.x], thousands(p.price.max(0) as u64), sale));
        }
    }

    // legend
    ui.horizontal_wrapped(|ui| {
        for (si, series) in model.series.iter().enumerate() {
            let (r, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().rect_filled(r, 2.0, color(si));
            ui.label(&series.name);
            ui.add_space(8.0);
        }
        ui.weak("● 세일가");
    });
}
