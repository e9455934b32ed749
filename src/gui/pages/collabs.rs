// src/gui/pages/collabs.rs
use eframe::egui::{self, RichText};

use crate::config::options::PageKind;
use crate::filters::{COLLAB_CATEGORIES, collab_timeline};
use crate::gui::task::{Load, show_state};
use crate::model::{CollabHype, CollabItem};
use crate::table::Table;

use super::{Page, PageCtx};

const HYPE_RED: egui::Color32 = egui::Color32::from_rgb(0xB9, 0x1C, 0x1C);

#[derive(Default)]
pub struct CollabsPage {
    category: String,
    items: Load<Vec<CollabItem>>,
    hype: Load<Vec<CollabHype>>,
}

impl CollabsPage {
    fn load(&mut self, ctx: &PageCtx) {
        logd!("Collabs: load category={:?}", self.category);
        let api = ctx.api.clone();
        let category = self.category.clone();
        self.items.start(ctx.egui, "collabs", move || api.collabs(Some(&category)));
        let api = ctx.api.clone();
        self.hype.start(ctx.egui, "collab hype", move || api.collab_hype_by_category());
    }
}

fn collab_card(ui: &mut egui::Ui, item: &CollabItem) {
    egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(10)).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&item.collab_name).strong());
                let year = item.release_year.map(|y| y.to_string()).unwrap_or_else(|| s!("연도 미상"));
                ui.weak(format!("{} · {}", year, item.collab_category.as_deref().unwrap_or("카테고리 미분류")));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                ui.colored_label(HYPE_RED, RichText::new(format!("HYPE {}", item.hype_score)).strong());
            });
        });
        if let Some(notes) = &item.notes {
            ui.label(notes);
        }
        if let Some(src) = &item.source_url {
            ui.hyperlink_to(RichText::new("출처 보기").small(), src);
        }
    });
}

impl Page for CollabsPage {
    fn kind(&self) -> PageKind {
        PageKind::Collabs
    }

    fn on_enter(&mut self, ctx: &mut PageCtx) {
        self.load(ctx);
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        self.items.poll();
        self.hype.poll();

        ui.weak("브랜드 협업 이력과 하입 점수");
        ui.add_space(6.0);

        let mut category = self.category.clone();
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for (value, label) in COLLAB_CATEGORIES {
                    ui.selectable_value(&mut category, s!(value), label);
                }
            });
            if let Some(summary) = self.hype.ready() {
                ui.horizontal_wrapped(|ui| {
                    for h in summary {
                        ui.label(
                            RichText::new(format!(
                                "{}: 평균 {:.1} / 최고 {:.0} ({}건)",
                                h.category, h.avg_hype, h.max_hype, h.count
                            ))
                            .small(),
                        );
                    }
                });
            }
        });
        if category != self.category {
            self.category = category;
            self.load(ctx);
        }
        ui.add_space(6.0);

        show_state(ui, &self.items);
        let Some(items) = self.items.ready() else { return };
        let timeline = collab_timeline(items);
        if timeline.is_empty() {
            ui.weak("협업 데이터가 없습니다.");
        }
        for item in timeline {
            collab_card(ui, item);
            ui.add_space(4.0);
        }
    }

    fn table(&self) -> Option<Table> {
        self.items.ready().map(|items| Table::from_items(collab_timeline(items)))
    }
}
