// src/gui/pages/brands.rs
use eframe::egui;

use crate::config::consts::BRAND_HIGHLIGHT_LIMIT;
use crate::config::options::PageKind;
use crate::filters::{BRAND_TIERS, filter_brands};
use crate::gui::components::data_table::{self, TableOpts};
use crate::gui::router::Route;
use crate::gui::task::{Load, show_state};
use crate::model::BrandHighlight;
use crate::table::Table;

use super::{Page, PageCtx};

const NEW_GREEN: egui::Color32 = egui::Color32::from_rgb(0x16, 0xA3, 0x4A);

pub struct BrandsPage {
    items: Load<Vec<BrandHighlight>>,
    query: String,
    tier: String,
    view: Table,
    slugs: Vec<String>,
}

impl Default for BrandsPage {
    fn default() -> Self {
        Self { items: Load::Idle, query: s!(), tier: s!("all"), view: Table::default(), slugs: Vec::new() }
    }
}

impl BrandsPage {
    fn rebuild(&mut self) {
        let Some(items) = self.items.ready() else { return };
        let shown = filter_brands(items, &self.query, &self.tier);
        self.slugs = shown.iter().map(|b| b.brand_slug.clone()).collect();
        self.view = Table::from_items(shown);
    }
}

impl Page for BrandsPage {
    fn kind(&self) -> PageKind {
        PageKind::Brands
    }

    fn on_enter(&mut self, ctx: &mut PageCtx) {
        let api = ctx.api.clone();
        self.items.start(ctx.egui, "brand highlights", move || api.brand_highlights(BRAND_HIGHLIGHT_LIMIT, 0));
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        if self.items.poll() {
            self.rebuild();
        }

        let mut changed = false;
        ui.horizontal(|ui| {
            changed |= ui
                .add(egui::TextEdit::singleline(&mut self.query).hint_text("브랜드 검색...").desired_width(320.0))
                .changed();
            let current = BRAND_TIERS.iter().find(|(v, _)| *v == self.tier).map(|(_, l)| *l).unwrap_or("전체");
            egui::ComboBox::from_id_salt("brand_tier").selected_text(current).show_ui(ui, |ui| {
                for (value, label) in BRAND_TIERS {
                    changed |= ui.selectable_value(&mut self.tier, s!(value), label).changed();
                }
            });
        });
        if changed {
            self.rebuild();
        }

        show_state(ui, &self.items);
        if self.items.ready().is_none() {
            return;
        }
        ui.weak(format!("{}개 브랜드", self.view.len()));

        let new_col = self.view.headers.iter().position(|h| h == "New");
        let tint = move |_row: usize, col: usize, cell: &str| {
            (Some(col) == new_col && cell != "0").then_some(NEW_GREEN)
        };
        let opts = TableOpts { actions: &["상세"], tint: Some(&tint), ..Default::default() };
        if let Some(hit) = data_table::show_with(ui, "brands", &self.view, opts) {
            if let Some(slug) = self.slugs.get(hit.row) {
                ctx.go(Route::Brand(slug.clone()));
            }
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.weak("가격 비교는 제품 단위에서 제공합니다.");
            if ui.link("세일 제품").clicked() {
                ctx.go(Route::Sales);
            }
            ui.weak("에서 상품을 선택해 확인할 수 있습니다.");
        });
    }

    fn table(&self) -> Option<Table> {
        Some(self.view.clone())
    }
}
