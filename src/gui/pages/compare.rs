// src/gui/pages/compare.rs
use eframe::egui::{self, RichText, Vec2};

use crate::chart::ChartModel;
use crate::config::consts::{PRICE_HISTORY_DAY_CHOICES, PRICE_HISTORY_DAYS};
use crate::config::options::PageKind;
use crate::format::won;
use crate::gui::components::{data_table::{self, TableOpts}, price_chart};
use crate::gui::router::Route;
use crate::gui::task::{Load, show_state};
use crate::model::{ChannelPriceHistory, PriceComparison};
use crate::table::{Table, price_history_table};

use super::{Page, PageCtx};

const CHEAPEST: egui::Color32 = egui::Color32::from_rgb(0x05, 0x96, 0x69);

pub struct ComparePage {
    key: String,
    data: Load<PriceComparison>,
    history: Load<Vec<ChannelPriceHistory>>,
    chart: Option<ChartModel>,
    days: u32,
    listings: Table,
    cheapest_rows: Vec<bool>,
    urls: Vec<String>,
}

impl ComparePage {
    pub fn new(key: &str) -> Self {
        Self {
            key: s!(key),
            data: Load::Idle,
            history: Load::Idle,
            chart: None,
            days: PRICE_HISTORY_DAYS,
            listings: Table::default(),
            cheapest_rows: Vec::new(),
            urls: Vec::new(),
        }
    }

    fn load_history(&mut self, ctx: &PageCtx) {
        let api = ctx.api.clone();
        let key = self.key.clone();
        let days = self.days;
        self.chart = None;
        self.history.start(ctx.egui, "price history", move || api.price_history(&key, days));
    }

    fn rebuild_listings(&mut self) {
        let Some(data) = self.data.ready() else { return };
        let sorted = data.sorted_listings();
        self.cheapest_rows = sorted.iter().map(|l| data.is_cheapest(l)).collect();
        self.urls = sorted.iter().map(|l| l.product_url.clone()).collect();
        self.listings = Table::from_items(sorted);
    }
}

impl Page for ComparePage {
    fn kind(&self) -> PageKind {
        PageKind::Compare
    }

    fn title(&self) -> String {
        self.data.ready().map(|d| d.product_name.clone()).unwrap_or_else(|| s!(self.kind().label()))
    }

    fn on_enter(&mut self, ctx: &mut PageCtx) {
        logf!("Compare: open {}", self.key);
        let api = ctx.api.clone();
        let key = self.key.clone();
        self.data.start(ctx.egui, "price comparison", move || api.price_comparison(&key));
        self.load_history(ctx);
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        if self.data.poll() {
            self.rebuild_listings();
        }
        if self.history.poll() {
            self.chart = self.history.ready().and_then(|h| ChartModel::build(h));
        }

        if ui.link("← 대시보드").clicked() {
            ctx.go(Route::Dashboard);
        }
        ui.label(RichText::new(&self.key).monospace().weak());
        show_state(ui, &self.data);
        let Some(data) = self.data.ready() else { return };

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                if ctx.show_images && data.hero_image().is_some() {
                    ctx.thumbs.show(ui, data.hero_image(), Vec2::splat(128.0));
                }
                ui.vertical(|ui| {
                    ui.weak("최저가");
                    let price = data.cheapest_price_krw.map(won).unwrap_or_else(|| s!("—"));
                    ui.label(RichText::new(price).size(24.0).strong().color(CHEAPEST));
                    if let Some(ch) = &data.cheapest_channel {
                        ui.weak(ch);
                    }
                    ui.weak(format!("{}개 채널에서 판매 중", data.total_listings));
                });
            });
        });
        ui.add_space(6.0);

        let cheapest = &self.cheapest_rows;
        let tint = |row: usize, _col: usize, _cell: &str| cheapest.get(row).copied().unwrap_or(false).then_some(CHEAPEST);
        let opts = TableOpts { actions: &["보기 →"], tint: Some(&tint), ..Default::default() };
        if let Some(hit) = data_table::show_with(ui, "compare_listings", &self.listings, opts) {
            if let Some(url) = self.urls.get(hit.row) {
                ctx.egui.open_url(egui::OpenUrl::new_tab(url));
            }
        }
        ui.add_space(10.0);

        let mut days = self.days;
        ui.horizontal(|ui| {
            ui.strong("가격 추이");
            for d in PRICE_HISTORY_DAY_CHOICES {
                ui.selectable_value(&mut days, d, format!("{d}일"));
            }
        });
        show_state(ui, &self.history);
        match &self.chart {
            Some(model) => price_chart::show(ui, model),
            None if self.history.ready().is_some() => {
                ui.weak("가격 이력이 없습니다.");
            }
            None => {}
        }

        if days != self.days {
            logf!("Compare: {} history days → {}", self.key, days);
            self.days = days;
            self.load_history(ctx);
        }
    }

    fn table(&self) -> Option<Table> {
        // listings first; the history rows are the secondary table
        if !self.listings.is_empty() {
            return Some(self.listings.clone());
        }
        self.history.ready().map(|h| price_history_table(h))
    }
}
