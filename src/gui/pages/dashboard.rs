// src/gui/pages/dashboard.rs
use eframe::egui;

use crate::config::consts::{DASHBOARD_SALE_LIMIT, RELATED_SEARCH_LIMIT};
use crate::config::options::PageKind;
use crate::gui::components::{product_card, search_box::RemoteSearch, stat_card};
use crate::gui::router::Route;
use crate::gui::task::{Load, show_state};
use crate::model::{Brand, Channel, Product};
use crate::table::Table;

use super::{Page, PageCtx};

type SearchHit = (Vec<Product>, Vec<String>);

#[derive(Default)]
pub struct DashboardPage {
    sales: Load<Vec<Product>>,
    channels: Load<Vec<Channel>>,
    brands: Load<Vec<Brand>>,
    search: RemoteSearch<SearchHit>,
}

impl DashboardPage {
    /// Search results while a query is active, otherwise the sale list.
    fn displayed(&self) -> Option<&[Product]> {
        if !self.search.sent_query().trim().is_empty() {
            return self.search.results.ready().map(|(p, _)| p.as_slice());
        }
        self.sales.ready().map(Vec::as_slice)
    }
}

impl Page for DashboardPage {
    fn kind(&self) -> PageKind {
        PageKind::Dashboard
    }

    fn on_enter(&mut self, ctx: &mut PageCtx) {
        let api = ctx.api.clone();
        self.sales.start(ctx.egui, "sale products", move || api.sale_products(DASHBOARD_SALE_LIMIT, None));
        let api = ctx.api.clone();
        self.channels.start(ctx.egui, "channels", move || api.channels());
        let api = ctx.api.clone();
        self.brands.start(ctx.egui, "brands", move || api.brands());
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        self.sales.poll();
        self.channels.poll();
        self.brands.poll();
        let api = ctx.api.clone();
        self.search.tick(ctx.egui, "product search", move |q| {
            let products = api.search_products(&q)?;
            let related = api.related_searches(&q, RELATED_SEARCH_LIMIT).unwrap_or_else(|e| {
                loge!("Dashboard: related searches failed: {}", e);
                Vec::new()
            });
            Ok((products, related))
        });

        ui.weak("세일 중인 제품과 채널 현황");
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let stats = [
                ("🔥", "세일 제품", self.sales.ready().map(Vec::len), Route::Sales),
                ("🏪", "판매채널", self.channels.ready().map(Vec::len), Route::Channels),
                ("🏷", "브랜드", self.brands.ready().map(Vec::len), Route::Brands),
            ];
            for (icon, label, n, route) in stats {
                if stat_card::show(ui, icon, label, &stat_card::count_text(n), true).clicked() {
                    ctx.go(route);
                }
            }
        });
        ui.add_space(8.0);

        self.search.input(ui, "제품 검색...", 320.0);
        let related: Vec<String> = if self.search.query.trim().is_empty() {
            Vec::new()
        } else {
            self.search.results.ready().map(|(_, r)| r.clone()).unwrap_or_default()
        };
        if !related.is_empty() {
            ui.horizontal_wrapped(|ui| {
                for term in &related {
                    if ui.small_button(term).clicked() {
                        self.search.set_query(term);
                    }
                }
            });
        }
        ui.add_space(8.0);

        let searching = !self.search.sent_query().trim().is_empty();
        if searching {
            show_state(ui, &self.search.results);
        } else {
            show_state(ui, &self.sales);
        }

        let Some(products) = self.displayed() else { return };
        if products.is_empty() {
            ui.weak(if searching { "검색 결과 없음" } else { "세일 제품 없음" });
            return;
        }
        ui.weak(if searching {
            format!("검색 결과 {}개", products.len())
        } else {
            format!("세일 {}개", products.len())
        });
        let cards: Vec<product_card::Card> = products.iter().map(product_card::Card::from_product).collect();
        if let Some(key) = product_card::grid(ui, ctx, &cards) {
            ctx.go(Route::Compare(key));
        }
    }

    fn table(&self) -> Option<Table> {
        self.displayed().map(Table::from_items)
    }
}
