// src/gui/pages/drops.rs
use eframe::egui;

use crate::config::consts::PICKER_DROPDOWN_LIMIT;
use crate::config::options::PageKind;
use crate::gui::components::{
    product_card,
    search_box::{RemoteSearch, result_list},
};
use crate::gui::router::Route;
use crate::gui::task::{Load, show_state};
use crate::model::{Product, ProductDrop};
use crate::table::Table;

use super::{Page, PageCtx};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Tab {
    #[default]
    Upcoming,
    All,
}

#[derive(Default)]
pub struct DropsPage {
    tab: Tab,
    drops: Load<Vec<ProductDrop>>,
    search: RemoteSearch<Vec<Product>>,
}

impl DropsPage {
    fn load(&mut self, ctx: &PageCtx) {
        let api = ctx.api.clone();
        match self.tab {
            Tab::Upcoming => self.drops.start(ctx.egui, "upcoming drops", move || api.upcoming_drops()),
            Tab::All => self.drops.start(ctx.egui, "drops", move || api.drops(None)),
        }
    }
}

impl Page for DropsPage {
    fn kind(&self) -> PageKind {
        PageKind::Drops
    }

    fn on_enter(&mut self, ctx: &mut PageCtx) {
        self.load(ctx);
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        self.drops.poll();
        let api = ctx.api.clone();
        self.search.tick(ctx.egui, "product search", move |q| api.search_products(&q));

        ui.weak("신제품 발매 및 예정 드롭");
        ui.add_space(6.0);

        // product search: keyed products go to compare, the rest open in the browser
        self.search.input(ui, "제품 검색 → 가격 비교...", 360.0);
        let picked = result_list(ui, "", self.search.items(), PICKER_DROPDOWN_LIMIT, |p: &Product| {
            let hint = if p.product_key.is_some() { "→ 가격비교" } else { "" };
            (p.name.clone(), s!(hint))
        })
        .and_then(|i| self.search.items().get(i).cloned());
        if let Some(p) = picked {
            self.search.clear(None);
            match p.product_key {
                Some(key) => ctx.go(Route::Compare(key)),
                None => ctx.egui.open_url(egui::OpenUrl::new_tab(&p.url)),
            }
        }
        ui.add_space(6.0);

        let mut tab = self.tab;
        ui.horizontal(|ui| {
            ui.selectable_value(&mut tab, Tab::Upcoming, "예정");
            ui.selectable_value(&mut tab, Tab::All, "전체");
        });
        if tab != self.tab {
            self.tab = tab;
            self.load(ctx);
        }
        ui.add_space(6.0);

        show_state(ui, &self.drops);
        let Some(drops) = self.drops.ready() else { return };
        if drops.is_empty() {
            ui.weak("드롭 데이터가 없습니다.");
            return;
        }
        let cards: Vec<product_card::Card> = drops.iter().map(product_card::Card::from_drop).collect();
        if let Some(key) = product_card::grid(ui, ctx, &cards) {
            ctx.go(Route::Compare(key));
        }
    }

    fn table(&self) -> Option<Table> {
        self.drops.ready().map(Table::from_items)
    }
}
