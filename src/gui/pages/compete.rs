// src/gui/pages/compete.rs
use eframe::egui;

use crate::config::consts::{COMPETE_LIMIT, COMPETE_MIN_CHANNELS};
use crate::config::options::PageKind;
use crate::gui::components::data_table::{self, TableOpts};
use crate::gui::components::product_card::SALE_RED;
use crate::gui::router::Route;
use crate::gui::task::{Load, show_state};
use crate::model::MultiChannelProduct;
use crate::table::Table;

use super::{Page, PageCtx};

const SPREAD_COL: usize = 5;

#[derive(Default)]
pub struct CompetePage {
    items: Load<Vec<MultiChannelProduct>>,
    view: Table,
}

impl Page for CompetePage {
    fn kind(&self) -> PageKind {
        PageKind::Compete
    }

    fn on_enter(&mut self, ctx: &mut PageCtx) {
        let api = ctx.api.clone();
        self.items.start(ctx.egui, "multi-channel products", move || {
            api.multi_channel_products(COMPETE_LIMIT, 0, COMPETE_MIN_CHANNELS)
        });
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        if self.items.poll() {
            self.view = self.items.ready().map(Table::from_items).unwrap_or_default();
        }

        ui.weak("동일 제품이 여러 채널에서 판매되는 항목을 채널 수/가격 스프레드 기준으로 정렬");
        ui.add_space(6.0);
        show_state(ui, &self.items);
        let Some(items) = self.items.ready() else { return };
        if items.is_empty() {
            ui.weak("멀티채널 제품이 없습니다.");
            return;
        }

        let tint = |_row: usize, col: usize, _cell: &str| (col == SPREAD_COL).then_some(SALE_RED);
        let opts = TableOpts { actions: &["보기"], tint: Some(&tint), ..Default::default() };
        if let Some(hit) = data_table::show_with(ui, "compete", &self.view, opts) {
            if let Some(item) = items.get(hit.row) {
                ctx.go(Route::Compare(item.product_key.clone()));
            }
        }
    }

    fn table(&self) -> Option<Table> {
        self.items.ready().map(Table::from_items)
    }
}
