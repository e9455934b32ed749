// src/gui/pages/channels.rs
use eframe::egui;

use crate::config::consts::CHANNEL_HIGHLIGHT_LIMIT;
use crate::config::options::PageKind;
use crate::filters::filter_channels;
use crate::gui::components::data_table::{self, TableOpts};
use crate::gui::task::{Load, show_state};
use crate::model::ChannelHighlight;
use crate::table::Table;

use super::{Page, PageCtx};

const SALE_ON: egui::Color32 = egui::Color32::from_rgb(0xDC, 0x26, 0x26);

#[derive(Default)]
pub struct ChannelsPage {
    items: Load<Vec<ChannelHighlight>>,
    query: String,
    sales_only: bool,
    view: Table,
    urls: Vec<String>,
}

impl ChannelsPage {
    fn rebuild(&mut self) {
        let Some(items) = self.items.ready() else { return };
        let shown = filter_channels(items, &self.query, self.sales_only);
        self.urls = shown.iter().map(|c| c.channel_url.clone()).collect();
        self.view = Table::from_items(shown);
    }
}

impl Page for ChannelsPage {
    fn kind(&self) -> PageKind {
        PageKind::Channels
    }

    fn on_enter(&mut self, ctx: &mut PageCtx) {
        let api = ctx.api.clone();
        self.items.start(ctx.egui, "channel highlights", move || api.channel_highlights(CHANNEL_HIGHLIGHT_LIMIT, 0));
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        if self.items.poll() {
            self.rebuild();
        }
        ui.weak("세일 진행 여부 / 신상품 판매 여부 강조");
        ui.add_space(4.0);

        let mut changed = false;
        ui.horizontal(|ui| {
            changed |= ui
                .add(egui::TextEdit::singleline(&mut self.query).hint_text("채널 검색...").desired_width(320.0))
                .changed();
            changed |= ui.checkbox(&mut self.sales_only, "세일 진행 중만 보기").changed();
        });
        if changed {
            self.rebuild();
        }

        show_state(ui, &self.items);
        if self.items.ready().is_none() {
            return;
        }
        ui.weak(format!("{}개 채널", self.view.len()));

        // highlight the "Sales" column when a channel runs a sale
        let sale_col = self.view.headers.iter().position(|h| h == "Running sale");
        let tint = move |_row: usize, col: usize, cell: &str| (Some(col) == sale_col && cell == "Y").then_some(SALE_ON);
        let opts = TableOpts { actions: &["열기"], tint: Some(&tint), ..Default::default() };
        if let Some(hit) = data_table::show_with(ui, "channels", &self.view, opts) {
            if let Some(url) = self.urls.get(hit.row) {
                ctx.egui.open_url(egui::OpenUrl::new_tab(url));
            }
        }
    }

    fn table(&self) -> Option<Table> {
        Some(self.view.clone())
    }
}
