// src/gui/pages/watchlist.rs
use eframe::egui;

use crate::config::consts::BRAND_DROPDOWN_LIMIT;
use crate::config::options::PageKind;
use crate::filters::{WATCH_CHANNEL_PICKER_LIMIT, pick_channels};
use crate::gui::components::{
    data_table::{self, TableOpts},
    search_box::{RemoteSearch, result_list},
};
use crate::gui::task::{Load, show_state};
use crate::model::{Brand, Channel, WatchListInput, WatchListItem};
use crate::table::Table;

use super::{Page, PageCtx};

#[derive(Default)]
pub struct WatchlistPage {
    items: Load<Vec<WatchListItem>>,
    channels: Load<Vec<Channel>>,
    brand_search: RemoteSearch<Vec<Brand>>,
    channel_query: String,
    product_key: String,
    notes: String,
    write: Load<Written>,
}

/// A finished add or delete.
struct Written {
    msg: String,
    removed: Option<i64>,
}

impl WatchlistPage {
    fn load_items(&mut self, ctx: &PageCtx) {
        let api = ctx.api.clone();
        self.items.start(ctx.egui, "watchlist", move || api.watchlist());
    }

    /// One write at a time; a second one while the first is out is refused.
    fn busy(&self, ctx: &mut PageCtx) -> bool {
        let busy = self.write.is_pending();
        if busy {
            ctx.set_status("이전 요청을 처리 중입니다.");
        }
        busy
    }

    fn add(&mut self, ctx: &mut PageCtx, input: WatchListInput) {
        if self.busy(ctx) {
            return;
        }
        logf!("Watchlist: add {} {}", input.watch_type.as_str(), input.watch_value);
        let api = ctx.api.clone();
        self.write.start(ctx.egui, "watchlist add", move || {
            let item = api.add_watchlist_item(&input)?;
            Ok(Written { msg: format!("관심목록 추가: {}", item.watch_value), removed: None })
        });
    }

    fn delete(&mut self, ctx: &mut PageCtx, id: i64) {
        if self.busy(ctx) {
            return;
        }
        logf!("Watchlist: delete id={}", id);
        let api = ctx.api.clone();
        self.write.start(ctx.egui, "watchlist delete", move || {
            api.delete_watchlist_item(id)?;
            Ok(Written { msg: format!("관심목록 삭제: #{id}"), removed: Some(id) })
        });
    }

    /// Rows leave the list only once the server confirmed the delete.
    fn poll_write(&mut self, ctx: &mut PageCtx) {
        if !self.write.poll() {
            return;
        }
        if let Some(w) = self.write.ready() {
            ctx.set_status(w.msg.clone());
            match w.removed {
                Some(id) => {
                    if let Some(items) = self.items.ready_mut() {
                        items.retain(|i| i.id != id);
                    }
                }
                None => self.load_items(ctx),
            }
        } else if let Some(e) = self.write.error() {
            ctx.set_status(format!("관심목록 오류: {e}"));
        }
    }
}

impl Page for WatchlistPage {
    fn kind(&self) -> PageKind {
        PageKind::Watchlist
    }

    fn on_enter(&mut self, ctx: &mut PageCtx) {
        self.load_items(ctx);
        let api = ctx.api.clone();
        self.channels.start(ctx.egui, "channels", move || api.channels());
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        self.items.poll();
        self.channels.poll();
        self.poll_write(ctx);
        let api = ctx.api.clone();
        self.brand_search.tick(ctx.egui, "brand search", move |q| api.search_brands(&q));

        ui.weak("등록된 항목에 대해서만 Discord 알림이 전송됩니다");
        ui.add_space(6.0);

        // current list
        let count = self.items.ready().map(Vec::len).unwrap_or(0);
        ui.strong(format!("등록 항목 ({count})"));
        show_state(ui, &self.items);
        if let Some(items) = self.items.ready() {
            if items.is_empty() {
                ui.weak("등록된 항목이 없습니다. 아래에서 추가하세요.");
            } else {
                let table = Table::from_items(items);
                let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
                let opts = TableOpts { actions: &["×"], max_height: Some(320.0), ..Default::default() };
                if let Some(hit) = data_table::show_with(ui, "watchlist", &table, opts) {
                    if let Some(id) = ids.get(hit.row).copied() {
                        self.delete(ctx, id);
                    }
                }
            }
        }
        if let Some(e) = self.write.error() {
            ui.colored_label(ui.visuals().error_fg_color, e);
        }
        ui.add_space(10.0);

        // add brand
        let mut picked_brand = None;
        ui.group(|ui| {
            ui.strong("브랜드 추가");
            self.brand_search.input(ui, "브랜드 이름 검색...", 320.0);
            show_state(ui, &self.brand_search.results);
            picked_brand = result_list(ui, "", self.brand_search.items(), BRAND_DROPDOWN_LIMIT, |b: &Brand| {
                let title = match &b.name_ko {
                    Some(ko) => format!("{}  {}", b.name, ko),
                    None => b.name.clone(),
                };
                (title, b.slug.clone())
            })
            .and_then(|i| self.brand_search.items().get(i).cloned());
        });
        if let Some(brand) = picked_brand {
            self.brand_search.clear(None);
            self.add(ctx, WatchListInput::brand(&brand));
        }

        // add channel (local filter over all channels)
        let mut picked_channel = None;
        ui.group(|ui| {
            ui.strong("채널 추가");
            ui.add(egui::TextEdit::singleline(&mut self.channel_query).hint_text("채널 이름 또는 URL 검색...").desired_width(320.0));
            let all = self.channels.ready().map(Vec::as_slice).unwrap_or(&[]);
            let hits = pick_channels(all, &self.channel_query);
            picked_channel = result_list(ui, "", &hits, WATCH_CHANNEL_PICKER_LIMIT, |c: &&Channel| (c.name.clone(), c.url.clone()))
                .and_then(|i| hits.get(i).map(|c| (*c).clone()));
        });
        if let Some(channel) = picked_channel {
            self.channel_query.clear();
            self.add(ctx, WatchListInput::channel(&channel));
        }

        // add product key
        let mut add_key = None;
        ui.group(|ui| {
            ui.strong("제품 키 추가");
            ui.add(
                egui::TextEdit::singleline(&mut self.product_key)
                    .hint_text("product_key (예: supreme:box-logo-tee)")
                    .desired_width(320.0),
            );
            ui.add(egui::TextEdit::singleline(&mut self.notes).hint_text("메모 (선택)").desired_width(320.0));
            let ready = !self.product_key.trim().is_empty() && !self.write.is_pending();
            if ui.add_enabled(ready, egui::Button::new("추가")).clicked() {
                add_key = WatchListInput::product_key(&self.product_key, &self.notes);
            }
        });
        if let Some(input) = add_key {
            self.product_key.clear();
            self.notes.clear();
            self.add(ctx, input);
        }
    }

    fn table(&self) -> Option<Table> {
        self.items.ready().map(Table::from_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::pages::testing::{client, serve_once, settle};
    use crate::gui::thumbs::Thumbs;
    use crate::model::WatchType;

    fn page_with(ids: &[i64]) -> WatchlistPage {
        let items = ids
            .iter()
            .map(|&id| WatchListItem { id, watch_type: WatchType::Brand, watch_value: format!("brand-{id}"), notes: None })
            .collect();
        WatchlistPage { items: Load::Ready(items), ..Default::default() }
    }

    fn ids(page: &WatchlistPage) -> Vec<i64> {
        page.items.ready().map(|v| v.iter().map(|i| i.id).collect()).unwrap_or_default()
    }

    #[test]
    fn failed_delete_keeps_the_row() {
        let api = client(&serve_once("500 Internal Server Error", r#"{"detail": "boom"}"#));
        let egui = egui::Context::default();
        let mut thumbs = Thumbs::new();
        let mut ctx = PageCtx::new(&api, &egui, &mut thumbs, false);
        let mut page = page_with(&[7]);

        page.delete(&mut ctx, 7);
        assert_eq!(ids(&page), [7]);
        settle(|| {
            page.poll_write(&mut ctx);
            !page.write.is_pending()
        });

        assert_eq!(page.write.error(), Some("API error 500: /watchlist/7"));
        assert_eq!(ids(&page), [7]);
        let status = ctx.finish().status.unwrap_or_default();
        assert!(status.starts_with("관심목록 오류"), "{status}");
    }

    #[test]
    fn confirmed_delete_drops_the_row() {
        let api = client(&serve_once("204 No Content", ""));
        let egui = egui::Context::default();
        let mut thumbs = Thumbs::new();
        let mut ctx = PageCtx::new(&api, &egui, &mut thumbs, false);
        let mut page = page_with(&[7, 8]);

        page.delete(&mut ctx, 7);
        settle(|| {
            page.poll_write(&mut ctx);
            !page.write.is_pending()
        });

        assert_eq!(ids(&page), [8]);
        assert_eq!(ctx.finish().status.as_deref(), Some("관심목록 삭제: #7"));
    }

    #[test]
    fn second_write_waits_for_the_first() {
        let api = client(&serve_once("204 No Content", ""));
        let egui = egui::Context::default();
        let mut thumbs = Thumbs::new();
        let mut ctx = PageCtx::new(&api, &egui, &mut thumbs, false);
        let mut page = page_with(&[7, 8]);

        page.delete(&mut ctx, 7);
        page.delete(&mut ctx, 8);
        settle(|| {
            page.poll_write(&mut ctx);
            !page.write.is_pending()
        });

        // only the first delete went out
        assert_eq!(ids(&page), [8]);
    }
}
