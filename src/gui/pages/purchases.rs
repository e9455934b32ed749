// src/gui/pages/purchases.rs
use std::collections::HashMap;

use eframe::egui::{self, RichText};

use crate::config::consts::PURCHASE_LIMIT;
use crate::config::options::PageKind;
use crate::format::{date_prefix, won};
use crate::gui::components::{score_badge, stat_card};
use crate::gui::router::Route;
use crate::gui::task::{Load, show_state};
use crate::model::{Purchase, PurchaseStats, Score};
use crate::table::Table;

use super::{Page, PageCtx};

const SAVED_GREEN: egui::Color32 = egui::Color32::from_rgb(0x05, 0x96, 0x69);

#[derive(Default)]
pub struct PurchasesPage {
    list: Load<Vec<Purchase>>,
    stats: Load<PurchaseStats>,
    /// Grades load one request per row once the list is in.
    grades: HashMap<i64, Load<Score>>,
    confirm: Option<i64>,
    deleting: Load<i64>,
}

impl PurchasesPage {
    fn load(&mut self, ctx: &PageCtx) {
        self.grades.clear();
        let api = ctx.api.clone();
        self.list.start(ctx.egui, "purchases", move || api.purchases(PURCHASE_LIMIT));
        let api = ctx.api.clone();
        self.stats.start(ctx.egui, "purchase stats", move || api.purchase_stats());
    }

    fn start_grades(&mut self, ctx: &PageCtx) {
        let Some(list) = self.list.ready() else { return };
        for p in list {
            let api = ctx.api.clone();
            let id = p.id;
            self.grades.entry(id).or_default().start(ctx.egui, "purchase grade", move || api.purchase_score(id));
        }
    }

    fn stats_row(&self, ui: &mut egui::Ui) {
        let Some(stats) = self.stats.ready() else { return };
        ui.horizontal(|ui| {
            egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(10)).show(ui, |ui| {
                ui.set_min_width(180.0);
                ui.weak("총 구매");
                ui.label(RichText::new(format!("{}건", stats.total_purchases)).size(18.0).strong());
                ui.label(won(stats.total_paid_krw));
            });
            let savings = stats.total_savings_vs_full_krw;
            let value = if savings.0 > 0 { won(savings) } else { s!("—") };
            stat_card::show(ui, "", "총 절감액", &value, false);
            egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(10)).show(ui, |ui| {
                ui.set_min_width(220.0);
                ui.weak("베스트 딜");
                match &stats.best_deal {
                    Some(deal) => {
                        ui.label(RichText::new(&deal.product_name).strong());
                        ui.colored_label(
                            SAVED_GREEN,
                            format!("{:.0}% 할인 · {} 절감", deal.discount_rate, won(deal.savings_krw)),
                        );
                    }
                    None => {
                        ui.weak("없음");
                    }
                }
            });
        });
    }

    fn confirm_window(&mut self, ctx: &PageCtx) {
        let Some(id) = self.confirm else { return };
        let mut close = false;
        let mut delete = false;
        egui::Window::new("구매 삭제")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx.egui, |ui| {
                ui.label("삭제하시겠습니까?");
                ui.horizontal(|ui| {
                    delete = ui.add_enabled(!self.deleting.is_pending(), egui::Button::new("삭제")).clicked();
                    close = ui.button("취소").clicked();
                });
            });
        if delete {
            self.delete(ctx, id);
        }
        if delete || close {
            self.confirm = None;
        }
    }

    fn delete(&mut self, ctx: &PageCtx, id: i64) {
        if self.deleting.is_pending() {
            return;
        }
        logf!("Purchases: delete id={}", id);
        let api = ctx.api.clone();
        self.deleting.start(ctx.egui, "delete purchase", move || api.delete_purchase(id).map(|_| id));
    }

    /// The row and its grade go once the server confirmed the delete.
    fn poll_delete(&mut self, ctx: &mut PageCtx) {
        if !self.deleting.poll() {
            return;
        }
        if let Some(&id) = self.deleting.ready() {
            ctx.set_status(format!("구매 #{id} 삭제됨"));
            if let Some(list) = self.list.ready_mut() {
                list.retain(|p| p.id != id);
            }
            self.grades.remove(&id);
            // stats move with the list
            let api = ctx.api.clone();
            self.stats.start(ctx.egui, "purchase stats", move || api.purchase_stats());
        } else if let Some(e) = self.deleting.error() {
            ctx.set_status(format!("삭제 실패: {e}"));
        }
    }
}

impl Page for PurchasesPage {
    fn kind(&self) -> PageKind {
        PageKind::Purchases
    }

    fn on_enter(&mut self, ctx: &mut PageCtx) {
        self.load(ctx);
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        if self.list.poll() {
            self.start_grades(ctx);
        }
        self.stats.poll();
        for grade in self.grades.values_mut() {
            grade.poll();
        }
        self.poll_delete(ctx);

        ui.horizontal(|ui| {
            ui.weak("구매 성공도 및 절감액 분석");
            if ui.button("+ 구매 추가").clicked() {
                ctx.go(Route::PurchaseNew);
            }
        });
        ui.add_space(6.0);
        self.stats_row(ui);
        ui.add_space(8.0);

        show_state(ui, &self.list);
        if self.list.ready().is_none() {
            self.confirm_window(ctx);
            return;
        }
        let list = self.list.ready().map(Vec::as_slice).unwrap_or(&[]);
        if list.is_empty() {
            ui.weak("구매 이력이 없습니다.");
        }

        let mut open = None;
        let mut ask_delete = None;
        egui::Grid::new("purchase_rows").striped(true).num_columns(7).spacing([14.0, 6.0]).show(ui, |ui| {
            for h in ["제품", "채널", "구매가", "원가", "등급", "날짜", ""] {
                ui.strong(h);
            }
            ui.end_row();
            for p in list {
                ui.horizontal(|ui| {
                    if ui.link(RichText::new(&p.product_name).strong()).clicked() {
                        open = Some(p.id);
                    }
                    if let Some(slug) = &p.brand_slug {
                        ui.weak(slug);
                    }
                });
                ui.label(&p.channel_name);
                ui.label(RichText::new(won(p.paid_price_krw)).strong());
                ui.weak(p.original_price_krw.map(won).unwrap_or_else(|| s!("—")));
                match self.grades.get(&p.id).and_then(Load::ready) {
                    Some(score) => {
                        let badge = score_badge::show(ui, &score.grade, false)
                            .interact(egui::Sense::click())
                            .on_hover_cursor(egui::CursorIcon::PointingHand);
                        if badge.clicked() {
                            open = Some(p.id);
                        }
                    }
                    None => {
                        ui.weak("—");
                    }
                }
                ui.weak(date_prefix(Some(&p.purchased_at)));
                if ui.small_button("×").on_hover_text("삭제").clicked() {
                    ask_delete = Some(p.id);
                }
                ui.end_row();
            }
        });

        if ask_delete.is_some() {
            self.confirm = ask_delete;
        }
        self.confirm_window(ctx);
        if let Some(id) = open {
            ctx.go(Route::PurchaseScore(id));
        }
    }

    fn table(&self) -> Option<Table> {
        self.list.ready().map(Table::from_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::pages::testing::{client, serve_once, settle};
    use crate::gui::thumbs::Thumbs;
    use crate::model::Krw;

    fn purchase(id: i64) -> Purchase {
        Purchase {
            id,
            product_key: format!("brand:item-{id}"),
            product_name: format!("Item {id}"),
            brand_slug: None,
            channel_name: s!("KITH"),
            channel_url: None,
            paid_price_krw: Krw(99_000),
            original_price_krw: None,
            purchased_at: s!("2026-02-01T00:00:00"),
            notes: None,
            created_at: s!("2026-02-01T00:00:00"),
        }
    }

    fn page_with(ids: &[i64]) -> PurchasesPage {
        let list = ids.iter().map(|&id| purchase(id)).collect();
        PurchasesPage { list: Load::Ready(list), ..Default::default() }
    }

    fn ids(page: &PurchasesPage) -> Vec<i64> {
        page.list.ready().map(|v| v.iter().map(|p| p.id).collect()).unwrap_or_default()
    }

    #[test]
    fn failed_delete_keeps_the_purchase() {
        let api = client(&serve_once("500 Internal Server Error", r#"{"detail": "boom"}"#));
        let egui = egui::Context::default();
        let mut thumbs = Thumbs::new();
        let mut ctx = PageCtx::new(&api, &egui, &mut thumbs, false);
        let mut page = page_with(&[3, 4]);

        page.delete(&ctx, 3);
        settle(|| {
            page.poll_delete(&mut ctx);
            !page.deleting.is_pending()
        });

        assert_eq!(ids(&page), [3, 4]);
        assert_eq!(ctx.finish().status.as_deref(), Some("삭제 실패: API error 500: /purchases/3"));
    }

    #[test]
    fn confirmed_delete_removes_the_purchase() {
        let api = client(&serve_once("204 No Content", ""));
        let egui = egui::Context::default();
        let mut thumbs = Thumbs::new();
        let mut ctx = PageCtx::new(&api, &egui, &mut thumbs, false);
        let mut page = page_with(&[3, 4]);

        page.delete(&ctx, 3);
        settle(|| {
            page.poll_delete(&mut ctx);
            !page.deleting.is_pending()
        });

        assert_eq!(ids(&page), [4]);
        assert_eq!(ctx.finish().status.as_deref(), Some("구매 #3 삭제됨"));
    }
}
