// src/gui/pages/purchase_score.rs
use eframe::egui::{self, Color32, RichText};

use crate::config::options::PageKind;
use crate::format::won;
use crate::gui::components::score_badge;
use crate::gui::router::Route;
use crate::gui::task::{Load, show_state};
use crate::model::{Krw, Score};

use super::{Page, PageCtx};

const GAIN: Color32 = Color32::from_rgb(0x05, 0x96, 0x69);
const LOSS: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);

pub struct PurchaseScorePage {
    id: i64,
    score: Load<Score>,
    confirm: bool,
    deleting: Load<()>,
}

impl PurchaseScorePage {
    pub fn new(id: i64) -> Self {
        Self { id, score: Load::Idle, confirm: false, deleting: Load::Idle }
    }
}

fn price_cell(ui: &mut egui::Ui, label: &str, value: Option<Krw>, color: Option<Color32>) {
    ui.vertical_centered(|ui| {
        ui.weak(label);
        let text = RichText::new(value.map(won).unwrap_or_else(|| s!("—"))).strong();
        ui.label(match color {
            Some(c) if value.is_some() => text.color(c),
            _ => text,
        });
    });
}

fn savings_row(ui: &mut egui::Ui, label: &str, amount: Option<Krw>) {
    let Some(amount) = amount else { return };
    ui.horizontal(|ui| {
        ui.weak(label);
        let sign = if amount.0 >= 0 { "+" } else { "" };
        let color = if amount.0 >= 0 { GAIN } else { LOSS };
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(color, format!("{sign}{}", won(amount)));
        });
    });
}

impl Page for PurchaseScorePage {
    fn kind(&self) -> PageKind {
        PageKind::PurchaseScore
    }

    fn title(&self) -> String {
        self.score.ready().map(|s| s.product_name.clone()).unwrap_or_else(|| format!("구매 #{}", self.id))
    }

    fn on_enter(&mut self, ctx: &mut PageCtx) {
        let api = ctx.api.clone();
        let id = self.id;
        self.score.start(ctx.egui, "purchase score", move || api.purchase_score(id));
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        self.score.poll();
        if self.deleting.poll() {
            match self.deleting.error() {
                None => {
                    ctx.set_status(format!("구매 #{} 삭제됨", self.id));
                    ctx.go(Route::Purchases);
                }
                Some(e) => ctx.set_status(format!("삭제 실패: {e}")),
            }
        }

        ui.horizontal(|ui| {
            if ui.link("← 구매 이력").clicked() {
                ctx.go(Route::Purchases);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let del = egui::Button::new(RichText::new("삭제").color(LOSS));
                if ui.add_enabled(!self.deleting.is_pending(), del).clicked() {
                    self.confirm = true;
                }
            });
        });
        ui.weak(format!("#{}", self.id));

        if self.confirm {
            let mut close = false;
            egui::Window::new("구매 삭제")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx.egui, |ui| {
                    ui.label("이 구매 기록을 삭제하시겠습니까?");
                    ui.horizontal(|ui| {
                        if ui.button("삭제").clicked() {
                            logf!("Purchase: delete id={}", self.id);
                            let api = ctx.api.clone();
                            let id = self.id;
                            self.deleting.start(ctx.egui, "delete purchase", move || api.delete_purchase(id));
                            close = true;
                        }
                        if ui.button("취소").clicked() {
                            close = true;
                        }
                    });
                });
            if close {
                self.confirm = false;
            }
        }

        show_state(ui, &self.score);
        let Some(score) = self.score.ready() else { return };
        ui.add_space(6.0);

        egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(14)).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical_centered_justified(|ui| {
                    ui.set_max_width(90.0);
                    score_badge::show(ui, &score.grade, true);
                    ui.weak("등급");
                });
                ui.add_space(16.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(won(score.paid_price_krw)).size(22.0).strong());
                    ui.weak(score.percentile_text());
                    ui.add_space(4.0);
                    ui.label(&score.verdict);
                    ui.label(RichText::new(&score.badge).size(16.0));
                });
            });
        });
        ui.add_space(6.0);

        egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(12)).show(ui, |ui| {
            ui.strong("가격 분석");
            ui.columns(3, |cols| {
                price_cell(&mut cols[0], "최저가", score.min_ever_krw, Some(GAIN));
                price_cell(&mut cols[1], "평균가", score.avg_krw, None);
                price_cell(&mut cols[2], "최고가", score.max_ever_krw, Some(LOSS));
            });
            if score.has_savings() {
                ui.separator();
                ui.strong("절감액");
                savings_row(ui, "원가 대비", score.savings_vs_full);
                savings_row(ui, "평균가 대비", score.savings_vs_avg);
            }
        });
        ui.add_space(8.0);

        if !score.product_key.is_empty() && ui.link("채널별 가격 비교 보기 →").clicked() {
            ctx.go(Route::Compare(score.product_key.clone()));
        }
    }
}
