// src/gui/pages/purchase_new.rs
use eframe::egui;

use crate::config::consts::PRODUCT_DROPDOWN_LIMIT;
use crate::config::options::PageKind;
use crate::gui::components::search_box::{RemoteSearch, result_list};
use crate::gui::router::Route;
use crate::gui::task::{Load, show_state};
use crate::model::{Product, Purchase, PurchaseDraft};

use super::{Page, PageCtx};

#[derive(Default)]
pub struct PurchaseNewPage {
    search: RemoteSearch<Vec<Product>>,
    draft: PurchaseDraft,
    invalid: Option<String>,
    saving: Load<Purchase>,
}

fn field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str, width: f32) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(label).small().weak());
        ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(width));
    });
}

impl PurchaseNewPage {
    fn submit(&mut self, ctx: &PageCtx) {
        match self.draft.to_input() {
            Ok(input) => {
                self.invalid = None;
                let api = ctx.api.clone();
                self.saving.start(ctx.egui, "create purchase", move || api.create_purchase(&input));
            }
            Err(msg) => self.invalid = Some(msg),
        }
    }
}

impl Page for PurchaseNewPage {
    fn kind(&self) -> PageKind {
        PageKind::PurchaseNew
    }

    fn on_enter(&mut self, _ctx: &mut PageCtx) {}

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        let api = ctx.api.clone();
        self.search.tick(ctx.egui, "product search", move |q| api.search_products(&q));
        if self.saving.poll() {
            if let Some(p) = self.saving.ready() {
                ctx.set_status(format!("구매 추가: {}", p.product_name));
                ctx.go(Route::PurchaseScore(p.id));
            }
        }

        ui.weak("구매한 제품 정보를 입력하세요");
        ui.add_space(6.0);

        egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(12)).show(ui, |ui| {
            ui.set_max_width(520.0);
            ui.label(egui::RichText::new("제품 검색 (선택)").small().weak());
            self.search.input(ui, "DB에서 제품 검색...", 480.0);
            let picked = result_list(ui, "", self.search.items(), PRODUCT_DROPDOWN_LIMIT, |p: &Product| {
                (p.name.clone(), p.product_key.clone().unwrap_or_default())
            })
            .and_then(|i| self.search.items().get(i).cloned());
            if let Some(p) = picked {
                self.draft.select_product(&p);
                self.search.clear(Some(&p.name));
            }
            ui.add_space(6.0);

            field(ui, "제품명 *", &mut self.draft.product_name, "예: Supreme Box Logo Tee", 480.0);
            ui.horizontal(|ui| {
                field(ui, "채널명 *", &mut self.draft.channel_name, "예: NUBIAN", 230.0);
                field(ui, "브랜드 slug", &mut self.draft.brand_slug, "예: supreme", 230.0);
            });
            ui.horizontal(|ui| {
                field(ui, "구매가 (KRW) *", &mut self.draft.paid_price_krw, "150000", 230.0);
                field(ui, "원가 (KRW)", &mut self.draft.original_price_krw, "200000", 230.0);
            });
            field(ui, "채널 URL", &mut self.draft.channel_url, "https://...", 480.0);
            field(ui, "메모", &mut self.draft.notes, "추가 메모...", 480.0);
            if !self.draft.product_key.is_empty() {
                ui.weak(format!("product_key: {}", self.draft.product_key));
            }
            ui.add_space(8.0);

            if let Some(msg) = &self.invalid {
                ui.colored_label(ui.visuals().error_fg_color, msg);
            }
            show_state(ui, &self.saving);
            ui.horizontal(|ui| {
                let saving = self.saving.is_pending();
                let label = if saving { "저장 중..." } else { "저장" };
                if ui.add_enabled(!saving && self.draft.is_submittable(), egui::Button::new(label)).clicked() {
                    self.submit(ctx);
                }
                if ui.button("취소").clicked() {
                    ctx.go(Route::Purchases);
                }
            });
        });
    }
}
