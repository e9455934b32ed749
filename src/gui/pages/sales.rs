// src/gui/pages/sales.rs
use eframe::egui;

use crate::config::consts::SALES_PAGE_LIMIT;
use crate::config::options::PageKind;
use crate::filters::{GENDERS, SALE_CATEGORIES, SaleFilterForm};
use crate::format::thousands;
use crate::gui::components::product_card;
use crate::gui::router::Route;
use crate::gui::task::{Load, Task};
use crate::model::{SaleCount, SaleFilters, SaleHighlight};
use crate::paging::{Advance, Paginator};
use crate::table::Table;

use super::{Page, PageCtx};

pub struct SalesPage {
    form: SaleFilterForm,
    applied: SaleFilters,
    items: Vec<SaleHighlight>,
    total: Load<SaleCount>,
    pager: Paginator,
    next: Option<Task<Vec<SaleHighlight>>>,
    error: Option<String>,
}

impl Default for SalesPage {
    fn default() -> Self {
        Self {
            form: SaleFilterForm::default(),
            applied: SaleFilters::default(),
            items: Vec::new(),
            total: Load::Idle,
            pager: Paginator::new(SALES_PAGE_LIMIT, Advance::ByLimit),
            next: None,
            error: None,
        }
    }
}

impl SalesPage {
    fn reload(&mut self, ctx: &PageCtx) {
        logf!("Sales: load filters={:?}", self.applied);
        self.items.clear();
        self.error = None;
        self.pager.reset();
        let api = ctx.api.clone();
        let filters = self.applied.clone();
        self.total.start(ctx.egui, "sale count", move || api.sale_count(&filters));
        self.fetch_next(ctx);
    }

    fn fetch_next(&mut self, ctx: &PageCtx) {
        let Some((limit, offset)) = self.pager.next_request() else { return };
        let api = ctx.api.clone();
        let filters = self.applied.clone();
        self.next = Some(Task::spawn(ctx.egui, "sale highlights", move || api.sale_highlights(limit, offset, &filters)));
    }

    fn poll_next(&mut self) {
        let Some(res) = self.next.as_ref().and_then(Task::poll) else { return };
        self.next = None;
        match res {
            Ok(batch) => {
                logd!("Sales: page offset={} got={}", self.pager.offset, batch.len());
                self.pager.apply(batch.len());
                self.items.extend(batch);
            }
            Err(e) => {
                self.pager.fail();
                self.error = Some(e);
            }
        }
    }

    fn filter_bar(&mut self, ui: &mut egui::Ui, ctx: &PageCtx) {
        let mut apply = false;
        let mut reset = false;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for (value, label) in GENDERS {
                    ui.selectable_value(&mut self.form.gender, s!(value), label);
                }
            });
            ui.horizontal(|ui| {
                let current = SALE_CATEGORIES
                    .iter()
                    .find(|(v, _)| *v == self.form.category)
                    .map(|(_, l)| *l)
                    .unwrap_or("전체 카테고리");
                egui::ComboBox::from_id_salt("sale_category").selected_text(current).show_ui(ui, |ui| {
                    for (value, label) in SALE_CATEGORIES {
                        ui.selectable_value(&mut self.form.category, s!(value), label);
                    }
                });
                ui.add(egui::TextEdit::singleline(&mut self.form.min_price).hint_text("최소가 (KRW)").desired_width(110.0));
                ui.add(egui::TextEdit::singleline(&mut self.form.max_price).hint_text("최대가 (KRW)").desired_width(110.0));
                apply = ui.button("필터 적용").clicked();
                reset = ui.button("초기화").clicked();
            });
        });
        if reset {
            self.form.reset();
        }
        if apply || reset {
            self.applied = self.form.to_filters();
            self.reload(ctx);
        }
    }
}

impl Page for SalesPage {
    fn kind(&self) -> PageKind {
        PageKind::Sales
    }

    fn on_enter(&mut self, ctx: &mut PageCtx) {
        self.reload(ctx);
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        self.total.poll();
        self.poll_next();

        let total = self.total.ready().map(|c| format!(" · 세일 제품 {}개", thousands(c.total))).unwrap_or_default();
        ui.weak(format!("세일율이 높은 순으로 정렬{total}"));
        ui.add_space(4.0);
        self.filter_bar(ui, ctx);
        ui.add_space(8.0);

        if self.items.is_empty() && self.pager.loading {
            ui.weak("로딩 중...");
            return;
        }

        let cards: Vec<product_card::Card> = self.items.iter().map(product_card::Card::from_sale).collect();
        if let Some(key) = product_card::grid(ui, ctx, &cards) {
            ctx.go(Route::Compare(key));
        }

        // sentinel: reaching the end of the list loads the next page
        ui.add_space(6.0);
        if let Some(e) = self.error.clone() {
            ui.horizontal(|ui| {
                ui.colored_label(ui.visuals().error_fg_color, e);
                if ui.button("다시 시도").clicked() {
                    self.error = None;
                    self.fetch_next(ctx);
                }
            });
        } else if self.pager.loading {
            ui.vertical_centered(|ui| ui.weak("추가 로딩 중..."));
        } else if !self.pager.has_more {
            ui.vertical_centered(|ui| ui.weak("모두 불러왔습니다."));
        } else {
            let sentinel = ui.allocate_response(egui::vec2(ui.available_width(), 24.0), egui::Sense::hover());
            if ui.is_rect_visible(sentinel.rect) {
                self.fetch_next(ctx);
            }
        }
    }

    fn table(&self) -> Option<Table> {
        Some(Table::from_items(&self.items))
    }
}
