// src/gui/pages/news.rs
use eframe::egui::{self, RichText};

use crate::config::consts::NEWS_PAGE_LIMIT;
use crate::config::options::PageKind;
use crate::filters::{NEWS_SOURCES, filter_news_source};
use crate::format::date_prefix;
use crate::gui::task::Task;
use crate::model::FashionNews;
use crate::paging::{Advance, Paginator};
use crate::table::Table;

use super::{Page, PageCtx};

const ENTITY_BLUE: egui::Color32 = egui::Color32::from_rgb(0x1D, 0x4E, 0xD8);

pub struct NewsPage {
    source: Option<String>,
    items: Vec<FashionNews>,
    pager: Paginator,
    next: Option<Task<Vec<FashionNews>>>,
    error: Option<String>,
}

impl Default for NewsPage {
    fn default() -> Self {
        Self {
            source: None,
            items: Vec::new(),
            pager: Paginator::new(NEWS_PAGE_LIMIT, Advance::ByReceived),
            next: None,
            error: None,
        }
    }
}

impl NewsPage {
    fn reload(&mut self, ctx: &PageCtx) {
        logf!("News: load source={:?}", self.source);
        self.items.clear();
        self.error = None;
        // an in-flight page belongs to the old filter
        self.next = None;
        self.pager.reset();
        self.fetch_next(ctx);
    }

    fn fetch_next(&mut self, ctx: &PageCtx) {
        let Some((limit, offset)) = self.pager.next_request() else { return };
        let api = ctx.api.clone();
        self.next = Some(Task::spawn(ctx.egui, "news", move || api.news(limit, offset)));
    }

    fn poll_next(&mut self) {
        let Some(res) = self.next.as_ref().and_then(Task::poll) else { return };
        self.next = None;
        match res {
            Ok(batch) => {
                // offset follows what the server sent, before the source filter
                self.pager.apply(batch.len());
                let kept = filter_news_source(batch, self.source.as_deref());
                logd!("News: offset={} kept={}", self.pager.offset, kept.len());
                self.items.extend(kept);
            }
            Err(e) => {
                self.pager.fail();
                self.error = Some(e);
            }
        }
    }
}

fn news_card(ui: &mut egui::Ui, n: &FashionNews) {
    egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(10)).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.hyperlink_to(RichText::new(&n.title).strong(), &n.url);
            if let Some(entity) = &n.entity_name {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.colored_label(ENTITY_BLUE, RichText::new(entity).small());
                });
            }
        });
        if let Some(summary) = &n.summary {
            let short: String = summary.chars().take(180).collect();
            ui.weak(if short.len() < summary.len() { format!("{short}…") } else { short });
        }
        let when = n.published_at.as_deref().map(|p| format!(" · {}", date_prefix(Some(p)))).unwrap_or_default();
        ui.label(RichText::new(format!("{}{}", n.source, when)).small().weak());
    });
}

impl Page for NewsPage {
    fn kind(&self) -> PageKind {
        PageKind::News
    }

    fn on_enter(&mut self, ctx: &mut PageCtx) {
        self.reload(ctx);
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        self.poll_next();

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("{}건", self.items.len()));
        });
        let mut source = self.source.clone();
        ui.horizontal_wrapped(|ui| {
            ui.selectable_value(&mut source, None, "전체");
            for s in NEWS_SOURCES {
                ui.selectable_value(&mut source, Some(s!(s)), s);
            }
        });
        if source != self.source {
            self.source = source;
            self.reload(ctx);
        }
        ui.add_space(6.0);

        if self.items.is_empty() && !self.pager.loading && self.error.is_none() {
            ui.vertical_centered(|ui| {
                ui.weak("뉴스가 없습니다. make news를 실행해 크롤해 주세요.");
            });
        }
        for n in &self.items {
            news_card(ui, n);
            ui.add_space(3.0);
        }

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
            ui.vertical_centered(|ui| ui.weak("불러오는 중..."));
        } else if !self.pager.has_more {
            if !self.items.is_empty() {
                ui.vertical_centered(|ui| ui.weak("모두 로드됨"));
            }
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
