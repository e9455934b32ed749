// src/gui/pages/directors.rs
use eframe::egui::{self, RichText};

use crate::config::consts::DIRECTOR_LIMIT;
use crate::config::options::PageKind;
use crate::filters::filter_directors;
use crate::gui::router::Route;
use crate::gui::task::{Load, show_state};
use crate::model::BrandDirector;
use crate::table::Table;

use super::{Page, PageCtx};

#[derive(Default)]
pub struct DirectorsPage {
    items: Load<Vec<BrandDirector>>,
    query: String,
}

/// Card for one director; returns the brand slug when its link is clicked.
fn director_card(ui: &mut egui::Ui, d: &BrandDirector) -> Option<String> {
    let mut open = None;
    egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(10)).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&d.name).strong());
                ui.weak(&d.role);
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                ui.label(RichText::new(d.tenure()).small());
            });
        });
        ui.horizontal(|ui| {
            ui.label("브랜드:");
            let name = d.brand_name.as_deref().or(d.brand_slug.as_deref()).unwrap_or("-");
            match &d.brand_slug {
                Some(slug) => {
                    if ui.link(name).clicked() {
                        open = Some(slug.clone());
                    }
                }
                None => {
                    ui.label(name);
                }
            }
        });
        if let Some(note) = &d.note {
            ui.weak(note);
        }
    });
    open
}

impl Page for DirectorsPage {
    fn kind(&self) -> PageKind {
        PageKind::Directors
    }

    fn on_enter(&mut self, ctx: &mut PageCtx) {
        let api = ctx.api.clone();
        self.items.start(ctx.egui, "directors", move || api.directors(DIRECTOR_LIMIT, 0));
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        self.items.poll();

        ui.weak("브랜드별 디렉터 이력");
        ui.add_space(6.0);
        ui.add(egui::TextEdit::singleline(&mut self.query).hint_text("디렉터/브랜드 검색").desired_width(360.0));
        ui.add_space(6.0);

        show_state(ui, &self.items);
        let Some(items) = self.items.ready() else { return };
        let filtered = filter_directors(items, &self.query);
        if filtered.is_empty() {
            ui.weak("표시할 디렉터가 없습니다.");
            return;
        }
        let mut open = None;
        for d in filtered {
            if let Some(slug) = director_card(ui, d) {
                open = Some(slug);
            }
            ui.add_space(3.0);
        }
        if let Some(slug) = open {
            ctx.go(Route::Brand(slug));
        }
    }

    fn table(&self) -> Option<Table> {
        self.items.ready().map(|items| Table::from_items(filter_directors(items, &self.query)))
    }
}
