// src/gui/pages/brand_detail.rs
use eframe::egui::{self, RichText};

use crate::api::ApiResult;
use crate::config::consts::{BRAND_NEWS_LIMIT, BRAND_PRODUCT_LIMIT, DETAIL_PREVIEW};
use crate::config::options::PageKind;
use crate::format::{date_prefix, thousands};
use crate::gui::components::{product_card, stat_card};
use crate::gui::router::Route;
use crate::gui::task::{Load, show_state};
use crate::model::{Brand, BrandDirector, Channel, CollabItem, FashionNews, Product};
use crate::table::Table;

use super::{Page, PageCtx};

struct BrandBundle {
    brand: Brand,
    channels: Vec<Channel>,
    directors: Vec<BrandDirector>,
    collabs: Vec<CollabItem>,
    news: Vec<FashionNews>,
}

pub struct BrandDetailPage {
    slug: String,
    bundle: Load<BrandBundle>,
    products: Load<Vec<Product>>,
    sale_only: bool,
}

impl BrandDetailPage {
    pub fn new(slug: &str) -> Self {
        Self { slug: s!(slug), bundle: Load::Idle, products: Load::Idle, sale_only: false }
    }

    fn load_products(&mut self, ctx: &PageCtx) {
        let api = ctx.api.clone();
        let slug = self.slug.clone();
        let sale_only = self.sale_only;
        self.products.start(ctx.egui, "brand products", move || api.brand_products(&slug, sale_only, BRAND_PRODUCT_LIMIT));
    }
}

fn fetch_bundle(api: &crate::api::ApiClient, slug: &str) -> ApiResult<BrandBundle> {
    Ok(BrandBundle {
        brand: api.brand(slug)?,
        channels: api.brand_channels(slug)?,
        directors: api.brand_directors(slug)?,
        collabs: api.brand_collabs(slug)?,
        news: api.brand_news(slug, BRAND_NEWS_LIMIT)?,
    })
}

fn chip(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.18))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(6, 1))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(color));
        });
}

impl Page for BrandDetailPage {
    fn kind(&self) -> PageKind {
        PageKind::BrandDetail
    }

    fn title(&self) -> String {
        self.bundle.ready().map(|b| b.brand.name.clone()).unwrap_or_else(|| self.slug.clone())
    }

    fn on_enter(&mut self, ctx: &mut PageCtx) {
        logf!("Brand: open {}", self.slug);
        let api = ctx.api.clone();
        let slug = self.slug.clone();
        self.bundle.start(ctx.egui, "brand detail", move || fetch_bundle(&api, &slug));
        self.load_products(ctx);
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        self.bundle.poll();
        self.products.poll();

        if ui.link("← 브랜드 목록").clicked() {
            ctx.go(Route::Brands);
        }
        show_state(ui, &self.bundle);
        let Some(b) = self.bundle.ready() else { return };

        ui.horizontal_wrapped(|ui| {
            chip(ui, &b.brand.slug, egui::Color32::GRAY);
            chip(ui, b.brand.tier.as_deref().unwrap_or("tier 미분류"), egui::Color32::from_rgb(0x25, 0x63, 0xEB));
            chip(ui, b.brand.origin_country.as_deref().unwrap_or("국가 미상"), egui::Color32::GRAY);
            if let Some(ig) = &b.brand.instagram_url {
                ui.hyperlink_to("Instagram", ig);
            }
        });
        if let Some(desc) = &b.brand.description_ko {
            ui.weak(desc);
        }
        ui.add_space(6.0);

        let products = self.products.ready().map(Vec::as_slice).unwrap_or(&[]);
        let sale_count = products.iter().filter(|p| p.is_sale).count();
        ui.horizontal(|ui| {
            stat_card::show(ui, "", "총 제품 수", &thousands(products.len() as u64), false);
            stat_card::show(ui, "", "세일 제품 수", &thousands(sale_count as u64), false);
            stat_card::show(ui, "", "취급 채널 수", &thousands(b.channels.len() as u64), false);
        });

        let mut toggled = false;
        ui.horizontal(|ui| {
            toggled = ui.checkbox(&mut self.sale_only, "세일 제품만 보기").changed();
        });
        ui.add_space(6.0);

        ui.columns(2, |cols| {
            cols[0].strong("크리에이티브 디렉터");
            if b.directors.is_empty() {
                cols[0].weak("등록된 디렉터 정보가 없습니다.");
            }
            for d in b.directors.iter().take(DETAIL_PREVIEW) {
                cols[0].group(|ui| {
                    ui.label(RichText::new(&d.name).strong());
                    ui.weak(&d.role);
                    ui.weak(d.tenure());
                });
            }

            cols[1].horizontal(|ui| {
                ui.strong("협업 이력");
                if ui.small_button("전체 협업 보기").clicked() {
                    ctx.go(Route::Collabs);
                }
            });
            if b.collabs.is_empty() {
                cols[1].weak("협업 데이터가 없습니다.");
            }
            for c in b.collabs.iter().take(DETAIL_PREVIEW) {
                cols[1].group(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&c.collab_name).strong());
                        chip(ui, &format!("HYPE {}", c.hype_score), egui::Color32::from_rgb(0xDC, 0x26, 0x26));
                    });
                    let year = c.release_year.map(|y| y.to_string()).unwrap_or_else(|| s!("연도 미상"));
                    ui.weak(format!("{} · {}", year, c.collab_category.as_deref().unwrap_or("카테고리 미분류")));
                });
            }
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.strong("브랜드 소식");
            if ui.small_button("협업 타임라인 보기").clicked() {
                ctx.go(Route::Collabs);
            }
        });
        if b.news.is_empty() {
            ui.weak("등록된 브랜드 소식이 없습니다.");
        }
        for n in b.news.iter().take(DETAIL_PREVIEW) {
            ui.group(|ui| {
                ui.hyperlink_to(&n.title, &n.url);
                let when = n.published_at.as_deref().map(|p| format!(" · {}", date_prefix(Some(p)))).unwrap_or_default();
                ui.weak(format!("{}{}", n.source, when));
            });
        }
        ui.add_space(8.0);

        show_state(ui, &self.products);
        let cards: Vec<product_card::Card> = products.iter().map(product_card::Card::from_product).collect();
        if let Some(key) = product_card::grid(ui, ctx, &cards) {
            ctx.go(Route::Compare(key));
        }

        if toggled {
            logf!("Brand: {} sale_only → {}", self.slug, self.sale_only);
            self.load_products(ctx);
        }
    }

    fn table(&self) -> Option<Table> {
        self.products.ready().map(Table::from_items)
    }
}
