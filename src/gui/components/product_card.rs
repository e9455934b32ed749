// src/gui/components/product_card.rs
//
// Product tiles for the grid pages (dashboard, sales, brand detail, drops).

use eframe::egui::{self, Color32, RichText, Vec2};

use crate::config::consts::CARD_WIDTH;
use crate::format::discount_badge;
use crate::gui::pages::PageCtx;
use crate::model::{DropStatus, Krw, Product, ProductDrop, SaleHighlight};

pub const SALE_RED: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);
pub const NEW_GREEN: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);
pub const INFO_BLUE: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);
pub const MUTED_GRAY: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

#[derive(Debug, Clone)]
pub struct Badge {
    pub text: String,
    pub color: Color32,
}

impl Badge {
    fn new<T: Into<String>>(text: T, color: Color32) -> Self {
        Self { text: text.into(), color }
    }
}

#[derive(Debug, Clone)]
pub struct Card<'a> {
    pub image: Option<&'a str>,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub price: Option<Krw>,
    pub original: Option<Krw>,
    pub badges: Vec<Badge>,
    pub url: Option<&'a str>,
    pub compare_key: Option<&'a str>,
}

impl<'a> Card<'a> {
    pub fn from_sale(h: &'a SaleHighlight) -> Self {
        let mut badges = vec![Badge::new(discount_badge(h.discount_rate).unwrap_or_else(|| s!("세일")), SALE_RED)];
        if !h.is_active {
            badges.push(Badge::new("품절", MUTED_GRAY));
        }
        if h.is_new {
            badges.push(Badge::new("NEW", NEW_GREEN));
        }
        let reach = if h.total_channels > 1 {
            format!("{}개 채널 최저가", h.total_channels)
        } else {
            s!("단일 채널 최저가")
        };
        badges.push(Badge::new(reach, INFO_BLUE));
        Self {
            image: h.image_url.as_deref(),
            title: &h.product_name,
            subtitle: Some(&h.channel_name),
            price: Some(h.price_krw),
            original: h.original_price_krw.filter(|o| *o > h.price_krw),
            badges,
            url: Some(&h.product_url),
            compare_key: h.product_key.as_deref(),
        }
    }

    pub fn from_product(p: &'a Product) -> Self {
        let mut badges = Vec::new();
        if p.is_sold_out() {
            badges.push(Badge::new("품절", MUTED_GRAY));
        }
        Self {
            image: p.image_url.as_deref(),
            title: &p.name,
            subtitle: None,
            price: None,
            original: None,
            badges,
            url: Some(&p.url),
            compare_key: p.product_key.as_deref(),
        }
    }

    pub fn from_drop(d: &'a ProductDrop) -> Self {
        Self {
            image: d.image_url.as_deref(),
            title: &d.product_name,
            subtitle: d.release_date.as_deref().map(|r| r.get(..10).unwrap_or(r)),
            price: d.price_krw,
            original: None,
            badges: vec![Badge::new(d.status.label(), status_color(&d.status))],
            url: Some(&d.source_url),
            compare_key: d.product_key.as_deref(),
        }
    }
}

fn status_color(status: &DropStatus) -> Color32 {
    match status {
        DropStatus::Upcoming => INFO_BLUE,
        DropStatus::Released => NEW_GREEN,
        DropStatus::SoldOut | DropStatus::Other(_) => MUTED_GRAY,
    }
}

fn badge(ui: &mut egui::Ui, b: &Badge) {
    egui::Frame::new()
        .fill(b.color)
        .corner_radius(3.0)
        .inner_margin(egui::Margin::symmetric(4, 1))
        .show(ui, |ui| {
            ui.label(RichText::new(&b.text).small().color(Color32::WHITE));
        });
}

fn card(ui: &mut egui::Ui, ctx: &mut PageCtx, c: &Card) -> Option<String> {
    let mut compare = None;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            if ctx.show_images {
                ctx.thumbs.show(ui, c.image, Vec2::splat(CARD_WIDTH));
            }
            if !c.badges.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 3.0;
                    for b in &c.badges {
                        badge(ui, b);
                    }
                });
            }
            match c.url {
                Some(url) => {
                    ui.hyperlink_to(c.title, url);
                }
                None => {
                    ui.label(c.title);
                }
            }
            if let Some(sub) = c.subtitle {
                ui.weak(sub);
            }
            if let Some(price) = c.price {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(price.to_string()).strong());
                    if let Some(orig) = c.original {
                        ui.label(RichText::new(orig.to_string()).weak().strikethrough());
                    }
                });
            }
            if let Some(key) = c.compare_key {
                if ui.small_button("가격 비교 →").clicked() {
                    compare = Some(s!(key));
                }
            }
        });
    });
    compare
}

/// Wrapping grid of cards; returns the product key whose compare link was
/// clicked.
pub fn grid(ui: &mut egui::Ui, ctx: &mut PageCtx, cards: &[Card]) -> Option<String> {
    if cards.is_empty() {
        ui.weak("표시할 제품이 없습니다.");
        return None;
    }
    let mut clicked = None;
    ui.with_layout(egui::Layout::left_to_right(egui::Align::TOP).with_main_wrap(true), |ui| {
        for c in cards {
            if let Some(key) = card(ui, ctx, c) {
                clicked = Some(key);
            }
        }
    });
    clicked
}
