// src/model/product.rs
use serde::{Deserialize, Serialize};

use super::Krw;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub channel_id: i64,
    pub brand_id: Option<i64>,
    pub name: String,
    pub product_key: Option<String>,
    pub gender: Option<String>,
    pub subcategory: Option<String>,
    pub url: String,
    pub image_url: Option<String>,
    pub is_sale: bool,
    pub is_active: bool,
    #[serde(default)]
    pub archived_at: Option<String>,
}

impl Product {
    pub fn is_sold_out(&self) -> bool {
        !self.is_active
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiChannelProduct {
    pub product_key: String,
    pub product_name: String,
    pub image_url: Option<String>,
    pub channel_count: u32,
    pub min_price_krw: Krw,
    pub max_price_krw: Krw,
    pub price_spread_krw: Krw,
    pub spread_rate_pct: f64,
}

/// Server-side filters for the sales endpoints. Unset fields are omitted
/// from the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleFilters {
    pub gender: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

impl SaleFilters {
    /// `(key, value)` pairs in the order the API documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(g) = self.gender.as_deref().filter(|s| !s.is_empty()) {
            out.push(("gender", s!(g)));
        }
        if let Some(c) = self.category.as_deref().filter(|s| !s.is_empty()) {
            out.push(("category", s!(c)));
        }
        if let Some(min) = self.min_price {
            out.push(("min_price", min.to_string()));
        }
        if let Some(max) = self.max_price {
            out.push(("max_price", max.to_string()));
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleCount {
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleHighlight {
    pub product_id: i64,
    pub product_name: String,
    pub product_key: Option<String>,
    pub product_url: String,
    pub image_url: Option<String>,
    pub channel_name: String,
    pub channel_country: Option<String>,
    pub is_new: bool,
    pub is_active: bool,
    pub price_krw: Krw,
    pub original_price_krw: Option<Krw>,
    pub discount_rate: Option<f64>,
    pub total_channels: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceComparisonItem {
    pub channel_name: String,
    pub channel_country: Option<String>,
    pub channel_url: String,
    pub channel_type: Option<String>,
    pub is_official: bool,
    pub price_krw: Krw,
    pub original_price_krw: Option<Krw>,
    pub is_sale: bool,
    pub discount_rate: Option<f64>,
    pub product_url: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceComparison {
    pub product_key: String,
    pub product_name: String,
    #[serde(default)]
    pub listings: Vec<PriceComparisonItem>,
    pub cheapest_channel: Option<String>,
    pub cheapest_price_krw: Option<Krw>,
    pub total_listings: u32,
}

impl PriceComparison {
    /// First listing that carries an image.
    pub fn hero_image(&self) -> Option<&str> {
        self.listings.iter().find_map(|l| l.image_url.as_deref())
    }

    /// Listings ordered by price, cheapest first.
    pub fn sorted_listings(&self) -> Vec<&PriceComparisonItem> {
        let mut v: Vec<&PriceComparisonItem> = self.listings.iter().collect();
        v.sort_by_key(|l| l.price_krw);
        v
    }

    pub fn is_cheapest(&self, listing: &PriceComparisonItem) -> bool {
        self.cheapest_price_krw == Some(listing.price_krw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryPoint {
    pub date: String,
    pub price_krw: Krw,
    pub is_sale: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelPriceHistory {
    pub channel_name: String,
    #[serde(default)]
    pub history: Vec<PriceHistoryPoint>,
}
