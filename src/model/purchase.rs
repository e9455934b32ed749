// src/model/purchase.rs
use serde::{Deserialize, Serialize};

use super::{Krw, Product};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: i64,
    pub product_key: String,
    pub product_name: String,
    pub brand_slug: Option<String>,
    pub channel_name: String,
    pub channel_url: Option<String>,
    pub paid_price_krw: Krw,
    pub original_price_krw: Option<Krw>,
    pub purchased_at: String,
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseInput {
    pub product_key: String,
    pub product_name: String,
    pub brand_slug: Option<String>,
    pub channel_name: String,
    pub channel_url: Option<String>,
    pub paid_price_krw: Krw,
    pub original_price_krw: Option<Krw>,
    pub notes: Option<String>,
}

/// Text state of the "new purchase" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseDraft {
    pub product_key: String,
    pub product_name: String,
    pub brand_slug: String,
    pub channel_name: String,
    pub channel_url: String,
    pub paid_price_krw: String,
    pub original_price_krw: String,
    pub notes: String,
}

fn non_blank(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| s!(t))
}

fn parse_won(field: &str, s: &str) -> Result<Krw, String> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<i64>()
        .map(Krw)
        .map_err(|_| format!("{field}: 숫자를 입력하세요 ({s})"))
}

impl PurchaseDraft {
    /// Prefill from a product picked in the search dropdown.
    pub fn select_product(&mut self, p: &Product) {
        self.product_key = p.product_key.clone().unwrap_or_default();
        self.product_name = p.name.clone();
        self.channel_url = p.url.clone();
    }

    pub fn is_submittable(&self) -> bool {
        !self.product_name.trim().is_empty()
            && !self.channel_name.trim().is_empty()
            && !self.paid_price_krw.trim().is_empty()
    }

    /// Validate and convert. A missing product key falls back to the
    /// product name; blank optionals become `None`.
    pub fn to_input(&self) -> Result<PurchaseInput, String> {
        if !self.is_submittable() {
            return Err(s!("제품명, 채널명, 구매가는 필수입니다."));
        }
        let product_name = s!(self.product_name.trim());
        let original_price_krw = match non_blank(&self.original_price_krw) {
            Some(v) => Some(parse_won("원가", &v)?),
            None => None,
        };
        Ok(PurchaseInput {
            product_key: non_blank(&self.product_key).unwrap_or_else(|| product_name.clone()),
            product_name,
            brand_slug: non_blank(&self.brand_slug),
            channel_name: s!(self.channel_name.trim()),
            channel_url: non_blank(&self.channel_url),
            paid_price_krw: parse_won("구매가", &self.paid_price_krw)?,
            original_price_krw,
            notes: non_blank(&self.notes),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub purchase_id: i64,
    pub product_key: String,
    pub product_name: String,
    pub paid_price_krw: Krw,
    pub grade: String,
    pub percentile: Option<f64>,
    pub badge: String,
    pub min_ever_krw: Option<Krw>,
    pub max_ever_krw: Option<Krw>,
    pub avg_krw: Option<Krw>,
    pub data_points: u32,
    pub savings_vs_full: Option<Krw>,
    pub savings_vs_avg: Option<Krw>,
    pub verdict: String,
}

impl Score {
    /// "하위 12% (34개 데이터 중)" or "데이터 부족 (2개)".
    pub fn percentile_text(&self) -> String {
        match self.percentile {
            Some(p) => format!("하위 {:.0}% ({}개 데이터 중)", p, self.data_points),
            None => format!("데이터 부족 ({}개)", self.data_points),
        }
    }

    pub fn has_savings(&self) -> bool {
        self.savings_vs_full.is_some() || self.savings_vs_avg.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestDeal {
    pub id: i64,
    pub product_name: String,
    pub paid_price_krw: Krw,
    pub original_price_krw: Krw,
    pub savings_krw: Krw,
    pub discount_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseStats {
    pub total_purchases: u64,
    pub total_paid_krw: Krw,
    pub total_savings_vs_full_krw: Krw,
    pub best_deal: Option<BestDeal>,
}
