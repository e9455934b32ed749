// src/model/catalog.rs
//
// Brands, channels, drops and the watchlist.

use serde::{Deserialize, Serialize};

use super::Krw;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub name_ko: Option<String>,
    pub origin_country: Option<String>,
    pub official_url: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub description_ko: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub channel_type: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelHighlight {
    pub channel_id: i64,
    pub channel_name: String,
    pub channel_url: String,
    pub instagram_url: Option<String>,
    pub channel_type: Option<String>,
    pub country: Option<String>,
    pub total_product_count: u64,
    pub sale_product_count: u64,
    pub new_product_count: u64,
    pub is_running_sales: bool,
    pub is_selling_new_products: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandHighlight {
    pub brand_id: i64,
    pub brand_name: String,
    pub brand_slug: String,
    pub instagram_url: Option<String>,
    pub tier: Option<String>,
    pub origin_country: Option<String>,
    pub total_product_count: u64,
    pub new_product_count: u64,
    pub is_selling_new_products: bool,
}

/* ---------------- Drops ---------------- */

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DropStatus {
    Upcoming,
    Released,
    SoldOut,
    Other(String),
}

impl From<String> for DropStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "upcoming" => DropStatus::Upcoming,
            "released" => DropStatus::Released,
            "sold_out" => DropStatus::SoldOut,
            _ => DropStatus::Other(s),
        }
    }
}

impl From<DropStatus> for String {
    fn from(s: DropStatus) -> Self {
        s.as_str().to_string()
    }
}

impl DropStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DropStatus::Upcoming => "upcoming",
            DropStatus::Released => "released",
            DropStatus::SoldOut => "sold_out",
            DropStatus::Other(s) => s,
        }
    }

    /// Display label; unknown statuses show verbatim.
    pub fn label(&self) -> &str {
        match self {
            DropStatus::Upcoming => "예정",
            DropStatus::Released => "발매",
            DropStatus::SoldOut => "품절",
            DropStatus::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDrop {
    pub id: i64,
    pub brand_id: Option<i64>,
    pub product_name: String,
    pub product_key: Option<String>,
    pub source_url: String,
    pub image_url: Option<String>,
    pub price_krw: Option<Krw>,
    pub release_date: Option<String>,
    pub status: DropStatus,
    pub detected_at: String,
    pub notified_at: Option<String>,
}

/* ---------------- Watchlist ---------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchType {
    Brand,
    Channel,
    ProductKey,
}

impl WatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            WatchType::Brand => "brand",
            WatchType::Channel => "channel",
            WatchType::ProductKey => "product_key",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WatchType::Brand => "브랜드",
            WatchType::Channel => "채널",
            WatchType::ProductKey => "제품",
        }
    }
}

impl std::str::FromStr for WatchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brand" => Ok(WatchType::Brand),
            "channel" => Ok(WatchType::Channel),
            "product_key" | "product-key" | "product" => Ok(WatchType::ProductKey),
            other => Err(format!("Unknown watch type: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchListItem {
    pub id: i64,
    pub watch_type: WatchType,
    pub watch_value: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchListInput {
    pub watch_type: WatchType,
    pub watch_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WatchListInput {
    /// Watch a brand by slug; the brand name rides along as the note.
    pub fn brand(brand: &Brand) -> Self {
        Self { watch_type: WatchType::Brand, watch_value: brand.slug.clone(), notes: Some(brand.name.clone()) }
    }

    /// Watch a channel by URL; the channel name rides along as the note.
    pub fn channel(channel: &Channel) -> Self {
        Self { watch_type: WatchType::Channel, watch_value: channel.url.clone(), notes: Some(channel.name.clone()) }
    }

    /// `None` when the key is blank. Blank notes are dropped.
    pub fn product_key(key: &str, notes: &str) -> Option<Self> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        let notes = notes.trim();
        Some(Self {
            watch_type: WatchType::ProductKey,
            watch_value: s!(key),
            notes: (!notes.is_empty()).then(|| s!(notes)),
        })
    }
}
