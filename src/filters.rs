// src/filters.rs
//
// Client-side filtering and ordering used by the pages. Pure functions over
// the wire types so they can be tested and benchmarked without a GUI.

use std::collections::BTreeMap;

use crate::model::{
    AdminCrawlStatus, BrandDirector, BrandHighlight, Channel, ChannelHighlight, CollabItem, CrawlState,
    FashionNews, SaleFilters,
};

/* ---------------- Chip sets ---------------- */

/// `(value, label)`; an empty value means "no filter".
pub const GENDERS: [(&str, &str); 5] =
    [("", "전체"), ("men", "남성"), ("women", "여성"), ("unisex", "유니섹스"), ("kids", "키즈")];

pub const SALE_CATEGORIES: [(&str, &str); 8] = [
    ("", "전체"),
    ("shoes", "신발"),
    ("outer", "아우터"),
    ("top", "상의"),
    ("bottom", "하의"),
    ("bag", "가방"),
    ("cap", "모자"),
    ("accessory", "액세서리"),
];

pub const BRAND_TIERS: [(&str, &str); 5] =
    [("all", "전체"), ("high-end", "하이엔드"), ("premium", "프리미엄"), ("street", "스트릿"), ("sports", "스포츠")];

pub const COLLAB_CATEGORIES: [(&str, &str); 5] = [
    ("", "전체"),
    ("footwear", "신발"),
    ("apparel", "의류"),
    ("accessories", "액세서리"),
    ("lifestyle", "라이프스타일"),
];

pub const NEWS_SOURCES: [&str; 4] = ["hypebeast.com", "highsnobiety.com", "sneakernews.com", "complex.com"];

pub const WATCH_CHANNEL_PICKER_LIMIT: usize = 8;

/* ---------------- Sales ---------------- */

/// `"150,000"` → `Some(150000)`. Blank or garbage → `None`.
pub fn parse_price(text: &str) -> Option<i64> {
    let cleaned: String = text.chars().filter(|c| !matches!(c, ',' | ' ' | '₩' | '원')).collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<i64>().ok().filter(|v| *v >= 0)
}

/// Text state of the sales filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleFilterForm {
    pub gender: String,
    pub category: String,
    pub min_price: String,
    pub max_price: String,
}

impl SaleFilterForm {
    pub fn to_filters(&self) -> SaleFilters {
        let chip = |v: &str| (!v.is_empty()).then(|| s!(v));
        SaleFilters {
            gender: chip(&self.gender),
            category: chip(&self.category),
            min_price: parse_price(&self.min_price),
            max_price: parse_price(&self.max_price),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/* ---------------- Brands / channels ---------------- */

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Substring on name/slug plus tier (`all` or empty = any tier).
pub fn filter_brands<'a>(items: &'a [BrandHighlight], query: &str, tier: &str) -> Vec<&'a BrandHighlight> {
    let q = query.trim().to_lowercase();
    items
        .iter()
        .filter(|b| tier.is_empty() || tier == "all" || b.tier.as_deref() == Some(tier))
        .filter(|b| q.is_empty() || contains_ci(&b.brand_name, &q) || contains_ci(&b.brand_slug, &q))
        .collect()
}

pub fn filter_channels<'a>(items: &'a [ChannelHighlight], query: &str, sales_only: bool) -> Vec<&'a ChannelHighlight> {
    let q = query.trim().to_lowercase();
    items
        .iter()
        .filter(|c| !sales_only || c.is_running_sales)
        .filter(|c| q.is_empty() || contains_ci(&c.channel_name, &q) || contains_ci(&c.channel_url, &q))
        .collect()
}

/// Watchlist channel picker: empty query shows nothing.
pub fn pick_channels<'a>(channels: &'a [Channel], query: &str) -> Vec<&'a Channel> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }
    channels
        .iter()
        .filter(|c| contains_ci(&c.name, &q) || contains_ci(&c.url, &q))
        .take(WATCH_CHANNEL_PICKER_LIMIT)
        .collect()
}

/* ---------------- Directors / collabs / news ---------------- */

pub fn filter_directors<'a>(items: &'a [BrandDirector], query: &str) -> Vec<&'a BrandDirector> {
    let q = query.trim().to_lowercase();
    items.iter().filter(|d| q.is_empty() || d.haystack().contains(&q)).collect()
}

/// Release year descending (missing = 0), then hype descending.
pub fn collab_timeline(items: &[CollabItem]) -> Vec<&CollabItem> {
    let mut v: Vec<&CollabItem> = items.iter().collect();
    v.sort_by(|a, b| {
        b.release_year
            .unwrap_or(0)
            .cmp(&a.release_year.unwrap_or(0))
            .then(b.hype_score.cmp(&a.hype_score))
    });
    v
}

/// Keeps only items from `source` when one is selected.
pub fn filter_news_source(items: Vec<FashionNews>, source: Option<&str>) -> Vec<FashionNews> {
    match source.filter(|s| !s.is_empty()) {
        Some(src) => items.into_iter().filter(|n| n.source == src).collect(),
        None => items,
    }
}

/* ---------------- Admin ---------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrawlFilter {
    #[default]
    All,
    Only(CrawlState),
}

impl CrawlFilter {
    pub const ALL: [CrawlFilter; 4] = [
        CrawlFilter::All,
        CrawlFilter::Only(CrawlState::Ok),
        CrawlFilter::Only(CrawlState::Never),
        CrawlFilter::Only(CrawlState::Stale),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CrawlFilter::All => "all",
            CrawlFilter::Only(s) => s.as_str(),
        }
    }

    pub fn matches(self, row: &AdminCrawlStatus) -> bool {
        match self {
            CrawlFilter::All => true,
            CrawlFilter::Only(s) => row.status == s,
        }
    }
}

impl std::str::FromStr for CrawlFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.label() == s)
            .ok_or_else(|| format!("Unknown crawl filter: {s} (all|ok|never|stale)"))
    }
}

pub fn filter_crawl_status(items: &[AdminCrawlStatus], filter: CrawlFilter) -> Vec<&AdminCrawlStatus> {
    items.iter().filter(|r| filter.matches(r)).collect()
}

/* ---------------- Map ---------------- */

/// `(code, name, lon, lat)` for the countries the map can place.
pub const COUNTRY_COORDS: [(&str, &str, f32, f32); 17] = [
    ("KR", "대한민국", 127.8, 36.2),
    ("JP", "일본", 138.2, 36.6),
    ("US", "미국", -98.5, 39.8),
    ("GB", "영국", -1.5, 52.6),
    ("DE", "독일", 10.4, 51.2),
    ("FR", "프랑스", 2.2, 46.4),
    ("IT", "이탈리아", 12.6, 42.8),
    ("ES", "스페인", -3.7, 40.4),
    ("NL", "네덜란드", 5.4, 52.1),
    ("DK", "덴마크", 10.0, 56.2),
    ("SE", "스웨덴", 15.1, 62.0),
    ("HK", "홍콩", 114.2, 22.3),
    ("SG", "싱가포르", 103.8, 1.3),
    ("CA", "캐나다", -106.3, 56.1),
    ("TW", "대만", 121.0, 23.7),
    ("CN", "중국", 103.8, 35.9),
    ("AU", "호주", 134.5, -25.7),
];

pub fn country_coords(code: &str) -> Option<(f32, f32)> {
    let code = code.trim().to_ascii_uppercase();
    COUNTRY_COORDS.iter().find(|(c, ..)| *c == code).map(|(_, _, lon, lat)| (*lon, *lat))
}

pub fn country_name(code: &str) -> &str {
    COUNTRY_COORDS.iter().find(|(c, ..)| c.eq_ignore_ascii_case(code)).map(|(_, n, ..)| *n).unwrap_or(code)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryStat<'a> {
    pub code: String,
    pub lon: f32,
    pub lat: f32,
    pub channels: Vec<&'a ChannelHighlight>,
    pub sale_channels: usize,
}

impl CountryStat<'_> {
    pub fn has_sales(&self) -> bool {
        self.sale_channels > 0
    }
}

/// Group by upper-cased country code; countries without coordinates
/// (or channels without a country) are left off the map.
pub fn group_by_country(items: &[ChannelHighlight]) -> Vec<CountryStat<'_>> {
    let mut by_code: BTreeMap<String, Vec<&ChannelHighlight>> = BTreeMap::new();
    for ch in items {
        let Some(code) = ch.country.as_deref().map(|c| c.trim().to_ascii_uppercase()) else { continue };
        if country_coords(&code).is_some() {
            by_code.entry(code).or_default().push(ch);
        }
    }
    by_code
        .into_iter()
        .filter_map(|(code, channels)| {
            let (lon, lat) = country_coords(&code)?;
            let sale_channels = channels.iter().filter(|c| c.is_running_sales).count();
            Some(CountryStat { code, lon, lat, channels, sale_channels })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityType;

    fn highlight(name: &str, country: Option<&str>, sales: bool) -> ChannelHighlight {
        ChannelHighlight {
            channel_id: 1,
            channel_name: s!(name),
            channel_url: format!("https://{}.example", name.to_lowercase()),
            instagram_url: None,
            channel_type: None,
            country: country.map(String::from),
            total_product_count: 10,
            sale_product_count: if sales { 3 } else { 0 },
            new_product_count: 0,
            is_running_sales: sales,
            is_selling_new_products: false,
        }
    }

    #[test]
    fn price_text_strips_separators() {
        assert_eq!(parse_price("150,000"), Some(150_000));
        assert_eq!(parse_price(" ₩ 90,000 "), Some(90_000));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("-5"), None);
    }

    #[test]
    fn sale_form_leaves_blank_fields_unset() {
        let form = SaleFilterForm { gender: s!("men"), min_price: s!("10,000"), ..Default::default() };
        let f = form.to_filters();
        assert_eq!(f.gender.as_deref(), Some("men"));
        assert_eq!(f.category, None);
        assert_eq!(f.min_price, Some(10_000));
        assert_eq!(f.max_price, None);
    }

    #[test]
    fn channel_filter_combines_query_and_sales_toggle() {
        let items = vec![highlight("KITH", Some("US"), true), highlight("Kasina", Some("kr"), false)];
        assert_eq!(filter_channels(&items, "k", false).len(), 2);
        let only = filter_channels(&items, "K", true);
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].channel_name, "KITH");
        assert_eq!(filter_channels(&items, "kasina.example", false).len(), 1);
    }

    #[test]
    fn map_groups_by_upper_case_code_and_skips_unknown() {
        let items = vec![
            highlight("A", Some("kr"), false),
            highlight("B", Some("KR"), true),
            highlight("C", Some("ZZ"), true),
            highlight("D", None, true),
        ];
        let groups = group_by_country(&items);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].code, "KR");
        assert_eq!(groups[0].channels.len(), 2);
        assert_eq!(groups[0].sale_channels, 1);
        assert!(groups[0].has_sales());
    }

    #[test]
    fn country_lookup_is_case_insensitive() {
        assert_eq!(country_coords("jp"), Some((138.2, 36.6)));
        assert_eq!(country_name("gb"), "영국");
        assert_eq!(country_name("XX"), "XX");
    }

    fn brand(name: &str, slug: &str, tier: Option<&str>) -> BrandHighlight {
        BrandHighlight {
            brand_id: 1,
            brand_name: s!(name),
            brand_slug: s!(slug),
            instagram_url: None,
            tier: tier.map(String::from),
            origin_country: None,
            total_product_count: 0,
            new_product_count: 0,
            is_selling_new_products: false,
        }
    }

    fn collab(name: &str, year: Option<i32>, hype: i64) -> CollabItem {
        CollabItem {
            id: 1,
            brand_a_id: 1,
            brand_b_id: 2,
            collab_name: s!(name),
            collab_category: None,
            release_year: year,
            hype_score: hype,
            source_url: None,
            notes: None,
            created_at: s!("2026-01-01T00:00:00"),
        }
    }

    #[test]
    fn brand_filter_applies_tier_and_query() {
        let items = vec![
            brand("Nike", "nike", Some("premium")),
            brand("Stussy", "stussy", Some("street")),
            brand("Kolor", "kolor", None),
        ];
        assert_eq!(filter_brands(&items, "", "all").len(), 3);
        assert_eq!(filter_brands(&items, "", "").len(), 3);

        let street = filter_brands(&items, "", "street");
        assert_eq!(street.len(), 1);
        assert_eq!(street[0].brand_slug, "stussy");

        // query matches name or slug, case-insensitive
        assert_eq!(filter_brands(&items, " KOL ", "all").len(), 1);
        assert!(filter_brands(&items, "nike", "street").is_empty());
    }

    #[test]
    fn director_filter_searches_name_brand_and_role() {
        let d = BrandDirector {
            id: 1,
            brand_id: 4,
            brand_name: Some(s!("Maison Margiela")),
            brand_slug: Some(s!("maison-margiela")),
            name: s!("John Galliano"),
            role: s!("Creative Director"),
            start_year: Some(2014),
            end_year: Some(2024),
            note: None,
            created_at: s!("2026-01-01T00:00:00"),
        };
        let items = vec![d];
        for q in ["galliano", "MARGIELA", "maison-margiela", "creative", ""] {
            assert_eq!(filter_directors(&items, q).len(), 1, "query {q:?}");
        }
        assert!(filter_directors(&items, "abloh").is_empty());
    }

    #[test]
    fn channel_picker_needs_a_query_and_caps_results() {
        let channels: Vec<Channel> = (0..12)
            .map(|i| Channel {
                id: i,
                name: format!("Shop {i}"),
                url: format!("https://shop{i}.example"),
                channel_type: None,
                platform: None,
                country: None,
                instagram_url: None,
                is_active: true,
            })
            .collect();
        assert!(pick_channels(&channels, "").is_empty());
        assert!(pick_channels(&channels, "   ").is_empty());
        assert_eq!(pick_channels(&channels, "shop").len(), WATCH_CHANNEL_PICKER_LIMIT);
        assert_eq!(WATCH_CHANNEL_PICKER_LIMIT, 8);
        assert_eq!(pick_channels(&channels, "shop11.example").len(), 1);
    }

    #[test]
    fn collab_timeline_orders_by_year_then_hype() {
        let items = vec![
            collab("undated", None, 99),
            collab("old", Some(2015), 50),
            collab("new-low", Some(2024), 10),
            collab("new-high", Some(2024), 80),
        ];
        let names: Vec<&str> = collab_timeline(&items).iter().map(|c| c.collab_name.as_str()).collect();
        assert_eq!(names, ["new-high", "new-low", "old", "undated"]);
    }

    #[test]
    fn news_source_filter_keeps_selected_source() {
        let news = |id: i64, source: &str| FashionNews {
            id,
            entity_type: EntityType::Brand,
            entity_id: 1,
            entity_name: None,
            title: format!("t{id}"),
            url: format!("https://n.example/{id}"),
            summary: None,
            published_at: None,
            source: s!(source),
            crawled_at: s!("2026-01-01T00:00:00"),
        };
        let items = || vec![news(1, "hypebeast.com"), news(2, "highsnobiety.com"), news(3, "hypebeast.com")];

        let only: Vec<i64> = filter_news_source(items(), Some("hypebeast.com")).iter().map(|n| n.id).collect();
        assert_eq!(only, [1, 3]);
        assert_eq!(filter_news_source(items(), None).len(), 3);
        assert_eq!(filter_news_source(items(), Some("")).len(), 3);
        assert!(filter_news_source(items(), Some("vogue.com")).is_empty());
    }

    #[test]
    fn crawl_filter_parses_labels() {
        assert_eq!("all".parse::<CrawlFilter>(), Ok(CrawlFilter::All));
        assert_eq!(" Stale ".parse::<CrawlFilter>(), Ok(CrawlFilter::Only(CrawlState::Stale)));
        assert!("broken".parse::<CrawlFilter>().is_err());
    }
}
