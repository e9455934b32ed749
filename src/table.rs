// src/table.rs
//
// Typed rows → headers + string cells. One shape feeds the GUI tables,
// Copy/Export and the CLI output.

use crate::format::{self, date_prefix, discount_badge, opt_krw, or_dash};
use crate::model::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_items<'a, T, I>(items: I) -> Self
    where
        T: Tabular + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        Self {
            headers: T::HEADERS.iter().map(|h| s!(*h)).collect(),
            rows: items.into_iter().map(T::row).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Space-aligned text for terminals. Widths count chars, not bytes.
    pub fn render_plain(&self) -> String {
        let cols = self.headers.len().max(self.rows.iter().map(Vec::len).max().unwrap_or(0));
        let mut widths = vec![0usize; cols];
        for row in std::iter::once(&self.headers).chain(self.rows.iter()) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let mut push_row = |row: &[String]| {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    line.push_str("  ");
                }
                line.push_str(cell);
                if i + 1 < row.len() {
                    let pad = widths[i].saturating_sub(cell.chars().count());
                    line.extend(std::iter::repeat_n(' ', pad));
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        };
        if !self.headers.is_empty() {
            push_row(&self.headers);
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            push_row(&rule);
        }
        for row in &self.rows {
            push_row(row);
        }
        out
    }
}

/// A wire type that can be shown as a table row.
pub trait Tabular {
    const HEADERS: &'static [&'static str];
    fn row(&self) -> Vec<String>;
}

fn opt<T: ToString>(v: &Option<T>) -> String {
    v.as_ref().map(|x| x.to_string()).unwrap_or_default()
}

fn yes(b: bool) -> String {
    s!(if b { "Y" } else { "" })
}

impl Tabular for SaleHighlight {
    const HEADERS: &'static [&'static str] =
        &["Product", "Channel", "Country", "Price", "Original", "Discount", "New", "Sold out", "Channels", "Key", "URL"];
    fn row(&self) -> Vec<String> {
        vec![
            self.product_name.clone(),
            self.channel_name.clone(),
            opt(&self.channel_country),
            self.price_krw.to_string(),
            opt_krw(self.original_price_krw),
            discount_badge(self.discount_rate).unwrap_or_default(),
            yes(self.is_new),
            yes(!self.is_active),
            self.total_channels.to_string(),
            opt(&self.product_key),
            self.product_url.clone(),
        ]
    }
}

impl Tabular for Product {
    const HEADERS: &'static [&'static str] = &["Id", "Name", "Key", "Gender", "Category", "Sale", "Sold out", "URL"];
    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            opt(&self.product_key),
            opt(&self.gender),
            opt(&self.subcategory),
            yes(self.is_sale),
            yes(self.is_sold_out()),
            self.url.clone(),
        ]
    }
}

impl Tabular for MultiChannelProduct {
    const HEADERS: &'static [&'static str] = &["Product", "Key", "Channels", "Min", "Max", "Spread", "Spread %"];
    fn row(&self) -> Vec<String> {
        vec![
            self.product_name.clone(),
            self.product_key.clone(),
            self.channel_count.to_string(),
            self.min_price_krw.to_string(),
            self.max_price_krw.to_string(),
            self.price_spread_krw.to_string(),
            format::percent(self.spread_rate_pct),
        ]
    }
}

impl Tabular for PriceComparisonItem {
    const HEADERS: &'static [&'static str] =
        &["Channel", "Country", "Type", "Official", "Price", "Original", "Discount", "URL"];
    fn row(&self) -> Vec<String> {
        vec![
            self.channel_name.clone(),
            opt(&self.channel_country),
            opt(&self.channel_type),
            yes(self.is_official),
            self.price_krw.to_string(),
            opt_krw(self.original_price_krw),
            discount_badge(self.discount_rate).unwrap_or_else(|| s!(if self.is_sale { "세일" } else { "" })),
            self.product_url.clone(),
        ]
    }
}

/// One row per history point, channel by channel.
pub fn price_history_table(series: &[ChannelPriceHistory]) -> Table {
    Table {
        headers: ["Channel", "Date", "Price", "Sale"].iter().map(|h| s!(*h)).collect(),
        rows: series
            .iter()
            .flat_map(|ch| {
                ch.history.iter().map(move |p| {
                    vec![ch.channel_name.clone(), date_prefix(Some(&p.date)), p.price_krw.to_string(), yes(p.is_sale)]
                })
            })
            .collect(),
    }
}

impl Tabular for Brand {
    const HEADERS: &'static [&'static str] = &["Id", "Name", "Slug", "Korean", "Country", "Tier", "Official", "Instagram"];
    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.slug.clone(),
            opt(&self.name_ko),
            opt(&self.origin_country),
            opt(&self.tier),
            opt(&self.official_url),
            opt(&self.instagram_url),
        ]
    }
}

impl Tabular for Channel {
    const HEADERS: &'static [&'static str] = &["Id", "Name", "Type", "Country", "Active", "URL", "Instagram"];
    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            opt(&self.channel_type),
            opt(&self.country),
            yes(self.is_active),
            self.url.clone(),
            opt(&self.instagram_url),
        ]
    }
}

impl Tabular for ChannelHighlight {
    const HEADERS: &'static [&'static str] =
        &["Id", "Channel", "Type", "Country", "Products", "Sale", "New", "Running sale", "URL"];
    fn row(&self) -> Vec<String> {
        vec![
            self.channel_id.to_string(),
            self.channel_name.clone(),
            opt(&self.channel_type),
            opt(&self.country),
            self.total_product_count.to_string(),
            self.sale_product_count.to_string(),
            self.new_product_count.to_string(),
            yes(self.is_running_sales),
            self.channel_url.clone(),
        ]
    }
}

impl Tabular for BrandHighlight {
    const HEADERS: &'static [&'static str] = &["Id", "Brand", "Slug", "Tier", "Country", "Products", "New"];
    fn row(&self) -> Vec<String> {
        vec![
            self.brand_id.to_string(),
            self.brand_name.clone(),
            self.brand_slug.clone(),
            opt(&self.tier),
            opt(&self.origin_country),
            self.total_product_count.to_string(),
            self.new_product_count.to_string(),
        ]
    }
}

impl Tabular for WatchListItem {
    const HEADERS: &'static [&'static str] = &["Id", "Type", "Value", "Notes"];
    fn row(&self) -> Vec<String> {
        vec![self.id.to_string(), s!(self.watch_type.as_str()), self.watch_value.clone(), opt(&self.notes)]
    }
}

impl Tabular for Purchase {
    const HEADERS: &'static [&'static str] =
        &["Id", "Product", "Key", "Channel", "Paid", "Original", "Purchased", "Notes"];
    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.product_name.clone(),
            self.product_key.clone(),
            self.channel_name.clone(),
            self.paid_price_krw.to_string(),
            opt_krw(self.original_price_krw),
            date_prefix(Some(&self.purchased_at)),
            opt(&self.notes),
        ]
    }
}

impl Tabular for ProductDrop {
    const HEADERS: &'static [&'static str] = &["Id", "Product", "Status", "Release", "Price", "Key", "Source"];
    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.product_name.clone(),
            s!(self.status.label()),
            date_prefix(self.release_date.as_deref()),
            opt_krw(self.price_krw),
            opt(&self.product_key),
            self.source_url.clone(),
        ]
    }
}

impl Tabular for CollabItem {
    const HEADERS: &'static [&'static str] = &["Id", "Collab", "Category", "Year", "Hype", "Source"];
    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.collab_name.clone(),
            opt(&self.collab_category),
            opt(&self.release_year),
            self.hype_score.to_string(),
            opt(&self.source_url),
        ]
    }
}

impl Tabular for CollabHype {
    const HEADERS: &'static [&'static str] = &["Category", "Count", "Avg hype", "Max hype"];
    fn row(&self) -> Vec<String> {
        vec![
            self.category.clone(),
            self.count.to_string(),
            format!("{:.1}", self.avg_hype),
            format!("{:.0}", self.max_hype),
        ]
    }
}

impl Tabular for BrandDirector {
    const HEADERS: &'static [&'static str] = &["Id", "Name", "Role", "Brand", "Slug", "Tenure", "Note"];
    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.role.clone(),
            opt(&self.brand_name),
            opt(&self.brand_slug),
            self.tenure(),
            opt(&self.note),
        ]
    }
}

impl Tabular for FashionNews {
    const HEADERS: &'static [&'static str] = &["Published", "Source", "Entity", "Title", "URL"];
    fn row(&self) -> Vec<String> {
        vec![
            date_prefix(self.published_at.as_deref().or(Some(&self.crawled_at))),
            self.source.clone(),
            s!(or_dash(self.entity_name.as_deref())),
            self.title.clone(),
            self.url.clone(),
        ]
    }
}

impl Tabular for ExchangeRate {
    const HEADERS: &'static [&'static str] = &["Currency", "Rate", "Fetched"];
    fn row(&self) -> Vec<String> {
        vec![self.from_currency.clone(), format!("{:.4}", self.rate), date_prefix(self.fetched_at.as_deref())]
    }
}

impl Tabular for AdminChannelHealth {
    const HEADERS: &'static [&'static str] =
        &["Id", "Channel", "Type", "Country", "Brands", "Products", "Sale", "Health"];
    fn row(&self) -> Vec<String> {
        vec![
            self.channel_id.to_string(),
            self.name.clone(),
            opt(&self.channel_type),
            opt(&self.country),
            self.brand_count.to_string(),
            self.product_count.to_string(),
            self.sale_count.to_string(),
            s!(match self.health {
                Health::Ok => "ok",
                Health::NeedsReview => "needs_review",
            }),
        ]
    }
}

impl Tabular for AdminCrawlStatus {
    const HEADERS: &'static [&'static str] =
        &["Id", "Channel", "Type", "Products", "Active", "Inactive", "Last crawled", "Status"];
    fn row(&self) -> Vec<String> {
        vec![
            self.channel_id.to_string(),
            self.channel_name.clone(),
            opt(&self.channel_type),
            self.product_count.to_string(),
            self.active_count.to_string(),
            self.inactive_count.to_string(),
            date_prefix(self.last_crawled_at.as_deref()),
            s!(self.status.as_str()),
        ]
    }
}

impl Tabular for AdminCollabItem {
    const HEADERS: &'static [&'static str] = &["Id", "Collab", "Brand A", "Category", "Year", "Hype"];
    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.collab_name.clone(),
            s!(or_dash(self.brand_a_name.as_deref())),
            opt(&self.collab_category),
            opt(&self.release_year),
            self.hype_score.to_string(),
        ]
    }
}

impl Tabular for AdminAuditItem {
    const HEADERS: &'static [&'static str] = &["Type", "Channel", "Brands", "Reason", "Suggestion", "URL"];
    fn row(&self) -> Vec<String> {
        vec![
            self.audit_type.clone(),
            self.channel_name.clone(),
            self.brand_count.to_string(),
            self.reason.clone(),
            self.suggestion.clone(),
            self.channel_url.clone(),
        ]
    }
}

impl Tabular for CrawlRunOut {
    const HEADERS: &'static [&'static str] =
        &["Id", "Started", "Finished", "Status", "Done", "Total", "New", "Updated", "Errors"];
    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.started_at.clone(),
            opt(&self.finished_at),
            s!(match self.status {
                RunStatus::Running => "running",
                RunStatus::Done => "done",
                RunStatus::Failed => "failed",
            }),
            self.done_channels.to_string(),
            self.total_channels.to_string(),
            self.new_products.to_string(),
            self.updated_products.to_string(),
            self.error_channels.to_string(),
        ]
    }
}

impl Tabular for CrawlChannelLog {
    const HEADERS: &'static [&'static str] =
        &["Channel", "Status", "Found", "New", "Updated", "Strategy", "ms", "Error"];
    fn row(&self) -> Vec<String> {
        vec![
            self.channel_name.clone(),
            s!(match self.status {
                ChannelLogStatus::Success => "success",
                ChannelLogStatus::Failed => "failed",
                ChannelLogStatus::Skipped => "skipped",
            }),
            self.products_found.to_string(),
            self.products_new.to_string(),
            self.products_updated.to_string(),
            opt(&self.strategy),
            self.duration_ms.to_string(),
            opt(&self.error_msg),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_plain_aligns_on_char_width() {
        let t = Table {
            headers: vec![s!("Name"), s!("N")],
            rows: vec![vec![s!("무신사"), s!("1")], vec![s!("KITH"), s!("20")]],
        };
        let txt = t.render_plain();
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines[0], "Name  N");
        assert_eq!(lines[1], "----  --");
        assert_eq!(lines[2], "무신사   1");
        assert_eq!(lines[3], "KITH  20");
    }

    #[test]
    fn from_items_uses_type_headers() {
        let items = vec![WatchListItem {
            id: 3,
            watch_type: WatchType::ProductKey,
            watch_value: s!("nike:dunk-low"),
            notes: None,
        }];
        let t = Table::from_items(&items);
        assert_eq!(t.headers, vec!["Id", "Type", "Value", "Notes"]);
        assert_eq!(t.rows[0], vec!["3", "product_key", "nike:dunk-low", ""]);
    }
}
