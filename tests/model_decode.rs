// tests/model_decode.rs
//
// Decoding representative API payloads into the wire types.

use fashion_console::model::*;
use fashion_console::table::{Table, price_history_table};

#[test]
fn sale_highlights_accept_decimal_prices_and_nulls() {
    let json = r#"[{
        "product_id": 11, "product_name": "Dunk Low Panda", "product_key": "nike:dunk-low-panda",
        "product_url": "https://shop.example/p/11", "image_url": null,
        "channel_name": "KITH", "channel_country": "US",
        "is_new": false, "is_active": true,
        "price_krw": 119000.0, "original_price_krw": "149000", "discount_rate": 20.1,
        "total_channels": 3
    }]"#;
    let items: Vec<SaleHighlight> = serde_json::from_str(json).unwrap();
    assert_eq!(items[0].price_krw, Krw(119_000));
    assert_eq!(items[0].original_price_krw, Some(Krw(149_000)));
    assert_eq!(items[0].image_url, None);

    let table = Table::from_items(&items);
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0].len(), table.headers.len());
}

#[test]
fn drops_keep_unknown_status_verbatim() {
    let json = r#"[
        {"id": 1, "brand_id": null, "product_name": "A", "product_key": null, "source_url": "u",
         "image_url": null, "price_krw": null, "release_date": "2026-03-01", "status": "upcoming",
         "detected_at": "2026-02-01T10:00:00", "notified_at": null},
        {"id": 2, "brand_id": 4, "product_name": "B", "product_key": "b", "source_url": "u",
         "image_url": null, "price_krw": 259000, "release_date": null, "status": "raffle",
         "detected_at": "2026-02-01T10:00:00", "notified_at": null}
    ]"#;
    let drops: Vec<ProductDrop> = serde_json::from_str(json).unwrap();
    assert_eq!(drops[0].status, DropStatus::Upcoming);
    assert_eq!(drops[1].status, DropStatus::Other("raffle".into()));
    assert_eq!(drops[1].status.label(), "raffle");

    let back = serde_json::to_value(&drops[1]).unwrap();
    assert_eq!(back["status"], "raffle");
}

#[test]
fn price_comparison_sorts_listings_and_flags_cheapest() {
    let listing = |name: &str, price: i64| {
        serde_json::json!({
            "channel_name": name, "channel_country": "KR", "channel_url": "https://c.example",
            "channel_type": "edit-shop", "is_official": false, "price_krw": price,
            "original_price_krw": null, "is_sale": false, "discount_rate": null,
            "product_url": "https://c.example/p", "image_url": null
        })
    };
    let json = serde_json::json!({
        "product_key": "arcteryx:beta-lt",
        "product_name": "Beta LT Jacket",
        "listings": [listing("B", 690000), listing("A", 590000), listing("C", 720000)],
        "cheapest_channel": "A",
        "cheapest_price_krw": 590000,
        "total_listings": 3
    });
    let cmp: PriceComparison = serde_json::from_value(json).unwrap();
    let names: Vec<&str> = cmp.sorted_listings().iter().map(|l| l.channel_name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
    assert!(cmp.is_cheapest(cmp.sorted_listings()[0]));
    assert!(!cmp.is_cheapest(&cmp.listings[0]));
    assert_eq!(cmp.hero_image(), None);
}

#[test]
fn price_history_without_points_defaults_to_empty() {
    let json = r#"[
        {"channel_name": "KITH", "history": [
            {"date": "2026-01-01", "price_krw": 150000, "is_sale": false},
            {"date": "2026-01-08", "price_krw": 120000, "is_sale": true}
        ]},
        {"channel_name": "END."}
    ]"#;
    let series: Vec<ChannelPriceHistory> = serde_json::from_str(json).unwrap();
    assert!(series[1].history.is_empty());

    let table = price_history_table(&series);
    assert_eq!(table.len(), 2);
}

#[test]
fn purchase_stats_without_best_deal() {
    let json = r#"{"total_purchases": 0, "total_paid_krw": 0, "total_savings_vs_full_krw": 0, "best_deal": null}"#;
    let st: PurchaseStats = serde_json::from_str(json).unwrap();
    assert_eq!(st.best_deal, None);
    assert_eq!(st.total_paid_krw, Krw(0));
}

#[test]
fn score_reports_missing_percentile() {
    let json = r#"{
        "purchase_id": 3, "product_key": "k", "product_name": "Tee", "paid_price_krw": 39000,
        "grade": "B", "percentile": null, "badge": "OK", "min_ever_krw": null,
        "max_ever_krw": null, "avg_krw": 41250.5, "data_points": 2,
        "savings_vs_full": null, "savings_vs_avg": 2251, "verdict": "fair"
    }"#;
    let sc: Score = serde_json::from_str(json).unwrap();
    assert_eq!(sc.percentile_text(), "데이터 부족 (2개)");
    assert_eq!(sc.avg_krw, Some(Krw(41_251)));
    assert!(sc.has_savings());
}

#[test]
fn admin_payloads_decode_enums() {
    let health: Vec<AdminChannelHealth> = serde_json::from_str(
        r#"[{"channel_id": 1, "name": "n", "url": "u", "channel_type": null, "country": "JP",
             "brand_count": 0, "product_count": 0, "sale_count": 0, "health": "needs_review"}]"#,
    )
    .unwrap();
    assert_eq!(health[0].health, Health::NeedsReview);

    let status: Vec<AdminCrawlStatus> = serde_json::from_str(
        r#"[{"channel_id": 2, "channel_name": "n", "channel_url": "u", "channel_type": null,
             "product_count": 10, "active_count": 8, "inactive_count": 2,
             "last_crawled_at": null, "status": "never"}]"#,
    )
    .unwrap();
    assert_eq!(status[0].status, CrawlState::Never);

    let audit: AdminAudit = serde_json::from_str(r#"{"total": 0}"#).unwrap();
    assert!(audit.items.is_empty());

    let trigger: CrawlTriggerResult = serde_json::from_str(
        r#"{"ok": true, "job": "brands", "pid": 4242, "command": "uv run scripts/crawl_brands.py"}"#,
    )
    .unwrap();
    assert!(!trigger.dry_run);
    assert!(trigger.summary().contains("4242"));
}

#[test]
fn news_entity_type_is_snake_case() {
    let json = r#"{"id": 5, "entity_type": "channel", "entity_id": 9, "entity_name": "SSENSE",
        "title": "t", "url": "https://n.example", "summary": null, "published_at": null,
        "source": "hypebeast.com", "crawled_at": "2026-02-02T00:00:00"}"#;
    let n: FashionNews = serde_json::from_str(json).unwrap();
    assert_eq!(n.entity_type, EntityType::Channel);
}
