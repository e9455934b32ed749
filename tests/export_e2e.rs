// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use fashion_console::config::options::{AppOptions, ExportFormat};
use fashion_console::csv::parse_rows;
use fashion_console::file;
use fashion_console::model::{ChannelHighlight, WatchListItem, WatchType};
use fashion_console::table::Table;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("fashion_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn channel(name: &str, country: &str, sales: bool) -> ChannelHighlight {
    ChannelHighlight {
        channel_id: 1,
        channel_name: name.into(),
        channel_url: format!("https://{}.example", name.to_lowercase()),
        instagram_url: None,
        channel_type: Some("edit-shop".into()),
        country: Some(country.into()),
        total_product_count: 120,
        sale_product_count: if sales { 14 } else { 0 },
        new_product_count: 3,
        is_running_sales: sales,
        is_selling_new_products: true,
    }
}

#[test]
fn export_writes_into_nested_dir_and_reads_back() {
    let dir = tmp_dir("nested");
    let mut opts = AppOptions::default();
    opts.export.set_path(dir.join("a/b/channels").to_str().unwrap());

    let items = vec![channel("KITH", "US", true), channel("Kasina, Seoul", "KR", false)];
    let table = Table::from_items(&items);
    let written = file::write_export(&opts.export, &table).unwrap();
    assert!(written.ends_with("a/b/channels.csv"));

    let text = fs::read_to_string(&written).unwrap();
    let rows = parse_rows(&text, ExportFormat::Csv).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], table.headers);
    // the comma inside the name survives quoting
    assert_eq!(rows[2], table.rows[1]);
}

#[test]
fn tsv_without_headers() {
    let dir = tmp_dir("tsv");
    let mut opts = AppOptions::default();
    opts.export.format = ExportFormat::Tsv;
    opts.export.include_headers = false;
    opts.export.set_path(dir.join("watch").to_str().unwrap());

    let items = vec![WatchListItem {
        id: 4,
        watch_type: WatchType::Brand,
        watch_value: "our-legacy".into(),
        notes: Some("Our Legacy".into()),
    }];
    let written = file::write_export(&opts.export, &Table::from_items(&items)).unwrap();
    assert!(written.to_string_lossy().ends_with("watch.tsv"));

    let text = fs::read_to_string(&written).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("our-legacy\t"));
}

#[test]
fn export_into_a_file_path_fails_cleanly() {
    let dir = tmp_dir("blocked");
    let blocker = dir.join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let mut opts = AppOptions::default();
    opts.export.set_path(blocker.join("out").to_str().unwrap());
    let err = file::write_export(&opts.export, &Table::default()).unwrap_err();
    assert!(err.to_string().contains("not a directory"));
}

#[test]
fn resolve_out_path_handles_dir_hints() {
    let dir = tmp_dir("resolve");
    let hinted = format!("{}/sub/", dir.display());
    let p = file::resolve_single_out_path(&hinted, "export.csv").unwrap();
    assert!(p.ends_with("sub/export.csv"));
    assert!(dir.join("sub").is_dir());

    assert_eq!(file::resolve_single_out_path("", "export.csv").unwrap(), PathBuf::from("export.csv"));
    let plain = dir.join("x.json");
    assert_eq!(file::resolve_single_out_path(plain.to_str().unwrap(), "export.csv").unwrap(), plain);
}
