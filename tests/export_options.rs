// tests/export_options.rs
//
// ExportOptions path/extension logic.
//
use std::path::{Path, PathBuf};

use fashion_console::config::options::{ExportFormat, ExportOptions, PageKind};

fn norm(p: &Path) -> PathBuf { p.components().collect() }

#[test]
fn default_path_follows_format_while_untouched() {
    let mut opts = ExportOptions::default();
    opts.set_default_path_for_page(PageKind::Sales);
    assert!(opts.is_default_for(PageKind::Sales));
    assert_eq!(norm(&opts.out_path()), norm(Path::new("out/sales/sales.csv")));

    opts.format = ExportFormat::Tsv;
    assert_eq!(norm(&opts.out_path()), norm(Path::new("out/sales/sales.tsv")));
}

#[test]
fn page_switch_moves_default_dir() {
    let mut opts = ExportOptions::default();
    opts.set_default_path_for_page(PageKind::Channels);
    assert_eq!(norm(opts.current_dir()), norm(&ExportOptions::default_dir_for(PageKind::Channels)));

    opts.set_default_path_for_page(PageKind::Admin);
    assert!(!opts.is_default_for(PageKind::Channels));
    assert_eq!(norm(&opts.out_path()), norm(Path::new("out/admin/admin.csv")));
}

#[test]
fn typed_extension_survives_format_change() {
    let mut opts = ExportOptions::default();
    opts.set_path("out/brands/custom.data");
    opts.format = ExportFormat::Tsv;
    assert!(opts.out_path().to_string_lossy().ends_with("custom.data"));
    assert!(!opts.is_default_for(PageKind::Brands));
}

#[test]
fn typed_stem_without_extension_gets_format_extension() {
    let mut opts = ExportOptions::default();
    opts.set_path("  exports/watch  ");
    assert_eq!(norm(&opts.out_path()), norm(Path::new("exports/watch.csv")));
    opts.format = ExportFormat::Tsv;
    assert_eq!(norm(&opts.out_path()), norm(Path::new("exports/watch.tsv")));
}

#[test]
fn page_slugs_are_distinct_export_dirs() {
    let mut dirs: Vec<PathBuf> = PageKind::NAV.iter().map(|k| ExportOptions::default_dir_for(*k)).collect();
    dirs.sort();
    dirs.dedup();
    assert_eq!(dirs.len(), PageKind::NAV.len());
}
