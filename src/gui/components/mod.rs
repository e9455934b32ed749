// src/gui/components/mod.rs
pub mod data_table;
pub mod export_bar;
pub mod nav;
pub mod price_chart;
pub mod product_card;
pub mod score_badge;
pub mod search_box;
pub mod stat_card;
