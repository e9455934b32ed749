// src/api/products.rs
use super::{ApiClient, ApiResult};
use crate::config::consts::SEARCH_LIMIT;
use crate::model::{
    ChannelPriceHistory, MultiChannelProduct, PriceComparison, Product, SaleCount, SaleFilters, SaleHighlight,
};

impl ApiClient {
    /// `GET /products/sales?limit=&brand=`
    pub fn sale_products(&self, limit: u32, brand: Option<&str>) -> ApiResult<Vec<Product>> {
        let mut q = vec![("limit", limit.to_string())];
        if let Some(b) = brand.filter(|b| !b.is_empty()) {
            q.push(("brand", s!(b)));
        }
        self.get(&["products", "sales"], &q)
    }

    pub fn search_products(&self, query: &str) -> ApiResult<Vec<Product>> {
        self.get(&["products", "search"], &[("q", s!(query)), ("limit", SEARCH_LIMIT.to_string())])
    }

    pub fn related_searches(&self, query: &str, limit: u32) -> ApiResult<Vec<String>> {
        self.get(&["products", "related-searches"], &[("q", s!(query)), ("limit", limit.to_string())])
    }

    pub fn price_comparison(&self, product_key: &str) -> ApiResult<PriceComparison> {
        self.get(&["products", "compare", product_key], &[])
    }

    pub fn sale_highlights(&self, limit: u32, offset: u32, filters: &SaleFilters) -> ApiResult<Vec<SaleHighlight>> {
        let mut q = vec![("limit", limit.to_string()), ("offset", offset.to_string())];
        q.extend(filters.query_pairs());
        self.get(&["products", "sales-highlights"], &q)
    }

    /// No query string at all when the filters are empty.
    pub fn sale_count(&self, filters: &SaleFilters) -> ApiResult<SaleCount> {
        self.get(&["products", "sales-count"], &filters.query_pairs())
    }

    pub fn price_history(&self, product_key: &str, days: u32) -> ApiResult<Vec<ChannelPriceHistory>> {
        self.get(&["products", "price-history", product_key], &[("days", days.to_string())])
    }

    pub fn archived_products(&self, limit: u32, offset: u32) -> ApiResult<Vec<Product>> {
        self.get(&["products", "archive"], &[("limit", limit.to_string()), ("offset", offset.to_string())])
    }

    pub fn multi_channel_products(
        &self,
        limit: u32,
        offset: u32,
        min_channels: u32,
    ) -> ApiResult<Vec<MultiChannelProduct>> {
        self.get(
            &["products", "multi-channel"],
            &[
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
                ("min_channels", min_channels.to_string()),
            ],
        )
    }
}
