// src/api/brands.rs
use super::{ApiClient, ApiResult};
use crate::model::{Brand, BrandDirector, BrandHighlight, Channel, CollabItem, Product};

impl ApiClient {
    pub fn brands(&self) -> ApiResult<Vec<Brand>> {
        self.get(&["brands", ""], &[])
    }

    pub fn search_brands(&self, query: &str) -> ApiResult<Vec<Brand>> {
        self.get(&["brands", "search"], &[("q", s!(query))])
    }

    pub fn brand_highlights(&self, limit: u32, offset: u32) -> ApiResult<Vec<BrandHighlight>> {
        self.get(&["brands", "highlights"], &[("limit", limit.to_string()), ("offset", offset.to_string())])
    }

    pub fn brand(&self, slug: &str) -> ApiResult<Brand> {
        self.get(&["brands", slug], &[])
    }

    pub fn brand_channels(&self, slug: &str) -> ApiResult<Vec<Channel>> {
        self.get(&["brands", slug, "channels"], &[])
    }

    /// `is_sale=true` is only sent when `sale_only` is set.
    pub fn brand_products(&self, slug: &str, sale_only: bool, limit: u32) -> ApiResult<Vec<Product>> {
        let mut q = vec![("limit", limit.to_string())];
        if sale_only {
            q.push(("is_sale", s!("true")));
        }
        self.get(&["brands", slug, "products"], &q)
    }

    pub fn brand_directors(&self, slug: &str) -> ApiResult<Vec<BrandDirector>> {
        self.get(&["brands", slug, "directors"], &[])
    }

    pub fn brand_collabs(&self, slug: &str) -> ApiResult<Vec<CollabItem>> {
        self.get(&["brands", slug, "collabs"], &[])
    }
}
