// src/api/editorial.rs
//
// News, collaborations and director histories.

use super::{ApiClient, ApiResult};
use crate::model::{BrandDirector, CollabHype, CollabItem, FashionNews};

impl ApiClient {
    pub fn brand_news(&self, brand_slug: &str, limit: u32) -> ApiResult<Vec<FashionNews>> {
        self.get(&["news"], &[("brand_slug", s!(brand_slug)), ("limit", limit.to_string())])
    }

    pub fn news(&self, limit: u32, offset: u32) -> ApiResult<Vec<FashionNews>> {
        self.get(&["news"], &[("limit", limit.to_string()), ("offset", offset.to_string())])
    }

    pub fn collabs(&self, category: Option<&str>) -> ApiResult<Vec<CollabItem>> {
        let q: Vec<(&str, String)> =
            category.filter(|c| !c.is_empty()).map(|c| ("category", s!(c))).into_iter().collect();
        self.get(&["collabs", ""], &q)
    }

    pub fn collab_hype_by_category(&self) -> ApiResult<Vec<CollabHype>> {
        self.get(&["collabs", "hype-by-category"], &[])
    }

    pub fn directors(&self, limit: u32, offset: u32) -> ApiResult<Vec<BrandDirector>> {
        self.get(&["directors"], &[("limit", limit.to_string()), ("offset", offset.to_string())])
    }
}
