// src/api/purchases.rs
use super::{ApiClient, ApiResult};
use crate::model::{Purchase, PurchaseInput, PurchaseStats, Score};

impl ApiClient {
    pub fn purchases(&self, limit: u32) -> ApiResult<Vec<Purchase>> {
        self.get(&["purchases", ""], &[("limit", limit.to_string())])
    }

    pub fn purchase_stats(&self) -> ApiResult<PurchaseStats> {
        self.get(&["purchases", "stats"], &[])
    }

    pub fn create_purchase(&self, input: &PurchaseInput) -> ApiResult<Purchase> {
        logf!("Purchases: create {} @ {}", input.product_name, input.channel_name);
        self.post(&["purchases", ""], input)
    }

    pub fn purchase_score(&self, id: i64) -> ApiResult<Score> {
        self.get(&["purchases", id.to_string().as_str(), "score"], &[])
    }

    pub fn delete_purchase(&self, id: i64) -> ApiResult<()> {
        logf!("Purchases: delete {}", id);
        self.delete(&["purchases", id.to_string().as_str()])
    }
}
