// src/api/catalog.rs
//
// Channels, watchlist and drops.

use super::{ApiClient, ApiResult};
use crate::model::{Channel, ChannelHighlight, ProductDrop, WatchListInput, WatchListItem};

impl ApiClient {
    pub fn channels(&self) -> ApiResult<Vec<Channel>> {
        self.get(&["channels", ""], &[])
    }

    pub fn channel_highlights(&self, limit: u32, offset: u32) -> ApiResult<Vec<ChannelHighlight>> {
        self.get(&["channels", "highlights"], &[("limit", limit.to_string()), ("offset", offset.to_string())])
    }

    pub fn watchlist(&self) -> ApiResult<Vec<WatchListItem>> {
        self.get(&["watchlist", ""], &[])
    }

    pub fn add_watchlist_item(&self, item: &WatchListInput) -> ApiResult<WatchListItem> {
        logf!("Watchlist: add {} {}", item.watch_type.as_str(), item.watch_value);
        self.post(&["watchlist", ""], item)
    }

    pub fn delete_watchlist_item(&self, id: i64) -> ApiResult<()> {
        logf!("Watchlist: delete {}", id);
        self.delete(&["watchlist", id.to_string().as_str()])
    }

    pub fn upcoming_drops(&self) -> ApiResult<Vec<ProductDrop>> {
        self.get(&["drops", "upcoming"], &[])
    }

    pub fn drops(&self, status: Option<&str>) -> ApiResult<Vec<ProductDrop>> {
        let q: Vec<(&str, String)> = status.filter(|st| !st.is_empty()).map(|st| ("status", s!(st))).into_iter().collect();
        self.get(&["drops", ""], &q)
    }
}
