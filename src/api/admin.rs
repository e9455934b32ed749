// src/api/admin.rs
//
// Bearer-token endpoints under `/admin`. All of them fail fast with
// `ApiError::MissingToken` when the client has no token.

use reqwest::Method;

use super::{ApiClient, ApiResult};
use crate::model::{
    AdminAudit, AdminChannelHealth, AdminCollabItem, AdminCrawlStatus, AdminCreated, AdminOk, AdminStats,
    BrandDirector, CollabInput, CrawlJob, CrawlRunDetail, CrawlRunOut, CrawlTriggerResult, DirectorInput,
    InstagramPatch, InstagramResult,
};

const NO_BODY: Option<&()> = None;

fn page(limit: u32, offset: u32) -> [(&'static str, String); 2] {
    [("limit", limit.to_string()), ("offset", offset.to_string())]
}

impl ApiClient {
    pub fn admin_stats(&self) -> ApiResult<AdminStats> {
        self.admin_get(&["admin", "stats"], &[])
    }

    pub fn admin_channels_health(&self, limit: u32, offset: u32) -> ApiResult<Vec<AdminChannelHealth>> {
        self.admin_get(&["admin", "channels-health"], &page(limit, offset))
    }

    pub fn admin_crawl_status(&self, limit: u32, offset: u32) -> ApiResult<Vec<AdminCrawlStatus>> {
        self.admin_get(&["admin", "crawl-status"], &page(limit, offset))
    }

    pub fn trigger_crawl(&self, job: CrawlJob, dry_run: bool) -> ApiResult<CrawlTriggerResult> {
        logf!("Admin: trigger crawl job={} dry_run={}", job.as_str(), dry_run);
        self.admin_send(
            Method::POST,
            &["admin", "crawl-trigger"],
            &[("job", s!(job.as_str())), ("dry_run", dry_run.to_string())],
            NO_BODY,
        )
    }

    pub fn trigger_channel_crawl(&self, channel_id: i64, dry_run: bool) -> ApiResult<CrawlTriggerResult> {
        logf!("Admin: trigger channel crawl id={} dry_run={}", channel_id, dry_run);
        self.admin_send(
            Method::POST,
            &["admin", "crawl-trigger"],
            &[
                ("job", s!("channel")),
                ("channel_id", channel_id.to_string()),
                ("dry_run", dry_run.to_string()),
            ],
            NO_BODY,
        )
    }

    pub fn admin_directors(&self, brand_id: Option<i64>) -> ApiResult<Vec<BrandDirector>> {
        let q: Vec<(&str, String)> = brand_id.map(|id| ("brand_id", id.to_string())).into_iter().collect();
        self.admin_get(&["admin", "directors"], &q)
    }

    pub fn create_director(&self, input: &DirectorInput) -> ApiResult<AdminCreated> {
        logf!("Admin: create director {} ({:?})", input.name, input.brand_slug);
        self.admin_send(Method::POST, &["admin", "directors"], &[], Some(input))
    }

    pub fn delete_director(&self, id: i64) -> ApiResult<AdminOk> {
        logf!("Admin: delete director {}", id);
        self.admin_send(Method::DELETE, &["admin", "directors", id.to_string().as_str()], &[], NO_BODY)
    }

    /// `None` or a blank URL clears the field.
    pub fn patch_brand_instagram(&self, brand_id: i64, url: Option<&str>) -> ApiResult<InstagramResult> {
        logf!("Admin: brand {} instagram → {:?}", brand_id, url);
        self.admin_send(
            Method::PATCH,
            &["admin", "brands", brand_id.to_string().as_str(), "instagram"],
            &[],
            Some(&InstagramPatch::new(url)),
        )
    }

    pub fn patch_channel_instagram(&self, channel_id: i64, url: Option<&str>) -> ApiResult<InstagramResult> {
        logf!("Admin: channel {} instagram → {:?}", channel_id, url);
        self.admin_send(
            Method::PATCH,
            &["admin", "channels", channel_id.to_string().as_str(), "instagram"],
            &[],
            Some(&InstagramPatch::new(url)),
        )
    }

    pub fn admin_collabs(&self, limit: u32, offset: u32) -> ApiResult<Vec<AdminCollabItem>> {
        self.admin_get(&["admin", "collabs"], &page(limit, offset))
    }

    pub fn create_collab(&self, input: &CollabInput) -> ApiResult<AdminCreated> {
        logf!("Admin: create collab {}", input.collab_name);
        self.admin_send(Method::POST, &["admin", "collabs"], &[], Some(input))
    }

    pub fn delete_collab(&self, id: i64) -> ApiResult<AdminOk> {
        logf!("Admin: delete collab {}", id);
        self.admin_send(Method::DELETE, &["admin", "collabs", id.to_string().as_str()], &[], NO_BODY)
    }

    pub fn brand_channel_audit(&self, limit: u32) -> ApiResult<AdminAudit> {
        self.admin_get(&["admin", "brand-channel-audit"], &[("limit", limit.to_string())])
    }

    pub fn crawl_runs(&self, limit: u32) -> ApiResult<Vec<CrawlRunOut>> {
        self.admin_get(&["admin", "crawl-runs"], &[("limit", limit.to_string())])
    }

    pub fn crawl_run(&self, id: i64) -> ApiResult<CrawlRunDetail> {
        self.admin_get(&["admin", "crawl-runs", id.to_string().as_str()], &[])
    }
}
