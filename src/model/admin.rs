// src/model/admin.rs
//
// Admin-only shapes (bearer-token endpoints) and the admin form drafts.

use serde::{Deserialize, Serialize};

use crate::config::consts::DEFAULT_DIRECTOR_ROLE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminCounts {
    pub channels: u64,
    pub channel_brands: u64,
    pub products: u64,
    pub price_history: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestCrawls {
    pub brands: Option<String>,
    pub products: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub from_currency: String,
    pub rate: f64,
    pub fetched_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub counts: AdminCounts,
    pub latest_crawls: LatestCrawls,
    #[serde(default)]
    pub exchange_rates: Vec<ExchangeRate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Health {
    Ok,
    NeedsReview,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminChannelHealth {
    pub channel_id: i64,
    pub name: String,
    pub url: String,
    pub channel_type: Option<String>,
    pub country: Option<String>,
    pub brand_count: u64,
    pub product_count: u64,
    pub sale_count: u64,
    pub health: Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlState {
    Ok,
    Never,
    Stale,
}

impl CrawlState {
    pub fn as_str(self) -> &'static str {
        match self {
            CrawlState::Ok => "ok",
            CrawlState::Never => "never",
            CrawlState::Stale => "stale",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminCrawlStatus {
    pub channel_id: i64,
    pub channel_name: String,
    pub channel_url: String,
    pub channel_type: Option<String>,
    pub product_count: u64,
    pub active_count: u64,
    pub inactive_count: u64,
    pub last_crawled_at: Option<String>,
    pub status: CrawlState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminCollabItem {
    pub id: i64,
    pub brand_a_id: i64,
    pub brand_b_id: i64,
    pub collab_name: String,
    pub collab_category: Option<String>,
    pub release_year: Option<i32>,
    pub hype_score: i64,
    pub source_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub brand_a_name: Option<String>,
    pub brand_a_slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminAuditItem {
    pub audit_type: String,
    pub channel_id: i64,
    pub channel_name: String,
    pub channel_type: Option<String>,
    pub channel_url: String,
    pub brand_count: u64,
    #[serde(default)]
    pub linked_brands: Vec<String>,
    pub reason: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminAudit {
    pub total: u64,
    #[serde(default)]
    pub items: Vec<AdminAuditItem>,
}

/* ---------------- Crawl runs ---------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelLogStatus {
    Success,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlChannelLog {
    pub id: i64,
    pub channel_id: i64,
    pub channel_name: String,
    pub status: ChannelLogStatus,
    pub products_found: u64,
    pub products_new: u64,
    pub products_updated: u64,
    pub error_msg: Option<String>,
    pub strategy: Option<String>,
    pub duration_ms: u64,
    pub crawled_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Running,
    Done,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlRunOut {
    pub id: i64,
    pub started_at: String,
    pub finished_at: Option<String>,
    pub status: RunStatus,
    pub total_channels: u64,
    pub done_channels: u64,
    pub new_products: u64,
    pub updated_products: u64,
    pub error_channels: u64,
}

impl CrawlRunOut {
    /// Fraction of channels done, 0.0 when the run has no channels.
    pub fn progress(&self) -> f32 {
        if self.total_channels == 0 {
            0.0
        } else {
            (self.done_channels as f32 / self.total_channels as f32).clamp(0.0, 1.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlRunDetail {
    #[serde(flatten)]
    pub run: CrawlRunOut,
    #[serde(default)]
    pub logs: Vec<CrawlChannelLog>,
}

/* ---------------- Crawl triggers ---------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlJob {
    Brands,
    Products,
    Drops,
}

impl CrawlJob {
    pub const ALL: [CrawlJob; 3] = [CrawlJob::Brands, CrawlJob::Products, CrawlJob::Drops];

    pub fn as_str(self) -> &'static str {
        match self {
            CrawlJob::Brands => "brands",
            CrawlJob::Products => "products",
            CrawlJob::Drops => "drops",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            CrawlJob::Brands => "브랜드 크롤 실행",
            CrawlJob::Products => "제품 크롤 실행",
            CrawlJob::Drops => "드롭 크롤 실행",
        }
    }
}

impl std::str::FromStr for CrawlJob {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brands" => Ok(CrawlJob::Brands),
            "products" => Ok(CrawlJob::Products),
            "drops" => Ok(CrawlJob::Drops),
            other => Err(format!("Unknown job: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlTriggerResult {
    pub ok: bool,
    pub job: String,
    #[serde(default)]
    pub dry_run: bool,
    pub pid: Option<u32>,
    pub command: String,
}

impl CrawlTriggerResult {
    /// Status line shown after a trigger: "brands 크롤 트리거됨 (pid=123)".
    pub fn summary(&self) -> String {
        let pid = self.pid.map(|p| p.to_string()).unwrap_or_else(|| s!("-"));
        if self.dry_run {
            format!("{} dry-run: {}", self.job, self.command)
        } else {
            format!("{} 크롤 트리거됨 (pid={pid})", self.job)
        }
    }
}

/* ---------------- Admin writes ---------------- */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminOk {
    pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminCreated {
    pub ok: bool,
    pub id: i64,
}

/// PATCH body; `None` serializes as `null` and clears the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstagramPatch {
    pub instagram_url: Option<String>,
}

impl InstagramPatch {
    pub fn new(url: Option<&str>) -> Self {
        Self { instagram_url: url.map(str::trim).filter(|u| !u.is_empty()).map(String::from) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstagramResult {
    pub ok: bool,
    pub id: i64,
    pub instagram_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectorInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_slug: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollabInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_a_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_b_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_a_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_b_slug: Option<String>,
    pub collab_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collab_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hype_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn trimmed(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| s!(t))
}

/// Blank → None; anything that doesn't parse → None as well.
fn number<T: std::str::FromStr>(s: &str) -> Option<T> {
    s.trim().parse().ok()
}

/// Text state of the director form.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorDraft {
    pub brand_slug: String,
    pub name: String,
    pub role: String,
    pub start_year: String,
    pub end_year: String,
    pub note: String,
}

impl Default for DirectorDraft {
    fn default() -> Self {
        Self {
            brand_slug: s!(),
            name: s!(),
            role: s!(DEFAULT_DIRECTOR_ROLE),
            start_year: s!(),
            end_year: s!(),
            note: s!(),
        }
    }
}

impl DirectorDraft {
    pub fn to_input(&self) -> Result<DirectorInput, String> {
        let (Some(brand_slug), Some(name)) = (trimmed(&self.brand_slug), trimmed(&self.name)) else {
            return Err(s!("브랜드 slug와 디렉터 이름을 입력하세요."));
        };
        Ok(DirectorInput {
            brand_id: None,
            brand_slug: Some(brand_slug),
            name,
            role: Some(trimmed(&self.role).unwrap_or_else(|| s!(DEFAULT_DIRECTOR_ROLE))),
            start_year: number(&self.start_year),
            end_year: number(&self.end_year),
            note: trimmed(&self.note),
        })
    }
}

/// Text state of the collaboration form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollabDraft {
    pub brand_a_slug: String,
    pub brand_b_slug: String,
    pub collab_name: String,
    pub collab_category: String,
    pub release_year: String,
    pub hype_score: String,
    pub source_url: String,
    pub notes: String,
}

impl CollabDraft {
    /// A blank hype score is left for the server to compute.
    pub fn to_input(&self) -> Result<CollabInput, String> {
        let (Some(a), Some(b), Some(name)) = (
            trimmed(&self.brand_a_slug),
            trimmed(&self.brand_b_slug),
            trimmed(&self.collab_name),
        ) else {
            return Err(s!("협업 등록은 brand_a_slug / brand_b_slug / collab_name이 필수입니다."));
        };
        Ok(CollabInput {
            brand_a_slug: Some(a),
            brand_b_slug: Some(b),
            collab_name: name,
            collab_category: trimmed(&self.collab_category),
            release_year: number(&self.release_year),
            hype_score: number(&self.hype_score),
            source_url: trimmed(&self.source_url),
            notes: trimmed(&self.notes),
            ..CollabInput::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn director_draft_requires_slug_and_name() {
        let mut d = DirectorDraft::default();
        d.name = s!("Virgil Abloh");
        assert!(d.to_input().is_err());

        d.brand_slug = s!("  louis-vuitton ");
        d.role = s!("   ");
        d.start_year = s!("2018");
        d.end_year = s!("later");
        let input = d.to_input().unwrap();
        assert_eq!(input.brand_slug.as_deref(), Some("louis-vuitton"));
        assert_eq!(input.role.as_deref(), Some(DEFAULT_DIRECTOR_ROLE));
        assert_eq!(input.start_year, Some(2018));
        assert_eq!(input.end_year, None);
    }

    #[test]
    fn director_input_omits_unset_fields() {
        let input = DirectorInput { brand_slug: Some(s!("nike")), name: s!("A"), ..Default::default() };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"brand_slug": "nike", "name": "A"}));
    }

    #[test]
    fn collab_draft_leaves_blank_hype_to_server() {
        let d = CollabDraft {
            brand_a_slug: s!("nike"),
            brand_b_slug: s!("stussy"),
            collab_name: s!("Nike x Stussy"),
            collab_category: s!("footwear"),
            release_year: s!("2021"),
            ..CollabDraft::default()
        };
        let input = d.to_input().unwrap();
        assert_eq!(input.hype_score, None);
        assert_eq!(input.release_year, Some(2021));
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("hype_score").is_none());
        assert_eq!(json["collab_category"], "footwear");
    }

    #[test]
    fn instagram_patch_blank_clears() {
        let json = serde_json::to_string(&InstagramPatch::new(Some("  "))).unwrap();
        assert_eq!(json, r#"{"instagram_url":null}"#);
    }

    #[test]
    fn crawl_run_detail_flattens_run_fields() {
        let raw = r#"{
            "id": 7, "started_at": "2026-03-01T02:00:00", "finished_at": null,
            "status": "running", "total_channels": 40, "done_channels": 10,
            "new_products": 3, "updated_products": 12, "error_channels": 1,
            "logs": [{"id": 1, "channel_id": 5, "channel_name": "NUBIAN",
                      "status": "failed", "products_found": 0, "products_new": 0,
                      "products_updated": 0, "error_msg": "timeout", "strategy": null,
                      "duration_ms": 30000, "crawled_at": "2026-03-01T02:01:00"}]
        }"#;
        let detail: CrawlRunDetail = serde_json::from_str(raw).unwrap();
        assert_eq!(detail.run.id, 7);
        assert_eq!(detail.run.status, RunStatus::Running);
        assert!((detail.run.progress() - 0.25).abs() < f32::EPSILON);
        assert_eq!(detail.logs[0].status, ChannelLogStatus::Failed);
    }
}
