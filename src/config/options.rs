// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub api: ApiOptions,
    pub export: ExportOptions,
}

/* ---------------- Pages ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageKind {
    Dashboard,
    Sales,
    Channels,
    Brands,
    BrandDetail,
    Watchlist,
    Purchases,
    PurchaseNew,
    PurchaseScore,
    Drops,
    Collabs,
    Directors,
    News,
    Map,
    Compete,
    Compare,
    Admin,
}

impl PageKind {
    /// Pages reachable from the navigation sidebar, in display order.
    pub const NAV: [PageKind; 13] = [
        PageKind::Dashboard,
        PageKind::Sales,
        PageKind::Channels,
        PageKind::Brands,
        PageKind::Watchlist,
        PageKind::Purchases,
        PageKind::Drops,
        PageKind::Collabs,
        PageKind::Directors,
        PageKind::News,
        PageKind::Map,
        PageKind::Compete,
        PageKind::Admin,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PageKind::Dashboard => "대시보드",
            PageKind::Sales => "세일 제품",
            PageKind::Channels => "판매채널",
            PageKind::Brands => "브랜드",
            PageKind::BrandDetail => "브랜드 상세",
            PageKind::Watchlist => "관심목록",
            PageKind::Purchases => "구매이력",
            PageKind::PurchaseNew => "구매 추가",
            PageKind::PurchaseScore => "구매 점수",
            PageKind::Drops => "드롭",
            PageKind::Collabs => "협업",
            PageKind::Directors => "디렉터",
            PageKind::News => "뉴스",
            PageKind::Map => "세계지도",
            PageKind::Compete => "경쟁 제품",
            PageKind::Compare => "가격 비교",
            PageKind::Admin => "운영관리",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PageKind::Dashboard => "📊",
            PageKind::Sales => "🔥",
            PageKind::Channels => "🏪",
            PageKind::Brands | PageKind::BrandDetail => "🏷",
            PageKind::Watchlist => "❤",
            PageKind::Purchases | PageKind::PurchaseNew | PageKind::PurchaseScore => "🛍",
            PageKind::Drops => "🚀",
            PageKind::Collabs => "🤝",
            PageKind::Directors => "🎨",
            PageKind::News => "📰",
            PageKind::Map => "🗺",
            PageKind::Compete => "⚖",
            PageKind::Compare => "💱",
            PageKind::Admin => "⚙",
        }
    }

    /// Stable ASCII name, used for export sub-directories and CLI output.
    pub fn slug(self) -> &'static str {
        match self {
            PageKind::Dashboard => "dashboard",
            PageKind::Sales => "sales",
            PageKind::Channels => "channels",
            PageKind::Brands => "brands",
            PageKind::BrandDetail => "brand",
            PageKind::Watchlist => "watchlist",
            PageKind::Purchases => "purchases",
            PageKind::PurchaseNew => "purchase_new",
            PageKind::PurchaseScore => "purchase_score",
            PageKind::Drops => "drops",
            PageKind::Collabs => "collabs",
            PageKind::Directors => "directors",
            PageKind::News => "news",
            PageKind::Map => "map",
            PageKind::Compete => "compete",
            PageKind::Compare => "compare",
            PageKind::Admin => "admin",
        }
    }

    /// Which nav entry is highlighted while this page is open.
    pub fn nav_parent(self) -> PageKind {
        match self {
            PageKind::BrandDetail => PageKind::Brands,
            PageKind::PurchaseNew | PageKind::PurchaseScore => PageKind::Purchases,
            PageKind::Compare => PageKind::Sales,
            other => other,
        }
    }
}

/* ---------------- API ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    pub base_url: String,
    pub admin_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            base_url: s!(DEFAULT_API_BASE),
            admin_token: None,
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ApiOptions {
    /// Layer persisted settings, then environment values, over the defaults.
    /// Blank values never override.
    pub fn resolve(
        persisted_base: Option<&str>,
        persisted_token: Option<&str>,
        env_base: Option<&str>,
        env_token: Option<&str>,
    ) -> Self {
        let mut opts = Self::default();
        for base in [persisted_base, env_base].into_iter().flatten() {
            if !base.trim().is_empty() {
                opts.base_url = normalize_base_url(base);
            }
        }
        for token in [persisted_token, env_token].into_iter().flatten() {
            if !token.trim().is_empty() {
                opts.admin_token = Some(s!(token.trim()));
            }
        }
        opts
    }

    /// `resolve` fed from the settings file and the process environment.
    pub fn from_env_and_store() -> Self {
        let settings = crate::store::load_settings().unwrap_or_default();
        let env_base = std::env::var(ENV_API_URL).ok();
        let env_token = std::env::var(ENV_ADMIN_TOKEN).ok();
        Self::resolve(
            settings.api_base.as_deref(),
            settings.admin_token.as_deref(),
            env_base.as_deref(),
            env_token.as_deref(),
        )
    }

    pub fn token(&self) -> Option<&str> {
        self.admin_token.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// Trim whitespace and trailing slashes so paths can be appended verbatim.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    pub fn delim(&self) -> u8 {
        match self {
            ExportFormat::Csv => b',',
            ExportFormat::Tsv => b'\t',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default_for(PageKind::Dashboard),
        }
    }
}

impl ExportOptions {
    /// `out/<page>` — the directory a page exports into by default.
    pub fn default_dir_for(kind: PageKind) -> PathBuf {
        PathBuf::from(DEFAULT_OUT_DIR).join(kind.slug())
    }

    /// Point DIR and stem at the page defaults.
    pub fn set_default_path_for_page(&mut self, kind: PageKind) {
        self.out_path = OutputPath::default_for(kind);
    }

    pub fn is_default_for(&self, kind: PageKind) -> bool {
        self.out_path == OutputPath::default_for(kind)
    }

    /// Final file path: `<dir>/<stem>.<ext>`, unless the user typed an
    /// explicit extension, which is kept.
    pub fn out_path(&self) -> PathBuf {
        let name = match &self.out_path.ext {
            Some(ext) => join!(self.out_path.file_stem.to_string_lossy(), ".", &ext.to_string_lossy()),
            None => join!(self.out_path.file_stem.to_string_lossy(), ".", self.format.ext()),
        };
        self.out_path.dir.join(name)
    }

    pub fn current_dir(&self) -> &Path {
        &self.out_path.dir
    }

    /// Parse GUI text into dir + stem (+ explicit extension if present).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>,
}

impl OutputPath {
    fn default_for(kind: PageKind) -> Self {
        Self {
            dir: ExportOptions::default_dir_for(kind),
            file_stem: OsString::from(kind.slug()),
            ext: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_options_default_without_sources() {
        let opts = ApiOptions::resolve(None, None, None, None);
        assert_eq!(opts, ApiOptions::default());
        assert_eq!(opts.base_url, DEFAULT_API_BASE);
        assert_eq!(opts.token(), None);
    }

    #[test]
    fn api_options_settings_override_defaults() {
        let opts = ApiOptions::resolve(Some("http://saved:8000/"), Some("saved-token"), None, None);
        assert_eq!(opts.base_url, "http://saved:8000");
        assert_eq!(opts.token(), Some("saved-token"));
    }

    #[test]
    fn api_options_env_overrides_settings() {
        let opts = ApiOptions::resolve(
            Some("http://saved:8000"),
            Some("saved-token"),
            Some(" http://env:9000// "),
            Some(" env-token "),
        );
        assert_eq!(opts.base_url, "http://env:9000");
        assert_eq!(opts.token(), Some("env-token"));
        assert_eq!(opts.timeout_secs, REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn api_options_blank_env_keeps_settings() {
        let opts = ApiOptions::resolve(Some("http://saved:8000"), Some("saved-token"), Some("  "), Some(""));
        assert_eq!(opts.base_url, "http://saved:8000");
        assert_eq!(opts.token(), Some("saved-token"));
    }
}
