// src/config/consts.rs

// Net config
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const ENV_API_URL: &str = "FASHION_API_URL";
pub const ENV_ADMIN_TOKEN: &str = "FASHION_ADMIN_TOKEN";
pub const USER_AGENT: &str = concat!("fashion_console/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Local store
pub const STORE_DIR: &str = ".store";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "debug.log";

// Page sizes
pub const DASHBOARD_SALE_LIMIT: u32 = 60;
pub const SALES_PAGE_LIMIT: u32 = 60;
pub const NEWS_PAGE_LIMIT: u32 = 50;
pub const SEARCH_LIMIT: u32 = 20;
pub const RELATED_SEARCH_LIMIT: u32 = 8;
pub const BRAND_HIGHLIGHT_LIMIT: u32 = 400;
pub const CHANNEL_HIGHLIGHT_LIMIT: u32 = 250;
pub const MAP_CHANNEL_LIMIT: u32 = 500;
pub const BRAND_PRODUCT_LIMIT: u32 = 500;
pub const BRAND_NEWS_LIMIT: u32 = 20;
pub const DIRECTOR_LIMIT: u32 = 400;
pub const PURCHASE_LIMIT: u32 = 100;
pub const COMPETE_LIMIT: u32 = 200;
pub const COMPETE_MIN_CHANNELS: u32 = 2;
pub const PRICE_HISTORY_DAYS: u32 = 30;

// Admin page sizes
pub const ADMIN_HEALTH_LIMIT: u32 = 250;
pub const ADMIN_COLLAB_LIMIT: u32 = 300;
pub const ADMIN_AUDIT_LIMIT: u32 = 300;
pub const ADMIN_CRAWL_STATUS_LIMIT: u32 = 500;
pub const ADMIN_CRAWL_RUN_LIMIT: u32 = 20;
pub const DEFAULT_DIRECTOR_ROLE: &str = "Creative Director";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const PRICE_HISTORY_DAY_CHOICES: [u32; 3] = [7, 30, 90];

// GUI
pub const APP_TITLE: &str = "Fashion Data Engine";
/// Routes remembered for the Back button.
pub const HISTORY_LIMIT: usize = 50;
pub const DETAIL_PREVIEW: usize = 8;
pub const EXCHANGE_RATE_PREVIEW: usize = 8;
pub const BRAND_DROPDOWN_LIMIT: usize = 8;
pub const PRODUCT_DROPDOWN_LIMIT: usize = 10;
pub const PICKER_DROPDOWN_LIMIT: usize = 6;
pub const THUMB_WORKERS: usize = 4;
pub const THUMB_MAX_PX: u32 = 256;
/// Decoded thumbnails kept as textures; least recently drawn go first.
pub const THUMB_CACHE_CAP: usize = 240;
pub const CARD_WIDTH: f32 = 190.0;

// Fonts (first readable wins; FASHION_FONT overrides)
pub const ENV_FONT: &str = "FASHION_FONT";
pub const CJK_FONT_CANDIDATES: [&str; 7] = [
    "C:\\Windows\\Fonts\\malgun.ttf",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/nanum/NanumGothic.ttf",
];
pub const SEARCH_DEBOUNCE_SECS: f64 = 0.25;
