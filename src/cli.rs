// src/cli.rs
//
// Terminal client over the same `ApiClient` the GUI uses. Lists print as
// aligned text, CSV/TSV or JSON depending on `--format`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, eyre};
use serde::Serialize;

use crate::api::ApiClient;
use crate::config::consts::*;
use crate::config::options::{ApiOptions, ExportFormat, normalize_base_url};
use crate::file;
use crate::filters::{CrawlFilter, collab_timeline, filter_crawl_status, filter_directors, filter_news_source};
use crate::format::{opt_krw, or_dash};
use crate::model::{
    CollabDraft, CrawlJob, DirectorDraft, PurchaseDraft, SaleFilters, WatchListInput, WatchType,
};
use crate::table::{Table, Tabular, price_history_table};

#[derive(Parser, Debug)]
#[command(name = "fashion_console-cli", version, about = "Fashion Data Engine API client")]
pub struct Cli {
    /// API base URL (overrides FASHION_API_URL and the settings file)
    #[arg(long, global = true, value_name = "URL")]
    pub api: Option<String>,

    /// Admin bearer token (overrides FASHION_ADMIN_TOKEN)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write output to a file (or into a directory) instead of stdout
    #[arg(short, long, global = true, value_name = "PATH")]
    pub out: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Discounted products across channels
    Sales {
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        min_price: Option<i64>,
        #[arg(long)]
        max_price: Option<i64>,
        #[arg(long, default_value_t = SALES_PAGE_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Product search
    Search { query: String },
    /// Price comparison across channels for one product key
    Compare { product_key: String },
    /// Per-channel price history
    History {
        product_key: String,
        #[arg(long, default_value_t = PRICE_HISTORY_DAYS)]
        days: u32,
    },
    /// Brand list, optionally searched
    Brands {
        #[arg(long)]
        query: Option<String>,
    },
    /// One brand's products, channels, directors, collabs or news
    Brand {
        slug: String,
        #[arg(long, value_enum, default_value_t = BrandShow::Products)]
        show: BrandShow,
        #[arg(long)]
        sale_only: bool,
    },
    /// Sales channels
    Channels,
    /// Product drops (upcoming only unless --all)
    Drops {
        #[arg(long)]
        all: bool,
        #[arg(long, requires = "all")]
        status: Option<String>,
    },
    /// Collaboration timeline
    Collabs {
        #[arg(long)]
        category: Option<String>,
    },
    /// Creative director histories
    Directors {
        #[arg(long)]
        query: Option<String>,
    },
    /// Fashion news
    News {
        #[arg(long, default_value_t = NEWS_PAGE_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
        #[arg(long)]
        source: Option<String>,
    },
    /// Products sold by several channels
    Compete {
        #[arg(long, default_value_t = COMPETE_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = COMPETE_MIN_CHANNELS)]
        min_channels: u32,
    },
    #[command(subcommand)]
    Watchlist(WatchlistCmd),
    #[command(subcommand)]
    Purchases(PurchasesCmd),
    #[command(subcommand)]
    Admin(AdminCmd),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BrandShow {
    Products,
    Channels,
    Directors,
    Collabs,
    News,
}

#[derive(Subcommand, Debug)]
pub enum WatchlistCmd {
    List,
    /// Watch a brand slug, channel URL or product key
    Add {
        /// brand | channel | product_key
        watch_type: WatchType,
        value: String,
        #[arg(long)]
        notes: Option<String>,
    },
    Rm { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum PurchasesCmd {
    List {
        #[arg(long, default_value_t = PURCHASE_LIMIT)]
        limit: u32,
    },
    Stats,
    Add(PurchaseArgs),
    /// Price grade for a recorded purchase
    Score { id: i64 },
    Rm { id: i64 },
}

#[derive(Args, Debug)]
pub struct PurchaseArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub channel: String,
    /// Paid price in KRW (commas allowed)
    #[arg(long)]
    pub price: String,
    #[arg(long)]
    pub key: Option<String>,
    #[arg(long)]
    pub brand: Option<String>,
    #[arg(long)]
    pub channel_url: Option<String>,
    #[arg(long)]
    pub original: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl PurchaseArgs {
    fn to_draft(&self) -> PurchaseDraft {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        PurchaseDraft {
            product_key: opt(&self.key),
            product_name: self.name.clone(),
            brand_slug: opt(&self.brand),
            channel_name: self.channel.clone(),
            channel_url: opt(&self.channel_url),
            paid_price_krw: self.price.clone(),
            original_price_krw: opt(&self.original),
            notes: opt(&self.notes),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum AdminCmd {
    Stats,
    /// Channel health (needs_review first)
    Health {
        #[arg(long, default_value_t = ADMIN_HEALTH_LIMIT)]
        limit: u32,
    },
    CrawlStatus {
        /// all | ok | never | stale
        #[arg(long, default_value = "all")]
        filter: CrawlFilter,
        #[arg(long, default_value_t = ADMIN_CRAWL_STATUS_LIMIT)]
        limit: u32,
    },
    /// Trigger a crawl job: brands | products | drops
    Crawl {
        job: CrawlJob,
        #[arg(long)]
        dry_run: bool,
    },
    CrawlChannel {
        channel_id: i64,
        #[arg(long)]
        dry_run: bool,
    },
    Directors {
        #[arg(long)]
        brand_id: Option<i64>,
        #[arg(long)]
        query: Option<String>,
    },
    DirectorAdd(DirectorArgs),
    DirectorRm { id: i64 },
    Collabs {
        #[arg(long, default_value_t = ADMIN_COLLAB_LIMIT)]
        limit: u32,
    },
    CollabAdd(CollabArgs),
    CollabRm { id: i64 },
    /// Set or clear (no --url) an Instagram URL
    Instagram {
        #[arg(value_enum)]
        target: InstagramTarget,
        id: i64,
        #[arg(long)]
        url: Option<String>,
    },
    /// Brands and channels missing metadata
    Audit {
        #[arg(long, default_value_t = ADMIN_AUDIT_LIMIT)]
        limit: u32,
    },
    Runs {
        #[arg(long, default_value_t = ADMIN_CRAWL_RUN_LIMIT)]
        limit: u32,
    },
    /// One crawl run with its per-channel logs
    Run { id: i64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InstagramTarget {
    Brand,
    Channel,
}

#[derive(Args, Debug)]
pub struct DirectorArgs {
    #[arg(long)]
    pub brand: String,
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = DEFAULT_DIRECTOR_ROLE)]
    pub role: String,
    #[arg(long)]
    pub start: Option<i32>,
    #[arg(long)]
    pub end: Option<i32>,
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(Args, Debug)]
pub struct CollabArgs {
    #[arg(long = "brand-a")]
    pub brand_a: String,
    #[arg(long = "brand-b")]
    pub brand_b: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub year: Option<i32>,
    #[arg(long)]
    pub hype: Option<i64>,
    #[arg(long)]
    pub source: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

fn text<T: ToString>(v: &Option<T>) -> String {
    v.as_ref().map(ToString::to_string).unwrap_or_default()
}

impl DirectorArgs {
    fn to_draft(&self) -> DirectorDraft {
        DirectorDraft {
            brand_slug: self.brand.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
            start_year: text(&self.start),
            end_year: text(&self.end),
            note: text(&self.note),
        }
    }
}

impl CollabArgs {
    fn to_draft(&self) -> CollabDraft {
        CollabDraft {
            brand_a_slug: self.brand_a.clone(),
            brand_b_slug: self.brand_b.clone(),
            collab_name: self.name.clone(),
            collab_category: text(&self.category),
            release_year: text(&self.year),
            hype_score: text(&self.hype),
            source_url: text(&self.source),
            notes: text(&self.notes),
        }
    }
}

/* ---------------- Output ---------------- */

/// Where results go: stdout, or a buffer flushed to `--out` at the end.
pub struct Output {
    pub format: OutputFormat,
    path: Option<PathBuf>,
    buf: String,
}

impl Output {
    pub fn new(format: OutputFormat, out: Option<&str>) -> Result<Self> {
        let path = match out.map(str::trim).filter(|o| !o.is_empty()) {
            Some(o) => {
                let default_name = format!("export.{}", format.ext());
                Some(file::resolve_single_out_path(o, &default_name).map_err(|e| eyre!("{e}"))?)
            }
            None => None,
        };
        Ok(Self { format, path, buf: String::new() })
    }

    fn write(&mut self, text: &str) {
        match self.path {
            Some(_) => self.buf.push_str(text),
            None => print!("{text}"),
        }
    }

    fn line(&mut self, text: &str) {
        self.write(text);
        self.write("\n");
    }

    fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.line(&text);
        Ok(())
    }

    fn table(&mut self, table: &Table) {
        let text = match self.format {
            OutputFormat::Csv => crate::csv::to_export_string(table, true, ExportFormat::Csv),
            OutputFormat::Tsv => crate::csv::to_export_string(table, true, ExportFormat::Tsv),
            OutputFormat::Table | OutputFormat::Json => table.render_plain(),
        };
        self.write(&text);
    }

    /// Write the buffer when `--out` was given.
    pub fn finish(self) -> Result<()> {
        let Some(path) = self.path else { return Ok(()) };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            file::ensure_directory(parent).map_err(|e| eyre!("{e}"))?;
        }
        std::fs::write(&path, self.buf)?;
        logf!("CLI: wrote {}", path.display());
        eprintln!("Saved {}", path.display());
        Ok(())
    }
}

impl OutputFormat {
    fn ext(self) -> &'static str {
        match self {
            OutputFormat::Table => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }
}

/// Rows of `T`: JSON array in json mode, a table otherwise.
fn emit<'a, T, I>(out: &mut Output, items: I) -> Result<()>
where
    T: Tabular + Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let items: Vec<&T> = items.into_iter().collect();
    if out.format == OutputFormat::Json {
        out.json(&items)?;
    } else {
        out.table(&Table::from_items(items.iter().copied()));
    }
    Ok(())
}

/// One object: pretty JSON in json mode, a `field,value` table otherwise.
fn emit_one<T: Serialize>(out: &mut Output, value: &T, fields: &[(&str, String)]) -> Result<()> {
    if out.format == OutputFormat::Json {
        return out.json(value);
    }
    let table = Table {
        headers: vec![s!("field"), s!("value")],
        rows: fields.iter().map(|(k, v)| vec![s!(*k), v.clone()]).collect(),
    };
    out.table(&table);
    Ok(())
}

/// Status line for writes; json mode prints the server reply instead.
fn emit_done<T: Serialize>(out: &mut Output, value: &T, message: String) -> Result<()> {
    if out.format == OutputFormat::Json {
        return out.json(value);
    }
    out.line(&message);
    Ok(())
}

/* ---------------- Entry ---------------- */

/// Defaults, settings file and environment, then the command-line flags.
fn api_options(cli: &Cli) -> ApiOptions {
    let mut opts = ApiOptions::from_env_and_store();
    if let Some(base) = cli.api.as_deref().filter(|b| !b.trim().is_empty()) {
        opts.base_url = normalize_base_url(base);
    }
    if let Some(token) = cli.token.as_deref().filter(|t| !t.trim().is_empty()) {
        opts.admin_token = Some(s!(token.trim()));
    }
    opts
}

pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    let opts = api_options(&cli);
    logf!("CLI: api={} command={:?}", opts.base_url, cli.command);
    let api = ApiClient::new(&opts)?;
    let mut out = Output::new(cli.format, cli.out.as_deref())?;
    run_command(&api, &mut out, cli.command)?;
    out.finish()
}

fn run_command(api: &ApiClient, out: &mut Output, command: Command) -> Result<()> {
    match command {
        Command::Sales { gender, category, min_price, max_price, limit, offset } => {
            let filters = SaleFilters { gender, category, min_price, max_price };
            let items = api.sale_highlights(limit, offset, &filters)?;
            if out.format == OutputFormat::Table {
                let count = api.sale_count(&filters)?;
                out.line(&format!("total {} (showing {} from offset {offset})", count.total, items.len()));
            }
            emit(out, &items)
        }
        Command::Search { query } => emit(out, &api.search_products(&query)?),
        Command::Compare { product_key } => {
            let cmp = match api.price_comparison(&product_key) {
                Err(e) if e.is_not_found() => return Err(eyre!("no listings for product key '{product_key}'")),
                res => res?,
            };
            if out.format == OutputFormat::Json {
                return emit_one(out, &cmp, &[]);
            }
            if out.format == OutputFormat::Table {
                out.line(&format!(
                    "{} ({}) listings={} cheapest={} {}",
                    cmp.product_name,
                    cmp.product_key,
                    cmp.total_listings,
                    or_dash(cmp.cheapest_channel.as_deref()),
                    opt_krw(cmp.cheapest_price_krw),
                ));
            }
            emit(out, cmp.sorted_listings())
        }
        Command::History { product_key, days } => {
            let series = api.price_history(&product_key, days)?;
            if out.format == OutputFormat::Json {
                out.json(&series)?;
            } else {
                out.table(&price_history_table(&series));
            }
            Ok(())
        }
        Command::Brands { query } => match query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => emit(out, &api.search_brands(q)?),
            None => emit(out, &api.brands()?),
        },
        Command::Brand { slug, show, sale_only } => match show {
            BrandShow::Products => emit(out, &api.brand_products(&slug, sale_only, BRAND_PRODUCT_LIMIT)?),
            BrandShow::Channels => emit(out, &api.brand_channels(&slug)?),
            BrandShow::Directors => emit(out, &api.brand_directors(&slug)?),
            BrandShow::Collabs => emit(out, &api.brand_collabs(&slug)?),
            BrandShow::News => emit(out, &api.brand_news(&slug, BRAND_NEWS_LIMIT)?),
        },
        Command::Channels => emit(out, &api.channels()?),
        Command::Drops { all, status } => {
            let items = if all { api.drops(status.as_deref())? } else { api.upcoming_drops()? };
            emit(out, &items)
        }
        Command::Collabs { category } => {
            let items = api.collabs(category.as_deref().filter(|c| !c.is_empty()))?;
            emit(out, collab_timeline(&items))
        }
        Command::Directors { query } => {
            let items = api.directors(DIRECTOR_LIMIT, 0)?;
            emit(out, filter_directors(&items, query.as_deref().unwrap_or("")))
        }
        Command::News { limit, offset, source } => {
            let items = filter_news_source(api.news(limit, offset)?, source.as_deref());
            emit(out, &items)
        }
        Command::Compete { limit, min_channels } => {
            emit(out, &api.multi_channel_products(limit, 0, min_channels)?)
        }
        Command::Watchlist(cmd) => run_watchlist(api, out, cmd),
        Command::Purchases(cmd) => run_purchases(api, out, cmd),
        Command::Admin(cmd) => run_admin(api, out, cmd),
    }
}

fn run_watchlist(api: &ApiClient, out: &mut Output, cmd: WatchlistCmd) -> Result<()> {
    match cmd {
        WatchlistCmd::List => emit(out, &api.watchlist()?),
        WatchlistCmd::Add { watch_type, value, notes } => {
            let value = value.trim();
            if value.is_empty() {
                return Err(eyre!("watch value is empty"));
            }
            let input = WatchListInput {
                watch_type,
                watch_value: s!(value),
                notes: notes.filter(|n| !n.trim().is_empty()),
            };
            let item = api.add_watchlist_item(&input)?;
            emit_done(out, &item, format!("added #{} {} {}", item.id, item.watch_type.as_str(), item.watch_value))
        }
        WatchlistCmd::Rm { id } => {
            api.delete_watchlist_item(id)?;
            emit_done(out, &serde_json::json!({ "ok": true, "id": id }), format!("removed #{id}"))
        }
    }
}

fn run_purchases(api: &ApiClient, out: &mut Output, cmd: PurchasesCmd) -> Result<()> {
    match cmd {
        PurchasesCmd::List { limit } => emit(out, &api.purchases(limit)?),
        PurchasesCmd::Stats => {
            let st = api.purchase_stats()?;
            let best = st
                .best_deal
                .as_ref()
                .map(|b| format!("{} {} (-{:.0}%)", b.product_name, b.paid_price_krw, b.discount_rate))
                .unwrap_or_else(|| s!("-"));
            emit_one(
                out,
                &st,
                &[
                    ("total_purchases", st.total_purchases.to_string()),
                    ("total_paid", st.total_paid_krw.to_string()),
                    ("total_savings_vs_full", st.total_savings_vs_full_krw.to_string()),
                    ("best_deal", best),
                ],
            )
        }
        PurchasesCmd::Add(args) => {
            let input = args.to_draft().to_input().map_err(|e| eyre!(e))?;
            let p = api.create_purchase(&input)?;
            emit_done(out, &p, format!("recorded purchase #{} {}", p.id, p.product_name))
        }
        PurchasesCmd::Score { id } => {
            let sc = api.purchase_score(id)?;
            emit_one(
                out,
                &sc,
                &[
                    ("product", sc.product_name.clone()),
                    ("paid", sc.paid_price_krw.to_string()),
                    ("grade", sc.grade.clone()),
                    ("percentile", sc.percentile_text()),
                    ("badge", sc.badge.clone()),
                    ("min_ever", opt_krw(sc.min_ever_krw)),
                    ("avg", opt_krw(sc.avg_krw)),
                    ("max_ever", opt_krw(sc.max_ever_krw)),
                    ("data_points", sc.data_points.to_string()),
                    ("savings_vs_full", opt_krw(sc.savings_vs_full)),
                    ("savings_vs_avg", opt_krw(sc.savings_vs_avg)),
                    ("verdict", sc.verdict.clone()),
                ],
            )
        }
        PurchasesCmd::Rm { id } => {
            api.delete_purchase(id)?;
            emit_done(out, &serde_json::json!({ "ok": true, "id": id }), format!("removed purchase #{id}"))
        }
    }
}

fn run_admin(api: &ApiClient, out: &mut Output, cmd: AdminCmd) -> Result<()> {
    match cmd {
        AdminCmd::Stats => {
            let st = api.admin_stats()?;
            if out.format == OutputFormat::Json {
                return emit_one(out, &st, &[]);
            }
            emit_one(
                out,
                &st,
                &[
                    ("channels", st.counts.channels.to_string()),
                    ("channel_brands", st.counts.channel_brands.to_string()),
                    ("products", st.counts.products.to_string()),
                    ("price_history", st.counts.price_history.to_string()),
                    ("latest_brands_crawl", s!(or_dash(st.latest_crawls.brands.as_deref()))),
                    ("latest_products_crawl", s!(or_dash(st.latest_crawls.products.as_deref()))),
                ],
            )?;
            if !st.exchange_rates.is_empty() {
                out.line("");
                emit(out, st.exchange_rates.iter().take(EXCHANGE_RATE_PREVIEW))?;
            }
            Ok(())
        }
        AdminCmd::Health { limit } => emit(out, &api.admin_channels_health(limit, 0)?),
        AdminCmd::CrawlStatus { filter, limit } => {
            let items = api.admin_crawl_status(limit, 0)?;
            emit(out, filter_crawl_status(&items, filter))
        }
        AdminCmd::Crawl { job, dry_run } => {
            let res = api.trigger_crawl(job, dry_run)?;
            emit_done(out, &res, res.summary())
        }
        AdminCmd::CrawlChannel { channel_id, dry_run } => {
            let res = api.trigger_channel_crawl(channel_id, dry_run)?;
            emit_done(out, &res, res.summary())
        }
        AdminCmd::Directors { brand_id, query } => {
            let items = api.admin_directors(brand_id)?;
            emit(out, filter_directors(&items, query.as_deref().unwrap_or("")))
        }
        AdminCmd::DirectorAdd(args) => {
            let input = args.to_draft().to_input().map_err(|e| eyre!(e))?;
            let res = api.create_director(&input)?;
            emit_done(out, &res, format!("director #{} created", res.id))
        }
        AdminCmd::DirectorRm { id } => {
            let res = api.delete_director(id)?;
            emit_done(out, &res, format!("director #{id} deleted"))
        }
        AdminCmd::Collabs { limit } => emit(out, &api.admin_collabs(limit, 0)?),
        AdminCmd::CollabAdd(args) => {
            let input = args.to_draft().to_input().map_err(|e| eyre!(e))?;
            let res = api.create_collab(&input)?;
            emit_done(out, &res, format!("collab #{} created", res.id))
        }
        AdminCmd::CollabRm { id } => {
            let res = api.delete_collab(id)?;
            emit_done(out, &res, format!("collab #{id} deleted"))
        }
        AdminCmd::Instagram { target, id, url } => {
            let res = match target {
                InstagramTarget::Brand => api.patch_brand_instagram(id, url.as_deref())?,
                InstagramTarget::Channel => api.patch_channel_instagram(id, url.as_deref())?,
            };
            let shown = res.instagram_url.as_deref().unwrap_or("(cleared)");
            emit_done(out, &res, format!("#{} instagram: {shown}", res.id))
        }
        AdminCmd::Audit { limit } => {
            let audit = api.brand_channel_audit(limit)?;
            if out.format == OutputFormat::Table {
                out.line(&format!("total {}", audit.total));
            }
            emit(out, &audit.items)
        }
        AdminCmd::Runs { limit } => emit(out, &api.crawl_runs(limit)?),
        AdminCmd::Run { id } => {
            let detail = api.crawl_run(id)?;
            if out.format == OutputFormat::Json {
                return emit_one(out, &detail, &[]);
            }
            emit(out, std::iter::once(&detail.run))?;
            out.line("");
            emit(out, &detail.logs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli = parse(&["news", "--format", "json", "--api", "http://x:9/"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(api_options(&cli).base_url, "http://x:9");
        assert!(matches!(cli.command, Command::News { limit: NEWS_PAGE_LIMIT, offset: 0, source: None }));
    }

    #[test]
    fn typed_arguments_use_model_parsers() {
        let cli = parse(&["admin", "crawl", "products", "--dry-run"]);
        assert!(matches!(cli.command, Command::Admin(AdminCmd::Crawl { job: CrawlJob::Products, dry_run: true })));

        let cli = parse(&["watchlist", "add", "product-key", "nike-dunk"]);
        match cli.command {
            Command::Watchlist(WatchlistCmd::Add { watch_type, value, .. }) => {
                assert_eq!(watch_type, WatchType::ProductKey);
                assert_eq!(value, "nike-dunk");
            }
            other => panic!("unexpected {other:?}"),
        }

        assert!(Cli::try_parse_from(["cli", "admin", "crawl", "shoes"]).is_err());
        assert!(Cli::try_parse_from(["cli", "admin", "crawl-status", "--filter", "weird"]).is_err());
    }

    #[test]
    fn drop_status_needs_all() {
        assert!(Cli::try_parse_from(["cli", "drops", "--status", "released"]).is_err());
        let cli = parse(&["drops", "--all", "--status", "released"]);
        assert!(matches!(cli.command, Command::Drops { all: true, status: Some(_) }));
    }

    #[test]
    fn purchase_args_validate_through_the_form_rules() {
        let cli = parse(&["purchases", "add", "--name", "Dunk Low", "--channel", "KITH", "--price", "129,000"]);
        let Command::Purchases(PurchasesCmd::Add(args)) = cli.command else { panic!("not purchases add") };
        let input = args.to_draft().to_input().unwrap();
        assert_eq!(input.product_key, "Dunk Low");
        assert_eq!(input.paid_price_krw.won(), 129_000);
        assert_eq!(input.original_price_krw, None);

        let cli = parse(&["purchases", "add", "--name", "x", "--channel", "y", "--price", "cheap"]);
        let Command::Purchases(PurchasesCmd::Add(args)) = cli.command else { panic!("not purchases add") };
        assert!(args.to_draft().to_input().is_err());
    }

    #[test]
    fn director_args_keep_default_role() {
        let cli = parse(&["admin", "director-add", "--brand", "dior", "--name", "Kim Jones", "--start", "2018"]);
        let Command::Admin(AdminCmd::DirectorAdd(args)) = cli.command else { panic!("not director-add") };
        let input = args.to_draft().to_input().unwrap();
        assert_eq!(input.role.as_deref(), Some(DEFAULT_DIRECTOR_ROLE));
        assert_eq!(input.start_year, Some(2018));
        assert_eq!(input.end_year, None);
    }

    #[test]
    fn out_flag_buffers_until_finish() {
        let dir = std::env::temp_dir().join("fashion_console_cli_out");
        let _ = std::fs::remove_dir_all(&dir);
        let target = format!("{}/", dir.display());

        let mut out = Output::new(OutputFormat::Csv, Some(&target)).unwrap();
        let table = Table { headers: vec![s!("a"), s!("b")], rows: vec![vec![s!("1"), s!("x,y")]] };
        out.table(&table);
        let path = dir.join("export.csv");
        assert!(!path.exists());

        out.finish().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n1,\"x,y\"\n");
    }
}
