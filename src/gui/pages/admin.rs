// src/gui/pages/admin.rs
//
// Operations page: everything here goes through the bearer-token
// endpoints, so nothing loads until a token is entered (or restored).

use eframe::egui::{self, Color32, RichText};

use crate::api::{ApiClient, ApiResult};
use crate::config::consts::{
    ADMIN_AUDIT_LIMIT, ADMIN_COLLAB_LIMIT, ADMIN_CRAWL_RUN_LIMIT, ADMIN_CRAWL_STATUS_LIMIT, ADMIN_HEALTH_LIMIT,
    EXCHANGE_RATE_PREVIEW,
};
use crate::config::options::PageKind;
use crate::filters::{CrawlFilter, filter_crawl_status};
use crate::format::{or_dash, thousands, year_range};
use crate::gui::components::data_table::{self, TableOpts};
use crate::gui::components::stat_card;
use crate::gui::task::{Load, show_state};
use crate::model::{
    AdminAuditItem, AdminChannelHealth, AdminCollabItem, AdminCrawlStatus, AdminStats, Brand, BrandDirector,
    Channel, CollabDraft, CrawlJob, CrawlRunDetail, CrawlRunOut, DirectorDraft,
};
use crate::store;
use crate::table::Table;

use super::{Page, PageCtx};

const OK_GREEN: Color32 = Color32::from_rgb(0x04, 0x78, 0x57);
const WARN_AMBER: Color32 = Color32::from_rgb(0xB4, 0x53, 0x09);
const BAD_ROSE: Color32 = Color32::from_rgb(0xBE, 0x12, 0x3C);

struct AdminData {
    stats: AdminStats,
    health: Vec<AdminChannelHealth>,
    directors: Vec<BrandDirector>,
    brands: Vec<Brand>,
    channels: Vec<Channel>,
    collabs: Vec<AdminCollabItem>,
    audit: Vec<AdminAuditItem>,
    crawl: Vec<AdminCrawlStatus>,
    runs: Vec<CrawlRunOut>,
}

fn fetch_all(api: &ApiClient) -> ApiResult<AdminData> {
    let stats = api.admin_stats()?;
    let health = api.admin_channels_health(ADMIN_HEALTH_LIMIT, 0)?;
    // older servers have no run history
    let runs = api.crawl_runs(ADMIN_CRAWL_RUN_LIMIT).unwrap_or_else(|e| {
        loge!("Admin: crawl runs unavailable: {}", e);
        Vec::new()
    });
    Ok(AdminData {
        stats,
        health,
        directors: api.admin_directors(None)?,
        brands: api.brands()?,
        channels: api.channels()?,
        collabs: api.admin_collabs(ADMIN_COLLAB_LIMIT, 0)?,
        audit: api.brand_channel_audit(ADMIN_AUDIT_LIMIT)?.items,
        crawl: api.admin_crawl_status(ADMIN_CRAWL_STATUS_LIMIT, 0)?,
        runs,
    })
}

/// What to do to the loaded data once a write lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FollowUp {
    #[default]
    Nothing,
    Directors,
    Collabs,
    DropDirector(i64),
    DropCollab(i64),
}

#[derive(Default)]
pub struct AdminPage {
    token: String,
    loaded_with: String,
    data: Load<AdminData>,
    msg: String,
    dry_run: bool,

    action: Load<String>,
    after: FollowUp,
    directors_reload: Load<Vec<BrandDirector>>,
    collabs_reload: Load<Vec<AdminCollabItem>>,

    crawl_filter: CrawlFilter,
    run_detail: Load<CrawlRunDetail>,

    director_form: DirectorDraft,
    collab_form: CollabDraft,
    insta_brand: Option<i64>,
    insta_brand_url: String,
    insta_channel: Option<i64>,
    insta_channel_url: String,
}

impl AdminPage {
    fn admin_api(&self, ctx: &PageCtx) -> Option<ApiClient> {
        let token = self.token.trim();
        (!token.is_empty()).then(|| ctx.api.clone().with_token(Some(token)))
    }

    fn load(&mut self, ctx: &PageCtx) {
        let Some(api) = self.admin_api(ctx) else {
            self.msg = s!("관리자 토큰을 입력하세요.");
            return;
        };
        logf!("Admin: load");
        self.msg.clear();
        self.loaded_with = s!(self.token.trim());
        self.data.start(ctx.egui, "admin data", move || fetch_all(&api));
    }

    /// Run one write in the background; its message lands in `msg`.
    /// Refused while another write is still out, so its follow-up is kept.
    fn run<F>(&mut self, ctx: &PageCtx, label: &'static str, after: FollowUp, f: F)
    where
        F: FnOnce(ApiClient) -> ApiResult<String> + Send + 'static,
    {
        if self.action.is_pending() {
            self.msg = s!("이전 요청을 처리 중입니다.");
            return;
        }
        let Some(api) = self.admin_api(ctx) else {
            self.msg = s!("관리자 토큰을 입력하세요.");
            return;
        };
        self.msg.clear();
        self.after = after;
        self.action.start(ctx.egui, label, move || f(api));
    }

    fn poll(&mut self, ctx: &mut PageCtx) {
        self.poll_action(ctx);
        if self.data.poll() {
            match self.data.error() {
                Some(e) => self.msg = s!(e),
                None => {
                    if let Err(e) = store::remember_admin_token(&self.loaded_with) {
                        loge!("Admin: failed to save token: {}", e);
                    }
                    ctx.adopt_token(&self.loaded_with);
                }
            }
        }
        if self.directors_reload.poll() {
            if let Load::Ready(list) = std::mem::take(&mut self.directors_reload) {
                if let Some(d) = self.data.ready_mut() {
                    d.directors = list;
                }
            }
        }
        if self.collabs_reload.poll() {
            if let Load::Ready(list) = std::mem::take(&mut self.collabs_reload) {
                if let Some(d) = self.data.ready_mut() {
                    d.collabs = list;
                }
            }
        }
        self.run_detail.poll();
    }

    fn poll_action(&mut self, ctx: &PageCtx) {
        if !self.action.poll() {
            return;
        }
        let after = std::mem::take(&mut self.after);
        if let Some(e) = self.action.error() {
            self.msg = s!(e);
            return;
        }
        if let Some(m) = self.action.ready() {
            self.msg = m.clone();
        }
        match after {
            FollowUp::Directors => {
                if let Some(api) = self.admin_api(ctx) {
                    self.directors_reload.start(ctx.egui, "admin directors", move || api.admin_directors(None));
                }
            }
            FollowUp::Collabs => {
                if let Some(api) = self.admin_api(ctx) {
                    self.collabs_reload.start(ctx.egui, "admin collabs", move || api.admin_collabs(ADMIN_COLLAB_LIMIT, 0));
                }
            }
            FollowUp::DropDirector(id) => {
                if let Some(d) = self.data.ready_mut() {
                    d.directors.retain(|x| x.id != id);
                }
            }
            FollowUp::DropCollab(id) => {
                if let Some(d) = self.data.ready_mut() {
                    d.collabs.retain(|x| x.id != id);
                }
            }
            FollowUp::Nothing => {}
        }
    }

    fn trigger(&mut self, ctx: &PageCtx, job: CrawlJob) {
        let dry_run = self.dry_run;
        self.run(ctx, "crawl trigger", FollowUp::Nothing, move |api| {
            Ok(api.trigger_crawl(job, dry_run)?.summary())
        });
    }

    fn trigger_channel(&mut self, ctx: &PageCtx, channel_id: i64) {
        let dry_run = self.dry_run;
        self.run(ctx, "channel crawl trigger", FollowUp::Nothing, move |api| {
            let res = api.trigger_channel_crawl(channel_id, dry_run)?;
            Ok(if res.dry_run {
                res.summary()
            } else {
                format!("channel({channel_id}) 크롤 트리거됨 (pid={})", res.pid.map(|p| p.to_string()).unwrap_or_else(|| s!("-")))
            })
        });
    }

    /* ---------------- sections ---------------- */

    fn token_bar(&mut self, ui: &mut egui::Ui, ctx: &PageCtx) {
        let mut load = false;
        let mut job = None;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.token)
                        .password(true)
                        .hint_text("ADMIN_BEARER_TOKEN")
                        .desired_width(320.0),
                );
                let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                load = ui.button("조회").clicked() || enter;
            });
            ui.horizontal_wrapped(|ui| {
                let busy = self.action.is_pending();
                for j in CrawlJob::ALL {
                    if ui.add_enabled(!busy, egui::Button::new(j.button_label())).clicked() {
                        job = Some(j);
                    }
                }
                ui.checkbox(&mut self.dry_run, "dry-run");
            });
            if self.action.is_pending() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.weak("요청 중...");
                });
            }
            if !self.msg.is_empty() {
                ui.label(RichText::new(&self.msg).small());
            }
        });
        if load {
            self.load(ctx);
        }
        if let Some(j) = job {
            self.trigger(ctx, j);
        }
    }

    fn stats(ui: &mut egui::Ui, stats: &AdminStats) {
        ui.horizontal_wrapped(|ui| {
            let c = &stats.counts;
            for (label, n) in [
                ("채널", c.channels),
                ("채널-브랜드 링크", c.channel_brands),
                ("제품", c.products),
                ("가격 이력", c.price_history),
            ] {
                stat_card::show(ui, "", label, &thousands(n), false);
            }
        });
        let latest = &stats.latest_crawls;
        ui.weak(format!(
            "마지막 크롤 · 브랜드 {} · 제품 {}",
            or_dash(latest.brands.as_deref()),
            or_dash(latest.products.as_deref())
        ));
        ui.add_space(6.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong("환율 (→ KRW)");
            egui::Grid::new("admin_rates").num_columns(4).spacing([18.0, 6.0]).show(ui, |ui| {
                for (i, r) in stats.exchange_rates.iter().take(EXCHANGE_RATE_PREVIEW).enumerate() {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&r.from_currency).strong());
                        ui.weak(format!("{:.2}", r.rate));
                    });
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
        });
    }

    fn directors_section(&mut self, ui: &mut egui::Ui, ctx: &PageCtx) {
        let busy = self.action.is_pending();
        let mut submit = false;
        let mut remove = None;
        egui::CollapsingHeader::new("크리에이티브 디렉터 관리").default_open(true).show(ui, |ui| {
            let f = &mut self.director_form;
            ui.horizontal_wrapped(|ui| {
                for (value, hint) in [
                    (&mut f.brand_slug, "brand slug (예: nike)"),
                    (&mut f.name, "디렉터 이름"),
                    (&mut f.role, "역할 (기본 Creative Director)"),
                    (&mut f.start_year, "시작 연도"),
                    (&mut f.end_year, "종료 연도"),
                    (&mut f.note, "메모"),
                ] {
                    ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(200.0));
                }
            });
            submit = ui.add_enabled(!busy, egui::Button::new("디렉터 등록")).clicked();
            let Some(data) = self.data.ready() else { return };
            egui::ScrollArea::vertical().id_salt("admin_directors").max_height(224.0).show(ui, |ui| {
                for d in &data.directors {
                    ui.horizontal(|ui| {
                        let brand = d.brand_name.as_deref().or(d.brand_slug.as_deref()).unwrap_or("-");
                        ui.label(RichText::new(&d.name).strong());
                        ui.label(format!("· {} ({})", brand, year_range(d.start_year, d.end_year)));
                        if ui.small_button(RichText::new("삭제").color(BAD_ROSE)).clicked() {
                            remove = Some(d.id);
                        }
                    });
                }
            });
        });

        if submit {
            match self.director_form.to_input() {
                Ok(input) => {
                    self.director_form = DirectorDraft::default();
                    self.run(ctx, "create director", FollowUp::Directors, move |api| {
                        api.create_director(&input)?;
                        Ok(s!("디렉터가 등록되었습니다."))
                    });
                }
                Err(e) => self.msg = e,
            }
        }
        if let Some(id) = remove {
            self.delete_director(ctx, id);
        }
    }

    fn delete_director(&mut self, ctx: &PageCtx, id: i64) {
        self.run(ctx, "delete director", FollowUp::DropDirector(id), move |api| {
            api.delete_director(id)?;
            Ok(s!("디렉터가 삭제되었습니다."))
        });
    }

    fn instagram_section(&mut self, ui: &mut egui::Ui, ctx: &PageCtx) {
        let Some(data) = self.data.ready() else { return };
        let mut save_brand = false;
        let mut save_channel = false;
        let mut brand_pick = None;
        let mut channel_pick = None;
        egui::CollapsingHeader::new("인스타그램 URL 관리").show(ui, |ui| {
            ui.horizontal(|ui| {
                let current = self
                    .insta_brand
                    .and_then(|id| data.brands.iter().find(|b| b.id == id))
                    .map(|b| format!("{} ({})", b.name, b.slug))
                    .unwrap_or_else(|| s!("브랜드 선택"));
                egui::ComboBox::from_id_salt("insta_brand").selected_text(current).width(220.0).show_ui(ui, |ui| {
                    for b in &data.brands {
                        if ui.selectable_label(self.insta_brand == Some(b.id), format!("{} ({})", b.name, b.slug)).clicked() {
                            brand_pick = Some(b);
                        }
                    }
                });
                ui.add(
                    egui::TextEdit::singleline(&mut self.insta_brand_url)
                        .hint_text("브랜드 인스타그램 URL")
                        .desired_width(320.0),
                );
                save_brand = ui.button("저장").clicked();
            });
            ui.horizontal(|ui| {
                let current = self
                    .insta_channel
                    .and_then(|id| data.channels.iter().find(|c| c.id == id))
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| s!("채널 선택"));
                egui::ComboBox::from_id_salt("insta_channel").selected_text(current).width(220.0).show_ui(ui, |ui| {
                    for c in &data.channels {
                        if ui.selectable_label(self.insta_channel == Some(c.id), &c.name).clicked() {
                            channel_pick = Some(c);
                        }
                    }
                });
                ui.add(
                    egui::TextEdit::singleline(&mut self.insta_channel_url)
                        .hint_text("채널 인스타그램 URL")
                        .desired_width(320.0),
                );
                save_channel = ui.button("저장").clicked();
            });
        });

        // picking prefills the current URL
        if let Some(b) = brand_pick {
            self.insta_brand = Some(b.id);
            self.insta_brand_url = b.instagram_url.clone().unwrap_or_default();
        }
        if let Some(c) = channel_pick {
            self.insta_channel = Some(c.id);
            self.insta_channel_url = c.instagram_url.clone().unwrap_or_default();
        }
        if let (true, Some(id)) = (save_brand, self.insta_brand) {
            let url = self.insta_brand_url.clone();
            self.run(ctx, "brand instagram", FollowUp::Nothing, move |api| {
                api.patch_brand_instagram(id, Some(&url))?;
                Ok(s!("브랜드 인스타그램 URL 저장 완료"))
            });
        }
        if let (true, Some(id)) = (save_channel, self.insta_channel) {
            let url = self.insta_channel_url.clone();
            self.run(ctx, "channel instagram", FollowUp::Nothing, move |api| {
                api.patch_channel_instagram(id, Some(&url))?;
                Ok(s!("채널 인스타그램 URL 저장 완료"))
            });
        }
    }

    fn collabs_section(&mut self, ui: &mut egui::Ui, ctx: &PageCtx) {
        let busy = self.action.is_pending();
        let mut submit = false;
        let mut remove = None;
        egui::CollapsingHeader::new("협업 관리").show(ui, |ui| {
            let f = &mut self.collab_form;
            ui.horizontal_wrapped(|ui| {
                for (value, hint) in [
                    (&mut f.brand_a_slug, "brand_a slug (예: nike)"),
                    (&mut f.brand_b_slug, "brand_b slug (예: stussy)"),
                    (&mut f.collab_name, "협업명"),
                    (&mut f.collab_category, "카테고리 (footwear/apparel...)"),
                    (&mut f.release_year, "출시연도"),
                    (&mut f.hype_score, "하입 점수(미입력 시 자동)"),
                    (&mut f.source_url, "출처 URL"),
                    (&mut f.notes, "메모"),
                ] {
                    ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(200.0));
                }
            });
            submit = ui.add_enabled(!busy, egui::Button::new("협업 등록")).clicked();
            let Some(data) = self.data.ready() else { return };
            egui::ScrollArea::vertical().id_salt("admin_collabs").max_height(256.0).show(ui, |ui| {
                for c in &data.collabs {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&c.collab_name).strong());
                        let category = c.collab_category.as_deref().map(|k| format!(" · {k}")).unwrap_or_default();
                        ui.label(format!("· hype {}{}", c.hype_score, category));
                        if ui.small_button(RichText::new("삭제").color(BAD_ROSE)).clicked() {
                            remove = Some(c.id);
                        }
                    });
                }
            });
        });

        if submit {
            match self.collab_form.to_input() {
                Ok(input) => {
                    self.collab_form = CollabDraft::default();
                    self.run(ctx, "create collab", FollowUp::Collabs, move |api| {
                        api.create_collab(&input)?;
                        Ok(s!("협업이 등록되었습니다."))
                    });
                }
                Err(e) => self.msg = e,
            }
        }
        if let Some(id) = remove {
            self.delete_collab(ctx, id);
        }
    }

    fn delete_collab(&mut self, ctx: &PageCtx, id: i64) {
        self.run(ctx, "delete collab", FollowUp::DropCollab(id), move |api| {
            api.delete_collab(id)?;
            Ok(s!("협업이 삭제되었습니다."))
        });
    }

    fn audit_section(ui: &mut egui::Ui, items: &[AdminAuditItem]) {
        egui::CollapsingHeader::new("브랜드-채널 혼재 감사").show(ui, |ui| {
            ui.weak("유형 불일치/브랜드 수 이상치를 탐지한 결과입니다.");
            if items.is_empty() {
                ui.weak("탐지 항목이 없습니다.");
                return;
            }
            egui::ScrollArea::vertical().id_salt("admin_audit").max_height(320.0).show(ui, |ui| {
                for item in items {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&item.channel_name).strong());
                            ui.weak(format!("({})", or_dash(item.channel_type.as_deref())));
                        });
                        ui.colored_label(BAD_ROSE, RichText::new(&item.reason).small());
                        ui.label(RichText::new(format!("제안: {}", item.suggestion)).small());
                        let linked: Vec<&str> = item.linked_brands.iter().take(5).map(String::as_str).collect();
                        let linked = if linked.is_empty() { s!("-") } else { linked.join(", ") };
                        ui.weak(format!("브랜드 수 {} · 연결 브랜드 {}", item.brand_count, linked));
                    });
                }
            });
        });
    }

    fn crawl_section(&mut self, ui: &mut egui::Ui, ctx: &PageCtx) {
        let Some(data) = self.data.ready() else { return };
        if data.crawl.is_empty() {
            return;
        }
        let mut trigger = None;
        egui::CollapsingHeader::new("채널 크롤 현황").default_open(true).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.weak("상태 필터");
                egui::ComboBox::from_id_salt("crawl_filter").selected_text(self.crawl_filter.label()).show_ui(ui, |ui| {
                    for f in CrawlFilter::ALL {
                        ui.selectable_value(&mut self.crawl_filter, f, f.label());
                    }
                });
            });
            let rows = filter_crawl_status(&data.crawl, self.crawl_filter);
            let ids: Vec<i64> = rows.iter().map(|r| r.channel_id).collect();
            let table = Table::from_items(rows);
            let tint = |_row: usize, col: usize, cell: &str| {
                (col == 7).then(|| match cell {
                    "ok" => OK_GREEN,
                    "stale" => WARN_AMBER,
                    _ => BAD_ROSE,
                })
            };
            let opts = TableOpts { actions: &["크롤 실행"], max_height: Some(448.0), tint: Some(&tint), ..Default::default() };
            if let Some(hit) = data_table::show_with(ui, "admin_crawl", &table, opts) {
                trigger = ids.get(hit.row).copied();
            }
        });
        if let Some(id) = trigger {
            self.trigger_channel(ctx, id);
        }
    }

    fn runs_section(&mut self, ui: &mut egui::Ui, ctx: &PageCtx) {
        let Some(data) = self.data.ready() else { return };
        let mut open = None;
        egui::CollapsingHeader::new("크롤 실행 이력").show(ui, |ui| {
            if data.runs.is_empty() {
                ui.weak("실행 이력이 없습니다.");
                return;
            }
            let table = Table::from_items(&data.runs);
            let opts = TableOpts { actions: &["로그"], max_height: Some(240.0), ..Default::default() };
            if let Some(hit) = data_table::show_with(ui, "admin_runs", &table, opts) {
                open = data.runs.get(hit.row).map(|r| r.id);
            }

            show_state(ui, &self.run_detail);
            if let Some(detail) = self.run_detail.ready() {
                ui.separator();
                ui.horizontal(|ui| {
                    ui.strong(format!("실행 #{}", detail.run.id));
                    ui.add(
                        egui::ProgressBar::new(detail.run.progress())
                            .desired_width(220.0)
                            .text(format!("{}/{}", detail.run.done_channels, detail.run.total_channels)),
                    );
                });
                let tint = |_row: usize, col: usize, cell: &str| {
                    (col == 1).then(|| match cell {
                        "success" => OK_GREEN,
                        "skipped" => WARN_AMBER,
                        _ => BAD_ROSE,
                    })
                };
                let opts = TableOpts { max_height: Some(320.0), tint: Some(&tint), ..Default::default() };
                data_table::show_with(ui, "admin_run_logs", &Table::from_items(&detail.logs), opts);
            }
        });
        if let (Some(id), Some(api)) = (open, self.admin_api(ctx)) {
            self.run_detail.start(ctx.egui, "crawl run", move || api.crawl_run(id));
        }
    }

    fn health_section(ui: &mut egui::Ui, health: &[AdminChannelHealth]) {
        if health.is_empty() {
            return;
        }
        egui::CollapsingHeader::new("채널 헬스").show(ui, |ui| {
            let tint = |_row: usize, col: usize, cell: &str| (col == 7).then(|| if cell == "ok" { OK_GREEN } else { WARN_AMBER });
            let opts = TableOpts { max_height: Some(420.0), tint: Some(&tint), ..Default::default() };
            data_table::show_with(ui, "admin_health", &Table::from_items(health), opts);
        });
    }
}

impl Page for AdminPage {
    fn kind(&self) -> PageKind {
        PageKind::Admin
    }

    fn on_enter(&mut self, ctx: &mut PageCtx) {
        if let Some(t) = ctx.api.token() {
            self.token = s!(t);
            self.load(ctx);
        }
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        self.poll(ctx);

        ui.weak("DB 현황, 채널 헬스, 크롤 제어, 환율");
        ui.add_space(6.0);
        self.token_bar(ui, ctx);
        ui.add_space(6.0);
        if self.data.is_pending() {
            show_state(ui, &self.data);
        }
        let Some(data) = self.data.ready() else { return };
        Self::stats(ui, &data.stats);
        ui.add_space(8.0);

        self.directors_section(ui, ctx);
        self.instagram_section(ui, ctx);
        self.collabs_section(ui, ctx);
        if let Some(data) = self.data.ready() {
            Self::audit_section(ui, &data.audit);
        }
        self.crawl_section(ui, ctx);
        self.runs_section(ui, ctx);
        if let Some(data) = self.data.ready() {
            Self::health_section(ui, &data.health);
        }
    }

    fn table(&self) -> Option<Table> {
        let data = self.data.ready()?;
        Some(Table::from_items(filter_crawl_status(&data.crawl, self.crawl_filter)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::pages::testing::{client, serve_once, settle};
    use crate::gui::thumbs::Thumbs;

    fn director(id: i64) -> BrandDirector {
        BrandDirector {
            id,
            brand_id: 1,
            brand_name: Some(s!("Nike")),
            brand_slug: Some(s!("nike")),
            name: format!("Director {id}"),
            role: s!("Creative Director"),
            start_year: Some(2020),
            end_year: None,
            note: None,
            created_at: s!("2026-01-01T00:00:00"),
        }
    }

    fn loaded(director_ids: &[i64]) -> AdminPage {
        let stats: AdminStats = serde_json::from_value(serde_json::json!({
            "counts": {"channels": 1, "channel_brands": 1, "products": 1, "price_history": 1},
            "latest_crawls": {"brands": null, "products": null}
        }))
        .unwrap();
        let data = AdminData {
            stats,
            health: Vec::new(),
            directors: director_ids.iter().map(|&id| director(id)).collect(),
            brands: Vec::new(),
            channels: Vec::new(),
            collabs: Vec::new(),
            audit: Vec::new(),
            crawl: Vec::new(),
            runs: Vec::new(),
        };
        AdminPage { token: s!("t"), data: Load::Ready(data), ..Default::default() }
    }

    fn director_ids(page: &AdminPage) -> Vec<i64> {
        page.data.ready().map(|d| d.directors.iter().map(|x| x.id).collect()).unwrap_or_default()
    }

    #[test]
    fn failed_director_delete_keeps_the_row() {
        let api = client(&serve_once("500 Internal Server Error", r#"{"detail": "boom"}"#));
        let egui = egui::Context::default();
        let mut thumbs = Thumbs::new();
        let ctx = PageCtx::new(&api, &egui, &mut thumbs, false);
        let mut page = loaded(&[5, 6]);

        page.delete_director(&ctx, 5);
        settle(|| {
            page.poll_action(&ctx);
            !page.action.is_pending()
        });

        assert_eq!(director_ids(&page), [5, 6]);
        assert_eq!(page.msg, "ADMIN API 500: /admin/directors/5");
    }

    #[test]
    fn confirmed_director_delete_drops_the_row() {
        let api = client(&serve_once("200 OK", r#"{"ok": true}"#));
        let egui = egui::Context::default();
        let mut thumbs = Thumbs::new();
        let ctx = PageCtx::new(&api, &egui, &mut thumbs, false);
        let mut page = loaded(&[5, 6]);

        page.delete_director(&ctx, 5);
        settle(|| {
            page.poll_action(&ctx);
            !page.action.is_pending()
        });

        assert_eq!(director_ids(&page), [6]);
        assert_eq!(page.msg, "디렉터가 삭제되었습니다.");
    }

    #[test]
    fn write_while_busy_keeps_the_pending_follow_up() {
        let api = client(&serve_once("200 OK", r#"{"ok": true}"#));
        let egui = egui::Context::default();
        let mut thumbs = Thumbs::new();
        let ctx = PageCtx::new(&api, &egui, &mut thumbs, false);
        let mut page = loaded(&[5, 6]);

        page.delete_director(&ctx, 5);
        page.delete_director(&ctx, 6);
        assert_eq!(page.msg, "이전 요청을 처리 중입니다.");
        assert_eq!(page.after, FollowUp::DropDirector(5));

        settle(|| {
            page.poll_action(&ctx);
            !page.action.is_pending()
        });
        assert_eq!(director_ids(&page), [6]);
    }
}
