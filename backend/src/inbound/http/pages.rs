//! Public page handlers.
//!
//! ```text
//! GET /                   front page: recent articles and photobooks
//! GET /articles           article listing
//! GET /photobooks         photobook listing
//! GET /article/{slug}     article detail
//! GET /photobook/{slug}   photobook detail
//! GET /about              the "about" page record
//! ```
//!
//! List pages degrade rather than fail: when the content repository errors,
//! the handler logs and serves the built-in sample records. Detail pages
//! degrade to the not-found page instead, as inventing a body for a
//! requested slug would be misleading.

use std::num::NonZeroU32;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, HttpResponseBuilder, get, web};
use tracing::{error, warn};

use crate::domain::sample_content::sample_records;
use crate::domain::{ContentKind, ContentRecord, SiteSettings, listing, slug};
use crate::inbound::http::state::PagesState;
use crate::inbound::http::views::{self, TeaserView};

/// Teasers per column on the front page.
const HOME_TEASER_COUNT: NonZeroU32 = match NonZeroU32::new(3) {
    Some(count) => count,
    None => panic!("home teaser count must be non-zero"),
};

/// Register every public page route on an application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(articles)
        .service(photobooks)
        .service(article_detail)
        .service(photobook_detail)
        .service(about);
}

pub(crate) fn render_page(
    state: &PagesState,
    template: &str,
    context: &tera::Context,
    status: StatusCode,
) -> HttpResponse {
    match state.templates.render(template, context) {
        Ok(body) => HttpResponseBuilder::new(status)
            .content_type(ContentType::html())
            .body(body),
        Err(error) => {
            error!(error = %error, template, "template render failed");
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body("Something went wrong rendering this page.")
        }
    }
}

/// Load settings for one request, falling back to defaults on error.
pub(crate) async fn load_settings(state: &PagesState) -> SiteSettings {
    match state.settings.load().await {
        Ok(settings) => settings,
        Err(error) => {
            warn!(error = %error, "settings load failed; using defaults");
            SiteSettings::default()
        }
    }
}

/// Fetch a listing, degrading to the sample records when the repository
/// errors so the public site stays up through a database outage.
async fn fetch_or_sample(
    state: &PagesState,
    kind: ContentKind,
    limit: NonZeroU32,
) -> Vec<ContentRecord> {
    match state.content.fetch_published(kind, limit).await {
        Ok(records) => records,
        Err(error) => {
            warn!(
                error = %error,
                kind = kind.as_str(),
                "content fetch failed; serving sample records"
            );
            listing::select_published(sample_records(kind), kind, limit)
        }
    }
}

/// Fetch a detail record by slug. Repository errors degrade to "not found"
/// rather than a sample body.
async fn find_or_none(state: &PagesState, kind: ContentKind, slug: &str) -> Option<ContentRecord> {
    match state.content.find_published_by_slug(kind, slug).await {
        Ok(record) => record,
        Err(error) => {
            warn!(
                error = %error,
                kind = kind.as_str(),
                slug,
                "content lookup failed; rendering not-found"
            );
            None
        }
    }
}

fn teaser_views(records: &[ContentRecord]) -> Vec<TeaserView> {
    records.iter().map(TeaserView::from_record).collect()
}

fn listing_limit(settings: &SiteSettings) -> NonZeroU32 {
    // `from_pairs` never stores zero, but a hand-built settings value could.
    NonZeroU32::new(settings.items_per_page).unwrap_or(HOME_TEASER_COUNT)
}

/// Render the not-found page. Shared by the detail handlers and the default
/// route fallback.
pub async fn not_found(state: web::Data<PagesState>) -> HttpResponse {
    let settings = load_settings(&state).await;
    let context = views::base_context(&settings);
    render_page(&state, "not_found.html", &context, StatusCode::NOT_FOUND)
}

#[get("/")]
pub async fn home(state: web::Data<PagesState>) -> HttpResponse {
    let settings = load_settings(&state).await;
    let article_records = fetch_or_sample(&state, ContentKind::Article, HOME_TEASER_COUNT).await;
    let photobook_records = fetch_or_sample(&state, ContentKind::Photobook, HOME_TEASER_COUNT).await;

    let mut context = views::base_context(&settings);
    context.insert("articles", &teaser_views(&article_records));
    context.insert("photobooks", &teaser_views(&photobook_records));
    render_page(&state, "home.html", &context, StatusCode::OK)
}

async fn listing_page(state: &PagesState, kind: ContentKind, heading: &str) -> HttpResponse {
    let settings = load_settings(state).await;
    let records = fetch_or_sample(state, kind, listing_limit(&settings)).await;

    let mut context = views::base_context(&settings);
    context.insert("heading", heading);
    context.insert("teasers", &teaser_views(&records));
    render_page(state, "listing.html", &context, StatusCode::OK)
}

#[get("/articles")]
pub async fn articles(state: web::Data<PagesState>) -> HttpResponse {
    listing_page(&state, ContentKind::Article, "Articles").await
}

#[get("/photobooks")]
pub async fn photobooks(state: web::Data<PagesState>) -> HttpResponse {
    listing_page(&state, ContentKind::Photobook, "Photo Books").await
}

async fn detail_page(state: &PagesState, kind: ContentKind, slug_value: &str) -> HttpResponse {
    if !slug::is_valid_slug(slug_value) {
        return not_found_response(state).await;
    }
    let Some(record) = find_or_none(state, kind, slug_value).await else {
        return not_found_response(state).await;
    };

    let settings = load_settings(state).await;
    let mut context = views::base_context(&settings);
    context.insert("title", record.title());
    context.insert("body", record.body());
    match kind {
        // Pages are undated site furniture.
        ContentKind::Page => context.insert("date", &Option::<String>::None),
        _ => context.insert("date", &views::format_display_date(&record)),
    }
    render_page(state, "detail.html", &context, StatusCode::OK)
}

async fn not_found_response(state: &PagesState) -> HttpResponse {
    let settings = load_settings(state).await;
    let context = views::base_context(&settings);
    render_page(state, "not_found.html", &context, StatusCode::NOT_FOUND)
}

#[get("/article/{slug}")]
pub async fn article_detail(
    state: web::Data<PagesState>,
    path: web::Path<String>,
) -> HttpResponse {
    detail_page(&state, ContentKind::Article, &path).await
}

#[get("/photobook/{slug}")]
pub async fn photobook_detail(
    state: web::Data<PagesState>,
    path: web::Path<String>,
) -> HttpResponse {
    detail_page(&state, ContentKind::Photobook, &path).await
}

#[get("/about")]
pub async fn about(state: web::Data<PagesState>) -> HttpResponse {
    detail_page(&state, ContentKind::Page, "about").await
}
