//! End-to-end tests for the public pages against stubbed repositories.
//!
//! These exercise the full Actix service wiring: routing, the trace
//! middleware, template rendering, and the degrade-to-sample policy when a
//! repository errors.

use std::num::NonZeroU32;
use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use async_trait::async_trait;

use backend::Trace;
use backend::domain::ports::{
    ContactMessageRepository, ContactRepositoryError, ContentRepository, ContentRepositoryError,
    SettingsRepository, SettingsRepositoryError,
};
use backend::domain::sample_content::{
    FixtureContactMessageRepository, FixtureSettingsRepository, SampleContentRepository,
};
use backend::domain::{ContactMessage, ContentKind, ContentRecord, SiteSettings};
use backend::inbound::http::pages::not_found;
use backend::inbound::http::state::PagesState;
use backend::inbound::http::{contact, pages};

/// Content repository that fails every call, standing in for a database
/// outage.
struct BrokenContentRepository;

#[async_trait]
impl ContentRepository for BrokenContentRepository {
    async fn fetch_published(
        &self,
        _kind: ContentKind,
        _limit: NonZeroU32,
    ) -> Result<Vec<ContentRecord>, ContentRepositoryError> {
        Err(ContentRepositoryError::connection("connection refused"))
    }

    async fn find_published_by_slug(
        &self,
        _kind: ContentKind,
        _slug: &str,
    ) -> Result<Option<ContentRecord>, ContentRepositoryError> {
        Err(ContentRepositoryError::connection("connection refused"))
    }
}

struct BrokenContactRepository;

#[async_trait]
impl ContactMessageRepository for BrokenContactRepository {
    async fn insert(&self, _message: &ContactMessage) -> Result<(), ContactRepositoryError> {
        Err(ContactRepositoryError::write("insert failed"))
    }
}

struct NamedSiteSettings;

#[async_trait]
impl SettingsRepository for NamedSiteSettings {
    async fn load(&self) -> Result<SiteSettings, SettingsRepositoryError> {
        Ok(SiteSettings {
            site_title: "Dalthaus.net".to_owned(),
            ..SiteSettings::default()
        })
    }
}

fn fixture_state() -> PagesState {
    PagesState::fixtures().expect("templates parse")
}

fn broken_state() -> PagesState {
    PagesState::new(
        Arc::new(BrokenContentRepository),
        Arc::new(FixtureContactMessageRepository),
        Arc::new(FixtureSettingsRepository),
    )
    .expect("templates parse")
}

async fn call(state: PagesState, path: &str) -> (StatusCode, String) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(pages::configure)
            .configure(contact::configure)
            .default_service(web::to(not_found)),
    )
    .await;
    let response = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
    let status = response.status();
    let body = test::read_body(response).await;
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[actix_rt::test]
async fn home_stays_up_when_the_content_repository_errors() {
    let (status, body) = call(broken_state(), "/").await;
    assert_eq!(status, StatusCode::OK);
    // The sample records stand in for the unreachable database.
    assert!(body.contains("Ramchargers Conquer The Automatic"));
    assert!(body.contains("The Storyteller&#x27;s Legacy") || body.contains("Storyteller"));
}

#[actix_rt::test]
async fn listings_degrade_to_samples_on_error() {
    let (status, body) = call(broken_state(), "/photobooks").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Moments in Time"));
    assert!(body.contains("Natural Wonders"));
}

#[actix_rt::test]
async fn detail_pages_degrade_to_not_found_on_error() {
    let (status, body) = call(broken_state(), "/article/ramchargers-conquer-the-automatic").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[actix_rt::test]
async fn unknown_route_renders_the_not_found_page() {
    let (status, body) = call(fixture_state(), "/no/such/route").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[actix_rt::test]
async fn settings_flow_into_the_page_chrome() {
    let state = PagesState::new(
        Arc::new(SampleContentRepository),
        Arc::new(FixtureContactMessageRepository),
        Arc::new(NamedSiteSettings),
    )
    .expect("templates parse");
    let (status, body) = call(state, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Dalthaus.net"));
}

#[actix_rt::test]
async fn responses_carry_a_trace_id_header() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(fixture_state()))
            .wrap(Trace)
            .configure(pages::configure),
    )
    .await;
    let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert!(response.headers().contains_key("trace-id"));
}

#[actix_rt::test]
async fn contact_submission_survives_a_failed_insert() {
    let state = PagesState::new(
        Arc::new(SampleContentRepository),
        Arc::new(BrokenContactRepository),
        Arc::new(FixtureSettingsRepository),
    )
    .expect("templates parse");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(contact::configure),
    )
    .await;
    let request = test::TestRequest::post()
        .uri("/contact")
        .set_form(contact::ContactFormData {
            name: "Reader".to_owned(),
            email: "reader@example.com".to_owned(),
            subject: "Hello".to_owned(),
            message: "Lovely photographs.".to_owned(),
        })
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8_lossy(&test::read_body(response).await).into_owned();
    assert!(body.contains("We could not record your message"));
}

#[actix_rt::test]
async fn contact_happy_path_redirects() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(fixture_state()))
            .configure(contact::configure),
    )
    .await;
    let request = test::TestRequest::post()
        .uri("/contact")
        .set_form(contact::ContactFormData {
            name: "Reader".to_owned(),
            email: "reader@example.com".to_owned(),
            subject: "Hello".to_owned(),
            message: "Lovely photographs.".to_owned(),
        })
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/contact?sent=1")
    );
}
