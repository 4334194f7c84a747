//! Contact form endpoints.
//!
//! ```text
//! GET  /contact   render the form; `?sent=1` shows the thank-you notice
//! POST /contact   validate and persist a submission, then redirect
//! ```
//!
//! Successful submissions redirect to `GET /contact?sent=1` so a refresh
//! never double-posts. A failed insert re-renders the form with a polite
//! degrade notice instead of an error page.

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::ContactMessage;
use crate::inbound::http::pages::{load_settings, render_page};
use crate::inbound::http::state::PagesState;
use crate::inbound::http::views;

/// Register the contact routes on an application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(contact_form).service(submit_contact);
}

/// Raw form fields as posted. Kept separate from the validated domain type
/// so a failed validation can echo the submission back into the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ContactQuery {
    sent: Option<String>,
}

struct FormRender<'a> {
    form: &'a ContactFormData,
    errors: Vec<String>,
    sent: bool,
    degraded: bool,
    status: StatusCode,
}

async fn render_form(state: &PagesState, render: FormRender<'_>) -> HttpResponse {
    let settings = load_settings(state).await;
    let mut context = views::base_context(&settings);
    context.insert("form", render.form);
    context.insert("errors", &render.errors);
    context.insert("sent", &render.sent);
    context.insert("degraded", &render.degraded);
    render_page(state, "contact.html", &context, render.status)
}

#[get("/contact")]
pub async fn contact_form(
    state: web::Data<PagesState>,
    query: web::Query<ContactQuery>,
) -> HttpResponse {
    let sent = query.sent.as_deref() == Some("1");
    render_form(
        &state,
        FormRender {
            form: &ContactFormData::default(),
            errors: Vec::new(),
            sent,
            degraded: false,
            status: StatusCode::OK,
        },
    )
    .await
}

#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<PagesState>,
    form: web::Form<ContactFormData>,
) -> HttpResponse {
    let form = form.into_inner();
    let message = match ContactMessage::new(&form.name, &form.email, &form.subject, &form.message) {
        Ok(message) => message,
        Err(error) => {
            return render_form(
                &state,
                FormRender {
                    form: &form,
                    errors: vec![error.to_string()],
                    sent: false,
                    degraded: false,
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                },
            )
            .await;
        }
    };

    if let Err(error) = state.contact.insert(&message).await {
        warn!(error = %error, "contact message insert failed");
        return render_form(
            &state,
            FormRender {
                form: &form,
                errors: Vec::new(),
                sent: false,
                degraded: true,
                status: StatusCode::OK,
            },
        )
        .await;
    }

    HttpResponse::Found()
        .insert_header((header::LOCATION, "/contact?sent=1"))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    async fn run(request: actix_http::Request) -> actix_web::dev::ServiceResponse {
        let state = PagesState::fixtures().expect("templates parse");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;
        test::call_service(&app, request).await
    }

    #[actix_rt::test]
    async fn form_renders_without_notice() {
        let response = run(test::TestRequest::get().uri("/contact").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = String::from_utf8_lossy(&test::read_body(response).await).into_owned();
        assert!(body.contains("<form method=\"post\""));
        assert!(!body.contains("Thank you for your message"));
    }

    #[actix_rt::test]
    async fn sent_query_shows_thank_you_notice() {
        let response = run(test::TestRequest::get().uri("/contact?sent=1").to_request()).await;
        let body = String::from_utf8_lossy(&test::read_body(response).await).into_owned();
        assert!(body.contains("Thank you for your message"));
    }

    #[actix_rt::test]
    async fn valid_submission_redirects_to_sent() {
        let request = test::TestRequest::post()
            .uri("/contact")
            .set_form(ContactFormData {
                name: "Don Althaus".to_owned(),
                email: "don@example.com".to_owned(),
                subject: "Print enquiry".to_owned(),
                message: "Is the Moments in Time series available as prints?".to_owned(),
            })
            .to_request();
        let response = run(request).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok());
        assert_eq!(location, Some("/contact?sent=1"));
    }

    #[actix_rt::test]
    async fn invalid_email_re_renders_with_error_and_echoed_fields() {
        let request = test::TestRequest::post()
            .uri("/contact")
            .set_form(ContactFormData {
                name: "Don Althaus".to_owned(),
                email: "not-an-address".to_owned(),
                subject: "Hello".to_owned(),
                message: "A message.".to_owned(),
            })
            .to_request();
        let response = run(request).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = String::from_utf8_lossy(&test::read_body(response).await).into_owned();
        assert!(body.contains("Please enter a valid email address."));
        assert!(body.contains("not-an-address"));
        assert!(body.contains("Don Althaus"));
    }

    #[actix_rt::test]
    async fn empty_form_reports_missing_name_first() {
        let request = test::TestRequest::post()
            .uri("/contact")
            .set_form(ContactFormData::default())
            .to_request();
        let response = run(request).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = String::from_utf8_lossy(&test::read_body(response).await).into_owned();
        assert!(body.contains("Please enter your name."));
    }
}
