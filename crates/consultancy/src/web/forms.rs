use super::views::forms::{contact_page, EnquiryPanel};
use super::views::{self, Page};
use super::{respond, SharedState};
use crate::enquiry::{submit_enquiry_data, SubmitError};
use crate::notify::{notify, Notice, NoticeKind};
use crate::relay::relay_contact;
use crate::scholarships::{fetch_scholarship, scholarship_extras};
use crate::visas::{fetch_visa, visa_extras};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use consultancy_core::detail::{DetailOutput, PostKind};
use consultancy_core::enquiry::{validate, EnquiryForm, Topic};
use serde::Serialize;

/// Result of one enquiry submission, ready to render
struct Submission {
    status: StatusCode,
    panel: EnquiryPanel,
    toast: Option<Notice>,
}

async fn submit(state: &SharedState, form: EnquiryForm, topic: &Topic) -> Submission {
    match submit_enquiry_data(&state.client, &state.site, &form, topic).await {
        Ok(receipt) => Submission {
            status: StatusCode::OK,
            toast: Some(notify(NoticeKind::Success, receipt.message)),
            panel: EnquiryPanel::sent(receipt.chat_link),
        },
        Err(SubmitError::Invalid(errors)) => Submission {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            toast: None,
            panel: EnquiryPanel::invalid(form, errors),
        },
        Err(e) => {
            log::error!("Error sending enquiry about {}: {e}", topic.subject());
            Submission {
                status: StatusCode::BAD_GATEWAY,
                toast: Some(notify(NoticeKind::Error, e.user_message(topic))),
                panel: EnquiryPanel::failed(form),
            }
        }
    }
}

/// The detail record could not be loaded, so nothing was sent
fn enquiry_target_failed(
    state: &SharedState,
    kind: PostKind,
    action: &str,
    topic: &Topic,
    form: EnquiryForm,
    e: crate::error::Error,
) -> Response {
    log::warn!("{kind:?} lookup for enquiry failed: {e}");
    let toast = notify(NoticeKind::Error, e.user_message(kind.failure_message()));
    let page = Page::new("Error", &state.site).with_toast(Some(&toast));
    respond(
        StatusCode::BAD_GATEWAY,
        views::document(
            &page,
            views::detail::enquiry_failed(&toast.text, action, topic, &EnquiryPanel::failed(form)),
        ),
    )
}

pub async fn scholarship_enquiry(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Form(form): Form<EnquiryForm>,
) -> Response {
    let scholarship = match fetch_scholarship(&state.client, &id).await {
        Ok(scholarship) => scholarship,
        Err(e) => {
            let action = format!("/scholarships/{}/enquiry", urlencoding::encode(&id));
            let topic = Topic::Scholarship(String::new());
            return enquiry_target_failed(&state, PostKind::Scholarship, &action, &topic, form, e);
        }
    };

    let topic = Topic::Scholarship(scholarship.title.clone());
    let submission = submit(&state, form, &topic).await;
    let extras = scholarship_extras(&state.client, &scholarship).await;
    let output = DetailOutput {
        item: scholarship,
        extras,
    };

    let page = Page::new(&output.item.title, &state.site).with_toast(submission.toast.as_ref());
    respond(
        submission.status,
        views::document(
            &page,
            views::detail::scholarship(&output, &state.site, &submission.panel),
        ),
    )
}

pub async fn visa_enquiry(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Form(form): Form<EnquiryForm>,
) -> Response {
    let visa = match fetch_visa(&state.client, &id).await {
        Ok(visa) => visa,
        Err(e) => {
            let action = format!("/visas/{}/enquiry", urlencoding::encode(&id));
            let topic = Topic::Visa(String::new());
            return enquiry_target_failed(&state, PostKind::Visa, &action, &topic, form, e);
        }
    };

    let topic = Topic::Visa(visa.title.clone());
    let submission = submit(&state, form, &topic).await;
    let extras = visa_extras(&state.client, &visa).await;
    let output = DetailOutput { item: visa, extras };

    let page = Page::new(&output.item.title, &state.site).with_toast(submission.toast.as_ref());
    respond(
        submission.status,
        views::document(
            &page,
            views::detail::visa(&output, &state.site, &submission.panel),
        ),
    )
}

pub async fn contact(State(state): State<SharedState>) -> Response {
    respond(
        StatusCode::OK,
        views::document(
            &Page::new("Contact", &state.site),
            contact_page(&state.site, &EnquiryPanel::default()),
        ),
    )
}

pub async fn contact_submit(
    State(state): State<SharedState>,
    Form(form): Form<EnquiryForm>,
) -> Response {
    let submission = submit(&state, form, &Topic::GeneralContact).await;

    let page = Page::new("Contact", &state.site).with_toast(submission.toast.as_ref());
    respond(
        submission.status,
        views::document(&page, contact_page(&state.site, &submission.panel)),
    )
}

#[derive(Debug, Serialize)]
pub struct RelayResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn relay_error(status: StatusCode, error: impl Into<String>) -> Response {
    let body = RelayResponse {
        success: false,
        error: Some(error.into()),
    };
    (status, Json(body)).into_response()
}

/// `POST /api/contact`: forwards a contact message by email, then by chat
pub async fn api_contact(
    State(state): State<SharedState>,
    body: Result<Json<EnquiryForm>, JsonRejection>,
) -> Response {
    let form = match body {
        Ok(Json(form)) => form,
        Err(rejection) => {
            log::warn!("Contact relay request rejected: {rejection}");
            return relay_error(rejection.status(), rejection.body_text());
        }
    };

    if [&form.name, &form.email, &form.message]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return relay_error(StatusCode::BAD_REQUEST, "All fields are required");
    }

    let enquiry = match validate(&form) {
        Ok(enquiry) => enquiry,
        Err(e) => return relay_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    let Some(relay) = &state.relay else {
        log::error!("Contact relay request rejected: relay is not configured");
        return relay_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Contact relay is not configured",
        );
    };

    match relay_contact(&state.http, relay, &enquiry).await {
        Ok(()) => (
            StatusCode::OK,
            Json(RelayResponse {
                success: true,
                error: None,
            }),
        )
            .into_response(),
        Err(e) => {
            log::error!("Contact relay failed: {e}");
            relay_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
