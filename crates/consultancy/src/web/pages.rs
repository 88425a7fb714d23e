use super::views::forms::EnquiryPanel;
use super::views::{self, Page};
use super::{respond, SharedState};
use crate::scholarships::{list_scholarships_data, scholarship_detail_data};
use crate::testimonials::list_testimonials_data;
use crate::visas::{list_visas_data, visa_detail_data};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use consultancy_core::detail::PostKind;
use consultancy_core::listing::ListingKind;
use consultancy_core::pagination::parse_page;
use serde::Deserialize;

/// Listing query; `page` stays a string so junk falls back to page 1
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub page: Option<String>,
    pub country: Option<String>,
}

fn listing_failed(state: &SharedState, kind: ListingKind, e: crate::error::Error) -> Response {
    log::warn!("{} listing fetch failed: {e}", kind.heading());
    let page = Page::new(kind.heading(), &state.site);
    respond(
        StatusCode::BAD_GATEWAY,
        views::document(
            &page,
            views::listing::failed(kind, &e.user_message(kind.failure_message())),
        ),
    )
}

fn detail_failed(state: &SharedState, kind: PostKind, e: crate::error::Error) -> Response {
    log::warn!("{kind:?} detail fetch failed: {e}");
    let page = Page::new("Error", &state.site);
    respond(
        StatusCode::BAD_GATEWAY,
        views::document(
            &page,
            views::detail::failed(&e.user_message(kind.failure_message())),
        ),
    )
}

pub async fn scholarships(
    State(state): State<SharedState>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let kind = ListingKind::Scholarships;
    let page = parse_page(query.page.as_deref());

    match list_scholarships_data(&state.client, page).await {
        Ok(output) => respond(
            StatusCode::OK,
            views::document(
                &Page::new(kind.heading(), &state.site),
                views::listing::scholarships(&output),
            ),
        ),
        Err(e) => listing_failed(&state, kind, e),
    }
}

pub async fn visas(
    State(state): State<SharedState>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let kind = ListingKind::Visas;
    let page = parse_page(query.page.as_deref());
    let country = query.country.as_deref();

    match list_visas_data(&state.client, page, country).await {
        Ok(output) => respond(
            StatusCode::OK,
            views::document(
                &Page::new(kind.heading(), &state.site),
                views::listing::visas(&output, country),
            ),
        ),
        Err(e) => listing_failed(&state, kind, e),
    }
}

pub async fn testimonials(
    State(state): State<SharedState>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let kind = ListingKind::Testimonials;
    let page = parse_page(query.page.as_deref());

    match list_testimonials_data(&state.client, page).await {
        Ok(output) => respond(
            StatusCode::OK,
            views::document(
                &Page::new(kind.heading(), &state.site),
                views::listing::testimonials(&output),
            ),
        ),
        Err(e) => listing_failed(&state, kind, e),
    }
}

pub async fn scholarship(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    match scholarship_detail_data(&state.client, &id).await {
        Ok(output) => respond(
            StatusCode::OK,
            views::document(
                &Page::new(&output.item.title, &state.site),
                views::detail::scholarship(&output, &state.site, &EnquiryPanel::default()),
            ),
        ),
        Err(e) => detail_failed(&state, PostKind::Scholarship, e),
    }
}

pub async fn visa(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    match visa_detail_data(&state.client, &id).await {
        Ok(output) => respond(
            StatusCode::OK,
            views::document(
                &Page::new(&output.item.title, &state.site),
                views::detail::visa(&output, &state.site, &EnquiryPanel::default()),
            ),
        ),
        Err(e) => detail_failed(&state, PostKind::Visa, e),
    }
}

pub async fn about(State(state): State<SharedState>) -> Response {
    respond(
        StatusCode::OK,
        views::document(&Page::new("About", &state.site), views::info::about()),
    )
}

pub async fn privacy(State(state): State<SharedState>) -> Response {
    respond(
        StatusCode::OK,
        views::document(
            &Page::new("Privacy Policy", &state.site),
            views::info::privacy(&state.site),
        ),
    )
}

pub async fn terms(State(state): State<SharedState>) -> Response {
    respond(
        StatusCode::OK,
        views::document(
            &Page::new("Terms and Conditions", &state.site),
            views::info::terms(&state.site),
        ),
    )
}

pub async fn not_found(State(state): State<SharedState>) -> Response {
    respond(
        StatusCode::NOT_FOUND,
        views::document(
            &Page::new("Page not found", &state.site).not_found(),
            views::info::not_found(),
        ),
    )
}
