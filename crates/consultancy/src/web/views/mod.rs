//! HTML rendering with maud
//!
//! Every page goes through [`document`]. Chrome (navigation and footer) is
//! decided by the [`RouteClass`] handed in by the router, never by looking
//! at the rendered body.

use crate::config::SiteConfig;
use crate::notify::Notice;
use consultancy_core::pagination::{page_href, PageToken};
use consultancy_core::route::RouteClass;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub mod detail;
pub mod forms;
pub mod info;
pub mod listing;

pub const SITE_NAME: &str = "HS Consultancy Services";

const CSS: &str = include_str!("../../../static/site.css");

const FACEBOOK_URL: &str = "https://www.facebook.com/consulant.sameera";
const TIKTOK_URL: &str = "https://www.tiktok.com/@hs.consultancyservice";

/// Everything the layout needs besides the page body
pub struct Page<'a> {
    pub title: &'a str,
    pub route: RouteClass,
    pub site: &'a SiteConfig,
    pub toast: Option<&'a Notice>,
}

impl<'a> Page<'a> {
    pub fn new(title: &'a str, site: &'a SiteConfig) -> Self {
        Self {
            title,
            route: RouteClass::Ok,
            site,
            toast: None,
        }
    }

    pub fn not_found(self) -> Self {
        Self {
            route: RouteClass::NotFound,
            ..self
        }
    }

    pub fn with_toast(self, toast: Option<&'a Notice>) -> Self {
        Self { toast, ..self }
    }
}

pub fn document(page: &Page, content: Markup) -> Markup {
    let title = if page.title.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{} | {}", page.title, SITE_NAME)
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                @if page.route.shows_chrome() {
                    a.skip-link href="#main-content" { "Skip to main content" }
                    (nav())
                }
                @if let Some(notice) = page.toast {
                    (toast(notice))
                }
                main id="main-content" {
                    (content)
                }
                @if page.route.shows_chrome() {
                    (footer(page.site))
                }
            }
        }
    }
}

fn nav() -> Markup {
    html! {
        header.site-header {
            nav.container aria-label="Main navigation" {
                a.brand href="/" {
                    span.brand-name { (SITE_NAME) }
                    span.brand-tagline { "Find opportunities & visa guidance" }
                }
                ul.nav-links {
                    li { a href="/" { "Home" } }
                    li { a href="/visas" { "Visas" } }
                    li { a href="/testimonials" { "Testimonials" } }
                    li { a href="/contact" { "Contact" } }
                }
            }
        }
    }
}

fn footer(site: &SiteConfig) -> Markup {
    let year = chrono::Utc::now().format("%Y");

    html! {
        footer.site-footer {
            div.container.footer-grid {
                section {
                    h2 { (SITE_NAME) }
                    p {
                        "Empowering students with global opportunities. "
                        "Explore, apply, and achieve your dreams with us."
                    }
                }
                nav aria-label="Footer navigation" {
                    h3 { "Quick Links" }
                    ul {
                        li { a href="/about" { "About Us" } }
                        li { a href="/contact" { "Contact" } }
                        li { a href="/privacy-policy" { "Privacy Policy" } }
                        li { a href="/terms" { "Terms & Conditions" } }
                    }
                }
                section {
                    h3 { "Connect With Us" }
                    (social_links(site))
                }
            }
            p.copyright { "© " (year) " " (SITE_NAME) ". All rights reserved." }
        }
    }
}

pub fn social_links(site: &SiteConfig) -> Markup {
    html! {
        ul.social {
            li { a href={ "https://wa.me/" (site.chat_number) } target="_blank" rel="noopener noreferrer" { "WhatsApp" } }
            li { a href=(FACEBOOK_URL) target="_blank" rel="noopener noreferrer" { "Facebook" } }
            li { a href=(TIKTOK_URL) target="_blank" rel="noopener noreferrer" { "TikTok" } }
        }
    }
}

fn toast(notice: &Notice) -> Markup {
    html! {
        div class={ "toast toast-" (notice.kind.as_str()) } role="status" {
            (notice.text)
        }
    }
}

/// Dedicated error panel used whenever a primary fetch fails
pub fn error_block(message: &str) -> Markup {
    html! {
        div.error-block role="alert" {
            p { (message) }
        }
    }
}

/// Windowed pagination bar; renders nothing for an empty token list
pub fn pagination(tokens: &[PageToken], base_path: &str, extra: &[(&str, &str)]) -> Markup {
    html! {
        @if !tokens.is_empty() {
            nav.pagination aria-label="Pagination" {
                @for token in tokens {
                    @match token {
                        PageToken::Previous(page) => {
                            a.page-link rel="prev" href=(page_href(base_path, *page, extra)) { "Previous" }
                        }
                        PageToken::Page { number, current: true } => {
                            span.page-link.current aria-current="page" { (number) }
                        }
                        PageToken::Page { number, current: false } => {
                            a.page-link href=(page_href(base_path, *number, extra)) { (number) }
                        }
                        PageToken::Ellipsis => {
                            span.ellipsis { "…" }
                        }
                        PageToken::Next(page) => {
                            a.page-link rel="next" href=(page_href(base_path, *page, extra)) { "Next" }
                        }
                    }
                }
            }
        }
    }
}

/// Image with a neutral placeholder when the record has none
pub fn image_or_placeholder(image: Option<&str>, alt: &str, class: &str) -> Markup {
    html! {
        @match image {
            Some(src) => {
                img class=(class) src=(src) alt=(alt) loading="lazy";
            }
            None => {
                div class={ (class) " placeholder" } aria-hidden="true" {}
            }
        }
    }
}
