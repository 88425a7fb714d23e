use super::forms::{enquiry_dialog, EnquiryPanel};
use super::{error_block, image_or_placeholder};
use crate::config::SiteConfig;
use consultancy_core::content::{Scholarship, Visa};
use consultancy_core::detail::{DetailOutput, Extras, PostSummary};
use consultancy_core::enquiry::{interest_link, mailto_link, Topic};
use maud::{html, Markup};

fn post_list(heading: &str, posts: &[PostSummary]) -> Markup {
    html! {
        section.post-list {
            h3 { (heading) }
            @if posts.is_empty() {
                p.empty { "Nothing to show yet." }
            } @else {
                ul {
                    @for post in posts {
                        li {
                            a href=(post.href) {
                                (image_or_placeholder(post.image.as_deref(), &post.title, "thumb"))
                                span.title { (post.title) }
                                @if let Some(date) = &post.date {
                                    span.date { (date) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Related and recent sections, or one inline message when they failed
pub fn extras(extras: &Extras, related_heading: &str) -> Markup {
    html! {
        aside.extras {
            @match extras {
                Extras::Loaded { related, recent } => {
                    (post_list(related_heading, related))
                    (post_list("Recent Posts", recent))
                }
                Extras::Failed { message } => {
                    p.inline-error role="alert" { (message) }
                }
            }
        }
    }
}

fn quick_links(site: &SiteConfig, title: &str) -> Markup {
    html! {
        div.quick-links {
            a.button.whatsapp href=(interest_link(&site.chat_number, title)) target="_blank" rel="noopener noreferrer" {
                "WhatsApp"
            }
            @if let Some(address) = &site.enquiry_email {
                a.button href=(mailto_link(address, title)) { "Email" }
            }
            (super::social_links(site))
        }
    }
}

fn info(label: &str, value: &str) -> Markup {
    html! {
        div.info {
            strong { (label) ":" }
            " "
            span { (value) }
        }
    }
}

pub fn scholarship(
    output: &DetailOutput<Scholarship>,
    site: &SiteConfig,
    panel: &EnquiryPanel,
) -> Markup {
    let s = &output.item;
    let topic = Topic::Scholarship(s.title.clone());

    html! {
        div.detail-layout {
            article.detail {
                header.hero {
                    (image_or_placeholder(s.image.as_deref(), &s.title, "hero-image"))
                    h1 { (s.title) }
                    p.subtitle { (s.institution) " — " (s.host_country) }
                }
                div.info-grid {
                    (info("Host Country", &s.host_country))
                    (info("Institution", &s.institution))
                    (info("Deadline", s.deadline.as_deref().unwrap_or("Not specified")))
                    (info("Category", &s.category))
                    (info("Reward", &s.reward))
                    (info("Stipend", &s.stipend))
                }
                div.badges {
                    @if s.fully_funded {
                        span.badge.funded { "Fully Funded" }
                    }
                    @if s.health_insurance {
                        span.badge.insurance { "Health Insurance" }
                    }
                    @if s.ielts_required {
                        span.badge.ielts { "IELTS Required" }
                    } @else {
                        span.badge { "IELTS Not Required" }
                    }
                }
                @if !s.eligible_countries.is_empty() {
                    section aria-label="Eligible Countries" {
                        h3 { "Eligible Countries" }
                        div.tags {
                            @for country in &s.eligible_countries {
                                span.tag { (country) }
                            }
                        }
                    }
                }
                section aria-label="Scholarship Description" {
                    h3 { "Description" }
                    p.description { (s.description) }
                }
                (enquiry_dialog(&format!("/scholarships/{}/enquiry", s.id), &topic, panel))
                (quick_links(site, &s.title))
            }
            (extras(&output.extras, "Related Scholarships"))
        }
    }
}

pub fn visa(output: &DetailOutput<Visa>, site: &SiteConfig, panel: &EnquiryPanel) -> Markup {
    let v = &output.item;
    let topic = Topic::Visa(v.title.clone());

    html! {
        div.detail-layout {
            article.detail {
                header.hero {
                    (image_or_placeholder(v.image.as_deref(), &v.title, "hero-image"))
                    h1 { (v.title) }
                    p.subtitle { (v.country) }
                }
                div.info-grid {
                    @if let Some(time) = &v.processing_time {
                        (info("Processing Time", time))
                    }
                    @if let Some(fee) = &v.fee {
                        (info("Fee", fee))
                    }
                }
                section aria-label="Visa Description" {
                    h3 { "Description" }
                    p.description { (v.description) }
                }
                @if !v.requirements.is_empty() {
                    section aria-label="Requirements" {
                        h3 { "Requirements" }
                        ul.requirements {
                            @for requirement in &v.requirements {
                                li { (requirement) }
                            }
                        }
                    }
                }
                (enquiry_dialog(&format!("/visas/{}/enquiry", v.id), &topic, panel))
                (quick_links(site, &v.title))
            }
            (extras(&output.extras, &format!("More Visas for {}", v.country)))
        }
    }
}

/// Full-page failure for a detail route; nothing else is rendered
pub fn failed(message: &str) -> Markup {
    html! {
        section.detail-error {
            (error_block(message))
            p { a href="/" { "Back to home" } }
        }
    }
}

/// The record behind an enquiry could not be loaded; the dialog reopens
/// with the visitor's values so the enquiry can be resent
pub fn enquiry_failed(message: &str, action: &str, topic: &Topic, panel: &EnquiryPanel) -> Markup {
    html! {
        section.detail-error {
            (error_block(message))
            (enquiry_dialog(action, topic, panel))
            p { a href="/" { "Back to home" } }
        }
    }
}
