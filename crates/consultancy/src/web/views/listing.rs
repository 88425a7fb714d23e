use super::{image_or_placeholder, pagination};
use consultancy_core::content::{format_date, MediaKind, Scholarship, Testimonial, Visa};
use consultancy_core::listing::{scholarship_card, visa_card, Card, ListOutput, ListingKind};
use maud::{html, Markup};

fn header(kind: ListingKind) -> Markup {
    html! {
        header.page-header {
            h1 { (kind.heading()) }
            p.intro { (kind.intro()) }
        }
    }
}

pub fn card(card: &Card) -> Markup {
    html! {
        a.card-link href=(card.href) {
            article.card {
                (image_or_placeholder(card.image.as_deref(), &card.title, "card-image"))
                div.card-body {
                    h3 { (card.title) }
                    @if let Some(subtitle) = &card.subtitle {
                        p.subtitle { (subtitle) }
                    }
                    @if let Some(date) = &card.date {
                        p.date { "Posted on " (date) }
                    }
                    p.excerpt { (card.excerpt) }
                }
            }
        }
    }
}

fn card_grid(kind: ListingKind, cards: &[Card]) -> Markup {
    html! {
        @if cards.is_empty() {
            p.empty { (kind.empty_message()) }
        } @else {
            div.grid {
                @for c in cards {
                    (card(c))
                }
            }
        }
    }
}

pub fn scholarships(output: &ListOutput<Scholarship>) -> Markup {
    let kind = output.kind;
    let cards: Vec<Card> = output.items.iter().map(scholarship_card).collect();

    html! {
        section.listing {
            (header(kind))
            (card_grid(kind, &cards))
            (pagination(&output.pagination.tokens, kind.base_path(), &[]))
        }
    }
}

pub fn visas(output: &ListOutput<Visa>, country: Option<&str>) -> Markup {
    let kind = output.kind;
    let cards: Vec<Card> = output.items.iter().map(visa_card).collect();
    let country = country.unwrap_or_default();

    html! {
        section.listing {
            (header(kind))
            form.filter method="get" action=(kind.base_path()) {
                label for="country" { "Country" }
                input id="country" type="text" name="country" value=(country) placeholder="Any country";
                button type="submit" { "Filter" }
            }
            (card_grid(kind, &cards))
            (pagination(&output.pagination.tokens, kind.base_path(), &[("country", country)]))
        }
    }
}

fn testimonial(t: &Testimonial) -> Markup {
    html! {
        article.testimonial {
            div.author {
                (image_or_placeholder(t.profile_picture.as_deref(), t.author(), "avatar"))
                div {
                    p.name { (t.author()) }
                    @if let Some(date) = t.created_at.as_deref().and_then(format_date) {
                        p.date { (date) }
                    }
                }
            }
            blockquote { (t.message) }
            @if let Some(media) = &t.media {
                @match media.kind {
                    MediaKind::Video => {
                        video.media src=(media.url) controls preload="metadata" {}
                    }
                    MediaKind::Image => {
                        img.media src=(media.url) alt={ "Shared by " (t.author()) } loading="lazy";
                    }
                }
            }
        }
    }
}

pub fn testimonials(output: &ListOutput<Testimonial>) -> Markup {
    let kind = output.kind;

    html! {
        section.listing {
            (header(kind))
            @if output.items.is_empty() {
                p.empty { (kind.empty_message()) }
            } @else {
                div.grid.testimonials {
                    @for t in &output.items {
                        (testimonial(t))
                    }
                }
            }
            (pagination(&output.pagination.tokens, kind.base_path(), &[]))
        }
    }
}

/// Listing heading plus the error panel; no stale items are shown
pub fn failed(kind: ListingKind, message: &str) -> Markup {
    html! {
        section.listing {
            (header(kind))
            (super::error_block(message))
        }
    }
}
