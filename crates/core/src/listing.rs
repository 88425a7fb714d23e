//! Listing pages: kinds, page sizes and card shaping

use serde::Serialize;

use crate::content::{excerpt, format_date, Scholarship, Visa};
use crate::pagination::{clamp_page, paginate, total_pages, PageToken};

/// Characters kept from a description on a listing card
pub const CARD_EXCERPT_CHARS: usize = 140;

/// The three paginated collections the site lists
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Scholarships,
    Visas,
    Testimonials,
}

impl ListingKind {
    /// Fixed page size per listing type
    pub fn page_size(self) -> usize {
        match self {
            ListingKind::Scholarships | ListingKind::Visas => 9,
            ListingKind::Testimonials => 12,
        }
    }

    /// Content API collection path
    pub fn api_path(self) -> &'static str {
        match self {
            ListingKind::Scholarships => "/scholarships",
            ListingKind::Visas => "/visas",
            ListingKind::Testimonials => "/testimonials",
        }
    }

    /// Site path the pagination links point at
    pub fn base_path(self) -> &'static str {
        match self {
            ListingKind::Scholarships => "/",
            ListingKind::Visas => "/visas",
            ListingKind::Testimonials => "/testimonials",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            ListingKind::Scholarships => "Scholarships",
            ListingKind::Visas => "Visa Opportunities",
            ListingKind::Testimonials => "Testimonials",
        }
    }

    pub fn intro(self) -> &'static str {
        match self {
            ListingKind::Scholarships => {
                "Browse available scholarships and click to view details."
            }
            ListingKind::Visas => "Explore visa programs and opportunities around the world.",
            ListingKind::Testimonials => {
                "See what our clients and students have to say about their experience."
            }
        }
    }

    /// Message shown for a successful but empty page
    pub fn empty_message(self) -> &'static str {
        match self {
            ListingKind::Scholarships => "No scholarships available at the moment.",
            ListingKind::Visas => "No visa opportunities available at the moment.",
            ListingKind::Testimonials => "No testimonials available at the moment.",
        }
    }

    /// Message shown when the fetch fails and the API gave no message
    pub fn failure_message(self) -> &'static str {
        match self {
            ListingKind::Scholarships => "Failed to load scholarships.",
            ListingKind::Visas => "Failed to load visas.",
            ListingKind::Testimonials => "Failed to load testimonials.",
        }
    }
}

/// Pagination metadata for a listing page
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ListPaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub limit: usize,
    pub tokens: Vec<PageToken>,
}

/// One fetched page of a listing
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ListOutput<T> {
    pub kind: ListingKind,
    pub items: Vec<T>,
    pub pagination: ListPaginationInfo,
}

/// Shapes a fetched page into a listing with its pagination controls
///
/// `total_items` is the API's `total`; a missing total counts as zero, which
/// suppresses the pagination bar.
pub fn build_listing<T>(
    kind: ListingKind,
    items: Vec<T>,
    page: usize,
    total_items: usize,
) -> ListOutput<T> {
    let limit = kind.page_size();
    let total_pages = total_pages(total_items, limit);
    let current_page = clamp_page(page, total_pages);

    ListOutput {
        kind,
        items,
        pagination: ListPaginationInfo {
            current_page,
            total_pages,
            total_items,
            limit,
            tokens: paginate(current_page, total_pages),
        },
    }
}

/// Generic card rendered for scholarships and visas
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Card {
    pub href: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub excerpt: String,
}

pub fn scholarship_card(scholarship: &Scholarship) -> Card {
    Card {
        href: format!("/scholarships/{}", scholarship.id),
        title: scholarship.title.clone(),
        subtitle: Some(format!(
            "{} • {}",
            scholarship.institution, scholarship.host_country
        )),
        date: scholarship.created_at.as_deref().and_then(format_date),
        image: scholarship.image.clone(),
        excerpt: excerpt(&scholarship.description, CARD_EXCERPT_CHARS),
    }
}

pub fn visa_card(visa: &Visa) -> Card {
    Card {
        href: format!("/visas/{}", visa.id),
        title: format!("{} — {}", visa.title, visa.country),
        subtitle: visa
            .processing_time
            .clone()
            .filter(|time| !time.trim().is_empty()),
        date: visa.created_at.as_deref().and_then(format_date),
        image: visa.image.clone(),
        excerpt: excerpt(&visa.description, CARD_EXCERPT_CHARS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scholarship(id: &str) -> Scholarship {
        Scholarship {
            id: id.to_string(),
            title: "DAAD Scholarship".to_string(),
            institution: "DAAD".to_string(),
            description: "Funding for graduate study in Germany".to_string(),
            host_country: "Germany".to_string(),
            category: "Masters".to_string(),
            eligible_countries: vec!["Nigeria".to_string()],
            reward: "Tuition".to_string(),
            stipend: "€934/month".to_string(),
            deadline: Some("2025-10-31".to_string()),
            health_insurance: true,
            ielts_required: true,
            fully_funded: true,
            image: Some("https://img/daad.jpg".to_string()),
            created_at: Some("2025-08-15T09:30:00Z".to_string()),
        }
    }

    fn visa(id: &str) -> Visa {
        Visa {
            id: id.to_string(),
            title: "Skilled Worker".to_string(),
            country: "United Kingdom".to_string(),
            description: "Work in the UK".to_string(),
            requirements: vec!["Job offer".to_string()],
            fee: Some("£719".to_string()),
            processing_time: Some("3 weeks".to_string()),
            image: None,
            created_at: None,
        }
    }

    #[test]
    fn test_page_sizes() {
        assert_eq!(ListingKind::Scholarships.page_size(), 9);
        assert_eq!(ListingKind::Visas.page_size(), 9);
        assert_eq!(ListingKind::Testimonials.page_size(), 12);
    }

    #[test]
    fn test_build_listing_computes_total_pages() {
        let output = build_listing(ListingKind::Scholarships, vec![scholarship("a")], 2, 20);
        assert_eq!(output.pagination.total_pages, 3);
        assert_eq!(output.pagination.current_page, 2);
        assert_eq!(output.pagination.limit, 9);
        assert_eq!(output.pagination.tokens, paginate(2, 3));
    }

    #[test]
    fn test_build_listing_single_page_has_no_controls() {
        let output = build_listing(ListingKind::Testimonials, Vec::<()>::new(), 1, 12);
        assert_eq!(output.pagination.total_pages, 1);
        assert!(output.pagination.tokens.is_empty());
    }

    #[test]
    fn test_build_listing_clamps_page_past_the_end() {
        let output = build_listing(ListingKind::Visas, Vec::<Visa>::new(), 40, 19);
        assert_eq!(output.pagination.total_pages, 3);
        assert_eq!(output.pagination.current_page, 3);
        assert_eq!(output.pagination.tokens.last(), Some(&PageToken::Page {
            number: 3,
            current: true
        }));
    }

    #[test]
    fn test_build_listing_without_total() {
        let output = build_listing(ListingKind::Visas, vec![visa("v")], 1, 0);
        assert_eq!(output.pagination.total_pages, 0);
        assert_eq!(output.pagination.current_page, 1);
        assert!(output.pagination.tokens.is_empty());
    }

    #[test]
    fn test_scholarship_card() {
        let card = scholarship_card(&scholarship("abc"));
        assert_eq!(card.href, "/scholarships/abc");
        assert_eq!(card.subtitle.as_deref(), Some("DAAD • Germany"));
        assert_eq!(card.date.as_deref(), Some("Aug 15, 2025"));
        assert_eq!(card.image.as_deref(), Some("https://img/daad.jpg"));
    }

    #[test]
    fn test_visa_card() {
        let card = visa_card(&visa("xyz"));
        assert_eq!(card.href, "/visas/xyz");
        assert_eq!(card.title, "Skilled Worker — United Kingdom");
        assert_eq!(card.subtitle.as_deref(), Some("3 weeks"));
        assert_eq!(card.date, None);
    }

    #[test]
    fn test_visa_card_blank_processing_time() {
        let mut v = visa("xyz");
        v.processing_time = Some("  ".to_string());
        assert_eq!(visa_card(&v).subtitle, None);
    }
}
