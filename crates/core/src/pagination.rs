//! Windowed pagination for listing pages
//!
//! Pure functions that turn `(current_page, total_pages)` into the sequence
//! of controls a listing page renders: first and last page, the current page
//! with one neighbour on each side, a single ellipsis for every gap, and
//! previous/next steps where they make sense.

use serde::Serialize;

/// A single control in the pagination bar
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageToken {
    /// Step back; carries the page it links to
    Previous(usize),
    Page { number: usize, current: bool },
    Ellipsis,
    /// Step forward; carries the page it links to
    Next(usize),
}

/// Number of pages needed to show `total_items` at `limit` per page
pub fn total_pages(total_items: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    total_items.div_ceil(limit)
}

/// Parses a `?page=` value the lenient way: anything unusable means page 1
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Clamps a requested page into `[1, total_pages]`
///
/// With no pages at all the result is 1, which keeps links well-formed.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Builds the pagination sequence for `current_page` out of `total_pages`
///
/// Returns an empty sequence when there is at most one page. The current
/// page is not validated here; callers clamp it first.
pub fn paginate(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut numbers = vec![
        1,
        current_page.saturating_sub(1),
        current_page,
        current_page.saturating_add(1),
        total_pages,
    ];
    numbers.retain(|page| (1..=total_pages).contains(page));
    numbers.sort_unstable();
    numbers.dedup();

    let mut tokens = Vec::with_capacity(numbers.len() * 2 + 2);

    if current_page > 1 {
        tokens.push(PageToken::Previous(current_page - 1));
    }

    let mut previous: Option<usize> = None;
    for number in numbers {
        if let Some(prev) = previous {
            if number - prev > 1 {
                tokens.push(PageToken::Ellipsis);
            }
        }
        tokens.push(PageToken::Page {
            number,
            current: number == current_page,
        });
        previous = Some(number);
    }

    if current_page < total_pages {
        tokens.push(PageToken::Next(current_page + 1));
    }

    tokens
}

/// Builds the link for `page` under `base_path`, keeping extra query pairs
///
/// Extra pairs with empty values are skipped.
pub fn page_href(base_path: &str, page: usize, extra: &[(&str, &str)]) -> String {
    let mut href = format!("{base_path}?page={page}");
    for (key, value) in extra {
        if value.is_empty() {
            continue;
        }
        href.push('&');
        href.push_str(key);
        href.push('=');
        href.push_str(&urlencoding::encode(value));
    }
    href
}
