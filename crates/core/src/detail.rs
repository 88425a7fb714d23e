//! Detail pages: the primary record plus related and recent summaries
//!
//! A detail page is built in two phases. The primary record must load or the
//! whole page is an error. The related/recent sets load afterwards and their
//! failure is confined to their own section.

use serde::Serialize;

use crate::content::{format_date, Scholarship, Visa};

/// Related entries shown under a detail page
pub const RELATED_LIMIT: usize = 3;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Scholarship,
    Visa,
}

impl PostKind {
    pub fn path(self, id: &str) -> String {
        match self {
            PostKind::Scholarship => format!("/scholarships/{id}"),
            PostKind::Visa => format!("/visas/{id}"),
        }
    }

    /// Message for a failed related/recent fetch
    pub fn extras_failure_message(self) -> &'static str {
        match self {
            PostKind::Scholarship => "Failed to load related or recent scholarships.",
            PostKind::Visa => "Failed to load related or recent visas.",
        }
    }

    /// Message for a failed primary fetch when the API gave none
    pub fn failure_message(self) -> &'static str {
        match self {
            PostKind::Scholarship => "Failed to load scholarship details.",
            PostKind::Visa => "Failed to load visa details.",
        }
    }
}

/// Compact entry in the related/recent lists
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub kind: PostKind,
    pub href: String,
    pub image: Option<String>,
    pub date: Option<String>,
}

impl From<&Scholarship> for PostSummary {
    fn from(s: &Scholarship) -> Self {
        PostSummary {
            id: s.id.clone(),
            title: s.title.clone(),
            kind: PostKind::Scholarship,
            href: PostKind::Scholarship.path(&s.id),
            image: s.image.clone(),
            date: s.created_at.as_deref().and_then(format_date),
        }
    }
}

impl From<&Visa> for PostSummary {
    fn from(v: &Visa) -> Self {
        PostSummary {
            id: v.id.clone(),
            title: v.title.clone(),
            kind: PostKind::Visa,
            href: PostKind::Visa.path(&v.id),
            image: v.image.clone(),
            date: v.created_at.as_deref().and_then(format_date),
        }
    }
}

/// Summarizes `items`, dropping the record currently being viewed
pub fn summarize<'a, T>(items: &'a [T], exclude_id: &str, limit: Option<usize>) -> Vec<PostSummary>
where
    &'a T: Into<PostSummary>,
{
    items
        .iter()
        .map(|item| -> PostSummary { item.into() })
        .filter(|summary| summary.id != exclude_id)
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// State of the related/recent section
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Extras {
    Loaded {
        related: Vec<PostSummary>,
        recent: Vec<PostSummary>,
    },
    Failed {
        message: String,
    },
}

/// Fully assembled detail page data
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DetailOutput<T> {
    pub item: T,
    pub extras: Extras,
}

/// Builds the extras section from successfully fetched related/recent sets
pub fn build_extras<'a, T>(exclude_id: &str, related: &'a [T], recent: &'a [T]) -> Extras
where
    &'a T: Into<PostSummary>,
{
    Extras::Loaded {
        related: summarize(related, exclude_id, Some(RELATED_LIMIT)),
        recent: summarize(recent, exclude_id, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visa(id: &str, title: &str) -> Visa {
        Visa {
            id: id.to_string(),
            title: title.to_string(),
            country: "Canada".to_string(),
            description: String::new(),
            requirements: Vec::new(),
            fee: None,
            processing_time: None,
            image: Some(format!("https://img/{id}.jpg")),
            created_at: Some("2025-03-04T00:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_summary_from_visa() {
        let summary = PostSummary::from(&visa("v1", "Study Permit"));
        assert_eq!(summary.href, "/visas/v1");
        assert_eq!(summary.kind, PostKind::Visa);
        assert_eq!(summary.date.as_deref(), Some("Mar 4, 2025"));
    }

    #[test]
    fn test_summarize_excludes_current_record() {
        let items = vec![visa("v1", "A"), visa("v2", "B"), visa("v3", "C")];
        let summaries = summarize(&items, "v2", None);
        let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v3"]);
    }

    #[test]
    fn test_build_extras_limits_related() {
        let related: Vec<Visa> = (1..=6).map(|i| visa(&format!("v{i}"), "R")).collect();
        let recent = vec![visa("v1", "Self"), visa("v9", "New")];

        match build_extras("v1", &related, &recent) {
            Extras::Loaded { related, recent } => {
                assert_eq!(related.len(), RELATED_LIMIT);
                assert!(related.iter().all(|s| s.id != "v1"));
                assert_eq!(recent.len(), 1);
                assert_eq!(recent[0].id, "v9");
            }
            other => panic!("unexpected extras: {other:?}"),
        }
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            PostKind::Scholarship.extras_failure_message(),
            "Failed to load related or recent scholarships."
        );
        assert_eq!(
            PostKind::Visa.failure_message(),
            "Failed to load visa details."
        );
    }
}
