//! Records returned by the content API
//!
//! Every record is read-only. Image fields arrive either as a plain URL
//! string or as a `{ url, public_id }` record; both shapes are collapsed to
//! `Option<String>` while deserializing so nothing downstream has to care.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Domain Models (Input from API)
// ============================================================================

/// Response envelope shared by every content API endpoint
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a non-2xx response, when the API sends one
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scholarship {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub host_country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub eligible_countries: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reward: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stipend: String,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub health_insurance: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ielts_required: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fully_funded: bool,
    #[serde(default, deserialize_with = "deserialize_image")]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Visa {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub fee: Option<String>,
    #[serde(default)]
    pub processing_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_image")]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "deserialize_image")]
    pub profile_picture: Option<String>,
    #[serde(default, deserialize_with = "deserialize_media")]
    pub media: Option<Media>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Testimonial {
    pub fn author(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "Anonymous",
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Testimonial attachment, already normalized
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Media {
    pub url: String,
    pub kind: MediaKind,
}

// ============================================================================
// Boundary Normalization
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum ImageField {
    Url(String),
    Record {
        #[serde(default)]
        url: Option<String>,
    },
    Other(serde_json::Value),
}

impl ImageField {
    fn into_url(self) -> Option<String> {
        let url = match self {
            ImageField::Url(url) => url,
            ImageField::Record { url } => url?,
            ImageField::Other(_) => return None,
        };
        let url = url.trim();
        (!url.is_empty()).then(|| url.to_string())
    }
}

/// Collapses the string-or-record image shape into an optional URL
pub fn deserialize_image<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<ImageField>::deserialize(deserializer)?;
    Ok(raw.and_then(ImageField::into_url))
}

/// Reads an explicit `null` the same way as a missing key
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Deserialize)]
struct RawMedia {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    resource_type: Option<String>,
}

fn deserialize_media<'de, D>(deserializer: D) -> Result<Option<Media>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawMedia>::deserialize(deserializer)?;
    Ok(raw.and_then(|media| {
        let url = media.url.filter(|url| !url.trim().is_empty())?;
        let kind = match media.resource_type.as_deref() {
            Some("video") => MediaKind::Video,
            _ => MediaKind::Image,
        };
        Some(Media { url, kind })
    }))
}

// ============================================================================
// Pure Helper Functions
// ============================================================================

/// Formats an API timestamp as `Oct 16, 2026`
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates. Anything else
/// yields `None` so the caller can skip the date line.
pub fn format_date(timestamp: &str) -> Option<String> {
    let timestamp = timestamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.format("%b %-d, %Y").to_string());
    }
    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%b %-d, %Y").to_string())
}

/// Shortens a description to at most `max_chars` characters, on a word boundary
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    let cut = match cut.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{}…", cut.trim_end_matches(|c: char| c.is_whitespace() || c == ','))
}
