/// Failure of a single content API round trip
///
/// Not-found, server errors and unreachable hosts are deliberately not told
/// apart; callers only ever turn this into a message for the page.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error [{status}]: {}", .message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl Error {
    /// Message shown to visitors: the API's own message when it sent one,
    /// otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
