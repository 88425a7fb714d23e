use crate::prelude::*;

/// Content API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub const ENV: &'static str = "CONSULTANCY_API_URL";

    /// Resolves the base URL from the `--api-url` flag (which already falls
    /// back to `CONSULTANCY_API_URL`)
    pub fn resolve(api_url: Option<String>) -> Result<Self> {
        let base_url = api_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| eyre!("{} environment variable not set", Self::ENV))?;

        Ok(Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }
}

/// Public-facing site settings
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Chat number used in pre-filled `wa.me` links
    pub chat_number: String,
    /// Address used for `mailto:` quick links, when set
    pub enquiry_email: Option<String>,
}

impl SiteConfig {
    pub const DEFAULT_CHAT_NUMBER: &'static str = "447392893665";

    pub fn from_env() -> Self {
        Self {
            chat_number: std::env::var("CONSULTANCY_CHAT_NUMBER")
                .ok()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| Self::DEFAULT_CHAT_NUMBER.to_string()),
            enquiry_email: std::env::var("CONTACT_EMAIL")
                .ok()
                .filter(|e| !e.trim().is_empty()),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            chat_number: Self::DEFAULT_CHAT_NUMBER.to_string(),
            enquiry_email: None,
        }
    }
}

/// Mail relay credentials and recipient
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub relay_url: String,
    pub user: String,
    pub pass: String,
    pub recipient: String,
}

/// Messaging API credentials and numbers
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_url: String,
    pub account_sid: String,
    pub auth_token: String,
    pub from: String,
    pub to: String,
}

impl ChatConfig {
    /// Default Twilio REST API base URL
    pub const DEFAULT_API_URL: &'static str = "https://api.twilio.com/2010-04-01";
}

/// Everything the contact relay needs
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub mail: MailConfig,
    pub chat: ChatConfig,
}

fn required(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| eyre!("{} environment variable not set", name))
}

impl RelayConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            mail: MailConfig {
                relay_url: required("MAIL_RELAY_URL")?,
                user: required("EMAIL_USER")?,
                pass: required("EMAIL_PASS")?,
                recipient: required("CONTACT_EMAIL")?,
            },
            chat: ChatConfig {
                api_url: std::env::var("TWILIO_API_URL")
                    .unwrap_or_else(|_| ChatConfig::DEFAULT_API_URL.to_string()),
                account_sid: required("TWILIO_ACCOUNT_SID")?,
                auth_token: required("TWILIO_AUTH_TOKEN")?,
                from: required("TWILIO_WHATSAPP_NUMBER")
                    .wrap_err("WhatsApp sender number is not defined")?,
                to: required("WHATSAPP_NUMBER")
                    .wrap_err("WhatsApp recipient number is not defined")?,
            },
        })
    }
}
