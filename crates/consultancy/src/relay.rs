//! Contact relay: forwards a validated enquiry by email and by chat
//!
//! The email goes to a mail relay endpoint that accepts a structured
//! message; the chat message goes through the Twilio Messages API. Email is
//! sent first, and a failure of either fails the whole relay.

use crate::config::{ChatConfig, MailConfig, RelayConfig};
use crate::prelude::*;
use consultancy_core::contact::{contact_chat_body, contact_email, ContactEmail};
use consultancy_core::enquiry::Enquiry;

pub async fn send_email(
    client: &reqwest::Client,
    config: &MailConfig,
    email: &ContactEmail,
) -> Result<()> {
    let response = client
        .post(&config.relay_url)
        .basic_auth(&config.user, Some(&config.pass))
        .json(email)
        .send()
        .await
        .map_err(|e| eyre!("Failed to reach mail relay: {}", e))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(eyre!("Mail relay error [{}]: {}", status, body));
    }

    Ok(())
}

pub async fn send_chat(client: &reqwest::Client, config: &ChatConfig, body: &str) -> Result<()> {
    let base_url = config.api_url.trim_end_matches('/');
    let url = format!("{base_url}/Accounts/{}/Messages.json", config.account_sid);

    let response = client
        .post(&url)
        .basic_auth(&config.account_sid, Some(&config.auth_token))
        .form(&[
            ("Body", body),
            ("From", config.from.as_str()),
            ("To", config.to.as_str()),
        ])
        .send()
        .await
        .map_err(|e| eyre!("Failed to reach messaging API: {}", e))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(eyre!("Messaging API error [{}]: {}", status, body));
    }

    Ok(())
}

/// Sends the enquiry by email, then by chat
pub async fn relay_contact(
    client: &reqwest::Client,
    config: &RelayConfig,
    enquiry: &Enquiry,
) -> Result<()> {
    let email = contact_email(enquiry, &config.mail.recipient);
    send_email(client, &config.mail, &email).await?;

    log::info!("contact email relayed for {}", enquiry.email);

    send_chat(client, &config.chat, &contact_chat_body(enquiry)).await?;

    log::info!("contact chat message relayed for {}", enquiry.email);

    Ok(())
}
