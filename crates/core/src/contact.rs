//! Message templating for the contact relay
//!
//! The relay forwards a validated enquiry twice: once as an email and once
//! as a chat message. This module only builds those messages.

use serde::Serialize;

use crate::enquiry::Enquiry;

/// Structured email handed to the mail relay
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

pub fn contact_email(enquiry: &Enquiry, recipient: &str) -> ContactEmail {
    let name = html_escape::encode_text(&enquiry.name);
    let email = html_escape::encode_text(&enquiry.email);
    let message = html_escape::encode_text(&enquiry.message).replace('\n', "<br/>");

    ContactEmail {
        from: format!("\"{}\" <{}>", enquiry.name.replace('"', ""), enquiry.email),
        to: recipient.to_string(),
        subject: format!("New Contact Message from {}", enquiry.name),
        text: enquiry.message.clone(),
        html: format!(
            "<p><strong>Name:</strong> {name}</p>\n\
             <p><strong>Email:</strong> {email}</p>\n\
             <p><strong>Message:</strong><br/>{message}</p>"
        ),
    }
}

pub fn contact_chat_body(enquiry: &Enquiry) -> String {
    format!(
        "New Contact Message!\nName: {}\nEmail: {}\nMessage: {}",
        enquiry.name, enquiry.email, enquiry.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enquiry() -> Enquiry {
        Enquiry {
            name: "Omar".to_string(),
            email: "omar@example.com".to_string(),
            message: "Is <IELTS> needed?\nThanks".to_string(),
        }
    }

    #[test]
    fn test_contact_email_headers() {
        let email = contact_email(&enquiry(), "office@example.com");
        assert_eq!(email.from, "\"Omar\" <omar@example.com>");
        assert_eq!(email.to, "office@example.com");
        assert_eq!(email.subject, "New Contact Message from Omar");
        assert_eq!(email.text, "Is <IELTS> needed?\nThanks");
    }

    #[test]
    fn test_contact_email_html_is_escaped() {
        let email = contact_email(&enquiry(), "office@example.com");
        assert!(email.html.contains("Is &lt;IELTS&gt; needed?<br/>Thanks"));
        assert!(email.html.contains("<strong>Name:</strong> Omar"));
    }

    #[test]
    fn test_contact_email_strips_quotes_from_display_name() {
        let mut e = enquiry();
        e.name = "Omar \"O\" K".to_string();
        assert_eq!(
            contact_email(&e, "x@y").from,
            "\"Omar O K\" <omar@example.com>"
        );
    }

    #[test]
    fn test_contact_chat_body() {
        assert_eq!(
            contact_chat_body(&enquiry()),
            "New Contact Message!\nName: Omar\nEmail: omar@example.com\nMessage: Is <IELTS> needed?\nThanks"
        );
    }
}
