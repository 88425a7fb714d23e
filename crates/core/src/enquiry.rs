//! Enquiry validation, topics and pre-filled chat links
//!
//! An enquiry is a `{name, email, message}` triple plus a topic naming what
//! is being asked about. All three fields are required.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw form input, exactly as submitted
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct EnquiryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A validated enquiry with trimmed fields
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Enquiry {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    Missing,
    Malformed,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub problem: Problem,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match (self.field, self.problem) {
            (Field::Name, _) => "Please enter your name.",
            (Field::Email, Problem::Missing) => "Please enter your email address.",
            (Field::Email, Problem::Malformed) => "Please enter a valid email address.",
            (Field::Message, _) => "Please enter a message.",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", summary(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Message for the first problem with `field`, if any
    pub fn for_field(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(FieldError::message)
    }

    pub fn has_missing(&self) -> bool {
        self.errors.iter().any(|e| e.problem == Problem::Missing)
    }
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::message)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Validates a submitted form, reporting every bad field at once
pub fn validate(form: &EnquiryForm) -> Result<Enquiry, ValidationError> {
    let name = form.name.trim();
    let email = form.email.trim();
    let message = form.message.trim();

    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(FieldError {
            field: Field::Name,
            problem: Problem::Missing,
        });
    }

    if email.is_empty() {
        errors.push(FieldError {
            field: Field::Email,
            problem: Problem::Missing,
        });
    } else if !is_plausible_email(email) {
        errors.push(FieldError {
            field: Field::Email,
            problem: Problem::Malformed,
        });
    }

    if message.is_empty() {
        errors.push(FieldError {
            field: Field::Message,
            problem: Problem::Missing,
        });
    }

    if !errors.is_empty() {
        return Err(ValidationError { errors });
    }

    Ok(Enquiry {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

/// One `@`, something on both sides, no whitespace
fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
        }
        _ => false,
    }
}

/// What an enquiry is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topic {
    Scholarship(String),
    Visa(String),
    GeneralContact,
}

impl Topic {
    /// Value sent in the API's `scholarship` field
    pub fn subject(&self) -> String {
        match self {
            Topic::Scholarship(title) => title.clone(),
            Topic::Visa(title) => format!("Visa: {title}"),
            Topic::GeneralContact => "General Contact Form".to_string(),
        }
    }

    /// Heading of the enquiry dialog
    pub fn heading(&self) -> &'static str {
        match self {
            Topic::Scholarship(_) => "Enquire About This Scholarship",
            Topic::Visa(_) => "Enquire About This Visa",
            Topic::GeneralContact => "Contact Me",
        }
    }

    /// Greeting pre-filled in the chat link after a successful submit
    pub fn greeting(&self, name: &str) -> String {
        match self {
            Topic::Scholarship(title) | Topic::Visa(title) => {
                format!("Hello! My name is {name}. I just enquired about: {title}.")
            }
            Topic::GeneralContact => format!(
                "Hello! My name is {name}. I just sent you a message via your contact page."
            ),
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Topic::GeneralContact => "Message sent successfully! 📬",
            _ => "Enquiry sent successfully! 🎉",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Topic::GeneralContact => "Failed to send message. Please try again.",
            _ => "Failed to send enquiry. Please try again.",
        }
    }
}

/// Body of `POST /enquiry`
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct EnquiryRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    pub scholarship: String,
}

pub fn enquiry_request(enquiry: &Enquiry, topic: &Topic) -> EnquiryRequest {
    EnquiryRequest {
        name: enquiry.name.clone(),
        email: enquiry.email.clone(),
        message: enquiry.message.clone(),
        scholarship: topic.subject(),
    }
}

/// `https://wa.me/{number}?text=...` with the text URL-encoded
pub fn chat_link(number: &str, text: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(text))
}

/// Quick link shown on detail pages before anything is submitted
pub fn interest_link(number: &str, title: &str) -> String {
    chat_link(number, &format!("Hello! I'm interested in {title}."))
}

pub fn mailto_link(address: &str, title: &str) -> String {
    format!(
        "mailto:{}?subject={}",
        address,
        urlencoding::encode(&format!("Enquiry: {title}"))
    )
}
