use crate::config::SiteConfig;
use consultancy_core::enquiry::{chat_link, EnquiryForm, Field, Topic, ValidationError};
use maud::{html, Markup};

const DISABLE_ON_SUBMIT: &str =
    "const b = this.querySelector('button[type=submit]'); b.disabled = true; b.textContent = 'Sending...';";

/// State of an enquiry form between requests
#[derive(Debug, Clone, Default)]
pub struct EnquiryPanel {
    /// Values echoed back into the inputs
    pub form: EnquiryForm,
    pub errors: Option<ValidationError>,
    /// Whether the enquiry dialog starts open
    pub open: bool,
    /// Follow-up chat link after a successful submit
    pub chat_link: Option<String>,
}

impl EnquiryPanel {
    pub fn invalid(form: EnquiryForm, errors: ValidationError) -> Self {
        Self {
            form,
            errors: Some(errors),
            open: true,
            chat_link: None,
        }
    }

    pub fn failed(form: EnquiryForm) -> Self {
        Self {
            form,
            errors: None,
            open: true,
            chat_link: None,
        }
    }

    /// Cleared form with the follow-up link
    pub fn sent(chat_link: String) -> Self {
        Self {
            chat_link: Some(chat_link),
            ..Self::default()
        }
    }

    fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors.as_ref().and_then(|e| e.for_field(field))
    }
}

fn field_error(panel: &EnquiryPanel, field: Field) -> Markup {
    html! {
        @if let Some(message) = panel.error_for(field) {
            p.field-error id={ (field.as_str()) "-error" } { (message) }
        }
    }
}

/// The name/email/message triple; every field is required
fn fields(panel: &EnquiryPanel, message_rows: u8) -> Markup {
    let form = &panel.form;

    html! {
        input type="text" name="name" placeholder="Your Name" value=(form.name) required
            aria-invalid=[panel.error_for(Field::Name).map(|_| "true")];
        (field_error(panel, Field::Name))
        input type="email" name="email" placeholder="Your Email" value=(form.email) required
            aria-invalid=[panel.error_for(Field::Email).map(|_| "true")];
        (field_error(panel, Field::Email))
        textarea name="message" placeholder="Your Message" rows=(message_rows) required
            aria-invalid=[panel.error_for(Field::Message).map(|_| "true")] { (form.message) }
        (field_error(panel, Field::Message))
    }
}

pub fn follow_up(link: &str) -> Markup {
    html! {
        p.follow-up {
            a.button.whatsapp href=(link) target="_blank" rel="noopener noreferrer" {
                "Continue the conversation on WhatsApp"
            }
        }
    }
}

/// Trigger button plus the enquiry dialog posting to `action`
pub fn enquiry_dialog(action: &str, topic: &Topic, panel: &EnquiryPanel) -> Markup {
    html! {
        button.button.primary type="button"
            onclick="document.getElementById('enquiry-dialog').showModal()" {
            "Enquire Now"
        }
        @if let Some(link) = &panel.chat_link {
            (follow_up(link))
        }
        dialog.enquiry id="enquiry-dialog" open[panel.open] {
            button.close type="button" aria-label="Close" onclick="this.closest('dialog').close()" { "✕" }
            h2 { (topic.heading()) }
            p { "Fill in your details, and we’ll get back to you shortly." }
            form method="post" action=(action) onsubmit=(DISABLE_ON_SUBMIT) {
                (fields(panel, 3))
                div.actions {
                    button.button type="button" onclick="this.closest('dialog').close()" { "Cancel" }
                    button.button.primary type="submit" { "Send" }
                }
            }
        }
    }
}

pub fn contact_page(site: &SiteConfig, panel: &EnquiryPanel) -> Markup {
    let topic = Topic::GeneralContact;
    let hello = chat_link(&site.chat_number, "Hello! I want to know more about your services.");

    html! {
        section.contact {
            h1 { (topic.heading()) }
            @if let Some(link) = &panel.chat_link {
                (follow_up(link))
            }
            form.contact-form method="post" action="/contact" onsubmit=(DISABLE_ON_SUBMIT) {
                (fields(panel, 6))
                button.button.primary type="submit" { "Send Message" }
            }
            div.quick-links {
                a.button.whatsapp href=(hello) target="_blank" rel="noopener noreferrer" { "WhatsApp" }
                @if let Some(address) = &site.enquiry_email {
                    a.button href={ "mailto:" (address) "?subject=General%20Enquiry" } { "Email" }
                }
            }
            (super::social_links(site))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consultancy_core::enquiry::validate;

    #[test]
    fn test_invalid_panel_keeps_values_and_shows_errors() {
        let form = EnquiryForm {
            name: "Amir".to_string(),
            email: "amir-at-example".to_string(),
            message: String::new(),
        };
        let errors = validate(&form).unwrap_err();
        let panel = EnquiryPanel::invalid(form, errors);

        let html = enquiry_dialog("/visas/v1/enquiry", &Topic::Visa("Work".to_string()), &panel)
            .into_string();

        assert!(html.contains(r#"value="Amir""#));
        assert!(html.contains(r#"value="amir-at-example""#));
        assert!(html.contains("Please enter a valid email address."));
        assert!(html.contains("Please enter a message."));
        assert!(!html.contains("Please enter your name."));
        assert!(html.contains("Enquire About This Visa"));
        assert!(html.contains(" open"));
    }

    #[test]
    fn test_sent_panel_is_cleared_and_closed() {
        let panel = EnquiryPanel::sent("https://wa.me/1?text=hi".to_string());
        let html = enquiry_dialog(
            "/scholarships/s1/enquiry",
            &Topic::Scholarship("Chevening".to_string()),
            &panel,
        )
        .into_string();

        assert!(html.contains(r#"href="https://wa.me/1?text=hi""#));
        assert!(html.contains(r#"value="""#));
        assert!(!html.contains(" open"));
    }

    #[test]
    fn test_contact_page_fields_are_required() {
        let html = contact_page(&SiteConfig::default(), &EnquiryPanel::default()).into_string();

        assert_eq!(html.matches("required").count(), 3);
        assert!(html.contains(r#"action="/contact""#));
        assert!(html.contains("https://wa.me/447392893665?text=Hello%21%20I%20want"));
    }
}
