use crate::config::SiteConfig;
use maud::{html, Markup};

fn contact_line(site: &SiteConfig, subject: &str) -> Markup {
    html! {
        p {
            "If you have any questions about " (subject) ", "
            @match &site.enquiry_email {
                Some(address) => {
                    "contact us at " a href={ "mailto:" (address) } { (address) } "."
                }
                None => {
                    "reach us through our " a href="/contact" { "contact page" } "."
                }
            }
        }
    }
}

pub fn about() -> Markup {
    html! {
        section.prose {
            h1 { "About HS Consultancy" }
            p {
                "HS Consultancy is dedicated to connecting students and professionals with "
                "global opportunities. Whether you’re looking for scholarships, visa assistance, "
                "or expert educational advice, we’re here to guide you every step of the way."
            }
            h2 { "Our Mission" }
            p {
                "To empower students through access to world-class education by providing "
                "transparent, personalized, and reliable guidance for scholarships, visas, and "
                "admissions worldwide."
            }
            h2 { "What We Offer" }
            ul {
                li { "Comprehensive scholarship listings and application support" }
                li { "Visa guidance and document preparation" }
                li { "University application assistance" }
                li { "Career and academic counseling" }
            }
        }
    }
}

pub fn privacy(site: &SiteConfig) -> Markup {
    html! {
        section.prose {
            h1 { "Privacy Policy" }
            p {
                "At HS Consultancy, we value your privacy. This policy explains how we collect, "
                "use, and protect your personal information when you use our website and services."
            }
            h2 { "1. Information We Collect" }
            p {
                "We may collect your name, email address, and other contact details when you "
                "submit forms or make enquiries on our website."
            }
            h2 { "2. How We Use Your Information" }
            p {
                "Your information is used to respond to enquiries, provide updates on scholarships "
                "or visa opportunities, and improve our services."
            }
            h2 { "3. Data Security" }
            p {
                "We use secure systems and encryption to protect your personal data. However, no "
                "system is 100% secure, so please be cautious when sharing information online."
            }
            h2 { "4. Contact Us" }
            (contact_line(site, "this policy"))
        }
    }
}

pub fn terms(site: &SiteConfig) -> Markup {
    html! {
        section.prose {
            h1 { "Terms and Conditions" }
            p {
                "By accessing and using this website, you agree to comply with and be bound by the "
                "following terms and conditions. Please read them carefully."
            }
            h2 { "1. Use of Our Website" }
            p {
                "You agree to use this website for lawful purposes only and not engage in any "
                "activity that could harm or disrupt the website or its users."
            }
            h2 { "2. Intellectual Property" }
            p {
                "All content on this site, including text, graphics, and images, is the property "
                "of HS Consultancy unless otherwise stated."
            }
            h2 { "3. Limitation of Liability" }
            p {
                "HS Consultancy is not responsible for any loss or damage arising from your use of "
                "this site or reliance on any information provided here."
            }
            h2 { "4. Changes to Terms" }
            p {
                "We reserve the right to modify these terms at any time. Continued use of the site "
                "means you accept any updated terms."
            }
            (contact_line(site, "these terms"))
        }
    }
}

pub fn not_found() -> Markup {
    html! {
        section.not-found aria-label="404 page not found" {
            h1 { "404" }
            h2 { "Oops! Page not found." }
            p { "The page you’re looking for doesn’t exist or has been moved." }
            div.actions {
                button.button type="button" onclick="history.back()" { "Go Back" }
                a.button.primary href="/" { "Home" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_line_uses_configured_address() {
        let site = SiteConfig {
            enquiry_email: Some("office@example.com".to_string()),
            ..SiteConfig::default()
        };
        let html = privacy(&site).into_string();
        assert!(html.contains(r#"href="mailto:office@example.com""#));

        let html = terms(&SiteConfig::default()).into_string();
        assert!(html.contains(r#"href="/contact""#));
    }
}
