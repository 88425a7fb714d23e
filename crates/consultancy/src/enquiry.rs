//! Enquiry submission shared by the detail pages, the contact page and the CLI

use crate::api::ContentClient;
use crate::config::{ApiConfig, SiteConfig};
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use consultancy_core::enquiry::{
    chat_link, enquiry_request, validate, EnquiryForm, Topic, ValidationError,
};
use serde::Serialize;

#[derive(Debug, clap::Parser)]
#[command(name = "enquiry")]
#[command(about = "Submit enquiries to the content API")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Send one enquiry
    #[clap(name = "send")]
    Send(SendOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct SendOptions {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub message: String,

    /// Title of the scholarship being asked about
    #[arg(long, conflicts_with = "visa")]
    pub scholarship: Option<String>,

    /// Title of the visa being asked about
    #[arg(long)]
    pub visa: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SendOptions {
    fn topic(&self) -> Topic {
        match (&self.scholarship, &self.visa) {
            (Some(title), _) => Topic::Scholarship(title.clone()),
            (None, Some(title)) => Topic::Visa(title.clone()),
            (None, None) => Topic::GeneralContact,
        }
    }
}

/// Outcome of a submission that reached the API
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EnquiryReceipt {
    pub message: String,
    /// Chat link pre-filled with the greeting for this topic
    pub chat_link: String,
}

#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Failed(#[from] Error),
}

impl SubmitError {
    /// Message for the error toast
    pub fn user_message(&self, topic: &Topic) -> String {
        match self {
            SubmitError::Invalid(e) => e.to_string(),
            SubmitError::Failed(e) => e.user_message(topic.failure_message()),
        }
    }
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = ApiConfig::resolve(global.api_url.clone())?;
    let client = ContentClient::new(&config)?;
    let site = SiteConfig::from_env();

    match app.command {
        Commands::Send(options) => {
            let topic = options.topic();
            if global.verbose {
                eprintln!("Submitting enquiry: {}", topic.subject());
            }

            let form = EnquiryForm {
                name: options.name.clone(),
                email: options.email.clone(),
                message: options.message.clone(),
            };
            let receipt = submit_enquiry_data(&client, &site, &form, &topic)
                .await
                .map_err(|e| eyre!(e.user_message(&topic)))?;

            if options.json {
                println!("{}", serde_json::to_string_pretty(&receipt)?);
            } else {
                println!("{}", receipt.message.green().bold());
                println!("Continue on WhatsApp: {}", receipt.chat_link);
            }
            Ok(())
        }
    }
}

/// Validates the form and, only when it is valid, posts one enquiry
pub async fn submit_enquiry_data(
    client: &ContentClient,
    site: &SiteConfig,
    form: &EnquiryForm,
    topic: &Topic,
) -> Result<EnquiryReceipt, SubmitError> {
    let enquiry = validate(form)?;

    client
        .post("/enquiry", &enquiry_request(&enquiry, topic))
        .await?;

    log::info!("enquiry submitted: {}", topic.subject());

    Ok(EnquiryReceipt {
        message: topic.success_message().to_string(),
        chat_link: chat_link(&site.chat_number, &topic.greeting(&enquiry.name)),
    })
}
