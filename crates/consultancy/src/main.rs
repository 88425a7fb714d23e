#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod api;
mod config;
mod enquiry;
mod error;
mod notify;
mod prelude;
mod relay;
mod scholarships;
mod testimonials;
mod visas;
mod web;

#[cfg(test)]
mod test_support;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Scholarship and visa listing site for HS Consultancy Services"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Content API base URL
    #[clap(long, env = "CONSULTANCY_API_URL", global = true)]
    api_url: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "CONSULTANCY_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the public site
    Serve(crate::web::ServeOptions),

    /// Scholarship listings
    Scholarships(crate::scholarships::App),

    /// Visa programs
    Visas(crate::visas::App),

    /// Client testimonials
    Testimonials(crate::testimonials::App),

    /// Enquiry submission
    Enquiry(crate::enquiry::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::web::run_serve(options, app.global).await,
        SubCommands::Scholarships(sub_app) => crate::scholarships::run(sub_app, app.global).await,
        SubCommands::Visas(sub_app) => crate::visas::run(sub_app, app.global).await,
        SubCommands::Testimonials(sub_app) => crate::testimonials::run(sub_app, app.global).await,
        SubCommands::Enquiry(sub_app) => crate::enquiry::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
