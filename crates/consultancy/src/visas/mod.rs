use crate::api::ContentClient;
use crate::config::ApiConfig;
use crate::prelude::{eprintln, *};

mod detail;
mod list;

pub use detail::{fetch_visa, visa_detail_data, visa_extras};
pub use list::list_visas_data;

#[derive(Debug, clap::Parser)]
#[command(name = "visas")]
#[command(about = "Browse visa programs from the content API")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List one page of visas, optionally for a single country
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Show one visa with related and recent entries
    #[clap(name = "get")]
    Get(detail::ShowOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = ApiConfig::resolve(global.api_url.clone())?;
    let client = ContentClient::new(&config)?;

    if global.verbose {
        eprintln!("Content API: {}", client.base_url());
    }

    match app.command {
        Commands::List(options) => list::run(&client, options).await,
        Commands::Get(options) => detail::run(&client, options).await,
    }
}
