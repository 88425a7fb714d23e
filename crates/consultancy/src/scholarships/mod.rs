use crate::api::ContentClient;
use crate::config::ApiConfig;
use crate::prelude::{eprintln, *};

mod detail;
mod list;

pub use detail::{fetch_scholarship, scholarship_detail_data, scholarship_extras};
pub use list::list_scholarships_data;

#[derive(Debug, clap::Parser)]
#[command(name = "scholarships")]
#[command(about = "Browse scholarships from the content API")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List one page of scholarships
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Show one scholarship with related and recent entries
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
