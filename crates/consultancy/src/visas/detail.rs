use crate::api::{ContentClient, GetOptions};
use crate::prelude::{println, *};
use colored::Colorize;
use consultancy_core::content::Visa;
use consultancy_core::detail::{build_extras, DetailOutput, Extras, PostKind};
use futures::future::try_join;

const RECENT_QUERY_LIMIT: usize = 3;

#[derive(Debug, clap::Args, Clone)]
pub struct ShowOptions {
    /// Visa identifier
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(client: &ContentClient, options: ShowOptions) -> Result<()> {
    let output = visa_detail_data(client, &options.id)
        .await
        .map_err(|e| eyre!(e.user_message(PostKind::Visa.failure_message())))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let visa = &output.item;
    println!("{} — {}\n", visa.title.bold().cyan(), visa.country);
    println!(
        "Processing time: {}",
        visa.processing_time.as_deref().unwrap_or("-")
    );
    println!("Fee:             {}", visa.fee.as_deref().unwrap_or("-"));
    println!("\n{}\n", visa.description);

    if !visa.requirements.is_empty() {
        println!("{}", "Requirements:".bold());
        for requirement in &visa.requirements {
            println!("  - {requirement}");
        }
        println!();
    }

    match &output.extras {
        Extras::Loaded { related, recent } => {
            println!("Other visas for {}:", visa.country);
            for post in related {
                println!("  {}  {}", post.id, post.title);
            }
            println!("{}", "Recently added:".bold());
            for post in recent {
                println!("  {}  {}", post.id, post.title);
            }
        }
        Extras::Failed { message } => println!("{}", message.yellow()),
    }

    Ok(())
}

/// Fetches a visa, then visas for the same country and the latest visas
///
/// Same two-phase contract as the scholarship detail.
pub async fn visa_detail_data(client: &ContentClient, id: &str) -> Result<DetailOutput<Visa>, Error> {
    let visa = fetch_visa(client, id).await?;
    let extras = visa_extras(client, &visa).await;

    Ok(DetailOutput { item: visa, extras })
}

pub async fn fetch_visa(client: &ContentClient, id: &str) -> Result<Visa, Error> {
    let path = format!("/visas/{}", urlencoding::encode(id));
    Ok(client.get::<Visa>(&path, GetOptions::default()).await?.data)
}

pub async fn visa_extras(client: &ContentClient, visa: &Visa) -> Extras {
    let related = client.get::<Vec<Visa>>(
        "/visas",
        GetOptions::default().param("country", &visa.country),
    );
    let recent = client.get::<Vec<Visa>>(
        "/visas",
        GetOptions::default().param("limit", RECENT_QUERY_LIMIT),
    );

    match try_join(related, recent).await {
        Ok((related, recent)) => build_extras(&visa.id, &related.data, &recent.data),
        Err(e) => {
            log::warn!("Error fetching related/recent visas: {e}");
            Extras::Failed {
                message: PostKind::Visa.extras_failure_message().to_string(),
            }
        }
    }
}
