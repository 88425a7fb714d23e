use crate::api::{ContentClient, GetOptions};
use crate::config::ApiConfig;
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use consultancy_core::content::{format_date, excerpt, Testimonial};
use consultancy_core::listing::{build_listing, ListOutput, ListingKind};

#[derive(Debug, clap::Parser)]
#[command(name = "testimonials")]
#[command(about = "Read client testimonials from the content API")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List one page of testimonials
    #[clap(name = "list")]
    List(ListOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = ApiConfig::resolve(global.api_url.clone())?;
    let client = ContentClient::new(&config)?;

    if global.verbose {
        eprintln!("Content API: {}", client.base_url());
    }

    match app.command {
        Commands::List(options) => list(&client, options).await,
    }
}

async fn list(client: &ContentClient, options: ListOptions) -> Result<()> {
    let output = list_testimonials_data(client, options.page)
        .await
        .map_err(|e| eyre!(e.user_message(ListingKind::Testimonials.failure_message())))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if output.items.is_empty() {
        println!("{}", ListingKind::Testimonials.empty_message());
        return Ok(());
    }

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row![
        "Author".bold().cyan(),
        "Date".bold().cyan(),
        "Message".bold().cyan()
    ]);
    for testimonial in &output.items {
        table.add_row(prettytable::row![
            testimonial.author(),
            testimonial
                .created_at
                .as_deref()
                .and_then(format_date)
                .unwrap_or_else(|| "-".to_string()),
            excerpt(&testimonial.message, 80)
        ]);
    }
    table.printstd();

    println!(
        "\nPage {} of {}",
        output.pagination.current_page, output.pagination.total_pages
    );

    Ok(())
}

/// Fetches one page of testimonials
pub async fn list_testimonials_data(
    client: &ContentClient,
    page: usize,
) -> Result<ListOutput<Testimonial>, Error> {
    let kind = ListingKind::Testimonials;

    let envelope = client
        .get::<Vec<Testimonial>>(
            kind.api_path(),
            GetOptions::default()
                .param("page", page)
                .param("limit", kind.page_size()),
        )
        .await?;

    let total = envelope.total.unwrap_or(0) as usize;
    Ok(build_listing(kind, envelope.data, page, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{client_for, spawn};
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use consultancy_core::content::MediaKind;
    use serde_json::json;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_list_uses_page_size_twelve() {
        let app = Router::new().route(
            "/testimonials",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                assert_eq!(q.get("limit").map(String::as_str), Some("12"));
                Json(json!({
                    "data": [
                        {"_id": "t1", "message": "Got my visa!", "media": {"url": "https://v/1.mp4", "resource_type": "video"}},
                        {"_id": "t2", "name": "Ama", "message": "Thank you", "profilePicture": {"url": "https://p/2.jpg"}}
                    ],
                    "total": 25
                }))
            }),
        );
        let client = client_for(&spawn(app).await);

        let output = list_testimonials_data(&client, 3).await.unwrap();

        assert_eq!(output.pagination.total_pages, 3);
        assert_eq!(output.items[0].author(), "Anonymous");
        assert_eq!(output.items[0].media.as_ref().map(|m| m.kind), Some(MediaKind::Video));
        assert_eq!(output.items[1].profile_picture.as_deref(), Some("https://p/2.jpg"));
    }

    #[tokio::test]
    async fn test_list_failure() {
        let app = Router::new().route(
            "/testimonials",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let client = client_for(&spawn(app).await);

        let err = list_testimonials_data(&client, 1).await.unwrap_err();
        assert_eq!(
            err.user_message(ListingKind::Testimonials.failure_message()),
            "Failed to load testimonials."
        );
    }
}
