use crate::api::{ContentClient, GetOptions};
use crate::prelude::{println, *};
use colored::Colorize;
use consultancy_core::content::Visa;
use consultancy_core::listing::{build_listing, visa_card, ListOutput, ListingKind};

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Only show visas for this country
    #[arg(short, long)]
    pub country: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(client: &ContentClient, options: ListOptions) -> Result<()> {
    let output = list_visas_data(client, options.page, options.country.as_deref())
        .await
        .map_err(|e| eyre!(e.user_message(ListingKind::Visas.failure_message())))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if output.items.is_empty() {
        println!("{}", ListingKind::Visas.empty_message());
        return Ok(());
    }

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row![
        "ID".bold().cyan(),
        "Visa".bold().cyan(),
        "Processing".bold().cyan(),
        "Fee".bold().cyan()
    ]);
    for visa in &output.items {
        let card = visa_card(visa);
        table.add_row(prettytable::row![
            visa.id.green(),
            card.title,
            card.subtitle.unwrap_or_else(|| "-".to_string()),
            visa.fee.as_deref().unwrap_or("-")
        ]);
    }
    table.printstd();

    println!(
        "\nPage {} of {} ({} visas)",
        output.pagination.current_page, output.pagination.total_pages, output.pagination.total_items
    );

    Ok(())
}

/// Fetches one page of visas, filtered by country when one is given
pub async fn list_visas_data(
    client: &ContentClient,
    page: usize,
    country: Option<&str>,
) -> Result<ListOutput<Visa>, Error> {
    let kind = ListingKind::Visas;

    let mut options = GetOptions::default()
        .param("page", page)
        .param("limit", kind.page_size());
    if let Some(country) = country.map(str::trim).filter(|c| !c.is_empty()) {
        options = options.param("country", country);
    }

    let envelope = client.get::<Vec<Visa>>(kind.api_path(), options).await?;

    let total = envelope.total.unwrap_or(0) as usize;
    Ok(build_listing(kind, envelope.data, page, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{client_for, spawn};
    use axum::extract::Query;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    fn echo_app() -> Router {
        Router::new().route(
            "/visas",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                let country = q.get("country").cloned().unwrap_or_else(|| "any".to_string());
                Json(json!({
                    "data": [{"_id": "v1", "title": "Student Visa", "country": country}],
                    "total": 10
                }))
            }),
        )
    }

    #[tokio::test]
    async fn test_list_forwards_country_filter() {
        let client = client_for(&spawn(echo_app()).await);

        let output = list_visas_data(&client, 1, Some("Canada")).await.unwrap();

        assert_eq!(output.items[0].country, "Canada");
        assert_eq!(output.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn test_blank_country_is_not_sent() {
        let client = client_for(&spawn(echo_app()).await);

        let output = list_visas_data(&client, 1, Some("  ")).await.unwrap();
        assert_eq!(output.items[0].country, "any");
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_clamped() {
        let client = client_for(&spawn(echo_app()).await);

        let output = list_visas_data(&client, 7, None).await.unwrap();
        assert_eq!(output.pagination.current_page, 2);
    }
}
