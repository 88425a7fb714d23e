use crate::api::{ContentClient, GetOptions};
use crate::prelude::{println, *};
use colored::Colorize;
use consultancy_core::content::Scholarship;
use consultancy_core::listing::{build_listing, scholarship_card, ListOutput, ListingKind};

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(client: &ContentClient, options: ListOptions) -> Result<()> {
    let output = list_scholarships_data(client, options.page)
        .await
        .map_err(|e| eyre!(e.user_message(ListingKind::Scholarships.failure_message())))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if output.items.is_empty() {
        println!("{}", ListingKind::Scholarships.empty_message());
        return Ok(());
    }

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row![
        "ID".bold().cyan(),
        "Title".bold().cyan(),
        "Where".bold().cyan(),
        "Posted".bold().cyan()
    ]);
    for scholarship in &output.items {
        let card = scholarship_card(scholarship);
        table.add_row(prettytable::row![
            scholarship.id.green(),
            card.title,
            card.subtitle.unwrap_or_default(),
            card.date.unwrap_or_else(|| "-".to_string())
        ]);
    }
    table.printstd();

    println!(
        "\nPage {} of {} ({} scholarships)",
        output.pagination.current_page, output.pagination.total_pages, output.pagination.total_items
    );

    Ok(())
}

/// Fetches one page of scholarships
///
/// Shared by the CLI and the listing page. The request carries credentials.
pub async fn list_scholarships_data(
    client: &ContentClient,
    page: usize,
) -> Result<ListOutput<Scholarship>, Error> {
    let kind = ListingKind::Scholarships;

    let envelope = client
        .get::<Vec<Scholarship>>(
            kind.api_path(),
            GetOptions::default()
                .param("page", page)
                .param("limit", kind.page_size())
                .with_credentials(),
        )
        .await?;

    let total = envelope.total.unwrap_or(0) as usize;
    Ok(build_listing(kind, envelope.data, page, total))
}
