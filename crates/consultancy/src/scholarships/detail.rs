use crate::api::{ContentClient, GetOptions};
use crate::prelude::{println, *};
use colored::Colorize;
use consultancy_core::content::Scholarship;
use consultancy_core::detail::{build_extras, DetailOutput, Extras, PostKind};
use futures::future::try_join;

const RELATED_QUERY_LIMIT: usize = 3;
const RECENT_QUERY_LIMIT: usize = 5;

#[derive(Debug, clap::Args, Clone)]
pub struct ShowOptions {
    /// Scholarship identifier
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(client: &ContentClient, options: ShowOptions) -> Result<()> {
    let output = scholarship_detail_data(client, &options.id)
        .await
        .map_err(|e| eyre!(e.user_message(PostKind::Scholarship.failure_message())))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let s = &output.item;
    println!("{}", s.title.bold().cyan());
    println!("{} — {}\n", s.institution, s.host_country);
    println!("Category:      {}", s.category);
    println!(
        "Deadline:      {}",
        s.deadline.as_deref().unwrap_or("Not specified")
    );
    println!("Reward:        {}", s.reward);
    println!("Stipend:       {}", s.stipend);
    println!("Fully funded:  {}", yes_no(s.fully_funded));
    println!("Insurance:     {}", yes_no(s.health_insurance));
    println!("IELTS:         {}", yes_no(s.ielts_required));
    if !s.eligible_countries.is_empty() {
        println!("Eligible:      {}", s.eligible_countries.join(", "));
    }
    println!("\n{}\n", s.description);

    match &output.extras {
        Extras::Loaded { related, recent } => {
            println!("{}", "Related:".bold());
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

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Fetches a scholarship, then its related and recent sets concurrently
///
/// Only a failure of the first fetch is an error. A failure in the second
/// phase is folded into [`Extras::Failed`] so the primary record still
/// renders.
pub async fn scholarship_detail_data(
    client: &ContentClient,
    id: &str,
) -> Result<DetailOutput<Scholarship>, Error> {
    let scholarship = fetch_scholarship(client, id).await?;
    let extras = scholarship_extras(client, &scholarship).await;

    Ok(DetailOutput {
        item: scholarship,
        extras,
    })
}

pub async fn fetch_scholarship(client: &ContentClient, id: &str) -> Result<Scholarship, Error> {
    let path = format!("/scholarships/{}", urlencoding::encode(id));
    Ok(client
        .get::<Scholarship>(&path, GetOptions::default())
        .await?
        .data)
}

pub async fn scholarship_extras(client: &ContentClient, scholarship: &Scholarship) -> Extras {
    let related = client.get::<Vec<Scholarship>>(
        "/scholarships",
        GetOptions::default().param("limit", RELATED_QUERY_LIMIT),
    );
    let recent = client.get::<Vec<Scholarship>>(
        "/scholarships",
        GetOptions::default()
            .param("sort", "-createdAt")
            .param("limit", RECENT_QUERY_LIMIT),
    );

    match try_join(related, recent).await {
        Ok((related, recent)) => build_extras(&scholarship.id, &related.data, &recent.data),
        Err(e) => {
            log::warn!("Error fetching related/recent scholarships: {e}");
            Extras::Failed {
                message: PostKind::Scholarship.extras_failure_message().to_string(),
            }
        }
    }
}
