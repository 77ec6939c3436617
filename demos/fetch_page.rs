use anyhow::Result;
use clap::Parser;
use notion_proxy::{self as api, NotionApiClient, NotionApiClientParameters};

#[derive(Parser)]
struct Cli {
    #[arg(long)]
    page_id: String,

    #[arg(long)]
    notion_token: Option<String>,
}

fn main() -> Result<()> {
    let Cli {
        page_id,
        notion_token,
    } = Cli::parse();

    let client = NotionApiClient::new(NotionApiClientParameters::default());

    let page = api::fetch_page_by_id(&client, &page_id, notion_token.as_deref())?;

    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
