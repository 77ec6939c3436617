use anyhow::Result;
use clap::Parser;
use notion_proxy::{files_route, NotionApiClient, NotionApiClientParameters, Params};

#[derive(Parser)]
struct Cli {
    #[arg(long)]
    block_id: String,

    /// Percent-encoded file url, as it appears in the route path.
    #[arg(long)]
    file_url: String,

    #[arg(long)]
    notion_token: Option<String>,
}

fn main() -> Result<()> {
    let Cli {
        block_id,
        file_url,
        notion_token,
    } = Cli::parse();

    let client = NotionApiClient::new(NotionApiClientParameters::default());
    let params = Params::from([
        ("blockId".to_string(), block_id),
        ("fileUrl".to_string(), file_url),
    ]);

    let response = files_route(&client, &params, notion_token.as_deref())?;

    println!("StatusCode : {}", response.status);
    println!("Content    : {}", response.body);

    Ok(())
}
