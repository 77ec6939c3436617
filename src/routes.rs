use std::collections::HashMap;

use crate::{
    fetch_signed_url, response::create_response, FetchSignedUrlParameters, NotionApiClient,
    NotionApiClientError, NotionApiClientResult, Response,
};

/// Path parameters extracted by the router.
pub type Params = HashMap<String, String>;

pub fn files_route(
    client: &NotionApiClient,
    params: &Params,
    notion_token: Option<&str>,
) -> NotionApiClientResult<Response> {
    let block_id = required_param(params, "blockId")?;
    let file_url = required_param(params, "fileUrl")?;

    let signed_urls: serde_json::Value = fetch_signed_url(
        client,
        FetchSignedUrlParameters { block_id, file_url },
        notion_token,
    )?;

    let body = serde_json::to_string(&signed_urls).map_err(NotionApiClientError::decode)?;

    Ok(create_response(body))
}

fn required_param<'a>(params: &'a Params, name: &str) -> NotionApiClientResult<&'a str> {
    params.get(name).map(String::as_str).ok_or_else(|| {
        tracing::warn!("Files route called without `{}` parameter", name);

        NotionApiClientError::invalid_input(format!("missing route parameter `{}`", name))
    })
}
