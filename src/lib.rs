mod failure;
mod headers;
mod parameters;
mod response;
mod routes;
mod users;

use headers::{SetDefaultHeaders, SetTokenCookie};
use percent_encoding::percent_decode_str;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value as Json};
use ureq::{Agent, AgentBuilder};
use users::RecordValues;

pub use failure::Error as NotionApiClientError;
pub use parameters::*;
pub use response::{create_response, Response};
pub use routes::{files_route, Params};
pub use users::NotionUser;

pub type NotionApiClientResult<T> = std::result::Result<T, NotionApiClientError>;

const NOTION_API: &str = "https://www.notion.so/api/v3";

pub struct NotionApiClient {
    inner: Agent,
    base_url: String,
    collection_query: CollectionQueryDefaults,
    page_chunk: PageChunkDefaults,
    validate_input: bool,
}

impl NotionApiClient {
    pub fn new(parameters: NotionApiClientParameters) -> Self {
        let NotionApiClientParameters {
            base_url_override,
            collection_query,
            page_chunk,
            validate_input,
        } = parameters;

        let inner = AgentBuilder::new().build();
        let base_url = base_url_override
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| NOTION_API.to_string());

        Self {
            inner,
            base_url,
            collection_query,
            page_chunk,
            validate_input,
        }
    }
}

/// Posts `body` to `{base_url}/{resource}` and parses the reply as `T`.
///
/// The response shape is not checked beyond what deserializing into `T`
/// requires; ask for [`serde_json::Value`] to get the body untouched.
/// Error replies from the backend are parsed the same way as successful
/// ones, so their JSON body reaches the caller as data.
pub fn fetch_notion_data<T, B>(
    client: &NotionApiClient,
    request: NotionRequest<B>,
) -> NotionApiClientResult<T>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let NotionRequest {
        resource,
        body,
        notion_token,
    } = request;

    tracing::debug!(
        message = "Send Notion API request",
        resource = resource,
        with_token = notion_token.is_some_and(|token| !token.is_empty())
    );

    let path = format!("{}/{}", &client.base_url, resource);

    let result = client
        .inner
        .post(&path)
        .set_default_headers()
        .set_token_cookie(notion_token)
        .send_json(body);

    let response = match result {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            tracing::warn!(
                message = "Notion API responded with error status",
                resource = resource,
                status = code
            );

            response
        }
        Err(ureq::Error::Transport(transport)) => {
            return Err(NotionApiClientError::communication(transport));
        }
    };

    response
        .into_json::<T>()
        .map_err(NotionApiClientError::decode)
}

pub fn fetch_page_by_id(
    client: &NotionApiClient,
    page_id: &str,
    notion_token: Option<&str>,
) -> NotionApiClientResult<Json> {
    validate_id(client, "page id", page_id)?;

    let PageChunkDefaults {
        chunk_number,
        limit,
        vertical_columns,
    } = &client.page_chunk;

    tracing::info!(message = "Load Notion page chunk", page_id = page_id);

    let body = serde_json::json!({
        "pageId": page_id,
        "limit": limit,
        "cursor": { "stack": [] },
        "chunkNumber": chunk_number,
        "verticalColumns": vertical_columns,
    });

    fetch_notion_data(
        client,
        NotionRequest {
            resource: "loadPageChunk",
            body,
            notion_token,
        },
    )
}

pub fn fetch_table_data(
    client: &NotionApiClient,
    parameters: FetchTableDataParameters,
    notion_token: Option<&str>,
) -> NotionApiClientResult<Json> {
    let FetchTableDataParameters {
        collection_id,
        collection_view_id,
    } = parameters;

    validate_id(client, "collection id", collection_id)?;
    validate_id(client, "collection view id", collection_view_id)?;

    let CollectionQueryDefaults {
        aggregation_property,
        aggregator,
        limit,
        load_content_cover,
        loader_type,
        search_query,
        user_locale,
        user_time_zone,
    } = &client.collection_query;

    tracing::info!(
        message = "Query Notion collection",
        collection_id = collection_id,
        collection_view_id = collection_view_id
    );

    let body = serde_json::json!({
        "collectionId": collection_id,
        "collectionViewId": collection_view_id,
        "query": {
            "aggregations": [{ "property": aggregation_property, "aggregator": aggregator }]
        },
        "loader": {
            "type": loader_type,
            "limit": limit,
            "searchQuery": search_query,
            "userTimeZone": user_time_zone,
            "userLocale": user_locale,
            "loadContentCover": load_content_cover,
        },
    });

    fetch_notion_data(
        client,
        NotionRequest {
            resource: "queryCollection",
            body,
            notion_token,
        },
    )
}

pub fn fetch_notion_users(
    client: &NotionApiClient,
    user_ids: &[&str],
    notion_token: Option<&str>,
) -> NotionApiClientResult<Vec<NotionUser>> {
    validate_ids(client, "user ids", user_ids)?;

    tracing::info!(message = "Fetch Notion users", count = user_ids.len());

    let requests: Vec<Json> = user_ids
        .iter()
        .map(|id| serde_json::json!({ "id": id, "table": "notion_user" }))
        .collect();

    let records: RecordValues = fetch_notion_data(
        client,
        NotionRequest {
            resource: "getRecordValues",
            body: serde_json::json!({ "requests": requests }),
            notion_token,
        },
    )?;

    Ok(records.into())
}

pub fn fetch_blocks(
    client: &NotionApiClient,
    block_ids: &[&str],
    notion_token: Option<&str>,
) -> NotionApiClientResult<Json> {
    validate_ids(client, "block ids", block_ids)?;

    tracing::info!(message = "Sync Notion blocks", count = block_ids.len());

    let block_versions: Map<String, Json> = block_ids
        .iter()
        .map(|id| (id.to_string(), Json::from(-1)))
        .collect();

    fetch_notion_data(
        client,
        NotionRequest {
            resource: "syncRecordValues",
            body: serde_json::json!({ "recordVersionMap": { "block": block_versions } }),
            notion_token,
        },
    )
}

pub fn fetch_signed_url(
    client: &NotionApiClient,
    parameters: FetchSignedUrlParameters,
    notion_token: Option<&str>,
) -> NotionApiClientResult<Json> {
    let FetchSignedUrlParameters {
        block_id,
        file_url,
    } = parameters;

    validate_id(client, "block id", block_id)?;

    let url = decode_file_url(file_url)?;

    tracing::info!(message = "Sign Notion file url", block_id = block_id);

    let body = serde_json::json!({
        "urls": [{
            "url": url,
            "permissionRecord": { "table": "block", "id": block_id },
        }]
    });

    fetch_notion_data(
        client,
        NotionRequest {
            resource: "getSignedFileUrls",
            body,
            notion_token,
        },
    )
}

// Percent sequences must be complete and decode to UTF-8; a bare `%`
// followed by anything but two hex digits is rejected.
fn decode_file_url(file_url: &str) -> NotionApiClientResult<String> {
    let bytes = file_url.as_bytes();
    let malformed = bytes.iter().enumerate().any(|(index, byte)| {
        *byte == b'%'
            && !bytes
                .get(index + 1..index + 3)
                .is_some_and(|digits| digits.iter().all(u8::is_ascii_hexdigit))
    });

    if malformed {
        tracing::warn!("Rejecting file url with malformed percent-encoding");

        return Err(NotionApiClientError::invalid_input(format!(
            "malformed percent-encoding in file url: {}",
            file_url
        )));
    }

    percent_decode_str(file_url)
        .decode_utf8()
        .map(|url| url.into_owned())
        .map_err(|err| {
            tracing::warn!("Rejecting file url that does not decode to UTF-8");

            NotionApiClientError::invalid_input(format!("file url is not valid UTF-8: {}", err))
        })
}

fn validate_id(client: &NotionApiClient, what: &str, id: &str) -> NotionApiClientResult<()> {
    if client.validate_input && id.is_empty() {
        tracing::warn!("Rejecting empty {}", what);

        return Err(NotionApiClientError::invalid_input(format!(
            "{} must not be empty",
            what
        )));
    }

    Ok(())
}

fn validate_ids(client: &NotionApiClient, what: &str, ids: &[&str]) -> NotionApiClientResult<()> {
    if client.validate_input && ids.is_empty() {
        tracing::warn!("Rejecting empty list of {}", what);

        return Err(NotionApiClientError::invalid_input(format!(
            "{} must not be empty",
            what
        )));
    }

    ids.iter().try_for_each(|id| validate_id(client, what, id))
}
