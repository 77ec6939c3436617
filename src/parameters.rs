#[derive(Default)]
pub struct NotionApiClientParameters {
    pub base_url_override: Option<String>,
    pub collection_query: CollectionQueryDefaults,
    pub page_chunk: PageChunkDefaults,
    pub validate_input: bool,
}

/// Fixed fields merged into every `loadPageChunk` body.
#[derive(Clone, Debug, PartialEq)]
pub struct PageChunkDefaults {
    pub chunk_number: u32,
    pub limit: u32,
    pub vertical_columns: bool,
}

impl Default for PageChunkDefaults {
    fn default() -> Self {
        Self {
            chunk_number: 0,
            limit: 999,
            vertical_columns: false,
        }
    }
}

/// Fixed `query` and `loader` fields merged into every `queryCollection` body.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionQueryDefaults {
    pub aggregation_property: String,
    pub aggregator: String,
    pub limit: u32,
    pub load_content_cover: bool,
    pub loader_type: String,
    pub search_query: String,
    pub user_locale: String,
    pub user_time_zone: String,
}

impl Default for CollectionQueryDefaults {
    fn default() -> Self {
        Self {
            aggregation_property: "title".to_string(),
            aggregator: "count".to_string(),
            limit: 999,
            load_content_cover: true,
            loader_type: "table".to_string(),
            search_query: String::new(),
            user_locale: "en".to_string(),
            user_time_zone: "Europe/Vienna".to_string(),
        }
    }
}

pub struct NotionRequest<'a, B> {
    pub resource: &'a str,
    pub body: B,
    pub notion_token: Option<&'a str>,
}

pub struct FetchTableDataParameters<'a> {
    pub collection_id: &'a str,
    pub collection_view_id: &'a str,
}

pub struct FetchSignedUrlParameters<'a> {
    pub block_id: &'a str,
    pub file_url: &'a str,
}
