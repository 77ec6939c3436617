use serde::{Deserialize, Serialize};

/// A user as handed to consumers.
///
/// `last_lame` serializes as `lastLame`, the key consumers read.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotionUser {
    pub id: String,
    pub first_name: String,
    pub last_lame: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordValues {
    pub results: Vec<RecordValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordValue {
    pub value: RawUser,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawUser {
    id: String,
    given_name: Option<String>,
    family_name: Option<String>,
    profile_photo: Option<String>,
}

impl From<RawUser> for NotionUser {
    fn from(raw: RawUser) -> Self {
        let RawUser {
            id,
            given_name,
            family_name,
            profile_photo,
        } = raw;

        let given_name = given_name.unwrap_or_default();
        let family_name = family_name.unwrap_or_default();
        let full_name = format!("{} {}", given_name, family_name);

        Self {
            id,
            first_name: given_name,
            last_lame: family_name,
            full_name,
            profile_photo,
        }
    }
}

impl From<RecordValues> for Vec<NotionUser> {
    fn from(records: RecordValues) -> Self {
        records
            .results
            .into_iter()
            .map(|record| NotionUser::from(record.value))
            .collect()
    }
}
