use crate::models::Item;
use crate::validation::parse_bool;
use serde::{Deserialize, Deserializer, Serialize};

/// One page of query results plus pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Record {
    pub data: RecordData,
    pub meta: RecordMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RecordData {
    #[serde(default)]
    pub results: Vec<Item>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordMeta {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub results: u32,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default = "first_page")]
    pub total_pages: u32,
    #[serde(
        rename = "userIsAdmin",
        default,
        deserialize_with = "deserialize_flag"
    )]
    pub user_is_admin: bool,
}

fn first_page() -> u32 {
    1
}

/// Accepts JSON booleans as well as `"true"`/`"false"` strings in any case
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => parse_bool(&text).map_err(serde::de::Error::custom),
    }
}

impl Default for RecordMeta {
    fn default() -> Self {
        Self {
            page: 1,
            results: 0,
            total_results: 0,
            total_pages: 1,
            user_is_admin: false,
        }
    }
}

impl RecordMeta {
    pub fn auth_meta(&self) -> AuthMeta {
        AuthMeta {
            user_is_admin: self.user_is_admin,
        }
    }

    /// Current page, never below 1
    pub fn current_page(&self) -> u32 {
        self.page.max(1)
    }

    /// Page count, never below 1 even for an empty result set
    pub fn page_count(&self) -> u32 {
        self.total_pages.max(1)
    }
}

/// Authorization flags the API reports for the requesting user
///
/// Only used to enable or disable controls; the server enforces access.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AuthMeta {
    #[serde(
        rename = "userIsAdmin",
        default,
        deserialize_with = "deserialize_flag"
    )]
    pub user_is_admin: bool,
}

#[cfg(test)]
impl AuthMeta {
    pub fn admin() -> Self {
        Self {
            user_is_admin: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_record() {
        let record: Record = serde_json::from_str(
            r#"{
                "data": {"results": [
                    {"id": 1, "file_format": ".jpg", "file_name": "a", "tags": [], "public_img_tn_url": "/m"}
                ]},
                "meta": {"page": 2, "results": 1, "total_results": 4, "total_pages": 4, "userIsAdmin": true}
            }"#,
        )
        .unwrap();
        assert_eq!(record.data.results.len(), 1);
        assert_eq!(record.meta.page, 2);
        assert_eq!(record.meta.page_count(), 4);
        assert_eq!(record.meta.auth_meta(), AuthMeta::admin());
    }

    #[test]
    fn test_sparse_meta_defaults() {
        let record: Record =
            serde_json::from_str(r#"{"data": {"results": []}, "meta": {}}"#).unwrap();
        assert_eq!(record.meta.current_page(), 1);
        assert_eq!(record.meta.page_count(), 1);
        assert!(!record.meta.auth_meta().user_is_admin);
    }

    #[test]
    fn test_admin_flag_from_string() {
        let meta: RecordMeta = serde_json::from_str(r#"{"userIsAdmin": "True"}"#).unwrap();
        assert!(meta.user_is_admin);
        let meta: RecordMeta = serde_json::from_str(r#"{"userIsAdmin": "false"}"#).unwrap();
        assert!(!meta.user_is_admin);
        assert!(serde_json::from_str::<RecordMeta>(r#"{"userIsAdmin": "maybe"}"#).is_err());
    }

    #[test]
    fn test_zero_pages_clamped() {
        let meta = RecordMeta {
            page: 0,
            total_pages: 0,
            ..RecordMeta::default()
        };
        assert_eq!(meta.current_page(), 1);
        assert_eq!(meta.page_count(), 1);
    }
}
