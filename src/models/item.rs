use crate::error::AppError;
use crate::validation::validate_tag;
use photo_gallery::PhotoLocation;
use serde::{Deserialize, Serialize};

/// Tag the processing worker appends when it copied IPTC keywords from the original file
pub const COPIED_TAG_MARKER: &str = "SPM: TAGS COPIED FROM ORIGINAL";

/// Metadata of one photo as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: i64,
    pub file_format: String,
    pub file_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub public_img_tn_url: String,
}

impl Item {
    /// Where the item's thumbnails live relative to the image server route
    pub fn location(&self) -> PhotoLocation<'_> {
        PhotoLocation {
            path: &self.public_img_tn_url,
            file_name: &self.file_name,
            file_format: &self.file_format,
        }
    }

    /// File name including extension, for captions and alt texts
    pub fn display_name(&self) -> String {
        if self.file_format.is_empty() || self.file_format.starts_with('.') {
            format!("{}{}", self.file_name, self.file_format)
        } else {
            format!("{}.{}", self.file_name, self.file_format)
        }
    }
}

/// True for the marker tag added by the processing worker
pub fn is_copied_marker(tag: &str) -> bool {
    tag == COPIED_TAG_MARKER
}

/// Returns `tags` with `input` appended
///
/// The input is trimmed and validated; a tag that is already present leaves
/// the list unchanged.
pub fn add_tag(tags: &[String], input: &str) -> Result<Vec<String>, AppError> {
    let tag = validate_tag(input)?;
    let mut updated = tags.to_vec();
    if !updated.contains(&tag) {
        updated.push(tag);
    }
    Ok(updated)
}

/// Returns `tags` without the tag at `index`; out of range leaves the list unchanged
pub fn remove_tag(tags: &[String], index: usize) -> Vec<String> {
    tags.iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, tag)| tag.clone())
        .collect()
}

/// Payload of the tag editor callback: the complete new tag list of an item
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TagUpdate {
    #[serde(skip)]
    pub item_id: i64,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_deserialize_item() {
        let item: Item = serde_json::from_str(
            r#"{"id": 7, "file_format": ".jpg", "file_name": "sunset",
                "tags": ["beach", "2020"], "public_img_tn_url": "/media/2020",
                "owner": "admin"}"#,
        )
        .unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.tags, tags(&["beach", "2020"]));
        assert_eq!(item.display_name(), "sunset.jpg");
        assert_eq!(item.location().path, "/media/2020");
    }

    #[test]
    fn test_missing_tags_default_to_empty() {
        let item: Item =
            serde_json::from_str(r#"{"id": 1, "file_format": "png", "file_name": "a"}"#).unwrap();
        assert!(item.tags.is_empty());
        assert_eq!(item.display_name(), "a.png");
    }

    #[test]
    fn test_add_tag() {
        let current = tags(&["beach"]);
        assert_eq!(add_tag(&current, " sea ").unwrap(), tags(&["beach", "sea"]));
        assert_eq!(add_tag(&current, "beach").unwrap(), current);
        assert!(add_tag(&current, "").is_err());
        assert!(add_tag(&current, "a<b").is_err());
    }

    #[test]
    fn test_remove_tag() {
        let current = tags(&["a", "b", "c"]);
        assert_eq!(remove_tag(&current, 1), tags(&["a", "c"]));
        assert_eq!(remove_tag(&current, 9), current);
    }

    #[test]
    fn test_tag_update_body() {
        let update = TagUpdate {
            item_id: 3,
            tags: tags(&["x"]),
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"tags":["x"]}"#);
    }

    #[test]
    fn test_copied_marker() {
        assert!(is_copied_marker("SPM: TAGS COPIED FROM ORIGINAL"));
        assert!(!is_copied_marker("beach"));
    }
}
