use serde::{Deserialize, Serialize};

/// Size variants of a processed photo on the image server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailSize {
    Small,  // 150px square for table rows
    Medium, // 720px square for previews
    Large,  // 1080px square for the fullscreen viewer
}

impl ThumbnailSize {
    /// Edge length in pixels
    pub fn dimension(&self) -> u32 {
        match self {
            ThumbnailSize::Small => 150,
            ThumbnailSize::Medium => 720,
            ThumbnailSize::Large => 1080,
        }
    }

    /// File name suffix the image server appends for this size, e.g. `-150_150`
    pub fn suffix(&self) -> String {
        let d = self.dimension();
        format!("-{}_{}", d, d)
    }

    pub fn all() -> &'static [ThumbnailSize] {
        static ALL: [ThumbnailSize; 3] = [
            ThumbnailSize::Small,
            ThumbnailSize::Medium,
            ThumbnailSize::Large,
        ];
        &ALL
    }
}

/// The three thumbnail URLs of one photo
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThumbnailSet {
    pub small: String,
    pub medium: String,
    pub large: String,
}

impl ThumbnailSet {
    pub fn get(&self, size: ThumbnailSize) -> &str {
        match size {
            ThumbnailSize::Small => &self.small,
            ThumbnailSize::Medium => &self.medium,
            ThumbnailSize::Large => &self.large,
        }
    }

    /// `srcset` attribute value listing every size with its width descriptor
    pub fn srcset(&self) -> String {
        ThumbnailSize::all()
            .iter()
            .map(|size| format!("{} {}w", self.get(*size), size.dimension()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Location of a photo on the image server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoLocation<'a> {
    /// Thumbnail directory relative to the base route, e.g. `/media/2020`
    pub path: &'a str,
    /// File name without extension
    pub file_name: &'a str,
    /// File extension, with or without leading dot
    pub file_format: &'a str,
}

/// Configuration for photo gallery URL building
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhotoGalleryConfig {
    /// Base URL of the image server that thumbnail paths are appended to
    pub base_route: String,
}

impl PhotoGalleryConfig {
    pub fn new(base_route: impl Into<String>) -> Self {
        Self {
            base_route: base_route.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes() {
        assert_eq!(ThumbnailSize::Small.suffix(), "-150_150");
        assert_eq!(ThumbnailSize::Medium.suffix(), "-720_720");
        assert_eq!(ThumbnailSize::Large.suffix(), "-1080_1080");
    }

    #[test]
    fn test_srcset_lists_all_sizes() {
        let set = ThumbnailSet {
            small: "a.jpg".to_string(),
            medium: "b.jpg".to_string(),
            large: "c.jpg".to_string(),
        };
        assert_eq!(set.srcset(), "a.jpg 150w, b.jpg 720w, c.jpg 1080w");
    }

    #[test]
    fn test_size_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&ThumbnailSize::Medium).unwrap(),
            r#""medium""#
        );
        let size: ThumbnailSize = serde_json::from_str(r#""large""#).unwrap();
        assert_eq!(size, ThumbnailSize::Large);
        assert!(serde_json::from_str::<ThumbnailSize>(r#""Large""#).is_err());
    }

    #[test]
    fn test_thumbnail_set_from_json() {
        let set: ThumbnailSet = serde_json::from_str(
            r#"{"small": "/m/a-150_150.jpg", "medium": "/m/a-720_720.jpg", "large": "/m/a-1080_1080.jpg"}"#,
        )
        .unwrap();
        assert_eq!(set.get(ThumbnailSize::Medium), "/m/a-720_720.jpg");
        assert!(serde_json::from_str::<ThumbnailSet>(r#"{"small": "/m/a.jpg"}"#).is_err());
    }
}
