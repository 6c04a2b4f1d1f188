use crate::models::{PhotoGalleryConfig, PhotoLocation, ThumbnailSet, ThumbnailSize};

/// Builds the URL of one thumbnail size:
/// `{base_route}{path}/{file_name}{suffix}{file_format}`
///
/// A trailing slash on the base route or path is dropped so that joining never
/// produces `//`, and a missing leading dot on the format is added.
pub fn thumbnail_url(base_route: &str, location: &PhotoLocation<'_>, size: ThumbnailSize) -> String {
    let route = base_route.trim_end_matches('/');
    let path = location.path.trim_end_matches('/');
    let separator = if path.is_empty() || path.starts_with('/') {
        ""
    } else {
        "/"
    };
    let format = location.file_format;
    let dot = if format.is_empty() || format.starts_with('.') {
        ""
    } else {
        "."
    };

    format!(
        "{}{}{}/{}{}{}{}",
        route,
        separator,
        path,
        location.file_name,
        size.suffix(),
        dot,
        format
    )
}

/// Builds all three thumbnail URLs for a photo
pub fn thumbnail_urls(config: &PhotoGalleryConfig, location: &PhotoLocation<'_>) -> ThumbnailSet {
    let set = ThumbnailSet {
        small: thumbnail_url(&config.base_route, location, ThumbnailSize::Small),
        medium: thumbnail_url(&config.base_route, location, ThumbnailSize::Medium),
        large: thumbnail_url(&config.base_route, location, ThumbnailSize::Large),
    };
    log::trace!("Thumbnail URLs for {}: {:?}", location.file_name, set);
    set
}
