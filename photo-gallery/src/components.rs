//! Dioxus UI components for photo gallery
//!
//! These components display photos served by a remote image server. URLs are
//! built from a [`PhotoGalleryContext`] provided by the application root, so
//! rows only need to pass the photo location.

use crate::models::{PhotoGalleryConfig, PhotoLocation, ThumbnailSet};
use crate::thumbnail::thumbnail_urls;
use dioxus::prelude::*;

/// Configuration for photo gallery components
#[derive(Clone, PartialEq)]
pub struct PhotoGalleryContext {
    pub config: PhotoGalleryConfig,
}

impl PhotoGalleryContext {
    pub fn new(base_route: String) -> Self {
        Self {
            config: PhotoGalleryConfig::new(base_route),
        }
    }

    /// Thumbnail URLs of a photo relative to the configured base route
    pub fn urls(&self, location: &PhotoLocation<'_>) -> ThumbnailSet {
        thumbnail_urls(&self.config, location)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ImageLoadState {
    Loading,
    Loaded,
    Failed,
}

/// Thumbnail image component - displays the small photo
#[component]
pub fn ThumbnailImage(
    src: String,
    #[props(default = "Photo".to_string())] alt: String,
    #[props(default = None)] on_click: Option<EventHandler<()>>,
) -> Element {
    let mut image_state = use_signal(|| ImageLoadState::Loading);
    let failed_src = src.clone();

    rsx! {
        div {
            class: "thumbnail",
            style: "width: 150px; height: 150px; border-radius: 8px; overflow: hidden; background: #f0f0f0; cursor: pointer; position: relative;",
            onclick: move |_| {
                if let Some(handler) = &on_click {
                    handler.call(());
                }
            },
            if image_state() == ImageLoadState::Failed {
                div {
                    style: "width: 100%; height: 100%; display: flex; align-items: center; justify-content: center; color: #999;",
                    "📷"
                }
            } else {
                if image_state() == ImageLoadState::Loading {
                    div {
                        style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: #999;",
                        "⏳"
                    }
                }
                img {
                    src: "{src}",
                    alt: "{alt}",
                    loading: "lazy",
                    style: "width: 100%; height: 100%; object-fit: cover;",
                    onload: move |_| image_state.set(ImageLoadState::Loaded),
                    onerror: move |_| {
                        log::warn!("Failed to load thumbnail {}", failed_src);
                        image_state.set(ImageLoadState::Failed);
                    },
                }
            }
        }
    }
}

/// Fullscreen image component - displays a single photo in fullscreen with close button
///
/// The browser picks medium or large from the `srcset`.
#[component]
pub fn FullscreenImage(
    urls: ThumbnailSet,
    #[props(default = "Photo".to_string())] alt: String,
    on_close: EventHandler<()>,
) -> Element {
    let mut image_state = use_signal(|| ImageLoadState::Loading);
    let srcset = urls.srcset();

    rsx! {
        div {
            class: "fullscreen",
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0, 0, 0, 0.95); z-index: 1000; display: flex; flex-direction: column;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 16px; background: rgba(0, 0, 0, 0.7);",
                div { style: "color: white; font-size: 16px;", "{alt}" }
                button {
                    style: "width: 40px; height: 40px; background: rgba(255, 255, 255, 0.2); color: white; border-radius: 50%; font-size: 24px; cursor: pointer; border: none;",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            div {
                style: "flex: 1; display: flex; align-items: center; justify-content: center; padding: 20px;",
                match image_state() {
                    ImageLoadState::Failed => rsx! {
                        div { style: "color: white; font-size: 48px;", "📷" }
                    },
                    state => rsx! {
                        if state == ImageLoadState::Loading {
                            div { style: "color: white; font-size: 48px; position: absolute;", "⏳" }
                        }
                        img {
                            src: "{urls.large}",
                            srcset: "{srcset}",
                            alt: "{alt}",
                            style: "max-width: 100%; max-height: 100%; object-fit: contain;",
                            onload: move |_| image_state.set(ImageLoadState::Loaded),
                            onerror: move |_| image_state.set(ImageLoadState::Failed),
                        }
                    },
                }
            }
        }
    }
}

/// Image viewer - a thumbnail that opens the fullscreen view when clicked
#[component]
pub fn ImageViewer(urls: ThumbnailSet, #[props(default = "Photo".to_string())] alt: String) -> Element {
    let mut show_fullscreen = use_signal(|| false);

    rsx! {
        ThumbnailImage {
            src: urls.small.clone(),
            alt: alt.clone(),
            on_click: move |_| show_fullscreen.set(true),
        }
        if show_fullscreen() {
            FullscreenImage {
                urls: urls.clone(),
                alt: alt.clone(),
                on_close: move |_| show_fullscreen.set(false),
            }
        }
    }
}
