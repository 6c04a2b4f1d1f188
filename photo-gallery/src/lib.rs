//! # Photo Gallery
//!
//! Thumbnail URL building and image viewer components for photos served by a
//! remote image server.
//!
//! This crate provides:
//! - URL templating for the three processed sizes (150, 720 and 1080 px)
//! - Dioxus components to show a thumbnail and open it fullscreen
//!   (feature `components`)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use photo_gallery::{thumbnail_urls, PhotoGalleryConfig, PhotoLocation};
//!
//! let config = PhotoGalleryConfig::new("https://photos.example.com");
//! let urls = thumbnail_urls(
//!     &config,
//!     &PhotoLocation { path: "/media/2020", file_name: "sunset", file_format: ".jpg" },
//! );
//! assert_eq!(urls.small, "https://photos.example.com/media/2020/sunset-150_150.jpg");
//! ```

pub mod models;
pub mod thumbnail;

#[cfg(feature = "components")]
pub mod components;

pub use models::{PhotoGalleryConfig, PhotoLocation, ThumbnailSet, ThumbnailSize};
pub use thumbnail::{thumbnail_url, thumbnail_urls};

#[cfg(feature = "components")]
pub use components::{FullscreenImage, ImageViewer, PhotoGalleryContext, ThumbnailImage};
