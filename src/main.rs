use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;
use dioxus_i18n::t;
use photo_gallery::PhotoGalleryContext;

mod components;
mod config;
mod error;
mod i18n;
mod models;
mod services;
mod validation;

use components::{DataTable, StatusBanner, StatusMessage};
use config::AppConfig;
use models::{ProcessFlags, RecordQuery, SearchRequest, TagUpdate};
use services::SpmApiService;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    dioxus::launch(App);
}

/// Configuration plus the message to show if it could not be loaded
fn load_config() -> (AppConfig, Option<StatusMessage>) {
    match AppConfig::load() {
        Ok(config) => {
            log::info!(
                "Using API {} and image route '{}'",
                config.api_url,
                config.app_route
            );
            (config, None)
        }
        Err(e) => {
            log::error!("{}", e);
            (
                AppConfig::default(),
                Some(StatusMessage::Error(e.user_message())),
            )
        }
    }
}

#[component]
fn App() -> Element {
    use_init_i18n(i18n::init_i18n);

    let (config, config_status) = use_hook(load_config);
    use_context_provider(|| PhotoGalleryContext::new(config.app_route.clone()));

    let api = use_hook(|| {
        SpmApiService::new(&config).map_err(|e| {
            log::error!("{}", e);
            e.user_message()
        })
    });

    let mut query = use_signal(|| RecordQuery::new(config.results_per_page));
    let mut status = use_signal(|| config_status);
    let mut busy = use_signal(|| false);

    // Refetches whenever `query` changes
    let records_api = api.clone();
    let mut records = use_resource(move || {
        let api = records_api.clone();
        let current = query();
        log::debug!(
            "Fetching page {} ({} per page, order {})",
            current.page(),
            current.results(),
            current.order_by()
        );
        async move {
            match api {
                Ok(api) => api.get_records(&current).await.map_err(|e| {
                    log::error!("Loading records failed: {}", e);
                    e.user_message()
                }),
                Err(message) => Err(message),
            }
        }
    });

    let process_api = api.clone();
    let on_process_photos = move |flags: ProcessFlags| {
        let api = process_api.clone();
        busy.set(true);
        spawn(async move {
            let result = match api {
                Ok(api) => api.process_photos(flags).await.map_err(|e| {
                    log::error!("Processing failed: {}", e);
                    e.user_message()
                }),
                Err(message) => Err(message),
            };
            match result {
                Ok(message) => {
                    status.set(Some(StatusMessage::Info(message)));
                    records.restart();
                }
                Err(message) => status.set(Some(StatusMessage::Error(message))),
            }
            busy.set(false);
        });
    };

    let tags_api = api.clone();
    let on_add_tags = move |update: TagUpdate| {
        let api = tags_api.clone();
        let saved = t!("status-tags-saved");
        spawn(async move {
            let result = match api {
                Ok(api) => api.update_tags(&update).await.map_err(|e| {
                    log::error!("Saving tags of item {} failed: {}", update.item_id, e);
                    e.user_message()
                }),
                Err(message) => Err(message),
            };
            match result {
                Ok(item) => {
                    log::info!("Saved {} tags for item {}", item.tags.len(), item.id);
                    status.set(Some(StatusMessage::Info(saved)));
                    records.restart();
                }
                Err(message) => status.set(Some(StatusMessage::Error(message))),
            }
        });
    };

    let (record, load_error) = match &*records.read() {
        Some(Ok(record)) => (Some(record.clone()), None),
        Some(Err(message)) => (None, Some(message.clone())),
        None => (None, None),
    };

    let title = t!("app-title");

    rsx! {
        document::Title { "{title}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "app",
            header { class: "app-header",
                h1 { "📷 {title}" }
            }

            if let Some(message) = status() {
                StatusBanner { message, on_dismiss: move |_| status.set(None) }
            }
            if let Some(message) = load_error {
                StatusBanner {
                    message: StatusMessage::Error(message),
                    on_dismiss: move |_| records.restart(),
                }
            }

            DataTable {
                query: query(),
                record,
                busy: busy(),
                on_get_records: move |q: RecordQuery| query.set(q),
                on_search: move |request: SearchRequest| query.set(request.into_query()),
                on_process_photos,
                on_add_tags,
            }
        }
    }
}
