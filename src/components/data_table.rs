use crate::components::{DataTableData, DataTableNav, Paginate};
use crate::models::{ProcessFlags, Record, RecordQuery, SearchRequest, TagUpdate};
use dioxus::prelude::*;
use dioxus_i18n::t;

/// Toolbar, pagination and rows for the current record
///
/// `record` is `None` until the first page has loaded.
#[component]
pub fn DataTable(
    query: RecordQuery,
    record: Option<Record>,
    #[props(default)] busy: bool,
    on_get_records: EventHandler<RecordQuery>,
    on_search: EventHandler<SearchRequest>,
    on_process_photos: EventHandler<ProcessFlags>,
    on_add_tags: EventHandler<TagUpdate>,
) -> Element {
    let meta = record.as_ref().map(|r| r.meta.clone()).unwrap_or_default();
    let auth = meta.auth_meta();

    rsx! {
        div { class: "data-table-container",
            DataTableNav {
                query: query.clone(),
                auth,
                busy,
                on_get_records,
                on_search,
                on_process_photos,
            }

            match record {
                None => rsx! {
                    div { class: "table-placeholder", "⏳ " {t!("table-loading")} }
                },
                Some(record) if record.data.results.is_empty() => rsx! {
                    div { class: "table-placeholder",
                        if query.tag().is_some() {
                            {t!("table-no-matches")}
                        } else {
                            {t!("table-empty")}
                        }
                    }
                },
                Some(record) => rsx! {
                    Paginate { query: query.clone(), meta: meta.clone(), on_get_records }
                    DataTableData { items: record.data.results, on_add_tags }
                    Paginate { query: query.clone(), meta: meta.clone(), on_get_records }
                },
            }
        }
    }
}
