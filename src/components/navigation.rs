use crate::models::{AuthMeta, ProcessAction, ProcessFlags, RecordQuery, SearchRequest};
use crate::validation::{validate_term, ORDER_BY_FIELDS};
use dioxus::prelude::*;
use dioxus_i18n::t;

/// Page sizes offered in the toolbar
pub const RESULTS_OPTIONS: &[u32] = &[5, 10, 20, 50];

const SEARCH_INPUT_ID: &str = "nav-search-term";

/// CSS class of a toolbar button; disabled buttons carry `disabled`
pub fn action_class(enabled: bool) -> &'static str {
    if enabled {
        "btn-secondary"
    } else {
        "btn-secondary disabled"
    }
}

/// Every `order_by` value: ascending then descending per column
pub fn order_by_options() -> Vec<String> {
    ORDER_BY_FIELDS
        .iter()
        .flat_map(|field| [field.to_string(), format!("-{}", field)])
        .collect()
}

/// Select label of an `order_by` value, e.g. `file_name ↓` for `-file_name`
pub fn order_label(value: &str) -> String {
    match value.strip_prefix('-') {
        Some(field) => format!("{} ↓", field),
        None => format!("{} ↑", value),
    }
}

#[component]
pub fn DataTableNav(
    query: RecordQuery,
    auth: AuthMeta,
    #[props(default)] busy: bool,
    on_get_records: EventHandler<RecordQuery>,
    on_search: EventHandler<SearchRequest>,
    on_process_photos: EventHandler<ProcessFlags>,
) -> Element {
    let mut term = use_signal(|| query.tag().unwrap_or_default().to_string());

    let refresh_query = query.clone();
    let search_query = query.clone();
    let clear_query = query.clone();
    let results_query = query.clone();
    let order_query = query.clone();
    let has_filter = query.tag().is_some();
    let placeholder = format!("🔍 {}", t!("search-placeholder-tag"));

    rsx! {
        div { class: "data-table-nav",

            // Refresh & processing
            div { class: "nav-actions",
                button {
                    class: "btn-primary",
                    onclick: move |_| on_get_records.call(refresh_query.first_page()),
                    "🔄 "
                    {t!("action-refresh")}
                }

                for action in ProcessAction::all().iter().copied() {
                    {
                        let enabled = action.is_allowed(&auth) && !busy;
                        rsx! {
                            button {
                                class: action_class(enabled),
                                disabled: !enabled,
                                onclick: move |_| {
                                    if !busy {
                                        action.dispatch(&auth, |flags| on_process_photos.call(flags));
                                    }
                                },
                                {t!(action.label_key())}
                            }
                        }
                    }
                }
            }

            // Search
            form {
                class: "nav-search",
                onsubmit: move |e| {
                    e.prevent_default();
                    on_search
                        .call(SearchRequest {
                            query: search_query.clone(),
                            term: term(),
                        });
                },
                input {
                    id: SEARCH_INPUT_ID,
                    r#type: "search",
                    placeholder: "{placeholder}",
                    value: "{term}",
                    oninput: move |e| {
                        let previous = term.peek().to_string();
                        let accepted = validate_term(&previous, &e.value());
                        if accepted == previous && e.value() != previous {
                            // Rejected keystroke: the DOM already shows it, put the old value back
                            if let Ok(literal) = serde_json::to_string(&previous) {
                                let _ = document::eval(
                                    &format!(
                                        "document.getElementById('{}').value = {};",
                                        SEARCH_INPUT_ID,
                                        literal,
                                    ),
                                );
                            }
                        }
                        term.set(accepted);
                    },
                }
                button { r#type: "submit", class: "btn-primary", {t!("action-search")} }
                if has_filter {
                    button {
                        r#type: "button",
                        class: "btn-secondary",
                        onclick: move |_| {
                            term.set(String::new());
                            on_search
                                .call(SearchRequest {
                                    query: clear_query.clone(),
                                    term: String::new(),
                                });
                        },
                        "✕"
                    }
                }
            }

            // Page size & ordering
            div { class: "nav-options",
                label {
                    {t!("label-results-per-page")}
                    select {
                        onchange: move |e| on_get_records.call(results_query.with_results(&e.value())),
                        for n in RESULTS_OPTIONS.iter().copied() {
                            option {
                                key: "{n}",
                                value: "{n}",
                                selected: n == query.results(),
                                "{n}"
                            }
                        }
                    }
                }
                label {
                    {t!("label-order-by")}
                    select {
                        onchange: move |e| on_get_records.call(order_query.with_order_by(&e.value())),
                        for value in order_by_options() {
                            option {
                                key: "{value}",
                                value: "{value}",
                                selected: value == query.order_by(),
                                {order_label(&value)}
                            }
                        }
                    }
                }
            }
        }
    }
}
