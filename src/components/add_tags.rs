use crate::models::{add_tag, remove_tag, Item, TagUpdate};
use dioxus::prelude::*;
use dioxus_i18n::t;

/// Tag editor of one table row
///
/// Emits the item's complete new tag list; saving is up to the parent.
#[component]
pub fn DataTableAddTags(item: Item, on_add_tags: EventHandler<TagUpdate>) -> Element {
    let mut editing = use_signal(|| false);
    let mut new_tag = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let item_id = item.id;
    let current_tags = item.tags.clone();
    let all_tags = item.tags.clone();

    if !editing() {
        return rsx! {
            button {
                class: "btn-secondary",
                title: t!("action-edit-tags"),
                onclick: move |_| editing.set(true),
                "✏️"
            }
        };
    }

    rsx! {
        div { class: "tag-editor",
            div { class: "tag-chips",
                for (index, tag) in item.tags.iter().enumerate() {
                    {
                        let tags = all_tags.clone();
                        rsx! {
                            span { key: "{index}-{tag}", class: "tag-chip",
                                "{tag}"
                                button {
                                    class: "tag-remove",
                                    onclick: move |_| {
                                        on_add_tags
                                            .call(TagUpdate {
                                                item_id,
                                                tags: remove_tag(&tags, index),
                                            });
                                    },
                                    "×"
                                }
                            }
                        }
                    }
                }
            }
            form {
                class: "tag-add",
                onsubmit: move |e| {
                    e.prevent_default();
                    match add_tag(&current_tags, &new_tag()) {
                        Ok(tags) => {
                            if tags != current_tags {
                                on_add_tags.call(TagUpdate { item_id, tags });
                            }
                            new_tag.set(String::new());
                            error.set(None);
                        }
                        Err(e) => {
                            log::debug!("Rejected tag for item {}: {}", item_id, e);
                            error.set(Some(e.user_message()));
                        }
                    }
                },
                input {
                    r#type: "text",
                    placeholder: t!("tag-placeholder"),
                    value: "{new_tag}",
                    oninput: move |e| new_tag.set(e.value()),
                }
                button { r#type: "submit", class: "btn-success", "+" }
                button {
                    r#type: "button",
                    class: "btn-secondary",
                    onclick: move |_| {
                        editing.set(false);
                        error.set(None);
                    },
                    {t!("action-done")}
                }
            }
            if let Some(message) = error() {
                p { class: "tag-error", "{message}" }
            }
        }
    }
}
