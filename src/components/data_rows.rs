use crate::components::DataTableAddTags;
use crate::models::{is_copied_marker, Item, TagUpdate};
use dioxus::prelude::*;
use dioxus_i18n::t;
use photo_gallery::{ImageViewer, PhotoGalleryContext};

/// CSS class of a tag in the tag list
pub fn tag_class(tag: &str) -> &'static str {
    if is_copied_marker(tag) {
        "tag tag-copied"
    } else {
        "tag"
    }
}

/// Table rows for one page of results
#[component]
pub fn DataTableData(items: Vec<Item>, on_add_tags: EventHandler<TagUpdate>) -> Element {
    let gallery = use_context::<PhotoGalleryContext>();

    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    th { {t!("column-id")} }
                    th { {t!("column-photo")} }
                    th { {t!("column-file")} }
                    th { {t!("column-tags")} }
                    th {}
                }
            }
            tbody {
                for item in items {
                    {
                        let urls = gallery.urls(&item.location());
                        let name = item.display_name();
                        rsx! {
                            tr { key: "{item.id}",
                                td { class: "cell-id", "{item.id}" }
                                td { class: "cell-photo",
                                    ImageViewer { urls, alt: name.clone() }
                                }
                                td { class: "cell-file", "{name}" }
                                td { class: "cell-tags",
                                    ul {
                                        for tag in item.tags.iter() {
                                            li { class: tag_class(tag), "{tag}" }
                                        }
                                    }
                                }
                                td { class: "cell-edit",
                                    DataTableAddTags { item: item.clone(), on_add_tags }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
