use crate::models::{RecordMeta, RecordQuery};
use crate::validation::parse_page;
use dioxus::prelude::*;
use dioxus_i18n::t;

/// Number of page buttons shown at once
const PAGE_WINDOW: u32 = 5;

/// Up to `width` consecutive page numbers around `current`, clamped to `1..=total`
pub fn page_window(current: u32, total: u32, width: u32) -> Vec<u32> {
    let total = total.max(1);
    let width = width.clamp(1, total);
    let current = current.clamp(1, total);

    // width <= total, so the last possible start never underflows
    let last_start = total - width + 1;
    let start = current.saturating_sub(width / 2).clamp(1, last_start);
    (start..=start + (width - 1)).collect()
}

#[component]
pub fn Paginate(
    query: RecordQuery,
    meta: RecordMeta,
    on_get_records: EventHandler<RecordQuery>,
) -> Element {
    let current = meta.current_page();
    let total = meta.page_count();
    let has_prev = current > 1;
    let has_next = current < total;
    let prev_query = query.with_page(current.saturating_sub(1));
    let next_query = query.with_page(current.saturating_add(1));
    let jump_query = query.clone();
    let info = format!(
        "{} {} / {} · {} {}",
        t!("paginate-page"),
        current,
        total,
        meta.total_results,
        t!("paginate-photos")
    );

    rsx! {
        div { class: "paginate",
            button {
                class: if has_prev { "page" } else { "page disabled" },
                disabled: !has_prev,
                onclick: move |_| {
                    if has_prev {
                        on_get_records.call(prev_query.clone());
                    }
                },
                "‹"
            }
            for page in page_window(current, total, PAGE_WINDOW) {
                {
                    let page_query = query.with_page(page);
                    rsx! {
                        button {
                            key: "{page}",
                            class: if page == current { "page active" } else { "page" },
                            onclick: move |_| on_get_records.call(page_query.clone()),
                            "{page}"
                        }
                    }
                }
            }
            button {
                class: if has_next { "page" } else { "page disabled" },
                disabled: !has_next,
                onclick: move |_| {
                    if has_next {
                        on_get_records.call(next_query.clone());
                    }
                },
                "›"
            }
            input {
                class: "page-jump",
                r#type: "number",
                min: "1",
                max: "{total}",
                value: "{current}",
                onchange: move |e| {
                    let page = parse_page(&e.value()).min(total);
                    if page != current {
                        on_get_records.call(jump_query.with_page(page));
                    }
                },
            }
            span { class: "paginate-info", "{info}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page() {
        assert_eq!(page_window(1, 1, 5), vec![1]);
        assert_eq!(page_window(3, 0, 5), vec![1]);
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 10, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_near_u32_max() {
        let max = u32::MAX;
        assert_eq!(
            page_window(max, max, 5),
            vec![max - 4, max - 3, max - 2, max - 1, max]
        );
        assert_eq!(page_window(max - 1, max, 3), vec![max - 2, max - 1, max]);
    }

    #[test]
    fn test_window_centered() {
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(42, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_fewer_pages_than_width() {
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
    }
}
