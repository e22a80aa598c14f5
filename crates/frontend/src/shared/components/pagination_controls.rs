use crate::shared::icons::icon;
use leptos::prelude::*;

/// 1-indexed range of records shown on `page`; `(0, 0)` when there are none
pub fn page_record_range(page: usize, page_size: usize, total: usize) -> (usize, usize) {
    if total == 0 || page_size == 0 {
        return (0, 0);
    }
    let first = (page.max(1) - 1) * page_size + 1;
    if first > total {
        return (0, 0);
    }
    let last = (first + page_size - 1).min(total);
    (first, last)
}

/// "Showing 21–40 of 95"
pub fn page_summary(page: usize, page_size: usize, total: usize) -> String {
    let (first, last) = page_record_range(page, page_size, total);
    if first == 0 {
        format!("Showing 0 of {}", total)
    } else {
        format!("Showing {}–{} of {}", first, last, total)
    }
}

pub fn has_previous_page(page: usize) -> bool {
    page > 1
}

pub fn has_next_page(page: usize, total_pages: usize) -> bool {
    page < total_pages
}

/// PaginationControls component - footer with record summary, page buttons and page size select.
///
/// Pages are 1-indexed. The component only reports the requested page; the owner
/// decides what is actually shown.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)] total_pages: Signal<usize>,

    /// Total count of records across all pages
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)] page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    page_size_options: Vec<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-summary">
                {move || page_summary(current_page.get(), page_size.get(), total_count.get())}
            </span>
            <div class="pagination-controls__pages">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(1)
                    disabled=move || !has_previous_page(current_page.get())
                    title="First page"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if has_previous_page(page) {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || !has_previous_page(current_page.get())
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                <span class="pagination-info">
                    {move || format!("Page {} of {}", current_page.get(), total_pages.get().max(1))}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if has_next_page(page, total_pages.get()) {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || !has_next_page(current_page.get(), total_pages.get())
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let total = total_pages.get();
                        if total > 0 {
                            on_page_change.run(total);
                        }
                    }
                    disabled=move || !has_next_page(current_page.get(), total_pages.get())
                    title="Last page"
                >
                    {icon("chevrons-right")}
                </button>
            </div>
            <label class="pagination-controls__size">
                "Rows per page"
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            on_page_size_change.run(size);
                        }
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_options.into_iter().map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
        </div>
    }
}
