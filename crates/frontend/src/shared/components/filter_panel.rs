use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPopover component - "Filters" trigger with an active-count badge and a
/// collapsible panel holding the filter form.
///
/// Open/closed is transient UI state kept by the caller in `is_expanded`.
#[component]
pub fn FilterPopover(
    #[prop(into)] is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Filter form fields
    children: ChildrenFn,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-popover">
            <button
                type="button"
                class="button button--secondary filter-popover__trigger"
                aria-expanded=move || is_expanded.get().to_string()
                on:click=toggle_expanded
            >
                {icon("filter")}
                <span class="filter-popover__title">"Filters"</span>
                {move || {
                    let count = active_filters_count.get();
                    (count > 0).then(|| view! {
                        <span class="badge badge--primary filter-popover__count">{count}</span>
                    })
                }}
                {icon("chevron-down")}
            </button>

            <div class=move || {
                if is_expanded.get() {
                    "filter-popover__content filter-popover__content--expanded"
                } else {
                    "filter-popover__content filter-popover__content--collapsed"
                }
            }>
                {children()}
            </div>
        </div>
    }
}

/// FilterTag component - individual removable filter chip
#[component]
pub fn FilterTag(
    #[prop(into)] label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <button
                type="button"
                class="filter-tag__remove"
                title="Remove filter"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </button>
        </div>
    }
}
