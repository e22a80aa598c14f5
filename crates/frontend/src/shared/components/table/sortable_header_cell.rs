//! Sortable table header cell
//!
//! The cell only reports clicks. Direction is owned by the caller and passed
//! back in as `direction`, which is `None` unless this column is the active sort.

use crate::shared::icons::icon;
use contracts::domain::a025_order::SortOrder;
use leptos::prelude::*;
use thaw::*;

/// Indicator shown after the header title
pub fn sort_indicator(direction: Option<SortOrder>) -> &'static str {
    match direction {
        Some(SortOrder::Asc) => " ▲",
        Some(SortOrder::Desc) => " ▼",
        None => " ⇅",
    }
}

pub fn sort_class(direction: Option<SortOrder>) -> &'static str {
    if direction.is_some() {
        "table__sort-icon table__sort-icon--active"
    } else {
        "table__sort-icon"
    }
}

pub fn aria_sort(direction: Option<SortOrder>) -> &'static str {
    match direction {
        Some(SortOrder::Asc) => "ascending",
        Some(SortOrder::Desc) => "descending",
        None => "none",
    }
}

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    /// Icon name from `shared::icons`
    icon_name: &'static str,
    direction: Option<SortOrder>,
    on_click: Callback<()>,
    #[prop(default = 100.0)] min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell min_width=min_width attr:aria-sort=aria_sort(direction)>
            <div
                class="table__sortable-header"
                style="cursor: pointer; user-select: none; display: inline-flex; align-items: center; gap: 6px;"
                on:click=move |_| on_click.run(())
            >
                {icon(icon_name)}
                {label}
                <span class=sort_class(direction)>{sort_indicator(direction)}</span>
            </div>
        </TableHeaderCell>
    }
}

/// Plain, non-interactive header cell
#[component]
pub fn LabelHeaderCell(
    #[prop(into)] label: String,
    icon_name: Option<&'static str>,
    #[prop(default = 100.0)] min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell min_width=min_width>
            <div style="display: inline-flex; align-items: center; gap: 6px;">
                {icon_name.map(icon)}
                {label}
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator(Some(SortOrder::Asc)), " ▲");
        assert_eq!(sort_indicator(Some(SortOrder::Desc)), " ▼");
        assert_eq!(sort_indicator(None), " ⇅");
        assert_eq!(aria_sort(None), "none");
        assert_eq!(sort_class(Some(SortOrder::Asc)), "table__sort-icon table__sort-icon--active");
    }
}
