//! Orders table: toolbar (search, filters, export), grid and pagination.
//!
//! The table holds no query state of its own. Everything it shows comes in
//! through signals and every user intent goes out through a callback; the
//! owner decides what changes.

pub mod columns;
pub mod export_menu;
pub mod filters;
pub mod row_actions;
pub mod state;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{LabelHeaderCell, SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::{Badge, Button, ButtonVariant, Input};
use crate::shared::icons::icon;
use chrono::NaiveDate;
use columns::{
    route_row_click, CellContent, ColumnCache, ColumnHeader, OrderColumn, OrderColumnKey,
    OrderRowActions, RowClickTarget,
};
use contracts::domain::a025_order::{
    ExportType, OrderListItemDto, OrderSortField, OrderStatus, SortOrder, PAGE_SIZE_OPTIONS,
};
use export_menu::ExportMenu;
use filters::{ActiveFilterBadges, FilterHandlers, OrderFilters};
use leptos::prelude::*;
use row_actions::RowActionsMenu;
use state::{
    amount_error_messages, OrderFilterState, TableBodyState, SKELETON_CELL_CLASSES, SKELETON_ROWS,
};
use std::sync::Arc;
use thaw::*;

pub const SEARCH_PLACEHOLDER: &str = "Search by customer name or order ID...";

fn column_min_width(key: OrderColumnKey) -> f64 {
    match key {
        OrderColumnKey::Id => 120.0,
        OrderColumnKey::CustomerName => 180.0,
        OrderColumnKey::Status => 110.0,
        OrderColumnKey::Amount => 120.0,
        OrderColumnKey::OrderDate => 130.0,
        OrderColumnKey::Actions => 56.0,
    }
}

fn render_header(column: &OrderColumn) -> AnyView {
    let min_width = column_min_width(column.key);
    match &column.header {
        ColumnHeader::Label { title, icon } => view! {
            <LabelHeaderCell label=*title icon_name=Some(*icon) min_width=min_width />
        }
        .into_any(),
        ColumnHeader::Sortable {
            title,
            icon,
            direction,
            ..
        } => {
            let header = column.header.clone();
            view! {
                <SortableHeaderCell
                    label=*title
                    icon_name=*icon
                    direction=*direction
                    on_click=Callback::new(move |_| {
                        header.click();
                    })
                    min_width=min_width
                />
            }
            .into_any()
        }
        ColumnHeader::Empty => view! { <TableHeaderCell min_width=min_width>""</TableHeaderCell> }
            .into_any(),
    }
}

fn render_cell(content: CellContent, actions: Option<OrderRowActions>) -> AnyView {
    match content {
        CellContent::Text { text, emphasis } => {
            let class = if emphasis { "orders-table__id" } else { "" };
            view! {
                <TableCell>
                    <TableCellLayout truncate=true>
                        <span class=class>{text}</span>
                    </TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
        CellContent::Badge { label, variant } => view! {
            <TableCell>
                <TableCellLayout>
                    <Badge variant=variant>{label}</Badge>
                </TableCellLayout>
            </TableCell>
        }
        .into_any(),
        CellContent::Money(value) => view! { <TableCellMoney value=value /> }.into_any(),
        CellContent::Date(text) => view! {
            <TableCell>
                <TableCellLayout>{text}</TableCellLayout>
            </TableCell>
        }
        .into_any(),
        CellContent::Actions { row_id } => match actions {
            Some(actions) => view! {
                <TableCell on:click=|e| e.stop_propagation()>
                    <RowActionsMenu row_id=row_id actions=actions />
                </TableCell>
            }
            .into_any(),
            None => view! { <TableCell>""</TableCell> }.into_any(),
        },
    }
}

fn render_row(order: OrderListItemDto, columns: &[OrderColumn], actions: OrderRowActions) -> impl IntoView {
    let cells = columns
        .iter()
        .map(|column| render_cell(column.project(&order), column.actions()))
        .collect_view();

    let row_id = order.id;
    view! {
        <TableRow
            on:click=move |_| {
                route_row_click(RowClickTarget::Row, &row_id, &actions);
            }
            attr:style="cursor: pointer;"
        >
            {cells}
        </TableRow>
    }
}

fn render_skeleton() -> impl IntoView {
    view! {
        <div class="orders-table__skeleton" aria-busy="true">
            {(0..SKELETON_ROWS)
                .map(|_| {
                    view! {
                        <div class="orders-table__skeleton-row">
                            {SKELETON_CELL_CLASSES
                                .iter()
                                .map(|class| view! { <div class=*class></div> })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn render_empty(title: &'static str, hint: &'static str) -> impl IntoView {
    view! {
        <div class="orders-table__empty">
            <p class="orders-table__empty-title">{title}</p>
            <p class="orders-table__empty-hint">{hint}</p>
        </div>
    }
}

/// Orders data table
#[component]
pub fn OrdersDataTable(
    #[prop(into)] orders: Signal<Vec<OrderListItemDto>>,
    /// Orders matching the current filters, across all pages
    #[prop(into)]
    total: Signal<usize>,
    /// 1-indexed
    #[prop(into)]
    page: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] search_query: Signal<String>,
    #[prop(into)] selected_statuses: Signal<Vec<OrderStatus>>,
    #[prop(into)] date_from: Signal<Option<NaiveDate>>,
    #[prop(into)] date_to: Signal<Option<NaiveDate>>,
    #[prop(into)] min_amount: Signal<f64>,
    #[prop(into)] max_amount: Signal<f64>,
    #[prop(into)] sort_by: Signal<OrderSortField>,
    #[prop(into)] sort_order: Signal<SortOrder>,
    #[prop(into)] is_exporting: Signal<bool>,
    on_search_change: Callback<String>,
    on_statuses_change: Callback<Vec<OrderStatus>>,
    on_date_from_change: Callback<Option<NaiveDate>>,
    on_date_to_change: Callback<Option<NaiveDate>>,
    /// `(min, max)`
    on_amount_range_change: Callback<(f64, f64)>,
    on_clear_filters: Callback<()>,
    /// Reports the clicked column; the owner picks the direction
    on_sort_change: Callback<OrderSortField>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    on_view: Callback<String>,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
    on_export: Callback<ExportType>,
    #[prop(optional, into)] export_error: MaybeProp<String>,
    /// Called once per row with an unparseable amount each time a new list of orders arrives
    #[prop(optional)]
    on_row_error: Option<Callback<String>>,
) -> impl IntoView {
    let actions = OrderRowActions {
        on_view,
        on_edit,
        on_delete,
    };
    let handlers = FilterHandlers {
        on_statuses_change,
        on_date_from_change,
        on_date_to_change,
        on_amount_range_change,
    };

    let filter_state = Memo::new(move |_| OrderFilterState {
        search_query: search_query.get(),
        selected_statuses: selected_statuses.get(),
        date_from: date_from.get(),
        date_to: date_to.get(),
        min_amount: min_amount.get(),
        max_amount: max_amount.get(),
    });
    let has_active_filters = Memo::new(move |_| filter_state.with(|f| f.has_active_filters()));
    let filters_open = RwSignal::new(false);

    let column_cache = StoredValue::new(ColumnCache::new(actions, on_sort_change));
    let columns = move || {
        let (by, order) = (sort_by.get(), sort_order.get());
        let mut out = None;
        column_cache.update_value(|cache| out = Some(cache.columns(by, order)));
        out.unwrap_or_default()
    };

    // Reported per distinct list of orders, not per render
    let received_orders = Memo::new(move |_| orders.get());
    Effect::new(move |_| {
        received_orders.with(|list| {
            for order in list.iter().filter(|o| o.status().is_none()) {
                log::warn!("order {} has unknown status {:?}", order.id, order.status);
            }
            for message in amount_error_messages(list) {
                log::error!("{}", message);
                if let Some(report) = on_row_error {
                    report.run(message);
                }
            }
        })
    });

    let body_state = Memo::new(move |_| {
        TableBodyState::resolve(
            is_loading.get(),
            orders.with(|o| o.len()),
            filter_state.with(|f| f.is_filtering()),
        )
    });

    view! {
        <div class="orders-table">
            <div class="orders-table__toolbar">
                <Input
                    class="orders-table__search"
                    placeholder=SEARCH_PLACEHOLDER
                    leading_icon=icon("search")
                    value=search_query
                    on_input=on_search_change
                />
                <OrderFilters filters=filter_state handlers=handlers is_expanded=filters_open />
                <Show when=move || has_active_filters.get()>
                    <Button
                        variant=ButtonVariant::Ghost
                        small=true
                        on_click=Callback::new(move |_| on_clear_filters.run(()))
                    >
                        "Clear all"
                    </Button>
                </Show>
                <div class="orders-table__toolbar-spacer"></div>
                <ExportMenu
                    is_exporting=is_exporting
                    on_export=on_export
                    export_error=export_error
                />
            </div>

            <Show when=move || has_active_filters.get()>
                <ActiveFilterBadges filters=filter_state handlers=handlers />
            </Show>

            {move || match body_state.get() {
                TableBodyState::Loading => render_skeleton().into_any(),
                TableBodyState::Empty { title, hint } => render_empty(title, hint).into_any(),
                TableBodyState::Rows => view! {
                    <div class="orders-table__grid">
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    {move || columns().iter().map(render_header).collect_view()}
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    let cols: Arc<Vec<OrderColumn>> = columns();
                                    orders
                                        .get()
                                        .into_iter()
                                        .map(|order| render_row(order, &cols, actions))
                                        .collect_view()
                                }}
                            </TableBody>
                        </Table>
                    </div>
                    <PaginationControls
                        current_page=page
                        total_pages=total_pages
                        total_count=total
                        page_size=page_size
                        on_page_change=on_page_change
                        on_page_size_change=on_page_size_change
                        page_size_options=PAGE_SIZE_OPTIONS.to_vec()
                    />
                }
                .into_any(),
            }}
        </div>
    }
}
