pub mod state;

use super::list::OrdersDataTable;
use crate::domain::a025_order::api::{delete_order, export_orders, fetch_orders};
use crate::shared::api_utils::current_org_slug;
use crate::shared::components::page_header::PageHeader;
use crate::shared::export::{download_bytes, export_filename};
use chrono::NaiveDate;
use contracts::domain::a025_order::{ExportType, OrderSortField, OrderStatus};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use state::{create_state, OrdersPageState, SEARCH_DEBOUNCE_MS};
use wasm_bindgen_futures::spawn_local;

pub fn order_view_path(org_slug: &str, id: &str) -> String {
    format!(
        "/org/{}/orders/{}",
        urlencoding::encode(org_slug),
        urlencoding::encode(id)
    )
}

pub fn order_edit_path(org_slug: &str, id: &str) -> String {
    format!("{}/edit", order_view_path(org_slug, id))
}

fn navigate(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(path) {
        log::error!("navigation to {} failed: {:?}", path, e);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Orders list page: owns the query, talks to the API and feeds the table
#[component]
pub fn OrdersPage() -> impl IntoView {
    let org_slug = StoredValue::new(current_org_slug());
    let state = create_state();
    let search_input = RwSignal::new(String::new());
    let search_generation = StoredValue::new(0u64);
    let row_error = RwSignal::new(None::<String>);

    let load = move || {
        let mut seq = 0;
        state.update(|s| seq = s.begin_request());
        let query = state.with_untracked(|s| s.query.clone());
        let slug = org_slug.get_value();
        spawn_local(async move {
            let result = fetch_orders(&slug, &query).await;
            match &result {
                Ok(resp) => log::debug!("loaded {} of {} orders (request #{})", resp.orders.len(), resp.total, seq),
                Err(e) => log::error!("failed to load orders: {}", e),
            }
            state.update(|s| {
                let previous_orders = s.response.orders.clone();
                if !s.finish_request(seq, result) {
                    log::debug!("discarding stale orders response #{}", seq);
                } else if s.response.orders != previous_orders {
                    row_error.set(None);
                }
            });
        });
    };

    // Applies a reducer and reloads
    let apply = move |reduce: &dyn Fn(&mut OrdersPageState)| {
        state.update(|s| reduce(s));
        load();
    };

    let on_search_change = Callback::new(move |text: String| {
        search_input.set(text.clone());
        search_generation.update_value(|g| *g += 1);
        let generation = search_generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if search_generation.get_value() == generation {
                apply(&|s| s.set_search(text.clone()));
            }
        });
    });

    let on_statuses_change = Callback::new(move |statuses: Vec<OrderStatus>| {
        apply(&|s| s.set_statuses(statuses.clone()))
    });
    let on_date_from_change = Callback::new(move |date: Option<NaiveDate>| {
        apply(&|s| s.set_date_from(date))
    });
    let on_date_to_change = Callback::new(move |date: Option<NaiveDate>| {
        apply(&|s| s.set_date_to(date))
    });
    let on_amount_range_change = Callback::new(move |(min, max): (f64, f64)| {
        apply(&|s| s.set_amount_range(min, max))
    });
    let on_clear_filters = Callback::new(move |_: ()| apply(&|s| s.clear_filters()));
    let on_sort_change = Callback::new(move |field: OrderSortField| apply(&|s| s.sort_by(field)));
    let on_page_change = Callback::new(move |page: usize| apply(&|s| s.set_page(page)));
    let on_page_size_change = Callback::new(move |size: usize| apply(&|s| s.set_page_size(size)));

    let on_view = Callback::new(move |id: String| {
        navigate(&order_view_path(&org_slug.get_value(), &id))
    });
    let on_edit = Callback::new(move |id: String| {
        navigate(&order_edit_path(&org_slug.get_value(), &id))
    });
    let on_delete = Callback::new(move |id: String| {
        if !confirm(&format!("Delete order {}?", id)) {
            return;
        }
        log::debug!("deleting order {}", id);
        let slug = org_slug.get_value();
        spawn_local(async move {
            match delete_order(&slug, &id).await {
                Ok(()) => load(),
                Err(e) => {
                    log::error!("failed to delete order {}: {}", id, e);
                    state.update(|s| s.error = Some(e));
                }
            }
        });
    });

    let on_export = Callback::new(move |export_type: ExportType| {
        let mut started = false;
        state.update(|s| started = s.begin_export());
        if !started {
            return;
        }
        let query = state.with_untracked(|s| s.query.clone());
        let slug = org_slug.get_value();
        spawn_local(async move {
            let result = match export_orders(&slug, &query, export_type).await {
                Ok(bytes) => download_bytes(
                    &bytes,
                    export_type.mime_type(),
                    &export_filename("orders", export_type.code()),
                ),
                Err(e) => Err(e),
            };
            if let Err(e) = &result {
                log::error!("export to {} failed: {}", export_type.code(), e);
            }
            state.update(|s| s.finish_export(result));
        });
    });

    let on_row_error = Callback::new(move |message: String| {
        if row_error.with_untracked(|e| e.is_none()) {
            row_error.set(Some(message));
        }
    });

    load();

    view! {
        <div class="page">
            <PageHeader
                title="Orders"
                count=Signal::derive(move || {
                    state.with(|s| (!s.is_loading).then_some(s.response.total))
                })
            />

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="alert alert--error" role="alert">{e}</div>
            })}
            {move || row_error.get().map(|e| view! {
                <div class="alert alert--warning" role="alert">
                    "Some orders could not be displayed correctly: " {e}
                </div>
            })}

            <OrdersDataTable
                orders=Signal::derive(move || state.with(|s| s.response.orders.clone()))
                total=Signal::derive(move || state.with(|s| s.response.total))
                page=Signal::derive(move || state.with(|s| s.query.page))
                page_size=Signal::derive(move || state.with(|s| s.query.page_size))
                total_pages=Signal::derive(move || state.with(|s| s.response.total_pages))
                is_loading=Signal::derive(move || state.with(|s| s.is_loading))
                search_query=search_input
                selected_statuses=Signal::derive(move || state.with(|s| s.query.statuses.clone()))
                date_from=Signal::derive(move || state.with(|s| s.query.date_from))
                date_to=Signal::derive(move || state.with(|s| s.query.date_to))
                min_amount=Signal::derive(move || state.with(|s| s.query.min_amount))
                max_amount=Signal::derive(move || state.with(|s| s.query.max_amount))
                sort_by=Signal::derive(move || state.with(|s| s.query.sort_by))
                sort_order=Signal::derive(move || state.with(|s| s.query.sort_order))
                is_exporting=Signal::derive(move || state.with(|s| s.is_exporting))
                on_search_change=on_search_change
                on_statuses_change=on_statuses_change
                on_date_from_change=on_date_from_change
                on_date_to_change=on_date_to_change
                on_amount_range_change=on_amount_range_change
                on_clear_filters=on_clear_filters
                on_sort_change=on_sort_change
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
                on_view=on_view
                on_edit=on_edit
                on_delete=on_delete
                on_export=on_export
                export_error=Signal::derive(move || state.with(|s| s.export_error.clone()))
                on_row_error=on_row_error
            />
        </div>
    }
}
