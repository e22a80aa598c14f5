use super::columns::{route_row_click, OrderRowActions, RowAction, RowClickTarget};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// "..." menu with View / Edit / Delete for one row.
///
/// Every click inside stops at the menu, so the row's own click handler
/// (open the order) never fires for it.
#[component]
pub fn RowActionsMenu(#[prop(into)] row_id: String, actions: OrderRowActions) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let row_id = StoredValue::new(row_id);

    view! {
        <div class="row-actions">
            <button
                type="button"
                class="button button--ghost button--small row-actions__trigger"
                title="Actions"
                aria-haspopup="menu"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |ev| {
                    if route_row_click(RowClickTarget::MenuTrigger, &row_id.get_value(), &actions) {
                        ev.stop_propagation();
                    }
                    is_open.update(|open| *open = !*open);
                }
            >
                {icon("more-horizontal")}
            </button>
            <Show when=move || is_open.get()>
                <div class="row-actions__menu" role="menu">
                    {RowAction::all()
                        .into_iter()
                        .map(|action| {
                            let class = if action.is_destructive() {
                                "row-actions__item row-actions__item--danger"
                            } else {
                                "row-actions__item"
                            };
                            view! {
                                <button
                                    type="button"
                                    role="menuitem"
                                    class=class
                                    on:click=move |ev| {
                                        is_open.set(false);
                                        if route_row_click(
                                            RowClickTarget::MenuItem(action),
                                            &row_id.get_value(),
                                            &actions,
                                        ) {
                                            ev.stop_propagation();
                                        }
                                    }
                                >
                                    {icon(action.icon_name())}
                                    {action.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
