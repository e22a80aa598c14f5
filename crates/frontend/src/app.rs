use crate::domain::a025_order::ui::page::OrdersPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! { <OrdersPage /> }
}
