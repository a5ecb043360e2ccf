pub mod view;
pub mod view_model;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use view::StockForm;

#[component]
pub fn AddStockPage() -> impl IntoView {
    view! { <StockForm imei=None /> }
}

#[component]
pub fn EditStockPage() -> impl IntoView {
    let params = use_params_map();
    let imei = params.with_untracked(|p| p.get("imei"));

    view! { <StockForm imei=imei /> }
}
