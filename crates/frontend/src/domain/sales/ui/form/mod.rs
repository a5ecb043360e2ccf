pub mod view;
pub mod view_model;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use view::SaleForm;

#[component]
pub fn AddSalePage() -> impl IntoView {
    view! { <SaleForm imei=None /> }
}

#[component]
pub fn EditSalePage() -> impl IntoView {
    let params = use_params_map();
    let imei = params.with_untracked(|p| p.get("imei"));

    view! { <SaleForm imei=imei /> }
}
