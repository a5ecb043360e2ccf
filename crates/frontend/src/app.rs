use crate::layout::toast::{ToastHost, ToastService};
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide ToastService for centralized notification display
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
