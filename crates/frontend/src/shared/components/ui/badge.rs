use crate::shared::icons::icon;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "accent", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "accent" => "badge--accent",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Status badge for the sale completion state.
#[component]
pub fn StatusBadge(
    /// `true` once the device was received from the supplier
    #[prop(into)]
    received: Signal<bool>,
) -> impl IntoView {
    view! {
        {move || {
            if received.get() {
                view! {
                    <span class="badge badge--status badge--status-completed">
                        {icon("check-circle")}
                        "Concluído"
                    </span>
                }
                .into_any()
            } else {
                view! {
                    <span class="badge badge--status badge--status-pending">
                        {icon("x-circle")}
                        "Pendente"
                    </span>
                }
                .into_any()
            }
        }}
    }
}
