use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Pre-formatted value ("4", "R$ 9.600,00", ...)
    #[prop(into)]
    value: Signal<String>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    description: Signal<Option<String>>,
    /// Change relative to cost: pre-formatted percentage + direction.
    /// `None` hides the trend line (e.g. margin undefined without sales).
    #[prop(into, optional)]
    trend: Signal<Option<(String, bool)>>,
) -> impl IntoView {
    let trend_view = move || {
        trend.get().map(|(text, positive)| {
            let (prefix, cls) = if positive {
                ("+", "stat-card__trend stat-card__trend--up")
            } else {
                ("", "stat-card__trend stat-card__trend--down")
            };
            view! { <p class=cls>{format!("{}{}", prefix, text)}</p> }
        })
    };

    let description_view = move || {
        description.get().map(|text| {
            view! { <p class="stat-card__description">{text}</p> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__icon">{icon(&icon_name)}</span>
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value">{value}</div>
                {description_view}
                {trend_view}
            </div>
        </div>
    }
}
