use leptos::prelude::*;

/// Native date picker. The browser renders the value in the user's locale
/// (dd/mm/yyyy for pt-BR) while the callback always receives yyyy-mm-dd.
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
    /// Tooltip naming the bound ("Data inicial" / "Data final")
    #[prop(optional, into)]
    title: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form__input form__input--date"
            title=move || title.get().unwrap_or_default()
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
