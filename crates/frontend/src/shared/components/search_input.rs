use crate::shared::icons::icon;
use leptos::prelude::*;

/// Search box with a leading icon and a clear button. Fires on every
/// keystroke: re-filtering is cheap at these volumes, so there is no
/// debounce and no minimum length.
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Callback fired with the new value on every input
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let clear = move |_| on_change.run(String::new());

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
            {move || {
                if value.get().is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <button class="search-input__clear" title="Limpar" on:click=clear>
                            {icon("x")}
                        </button>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
