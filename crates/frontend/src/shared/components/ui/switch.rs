use leptos::prelude::*;

/// Toggle row with a label and helper text, used for the
/// "device received from supplier" flag.
#[component]
pub fn Switch(
    #[prop(into)]
    label: String,
    /// Helper text shown under the label
    #[prop(optional, into)]
    description: MaybeProp<String>,
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let switch_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__switch-row">
            <div class="form__switch-text">
                <label class="form__label" for=switch_id>
                    {label}
                </label>
                {move || description.get().map(|text| view! {
                    <p class="form__hint">{text}</p>
                })}
            </div>
            <input
                id=switch_id
                type="checkbox"
                class="form__switch"
                role="switch"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </div>
    }
}
