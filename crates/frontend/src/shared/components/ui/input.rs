use leptos::prelude::*;

/// Input component with label support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "date", "tel", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Disabled state (the IMEI field while editing)
    #[prop(optional)]
    disabled: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=disabled
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}

/// Numeric input for BRL amounts. Unparseable input is reported as 0.0,
/// matching the form behavior for partially typed numbers.
#[component]
pub fn MoneyInput(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<f64>,
    on_input: Callback<f64>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id>
                {label}
            </label>
            <input
                id=input_id
                class="form__input"
                type="number"
                step="0.01"
                min="0"
                prop:value=move || value.get().to_string()
                placeholder=input_placeholder
                on:input=move |ev| {
                    let parsed = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
                    on_input.run(parsed);
                }
            />
        </div>
    }
}
