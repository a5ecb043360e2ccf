use leptos::prelude::*;

const DISMISS_AFTER_MS: u32 = 4000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Centralized notification display. One toast at a time; a newer toast
/// replaces the current one and restarts the dismiss timer.
#[derive(Clone, Copy)]
pub struct ToastService {
    current: RwSignal<Option<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), ToastVariant::Success);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), ToastVariant::Error);
    }

    fn push(&self, title: String, description: String, variant: ToastVariant) {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        self.current.set(Some(Toast {
            id,
            title,
            description,
            variant,
        }));

        let current = self.current;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            current.update(|toast| {
                // Only dismiss if no newer toast replaced this one meanwhile
                if toast.as_ref().map(|t| t.id) == Some(id) {
                    *toast = None;
                }
            });
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        {move || {
            toasts.current.get().map(|toast| {
                let variant_class = match toast.variant {
                    ToastVariant::Success => "toast toast--success",
                    ToastVariant::Error => "toast toast--error",
                };
                view! {
                    <div class="toast-host">
                        <div
                            class=variant_class
                            on:click=move |_| toasts.current.set(None)
                        >
                            <div class="toast__title">{toast.title.clone()}</div>
                            <div class="toast__description">{toast.description.clone()}</div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
