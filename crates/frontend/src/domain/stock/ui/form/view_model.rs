use crate::layout::toast::ToastService;
use crate::shared::data::sample_stock_items;
use contracts::domain::common::{find_by_imei, Entity};
use contracts::domain::stock_item::{StockItem, StockItemDto};
use leptos::prelude::*;

/// ViewModel for the stock add/edit form.
///
/// There is no persistence layer: a successful save validates the Dto, logs
/// the payload and notifies, leaving the stored collection untouched.
#[derive(Clone, Copy)]
pub struct StockFormViewModel {
    pub form: RwSignal<StockItemDto>,
    pub error: RwSignal<Option<String>>,
    pub is_editing: bool,
    toasts: ToastService,
}

impl StockFormViewModel {
    pub fn new(imei: Option<String>, toasts: ToastService) -> Self {
        let existing = imei
            .as_deref()
            .and_then(|imei| find_by_imei(&sample_stock_items(), imei).map(StockItemDto::from_item));
        let is_editing = existing.is_some();

        Self {
            form: RwSignal::new(existing.unwrap_or_default()),
            error: RwSignal::new(None),
            is_editing,
            toasts,
        }
    }

    /// Validates and "saves". Returns `true` when the caller should navigate
    /// back to the dashboard.
    pub fn save_command(&self) -> bool {
        let current = self.form.get_untracked();

        if let Err(message) = current.validate() {
            self.error.set(Some(message));
            return false;
        }
        self.error.set(None);

        log::info!(
            "{} {}: {}",
            if self.is_editing { "Editando" } else { "Adicionando" },
            StockItem::element_name(),
            serde_json::to_string(&current).unwrap_or_default()
        );
        self.toasts.success(
            if self.is_editing {
                "Produto atualizado!"
            } else {
                "Produto adicionado!"
            },
            format!(
                "{} foi {} ao estoque.",
                current.model,
                if self.is_editing { "atualizado" } else { "adicionado" }
            ),
        );
        true
    }
}
