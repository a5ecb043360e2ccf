use crate::layout::toast::ToastService;
use crate::shared::data::sample_sale_records;
use chrono::Utc;
use contracts::domain::common::{find_by_imei, Entity};
use contracts::domain::sale_record::{SaleRecord, SaleRecordDto};
use contracts::shared::dates::to_iso;
use leptos::prelude::*;

/// ViewModel for the sale add/edit form.
///
/// There is no persistence layer: a successful save validates the Dto, logs
/// the payload and notifies, leaving the stored collection untouched.
#[derive(Clone, Copy)]
pub struct SaleFormViewModel {
    pub form: RwSignal<SaleRecordDto>,
    pub error: RwSignal<Option<String>>,
    pub is_editing: bool,
    toasts: ToastService,
}

impl SaleFormViewModel {
    pub fn new(imei: Option<String>, toasts: ToastService) -> Self {
        let existing = imei.as_deref().and_then(|imei| {
            find_by_imei(&sample_sale_records(), imei).map(SaleRecordDto::from_record)
        });
        let is_editing = existing.is_some();

        let form = existing.unwrap_or_else(|| SaleRecordDto {
            // New sales default to today
            date: to_iso(Utc::now().date_naive()),
            ..SaleRecordDto::default()
        });

        Self {
            form: RwSignal::new(form),
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
            SaleRecord::element_name(),
            serde_json::to_string(&current).unwrap_or_default()
        );
        self.toasts.success(
            if self.is_editing {
                "Venda atualizada!"
            } else {
                "Venda registrada!"
            },
            format!(
                "Venda de {} foi {}.",
                current.device,
                if self.is_editing { "atualizada" } else { "registrada" }
            ),
        );
        true
    }
}
