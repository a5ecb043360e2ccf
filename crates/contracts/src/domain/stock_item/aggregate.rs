use crate::domain::common::{Entity, Imei};
use serde::{Deserialize, Serialize};

/// Aparelho em estoque — a device available for sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub model: String,
    pub color: String,
    pub supplier: String,
    pub imei: Imei,
    /// Free-text note; empty string means "no observation"
    pub observation: String,
    /// Unit value in BRL
    pub unit_value: f64,
    /// Informational total carried by some rows; never part of the stock sum
    pub total_stock_value: Option<f64>,
}

impl StockItem {
    pub fn from_dto(dto: &StockItemDto) -> Self {
        Self {
            model: dto.model.clone(),
            color: dto.color.clone(),
            supplier: dto.supplier.clone(),
            imei: Imei::new(dto.imei.clone()),
            observation: dto.observation.clone(),
            unit_value: dto.unit_value,
            total_stock_value: None,
        }
    }

    /// Apply an edit. The IMEI identifies the record and never changes.
    pub fn update(&mut self, dto: &StockItemDto) {
        self.model = dto.model.clone();
        self.color = dto.color.clone();
        self.supplier = dto.supplier.clone();
        self.observation = dto.observation.clone();
        self.unit_value = dto.unit_value;
    }
}

impl Entity for StockItem {
    fn imei(&self) -> &Imei {
        &self.imei
    }
    fn element_name() -> &'static str {
        "Produto"
    }
    fn list_name() -> &'static str {
        "Estoque"
    }
}

// =============================================================================
// DTO
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItemDto {
    pub model: String,
    pub color: String,
    pub supplier: String,
    pub imei: String,
    pub observation: String,
    pub unit_value: f64,
}

impl StockItemDto {
    pub fn from_item(item: &StockItem) -> Self {
        Self {
            model: item.model.clone(),
            color: item.color.clone(),
            supplier: item.supplier.clone(),
            imei: item.imei.to_string(),
            observation: item.observation.clone(),
            unit_value: item.unit_value,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Modelo é obrigatório".into());
        }
        if self.model.len() > 100 {
            return Err("Modelo deve ter no máximo 100 caracteres".into());
        }
        if self.color.trim().is_empty() {
            return Err("Cor é obrigatória".into());
        }
        if self.color.len() > 50 {
            return Err("Cor deve ter no máximo 50 caracteres".into());
        }
        if self.supplier.trim().is_empty() {
            return Err("Fornecedor é obrigatório".into());
        }
        if self.supplier.len() > 100 {
            return Err("Fornecedor deve ter no máximo 100 caracteres".into());
        }
        if self.imei.trim().is_empty() {
            return Err("IMEI é obrigatório".into());
        }
        if self.imei.len() > 50 {
            return Err("IMEI deve ter no máximo 50 caracteres".into());
        }
        if self.observation.len() > 500 {
            return Err("Observação deve ter no máximo 500 caracteres".into());
        }
        if self.unit_value < 0.0 {
            return Err("Valor deve ser positivo".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::find_by_imei;

    fn item(imei: &str) -> StockItem {
        StockItem {
            model: "iPhone 13 128GB".to_string(),
            color: "BRANCO".to_string(),
            supplier: "PEDRO".to_string(),
            imei: Imei::new(imei),
            observation: String::new(),
            unit_value: 2300.0,
            total_stock_value: None,
        }
    }

    #[test]
    fn valid_dto_passes() {
        let dto = StockItemDto::from_item(&item("359451183944323"));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn missing_fields_are_rejected() {
        let mut dto = StockItemDto::from_item(&item("359451183944323"));
        dto.model = "  ".to_string();
        assert_eq!(dto.validate(), Err("Modelo é obrigatório".to_string()));

        let mut dto = StockItemDto::from_item(&item("359451183944323"));
        dto.unit_value = -1.0;
        assert_eq!(dto.validate(), Err("Valor deve ser positivo".to_string()));
    }

    #[test]
    fn update_keeps_imei() {
        let mut stored = item("359451183944323");
        let mut dto = StockItemDto::from_item(&stored);
        dto.imei = "000000000000000".to_string();
        dto.model = "iPhone 14 Pro 256GB".to_string();
        stored.update(&dto);
        assert_eq!(stored.imei.as_str(), "359451183944323");
        assert_eq!(stored.model, "iPhone 14 Pro 256GB");
    }

    #[test]
    fn lookup_by_imei() {
        let items = vec![item("111"), item("222")];
        assert!(find_by_imei(&items, "222").is_some());
        assert!(find_by_imei(&items, "333").is_none());
    }
}
