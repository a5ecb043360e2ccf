use crate::domain::common::{Entity, Imei};
use crate::shared::dates::parse_iso_date;
use serde::{Deserialize, Serialize};

/// Venda registrada — either completed or still waiting on the supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    /// Sale date (YYYY-MM-DD on the wire)
    #[serde(with = "serde_date")]
    pub date: chrono::NaiveDate,
    pub device: String,
    pub color: String,
    /// Open set; unknown labels still render, with the default badge style
    pub condition: String,
    pub imei: Imei,
    pub supplier: String,
    pub purchase_value: f64,
    pub buyer: String,
    pub buyer_phone: String,
    /// Whether the device has already been received from the supplier
    pub received: bool,
    pub observation: String,
    pub amount_received: f64,
    pub cash_price: f64,
    pub card_price: f64,
    pub delivery_fee: f64,
    pub case_fee: f64,
    pub total_value: f64,
}

impl SaleRecord {
    /// Profit is only realized once the device has been received; until then
    /// the sale contributes nothing, whatever the stored total says.
    pub fn profit(&self) -> f64 {
        if !self.received {
            return 0.0;
        }
        self.total_value - self.purchase_value
    }

    pub fn status_label(&self) -> &'static str {
        if self.received {
            "Concluído"
        } else {
            "Pendente"
        }
    }

    pub fn from_dto(dto: &SaleRecordDto) -> Result<Self, String> {
        let date = parse_iso_date(&dto.date).ok_or_else(|| "Data inválida".to_string())?;
        Ok(Self {
            date,
            device: dto.device.clone(),
            color: dto.color.clone(),
            condition: dto.condition.clone(),
            imei: Imei::new(dto.imei.clone()),
            supplier: dto.supplier.clone(),
            purchase_value: dto.purchase_value,
            buyer: dto.buyer.clone(),
            buyer_phone: dto.buyer_phone.clone(),
            received: dto.received,
            observation: dto.observation.clone(),
            amount_received: dto.amount_received,
            cash_price: dto.cash_price,
            card_price: dto.card_price,
            delivery_fee: dto.delivery_fee,
            case_fee: dto.case_fee,
            total_value: dto.total_value,
        })
    }

    /// Apply an edit. The IMEI identifies the record and never changes.
    pub fn update(&mut self, dto: &SaleRecordDto) -> Result<(), String> {
        let date = parse_iso_date(&dto.date).ok_or_else(|| "Data inválida".to_string())?;
        self.date = date;
        self.device = dto.device.clone();
        self.color = dto.color.clone();
        self.condition = dto.condition.clone();
        self.supplier = dto.supplier.clone();
        self.purchase_value = dto.purchase_value;
        self.buyer = dto.buyer.clone();
        self.buyer_phone = dto.buyer_phone.clone();
        self.received = dto.received;
        self.observation = dto.observation.clone();
        self.amount_received = dto.amount_received;
        self.cash_price = dto.cash_price;
        self.card_price = dto.card_price;
        self.delivery_fee = dto.delivery_fee;
        self.case_fee = dto.case_fee;
        self.total_value = dto.total_value;
        Ok(())
    }
}

impl Entity for SaleRecord {
    fn imei(&self) -> &Imei {
        &self.imei
    }
    fn element_name() -> &'static str {
        "Venda"
    }
    fn list_name() -> &'static str {
        "Vendas"
    }
}

// =============================================================================
// DTO
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecordDto {
    /// YYYY-MM-DD, as produced by a date input
    pub date: String,
    pub device: String,
    pub color: String,
    pub condition: String,
    pub imei: String,
    pub supplier: String,
    pub purchase_value: f64,
    pub buyer: String,
    pub buyer_phone: String,
    pub received: bool,
    pub observation: String,
    pub amount_received: f64,
    pub cash_price: f64,
    pub card_price: f64,
    pub delivery_fee: f64,
    pub case_fee: f64,
    pub total_value: f64,
}

impl SaleRecordDto {
    pub fn from_record(record: &SaleRecord) -> Self {
        Self {
            date: record.date.format("%Y-%m-%d").to_string(),
            device: record.device.clone(),
            color: record.color.clone(),
            condition: record.condition.clone(),
            imei: record.imei.to_string(),
            supplier: record.supplier.clone(),
            purchase_value: record.purchase_value,
            buyer: record.buyer.clone(),
            buyer_phone: record.buyer_phone.clone(),
            received: record.received,
            observation: record.observation.clone(),
            amount_received: record.amount_received,
            cash_price: record.cash_price,
            card_price: record.card_price,
            delivery_fee: record.delivery_fee,
            case_fee: record.case_fee,
            total_value: record.total_value,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.date.trim().is_empty() {
            return Err("Data é obrigatória".into());
        }
        if parse_iso_date(&self.date).is_none() {
            return Err("Data inválida".into());
        }
        if self.device.trim().is_empty() {
            return Err("Aparelho é obrigatório".into());
        }
        if self.device.len() > 100 {
            return Err("Aparelho deve ter no máximo 100 caracteres".into());
        }
        if self.color.trim().is_empty() {
            return Err("Cor é obrigatória".into());
        }
        if self.color.len() > 50 {
            return Err("Cor deve ter no máximo 50 caracteres".into());
        }
        if self.condition.trim().is_empty() {
            return Err("Condição é obrigatória".into());
        }
        if self.condition.len() > 50 {
            return Err("Condição deve ter no máximo 50 caracteres".into());
        }
        if self.imei.trim().is_empty() {
            return Err("IMEI é obrigatório".into());
        }
        if self.imei.len() > 50 {
            return Err("IMEI deve ter no máximo 50 caracteres".into());
        }
        if self.supplier.trim().is_empty() {
            return Err("Fornecedor é obrigatório".into());
        }
        if self.supplier.len() > 100 {
            return Err("Fornecedor deve ter no máximo 100 caracteres".into());
        }
        if self.buyer.trim().is_empty() {
            return Err("Comprador é obrigatório".into());
        }
        if self.buyer.len() > 100 {
            return Err("Comprador deve ter no máximo 100 caracteres".into());
        }
        if self.buyer_phone.trim().is_empty() {
            return Err("Telefone é obrigatório".into());
        }
        if self.buyer_phone.len() > 20 {
            return Err("Telefone deve ter no máximo 20 caracteres".into());
        }
        if self.observation.len() > 500 {
            return Err("Observação deve ter no máximo 500 caracteres".into());
        }
        let amounts = [
            self.purchase_value,
            self.amount_received,
            self.cash_price,
            self.card_price,
            self.delivery_fee,
            self.case_fee,
            self.total_value,
        ];
        if amounts.iter().any(|amount| *amount < 0.0) {
            return Err("Valores não podem ser negativos".into());
        }
        Ok(())
    }
}

// Local serde helper for NaiveDate as YYYY-MM-DD
mod serde_date {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date.format(FORMAT).to_string();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(received: bool) -> SaleRecord {
        SaleRecord {
            date: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap(),
            device: "iPhone 15 Pro Max".to_string(),
            color: "Titânio Natural".to_string(),
            condition: "Novo".to_string(),
            imei: Imei::new("355678901234567"),
            supplier: "Apple Store".to_string(),
            purchase_value: 8500.0,
            buyer: "Carlos Silva".to_string(),
            buyer_phone: "+55 (11) 98765-4321".to_string(),
            received,
            observation: String::new(),
            amount_received: 8500.0,
            cash_price: 8200.0,
            card_price: 8800.0,
            delivery_fee: 25.0,
            case_fee: 150.0,
            total_value: 8375.0,
        }
    }

    #[test]
    fn profit_requires_reception() {
        assert_eq!(record(true).profit(), -125.0);
        assert_eq!(record(false).profit(), 0.0);
    }

    #[test]
    fn profit_can_be_negative() {
        let mut sale = record(true);
        sale.purchase_value = 9000.0;
        assert!(sale.profit() < 0.0);
    }

    #[test]
    fn status_labels() {
        assert_eq!(record(true).status_label(), "Concluído");
        assert_eq!(record(false).status_label(), "Pendente");
    }

    #[test]
    fn dto_round_trip_keeps_date() {
        let sale = record(true);
        let dto = SaleRecordDto::from_record(&sale);
        assert_eq!(dto.date, "2025-11-10");
        let rebuilt = SaleRecord::from_dto(&dto).unwrap();
        assert_eq!(rebuilt.date, sale.date);
    }

    #[test]
    fn from_dto_rejects_bad_date() {
        let mut dto = SaleRecordDto::from_record(&record(true));
        dto.date = "10/11/2025".to_string();
        assert_eq!(SaleRecord::from_dto(&dto).unwrap_err(), "Data inválida");
    }

    #[test]
    fn validate_checks_required_fields_and_amounts() {
        let mut dto = SaleRecordDto::from_record(&record(true));
        assert!(dto.validate().is_ok());

        dto.buyer = String::new();
        assert_eq!(dto.validate(), Err("Comprador é obrigatório".to_string()));

        let mut dto = SaleRecordDto::from_record(&record(true));
        dto.delivery_fee = -5.0;
        assert_eq!(
            dto.validate(),
            Err("Valores não podem ser negativos".to_string())
        );
    }

    #[test]
    fn serializes_date_as_iso() {
        let json = serde_json::to_string(&record(true)).unwrap();
        assert!(json.contains("\"date\":\"2025-11-10\""));
    }
}
