//! In-memory sample collections. There is no persistence layer: these are
//! the collections every page reads, supplied fresh on each call.

use chrono::NaiveDate;
use contracts::domain::common::Imei;
use contracts::domain::sale_record::SaleRecord;
use contracts::domain::stock_item::StockItem;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Invalid sample date")
}

pub fn sample_sale_records() -> Vec<SaleRecord> {
    vec![
        SaleRecord {
            date: date(2025, 11, 10),
            device: "iPhone 15 Pro Max".to_string(),
            color: "Titânio Natural".to_string(),
            condition: "Novo".to_string(),
            imei: Imei::new("355678901234567"),
            supplier: "Apple Store".to_string(),
            purchase_value: 8500.0,
            buyer: "Carlos Silva".to_string(),
            buyer_phone: "+55 (11) 98765-4321".to_string(),
            received: true,
            observation: "Caixa original lacrada".to_string(),
            amount_received: 8500.0,
            cash_price: 8200.0,
            card_price: 8800.0,
            delivery_fee: 25.0,
            case_fee: 150.0,
            total_value: 8375.0,
        },
        SaleRecord {
            date: date(2025, 11, 9),
            device: "Samsung Galaxy S24 Ultra".to_string(),
            color: "Preto".to_string(),
            condition: "Seminovo".to_string(),
            imei: Imei::new("356789012345678"),
            supplier: "Cliente".to_string(),
            purchase_value: 3200.0,
            buyer: "Maria Santos".to_string(),
            buyer_phone: "+55 (11) 91234-5678".to_string(),
            received: true,
            observation: "Pequeno risco na tela, funciona perfeitamente".to_string(),
            amount_received: 3000.0,
            cash_price: 3500.0,
            card_price: 3800.0,
            delivery_fee: 15.0,
            case_fee: 120.0,
            total_value: 3635.0,
        },
        SaleRecord {
            date: date(2025, 11, 8),
            device: "iPhone 14 128GB".to_string(),
            color: "Azul".to_string(),
            condition: "Usado".to_string(),
            imei: Imei::new("357890123456789"),
            supplier: "Pedro".to_string(),
            purchase_value: 2500.0,
            buyer: "Ana Oliveira".to_string(),
            buyer_phone: "+55 (11) 99876-5432".to_string(),
            received: false,
            observation: "Aguardando entrega do fornecedor".to_string(),
            amount_received: 0.0,
            cash_price: 2800.0,
            card_price: 3100.0,
            delivery_fee: 20.0,
            case_fee: 100.0,
            total_value: 0.0,
        },
        SaleRecord {
            date: date(2025, 11, 7),
            device: "iPhone 13 Pro 256GB".to_string(),
            color: "Verde Alpino".to_string(),
            condition: "Recondicionado".to_string(),
            imei: Imei::new("358901234567890"),
            supplier: "Loja XYZ".to_string(),
            purchase_value: 3800.0,
            buyer: "João Pereira".to_string(),
            buyer_phone: "+55 (11) 94567-8901".to_string(),
            received: true,
            observation: "Bateria 100%, com nota fiscal".to_string(),
            amount_received: 3800.0,
            cash_price: 4200.0,
            card_price: 4500.0,
            delivery_fee: 30.0,
            case_fee: 180.0,
            total_value: 4410.0,
        },
        SaleRecord {
            date: date(2025, 11, 6),
            device: "iPhone 12 64GB".to_string(),
            color: "Preto".to_string(),
            condition: "Tela quebrada".to_string(),
            imei: Imei::new("359012345678901"),
            supplier: "Cliente".to_string(),
            purchase_value: 800.0,
            buyer: "Roberto Lima".to_string(),
            buyer_phone: "+55 (11) 92345-6789".to_string(),
            received: true,
            observation: "Tela trincada, mas funciona normalmente".to_string(),
            amount_received: 800.0,
            cash_price: 1500.0,
            card_price: 1800.0,
            delivery_fee: 10.0,
            case_fee: 80.0,
            total_value: 1590.0,
        },
    ]
}

pub fn sample_stock_items() -> Vec<StockItem> {
    vec![
        StockItem {
            model: "iPhone 13 128GB".to_string(),
            color: "BRANCO".to_string(),
            supplier: "PEDRO".to_string(),
            imei: Imei::new("359451183944323"),
            observation: String::new(),
            unit_value: 2300.0,
            total_stock_value: None,
        },
        StockItem {
            model: "iPhone 14 Pro 256GB".to_string(),
            color: "ROXO".to_string(),
            supplier: "CLIENTE".to_string(),
            imei: Imei::new("357712769705269"),
            observation: "TELA QUEBRADA".to_string(),
            unit_value: 3000.0,
            total_stock_value: None,
        },
        StockItem {
            model: "iPhone 12 Pro 128GB".to_string(),
            color: "GOLD/DOURADO".to_string(),
            supplier: "CLIENTE".to_string(),
            imei: Imei::new("353781188276016"),
            observation: String::new(),
            unit_value: 2000.0,
            total_stock_value: Some(550_440.0),
        },
        StockItem {
            model: "iPhone 13 128GB".to_string(),
            color: "AZUL".to_string(),
            supplier: "PEDRO".to_string(),
            imei: Imei::new("350183986872570"),
            observation: String::new(),
            unit_value: 2300.0,
            total_stock_value: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn imeis_are_unique_within_each_collection() {
        let stock: HashSet<String> = sample_stock_items()
            .iter()
            .map(|item| item.imei.to_string())
            .collect();
        assert_eq!(stock.len(), sample_stock_items().len());

        let sales: HashSet<String> = sample_sale_records()
            .iter()
            .map(|sale| sale.imei.to_string())
            .collect();
        assert_eq!(sales.len(), sample_sale_records().len());
    }

    #[test]
    fn pending_sample_sale_has_no_realized_total() {
        let sales = sample_sale_records();
        let pending: Vec<_> = sales.iter().filter(|sale| !sale.received).collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].profit(), 0.0);
    }
}
