//! Tabular report shape handed to the export capability: a title, one
//! header row and pre-formatted body rows.

use crate::domain::sale_record::SaleRecord;
use crate::domain::stock_item::StockItem;
use crate::shared::dates::format_date_br;
use crate::shared::money::format_brl;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub title: String,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

pub fn stock_report(items: &[StockItem]) -> ReportTable {
    ReportTable {
        title: "Relatório de Estoque".to_string(),
        columns: vec![
            "Modelo",
            "Cor",
            "IMEI",
            "Fornecedor",
            "Valor Unitário",
            "Observação",
        ],
        rows: items
            .iter()
            .map(|item| {
                vec![
                    item.model.clone(),
                    item.color.clone(),
                    item.imei.to_string(),
                    item.supplier.clone(),
                    format_brl(item.unit_value),
                    if item.observation.is_empty() {
                        "-".to_string()
                    } else {
                        item.observation.clone()
                    },
                ]
            })
            .collect(),
    }
}

pub fn sales_report(sales: &[SaleRecord]) -> ReportTable {
    ReportTable {
        title: "Relatório de Vendas".to_string(),
        columns: vec![
            "Data",
            "Aparelho",
            "Cor",
            "Condição",
            "Comprador",
            "Valor Compra",
            "Valor Venda",
            "Lucro",
            "Status",
        ],
        rows: sales
            .iter()
            .map(|sale| {
                vec![
                    format_date_br(sale.date),
                    sale.device.clone(),
                    sale.color.clone(),
                    sale.condition.clone(),
                    sale.buyer.clone(),
                    format_brl(sale.purchase_value),
                    if sale.received {
                        format_brl(sale.total_value)
                    } else {
                        "-".to_string()
                    },
                    if sale.received {
                        format_brl(sale.profit())
                    } else {
                        "-".to_string()
                    },
                    sale.status_label().to_string(),
                ]
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Imei;
    use chrono::NaiveDate;

    fn stock_item() -> StockItem {
        StockItem {
            model: "iPhone 13 128GB".to_string(),
            color: "BRANCO".to_string(),
            supplier: "PEDRO".to_string(),
            imei: Imei::new("359451183944323"),
            observation: String::new(),
            unit_value: 2300.0,
            total_stock_value: None,
        }
    }

    fn pending_sale() -> SaleRecord {
        SaleRecord {
            date: NaiveDate::from_ymd_opt(2025, 11, 8).unwrap(),
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
        }
    }

    #[test]
    fn stock_rows_follow_the_column_order() {
        let report = stock_report(&[stock_item()]);
        assert_eq!(report.title, "Relatório de Estoque");
        assert_eq!(report.columns.len(), 6);
        assert_eq!(report.rows.len(), 1);
        let row = &report.rows[0];
        assert_eq!(row.len(), report.columns.len());
        assert_eq!(row[0], "iPhone 13 128GB");
        assert_eq!(row[4], "R$\u{00a0}2.300,00");
        // Empty observation renders the explicit marker
        assert_eq!(row[5], "-");
    }

    #[test]
    fn pending_sales_hide_unrealized_amounts() {
        let report = sales_report(&[pending_sale()]);
        assert_eq!(report.columns.len(), 9);
        let row = &report.rows[0];
        assert_eq!(row[0], "08/11/2025");
        assert_eq!(row[6], "-");
        assert_eq!(row[7], "-");
        assert_eq!(row[8], "Pendente");
    }
}
