//! Aggregate calculator for the dashboard overview cards.

use super::sale_record::SaleRecord;
use super::stock_item::StockItem;

/// Overview numbers for the stock collection.
#[derive(Debug, Clone, PartialEq)]
pub struct StockSummary {
    pub count: usize,
    /// Sum of unit values. The informational per-row total is never summed.
    pub total_value: f64,
}

pub fn summarize_stock(items: &[StockItem]) -> StockSummary {
    StockSummary {
        count: items.len(),
        total_value: items.iter().map(|item| item.unit_value).sum(),
    }
}

/// Overview numbers for the sales collection. Revenue, cost and profit count
/// received sales only; a pending sale contributes nothing regardless of its
/// stored totals.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    pub completed_count: usize,
    pub pending_count: usize,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_profit: f64,
    /// `None` when there are no completed sales to divide by.
    pub profit_margin_pct: Option<f64>,
}

impl SalesSummary {
    pub fn profit_positive(&self) -> bool {
        self.total_profit > 0.0
    }
}

pub fn summarize_sales(sales: &[SaleRecord]) -> SalesSummary {
    let completed_count = sales.iter().filter(|sale| sale.received).count();
    let pending_count = sales.len() - completed_count;

    let total_revenue: f64 = sales
        .iter()
        .filter(|sale| sale.received)
        .map(|sale| sale.total_value)
        .sum();
    let total_cost: f64 = sales
        .iter()
        .filter(|sale| sale.received)
        .map(|sale| sale.purchase_value)
        .sum();
    let total_profit = total_revenue - total_cost;

    let profit_margin_pct = if total_cost > 0.0 {
        Some(total_profit / total_cost * 100.0)
    } else {
        None
    };

    SalesSummary {
        completed_count,
        pending_count,
        total_revenue,
        total_cost,
        total_profit,
        profit_margin_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Imei;
    use chrono::NaiveDate;

    fn stock_item(imei: &str, unit_value: f64) -> StockItem {
        StockItem {
            model: "iPhone 13 128GB".to_string(),
            color: "AZUL".to_string(),
            supplier: "PEDRO".to_string(),
            imei: Imei::new(imei),
            observation: String::new(),
            unit_value,
            total_stock_value: Some(550_440.0),
        }
    }

    fn sale(purchase_value: f64, total_value: f64, received: bool) -> SaleRecord {
        SaleRecord {
            date: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap(),
            device: "iPhone 14 128GB".to_string(),
            color: "Azul".to_string(),
            condition: "Usado".to_string(),
            imei: Imei::new("357890123456789"),
            supplier: "Pedro".to_string(),
            purchase_value,
            buyer: "Ana Oliveira".to_string(),
            buyer_phone: "+55 (11) 99876-5432".to_string(),
            received,
            observation: String::new(),
            amount_received: 0.0,
            cash_price: 0.0,
            card_price: 0.0,
            delivery_fee: 0.0,
            case_fee: 0.0,
            total_value,
        }
    }

    #[test]
    fn stock_summary_sums_unit_values_only() {
        let items = vec![stock_item("A", 100.0), stock_item("B", 200.0)];
        let summary = summarize_stock(&items);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_value, 300.0);
    }

    #[test]
    fn empty_stock_is_fine() {
        let summary = summarize_stock(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_value, 0.0);
    }

    #[test]
    fn sales_summary_counts_completed_only() {
        let sales = vec![sale(100.0, 150.0, true), sale(50.0, 80.0, false)];
        let summary = summarize_sales(&sales);
        assert_eq!(summary.completed_count, 1);
        assert_eq!(summary.pending_count, 1);
        assert_eq!(summary.total_revenue, 150.0);
        assert_eq!(summary.total_cost, 100.0);
        assert_eq!(summary.total_profit, 50.0);
        assert_eq!(summary.profit_margin_pct, Some(50.0));
        assert!(summary.profit_positive());
    }

    #[test]
    fn pending_sale_contributes_nothing() {
        let sales = vec![sale(50.0, 80.0, false)];
        let summary = summarize_sales(&sales);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.total_cost, 0.0);
    }

    #[test]
    fn zero_cost_margin_is_defined_and_finite() {
        let summary = summarize_sales(&[sale(50.0, 80.0, false)]);
        assert_eq!(summary.profit_margin_pct, None);

        let summary = summarize_sales(&[]);
        assert_eq!(summary.profit_margin_pct, None);
    }

    #[test]
    fn profit_can_be_negative() {
        let summary = summarize_sales(&[sale(200.0, 150.0, true)]);
        assert_eq!(summary.total_profit, -50.0);
        assert!(!summary.profit_positive());
        assert_eq!(summary.profit_margin_pct, Some(-25.0));
    }
}
