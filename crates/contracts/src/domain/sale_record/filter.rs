use super::aggregate::SaleRecord;
use crate::shared::dates::parse_iso_date;

/// Completion filter: a sale is completed once the device was received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

/// Active criteria for the sales view. Every field has an explicit
/// "no constraint" value; all active criteria must match (logical AND).
#[derive(Debug, Clone, Default)]
pub struct SalesFilter {
    /// Case-insensitive substring on device and buyer, raw substring on the
    /// IMEI. Empty matches all.
    pub query: String,
    pub status: StatusFilter,
    /// `None` keeps every condition; `Some` is an exact label match.
    pub condition: Option<String>,
    /// Inclusive calendar-date bounds (YYYY-MM-DD). Empty or unparseable
    /// strings leave that side unconstrained.
    pub date_from: String,
    pub date_to: String,
}

impl SalesFilter {
    pub fn matches(&self, sale: &SaleRecord) -> bool {
        let matches_query = self.query.is_empty() || {
            let q = self.query.to_lowercase();
            sale.device.to_lowercase().contains(&q)
                || sale.buyer.to_lowercase().contains(&q)
                || sale.imei.as_str().contains(&self.query)
        };

        let matches_status = match self.status {
            StatusFilter::All => true,
            StatusFilter::Completed => sale.received,
            StatusFilter::Pending => !sale.received,
        };

        let matches_condition = self
            .condition
            .as_deref()
            .map_or(true, |condition| sale.condition == condition);

        let after_start = parse_iso_date(&self.date_from).map_or(true, |from| sale.date >= from);
        let before_end = parse_iso_date(&self.date_to).map_or(true, |to| sale.date <= to);

        matches_query && matches_status && matches_condition && after_start && before_end
    }
}

/// Stable filter: the result is an order-preserving subsequence of `sales`.
pub fn filter_sales(sales: &[SaleRecord], filter: &SalesFilter) -> Vec<SaleRecord> {
    sales
        .iter()
        .filter(|sale| filter.matches(sale))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Imei;
    use chrono::NaiveDate;

    fn sale(device: &str, buyer: &str, imei: &str, date: &str, received: bool) -> SaleRecord {
        SaleRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            device: device.to_string(),
            color: "Preto".to_string(),
            condition: "Usado".to_string(),
            imei: Imei::new(imei),
            supplier: "Cliente".to_string(),
            purchase_value: 1000.0,
            buyer: buyer.to_string(),
            buyer_phone: "+55 (11) 90000-0000".to_string(),
            received,
            observation: String::new(),
            amount_received: 0.0,
            cash_price: 0.0,
            card_price: 0.0,
            delivery_fee: 0.0,
            case_fee: 0.0,
            total_value: 1500.0,
        }
    }

    fn sample() -> Vec<SaleRecord> {
        vec![
            sale("iPhone 15 Pro Max", "Carlos Silva", "355678901234567", "2025-11-10", true),
            sale("Samsung Galaxy S24 Ultra", "Maria Santos", "356789012345678", "2025-11-09", true),
            sale("iPhone 14 128GB", "Ana Oliveira", "357890123456789", "2025-11-08", false),
        ]
    }

    #[test]
    fn neutral_filter_is_identity() {
        let sales = sample();
        let filtered = filter_sales(&sales, &SalesFilter::default());
        assert_eq!(filtered.len(), sales.len());
    }

    #[test]
    fn query_is_case_insensitive_on_device_and_buyer() {
        let filter = SalesFilter {
            query: "iphone".to_string(),
            ..SalesFilter::default()
        };
        assert_eq!(filter_sales(&sample(), &filter).len(), 2);

        let filter = SalesFilter {
            query: "maria".to_string(),
            ..SalesFilter::default()
        };
        assert_eq!(filter_sales(&sample(), &filter).len(), 1);
    }

    #[test]
    fn status_splits_on_reception() {
        let completed = SalesFilter {
            status: StatusFilter::Completed,
            ..SalesFilter::default()
        };
        assert_eq!(filter_sales(&sample(), &completed).len(), 2);

        let pending = SalesFilter {
            status: StatusFilter::Pending,
            ..SalesFilter::default()
        };
        assert_eq!(filter_sales(&sample(), &pending).len(), 1);
    }

    #[test]
    fn condition_is_exact_match() {
        let filter = SalesFilter {
            condition: Some("Usado".to_string()),
            ..SalesFilter::default()
        };
        assert_eq!(filter_sales(&sample(), &filter).len(), 3);

        let filter = SalesFilter {
            condition: Some("Novo".to_string()),
            ..SalesFilter::default()
        };
        assert!(filter_sales(&sample(), &filter).is_empty());
    }

    #[test]
    fn lower_bound_only_excludes_earlier_dates() {
        let filter = SalesFilter {
            date_from: "2025-11-09".to_string(),
            ..SalesFilter::default()
        };
        let filtered = filter_sales(&sample(), &filter);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|s| s.date
            >= NaiveDate::from_ymd_opt(2025, 11, 9).unwrap()));
    }

    #[test]
    fn bounds_are_inclusive() {
        let filter = SalesFilter {
            date_from: "2025-11-09".to_string(),
            date_to: "2025-11-09".to_string(),
            ..SalesFilter::default()
        };
        let filtered = filter_sales(&sample(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].buyer, "Maria Santos");
    }

    #[test]
    fn malformed_bound_is_no_constraint() {
        let filter = SalesFilter {
            date_from: "not-a-date".to_string(),
            date_to: "2025-13-40".to_string(),
            ..SalesFilter::default()
        };
        assert_eq!(filter_sales(&sample(), &filter).len(), 3);
    }

    #[test]
    fn order_is_preserved() {
        let filter = SalesFilter {
            status: StatusFilter::Completed,
            ..SalesFilter::default()
        };
        let filtered = filter_sales(&sample(), &filter);
        assert_eq!(filtered[0].buyer, "Carlos Silva");
        assert_eq!(filtered[1].buyer, "Maria Santos");
    }

    #[test]
    fn filtering_is_idempotent() {
        let filter = SalesFilter {
            query: "iphone".to_string(),
            status: StatusFilter::Completed,
            ..SalesFilter::default()
        };
        let once = filter_sales(&sample(), &filter);
        let twice = filter_sales(&once, &filter);
        assert_eq!(once.len(), twice.len());
    }
}
