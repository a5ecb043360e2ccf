use super::aggregate::StockItem;
use std::collections::HashSet;

/// Presence filter over the free-text observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObservationFilter {
    #[default]
    All,
    With,
    Without,
}

/// Active criteria for the stock view. Every field has an explicit
/// "no constraint" value; all active criteria must match (logical AND).
#[derive(Debug, Clone, Default)]
pub struct StockFilter {
    /// Case-insensitive substring on model and color, raw substring on the
    /// IMEI (identifiers are numeric, no case folding). Empty matches all.
    pub query: String,
    /// `None` keeps every supplier; `Some` is an exact match.
    pub supplier: Option<String>,
    pub observation: ObservationFilter,
}

impl StockFilter {
    pub fn matches(&self, item: &StockItem) -> bool {
        let matches_query = self.query.is_empty() || {
            let q = self.query.to_lowercase();
            item.model.to_lowercase().contains(&q)
                || item.color.to_lowercase().contains(&q)
                || item.imei.as_str().contains(&self.query)
        };

        let matches_supplier = self
            .supplier
            .as_deref()
            .map_or(true, |supplier| item.supplier == supplier);

        let matches_observation = match self.observation {
            ObservationFilter::All => true,
            ObservationFilter::With => !item.observation.is_empty(),
            ObservationFilter::Without => item.observation.is_empty(),
        };

        matches_query && matches_supplier && matches_observation
    }
}

/// Stable filter: the result is an order-preserving subsequence of `items`.
pub fn filter_stock(items: &[StockItem], filter: &StockFilter) -> Vec<StockItem> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Distinct suppliers in first-appearance order, for the filter dropdown.
pub fn unique_suppliers(items: &[StockItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(item.supplier.clone()))
        .map(|item| item.supplier.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Imei;

    fn item(model: &str, color: &str, supplier: &str, imei: &str, observation: &str) -> StockItem {
        StockItem {
            model: model.to_string(),
            color: color.to_string(),
            supplier: supplier.to_string(),
            imei: Imei::new(imei),
            observation: observation.to_string(),
            unit_value: 2000.0,
            total_stock_value: None,
        }
    }

    fn sample() -> Vec<StockItem> {
        vec![
            item("iPhone 13 128GB", "BRANCO", "PEDRO", "359451183944323", ""),
            item(
                "iPhone 14 Pro 256GB",
                "ROXO",
                "CLIENTE",
                "357712769705269",
                "TELA QUEBRADA",
            ),
            item("iPhone 12 Pro 128GB", "GOLD/DOURADO", "CLIENTE", "353781188276016", ""),
        ]
    }

    #[test]
    fn neutral_filter_is_identity() {
        let items = sample();
        let filtered = filter_stock(&items, &StockFilter::default());
        assert_eq!(filtered.len(), items.len());
        let imeis: Vec<_> = filtered.iter().map(|i| i.imei.as_str().to_string()).collect();
        let original: Vec<_> = items.iter().map(|i| i.imei.as_str().to_string()).collect();
        assert_eq!(imeis, original);
    }

    #[test]
    fn query_is_case_insensitive_on_model() {
        let filter = StockFilter {
            query: "iphone 14".to_string(),
            ..StockFilter::default()
        };
        let filtered = filter_stock(&sample(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].model, "iPhone 14 Pro 256GB");
    }

    #[test]
    fn query_matches_imei_substring() {
        let filter = StockFilter {
            query: "353781".to_string(),
            ..StockFilter::default()
        };
        assert_eq!(filter_stock(&sample(), &filter).len(), 1);
    }

    #[test]
    fn supplier_is_exact_match() {
        let filter = StockFilter {
            supplier: Some("CLIENTE".to_string()),
            ..StockFilter::default()
        };
        assert_eq!(filter_stock(&sample(), &filter).len(), 2);

        let filter = StockFilter {
            supplier: Some("CLIEN".to_string()),
            ..StockFilter::default()
        };
        assert!(filter_stock(&sample(), &filter).is_empty());
    }

    #[test]
    fn observation_presence() {
        let with = StockFilter {
            observation: ObservationFilter::With,
            ..StockFilter::default()
        };
        assert_eq!(filter_stock(&sample(), &with).len(), 1);

        let without = StockFilter {
            observation: ObservationFilter::Without,
            ..StockFilter::default()
        };
        assert_eq!(filter_stock(&sample(), &without).len(), 2);
    }

    #[test]
    fn criteria_combine_with_and() {
        let filter = StockFilter {
            query: "iphone".to_string(),
            supplier: Some("CLIENTE".to_string()),
            observation: ObservationFilter::Without,
        };
        let filtered = filter_stock(&sample(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].model, "iPhone 12 Pro 128GB");
    }

    #[test]
    fn filtering_is_idempotent() {
        let filter = StockFilter {
            supplier: Some("CLIENTE".to_string()),
            ..StockFilter::default()
        };
        let once = filter_stock(&sample(), &filter);
        let twice = filter_stock(&once, &filter);
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn suppliers_are_deduplicated_in_order() {
        assert_eq!(
            unique_suppliers(&sample()),
            vec!["PEDRO".to_string(), "CLIENTE".to_string()]
        );
    }
}
