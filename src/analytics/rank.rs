// src/analytics/rank.rs

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::analytics::aggregate::Aggregate;
use crate::models::reports::PurchaseRecord;

/// Chart length used by the top-customer and top-product tabs.
pub const CHART_TOP_N: usize = 10;

/// Sort options of the customer purchases table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Value,
    Orders,
    Balance,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(SortKey::Value),
            "orders" => Ok(SortKey::Orders),
            "balance" => Ok(SortKey::Balance),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

impl SortKey {
    /// Query value → sort key. Absent means the default (value); an
    /// unrecognised key means "leave the rows in input order".
    pub fn resolve(raw: Option<&str>) -> Option<SortKey> {
        match raw.map(str::trim) {
            None | Some("") => Some(SortKey::default()),
            Some(key) => match key.parse() {
                Ok(key) => Some(key),
                Err(e) => {
                    tracing::debug!("{}; keeping input order", e);
                    None
                }
            },
        }
    }

    fn field(&self, record: &PurchaseRecord) -> Decimal {
        match self {
            SortKey::Value => record.total_purchase_value,
            SortKey::Orders => Decimal::from(record.times_purchased),
            SortKey::Balance => record.outstanding_balance,
        }
    }
}

/// Descending by `key`. Equal keys keep their relative input order; `None`
/// returns the rows untouched.
pub fn sort_purchases(records: &[PurchaseRecord], key: Option<SortKey>) -> Vec<PurchaseRecord> {
    let mut sorted = records.to_vec();
    if let Some(key) = key {
        sorted.sort_by(|a, b| key.field(b).cmp(&key.field(a)));
    }
    sorted
}

/// Descending by value, stable.
pub fn rank_by_value<T: Aggregate + Clone>(records: &[T]) -> Vec<T> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.value().cmp(&a.value()));
    ranked
}

/// The `n` highest-value records in descending order. Shorter inputs are
/// returned whole, without padding.
pub fn top_n<T: Aggregate + Clone>(records: &[T], n: usize) -> Vec<T> {
    let mut ranked = rank_by_value(records);
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(name: &str, value: serde_json::Value, orders: i64, balance: &str) -> PurchaseRecord {
        serde_json::from_value(json!({
            "customer_id": name,
            "customer_name": name,
            "customer_phone": "",
            "times_purchased": orders,
            "total_purchase_value": value,
            "outstanding_balance": balance,
        }))
        .unwrap()
    }

    fn names(records: &[PurchaseRecord]) -> Vec<&str> {
        records.iter().map(|r| r.customer_name.as_str()).collect()
    }

    #[test]
    fn sorts_by_value_with_garbage_as_zero() {
        let records = vec![
            row("Ali", json!("1500.50"), 1, "0"),
            row("Sara", json!("2200"), 1, "0"),
            row("Omar", json!("abc"), 1, "0"),
        ];
        let sorted = sort_purchases(&records, Some(SortKey::Value));
        assert_eq!(names(&sorted), vec!["Sara", "Ali", "Omar"]);
        assert_eq!(sorted[2].total_purchase_value, Decimal::ZERO);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let records = vec![
            row("a", json!(100), 1, "0"),
            row("b", json!(300), 1, "0"),
            row("c", json!(100), 1, "0"),
            row("d", json!(300), 1, "0"),
        ];
        let sorted = sort_purchases(&records, Some(SortKey::Value));
        assert_eq!(names(&sorted), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn sorts_by_orders_and_balance() {
        let records = vec![
            row("a", json!(100), 2, "50"),
            row("b", json!(300), 7, "10"),
            row("c", json!(200), 4, "90"),
        ];
        assert_eq!(names(&sort_purchases(&records, Some(SortKey::Orders))), vec!["b", "c", "a"]);
        assert_eq!(names(&sort_purchases(&records, Some(SortKey::Balance))), vec!["c", "a", "b"]);
        assert_eq!(names(&sort_purchases(&records, None)), vec!["a", "b", "c"]);
    }

    #[test]
    fn resolves_sort_keys() {
        assert_eq!(SortKey::resolve(None), Some(SortKey::Value));
        assert_eq!(SortKey::resolve(Some("")), Some(SortKey::Value));
        assert_eq!(SortKey::resolve(Some("balance")), Some(SortKey::Balance));
        assert_eq!(SortKey::resolve(Some("name")), None);
    }

    #[test]
    fn top_n_takes_highest_values() {
        let records: Vec<PurchaseRecord> = (0..25)
            .map(|i| row(&format!("c{i}"), json!((i * 37) % 25 * 100), 1, "0"))
            .collect();
        let top = top_n(&records, CHART_TOP_N);
        assert_eq!(top.len(), 10);
        let values: Vec<Decimal> = top.iter().map(|r| r.total_purchase_value).collect();
        let expected: Vec<Decimal> = (15..25).rev().map(|v| Decimal::from(v * 100)).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn top_n_of_short_input_returns_everything() {
        let records = vec![
            row("x", json!(5), 1, "0"),
            row("y", json!(50), 1, "0"),
            row("z", json!(20), 1, "0"),
        ];
        assert_eq!(names(&top_n(&records, 10)), vec!["y", "z", "x"]);
        assert!(top_n::<PurchaseRecord>(&[], 10).is_empty());
    }
}
