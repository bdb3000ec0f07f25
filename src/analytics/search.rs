// src/analytics/search.rs

use crate::models::reports::PurchaseRecord;

/// Rows whose name contains `query` (ignoring case) or whose phone contains it
/// verbatim. An empty query keeps every row, in order.
pub fn search(records: &[PurchaseRecord], query: &str) -> Vec<PurchaseRecord> {
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.customer_name.to_lowercase().contains(&needle) || r.customer_phone.contains(query))
        .cloned()
        .collect()
}
