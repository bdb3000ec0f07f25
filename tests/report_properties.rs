// tests/report_properties.rs

use ceiling_studio::{
    analytics::{aggregate, format_currency, purchase_totals, sort_purchases, top_n, SortKey},
    models::reports::{ProductRecord, PurchaseRecord},
};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn purchase() -> impl Strategy<Value = PurchaseRecord> {
    (0u32..1000, 0i64..50, 0i64..1_000_000, 0i64..1_000_000, 0i64..500_000).prop_map(
        |(id, orders, cash, total, balance)| PurchaseRecord {
            customer_id: id.to_string(),
            customer_name: format!("Customer {id}"),
            customer_phone: format!("0300{id:07}"),
            times_purchased: orders,
            total_items_purchased: orders * 3,
            cash_purchases: Decimal::from(cash),
            total_purchase_value: Decimal::from(total),
            outstanding_balance: Decimal::from(balance),
            month: "2025-01".to_string(),
            year: 2025,
        },
    )
}

fn product() -> impl Strategy<Value = ProductRecord> {
    (0u32..1000, 0i64..100, 0i64..10_000, 0i64..5_000_000).prop_map(|(id, sold, quantity, revenue)| {
        ProductRecord {
            product_id: id.to_string(),
            product_name: format!("Product {id}"),
            category_name: "Boards".to_string(),
            times_sold: sold,
            total_quantity: quantity,
            total_revenue: Decimal::from(revenue),
        }
    })
}

proptest! {
    #[test]
    fn totals_ignore_row_order(mut rows in prop::collection::vec(product(), 0..30)) {
        let before = aggregate(&rows);
        rows.reverse();
        prop_assert_eq!(before, aggregate(&rows));
    }

    #[test]
    fn credit_is_purchases_minus_cash(rows in prop::collection::vec(purchase(), 0..30)) {
        let totals = purchase_totals(&rows);
        prop_assert_eq!(totals.credit, totals.purchases - totals.cash);
    }

    #[test]
    fn sorting_is_descending_and_keeps_every_row(
        rows in prop::collection::vec(purchase(), 0..30),
        key in prop_oneof![Just(SortKey::Value), Just(SortKey::Orders), Just(SortKey::Balance)],
    ) {
        let sorted = sort_purchases(&rows, Some(key));
        prop_assert_eq!(sorted.len(), rows.len());

        let field = |r: &PurchaseRecord| match key {
            SortKey::Value => r.total_purchase_value,
            SortKey::Orders => Decimal::from(r.times_purchased),
            SortKey::Balance => r.outstanding_balance,
        };
        for pair in sorted.windows(2) {
            prop_assert!(field(&pair[0]) >= field(&pair[1]));
        }
    }

    #[test]
    fn no_sort_key_keeps_input_order(rows in prop::collection::vec(purchase(), 0..30)) {
        prop_assert_eq!(sort_purchases(&rows, None), rows);
    }

    #[test]
    fn top_n_is_a_bounded_descending_prefix(
        rows in prop::collection::vec(product(), 0..40),
        n in 0usize..15,
    ) {
        let top = top_n(&rows, n);
        prop_assert_eq!(top.len(), rows.len().min(n));
        for pair in top.windows(2) {
            prop_assert!(pair[0].total_revenue >= pair[1].total_revenue);
        }
        // Nothing left out beats the last entry kept.
        if let Some(last) = top.last() {
            let kept = top.len();
            let beaten = rows.iter().filter(|p| p.total_revenue > last.total_revenue).count();
            prop_assert!(beaten < kept);
        }
    }

    #[test]
    fn currency_always_carries_the_prefix(value in -10_000_000i64..10_000_000) {
        let text = format_currency(&Decimal::from(value));
        prop_assert!(text.starts_with("Rs ") || text.starts_with("-Rs "));
        prop_assert!(!text.contains('.'));
    }
}
