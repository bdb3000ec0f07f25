// src/analytics/aggregate.rs

use rust_decimal::Decimal;

use crate::models::reports::{CustomerRankRecord, ProductRecord, PurchaseRecord};

/// The three figures a record contributes to a period total.
pub trait Aggregate {
    /// Money figure the record is ranked by.
    fn value(&self) -> Decimal;
    /// Orders (customers) or quantity (products).
    fn count(&self) -> i64;
    fn secondary(&self) -> Decimal;
}

impl Aggregate for PurchaseRecord {
    fn value(&self) -> Decimal {
        self.total_purchase_value
    }

    fn count(&self) -> i64 {
        self.times_purchased
    }

    fn secondary(&self) -> Decimal {
        self.outstanding_balance
    }
}

impl Aggregate for ProductRecord {
    fn value(&self) -> Decimal {
        self.total_revenue
    }

    fn count(&self) -> i64 {
        self.total_quantity
    }

    fn secondary(&self) -> Decimal {
        Decimal::from(self.times_sold)
    }
}

impl Aggregate for CustomerRankRecord {
    fn value(&self) -> Decimal {
        self.total_purchase_value
    }

    fn count(&self) -> i64 {
        self.times_purchased
    }

    fn secondary(&self) -> Decimal {
        Decimal::ZERO
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub total_value: Decimal,
    pub total_count: i64,
    pub total_secondary: Decimal,
}

/// Single left fold. An empty input gives all-zero totals.
pub fn aggregate<'a, T, I>(records: I) -> Totals
where
    T: Aggregate + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records.into_iter().fold(Totals::default(), |acc, record| Totals {
        total_value: acc.total_value.saturating_add(record.value()),
        total_count: acc.total_count.saturating_add(record.count()),
        total_secondary: acc.total_secondary.saturating_add(record.secondary()),
    })
}

/// Card totals of the customer purchases tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurchaseTotals {
    pub purchases: Decimal,
    pub cash: Decimal,
    /// `purchases - cash`, passed through even when negative.
    pub credit: Decimal,
    pub outstanding: Decimal,
}

pub fn purchase_totals<'a, I>(records: I) -> PurchaseTotals
where
    I: IntoIterator<Item = &'a PurchaseRecord>,
{
    let (purchases, cash, outstanding) = records.into_iter().fold(
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
        |(purchases, cash, outstanding), r| {
            (
                purchases.saturating_add(r.total_purchase_value),
                cash.saturating_add(r.cash_purchases),
                outstanding.saturating_add(r.outstanding_balance),
            )
        },
    );

    let credit = purchases.saturating_sub(cash);
    if credit.is_sign_negative() && !credit.is_zero() {
        tracing::warn!(
            %purchases,
            %cash,
            "Cash purchases exceed total purchases; credit sales are negative"
        );
    }

    PurchaseTotals {
        purchases,
        cash,
        credit,
        outstanding,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn purchase(total: &str, cash: &str, outstanding: &str, orders: i64) -> PurchaseRecord {
        PurchaseRecord {
            customer_id: "1".into(),
            customer_name: "Ali".into(),
            customer_phone: "0300".into(),
            times_purchased: orders,
            total_items_purchased: 0,
            cash_purchases: dec(cash),
            total_purchase_value: dec(total),
            outstanding_balance: dec(outstanding),
            month: "1".into(),
            year: 2025,
        }
    }

    #[test]
    fn empty_input_is_all_zero() {
        let records: Vec<PurchaseRecord> = Vec::new();
        assert_eq!(aggregate(&records), Totals::default());
        assert_eq!(purchase_totals(&records), PurchaseTotals::default());
    }

    #[test]
    fn sums_are_exact() {
        let records = vec![
            purchase("0.1", "0", "0", 1),
            purchase("0.2", "0", "5", 2),
            purchase("1500.50", "0", "0", 3),
        ];
        let totals = aggregate(&records);
        assert_eq!(totals.total_value, dec("1500.80"));
        assert_eq!(totals.total_count, 6);
        assert_eq!(totals.total_secondary, dec("5"));
    }

    #[test]
    fn credit_is_total_minus_cash() {
        let records = vec![purchase("1000", "400", "100", 1), purchase("500", "500", "0", 1)];
        let totals = purchase_totals(&records);
        assert_eq!(totals.purchases, dec("1500"));
        assert_eq!(totals.cash, dec("900"));
        assert_eq!(totals.credit, dec("600"));
        assert_eq!(totals.outstanding, dec("100"));
    }

    #[test]
    fn negative_credit_passes_through() {
        let records = vec![purchase("300", "800", "0", 1)];
        assert_eq!(purchase_totals(&records).credit, dec("-500"));
    }

    #[test]
    fn extreme_amounts_saturate_instead_of_overflowing() {
        let mut huge = purchase("1", "0", "0", 1);
        huge.cash_purchases = Decimal::MAX;
        huge.total_purchase_value = Decimal::MIN;

        let totals = purchase_totals(&[huge]);
        assert_eq!(totals.credit, Decimal::MIN);
    }

    #[test]
    fn products_count_quantity_and_times_sold() {
        let products = vec![
            ProductRecord {
                product_id: "p1".into(),
                product_name: "Gypsum Board".into(),
                category_name: "Boards".into(),
                times_sold: 3,
                total_quantity: 40,
                total_revenue: dec("12000"),
            },
            ProductRecord {
                product_id: "p2".into(),
                product_name: "Cove Light".into(),
                category_name: "Lighting".into(),
                times_sold: 2,
                total_quantity: 10,
                total_revenue: dec("8000"),
            },
        ];
        let totals = aggregate(&products);
        assert_eq!(totals.total_value, dec("20000"));
        assert_eq!(totals.total_count, 50);
        assert_eq!(totals.total_secondary, dec("5"));
    }
}
