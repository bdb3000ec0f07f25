//! Report view model: totals, ranking, search and display formatting over
//! report rows already computed by the reporting API.
//!
//! Everything here is pure and synchronous.

pub mod aggregate;
pub mod format;
pub mod rank;
pub mod search;

pub use aggregate::{aggregate, purchase_totals, Aggregate, PurchaseTotals, Totals};
pub use format::{format_count, format_currency, format_number, Amount};
pub use rank::{rank_by_value, sort_purchases, top_n, SortKey, CHART_TOP_N};
pub use search::search;
