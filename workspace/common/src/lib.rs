//! Transport types and view logic shared by the storefront frontend.
//! Everything here is plain Rust so the purchase feed, the auth gate and the
//! formatters can be exercised without a browser.

mod auth;
mod dashboard;
mod feed;
mod format;
mod purchase;
mod query;

pub use auth::{AuthGate, AuthState, AuthUser, SessionResponse};
pub use dashboard::{MONTHLY_SALES, MetricCard, MonthlySales, SALES_BAR_COLOR, SUMMARY_METRICS};
pub use feed::{FeedState, FetchTicket, PurchaseFeed};
pub use format::{DEFAULT_CURRENCY, absolute_date, format_price, relative_time, sentence_case};
pub use purchase::{
    LineItem, Purchase, PurchaseList, PurchaseStatus, StatusFilter, parse_order_date,
    sort_by_order_date_desc,
};
pub use query::{PURCHASE_PAGE_LIMIT, PurchaseQuery};
