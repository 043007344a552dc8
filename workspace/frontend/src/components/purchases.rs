mod purchase_card;
mod status_filter;
mod view;

pub use purchase_card::PurchaseCard;
pub use status_filter::StatusFilterBar;
pub use view::{PurchaseHistory, PurchaseResults};
