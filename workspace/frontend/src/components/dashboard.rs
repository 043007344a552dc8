mod chart;
mod stats;
mod view;

pub use chart::MonthlySalesChart;
pub use stats::SummaryCards;
pub use view::{AdminDashboard, DashboardContent};
