//! Fixed figures shown on the admin dashboard.

/// One summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: &'static str,
    /// Font Awesome class.
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySales {
    pub month: &'static str,
    pub sales: u32,
}

pub const SUMMARY_METRICS: [MetricCard; 4] = [
    MetricCard {
        title: "Total Sales",
        value: "₱120,000",
        icon: "fas fa-coins",
    },
    MetricCard {
        title: "Total Orders",
        value: "1,245",
        icon: "fas fa-receipt",
    },
    MetricCard {
        title: "Total Products",
        value: "320",
        icon: "fas fa-box",
    },
    MetricCard {
        title: "Total Users",
        value: "540",
        icon: "fas fa-users",
    },
];

pub const MONTHLY_SALES: [MonthlySales; 6] = [
    MonthlySales {
        month: "Jan",
        sales: 400,
    },
    MonthlySales {
        month: "Feb",
        sales: 300,
    },
    MonthlySales {
        month: "Mar",
        sales: 500,
    },
    MonthlySales {
        month: "Apr",
        sales: 700,
    },
    MonthlySales {
        month: "May",
        sales: 600,
    },
    MonthlySales {
        month: "Jun",
        sales: 800,
    },
];

pub const SALES_BAR_COLOR: &str = "#4CAF50";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_monthly_sales_fits_one_year() {
        assert!(MONTHLY_SALES.len() <= 12);
        let months: HashSet<&str> = MONTHLY_SALES.iter().map(|m| m.month).collect();
        assert_eq!(months.len(), MONTHLY_SALES.len());
    }

    #[test]
    fn test_summary_metrics() {
        let titles: Vec<&str> = SUMMARY_METRICS.iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Total Sales", "Total Orders", "Total Products", "Total Users"]);
    }
}
