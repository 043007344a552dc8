use crate::purchase::{PurchaseStatus, StatusFilter};

/// Page-size cap sent with every purchase-history request.
pub const PURCHASE_PAGE_LIMIT: u32 = 50;

/// Query parameters for `GET /purchase`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseQuery {
    pub status: Option<PurchaseStatus>,
    pub limit: u32,
}

impl PurchaseQuery {
    pub fn for_filter(filter: StatusFilter) -> Self {
        Self {
            status: filter.status(),
            limit: PURCHASE_PAGE_LIMIT,
        }
    }

    /// Unencoded `(key, value)` pairs in request order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(status) = self.status {
            pairs.push(("status", status.label().to_string()));
        }
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }
}

impl Default for PurchaseQuery {
    fn default() -> Self {
        Self::for_filter(StatusFilter::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_omits_status() {
        let pairs = PurchaseQuery::for_filter(StatusFilter::All).to_pairs();
        assert_eq!(pairs, vec![("limit", "50".to_string())]);
    }

    #[test]
    fn test_status_matches_selected_filter() {
        for filter in StatusFilter::OPTIONS.into_iter().skip(1) {
            let pairs = PurchaseQuery::for_filter(filter).to_pairs();
            assert_eq!(pairs[0], ("status", filter.label().to_string()));
            assert_eq!(pairs[1], ("limit", "50".to_string()));
        }
    }

    #[test]
    fn test_label_sent_verbatim() {
        let query = PurchaseQuery::for_filter(StatusFilter::Only(PurchaseStatus::ReturnAndRefund));
        assert_eq!(query.to_pairs()[0].1, "Return & Refund");
        assert_eq!(query.limit, PURCHASE_PAGE_LIMIT);
    }
}
