//! Display state of the purchase list.
//!
//! Every request is issued against a [`FetchTicket`]. Only the outcome carrying
//! the most recently issued ticket is applied, so a slow response for an
//! earlier filter can never replace the results of the current one.

use crate::purchase::{Purchase, PurchaseList, StatusFilter, sort_by_order_date_desc};
use crate::query::PurchaseQuery;

/// Identifies one purchase request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub filter: StatusFilter,
}

impl FetchTicket {
    pub fn query(&self) -> PurchaseQuery {
        PurchaseQuery::for_filter(self.filter)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    /// No request issued yet.
    Idle,
    Loading,
    /// Sorted newest first.
    Ready(Vec<Purchase>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseFeed {
    filter: StatusFilter,
    generation: u64,
    state: FeedState,
}

impl Default for PurchaseFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl PurchaseFeed {
    pub fn new() -> Self {
        Self {
            filter: StatusFilter::All,
            generation: 0,
            state: FeedState::Idle,
        }
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Purchases currently on display; empty unless the last request succeeded.
    pub fn purchases(&self) -> &[Purchase] {
        match &self.state {
            FeedState::Ready(purchases) => purchases,
            _ => &[],
        }
    }

    /// Starts a request for `filter`, superseding any request in flight.
    pub fn select_filter(&mut self, filter: StatusFilter) -> FetchTicket {
        self.filter = filter;
        self.generation += 1;
        self.state = FeedState::Loading;
        tracing::debug!(
            generation = self.generation,
            filter = filter.label(),
            "Issuing purchase request"
        );
        FetchTicket {
            generation: self.generation,
            filter,
        }
    }

    /// Re-issues the request for the current filter.
    pub fn reload(&mut self) -> FetchTicket {
        self.select_filter(self.filter)
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation && ticket.filter == self.filter
    }

    /// Applies a request outcome. Returns `false` when the ticket was
    /// superseded and the outcome dropped.
    pub fn resolve(&mut self, ticket: FetchTicket, outcome: Result<PurchaseList, String>) -> bool {
        if !self.is_current(&ticket) {
            tracing::warn!(
                stale = ticket.generation,
                current = self.generation,
                filter = ticket.filter.label(),
                "Dropping superseded purchase response"
            );
            return false;
        }

        self.state = match outcome {
            Ok(list) => {
                let mut purchases = list.items;
                sort_by_order_date_desc(&mut purchases);
                FeedState::Ready(purchases)
            }
            Err(err) => FeedState::Failed(err),
        };
        true
    }
}
