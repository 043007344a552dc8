use storefront_common::{FeedState, Purchase};

/// API fetch state enum
#[derive(Clone, PartialEq, Debug)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl From<&FeedState> for FetchState<Vec<Purchase>> {
    fn from(state: &FeedState) -> Self {
        match state {
            FeedState::Idle => Self::NotStarted,
            FeedState::Loading => Self::Loading,
            FeedState::Ready(purchases) => Self::Success(purchases.clone()),
            FeedState::Failed(err) => Self::Error(err.clone()),
        }
    }
}
